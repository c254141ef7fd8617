//! HTTP response types and wire emission.

/// The status codes the server produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    NotFound = 404,
    InternalServerError = 500,
}

impl StatusCode {
    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Represents an HTTP response.
///
/// The produced protocol is fixed: status line, exact `Content-Length`, and
/// `Content-Type: text/plain` — always, in that order. There is no header
/// map because nothing else is ever sent.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// The plain-text response body
    pub body: String,
}

impl Response {
    /// Create a new response with the given status code and body.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Convert the response to wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {code} {reason}\r\nContent-Length: {length}\r\nContent-Type: text/plain\r\n\r\n",
            code = self.status as u16,
            reason = self.status.reason_phrase(),
            length = self.body.len(),
        );

        let mut bytes = Vec::with_capacity(head.len() + self.body.len());
        bytes.extend_from_slice(head.as_bytes());
        bytes.extend_from_slice(self.body.as_bytes());
        bytes
    }
}
