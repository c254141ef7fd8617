//! HTTP request parsing and representation.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::parser::error::Error;
use crate::parser::method::Method;

/// Represents a parsed HTTP request.
///
/// A request is created fresh from the raw receive buffer for every
/// connection and dropped when the connection cycle ends; nothing in it is
/// retained across requests.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET or POST)
    pub method: Method,
    /// The full request target as sent on the wire (path plus query string).
    /// Used verbatim as the response cache key.
    pub raw_url: String,
    /// The portion of the target before `?`, used as the routing key
    pub path: String,
    /// Query parameters in arrival order. Keys are not required to be unique;
    /// duplicate pairs are preserved.
    pub params: Vec<(String, String)>,
}

impl Request {
    /// Get the value of the first query parameter with the given key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find_map(|(k, v)| if k == key { Some(v.as_str()) } else { None })
    }

    /// Build the parameter object handed to handlers.
    ///
    /// This narrows the ordered pair list into a string-keyed JSON object:
    /// duplicate keys overwrite in encounter order, so the last occurrence of
    /// a key wins in the object even though all pairs are kept in `params`.
    pub fn params_json(&self) -> Map<String, Value> {
        let mut object = Map::new();
        for (key, value) in &self.params {
            object.insert(key.clone(), Value::String(value.clone()));
        }
        object
    }
}

fn span_to_string(span: &[u8]) -> String {
    // The wire bytes are not required to be UTF-8; captured spans are
    // materialized lossily rather than rejected.
    String::from_utf8_lossy(span).into_owned()
}

/// Parse an HTTP request line from a byte slice.
///
/// Scanning stops at the first space after the request target; the HTTP
/// version token, headers, and body may be present in `input` but are never
/// interpreted.
///
/// # Arguments
///
/// * `input` - A byte slice containing the received request bytes
///
/// # Returns
///
/// The parsed request, or an error if the method token is missing or not
/// GET/POST.
pub fn parse_request(input: &[u8]) -> Result<Request, Error> {
    let mut pos = 0;

    // Method: scan forward to the first space.
    while pos < input.len() && input[pos] != b' ' {
        pos += 1;
    }
    if pos == input.len() {
        return Err(Error::Incomplete(span_to_string(input)));
    }
    let method = Method::from_str(&span_to_string(&input[..pos]))?;

    // Skip the single space separating method and target.
    pos += 1;

    // Target: scan byte-by-byte until a space or end of buffer, with a
    // segment-start cursor that resets after every consumed delimiter.
    let url_start = pos;
    let mut segment_start = pos;
    let mut path: Option<String> = None;
    let mut pending_key: Option<String> = None;
    let mut params: Vec<(String, String)> = Vec::new();

    while pos < input.len() && input[pos] != b' ' {
        match input[pos] {
            // Only the first '?' ends the path; later ones are ordinary
            // query-string characters.
            b'?' if path.is_none() => {
                path = Some(span_to_string(&input[segment_start..pos]));
                pos += 1;
                segment_start = pos;
            }
            // '=' always recaptures the pending key, so "a=b=c" ends with
            // pending key "b".
            b'=' => {
                pending_key = Some(span_to_string(&input[segment_start..pos]));
                pos += 1;
                segment_start = pos;
            }
            b'&' => {
                let value = span_to_string(&input[segment_start..pos]);
                if let Some(key) = pending_key.take() {
                    if !key.is_empty() {
                        params.push((key, value));
                    }
                }
                pos += 1;
                segment_start = pos;
            }
            _ => pos += 1,
        }
    }

    let raw_url = span_to_string(&input[url_start..pos]);

    match path {
        // No '?' seen: the whole span is both path and raw URL.
        None => Ok(Request {
            method,
            path: raw_url.clone(),
            raw_url,
            params,
        }),
        Some(path) => {
            // A pending key never terminated by '&' takes the trailing span
            // as its value. A query string with no '=' at all yields no
            // final pair.
            if let Some(key) = pending_key {
                if !key.is_empty() {
                    params.push((key, span_to_string(&input[segment_start..pos])));
                }
            }
            Ok(Request {
                method,
                raw_url,
                path,
                params,
            })
        }
    }
}
