//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur during HTTP request parsing.
///
/// Both variants are recoverable: the server reports them to the client as a
/// 500 response with the diagnostic text and keeps accepting connections.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line ended before the method token was delimited by a space.
    /// Carries the bytes that were scanned.
    #[error("Incomplete request: '{0}'")]
    Incomplete(String),

    /// The method token is not GET or POST. Carries the offending token.
    #[error("Unsupported method: '{0}'")]
    UnsupportedMethod(String),
}
