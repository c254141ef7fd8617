//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur during HTTP server operation.
///
/// A route miss is not represented here: "no matching route" is a normal 404
/// outcome, not an error value.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A route named a handler that is not in the registry. This indicates a
    /// misconfigured route.
    #[error("No handler registered under name: {0}")]
    HandlerNotFound(String),

    /// A handler was invoked and failed.
    #[error("Handler failed: {0}")]
    HandlerFailed(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
