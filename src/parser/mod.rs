//! HTTP parser module.
//!
//! This module provides functionality for parsing the restricted HTTP request
//! subset the server understands: a request line with a GET or POST method, a
//! request target, and nothing else. Headers and body bytes after the target
//! are ignored.

mod error;
mod method;
mod request;
mod tests;

// Re-export public items
pub use error::Error;
pub use method::Method;
pub use request::Request;

// Re-export the parse_request function
pub use request::parse_request;
