//! An embeddable, minimal HTTP server with URL-keyed response caching.
//!
//! This library accepts TCP connections one at a time, parses a restricted
//! HTTP request subset (GET/POST, path, query-string parameters), dispatches
//! to a handler registered under the request path, and returns a plain-text
//! response. Handler results are cached by the full request URL, so repeated
//! identical requests skip the handler entirely.
//!
//! # Features
//!
//! - Hand-rolled single-pass request-line parser (no headers, no body)
//! - Exact-match routing from path to named handler
//! - Forever-cache of responses keyed by raw URL, query string included
//! - Strictly sequential connection handling: no locks, no races
//! - In-band shutdown via the reserved `/_exit` URL
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use memohttp::parse_request;
//!
//! let request_bytes = b"GET /search?q=rust&page=1 HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! match parse_request(request_bytes) {
//!     Ok(request) => {
//!         assert_eq!(request.path, "/search");
//!         assert_eq!(request.raw_url, "/search?q=rust&page=1");
//!         assert_eq!(request.param("q"), Some("rust"));
//!     }
//!     Err(err) => {
//!         println!("Error parsing request: {}", err);
//!     }
//! }
//! ```
//!
//! ## Running a server
//!
//! ```no_run
//! use memohttp::{HttpServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut server = HttpServer::new(ServerConfig::default());
//!
//!     server.register_handler("hello", |params| async move {
//!         let name = params
//!             .get("name")
//!             .and_then(|v| v.as_str())
//!             .unwrap_or("World");
//!         Ok(format!("Hello, {name}!"))
//!     });
//!     server.register_route("/hello", "hello");
//!
//!     // Serves until a client requests /_exit or Ctrl+C is received.
//!     server.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! See the `demos` directory for more complete examples.

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request, Error as ParserError, Method, Request};
pub use server::{
    Error as ServerError, HandlerParams, HttpServer, Response, ServerConfig, ServerState,
    StatusCode,
};
