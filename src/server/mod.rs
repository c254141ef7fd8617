//! HTTP server implementation for memohttp.
//!
//! This module provides a small, sequential HTTP server: requests are routed
//! by exact path to named handlers, and every handler response is cached
//! under the full request URL for the lifetime of the process.

mod cache;
mod config;
mod dispatch;
mod error;
mod handler;
mod http_server;
mod response;
mod routes;

// Re-export public items
pub use cache::{CacheEntry, ResponseCache};
pub use config::ServerConfig;
pub use dispatch::{Dispatch, ServerState, EXIT_URL};
pub use error::Error;
pub use handler::{HandlerFn, HandlerFuture, HandlerParams, HandlerRegistry};
pub use http_server::HttpServer;
pub use response::{Response, StatusCode};
pub use routes::{Route, RouteTable};
