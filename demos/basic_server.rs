//! A basic server example demonstrating handler registration and routing.
//!
//! Run with `RUST_LOG=info cargo run --example basic_server`, then:
//!
//! ```text
//! curl 'http://127.0.0.1:8081/'
//! curl 'http://127.0.0.1:8081/hello?name=Ada'
//! curl 'http://127.0.0.1:8081/_exit'   # stops the server
//! ```

use log::info;
use memohttp::{HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let config = ServerConfig {
        addr: "127.0.0.1:8081".parse()?,
        read_buffer_size: 4096,
    };

    let mut server = HttpServer::new(config);

    // Handlers are registered by name, then routes bind paths to those names.
    server.register_handler("index", |_params| async move {
        Ok("Hello, World!".to_string())
    });

    server.register_handler("hello", |params| async move {
        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("World")
            .to_string();
        Ok(format!("Hello, {name}!"))
    });

    server.register_route("/", "index");
    server.register_route("/hello", "hello");

    info!("Starting server on http://127.0.0.1:8081");

    // Serves one connection at a time until /_exit or Ctrl+C.
    server.start().await?;

    Ok(())
}
