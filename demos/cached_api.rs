//! Demonstrates the response cache: the handler body is computed once per
//! distinct raw URL and replayed forever after, even though the handler's
//! internal counter keeps moving.
//!
//! Run with `RUST_LOG=info cargo run --example cached_api`, then:
//!
//! ```text
//! curl 'http://127.0.0.1:8082/report?region=eu'   # computes, serial 1
//! curl 'http://127.0.0.1:8082/report?region=eu'   # cached, still serial 1
//! curl 'http://127.0.0.1:8082/report?region=us'   # new cache key, serial 2
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::info;
use memohttp::{HttpServer, ServerConfig, ServerError};
use serde::Serialize;

#[derive(Serialize)]
struct Report {
    region: String,
    serial: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut server = HttpServer::new(ServerConfig {
        addr: "127.0.0.1:8082".parse()?,
        read_buffer_size: 4096,
    });

    let serial = Arc::new(AtomicU64::new(0));
    server.register_handler("report", move |params| {
        let serial = serial.clone();
        async move {
            let report = Report {
                region: params
                    .get("region")
                    .and_then(|v| v.as_str())
                    .unwrap_or("all")
                    .to_string(),
                serial: serial.fetch_add(1, Ordering::SeqCst) + 1,
            };
            // The body is plain text on the wire; JSON is just this
            // handler's choice of payload.
            serde_json::to_string(&report).map_err(ServerError::from)
        }
    });
    server.register_route("/report", "report");

    info!("Starting server on http://127.0.0.1:8082");
    server.start().await?;

    Ok(())
}
