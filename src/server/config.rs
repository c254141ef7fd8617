//! Server configuration.

use std::net::SocketAddr;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The read buffer size. A request that fills the whole buffer in one
    /// read is rejected as too long without being parsed.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            read_buffer_size: 4096,
        }
    }
}
