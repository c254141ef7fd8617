//! HTTP server implementation.

use std::future::Future;
use std::time::Instant;

use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::signal;

use crate::parser::parse_request;
use crate::server::config::ServerConfig;
use crate::server::dispatch::{Dispatch, ServerState};
use crate::server::error::Error;
use crate::server::handler::HandlerParams;
use crate::server::response::{Response, StatusCode};

/// An HTTP server.
///
/// Connections are handled strictly sequentially: each accepted connection
/// runs through its full read-parse-dispatch-respond cycle before the next
/// one is accepted, so the routes, cache, and registry in [`ServerState`]
/// are never touched concurrently.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// Routes, response cache, and handler registry. Persists across
    /// connections for the whole run.
    pub state: ServerState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            state: ServerState::new(),
        }
    }

    /// Register a named handler.
    ///
    /// Handlers receive a string-keyed parameter object built from the query
    /// string and return a plain-text body. Registration must happen before
    /// [`start`](Self::start).
    pub fn register_handler<F, Fut>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(HandlerParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, Error>> + Send + 'static,
    {
        self.state.registry.register(name, handler);
    }

    /// Register a route binding an exact path to a named handler.
    ///
    /// The first registration for a path wins.
    pub fn register_route(&mut self, path: impl Into<String>, handler_name: impl Into<String>) {
        self.state.routes.register(path, handler_name);
    }

    /// Stop the server's state: discards routes, cached responses, and
    /// registered handlers. Everything must be re-registered before the next
    /// [`start`](Self::start).
    pub fn stop(&mut self) {
        self.state.reset();
        info!("Server state reset.");
    }

    /// Log the registered routes at startup.
    fn display_server_info(&self) {
        info!("Registered routes:");
        for route in self.state.routes.iter() {
            info!("  {path} -> {name}", path = route.path, name = route.handler_name);
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Handle an accept error. Returns true when the loop should stop.
    async fn handle_accept_error(e: std::io::Error) -> bool {
        error!("Error accepting connection: {e}");

        if e.kind() == std::io::ErrorKind::BrokenPipe {
            error!("Critical error accepting connection, shutting down");
            return true;
        }

        // For other errors, wait a bit before retrying
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        false
    }

    /// Start the server and process incoming connections one at a time.
    ///
    /// Returns after a client requests `/_exit` or on Ctrl+C.
    pub async fn start(&mut self) -> Result<(), Error> {
        self.display_server_info();

        let listener = self.setup_listener().await?;

        loop {
            tokio::select! {
                result = signal::ctrl_c() => {
                    match result {
                        Ok(()) => info!("Received Ctrl+C, shutting down"),
                        Err(e) => error!("Error listening for Ctrl+C: {e}"),
                    }
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((mut socket, addr)) => {
                            debug!("Accepted connection from {addr}");
                            match Self::handle_connection(
                                &mut socket,
                                &mut self.state,
                                self.config.read_buffer_size,
                            ).await {
                                Ok(true) => {}
                                Ok(false) => {
                                    info!("Shutting down.");
                                    break;
                                }
                                Err(e) => error!("Error handling connection: {e}"),
                            }
                        }
                        Err(e) => {
                            if Self::handle_accept_error(e).await {
                                break;
                            }
                        }
                    }
                }
            }
        }

        info!("Server stopped accepting connections");
        Ok(())
    }

    /// Handle a single connection: one request/response cycle.
    ///
    /// The read buffer and parsed request are scoped to this call and
    /// released on every exit path. Returns `Ok(false)` exactly when the
    /// request URL was `/_exit`, which closes the connection without a
    /// response and stops the accept loop.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        state: &mut ServerState,
        read_buffer_size: usize,
    ) -> Result<bool, Error> {
        let started = Instant::now();
        let mut buf = vec![0; read_buffer_size];

        // One read, bounded by the buffer. Requests longer than the buffer
        // are not supported.
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(true); // Connection closed by the peer
        }
        if n == read_buffer_size {
            warn!("Rejecting request: read filled the whole {read_buffer_size}-byte buffer");
            let response = Response::new(StatusCode::InternalServerError, "Request is too long.");
            socket.write_all(&response.to_bytes()).await?;
            return Ok(true);
        }

        // Parse errors are recovered: report to the client and keep serving.
        // 404 is reserved for route misses, so these go out as 500.
        let request = match parse_request(&buf[..n]) {
            Ok(req) => req,
            Err(e) => {
                warn!("Failed to parse request: {e}");
                let response = Response::new(StatusCode::InternalServerError, e.to_string());
                socket.write_all(&response.to_bytes()).await?;
                return Ok(true);
            }
        };

        let stayalive = match state.dispatch(&request).await {
            Ok(Dispatch::Reply(response)) => {
                socket.write_all(&response.to_bytes()).await?;
                true
            }
            Ok(Dispatch::Shutdown) => false,
            Err(e) => {
                // Misconfigured route or failing handler: fatal for this
                // cycle only. The client gets a fixed body; the detail stays
                // in the log.
                error!(
                    "Dispatch failed for {method} {url}: {e}",
                    method = request.method,
                    url = request.raw_url
                );
                let response = Response::new(StatusCode::InternalServerError, "Internal server error");
                socket.write_all(&response.to_bytes()).await?;
                return Err(e);
            }
        };

        info!(
            "[{elapsed:.6}s] {method} {url}",
            elapsed = started.elapsed().as_secs_f64(),
            method = request.method,
            url = request.raw_url
        );

        Ok(stayalive)
    }
}
