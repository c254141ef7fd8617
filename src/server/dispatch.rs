//! Request dispatch: cache lookup, route lookup, handler invocation.

use log::info;

use crate::parser::Request;
use crate::server::cache::ResponseCache;
use crate::server::error::Error;
use crate::server::handler::HandlerRegistry;
use crate::server::response::{Response, StatusCode};
use crate::server::routes::RouteTable;

/// The reserved URL that stops the accept loop.
pub const EXIT_URL: &str = "/_exit";

/// The state owned by one server instance: routes, the response cache, and
/// the handler registry.
///
/// These structures persist across connections for the lifetime of the
/// server run, in contrast to per-connection data which is scoped to a single
/// cycle. Handling is strictly sequential, so no locking is needed.
#[derive(Default)]
pub struct ServerState {
    /// The registered routes.
    pub routes: RouteTable,
    /// Cached responses keyed by raw URL.
    pub cache: ResponseCache,
    /// Named handlers owned by the embedding application.
    pub registry: HandlerRegistry,
}

/// The outcome of dispatching a parsed request.
#[derive(Debug)]
pub enum Dispatch {
    /// Send this response and keep accepting connections.
    Reply(Response),
    /// Stop accepting connections. No response is sent.
    Shutdown,
}

impl ServerState {
    /// Create state with no routes, handlers, or cached responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard routes, cached responses, and registered handlers. Everything
    /// must be re-registered before the server is started again.
    pub fn reset(&mut self) {
        self.routes.clear();
        self.cache.clear();
        self.registry.clear();
    }

    /// Dispatch a parsed request.
    ///
    /// `/_exit` (matched against the raw URL, so `/_exit?x=1` is an ordinary
    /// request) short-circuits before any route or cache lookup. A route miss
    /// is a 404 reply. On a route hit the cache is consulted by raw URL; only
    /// a cache miss invokes the handler, and only that path stores into the
    /// cache.
    ///
    /// A handler that cannot be resolved or that fails is an error for this
    /// connection's cycle; the caller decides how loudly to report it.
    pub async fn dispatch(&mut self, request: &Request) -> Result<Dispatch, Error> {
        if request.raw_url == EXIT_URL {
            return Ok(Dispatch::Shutdown);
        }

        let Some(handler_name) = self.routes.lookup(&request.path) else {
            return Ok(Dispatch::Reply(Response::new(
                StatusCode::NotFound,
                "Not found",
            )));
        };

        if let Some(cached) = self.cache.lookup(&request.raw_url) {
            info!("Cached request.");
            return Ok(Dispatch::Reply(Response::new(StatusCode::Ok, cached)));
        }

        let handler = self
            .registry
            .resolve(handler_name)
            .ok_or_else(|| Error::HandlerNotFound(handler_name.to_string()))?;

        let body = handler(request.params_json()).await?;
        self.cache.store(&request.raw_url, &body);

        Ok(Dispatch::Reply(Response::new(StatusCode::Ok, body)))
    }
}
