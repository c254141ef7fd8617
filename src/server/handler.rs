//! Named handlers and the registry that resolves them.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::server::error::Error;

/// The parameter object handed to a handler: a string-keyed JSON object built
/// from the request's query parameters.
pub type HandlerParams = Map<String, Value>;

/// Type alias for a boxed future that resolves to the handler's text body.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<String, Error>> + Send>>;

/// Type alias for a handler function that takes a parameter object and
/// returns a HandlerFuture.
pub type HandlerFn = Arc<dyn Fn(HandlerParams) -> HandlerFuture + Send + Sync>;

/// A registry of named handlers.
///
/// Routes reference handlers by name; the dispatcher resolves the name
/// through this registry on every dispatch. Handlers are owned by the
/// embedding application — the server only knows how to call them with a
/// parameter object and capture the returned text.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, HandlerFn>,
}

impl HandlerRegistry {
    /// Register a handler under a name.
    ///
    /// Registering the same name again replaces the previous handler: the
    /// registry is host configuration, not part of the routing contract.
    pub fn register<F, Fut>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(HandlerParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, Error>> + Send + 'static,
    {
        let handler = Arc::new(move |params: HandlerParams| -> HandlerFuture {
            Box::pin(handler(params))
        });
        self.handlers.insert(name.into(), handler);
    }

    /// Resolve a handler by name.
    pub fn resolve(&self, name: &str) -> Option<HandlerFn> {
        self.handlers.get(name).cloned()
    }

    /// Discard every registered handler.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}
