//! Route registration and lookup.

use log::warn;

/// A registered route: an exact path bound to a named handler.
#[derive(Debug, Clone)]
pub struct Route {
    /// The exact path to match.
    pub path: String,
    /// The name of the handler to invoke for this path.
    pub handler_name: String,
}

/// The table of registered routes.
///
/// Lookup is exact string equality over the registered set, scanned in
/// registration order with the first match returned. No normalization is
/// performed: trailing slashes, case, and percent-encoding must match
/// byte-for-byte.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route.
    ///
    /// The first registration for a path wins; registering the same path
    /// again is rejected and logged.
    pub fn register(&mut self, path: impl Into<String>, handler_name: impl Into<String>) {
        let path = path.into();
        if self.lookup(&path).is_some() {
            warn!("Route {path} is already registered; keeping the first registration");
            return;
        }
        self.routes.push(Route {
            path,
            handler_name: handler_name.into(),
        });
    }

    /// Look up the handler name registered for an exact path.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.handler_name.as_str())
    }

    /// Iterate over registered routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// The number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Discard all registered routes.
    pub fn clear(&mut self) {
        self.routes.clear();
    }
}
