//! # App Module
//!
//! Application-level wiring: one [`RouterFactory`] per application holds the
//! route table and configuration, and bootstraps a [`Router`] for every
//! session that connects.
//!
//! ```rust
//! use viewrouter::host::MemoryHost;
//! use viewrouter::{RouterFactory, View};
//!
//! let app = RouterFactory::builder()
//!     .route("/", |e, _| Ok(View::new(&e.route).title("Home")))
//!     .route_with("/class/:id", false, |e, p| {
//!         Ok(View::new(&e.route).text(format!("id = {}", p.get("id").unwrap_or("?"))))
//!     })
//!     .force_clear(false)
//!     .build()
//!     .unwrap();
//!
//! let mut router = app.bootstrap(MemoryHost::new());
//! router.settle();
//! assert_eq!(router.stack().routes(), vec!["/"]);
//! ```

use crate::config::RouterConfig;
use crate::handler::HandlerResult;
use crate::host::Host;
use crate::navigation::NavigationEvent;
use crate::pattern::{PatternError, RouteParams};
use crate::router::{RouteDef, RouteTable, Router};
use std::sync::Arc;
use tracing::info;

/// Shared, immutable routing setup for every session of one application.
#[derive(Debug, Clone)]
pub struct RouterFactory {
    table: Arc<RouteTable>,
    config: Arc<RouterConfig>,
}

impl RouterFactory {
    pub fn new(table: RouteTable, config: RouterConfig) -> Self {
        Self {
            table: Arc::new(table),
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Create a router for a new session without navigating anywhere.
    pub fn session<H: Host>(&self, host: H) -> Router<H> {
        Router::new(Arc::clone(&self.table), Arc::clone(&self.config), host)
    }

    /// Create a router for a new session and navigate it to the configured
    /// initial route.
    pub fn bootstrap<H: Host>(&self, host: H) -> Router<H> {
        let mut router = self.session(host);
        info!(
            session_id = %router.host().session_id(),
            init_route = %self.config.init_route,
            "Session bootstrapped"
        );
        router.go(&self.config.init_route);
        router
    }
}

/// Fluent setup for a [`RouterFactory`].
///
/// Pattern errors are collected and reported by [`RouterBuilder::build`], so
/// registration calls can be chained.
#[derive(Debug, Default)]
pub struct RouterBuilder {
    table: RouteTable,
    config: RouterConfig,
    error: Option<PatternError>,
}

impl RouterBuilder {
    /// Register a route that clears the stack when matched.
    #[must_use]
    pub fn route<F>(self, pattern: &str, handler: F) -> Self
    where
        F: Fn(&NavigationEvent, &RouteParams) -> HandlerResult + Send + Sync + 'static,
    {
        self.route_with(pattern, true, handler)
    }

    /// Register a route with an explicit clear-on-match policy.
    #[must_use]
    pub fn route_with<F>(mut self, pattern: &str, clear_on_match: bool, handler: F) -> Self
    where
        F: Fn(&NavigationEvent, &RouteParams) -> HandlerResult + Send + Sync + 'static,
    {
        if self.error.is_none() {
            if let Err(e) = self.table.register(pattern, handler, clear_on_match) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Register a route declared with `#[route]`.
    #[must_use]
    pub fn route_def(mut self, def: RouteDef) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.table.register_def(def) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    #[must_use]
    pub fn force_clear(mut self, force_clear: bool) -> Self {
        self.config.force_clear = force_clear;
        self
    }

    #[must_use]
    pub fn init_route(mut self, route: impl Into<String>) -> Self {
        self.config.init_route = route.into();
        self
    }

    #[must_use]
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.config.max_redirects = max;
        self
    }

    /// Finish setup.
    ///
    /// # Errors
    ///
    /// Returns the first [`PatternError`] hit while registering routes.
    pub fn build(self) -> Result<RouterFactory, PatternError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        info!(
            routes_count = self.table.len(),
            routes = ?self.table.patterns(),
            router = %self.config.name,
            "Routing table loaded"
        );
        Ok(RouterFactory::new(self.table, self.config))
    }
}
