//! Route table - ordered pattern/handler registry with first-match-wins
//! resolution.

use crate::handler::{Handler, HandlerResult};
use crate::navigation::NavigationEvent;
use crate::pattern::{PatternError, RouteParams, RoutePattern};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Plain function handler, as produced by the `#[route]` attribute.
pub type HandlerFn = fn(&NavigationEvent, &RouteParams) -> HandlerResult;

/// Static route description emitted by `#[route("/pattern")]`.
#[derive(Clone, Copy)]
pub struct RouteDef {
    pub pattern: &'static str,
    pub clear_on_match: bool,
    pub handler: HandlerFn,
}

impl fmt::Debug for RouteDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDef")
            .field("pattern", &self.pattern)
            .field("clear_on_match", &self.clear_on_match)
            .finish_non_exhaustive()
    }
}

/// One registered route. Immutable once registered.
#[derive(Clone)]
pub struct RouteEntry {
    pattern: RoutePattern,
    handler: Arc<dyn Handler>,
    clear_on_match: bool,
}

impl RouteEntry {
    #[must_use]
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    #[must_use]
    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }

    /// Whether a successful match discards the views stacked before it.
    #[must_use]
    pub fn clear_on_match(&self) -> bool {
        self.clear_on_match
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("pattern", &self.pattern.as_str())
            .field("clear_on_match", &self.clear_on_match)
            .finish_non_exhaustive()
    }
}

/// Result of resolving a path against the table.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// The first registered entry whose pattern matched
    Route {
        entry: &'a RouteEntry,
        params: RouteParams,
    },
    /// Nothing matched; rendered with the 404 view and never clears the stack
    NotFound,
}

impl Resolution<'_> {
    #[must_use]
    pub fn clear_on_match(&self) -> bool {
        match self {
            Resolution::Route { entry, .. } => entry.clear_on_match,
            Resolution::NotFound => false,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }

    /// Pattern of the matched entry, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Resolution::Route { entry, .. } => Some(entry.pattern.as_str()),
            Resolution::NotFound => None,
        }
    }
}

/// Ordered route registry.
///
/// Registration order is priority order: when two patterns match the same
/// path, the one registered first wins. Duplicate patterns are accepted and
/// the later one is simply shadowed.
#[derive(Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure or function handler.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if `pattern` does not compile; the table is
    /// left unchanged.
    pub fn register<F>(
        &mut self,
        pattern: &str,
        handler: F,
        clear_on_match: bool,
    ) -> Result<&mut Self, PatternError>
    where
        F: Fn(&NavigationEvent, &RouteParams) -> HandlerResult + Send + Sync + 'static,
    {
        self.register_handler(pattern, handler, clear_on_match)
    }

    /// Register any [`Handler`] implementation.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if `pattern` does not compile.
    pub fn register_handler<H: Handler>(
        &mut self,
        pattern: &str,
        handler: H,
        clear_on_match: bool,
    ) -> Result<&mut Self, PatternError> {
        let pattern = RoutePattern::new(pattern)?;
        info!(
            pattern = %pattern,
            clear_on_match = clear_on_match,
            position = self.entries.len(),
            "Route registered"
        );
        self.entries.push(RouteEntry {
            pattern,
            handler: Arc::new(handler),
            clear_on_match,
        });
        Ok(self)
    }

    /// Register a route produced by the `#[route]` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the pattern does not compile.
    pub fn register_def(&mut self, def: RouteDef) -> Result<&mut Self, PatternError> {
        self.register_handler(def.pattern, def.handler, def.clear_on_match)
    }

    /// Find the first entry matching `path`.
    ///
    /// A `None` path (an unparseable route) never matches anything.
    #[must_use]
    pub fn resolve(&self, path: Option<&str>) -> Resolution<'_> {
        let Some(path) = path else {
            debug!("Unparseable route - resolving to not found");
            return Resolution::NotFound;
        };

        self.entries
            .iter()
            .find_map(|entry| {
                entry
                    .pattern
                    .matches(path)
                    .map(|params| Resolution::Route { entry, params })
            })
            .unwrap_or(Resolution::NotFound)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Registered patterns in priority order.
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.pattern.as_str()).collect()
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
