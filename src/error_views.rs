//! Fallback views for unmatched routes (404) and failed handlers (500).

use crate::handler::Fault;
use crate::navigation::NavigationEvent;
use crate::view::View;
use tracing::debug;

pub const NOT_FOUND_TITLE: &str = "404 not found";
pub const INTERNAL_ERROR_TITLE: &str = "500 internal server error";

/// Builds the 404 and 500 views for one router configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorViews {
    /// Append fault details to 500 views
    pub debug: bool,
}

impl ErrorViews {
    #[must_use]
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// View shown when no registered route matches.
    #[must_use]
    pub fn not_found(&self, event: &NavigationEvent) -> View {
        debug!(route = %event.route, "Rendering not-found view");
        View::new(&event.route).title(NOT_FOUND_TITLE)
    }

    /// View shown when a handler fails.
    ///
    /// Fault detail is included only when `debug` is enabled.
    #[must_use]
    pub fn internal_error(&self, event: &NavigationEvent, fault: &Fault) -> View {
        debug!(
            route = %event.route,
            include_detail = self.debug,
            "Rendering internal-error view"
        );
        let view = View::new(&event.route).title(INTERNAL_ERROR_TITLE);
        if self.debug {
            view.text(&fault.detail)
        } else {
            view
        }
    }
}
