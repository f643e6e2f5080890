//! Router core - the per-session navigation state machine.

use crate::config::RouterConfig;
use crate::error_views::ErrorViews;
use crate::handler::{invoke, Fault, Outcome};
use crate::host::{Host, HostEvent};
use crate::navigation::{NavigationEvent, NavigationStack, ParsedRoute, ViewPopEvent};
use crate::view::View;
use std::sync::Arc;
use tracing::{debug, error, info, info_span, warn, Span};

use super::table::{Resolution, RouteTable};

/// Where the router is within the handling of one event.
///
/// Events run to completion, so outside of a handler call the router is
/// always observed `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Idle,
    /// Route change received, matching in progress
    Resolving,
    /// Handler invoked, stack about to change
    Rendering,
    PoppingView,
}

/// What handling one event did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed (lifecycle events, or the route is already displayed)
    Unchanged,
    /// A handler view was pushed
    Rendered,
    /// The 404 view was pushed
    NotFound,
    /// The 500 view was pushed
    Faulted,
    /// Navigation was handed to another route; nothing was pushed
    Redirected(String),
    /// The top view was popped; the host was sent to `target`
    Popped { target: Option<String> },
}

/// Session router: owns the navigation stack and drives the host.
///
/// Routers share one [`RouteTable`] and [`RouterConfig`] per application and
/// are created per session, usually through
/// [`RouterFactory::bootstrap`](crate::app::RouterFactory::bootstrap).
pub struct Router<H: Host> {
    table: Arc<RouteTable>,
    config: Arc<RouterConfig>,
    error_views: ErrorViews,
    stack: NavigationStack,
    host: H,
    state: RouterState,
    /// Redirects issued since the last pushed view
    redirects: usize,
    span: Span,
}

impl<H: Host> Router<H> {
    /// Bind a new router to `host`. The stack starts empty; nothing is
    /// navigated until [`Router::go`] or a route-change event arrives.
    pub fn new(table: Arc<RouteTable>, config: Arc<RouterConfig>, host: H) -> Self {
        let session_id = host.session_id();
        let span = info_span!("router", router = %config.name, session_id = %session_id);
        span.in_scope(|| {
            debug!(
                routes_count = table.len(),
                debug = config.debug,
                force_clear = config.force_clear,
                "Router created"
            );
        });

        Self {
            error_views: ErrorViews::new(config.debug),
            table,
            config,
            stack: NavigationStack::new(),
            host,
            state: RouterState::Idle,
            redirects: 0,
            span,
        }
    }

    #[must_use]
    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    #[must_use]
    pub fn state(&self) -> RouterState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Route one host event to its hook.
    pub fn dispatch(&mut self, event: HostEvent) -> Transition {
        match event {
            HostEvent::Connect => {
                self.on_connect();
                Transition::Unchanged
            }
            HostEvent::Disconnect => {
                self.on_disconnect();
                Transition::Unchanged
            }
            HostEvent::RouteChange(event) => self.on_route_change(&event),
            HostEvent::ViewPop(event) => Transition::Popped {
                target: self.on_view_pop(&event),
            },
        }
    }

    pub fn on_connect(&mut self) {
        let _entered = self.span.clone().entered();
        info!(stack_views = self.stack.len(), "Session connected");
    }

    pub fn on_disconnect(&mut self) {
        let _entered = self.span.clone().entered();
        info!(stack_views = self.stack.len(), "Session disconnected");
    }

    /// Start a top-level navigation. The host reports it back as a route
    /// change.
    pub fn go(&mut self, route: &str) {
        let _entered = self.span.clone().entered();
        debug!(route = %route, "Navigation requested");
        self.host.go(route);
    }

    /// Replay navigations the host has buffered until none remain.
    ///
    /// Returns how many route changes were handled.
    pub fn settle(&mut self) -> usize {
        let mut handled = 0;
        while let Some(route) = self.host.next_navigation() {
            self.on_route_change(&NavigationEvent::new(route));
            handled += 1;
        }
        handled
    }

    /// Handle a route change: match, invoke, mutate the stack, re-render.
    pub fn on_route_change(&mut self, event: &NavigationEvent) -> Transition {
        let _entered = self.span.clone().entered();
        self.state = RouterState::Resolving;

        // N1: Route change received
        debug!(
            route = %event.route,
            stack_views = self.stack.len(),
            "Route change received"
        );

        let target = ParsedRoute::parse(&event.route);
        let current = self.stack.top().map(|v| ParsedRoute::parse(&v.route));
        debug!(
            target_path = ?target.path,
            target_query = ?target.query,
            current_path = ?current.as_ref().and_then(|c| c.path.as_deref()),
            "Route parsed"
        );

        // N2: Same route as the displayed view (host echo of our own navigation)
        if current.as_ref() == Some(&target) {
            debug!(route = %event.route, "Route unchanged - ignoring");
            self.redirects = 0;
            self.state = RouterState::Idle;
            return Transition::Unchanged;
        }

        // Query parameters take no part in matching.
        let (outcome, clear_on_match, not_found) = if self.redirects > self.config.max_redirects {
            let fault = Fault::new(
                format!("redirect limit of {} exceeded", self.config.max_redirects),
                format!(
                    "redirect limit of {} exceeded while navigating to {}",
                    self.config.max_redirects, event.route
                ),
            );
            (Outcome::Faulted(fault), false, false)
        } else {
            let resolution = self.table.resolve(target.path.as_deref());
            let clear_on_match = resolution.clear_on_match();
            let not_found = resolution.is_not_found();

            // N3: Route resolved
            info!(
                route = %event.route,
                pattern = resolution.pattern().unwrap_or("<not found>"),
                clear_on_match = clear_on_match,
                "Route resolved"
            );

            self.state = RouterState::Rendering;
            let outcome = match &resolution {
                Resolution::Route { entry, params } => {
                    debug!(path_params = ?params, "Invoking view handler");
                    invoke(entry.handler(), event, params)
                }
                Resolution::NotFound => Outcome::Rendered(self.error_views.not_found(event)),
            };
            (outcome, clear_on_match, not_found)
        };

        let (view, transition) = match outcome {
            Outcome::Rendered(view) => {
                if clear_on_match {
                    let dropped = self.stack.clear();
                    debug!(dropped_views = dropped, "Cleared views");
                }
                let transition = if not_found {
                    Transition::NotFound
                } else {
                    Transition::Rendered
                };
                (view, transition)
            }
            Outcome::Redirect(to) => {
                self.redirects += 1;
                // N4: Redirect - nothing is pushed for this route
                info!(
                    from = %event.route,
                    to = %to,
                    consecutive_redirects = self.redirects,
                    "Redirecting"
                );
                self.host.go(&to);
                self.state = RouterState::Idle;
                return Transition::Redirected(to);
            }
            Outcome::Faulted(fault) => {
                // N5: Handler fault - stack is kept so the user can go back
                error!(
                    route = %event.route,
                    error = %fault.message,
                    detail = %fault.detail,
                    "View handler failed"
                );
                (
                    self.error_views.internal_error(event, &fault),
                    Transition::Faulted,
                )
            }
        };

        if self.config.force_clear {
            let dropped = self.stack.clear();
            debug!(dropped_views = dropped, "Force-cleared views");
        }

        self.push(view);
        transition
    }

    /// Handle a view pop: drop the top view and send the host to the view
    /// now on top, or back to the popped view's own route if nothing is
    /// left.
    ///
    /// Returns the navigation target, or `None` when the stack was already
    /// empty.
    pub fn on_view_pop(&mut self, event: &ViewPopEvent) -> Option<String> {
        let _entered = self.span.clone().entered();
        self.state = RouterState::PoppingView;
        debug!(requested = ?event.route, stack_views = self.stack.len(), "View pop received");

        let Some(popped) = self.stack.pop() else {
            warn!("View pop with no stacked views - ignoring");
            self.state = RouterState::Idle;
            return None;
        };

        let target = match self.stack.top() {
            Some(top) => top.route.clone(),
            None => popped.route.clone(),
        };

        info!(
            popped = %popped.route,
            target = %target,
            stack_views = self.stack.len(),
            "View popped"
        );

        self.host.update(self.stack.views());
        self.host.go(&target);
        self.state = RouterState::Idle;
        Some(target)
    }

    fn push(&mut self, view: View) {
        let route = view.route.clone();
        self.stack.push(view);
        self.redirects = 0;
        self.host.update(self.stack.views());
        self.state = RouterState::Idle;

        // N6: View pushed
        info!(
            route = %route,
            stack_views = self.stack.len(),
            "View pushed"
        );
    }
}
