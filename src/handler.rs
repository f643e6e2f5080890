//! # Handler Module
//!
//! The contract between the router and user code that produces views.
//!
//! A handler receives the [`NavigationEvent`] and the parameters captured by
//! its route pattern, and returns a [`HandlerResult`]:
//!
//! - `Ok(view)` renders the view;
//! - `Err(Redirect::to(route).into())` asks the router to navigate elsewhere
//!   without rendering anything for the current route;
//! - any other error becomes a 500 view. `?` lifts every
//!   `std::error::Error` directly; `anyhow` errors go through
//!   [`HandlerError::fault`].
//!
//! [`invoke`] runs a handler and folds all of that, including a panic inside
//! the handler, into a single [`Outcome`] the router matches on.
//!
//! ```rust
//! use viewrouter::handler::{HandlerResult, Redirect};
//! use viewrouter::{NavigationEvent, RouteParams, View};
//!
//! fn class_view(event: &NavigationEvent, params: &RouteParams) -> HandlerResult {
//!     let Some(id) = params.get("id") else {
//!         return Err(Redirect::to("/").into());
//!     };
//!     let id: u32 = id.parse()?;
//!     Ok(View::new(&event.route).text(format!("class {id}")))
//! }
//! ```

use crate::navigation::NavigationEvent;
use crate::pattern::RouteParams;
use crate::view::View;
use std::backtrace::Backtrace;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::error;

/// Result type returned by every handler.
pub type HandlerResult = Result<View, HandlerError>;

/// Produces a view for a matched route.
pub trait Handler: Send + Sync + 'static {
    fn handle(&self, event: &NavigationEvent, params: &RouteParams) -> HandlerResult;
}

impl<F> Handler for F
where
    F: Fn(&NavigationEvent, &RouteParams) -> HandlerResult + Send + Sync + 'static,
{
    fn handle(&self, event: &NavigationEvent, params: &RouteParams) -> HandlerResult {
        self(event, params)
    }
}

/// Request to navigate to another route instead of rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub route: String,
}

impl Redirect {
    pub fn to(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
        }
    }
}

/// Why a handler did not return a view.
#[derive(Debug)]
pub enum HandlerError {
    /// Controlled re-navigation; never shown to the user as an error
    Redirect(Redirect),
    /// Anything else that went wrong while producing the view
    Fault(anyhow::Error),
}

impl HandlerError {
    pub fn redirect(route: impl Into<String>) -> Self {
        HandlerError::Redirect(Redirect::to(route))
    }

    /// Wrap any error as a fault; use with `map_err` on `anyhow::Result`.
    pub fn fault(err: impl Into<anyhow::Error>) -> Self {
        HandlerError::Fault(err.into())
    }
}

impl From<Redirect> for HandlerError {
    fn from(redirect: Redirect) -> Self {
        HandlerError::Redirect(redirect)
    }
}

impl<E> From<E> for HandlerError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        HandlerError::Fault(anyhow::Error::new(err))
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::Redirect(r) => write!(f, "redirect to {}", r.route),
            HandlerError::Fault(e) => write!(f, "{e}"),
        }
    }
}

/// Diagnostic record of a failed view production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    /// One-line summary
    pub message: String,
    /// Full error chain and backtrace; only ever shown in debug mode
    pub detail: String,
}

impl Fault {
    pub fn new(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: detail.into(),
        }
    }

    fn from_error(err: &anyhow::Error) -> Self {
        // `{:?}` on anyhow renders the cause chain plus the captured backtrace
        Self::new(err.to_string(), format!("{err:?}"))
    }

    fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "handler panicked".to_string());
        let backtrace = Backtrace::capture();
        Self::new(
            format!("handler panicked: {message}"),
            format!("handler panicked: {message}\n\n{backtrace}"),
        )
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// What invoking a handler produced.
#[derive(Debug)]
pub enum Outcome {
    Rendered(View),
    Redirect(String),
    Faulted(Fault),
}

/// Run a handler, converting its result (or a panic) into an [`Outcome`].
///
/// Panics are caught so one broken view cannot take the session down.
pub fn invoke(handler: &dyn Handler, event: &NavigationEvent, params: &RouteParams) -> Outcome {
    match catch_unwind(AssertUnwindSafe(|| handler.handle(event, params))) {
        Ok(Ok(view)) => Outcome::Rendered(view),
        Ok(Err(HandlerError::Redirect(r))) => Outcome::Redirect(r.route),
        Ok(Err(HandlerError::Fault(err))) => Outcome::Faulted(Fault::from_error(&err)),
        Err(panic) => {
            let fault = Fault::from_panic(panic.as_ref());
            // H3: Handler panic caught
            error!(
                route = %event.route,
                panic_message = %fault.message,
                "Handler panicked - converted to fault"
            );
            Outcome::Faulted(fault)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> NavigationEvent {
        NavigationEvent::new("/x")
    }

    #[test]
    fn test_rendered() {
        let h = |e: &NavigationEvent, _: &RouteParams| -> HandlerResult { Ok(View::new(&e.route)) };
        match invoke(&h, &event(), &RouteParams::new()) {
            Outcome::Rendered(v) => assert_eq!(v.route, "/x"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_redirect() {
        let h = |_: &NavigationEvent, _: &RouteParams| -> HandlerResult {
            Err(Redirect::to("/target").into())
        };
        assert!(matches!(
            invoke(&h, &event(), &RouteParams::new()),
            Outcome::Redirect(r) if r == "/target"
        ));
    }

    #[test]
    fn test_question_mark_lifts_std_errors() {
        let h = |_: &NavigationEvent, p: &RouteParams| -> HandlerResult {
            let id: u32 = p.get("id").unwrap_or("abc").parse()?;
            Ok(View::new(format!("/{id}")))
        };
        match invoke(&h, &event(), &RouteParams::new()) {
            Outcome::Faulted(f) => assert!(f.message.contains("invalid digit")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_anyhow_fault_keeps_context_in_detail() {
        use anyhow::Context;
        let h = |_: &NavigationEvent, _: &RouteParams| -> HandlerResult {
            let res: Result<(), std::io::Error> =
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
            res.context("loading class").map_err(HandlerError::fault)?;
            Ok(View::new("/"))
        };
        match invoke(&h, &event(), &RouteParams::new()) {
            Outcome::Faulted(f) => {
                assert_eq!(f.message, "loading class");
                assert!(f.detail.contains("missing"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_panic_becomes_fault() {
        let h = |_: &NavigationEvent, _: &RouteParams| -> HandlerResult { panic!("boom") };
        match invoke(&h, &event(), &RouteParams::new()) {
            Outcome::Faulted(f) => assert_eq!(f.message, "handler panicked: boom"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
