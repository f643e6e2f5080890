//! Bundled demo application driven by `viewrouter walk`.
//!
//! Routes, in priority order:
//!
//! | Pattern | Clears | Behavior |
//! |---|---|---|
//! | `/` | yes | home view |
//! | `/class/:id` | no | shows the captured id |
//! | `/decorator` | no | declared with `#[route]`, shows the query |
//! | `/add_route` | no | links to the 404, redirect and error routes |
//! | `/redirect` | no | redirects home |
//! | `/loop` | no | redirects to itself until the redirect limit trips |
//! | `/error` | no | fails with a fault |

use crate::app::{RouterBuilder, RouterFactory};
use crate::config::RouterConfig;
use crate::handler::{HandlerError, HandlerResult};
use crate::navigation::{NavigationEvent, ParsedRoute};
use crate::pattern::{PatternError, RouteParams};
use crate::route;
use crate::view::View;

fn home(event: &NavigationEvent, _: &RouteParams) -> HandlerResult {
    Ok(View::new(&event.route)
        .title("Home")
        .text("Hello, home!")
        .link("Go to class view", "/class/2"))
}

fn class_view(event: &NavigationEvent, params: &RouteParams) -> HandlerResult {
    let id = params.get("id").unwrap_or_default();
    Ok(View::new(&event.route)
        .title("My View")
        .text(format!("Hello, class view! id = {id}"))
        .link("Go to decorator view", "/decorator?query=1"))
}

#[route("/decorator", clear = false)]
fn decorator(event: &NavigationEvent, _: &RouteParams) -> HandlerResult {
    let query = ParsedRoute::parse(&event.route).query;
    Ok(View::new(&event.route)
        .title("Decorator")
        .text("Hello, decorator view!")
        .text(format!("query = {query:?}"))
        .link("Go to add route view", "/add_route"))
}

fn add_route(event: &NavigationEvent, _: &RouteParams) -> HandlerResult {
    Ok(View::new(&event.route)
        .title("Add Route")
        .text("Hello, add route view!")
        .link("Go to not found", "/poyoyo")
        .link("Go to redirect", "/redirect")
        .link("Go to error", "/error"))
}

fn redirect(_: &NavigationEvent, _: &RouteParams) -> HandlerResult {
    Err(HandlerError::redirect("/"))
}

fn redirect_loop(event: &NavigationEvent, _: &RouteParams) -> HandlerResult {
    Err(HandlerError::redirect(event.route.clone()))
}

fn error(_: &NavigationEvent, _: &RouteParams) -> HandlerResult {
    Err(HandlerError::fault(anyhow::anyhow!("error")))
}

/// Register the demo routes on `builder`.
pub fn routes(builder: RouterBuilder) -> RouterBuilder {
    builder
        .route("/", home)
        .route_with("/class/:id", false, class_view)
        .route_def(decorator_route())
        .route_with("/add_route", false, add_route)
        .route_with("/redirect", false, redirect)
        .route_with("/loop", false, redirect_loop)
        .route_with("/error", false, error)
}

/// Build the demo application with `config`.
///
/// # Errors
///
/// Only fails if a demo pattern stops compiling.
pub fn app(config: RouterConfig) -> Result<RouterFactory, PatternError> {
    routes(RouterFactory::builder().config(config)).build()
}
