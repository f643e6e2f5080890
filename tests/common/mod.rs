#![allow(dead_code)]

use viewrouter::host::MemoryHost;
use viewrouter::{
    HandlerError, HandlerResult, NavigationEvent, RouteParams, Router, RouterBuilder,
    RouterFactory, View,
};

pub fn home(event: &NavigationEvent, _: &RouteParams) -> HandlerResult {
    Ok(View::new(&event.route).title("Home"))
}

pub fn class_view(event: &NavigationEvent, params: &RouteParams) -> HandlerResult {
    Ok(View::new(&event.route)
        .title("ClassView")
        .text(format!("id = {}", params.get("id").unwrap_or_default())))
}

/// `/` clears, `/class/:id` stacks, `/old` redirects to `/target`, `/target`
/// stacks and `/error` faults.
pub fn scenario_builder() -> RouterBuilder {
    RouterFactory::builder()
        .route("/", home)
        .route_with("/class/:id", false, class_view)
        .route_with("/old", false, |_, _| Err(HandlerError::redirect("/target")))
        .route_with("/target", false, |e, _| Ok(View::new(&e.route).title("Target")))
        .route_with("/error", false, |_, _| {
            Err(HandlerError::fault(anyhow::anyhow!("error")))
        })
}

pub fn scenario_app() -> RouterFactory {
    scenario_builder().build().expect("valid scenario routes")
}

/// Navigate the way a user would: ask the host, then let it report back.
pub fn navigate(router: &mut Router<MemoryHost>, route: &str) {
    router.go(route);
    router.settle();
}

pub fn titles(router: &Router<MemoryHost>) -> Vec<Option<&str>> {
    router.stack().iter().map(|v| v.title.as_deref()).collect()
}
