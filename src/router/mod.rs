//! # Router Module
//!
//! The route table and the per-session navigation state machine.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Holding the ordered route table (first registered match wins)
//! - Turning route-change events into stack mutations
//! - Translating redirects, unmatched routes and handler faults into
//!   re-navigation, 404 views and 500 views
//! - Handling view pops (back navigation)
//!
//! ## Route Change Flow
//!
//! ```text
//! RouteChange(route)
//!   ├─ parse route → (path, query)
//!   ├─ same (path, query) as the top view? ── yes ──▶ Unchanged
//!   ├─ resolve path against the table (query ignored)
//!   ├─ invoke handler
//!   │    ├─ Rendered  → clear stack if the route says so
//!   │    ├─ Redirect  → host.go(target) ─────────────▶ Redirected
//!   │    └─ Faulted   → 500 view, stack kept
//!   ├─ force_clear? → clear stack
//!   └─ push view, host.update(stack) ────────────────▶ Rendered / NotFound / Faulted
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use viewrouter::host::MemoryHost;
//! use viewrouter::router::{RouteTable, Router, Transition};
//! use viewrouter::{NavigationEvent, RouterConfig, View};
//!
//! let mut table = RouteTable::new();
//! table
//!     .register("/", |e, _| Ok(View::new(&e.route).title("Home")), true)
//!     .unwrap()
//!     .register("/class/:id", |e, p| {
//!         Ok(View::new(&e.route).text(format!("id = {}", p.get("id").unwrap_or("?"))))
//!     }, false)
//!     .unwrap();
//!
//! let mut router = Router::new(Arc::new(table), Arc::new(RouterConfig::default()), MemoryHost::new());
//! router.on_route_change(&NavigationEvent::new("/"));
//! let t = router.on_route_change(&NavigationEvent::new("/class/2"));
//!
//! assert_eq!(t, Transition::Rendered);
//! assert_eq!(router.stack().routes(), vec!["/", "/class/2"]);
//! ```

mod core;
mod table;

pub use core::{Router, RouterState, Transition};
pub use table::{HandlerFn, Resolution, RouteDef, RouteEntry, RouteTable};
