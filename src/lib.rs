//! # viewrouter
//!
//! **viewrouter** is a navigation-stack view router for reactive single-page
//! UIs. It maps route strings such as `/class/2?tab=info` to view-producing
//! handlers, keeps the stack of views the user can go back through, and turns
//! redirects, unmatched routes and handler failures into re-navigation, 404
//! views and 500 views.
//!
//! ## Architecture
//!
//! - **[`pattern`]** - Route patterns (`/class/:id`) compiled to anchored matchers
//! - **[`navigation`]** - Navigation events, parsed routes and the view stack
//! - **[`view`]** - The renderable [`View`] handlers return
//! - **[`handler`]** - The handler contract: views, redirects and faults
//! - **[`router`]** - The ordered route table and the per-session state machine
//! - **[`error_views`]** - Built-in 404 and 500 views
//! - **[`host`]** - The seam to the UI framework that renders views
//! - **[`app`]** - Per-application factory that bootstraps session routers
//! - **[`config`]** - Router configuration from code, environment or TOML
//! - **[`logging`]** - `tracing` subscriber setup for binaries
//! - **[`cli`]** - The `viewrouter` demo driver
//!
//! ### Route Change Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host
//!     participant Router
//!     participant Table as RouteTable
//!     participant Handler
//!     participant Stack as NavigationStack
//!
//!     Host->>Router: RouteChange(route)
//!     Router->>Router: parse route, compare with top view
//!     alt same route as displayed
//!         Router-->>Host: (nothing)
//!     else new route
//!         Router->>Table: resolve(path)
//!         Table-->>Router: first matching entry or NotFound
//!         Router->>Handler: handle(event, params)
//!         alt view
//!             Router->>Stack: clear (if route clears), push view
//!             Router->>Host: update(stack)
//!         else redirect
//!             Router->>Host: go(target)
//!         else fault or panic
//!             Router->>Stack: push 500 view
//!             Router->>Host: update(stack)
//!         end
//!     end
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use viewrouter::host::MemoryHost;
//! use viewrouter::{HandlerError, RouterFactory, View};
//!
//! let app = RouterFactory::builder()
//!     .route("/", |e, _| Ok(View::new(&e.route).title("Home")))
//!     .route_with("/class/:id", false, |e, p| {
//!         Ok(View::new(&e.route).text(format!("id = {}", p.get("id").unwrap_or("?"))))
//!     })
//!     .route_with("/old", false, |_, _| Err(HandlerError::redirect("/")))
//!     .build()
//!     .expect("valid routes");
//!
//! let mut router = app.bootstrap(MemoryHost::new());
//! router.settle();
//! router.go("/class/2");
//! router.settle();
//!
//! assert_eq!(router.stack().routes(), vec!["/", "/class/2"]);
//! ```
//!
//! ## Declaring Routes on Functions
//!
//! ```rust
//! use viewrouter::{route, HandlerResult, NavigationEvent, RouteParams, RouterFactory, View};
//!
//! #[route("/decorator", clear = false)]
//! fn decorator(event: &NavigationEvent, _: &RouteParams) -> HandlerResult {
//!     Ok(View::new(&event.route).title("Decorator"))
//! }
//!
//! let app = RouterFactory::builder()
//!     .route_def(decorator_route())
//!     .build()
//!     .expect("valid routes");
//! assert_eq!(app.table().patterns(), vec!["/decorator"]);
//! ```

extern crate self as viewrouter;

pub mod app;
pub mod cli;
pub mod config;
pub mod error_views;
pub mod handler;
pub mod host;
pub mod logging;
pub mod navigation;
pub mod pattern;
pub mod router;
pub mod view;

pub use app::{RouterBuilder, RouterFactory};
pub use config::{ConfigError, RouterConfig};
pub use handler::{Handler, HandlerError, HandlerResult, Redirect};
pub use host::{Host, HostEvent, MemoryHost};
pub use navigation::{NavigationEvent, NavigationStack, ParsedRoute, ViewPopEvent};
pub use pattern::{PatternError, RouteParams, RoutePattern};
pub use router::{RouteDef, RouteTable, Router, RouterState, Transition};
pub use view::{Control, View};
pub use viewrouter_macros::route;
