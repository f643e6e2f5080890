//! # Pattern Module
//!
//! Compiles route templates such as `/class/:id` into anchored regex
//! matchers and extracts named parameters from concrete paths.
//!
//! ## Syntax
//!
//! | Segment          | Matches                                      |
//! |------------------|----------------------------------------------|
//! | `class`          | the literal segment (case-insensitive)       |
//! | `:id`            | any single segment, captured as `id`         |
//! | `:id(\d+)`       | a single segment matching the custom regex   |
//! | `:tab?`          | an optional segment, absent when not present |
//! | `:name.json`     | a parameter followed by literal text         |
//! | `:from-:to`      | several parameters within one segment        |
//!
//! Paths are matched as given; percent-decoding happens when a route string
//! is parsed, not here.
//!
//! ## Example
//!
//! ```rust
//! use viewrouter::pattern::RoutePattern;
//!
//! let pattern = RoutePattern::new("/class/:id").unwrap();
//! let params = pattern.matches("/class/2/").unwrap();
//! assert_eq!(params.get("id"), Some("2"));
//! assert!(pattern.matches("/class").is_none());
//! ```
//!
//! Matching is pure: a compiled pattern never changes after construction,
//! so one [`RoutePattern`] can be shared by every session.

mod core;
#[cfg(test)]
mod tests;

pub use core::{normalize_path, ParamVec, PatternError, RouteParams, RoutePattern, MAX_INLINE_PARAMS};
