//! # Navigation Module
//!
//! Inbound navigation events, the normalized form of a route string, and the
//! per-session stack of displayed views.
//!
//! Route strings are validated and their query parsed with the `url` crate
//! against a fixed base, so a bare `/class/2?tab=notes` and an absolute
//! `https://app/class/2?tab=notes` normalize to the same [`ParsedRoute`].
//! The path is taken from the raw string as written: it is percent-decoded,
//! but dot segments and backslashes are left alone.

use crate::pattern::normalize_path;
use crate::view::View;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Base every route string is resolved against.
const ROUTE_BASE: &str = "http://viewrouter.local/";

/// Route-change notification delivered by the host on every navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEvent {
    /// The raw route string, exactly as the host reported it
    pub route: String,
}

impl NavigationEvent {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
        }
    }
}

impl fmt::Display for NavigationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route={}", self.route)
    }
}

/// View-pop notification (back button, swipe, app-bar back arrow).
///
/// The route of the view the host wants removed is informational only; the
/// router always pops the top of its own stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewPopEvent {
    pub route: Option<String>,
}

/// Query parameters: name to values, values kept in arrival order.
pub type QueryMap = BTreeMap<String, Vec<String>>;

/// A route string split into its normalized path and query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedRoute {
    /// Normalized path (`/` when empty, trailing slash stripped);
    /// `None` when the route string could not be parsed
    pub path: Option<String>,
    /// Query parameters; blank values are dropped
    pub query: QueryMap,
}

impl ParsedRoute {
    /// Parse a raw route string.
    ///
    /// Never fails: a malformed route degrades to `path = None` with an
    /// empty query, which no route pattern can match.
    #[must_use]
    pub fn parse(route: &str) -> Self {
        let url = match Url::parse(ROUTE_BASE).and_then(|base| base.join(route)) {
            Ok(url) => url,
            Err(_) => return Self::default(),
        };

        let mut query = QueryMap::new();
        for (name, value) in url.query_pairs() {
            if value.is_empty() {
                continue;
            }
            query
                .entry(name.into_owned())
                .or_default()
                .push(value.into_owned());
        }

        let raw = raw_path(route);
        let path = urlencoding::decode(raw).map_or_else(|_| raw.to_string(), |p| p.into_owned());

        Self {
            path: Some(normalize_path(&path)),
            query,
        }
    }

    /// Whether this route parsed successfully.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.path.is_some()
    }
}

/// Path text of a route string: query and fragment removed, and for an
/// absolute URL the scheme and authority too.
fn raw_path(route: &str) -> &str {
    let end = route.find(['?', '#']).unwrap_or(route.len());
    let path = &route[..end];

    let Some(idx) = path.find("://") else {
        return path;
    };
    let scheme = &path[..idx];
    let is_scheme = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !is_scheme {
        return path;
    }
    let rest = &path[idx + 3..];
    rest.find('/').map_or("", |i| &rest[i..])
}

/// Ordered views currently displayed in one session; the last is on top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationStack {
    views: Vec<View>,
}

impl NavigationStack {
    #[must_use]
    pub fn new() -> Self {
        Self { views: Vec::new() }
    }

    pub fn push(&mut self, view: View) {
        self.views.push(view);
    }

    pub fn pop(&mut self) -> Option<View> {
        self.views.pop()
    }

    /// Discard every stacked view, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.views.len();
        self.views.clear();
        dropped
    }

    /// The current (top-most) view.
    #[must_use]
    pub fn top(&self) -> Option<&View> {
        self.views.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    #[must_use]
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Routes of the stacked views, bottom first.
    #[must_use]
    pub fn routes(&self) -> Vec<&str> {
        self.views.iter().map(|v| v.route.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, View> {
        self.views.iter()
    }
}

impl<'a> IntoIterator for &'a NavigationStack {
    type Item = &'a View;
    type IntoIter = std::slice::Iter<'a, View>;

    fn into_iter(self) -> Self::IntoIter {
        self.views.iter()
    }
}
