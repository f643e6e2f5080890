//! # Host Module
//!
//! The seam between the router and the UI framework that renders views.
//!
//! The host delivers [`HostEvent`]s to the router and receives two kinds of
//! calls back: a navigation request ([`Host::go`]) and a re-render signal
//! ([`Host::update`]) carrying the current view stack.
//!
//! [`MemoryHost`] is a headless host that records both, used by the CLI and
//! by tests to drive a session without a real UI.

use crate::navigation::{NavigationEvent, ViewPopEvent};
use crate::view::View;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::VecDeque;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Strongly typed session identifier backed by ULID.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct SessionId(pub ulid::Ulid);

impl SessionId {
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SessionId(ulid::Ulid::from_string(s)?))
    }
}

impl Serialize for SessionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SessionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<SessionId>()
            .map_err(|_| serde::de::Error::custom("invalid session id"))
    }
}

/// Events a host delivers to its session's router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Connect,
    Disconnect,
    RouteChange(NavigationEvent),
    ViewPop(ViewPopEvent),
}

/// Outbound interface to the UI framework.
pub trait Host {
    /// Identity of the session this host serves (for logging).
    fn session_id(&self) -> String;

    /// Request host-level navigation to `route`. The host answers with a
    /// later [`HostEvent::RouteChange`].
    fn go(&mut self, route: &str);

    /// Re-render with the given view stack, bottom first.
    fn update(&mut self, views: &[View]);

    /// Hand back the next navigation requested through [`Host::go`] that the
    /// host has not delivered yet. Hosts that deliver route changes on their
    /// own event loop keep the default.
    fn next_navigation(&mut self) -> Option<String> {
        None
    }
}

/// Headless host that queues navigations and records renders.
#[derive(Debug, Default)]
pub struct MemoryHost {
    session_id: SessionId,
    pending: VecDeque<String>,
    /// Every route passed to [`Host::go`], oldest first
    pub navigations: Vec<String>,
    /// Number of re-render signals received
    pub renders: usize,
    /// View stack as of the last re-render
    pub displayed: Vec<View>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.session_id
    }

    /// Routes of the views shown by the last render.
    #[must_use]
    pub fn displayed_routes(&self) -> Vec<&str> {
        self.displayed.iter().map(|v| v.route.as_str()).collect()
    }

    /// Navigations requested but not yet handed back.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Host for MemoryHost {
    fn session_id(&self) -> String {
        self.session_id.to_string()
    }

    fn go(&mut self, route: &str) {
        self.navigations.push(route.to_string());
        self.pending.push_back(route.to_string());
    }

    fn update(&mut self, views: &[View]) {
        self.renders += 1;
        self.displayed = views.to_vec();
    }

    fn next_navigation(&mut self) -> Option<String> {
        self.pending.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_round_trips_through_string() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-ulid".parse::<SessionId>().is_err());
    }

    #[test]
    fn test_memory_host_queues_navigations_in_order() {
        let mut host = MemoryHost::new();
        host.go("/a");
        host.go("/b");
        assert_eq!(host.pending(), 2);
        assert_eq!(host.next_navigation().as_deref(), Some("/a"));
        assert_eq!(host.next_navigation().as_deref(), Some("/b"));
        assert_eq!(host.next_navigation(), None);
        assert_eq!(host.navigations, vec!["/a", "/b"]);
    }

    #[test]
    fn test_memory_host_records_renders() {
        let mut host = MemoryHost::new();
        host.update(&[View::new("/"), View::new("/class/2")]);
        assert_eq!(host.renders, 1);
        assert_eq!(host.displayed_routes(), vec!["/", "/class/2"]);
    }
}
