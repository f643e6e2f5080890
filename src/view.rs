//! Views produced by route handlers.
//!
//! A [`View`] is what the host renders for one stack entry. The router only
//! ever looks at [`View::route`]; title and controls are carried through to
//! the host untouched.

use serde::{Deserialize, Serialize};

/// One renderable element of a view body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Control {
    /// Static text
    Text { value: String },
    /// A button or link that navigates to `route` when activated
    Link { label: String, route: String },
}

/// A renderable page bound to the route that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    /// Route string used to reconcile this view with navigation events
    pub route: String,
    /// App-bar title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body controls, top to bottom
    #[serde(default)]
    pub controls: Vec<Control>,
}

impl View {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            title: None,
            controls: Vec::new(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.controls.push(Control::Text {
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn link(mut self, label: impl Into<String>, route: impl Into<String>) -> Self {
        self.controls.push(Control::Link {
            label: label.into(),
            route: route.into(),
        });
        self
    }

    /// Routes reachable from this view's links, in display order.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.controls.iter().filter_map(|c| match c {
            Control::Link { route, .. } => Some(route.as_str()),
            Control::Text { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_and_links() {
        let view = View::new("/")
            .title("Home")
            .text("Hello, home!")
            .link("Go to class view", "/class/2");
        assert_eq!(view.title.as_deref(), Some("Home"));
        assert_eq!(view.controls.len(), 2);
        assert_eq!(view.links().collect::<Vec<_>>(), vec!["/class/2"]);
    }

    #[test]
    fn test_view_serializes_for_host() {
        let view = View::new("/class/2").text("id = 2");
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "route": "/class/2",
                "controls": [{ "type": "text", "value": "id = 2" }]
            })
        );
    }
}
