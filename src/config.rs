//! # Router Configuration Module
//!
//! Session-wide settings shared by every router a [`RouterFactory`] creates.
//!
//! ## Environment Variables
//!
//! | Variable                    | Field           | Default      |
//! |-----------------------------|-----------------|--------------|
//! | `VIEWROUTER_NAME`           | `name`          | `viewrouter` |
//! | `VIEWROUTER_DEBUG`          | `debug`         | `false`      |
//! | `VIEWROUTER_FORCE_CLEAR`    | `force_clear`   | `false`      |
//! | `VIEWROUTER_INIT_ROUTE`     | `init_route`    | `/`          |
//! | `VIEWROUTER_MAX_REDIRECTS`  | `max_redirects` | `8`          |
//!
//! Boolean variables accept `1`/`true`/`yes`/`on` (case-insensitive); any
//! other value reads as `false`. Unparseable numbers fall back to the
//! default.
//!
//! ## TOML
//!
//! ```rust
//! use viewrouter::config::RouterConfig;
//!
//! let config = RouterConfig::from_toml_str(r#"
//!     debug = true
//!     force_clear = true
//! "#).unwrap();
//! assert!(config.debug);
//! assert_eq!(config.init_route, "/");
//! ```
//!
//! [`RouterFactory`]: crate::app::RouterFactory

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;

pub const DEFAULT_NAME: &str = "viewrouter";
pub const DEFAULT_INIT_ROUTE: &str = "/";
pub const DEFAULT_MAX_REDIRECTS: usize = 8;

/// Router behavior shared by all sessions of one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Name recorded on every router span, to tell applications apart in logs
    pub name: String,
    /// Show fault details on 500 views
    pub debug: bool,
    /// Discard all stacked views before every push
    pub force_clear: bool,
    /// Route navigated to when a session starts
    pub init_route: String,
    /// Consecutive redirects tolerated before the navigation is faulted
    pub max_redirects: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            debug: false,
            force_clear: false,
            init_route: DEFAULT_INIT_ROUTE.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// Error loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The contents are not valid configuration TOML
    Parse { source: toml::de::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read router config '{path}': {source}")
            }
            ConfigError::Parse { source } => write!(f, "invalid router config: {source}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source } => Some(source),
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: env::var("VIEWROUTER_NAME").unwrap_or(defaults.name),
            debug: env_flag("VIEWROUTER_DEBUG").unwrap_or(defaults.debug),
            force_clear: env_flag("VIEWROUTER_FORCE_CLEAR").unwrap_or(defaults.force_clear),
            init_route: env::var("VIEWROUTER_INIT_ROUTE").unwrap_or(defaults.init_route),
            max_redirects: env::var("VIEWROUTER_MAX_REDIRECTS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_redirects),
        }
    }

    /// Parse configuration from TOML; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or mistyped keys.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|source| ConfigError::Parse { source })
    }

    /// Read and parse a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key).ok().map(|v| parse_flag(&v))
}

pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
