//! Structured logging setup.
//!
//! The library only emits `tracing` events; binaries call
//! [`init_logging_with_config`] once at startup to install a subscriber.
//! Output goes to stderr so stdout stays free for command output.
//!
//! Configuration comes from the environment:
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `VIEWROUTER_LOG_LEVEL` | `info` | trace/debug/info/warn/error |
//! | `VIEWROUTER_LOG_FORMAT` | `json` | json/pretty |
//! | `VIEWROUTER_LOG_TARGET_FILTER` | unset | extra comma-separated filter directives |
//! | `VIEWROUTER_LOG_INCLUDE_LOCATION` | `false` | include file:line |
//!
//! `RUST_LOG`, when set, takes precedence over `VIEWROUTER_LOG_LEVEL`, but
//! not over a level forced by the caller (the CLI's `--log-level`).

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: JSON for production, pretty-print for development
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
    /// Comma-separated filter directives, e.g. `viewrouter::pattern=warn`
    pub target_filter: Option<String>,
    pub include_location: bool,
    /// Use `log_level` even when `RUST_LOG` is set
    pub force_level: bool,
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("VIEWROUTER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: LogFormat::parse(
                &env::var("VIEWROUTER_LOG_FORMAT").unwrap_or_else(|_| "json".to_string()),
            ),
            target_filter: env::var("VIEWROUTER_LOG_TARGET_FILTER").ok(),
            include_location: env::var("VIEWROUTER_LOG_INCLUDE_LOCATION")
                .ok()
                .is_some_and(|v| crate::config::parse_flag(&v)),
            force_level: false,
        }
    }

    #[must_use]
    pub fn default_dev() -> Self {
        Self {
            log_level: "debug".to_string(),
            format: LogFormat::Pretty,
            target_filter: None,
            include_location: true,
            force_level: false,
        }
    }

    /// Level named by `log_level`, falling back to INFO.
    #[must_use]
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// Build the filter: `RUST_LOG` if set and the level is not forced, else
    /// the configured level, plus any target directives. Invalid directives
    /// are skipped.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let configured = || EnvFilter::new(self.level().as_str());
        let mut filter = if self.force_level {
            configured()
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| configured())
        };

        if let Some(target_filter) = &self.target_filter {
            for directive in target_filter.split(',').map(str::trim) {
                if directive.is_empty() {
                    continue;
                }
                match directive.parse() {
                    Ok(d) => filter = filter.add_directive(d),
                    Err(_) => eprintln!("Warning: Invalid log filter directive: {directive}"),
                }
            }
        }
        filter
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// use viewrouter::logging::{init_logging_with_config, LogConfig};
///
/// init_logging_with_config(&LogConfig::from_env()).expect("Failed to initialize logging");
/// ```
pub fn init_logging_with_config(config: &LogConfig) -> Result<()> {
    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("PRETTY"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("invalid"), LogFormat::Json);
    }

    #[test]
    fn test_default_dev() {
        let config = LogConfig::default_dev();
        assert_eq!(config.level(), Level::DEBUG);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.include_location);
    }

    #[test]
    fn test_level_fallback() {
        let mut config = LogConfig::default_dev();
        config.log_level = "WARN".into();
        assert_eq!(config.level(), Level::WARN);
        config.log_level = "loud".into();
        assert_eq!(config.level(), Level::INFO);
    }

    #[test]
    fn test_forced_level_beats_rust_log() {
        std::env::set_var("RUST_LOG", "trace");
        let config = LogConfig {
            log_level: "warn".into(),
            force_level: true,
            ..LogConfig::default_dev()
        };
        let rendered = config.env_filter().to_string();
        std::env::remove_var("RUST_LOG");
        assert!(rendered.eq_ignore_ascii_case("warn"), "{rendered}");
    }

    #[test]
    fn test_env_filter_skips_bad_directives() {
        let config = LogConfig {
            target_filter: Some("viewrouter::pattern=warn, ,not a directive[".into()),
            ..LogConfig::default_dev()
        };
        let rendered = config.env_filter().to_string();
        assert!(rendered.contains("viewrouter::pattern=warn"));
    }
}
