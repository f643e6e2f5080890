//! # CLI Module
//!
//! Command-line driver for the bundled demo application, running sessions
//! on a headless [`MemoryHost`](crate::host::MemoryHost).
//!
//! ## Commands
//!
//! ### `walk`
//!
//! Navigate through a sequence of routes and print the final view stack:
//!
//! ```bash
//! viewrouter walk /class/2 /decorator?query=1 /nope --pop 1
//! ```
//!
//! Options:
//! - `--config <FILE>` - TOML router configuration
//! - `--debug` - Include fault details in 500 views
//! - `--force-clear` - Clear the stack on every navigation
//! - `--pop <N>` - Back navigations to perform afterwards
//! - `--skip-init` - Do not navigate to the initial route first
//!
//! ### `routes`
//!
//! List the demo route table in priority order:
//!
//! ```bash
//! viewrouter routes
//! ```
//!
//! Both commands accept `--log-format json|pretty` and `--log-level`.

mod commands;
pub mod sample;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, walk, Cli, Commands, LogFormatArg, WalkArgs, WalkReport};
