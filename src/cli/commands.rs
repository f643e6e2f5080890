use crate::config::RouterConfig;
use crate::host::{Host, MemoryHost};
use crate::logging::{init_logging_with_config, LogConfig, LogFormat};
use crate::navigation::ViewPopEvent;
use crate::view::View;
use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use super::sample;

/// Command-line interface for viewrouter
#[derive(Parser, Debug)]
#[command(name = "viewrouter")]
#[command(about = "Drive the viewrouter demo application headlessly", long_about = None)]
pub struct Cli {
    /// Log output format
    #[arg(long, value_enum, global = true, env = "VIEWROUTER_LOG_FORMAT")]
    pub log_format: Option<LogFormatArg>,

    /// Log level (trace, debug, info, warn, error); overrides RUST_LOG and
    /// VIEWROUTER_LOG_LEVEL
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Navigate the demo application through a sequence of routes and print
    /// the resulting view stack as JSON
    Walk(WalkArgs),
    /// List the demo route table in priority order
    Routes,
}

#[derive(Args, Debug, Clone, Default)]
pub struct WalkArgs {
    /// Routes to navigate to, in order
    pub routes: Vec<String>,

    /// TOML router configuration; environment variables apply when absent
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Include fault details in 500 views
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Clear the stack on every navigation
    #[arg(long, default_value_t = false)]
    pub force_clear: bool,

    /// Number of back navigations to perform after the walk
    #[arg(long, default_value_t = 0)]
    pub pop: usize,

    /// Do not navigate to the initial route first
    #[arg(long, default_value_t = false)]
    pub skip_init: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}

/// Final state of one walked session.
#[derive(Debug, Serialize)]
pub struct WalkReport {
    pub session_id: String,
    /// Every navigation the host was asked to perform, oldest first
    pub navigations: Vec<String>,
    pub renders: usize,
    pub stack: Vec<View>,
}

/// Run the walk described by `args` against the demo application.
///
/// # Errors
///
/// Fails if the configuration file cannot be loaded.
pub fn walk(args: &WalkArgs) -> anyhow::Result<WalkReport> {
    let mut config = match &args.config {
        Some(path) => RouterConfig::load(path)
            .with_context(|| format!("Failed to load router config {}", path.display()))?,
        None => RouterConfig::from_env(),
    };
    config.debug |= args.debug;
    config.force_clear |= args.force_clear;

    let app = sample::app(config).context("Failed to build demo routes")?;

    let mut router = if args.skip_init {
        app.session(MemoryHost::new())
    } else {
        app.bootstrap(MemoryHost::new())
    };
    router.settle();

    for route in &args.routes {
        router.go(route);
        router.settle();
    }
    for _ in 0..args.pop {
        router.on_view_pop(&ViewPopEvent::default());
        router.settle();
    }

    let host = router.into_host();
    Ok(WalkReport {
        session_id: host.session_id(),
        navigations: host.navigations,
        renders: host.renders,
        stack: host.displayed,
    })
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if logging cannot be initialized, the configuration
/// cannot be loaded or the report cannot be serialized.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if let Some(format) = cli.log_format {
        log_config.format = format.into();
    }
    if let Some(level) = &cli.log_level {
        log_config.log_level.clone_from(level);
        log_config.force_level = true;
    }
    init_logging_with_config(&log_config)?;

    match &cli.command {
        Commands::Walk(args) => {
            let report = walk(args)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?
            );
        }
        Commands::Routes => {
            let app = sample::app(RouterConfig::default())?;
            for (position, entry) in app.table().entries().enumerate() {
                println!(
                    "{position:>2}  {:<16} clear_on_match={}",
                    entry.pattern().as_str(),
                    entry.clear_on_match()
                );
            }
        }
    }
    Ok(())
}
