//! Unit tests for CLI commands

use super::{walk, Cli, Commands, LogFormatArg, WalkArgs};
use clap::Parser;

fn walk_routes(routes: &[&str]) -> WalkArgs {
    WalkArgs {
        routes: routes.iter().map(|r| r.to_string()).collect(),
        ..WalkArgs::default()
    }
}

#[test]
fn test_walk_command_parses() {
    let cli = Cli::try_parse_from([
        "viewrouter",
        "walk",
        "/class/2",
        "/decorator",
        "--pop",
        "2",
        "--force-clear",
        "--log-format",
        "pretty",
    ])
    .unwrap();

    assert_eq!(cli.log_format, Some(LogFormatArg::Pretty));
    match cli.command {
        Commands::Walk(args) => {
            assert_eq!(args.routes, vec!["/class/2", "/decorator"]);
            assert_eq!(args.pop, 2);
            assert!(args.force_clear);
            assert!(!args.debug);
        }
        Commands::Routes => panic!("Expected Walk command"),
    }
}

#[test]
fn test_log_level_flag_parses_globally() {
    let cli = Cli::try_parse_from(["viewrouter", "routes", "--log-level", "debug"]).unwrap();
    assert_eq!(cli.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_routes_command_parses() {
    let cli = Cli::try_parse_from(["viewrouter", "routes"]).unwrap();
    assert!(matches!(cli.command, Commands::Routes));
}

#[test]
fn test_walk_stacks_non_clearing_routes() {
    let report = walk(&walk_routes(&["/class/2", "/decorator?query=1"])).unwrap();
    let routes: Vec<_> = report.stack.iter().map(|v| v.route.as_str()).collect();
    assert_eq!(routes, vec!["/", "/class/2", "/decorator?query=1"]);
    assert_eq!(
        report.stack[1].title.as_deref(),
        Some("My View")
    );
}

#[test]
fn test_walk_redirect_returns_home() {
    let report = walk(&walk_routes(&["/class/2", "/redirect"])).unwrap();
    let routes: Vec<_> = report.stack.iter().map(|v| v.route.as_str()).collect();
    assert_eq!(routes, vec!["/"]);
    assert!(report.navigations.contains(&"/redirect".to_string()));
}

#[test]
fn test_walk_redirect_loop_faults() {
    let mut args = walk_routes(&["/loop"]);
    args.debug = true;
    let report = walk(&args).unwrap();
    let top = report.stack.last().unwrap();
    assert_eq!(top.route, "/loop");
    assert_eq!(
        top.title.as_deref(),
        Some(crate::error_views::INTERNAL_ERROR_TITLE)
    );
}

#[test]
fn test_walk_pop_returns_to_previous_view() {
    let mut args = walk_routes(&["/class/2", "/nope"]);
    args.pop = 1;
    let report = walk(&args).unwrap();
    let routes: Vec<_> = report.stack.iter().map(|v| v.route.as_str()).collect();
    assert_eq!(routes, vec!["/", "/class/2"]);
    assert_eq!(report.navigations.last().map(String::as_str), Some("/class/2"));
}

#[test]
fn test_walk_skip_init_starts_empty() {
    let mut args = walk_routes(&[]);
    args.skip_init = true;
    let report = walk(&args).unwrap();
    assert!(report.stack.is_empty());
    assert!(report.navigations.is_empty());
}
