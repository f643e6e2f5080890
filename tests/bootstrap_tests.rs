#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{navigate, scenario_builder};
use std::path::PathBuf;
use viewrouter::host::MemoryHost;
use viewrouter::{ConfigError, RouterConfig};

fn temp_toml(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "viewrouter_test_{}_{}.toml",
        std::process::id(),
        name
    ));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_bootstrap_uses_configured_initial_route() {
    let app = scenario_builder().init_route("/class/5").build().unwrap();
    let mut router = app.bootstrap(MemoryHost::new());

    assert_eq!(router.host().navigations, vec!["/class/5"]);
    router.settle();
    assert_eq!(router.stack().routes(), vec!["/class/5"]);
}

#[test]
fn test_sessions_are_isolated() {
    let app = scenario_builder().build().unwrap();
    let mut alice = app.bootstrap(MemoryHost::new());
    let mut bob = app.bootstrap(MemoryHost::new());
    alice.settle();
    bob.settle();

    navigate(&mut alice, "/class/1");
    navigate(&mut alice, "/class/2");

    assert_eq!(alice.stack().len(), 3);
    assert_eq!(bob.stack().routes(), vec!["/"]);
}

#[test]
fn test_config_loaded_from_toml_file() {
    let path = temp_toml(
        "full",
        r#"
name = "demo"
debug = true
force_clear = true
init_route = "/class/1"
"#,
    );
    let config = RouterConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let app = scenario_builder().config(config).build().unwrap();
    assert_eq!(app.config().name, "demo");
    assert_eq!(app.config().max_redirects, 8);

    let mut router = app.bootstrap(MemoryHost::new());
    router.settle();
    navigate(&mut router, "/class/2");
    assert_eq!(router.stack().routes(), vec!["/class/2"]);
}

#[test]
fn test_config_errors_are_reported() {
    let missing = std::env::temp_dir().join("viewrouter_test_does_not_exist.toml");
    assert!(matches!(
        RouterConfig::load(&missing),
        Err(ConfigError::Io { .. })
    ));

    let path = temp_toml("bad", "debug = \"sometimes\"");
    let result = RouterConfig::load(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_redirect_loop_is_cut_off() {
    let app = scenario_builder()
        .route_with("/loop", false, |e, _| {
            Err(viewrouter::HandlerError::redirect(e.route.clone()))
        })
        .max_redirects(3)
        .build()
        .unwrap();
    let mut router = app.session(MemoryHost::new());
    navigate(&mut router, "/loop");

    assert_eq!(router.stack().routes(), vec!["/loop"]);
    assert_eq!(
        router.stack().top().unwrap().title.as_deref(),
        Some(viewrouter::error_views::INTERNAL_ERROR_TITLE)
    );
    // one initial request plus four redirects before the limit trips
    assert_eq!(router.host().navigations.len(), 5);
}
