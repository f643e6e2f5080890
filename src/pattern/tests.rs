use super::{normalize_path, PatternError, RoutePattern};

#[test]
fn test_root_pattern() {
    let p = RoutePattern::new("/").unwrap();
    assert!(p.matches("/").is_some());
    assert!(p.matches("").is_some());
    assert!(p.matches("/home").is_none());
    assert_eq!(p.param_names().count(), 0);
}

#[test]
fn test_named_segment_captures_value() {
    let p = RoutePattern::new("/class/:id").unwrap();
    let params = p.matches("/class/2").unwrap();
    assert_eq!(params.get("id"), Some("2"));
    assert_eq!(params.len(), 1);
}

#[test]
fn test_named_segment_does_not_span_slashes() {
    let p = RoutePattern::new("/class/:id").unwrap();
    assert!(p.matches("/class/2/extra").is_none());
    assert!(p.matches("/class").is_none());
}

#[test]
fn test_exact_match_only() {
    let p = RoutePattern::new("/class").unwrap();
    assert!(p.matches("/class/2").is_none());
    assert!(p.matches("/classes").is_none());
    assert!(p.matches("/x/class").is_none());
}

#[test]
fn test_trailing_slash_is_normalized() {
    let p = RoutePattern::new("/class/:id/").unwrap();
    assert_eq!(p.matches("/class/7/").unwrap().get("id"), Some("7"));
    assert_eq!(p.matches("class/7").unwrap().get("id"), Some("7"));
}

#[test]
fn test_literal_match_is_case_insensitive() {
    let p = RoutePattern::new("/Decorator").unwrap();
    assert!(p.matches("/decorator").is_some());
}

#[test]
fn test_multiple_params_keep_template_order() {
    let p = RoutePattern::new("/users/:user/posts/:post").unwrap();
    let params = p.matches("/users/ann/posts/42").unwrap();
    let pairs: Vec<_> = params.iter().collect();
    assert_eq!(pairs, vec![("user", "ann"), ("post", "42")]);
}

#[test]
fn test_custom_expression_constrains_segment() {
    let p = RoutePattern::new(r"/class/:id(\d+)").unwrap();
    assert_eq!(p.matches("/class/12").unwrap().get("id"), Some("12"));
    assert!(p.matches("/class/abc").is_none());
}

#[test]
fn test_custom_expression_may_contain_slash() {
    let p = RoutePattern::new("/files/:path(.+)").unwrap();
    assert_eq!(p.matches("/files/a/b/c").unwrap().get("path"), Some("a/b/c"));
}

#[test]
fn test_optional_segment() {
    let p = RoutePattern::new("/class/:id/:tab?").unwrap();
    let with_tab = p.matches("/class/1/notes").unwrap();
    assert_eq!(with_tab.get("tab"), Some("notes"));

    let without_tab = p.matches("/class/1").unwrap();
    assert_eq!(without_tab.get("id"), Some("1"));
    assert_eq!(without_tab.get("tab"), None);
    assert_eq!(without_tab.len(), 1);
}

#[test]
fn test_optional_segment_at_root() {
    let p = RoutePattern::new("/:lang?").unwrap();
    let root = p.matches("/").unwrap();
    assert!(root.is_empty());
    assert!(p.matches("").is_some());
    assert_eq!(p.matches("/en").unwrap().get("lang"), Some("en"));
    assert!(p.matches("/en/extra").is_none());

    let p = RoutePattern::new("/:lang?/:page?").unwrap();
    assert!(p.matches("/").is_some());
    assert_eq!(p.matches("/en/about").unwrap().get("page"), Some("about"));
}

#[test]
fn test_captured_values_are_not_decoded_again() {
    let p = RoutePattern::new("/search/:term").unwrap();
    let params = p.matches("/search/100%25").unwrap();
    assert_eq!(params.get("term"), Some("100%25"));
}

#[test]
fn test_non_ascii_and_space_literals() {
    let p = RoutePattern::new("/カフェ").unwrap();
    assert!(p.matches("/カフェ").is_some());
    let p = RoutePattern::new("/hello world/:who").unwrap();
    assert_eq!(p.matches("/hello world/ann").unwrap().get("who"), Some("ann"));
}

#[test]
fn test_param_with_literal_suffix() {
    let p = RoutePattern::new("/files/:name.json").unwrap();
    assert_eq!(p.matches("/files/report.json").unwrap().get("name"), Some("report"));
    assert_eq!(p.matches("/files/a.b.json").unwrap().get("name"), Some("a.b"));
    assert!(p.matches("/files/report.xml").is_none());
    assert!(p.matches("/files/.json").is_none());
}

#[test]
fn test_several_params_in_one_segment() {
    let p = RoutePattern::new("/range/:from-:to").unwrap();
    let params = p.matches("/range/3-9").unwrap();
    assert_eq!(params.get("from"), Some("3"));
    assert_eq!(params.get("to"), Some("9"));
    assert!(p.matches("/range/39").is_none());
}

#[test]
fn test_literal_prefix_and_custom_expression_in_segment() {
    let p = RoutePattern::new(r"/v:major(\d+).json").unwrap();
    assert_eq!(p.matches("/v2.json").unwrap().get("major"), Some("2"));
    assert!(p.matches("/vx.json").is_none());
}

#[test]
fn test_parenthesized_literal_text() {
    let p = RoutePattern::new("/about(us)").unwrap();
    assert!(p.matches("/about(us)").is_some());
    assert!(p.matches("/aboutus").is_none());
    assert_eq!(p.param_names().count(), 0);
}

#[test]
fn test_literal_segments_are_escaped() {
    let p = RoutePattern::new("/v1.0/items").unwrap();
    assert!(p.matches("/v1.0/items").is_some());
    assert!(p.matches("/v1x0/items").is_none());
}

#[test]
fn test_duplicate_param_rejected() {
    let err = RoutePattern::new("/a/:id/b/:id").unwrap_err();
    assert_eq!(
        err,
        PatternError::DuplicateParam {
            pattern: "/a/:id/b/:id".to_string(),
            name: "id".to_string(),
        }
    );
}

#[test]
fn test_empty_param_name_rejected() {
    assert!(matches!(
        RoutePattern::new("/a/:"),
        Err(PatternError::EmptyParamName { .. })
    ));
}

#[test]
fn test_unclosed_expression_rejected() {
    assert!(matches!(
        RoutePattern::new(r"/a/:id(\d+"),
        Err(PatternError::Unclosed { .. })
    ));
}

#[test]
fn test_empty_custom_expression_rejected() {
    assert!(matches!(
        RoutePattern::new("/a/:id()"),
        Err(PatternError::InvalidRegex { .. })
    ));
}

#[test]
fn test_invalid_custom_regex_rejected() {
    let err = RoutePattern::new("/a/:id([)").unwrap_err();
    assert!(matches!(err, PatternError::InvalidRegex { .. }));
    assert!(err.to_string().contains("/a/:id([)"));
}

#[test]
fn test_matching_is_deterministic() {
    let p = RoutePattern::new("/class/:id").unwrap();
    let first = p.matches("/class/9");
    let second = p.matches("/class/9");
    assert_eq!(first, second);
    assert_eq!(p.as_str(), "/class/:id");
}

#[test]
fn test_normalize_path() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("///"), "/");
    assert_eq!(normalize_path("/a/b/"), "/a/b");
    assert_eq!(normalize_path("a"), "/a");
}
