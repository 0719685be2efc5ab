//! Tests for route matching.

mod common;
use common::*;

use litero::{RequestContext, Router};

#[test]
fn exact_routes_match_without_params() {
    let routes = ["/", "/about", "/blog/archive", "/a.b"];

    for path in routes {
        let mut router = Router::new(path)
            .add("/:any", text("catch-all"))
            .add_routes(routes.map(|p| (p, echo())));

        assert!(router.is_found(), "{path} should match");
        assert!(router.params().is_empty(), "{path} captured params");
        assert_eq!(body_of(&router), "");
    }
}

#[test]
fn numeric_wildcard_rejects_non_digits() {
    for path in ["/page/abc", "/page/1a", "/page/-1", "/page/"] {
        let mut router = Router::new(path).add("/page/:num", echo());
        assert!(!router.is_found(), "{path} should not match");
        assert!(router.params().is_empty());
    }
}

#[test]
fn numeric_wildcard_falls_through() {
    let mut router = Router::new("/page/abc")
        .add("/page/:num", text("number"))
        .add("/page/:seg", echo());

    assert!(router.is_found());
    assert_eq!(body_of(&router), "abc");
}

#[test]
fn any_wildcard_consumes_slashes() {
    let mut router = Router::new("/second/a/b/c").add("/second/:any", echo());

    assert!(router.is_found());
    assert_eq!(router.params().as_slice(), ["a/b/c"]);
}

#[test]
fn any_wildcard_is_greedy_before_more_text() {
    let mut router = Router::new("/files/a/b/edit/c/edit").add("/files/:any/edit", echo());

    assert!(router.is_found());
    assert_eq!(router.params().as_slice(), ["a/b/edit/c"]);
}

#[test]
fn segment_wildcard_stops_at_slash() {
    let mut router = Router::new("/user/bob/posts").add("/user/:seg", echo());
    assert!(!router.is_found());
}

#[test]
fn params_follow_pattern_order() {
    let mut router = Router::new("/blog/2017/05/hello-world")
        .add("/blog/:num/:num/:seg", echo());

    assert!(router.is_found());
    assert_eq!(body_of(&router), "2017|05|hello-world");
}

#[test]
fn registration_order_breaks_ties() {
    let mut router = Router::new("/item/7")
        .add("/item/:seg", text("segment"))
        .add("/item/:num", text("number"));

    assert!(router.is_found());
    assert_eq!(body_of(&router), "segment");
}

#[test]
fn last_registration_wins() {
    let mut router = Router::new("/dup")
        .add("/dup", text("first"))
        .add_routes([("/other", text("other")), ("/dup", text("second"))]);

    assert_eq!(router.routes().len(), 2);
    assert!(router.is_found());
    assert_eq!(body_of(&router), "second");
}

#[test]
fn unknown_colon_words_are_literal() {
    let mut router = Router::new("/x/:id").add("/x/:id", text("literal"));
    assert!(router.is_found());

    let mut router = Router::new("/x/7").add("/x/:id", text("literal"));
    assert!(!router.is_found());
}

#[test]
fn patterns_must_match_the_whole_path() {
    let mut router = Router::new("/prefix/page/1").add("/page/:num", echo());
    assert!(!router.is_found());

    let mut router = Router::new("/page/1/extra").add("/page/:num", echo());
    assert!(!router.is_found());
}

#[test]
fn invalid_regex_still_matches_exactly() {
    let mut router = Router::new("/broken(").add("/broken(", text("exact"));

    assert!(router.is_found());
    assert_eq!(body_of(&router), "exact");
}

#[test]
fn empty_table_matches_nothing() {
    let mut router = Router::new("/");
    assert!(!router.is_found());
    assert!(router.request_handler().is_none());
    assert!(router.params().is_empty());
}

#[test]
fn request_context_is_normalized() {
    let ctx = RequestContext::new("/search/caf%C3%A9%2Fbar?q=1&x=%20");
    let mut router = Router::from_request(&ctx).add("/search/:any", echo());

    assert_eq!(router.request_uri(), "/search/café/bar");
    assert_eq!(router.request_method(), "GET");
    assert!(router.is_found());
    assert_eq!(body_of(&router), "café/bar");
}

#[test]
fn find_route_leaves_state_alone() {
    let router = Router::new("/page/3").add("/page/:num", echo());

    let (route, params) = router.find_route().expect("route should match");
    assert_eq!(route.pattern.pattern(), "/page/:num");
    assert_eq!(params.as_slice(), ["3"]);
    assert!(router.request_handler().is_none());
    assert!(router.params().is_empty());
}

#[test]
fn trailing_optional_group_captures_nothing() {
    let mut router = Router::new("/opt").add("/opt(/x)?", echo());

    assert!(router.is_found());
    assert!(router.params().is_empty());

    let mut router = Router::new("/v/7").add(r"/v(\d)?/:num", echo());
    assert!(router.is_found());
    assert_eq!(router.params().as_slice(), ["", "7"]);
}
