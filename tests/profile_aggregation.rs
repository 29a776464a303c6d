//! Profile aggregation end to end over HTTP
//!
//! A seed profile links to further documents on a mock server; some load,
//! some fail, and the aggregate always resolves.
//!
//! Run with: `cargo test --test profile_aggregation`

mod common;

use common::{client, profile_turtle, serve_status, serve_turtle, turtle};
use solid_ldp::{ProfileAggregator, ProfileOutcome, Relation};
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

const THREE_STATEMENTS: &str = r#"
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
<#it> foaf:name "A" ; foaf:nick "a" ; foaf:mbox <mailto:a@a.example> .
"#;

fn aggregator() -> ProfileAggregator {
    ProfileAggregator::new(Arc::new(client()))
}

#[tokio::test]
async fn see_also_partial_failure_scenario() {
    let server = MockServer::start().await;
    let seed_doc = format!("{}/profile", server.uri());
    let a = format!("{}/a/doc", server.uri());
    let b = format!("{}/b/doc", server.uri());

    serve_turtle(&server, "/profile", &profile_turtle(&[], &[a.clone(), b.clone()], &[])).await;
    serve_turtle(&server, "/a/doc", THREE_STATEMENTS).await;
    serve_status(&server, "/b/doc", 404, "Not Found").await;

    let outcome = aggregator().get_profile(&format!("{}#me", seed_doc)).await;
    let profile = match outcome {
        ProfileOutcome::Loaded(profile) => profile,
        ProfileOutcome::SeedFailed(err) => panic!("seed failed: {err}"),
    };

    assert_eq!(profile.settled, 2);
    assert_eq!(profile.failures.len(), 1);
    assert_eq!(profile.failures[0].url, b);
    assert_eq!(profile.failures[0].relation, Relation::SeeAlso);
    assert_eq!(profile.failures[0].error.status(), 404);

    let g = &profile.graph;
    assert_eq!(g.statements_matching(None, None, None, Some(&seed_doc)).len(), 4);
    assert_eq!(g.statements_matching(None, None, None, Some(&a)).len(), 3);
    assert!(g.statements_matching(None, None, None, Some(&b)).is_empty());
    assert_eq!(g.len(), 7);
    assert_eq!(profile.webid(), Some(format!("{}#me", seed_doc).as_str()));
}

#[tokio::test]
async fn seed_server_error_resolves_with_failure_payload() {
    let server = MockServer::start().await;
    serve_status(&server, "/profile", 500, "database unavailable").await;

    let outcome = aggregator()
        .get_profile(&format!("{}/profile#me", server.uri()))
        .await;

    let err = outcome.seed_error().expect("seed failure");
    assert_eq!(err.status(), 500);
    assert_eq!(err.body(), "database unavailable");
}

#[tokio::test]
async fn unreachable_seed_resolves_with_transport_failure() {
    let outcome = aggregator().get_profile("http://127.0.0.1:9/profile").await;
    let err = outcome.seed_error().expect("seed failure");
    assert_eq!(err.status(), 0);
}

#[tokio::test]
async fn profile_without_links_makes_one_request() {
    let server = MockServer::start().await;
    serve_turtle(&server, "/profile", &profile_turtle(&[], &[], &[])).await;

    let profile = aggregator()
        .get_profile(&format!("{}/profile", server.uri()))
        .await
        .into_result()
        .unwrap();

    assert_eq!(profile.settled, 0);
    assert_eq!(profile.graph.len(), 2);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn all_three_relations_are_merged() {
    let server = MockServer::start().await;
    let same = format!("{}/same#i", server.uri());
    let see = format!("{}/see", server.uri());
    let prefs = format!("{}/settings/prefs.ttl", server.uri());

    serve_turtle(
        &server,
        "/profile",
        &profile_turtle(&[same.clone()], &[see.clone()], &[prefs.clone()]),
    )
    .await;
    serve_turtle(&server, "/same", THREE_STATEMENTS).await;
    serve_turtle(&server, "/see", "<#x> <http://xmlns.com/foaf/0.1/name> \"See\" .").await;
    serve_turtle(
        &server,
        "/settings/prefs.ttl",
        &format!("<{}/profile#me> <http://www.w3.org/ns/pim/space#workspace> </ws/> .", server.uri()),
    )
    .await;

    let profile = aggregator()
        .get_profile(&format!("{}/profile#me", server.uri()))
        .await
        .into_result()
        .unwrap();

    let g = &profile.graph;
    let same_doc = format!("{}/same", server.uri());
    assert_eq!(g.statements_matching(None, None, None, Some(&same_doc)).len(), 3);
    assert_eq!(g.statements_matching(None, None, None, Some(&see)).len(), 1);
    assert_eq!(g.statements_matching(None, None, None, Some(&prefs)).len(), 1);
    assert!(profile.failures.is_empty());
    assert_eq!(profile.settled, 3);
}

#[tokio::test]
async fn linked_timeout_is_absorbed() {
    let server = MockServer::start().await;
    let slow = format!("{}/slow", server.uri());
    let fine = format!("{}/fine", server.uri());

    serve_turtle(&server, "/profile", &profile_turtle(&[], &[slow.clone(), fine.clone()], &[])).await;
    serve_turtle(&server, "/fine", THREE_STATEMENTS).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(turtle(THREE_STATEMENTS).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let started = Instant::now();
    let profile = aggregator()
        .get_profile(&format!("{}/profile", server.uri()))
        .await
        .into_result()
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(4));
    assert_eq!(profile.settled, 2);
    assert_eq!(profile.failures.len(), 1);
    assert!(profile.failures[0].error.is_timeout());
    assert_eq!(profile.graph.statements_matching(None, None, None, Some(&fine)).len(), 3);
}

#[tokio::test]
async fn workspaces_come_from_preferences_file() {
    let server = MockServer::start().await;
    let webid = format!("{}/profile#me", server.uri());
    let prefs = format!("{}/prefs", server.uri());

    serve_turtle(&server, "/profile", &profile_turtle(&[], &[], &[prefs])).await;
    serve_turtle(
        &server,
        "/prefs",
        &format!(
            "@prefix pim: <http://www.w3.org/ns/pim/space#> .\n<{0}> pim:workspace </public/>, </private/> .",
            webid
        ),
    )
    .await;

    let workspaces = aggregator().workspaces(&webid).await.unwrap();
    assert_eq!(
        workspaces,
        vec![format!("{}/public/", server.uri()), format!("{}/private/", server.uri())]
    );
}
