//! Shared helpers for integration tests
//!
//! Serves Turtle documents from a wiremock server and builds clients
//! pointed at it.

#![allow(dead_code)]

use solid_ldp::{Config, HttpClient};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TURTLE: &str = "text/turtle";

/// A 200 response carrying a Turtle body
pub fn turtle(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), TURTLE)
}

/// Serve `body` as Turtle for GETs of `route`
pub async fn serve_turtle(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(turtle(body))
        .mount(server)
        .await;
}

/// Answer GETs of `route` with a bare status
pub async fn serve_status(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Client with no proxying and a short timeout
pub fn client() -> HttpClient {
    client_with(Config::default().with_timeout(Duration::from_millis(500)))
}

pub fn client_with(config: Config) -> HttpClient {
    HttpClient::new(config).expect("client builds")
}

/// A profile document whose `#me` links to the given documents
pub fn profile_turtle(same_as: &[String], see_also: &[String], prefs: &[String]) -> String {
    let mut body = String::from(
        "@prefix foaf: <http://xmlns.com/foaf/0.1/> .\n\
         @prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
         @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
         @prefix pim: <http://www.w3.org/ns/pim/space#> .\n\
         <> foaf:primaryTopic <#me> .\n\
         <#me> foaf:name \"Alice\" .\n",
    );
    for (predicate, targets) in [("owl:sameAs", same_as), ("rdfs:seeAlso", see_also), ("pim:preferencesFile", prefs)] {
        for target in targets {
            body.push_str(&format!("<#me> {} <{}> .\n", predicate, target));
        }
    }
    body
}
