//! solid-ldp: Linked Data Platform client with WebID profile aggregation
//!
//! Reads and writes individual LDP resources over HTTP and resolves a
//! user's profile document, together with every document it links to,
//! into one graph.
//!
//! # Core Concepts
//!
//! - **Graph**: an append-only multiset of statements, each tagged with the
//!   document it came from
//! - **ResourceClient**: HEAD/GET/POST/PUT/DELETE against a single resource
//! - **ProfileAggregator**: fetches a profile, follows its sameAs, seeAlso and
//!   preferencesFile links concurrently, and merges what loads
//!
//! # Example
//!
//! ```
//! use solid_ldp::{Graph, Term};
//!
//! let mut graph = Graph::new();
//! graph.add(
//!     Term::iri("https://example.org/profile#me"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::literal("Alice"),
//!     Some("https://example.org/profile"),
//! );
//! assert_eq!(graph.documents().len(), 1);
//! ```

pub mod auth;
pub mod config;
mod graph;
pub mod identity;
pub mod vocab;
pub mod web;

pub use auth::{with_webid, AuthError};
pub use config::{Config, ConfigError};
pub use graph::{Graph, Literal, Statement, Term};
pub use identity::{
    discover_links, FetchDiagnostic, LinkSet, Profile, ProfileAggregator, ProfileOutcome, Relation,
};
pub use web::{
    parse_link_header, FetchError, FetchResult, HttpClient, MockClient, ResourceClient,
    ResourceKind, ResourceMeta,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
