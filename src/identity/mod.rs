//! Identity: WebID profile resolution
//!
//! Discovers documents linked from a profile and aggregates them into one
//! graph.

mod aggregator;
mod discovery;

pub use aggregator::{FetchDiagnostic, Profile, ProfileAggregator, ProfileOutcome};
pub use discovery::{discover_links, primary_topic, LinkSet, Relation};
