//! Profile aggregation: seed document plus every linked document
//!
//! 1. Fetch the seed document; if that fails, the outcome is the failure
//! 2. Discover sameAs / seeAlso / preferencesFile links from its subject
//! 3. Fetch all linked documents concurrently and wait for every one to settle
//! 4. Merge each successful document into the seed graph, tagged with its URL
//!
//! Linked-document failures are recorded as diagnostics and never fail the
//! aggregate.

use super::discovery::{discover_links, LinkSet, Relation};
use crate::graph::{Graph, Term};
use crate::vocab::PIM;
use crate::web::{document_url, FetchError, ResourceClient};
use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A linked document that could not be fetched
#[derive(Debug, Clone, Serialize)]
pub struct FetchDiagnostic {
    pub url: String,
    pub relation: Relation,
    #[serde(serialize_with = "serialize_error")]
    pub error: FetchError,
    pub at: DateTime<Utc>,
}

fn serialize_error<S: serde::Serializer>(error: &FetchError, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&error.to_string())
}

/// An aggregated profile
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    /// The seed URL as requested
    pub url: String,
    /// Seed statements plus those of every linked document that loaded
    pub graph: Graph,
    pub links: LinkSet,
    /// Linked fetches that settled, successful or not
    pub settled: usize,
    pub failures: Vec<FetchDiagnostic>,
}

impl Profile {
    /// The primary subject of the profile, if the seed named one
    pub fn webid(&self) -> Option<&str> {
        self.links.subject.as_ref().and_then(Term::as_iri)
    }

    /// Linked documents whose statements were merged
    pub fn loaded(&self) -> usize {
        self.settled - self.failures.len()
    }
}

/// Result of `ProfileAggregator::get_profile`
///
/// Only a failed seed fetch produces `SeedFailed`; everything past the seed
/// resolves to `Loaded`, with whatever could be fetched.
#[derive(Debug, Clone)]
pub enum ProfileOutcome {
    Loaded(Profile),
    SeedFailed(FetchError),
}

impl ProfileOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Loaded(profile) => Some(profile),
            Self::SeedFailed(_) => None,
        }
    }

    pub fn graph(&self) -> Option<&Graph> {
        self.profile().map(|p| &p.graph)
    }

    pub fn seed_error(&self) -> Option<&FetchError> {
        match self {
            Self::Loaded(_) => None,
            Self::SeedFailed(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<Profile, FetchError> {
        match self {
            Self::Loaded(profile) => Ok(profile),
            Self::SeedFailed(err) => Err(err),
        }
    }
}

/// Resolves WebID profiles into a single graph.
///
/// Each `get_profile` call owns its own seed graph; concurrent calls share
/// nothing but the client.
#[derive(Clone)]
pub struct ProfileAggregator {
    client: Arc<dyn ResourceClient>,
}

impl ProfileAggregator {
    pub fn new(client: Arc<dyn ResourceClient>) -> Self {
        Self { client }
    }

    /// Fetch the profile at `url` and everything it links to.
    pub async fn get_profile(&self, url: &str) -> ProfileOutcome {
        let mut graph = match self.client.get(url).await {
            Ok(graph) => graph,
            Err(err) => {
                warn!(url, error = %err, "could not load profile");
                return ProfileOutcome::SeedFailed(err);
            }
        };

        let links = discover_links(&graph, url);
        let pending = links.len();
        if pending == 0 {
            debug!(url, "no linked documents");
            return ProfileOutcome::Loaded(Profile {
                url: url.to_string(),
                graph,
                links,
                settled: 0,
                failures: Vec::new(),
            });
        }
        debug!(url, pending, "fetching linked documents");

        let fetches = links.iter().map(|(relation, target)| async move {
            (relation, target, self.client.get(target).await)
        });
        let outcomes = join_all(fetches).await;

        let mut settled = 0;
        let mut failures = Vec::new();
        for (relation, target, result) in outcomes {
            settled += 1;
            match result {
                Ok(linked) => {
                    let merged = graph.merge_from(&linked, Some(document_url(target)));
                    debug!(url = target, %relation, merged, "merged linked document");
                }
                Err(error) => {
                    warn!(url = target, %relation, error = %error, "could not load linked document");
                    failures.push(FetchDiagnostic {
                        url: target.to_string(),
                        relation,
                        error,
                        at: Utc::now(),
                    });
                }
            }
        }

        info!(
            url,
            settled,
            failed = failures.len(),
            statements = graph.len(),
            "profile aggregated"
        );
        ProfileOutcome::Loaded(Profile {
            url: url.to_string(),
            graph,
            links,
            settled,
            failures,
        })
    }

    /// Workspaces (`pim:workspace`) declared for `webid`.
    ///
    /// The profile's primary topic is the subject when one was found, so a
    /// profile document URL works as well as the WebID itself.
    pub async fn workspaces(&self, webid: &str) -> Result<Vec<String>, FetchError> {
        let profile = self.get_profile(webid).await.into_result()?;
        let subject = Term::iri(profile.webid().unwrap_or(webid));
        let mut found = Vec::new();
        for object in profile.graph.each(&subject, &PIM.term("workspace")) {
            let value = object.value().to_string();
            if !found.contains(&value) {
                found.push(value);
            }
        }
        Ok(found)
    }
}
