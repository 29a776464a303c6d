//! ResourceClient trait: the contract LDP transports implement
//!
//! Abstracts over transport (HTTP, mock) so the profile aggregator and
//! auth helpers don't depend on how documents are reached.

use super::error::FetchResult;
use super::meta::ResourceMeta;
use crate::graph::Graph;
use crate::vocab::LDP;
use async_trait::async_trait;

/// Interaction model requested when creating a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceKind {
    #[default]
    Resource,
    BasicContainer,
}

impl ResourceKind {
    pub fn from_container_flag(is_container: bool) -> Self {
        if is_container {
            Self::BasicContainer
        } else {
            Self::Resource
        }
    }

    /// The LDP type IRI sent in the `Link: <…>; rel="type"` header
    pub fn type_iri(&self) -> String {
        match self {
            Self::Resource => LDP.iri("Resource"),
            Self::BasicContainer => LDP.iri("BasicContainer"),
        }
    }
}

/// Single-resource operations against an LDP server.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Check whether a resource exists and read its LDP metadata.
    async fn head(&self, url: &str) -> FetchResult<ResourceMeta>;

    /// Fetch and parse an RDF document.
    ///
    /// The fragment of `url` is stripped before the request. Statements in
    /// the returned graph are tagged with the document URL.
    async fn get(&self, url: &str) -> FetchResult<Graph>;

    /// Create a resource inside the container at `url`.
    async fn post(
        &self,
        url: &str,
        slug: Option<&str>,
        data: Option<String>,
        kind: ResourceKind,
    ) -> FetchResult<ResourceMeta>;

    /// Create or replace the resource at `url`.
    async fn put(&self, url: &str, data: Option<String>) -> FetchResult<ResourceMeta>;

    /// Delete the resource at `url`.
    async fn delete(&self, url: &str) -> FetchResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_flag_selects_kind() {
        assert_eq!(ResourceKind::from_container_flag(true), ResourceKind::BasicContainer);
        assert_eq!(ResourceKind::from_container_flag(false), ResourceKind::Resource);
    }

    #[test]
    fn type_iris_are_ldp_terms() {
        assert_eq!(ResourceKind::Resource.type_iri(), "http://www.w3.org/ns/ldp#Resource");
        assert_eq!(
            ResourceKind::BasicContainer.type_iri(),
            "http://www.w3.org/ns/ldp#BasicContainer"
        );
    }
}
