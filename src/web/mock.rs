//! Mock client for testing: serves preconfigured documents.

use super::error::{FetchError, FetchResult};
use super::location::document_url;
use super::meta::ResourceMeta;
use super::traits::{ResourceClient, ResourceKind};
use crate::graph::Graph;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// A request the mock has seen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
}

/// In-memory `ResourceClient`.
///
/// Documents are keyed by document URL (no fragment). Every call is
/// recorded, including calls for unknown URLs, which fail with 404.
#[derive(Debug, Default)]
pub struct MockClient {
    documents: HashMap<String, FetchResult<Graph>>,
    heads: HashMap<String, FetchResult<ResourceMeta>>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `graph` for GETs of `url`.
    ///
    /// Statements are re-tagged with the document URL, as a real fetch
    /// would tag them.
    pub fn with_document(mut self, url: &str, graph: Graph) -> Self {
        let doc = document_url(url).to_string();
        let tagged = graph
            .iter()
            .cloned()
            .map(|st| st.with_why(doc.clone()))
            .collect();
        self.documents.insert(doc, Ok(tagged));
        self
    }

    /// Fail GETs of `url` with `error`.
    pub fn with_failure(mut self, url: &str, error: FetchError) -> Self {
        self.documents.insert(document_url(url).to_string(), Err(error));
        self
    }

    /// Fail GETs of `url` with an HTTP status.
    pub fn with_status(self, url: &str, status: u16, body: &str) -> Self {
        let error = FetchError::Status {
            url: document_url(url).to_string(),
            status,
            body: body.to_string(),
        };
        self.with_failure(url, error)
    }

    /// Answer HEADs of `url` with `meta`.
    pub fn with_head(mut self, url: &str, meta: ResourceMeta) -> Self {
        self.heads.insert(url.to_string(), Ok(meta));
        self
    }

    /// Fail HEADs of `url` with `error`.
    pub fn with_head_failure(mut self, url: &str, error: FetchError) -> Self {
        self.heads.insert(url.to_string(), Err(error));
        self
    }

    /// Delay every response for `url` by `delay`.
    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(document_url(url).to_string(), delay);
        self
    }

    /// All requests seen so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of GETs seen so far.
    pub fn get_count(&self) -> usize {
        self.requests().iter().filter(|r| r.method == "GET").count()
    }

    async fn record(&self, method: &'static str, url: &str) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                method,
                url: url.to_string(),
            });
        }
        if let Some(delay) = self.delays.get(document_url(url)) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl ResourceClient for MockClient {
    async fn head(&self, url: &str) -> FetchResult<ResourceMeta> {
        self.record("HEAD", url).await;
        self.heads
            .get(url)
            .cloned()
            .unwrap_or_else(|| Ok(ResourceMeta::from_parts(404, None, None, None, "")))
    }

    async fn get(&self, url: &str) -> FetchResult<Graph> {
        let doc = document_url(url);
        self.record("GET", doc).await;
        match self.documents.get(doc) {
            Some(result) => result.clone(),
            None => Err(FetchError::Status {
                url: doc.to_string(),
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }

    async fn post(
        &self,
        url: &str,
        slug: Option<&str>,
        _data: Option<String>,
        _kind: ResourceKind,
    ) -> FetchResult<ResourceMeta> {
        self.record("POST", url).await;
        let location = format!("{}{}", url, slug.unwrap_or("new"));
        Ok(ResourceMeta::from_parts(201, Some(&location), None, None, ""))
    }

    async fn put(&self, url: &str, _data: Option<String>) -> FetchResult<ResourceMeta> {
        self.record("PUT", url).await;
        Ok(ResourceMeta::from_parts(201, None, None, None, ""))
    }

    async fn delete(&self, url: &str) -> FetchResult<()> {
        self.record("DELETE", url).await;
        Ok(())
    }
}
