//! reqwest-backed `ResourceClient`

use super::error::{FetchError, FetchResult};
use super::location::{document_url, proxied_url};
use super::meta::ResourceMeta;
use super::parse::{format_for, parse_document};
use super::traits::{ResourceClient, ResourceKind};
use crate::config::Config;
use crate::graph::Graph;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, LINK};
use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::debug;

const TURTLE: &str = "text/turtle";
const ACCEPT_RDF: &str =
    "text/turtle;q=1.0, application/n-triples;q=0.9, application/rdf+xml;q=0.8, */*;q=0.1";

/// HTTP transport for LDP resources.
///
/// Requests time out after `Config::timeout_ms`; reads outside
/// `Config::origin` go through the configured proxy.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    config: Config,
}

impl HttpClient {
    /// Build a client from explicit configuration.
    pub fn new(config: Config) -> FetchResult<Self> {
        let mut builder = Client::builder().timeout(config.timeout());
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn request(&self, method: Method, url: &str) -> FetchResult<RequestBuilder> {
        url::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        debug!(%method, url, "sending request");
        Ok(self.http.request(method, url))
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> FetchResult<Response> {
        request
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))
    }

    async fn body(url: &str, response: Response) -> FetchResult<String> {
        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))
    }

    /// Turn a write response into metadata, accepting 200 and 201 only
    async fn write_meta(url: &str, response: Response) -> FetchResult<ResourceMeta> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = Self::body(url, response).await?;
        if status == 200 || status == 201 {
            Ok(ResourceMeta::from_response_headers(status, &headers, &body))
        } else {
            Err(FetchError::Status {
                url: url.to_string(),
                status,
                body,
            })
        }
    }
}

#[async_trait]
impl ResourceClient for HttpClient {
    async fn head(&self, url: &str) -> FetchResult<ResourceMeta> {
        let response = self.send(url, self.request(Method::HEAD, url)?).await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = Self::body(url, response).await?;
        Ok(ResourceMeta::from_response_headers(status, &headers, &body))
    }

    async fn get(&self, url: &str) -> FetchResult<Graph> {
        let document = document_url(url);
        let target = proxied_url(
            document,
            self.config.origin.as_deref(),
            self.config.proxy_template.as_deref(),
        )?;
        let request = self.request(Method::GET, &target)?.header(ACCEPT, ACCEPT_RDF);
        let response = self.send(document, request).await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = Self::body(document, response).await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                url: document.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        parse_document(&body, format_for(content_type.as_deref()), document).map_err(|message| {
            FetchError::Parse {
                url: document.to_string(),
                status: status.as_u16(),
                body: body.clone(),
                message,
            }
        })
    }

    async fn post(
        &self,
        url: &str,
        slug: Option<&str>,
        data: Option<String>,
        kind: ResourceKind,
    ) -> FetchResult<ResourceMeta> {
        let mut request = self
            .request(Method::POST, url)?
            .header(CONTENT_TYPE, TURTLE)
            .header(LINK, format!("<{}>; rel=\"type\"", kind.type_iri()));
        if let Some(slug) = slug.filter(|s| !s.is_empty()) {
            request = request.header("Slug", slug);
        }
        if let Some(data) = data {
            request = request.body(data);
        }
        let response = self.send(url, request).await?;
        Self::write_meta(url, response).await
    }

    async fn put(&self, url: &str, data: Option<String>) -> FetchResult<ResourceMeta> {
        let mut request = self.request(Method::PUT, url)?.header(CONTENT_TYPE, TURTLE);
        if let Some(data) = data {
            request = request.body(data);
        }
        let response = self.send(url, request).await?;
        Self::write_meta(url, response).await
    }

    async fn delete(&self, url: &str) -> FetchResult<()> {
        let response = self.send(url, self.request(Method::DELETE, url)?).await?;
        let status = response.status().as_u16();
        if status == 200 {
            return Ok(());
        }
        let body = Self::body(url, response).await?;
        Err(FetchError::Status {
            url: url.to_string(),
            status,
            body,
        })
    }
}
