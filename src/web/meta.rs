//! Resource metadata extracted from LDP responses

use super::link_header::parse_link_header;
use serde::{Deserialize, Serialize};

/// Server-side failure reported alongside metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    pub status: u16,
    pub body: String,
}

/// What a HEAD, POST or PUT response says about a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMeta {
    /// `Location` header (set on creation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// ACL resource from the `acl` link relation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,
    /// Metadata resource from the `meta` relation, else `describedBy`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    /// Authenticated WebID from the `User` header, empty if absent
    pub user: String,
    /// True only for a 200 response
    pub exists: bool,
    pub status: u16,
    /// Set for 5xx responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<ServerError>,
}

impl ResourceMeta {
    /// Build from the relevant response parts
    pub fn from_parts(
        status: u16,
        location: Option<&str>,
        link: Option<&str>,
        user: Option<&str>,
        body: &str,
    ) -> Self {
        let mut rels = link.map(parse_link_header).unwrap_or_default();
        let meta = rels.remove("meta").or_else(|| rels.remove("describedBy"));
        Self {
            url: location.map(str::to_string),
            acl: rels.remove("acl"),
            meta,
            user: user.unwrap_or_default().to_string(),
            exists: status == 200,
            status,
            err: (status >= 500).then(|| ServerError {
                status,
                body: body.to_string(),
            }),
        }
    }

    pub(crate) fn from_response_headers(
        status: u16,
        headers: &reqwest::header::HeaderMap,
        body: &str,
    ) -> Self {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
        Self::from_parts(
            status,
            header("location"),
            header("link"),
            header("user"),
            body,
        )
    }

    /// The `User` header, if it names an HTTP(S) WebID
    pub fn webid(&self) -> Option<&str> {
        self.user.starts_with("http").then_some(self.user.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_exists() {
        let meta = ResourceMeta::from_parts(
            200,
            None,
            Some("<doc.acl>; rel=\"acl\", <doc.meta>; rel=\"meta\""),
            Some("https://alice.example/profile#me"),
            "",
        );
        assert!(meta.exists);
        assert_eq!(meta.acl.as_deref(), Some("doc.acl"));
        assert_eq!(meta.meta.as_deref(), Some("doc.meta"));
        assert_eq!(meta.webid(), Some("https://alice.example/profile#me"));
        assert!(meta.err.is_none());
    }

    #[test]
    fn described_by_is_meta_fallback() {
        let meta = ResourceMeta::from_parts(200, None, Some("<doc.meta>; rel=\"describedBy\""), None, "");
        assert_eq!(meta.meta.as_deref(), Some("doc.meta"));
    }

    #[test]
    fn meta_takes_precedence_over_described_by() {
        let meta = ResourceMeta::from_parts(
            200,
            None,
            Some("<a>; rel=\"describedBy\", <b>; rel=\"meta\""),
            None,
            "",
        );
        assert_eq!(meta.meta.as_deref(), Some("b"));
    }

    #[test]
    fn created_response_carries_location_but_does_not_exist() {
        let meta = ResourceMeta::from_parts(201, Some("https://example.org/c/new"), None, None, "");
        assert!(!meta.exists);
        assert_eq!(meta.url.as_deref(), Some("https://example.org/c/new"));
        assert_eq!(meta.user, "");
        assert!(meta.webid().is_none());
    }

    #[test]
    fn server_error_is_recorded() {
        let meta = ResourceMeta::from_parts(503, None, None, None, "unavailable");
        assert_eq!(
            meta.err,
            Some(ServerError {
                status: 503,
                body: "unavailable".into()
            })
        );
    }

    #[test]
    fn client_error_is_not_a_server_error() {
        let meta = ResourceMeta::from_parts(404, None, None, None, "not found");
        assert!(!meta.exists);
        assert!(meta.err.is_none());
    }
}
