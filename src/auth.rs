//! WebID discovery through the `User` response header
//!
//! An authenticated LDP server reports the caller's WebID in `User`. The
//! resource itself is asked first, then the configured auth endpoint.

use crate::config::Config;
use crate::web::{FetchError, ResourceClient};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no WebID reported by {endpoint} (status {status})")]
    NoWebId { endpoint: String, status: u16 },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Find the WebID of the current user
///
/// HEADs `url`; a 200 response whose `User` header starts with `http`
/// names the WebID. Otherwise the auth endpoint from `config` is tried
/// the same way.
pub async fn with_webid(
    client: &dyn ResourceClient,
    url: &str,
    config: &Config,
) -> Result<String, AuthError> {
    if let Some(webid) = probe(client, url).await {
        return Ok(webid);
    }
    debug!(url, endpoint = %config.auth_endpoint, "no WebID on resource, trying auth endpoint");

    let meta = client.head(&config.auth_endpoint).await?;
    match (meta.status, meta.webid()) {
        (200, Some(webid)) => Ok(webid.to_string()),
        (status, _) => Err(AuthError::NoWebId {
            endpoint: config.auth_endpoint.clone(),
            status,
        }),
    }
}

async fn probe(client: &dyn ResourceClient, url: &str) -> Option<String> {
    let meta = match client.head(url).await {
        Ok(meta) => meta,
        Err(err) => {
            debug!(url, error = %err, "WebID probe failed");
            return None;
        }
    };
    if meta.status != 200 {
        return None;
    }
    meta.webid().map(str::to_string)
}
