//! URL helpers: fragment stripping and cross-origin proxy rewriting

use super::error::FetchError;
use url::Url;

/// The document part of a URL (everything before `#`)
pub fn document_url(url: &str) -> &str {
    url.split_once('#').map_or(url, |(doc, _)| doc)
}

/// Rewrite `target` through `template` when it lies outside `origin`
///
/// `{uri}` in the template is replaced with the percent-encoded target.
/// Targets on the calling origin, or calls without an origin or template,
/// are returned unchanged.
pub fn proxied_url(
    target: &str,
    origin: Option<&str>,
    template: Option<&str>,
) -> Result<String, FetchError> {
    let parsed = Url::parse(target).map_err(|e| FetchError::InvalidUrl {
        url: target.to_string(),
        message: e.to_string(),
    })?;

    let (Some(origin), Some(template)) = (origin, template) else {
        return Ok(target.to_string());
    };
    let origin = Url::parse(origin).map_err(|e| FetchError::InvalidUrl {
        url: origin.to_string(),
        message: e.to_string(),
    })?;

    if parsed.origin() == origin.origin() {
        return Ok(target.to_string());
    }
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    Ok(template.replace("{uri}", &encoded))
}
