//! Resource transfer: single-resource LDP operations over HTTP
//!
//! `ResourceClient` is the seam; `HttpClient` talks to real servers and
//! `MockClient` serves canned documents in tests.

mod error;
mod http;
mod link_header;
mod location;
mod meta;
mod mock;
mod parse;
mod traits;

pub use error::{FetchError, FetchResult};
pub use http::HttpClient;
pub use link_header::parse_link_header;
pub use location::{document_url, proxied_url};
pub use meta::{ResourceMeta, ServerError};
pub use mock::{MockClient, RecordedRequest};
pub use parse::{format_for, parse_document};
pub use traits::{ResourceClient, ResourceKind};
