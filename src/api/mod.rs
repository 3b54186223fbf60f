//! Resource services: one method per REST operation.
//!
//! Services are stateless apart from their `ApiClient` handle. They build
//! endpoints and query strings, wrap write payloads in the `{ data: ... }`
//! envelope, and pass every client error through unchanged.

mod articles;
mod auth;
mod categories;
mod comments;
mod upload;

pub use articles::{ArticleQuery, ArticleService};
pub use auth::AuthService;
pub use categories::CategoryService;
pub use comments::CommentService;
pub use upload::UploadService;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::Config;
use crate::http::{ApiClient, ApiError};

/// Query directive asking the backend to inline every relation.
pub(crate) const POPULATE_ALL: &str = "*";

/// Bytes escaped inside a single path segment (WHATWG path set plus `/` and `%`).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Endpoint for one entity of `collection`, with `document_id` as a single
/// encoded path segment.
///
/// Empty and dot-segment ids are rejected, since URL normalization would
/// resolve them onto a different resource.
pub(crate) fn entity_endpoint(collection: &str, document_id: &str) -> Result<String, ApiError> {
    if matches!(document_id, "" | "." | "..") {
        return Err(ApiError::InvalidDocumentId {
            id: document_id.to_string(),
        });
    }
    Ok(format!(
        "/api/{}/{}",
        collection,
        utf8_percent_encode(document_id, PATH_SEGMENT)
    ))
}

/// All resource services sharing one client.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub articles: ArticleService,
    pub categories: CategoryService,
    pub comments: CommentService,
    pub upload: UploadService,
}

impl Services {
    pub fn new(client: ApiClient, placeholder_cover_url: impl Into<String>) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            articles: ArticleService::new(client.clone(), placeholder_cover_url),
            categories: CategoryService::new(client.clone()),
            comments: CommentService::new(client.clone()),
            upload: UploadService::new(client),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = ApiClient::new(&config.api.base_url)?;
        Ok(Self::new(
            client,
            config.articles.placeholder_cover_url.clone(),
        ))
    }
}
