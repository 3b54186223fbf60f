use serde_json::Value;
use url::form_urlencoded;

use crate::api::{entity_endpoint, POPULATE_ALL};
use crate::http::{ApiClient, ApiError, RequestBody};
use crate::models::{
    Article, AuthToken, CreateArticleRequest, DataEnvelope, ListEnvelope, UpdateArticleRequest,
};

/// Filters and pagination for the article list endpoint.
///
/// Unset, zero, and empty values are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Case-insensitive exact match on the title.
    pub title: Option<String>,
    /// Case-insensitive exact match on the category name.
    pub category_name: Option<String>,
}

impl ArticleQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// Encoded query string; `populate=*` is always present.
    pub fn to_query_string(&self) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());
        params.append_pair("populate", POPULATE_ALL);

        if let Some(page) = self.page.filter(|p| *p > 0) {
            params.append_pair("pagination[page]", &page.to_string());
        }
        if let Some(size) = self.page_size.filter(|s| *s > 0) {
            params.append_pair("pagination[pageSize]", &size.to_string());
        }
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            params.append_pair("filters[title][$eqi]", title);
        }
        if let Some(name) = self.category_name.as_deref().filter(|n| !n.is_empty()) {
            params.append_pair("filters[category][name][$eqi]", name);
        }

        params.finish()
    }
}

#[derive(Clone)]
pub struct ArticleService {
    client: ApiClient,
    placeholder_cover_url: String,
}

impl ArticleService {
    pub fn new(client: ApiClient, placeholder_cover_url: impl Into<String>) -> Self {
        Self {
            client,
            placeholder_cover_url: placeholder_cover_url.into(),
        }
    }

    pub async fn list(&self, query: &ArticleQuery) -> Result<ListEnvelope<Article>, ApiError> {
        let endpoint = format!("/api/articles?{}", query.to_query_string());
        self.client.get(&endpoint, None).await
    }

    pub async fn get(
        &self,
        document_id: &str,
        token: Option<&AuthToken>,
    ) -> Result<DataEnvelope<Article>, ApiError> {
        let endpoint = entity_endpoint("articles", document_id)?;
        self.client.get(&endpoint, token).await
    }

    /// Create an article, substituting the placeholder cover when none is given.
    pub async fn create(
        &self,
        request: &CreateArticleRequest,
        token: &AuthToken,
    ) -> Result<DataEnvelope<Article>, ApiError> {
        let mut data = request.clone();
        if data.cover_image_url.as_deref().map_or(true, str::is_empty) {
            data.cover_image_url = Some(self.placeholder_cover_url.clone());
        }

        let body = RequestBody::json(&DataEnvelope::new(data))?;
        self.client.post("/api/articles", body, Some(token)).await
    }

    pub async fn update(
        &self,
        document_id: &str,
        request: &UpdateArticleRequest,
        token: &AuthToken,
    ) -> Result<DataEnvelope<Article>, ApiError> {
        let body = RequestBody::json(&DataEnvelope::new(request))?;
        let endpoint = entity_endpoint("articles", document_id)?;
        self.client.put(&endpoint, body, Some(token)).await
    }

    pub async fn delete(&self, document_id: &str, token: &AuthToken) -> Result<(), ApiError> {
        let endpoint = entity_endpoint("articles", document_id)?;
        self.client
            .delete::<Value>(&endpoint, Some(token))
            .await
            .map(|_| ())
    }
}
