use serde_json::Value;

use crate::api::{entity_endpoint, POPULATE_ALL};
use crate::http::{ApiClient, ApiError, RequestBody};
use crate::models::{
    AuthToken, Comment, CreateCommentRequest, DataEnvelope, ListEnvelope, UpdateCommentRequest,
};

/// Comment endpoints. Reads always populate relations.
#[derive(Clone)]
pub struct CommentService {
    client: ApiClient,
}

impl CommentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, token: Option<&AuthToken>) -> Result<ListEnvelope<Comment>, ApiError> {
        self.client
            .get(&format!("/api/comments?populate={}", POPULATE_ALL), token)
            .await
    }

    pub async fn get(
        &self,
        document_id: &str,
        token: Option<&AuthToken>,
    ) -> Result<DataEnvelope<Comment>, ApiError> {
        let endpoint = entity_endpoint("comments", document_id)?;
        self.client
            .get(&format!("{}?populate={}", endpoint, POPULATE_ALL), token)
            .await
    }

    pub async fn create(
        &self,
        request: &CreateCommentRequest,
        token: &AuthToken,
    ) -> Result<DataEnvelope<Comment>, ApiError> {
        let body = RequestBody::json(&DataEnvelope::new(request))?;
        self.client.post("/api/comments", body, Some(token)).await
    }

    pub async fn update(
        &self,
        document_id: &str,
        request: &UpdateCommentRequest,
        token: &AuthToken,
    ) -> Result<DataEnvelope<Comment>, ApiError> {
        let body = RequestBody::json(&DataEnvelope::new(request))?;
        let endpoint = entity_endpoint("comments", document_id)?;
        self.client.put(&endpoint, body, Some(token)).await
    }

    pub async fn delete(&self, document_id: &str, token: &AuthToken) -> Result<(), ApiError> {
        let endpoint = entity_endpoint("comments", document_id)?;
        self.client
            .delete::<Value>(&endpoint, Some(token))
            .await
            .map(|_| ())
    }
}
