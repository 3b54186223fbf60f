use serde_json::Value;

use crate::api::entity_endpoint;
use crate::http::{ApiClient, ApiError, RequestBody};
use crate::models::{
    AuthToken, Category, CreateCategoryRequest, DataEnvelope, ListEnvelope, UpdateCategoryRequest,
};

#[derive(Clone)]
pub struct CategoryService {
    client: ApiClient,
}

impl CategoryService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, token: Option<&AuthToken>) -> Result<ListEnvelope<Category>, ApiError> {
        self.client.get("/api/categories", token).await
    }

    pub async fn get(
        &self,
        document_id: &str,
        token: Option<&AuthToken>,
    ) -> Result<DataEnvelope<Category>, ApiError> {
        let endpoint = entity_endpoint("categories", document_id)?;
        self.client.get(&endpoint, token).await
    }

    pub async fn create(
        &self,
        request: &CreateCategoryRequest,
        token: &AuthToken,
    ) -> Result<DataEnvelope<Category>, ApiError> {
        let body = RequestBody::json(&DataEnvelope::new(request))?;
        self.client.post("/api/categories", body, Some(token)).await
    }

    pub async fn update(
        &self,
        document_id: &str,
        request: &UpdateCategoryRequest,
        token: &AuthToken,
    ) -> Result<DataEnvelope<Category>, ApiError> {
        let body = RequestBody::json(&DataEnvelope::new(request))?;
        let endpoint = entity_endpoint("categories", document_id)?;
        self.client.put(&endpoint, body, Some(token)).await
    }

    pub async fn delete(&self, document_id: &str, token: &AuthToken) -> Result<(), ApiError> {
        let endpoint = entity_endpoint("categories", document_id)?;
        self.client
            .delete::<Value>(&endpoint, Some(token))
            .await
            .map(|_| ())
    }
}
