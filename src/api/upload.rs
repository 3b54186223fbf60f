use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::http::{ApiClient, ApiError};
use crate::models::{AuthToken, UploadedAsset};

#[derive(Clone)]
pub struct UploadService {
    client: ApiClient,
}

impl UploadService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Upload a file from disk.
    pub async fn upload_file(
        &self,
        path: &Path,
        token: &AuthToken,
    ) -> Result<Vec<UploadedAsset>, ApiError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        self.upload_bytes(file_name, bytes, token).await
    }

    /// Upload in-memory content under the multipart field `files`.
    pub async fn upload_bytes(
        &self,
        file_name: String,
        bytes: Vec<u8>,
        token: &AuthToken,
    ) -> Result<Vec<UploadedAsset>, ApiError> {
        let form = Form::new().part("files", Part::bytes(bytes).file_name(file_name));
        self.client
            .post_multipart("/api/upload", form, Some(token))
            .await
    }
}
