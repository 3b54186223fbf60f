use serde::Deserialize;
use serde_json::Value;

/// Asset descriptor returned by the upload endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedAsset {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub formats: Option<Value>,
    #[serde(default, deserialize_with = "super::nullable::or_default")]
    pub hash: String,
    #[serde(default, deserialize_with = "super::nullable::or_default")]
    pub ext: String,
    #[serde(default, deserialize_with = "super::nullable::or_default")]
    pub mime: String,
    /// Size in kilobytes, as reported by the backend.
    #[serde(default, deserialize_with = "super::nullable::or_default")]
    pub size: f64,
    pub url: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default, deserialize_with = "super::nullable::or_default")]
    pub provider: String,
    #[serde(default, rename = "provider_metadata")]
    pub provider_metadata: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
