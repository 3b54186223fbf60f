use serde::{Deserialize, Serialize};

use super::article::Article;
use super::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    #[serde(default, deserialize_with = "super::nullable::or_default")]
    pub document_id: String,
    pub content: String,
    /// Present when the request asked the backend to populate relations.
    #[serde(default)]
    pub article: Option<Box<Article>>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
    /// Numeric id of the article being commented on.
    pub article: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCommentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
