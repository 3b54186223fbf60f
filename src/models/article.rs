use serde::{Deserialize, Serialize};

use super::category::Category;
use super::comment::Comment;
use super::user::User;

/// A travel article. Relations are only filled in when the backend was
/// asked to populate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    pub document_id: String,
    pub title: String,
    #[serde(default, deserialize_with = "super::nullable::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "super::nullable::or_default", rename = "cover_image_url")]
    pub cover_image_url: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Article {
    /// Whether `user` authored this article.
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.user.as_ref().is_some_and(|owner| owner.id == user.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub description: String,
    /// When absent the article service substitutes its placeholder cover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// Numeric id of the owning category.
    pub category: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateArticleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
}
