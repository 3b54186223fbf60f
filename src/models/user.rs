use serde::{Deserialize, Serialize};

use super::token::AuthToken;

/// An authenticated account as returned by the auth and `users/me` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub document_id: Option<String>,
    pub username: String,
    pub email: String,
    #[serde(default, deserialize_with = "super::nullable::or_default")]
    pub provider: String,
    #[serde(default, deserialize_with = "super::nullable::or_default")]
    pub confirmed: bool,
    #[serde(default, deserialize_with = "super::nullable::or_default")]
    pub blocked: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    /// Merge a partial update into this record.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(confirmed) = patch.confirmed {
            self.confirmed = confirmed;
        }
        if let Some(blocked) = patch.blocked {
            self.blocked = blocked;
        }
    }
}

/// Partial user update applied to the cached user record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub confirmed: Option<bool>,
    pub blocked: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// Email or username.
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response body of the login and registration endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub jwt: AuthToken,
    pub user: User,
}
