use reqwest::multipart::Form;
use serde_json::Value;

use crate::http::{ApiClient, ApiError};
use crate::models::{AuthResponse, AuthToken, LoginRequest, RegisterRequest, User};

/// Credential endpoints. The backend expects multipart form fields here,
/// not JSON.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let form = Form::new()
            .text("identifier", credentials.identifier.clone())
            .text("password", credentials.password.clone());

        self.client
            .post_multipart("/api/auth/local", form, None)
            .await
    }

    /// Create an account.
    ///
    /// The body is not decoded: with email confirmation enabled the backend
    /// answers without a `jwt`, and registering never logs in anyway.
    pub async fn register(&self, user: &RegisterRequest) -> Result<(), ApiError> {
        let form = Form::new()
            .text("username", user.username.clone())
            .text("email", user.email.clone())
            .text("password", user.password.clone());

        self.client
            .post_multipart::<Value>("/api/auth/local/register", form, None)
            .await
            .map(|_| ())
    }

    pub async fn current_user(&self, token: &AuthToken) -> Result<User, ApiError> {
        self.client.get("/api/users/me", Some(token)).await
    }
}
