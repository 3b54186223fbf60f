use crate::models::{LoginRequest, RegisterRequest};
use crate::validation::errors::FieldErrors;
use crate::validation::rules::{is_email, min_chars};
use crate::validation::Validate;

const MIN_PASSWORD: usize = 6;
const MIN_USERNAME: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email or username.
    pub identifier: String,
    pub password: String,
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            min_chars(&self.identifier, 1),
            "identifier",
            "Email or username is required",
        );
        errors.check(
            min_chars(&self.password, MIN_PASSWORD),
            "password",
            "Password must be at least 6 characters",
        );
        errors.into_result()
    }
}

impl From<&LoginForm> for LoginRequest {
    fn from(form: &LoginForm) -> Self {
        Self {
            identifier: form.identifier.clone(),
            password: form.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Validate for RegisterForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            min_chars(&self.username, MIN_USERNAME),
            "username",
            "Username must be at least 2 characters",
        );
        errors.check(is_email(&self.email), "email", "Please enter a valid email");
        errors.check(
            min_chars(&self.password, MIN_PASSWORD),
            "password",
            "Password must be at least 6 characters",
        );
        errors.into_result()
    }
}

impl From<&RegisterForm> for RegisterRequest {
    fn from(form: &RegisterForm) -> Self {
        Self {
            username: form.username.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
        }
    }
}
