//! Form validation run immediately before submission.
//!
//! Each form checks its fields synchronously and reports the first violated
//! rule per field. Validation never touches the network.

mod article;
mod auth;
mod errors;
mod rules;

pub use article::ArticleForm;
pub use auth::{LoginForm, RegisterForm};
pub use errors::FieldErrors;

/// A form that can be checked before it is submitted.
pub trait Validate {
    /// `Ok(())` when every field passes, otherwise the per-field messages.
    fn validate(&self) -> Result<(), FieldErrors>;
}
