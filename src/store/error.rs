use thiserror::Error;

use crate::http::ApiError;
use crate::validation::FieldErrors;

/// Failure of a form submission through the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The form was rejected locally; nothing was sent.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl StoreError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            StoreError::Validation(errors) => Some(errors),
            StoreError::Api(_) => None,
        }
    }
}
