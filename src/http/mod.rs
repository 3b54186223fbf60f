//! HTTP client for the content API.
//!
//! Wraps `reqwest` with the conventions every resource service relies on:
//! JSON or multipart encoding chosen per call, optional bearer auth, and a
//! single error type carrying the message the backend reported.

mod client;
mod error;

pub use client::{ApiClient, RequestBody};
pub use error::ApiError;
