//! TravelHub client: browse, author and manage travel articles stored in a
//! headless content API.
//!
//! Layers, leaves first:
//!
//! ```text
//! cli ──→ store ──→ api ──→ http ──→ content API
//!           │
//!           └──→ validation
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod http;
pub mod logging;
pub mod models;
pub mod store;
pub mod validation;
