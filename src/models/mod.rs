//! Typed entities exchanged with the content API.
//!
//! Every entity is owned by the backend; the client only ever holds
//! transient or cached copies. Field names follow the backend's camelCase
//! JSON via serde renames.

mod article;
mod category;
mod comment;
mod envelope;
mod nullable;
mod token;
mod upload;
mod user;

pub use article::{Article, CreateArticleRequest, UpdateArticleRequest};
pub use category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
pub use comment::{Comment, CreateCommentRequest, UpdateCommentRequest};
pub use envelope::{DataEnvelope, ListEnvelope, ListMeta, Pagination, ResponseMeta};
pub use token::AuthToken;
pub use upload::UploadedAsset;
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User, UserPatch};
