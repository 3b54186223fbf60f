use crate::models::{CreateArticleRequest, UpdateArticleRequest};
use crate::validation::errors::FieldErrors;
use crate::validation::rules::{is_url, min_chars};
use crate::validation::Validate;

const MIN_TITLE: usize = 5;
const MIN_DESCRIPTION: usize = 50;

/// Article create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleForm {
    pub title: String,
    pub description: String,
    /// Category id; `0` means nothing was selected.
    pub category: u64,
    /// Optional cover image. An empty string counts as not provided.
    pub cover_image_url: Option<String>,
}

impl ArticleForm {
    fn cover(&self) -> Option<&str> {
        self.cover_image_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn to_create_request(&self) -> CreateArticleRequest {
        CreateArticleRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            cover_image_url: self.cover().map(str::to_string),
            category: self.category,
        }
    }

    pub fn to_update_request(&self) -> UpdateArticleRequest {
        UpdateArticleRequest {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            cover_image_url: self.cover().map(str::to_string),
            category: Some(self.category),
        }
    }
}

impl Validate for ArticleForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            min_chars(&self.title, MIN_TITLE),
            "title",
            "Title must be at least 5 characters",
        );
        errors.check(
            min_chars(&self.description, MIN_DESCRIPTION),
            "description",
            "Description must be at least 50 characters",
        );
        errors.check(self.category >= 1, "category", "Please select a category");
        errors.check(
            self.cover().map_or(true, is_url),
            "cover_image_url",
            "Please enter a valid image URL",
        );
        errors.into_result()
    }
}
