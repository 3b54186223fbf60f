//! Application state snapshot: the auth, articles and categories partitions.

use crate::models::{Article, AuthToken, Category, User};
use crate::store::mvi::StateSnapshot;

/// Request lifecycle of a partition.
///
/// A single enum so that "loading" and "loading more" can never both be
/// set. A new action may start from any phase; errors do not block retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Loading,
    /// A further page is being appended; the current list stays visible.
    LoadingMore,
    Succeeded,
    Failed,
}

impl RequestPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loading_more(self) -> bool {
        matches!(self, Self::LoadingMore)
    }

    pub fn is_busy(self) -> bool {
        self.is_loading() || self.is_loading_more()
    }
}

/// Identity of the logged-in user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<AuthToken>,
    pub is_authenticated: bool,
    pub phase: RequestPhase,
    pub error: Option<String>,
    /// Bumped whenever an auth action starts; responses carrying an older
    /// value are discarded.
    pub generation: u64,
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }
}

/// Article list, detail, and pagination cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticlesState {
    pub articles: Vec<Article>,
    pub current_article: Option<Article>,
    pub phase: RequestPhase,
    pub error: Option<String>,
    pub current_page: u32,
    pub total_pages: u32,
    pub search_term: String,
    pub selected_category: String,
    pub generation: u64,
}

impl Default for ArticlesState {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            current_article: None,
            phase: RequestPhase::Idle,
            error: None,
            current_page: 1,
            total_pages: 1,
            search_term: String::new(),
            selected_category: String::new(),
            generation: 0,
        }
    }
}

impl ArticlesState {
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn is_loading_more(&self) -> bool {
        self.phase.is_loading_more()
    }

    /// Whether another page exists after the current one.
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoriesState {
    pub categories: Vec<Category>,
    pub phase: RequestPhase,
    pub error: Option<String>,
    pub generation: u64,
}

impl CategoriesState {
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub articles: ArticlesState,
    pub categories: CategoriesState,
}

impl StateSnapshot for AppState {}

impl AppState {
    /// Whether the logged-in user owns the article currently shown.
    ///
    /// Only gates what the UI offers; the backend enforces ownership.
    pub fn owns_current_article(&self) -> bool {
        match (&self.auth.user, &self.articles.current_article) {
            (Some(user), Some(article)) => article.is_owned_by(user),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn articles_default_starts_on_first_page() {
        let state = ArticlesState::default();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 1);
        assert!(!state.has_more());
        assert!(!state.is_loading());
        assert!(!state.is_loading_more());
    }

    #[test]
    fn phase_flags_are_exclusive() {
        for phase in [
            RequestPhase::Idle,
            RequestPhase::Loading,
            RequestPhase::LoadingMore,
            RequestPhase::Succeeded,
            RequestPhase::Failed,
        ] {
            assert!(!(phase.is_loading() && phase.is_loading_more()));
        }
    }

    #[test]
    fn nobody_owns_without_user() {
        assert!(!AppState::default().owns_current_article());
    }
}
