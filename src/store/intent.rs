use crate::models::{Article, AuthToken, Category, Pagination, User, UserPatch};
use crate::store::mvi::Intent;
use crate::store::session::PersistedSession;

/// Everything that can change application state.
#[derive(Debug, Clone)]
pub enum StoreIntent {
    Auth(AuthIntent),
    Articles(ArticlesIntent),
    Categories(CategoriesIntent),
    /// Clears auth and resets the articles partition. Categories stay.
    LoggedOut,
}

impl Intent for StoreIntent {}

/// Completion intents carry the generation their action was started under.
#[derive(Debug, Clone)]
pub enum AuthIntent {
    Started,
    LoggedIn {
        generation: u64,
        user: User,
        token: AuthToken,
    },
    Registered {
        generation: u64,
    },
    UserRefreshed {
        generation: u64,
        user: User,
    },
    Failed {
        generation: u64,
        message: String,
    },
    UserPatched(UserPatch),
    /// Session loaded from disk at startup.
    Restored(PersistedSession),
    ClearError,
}

#[derive(Debug, Clone)]
pub enum ArticlesIntent {
    /// `loading_more` marks a continuation page being appended.
    Started {
        loading_more: bool,
    },
    PageLoaded {
        generation: u64,
        articles: Vec<Article>,
        pagination: Pagination,
        append: bool,
    },
    DetailLoaded {
        generation: u64,
        article: Article,
    },
    Created {
        generation: u64,
    },
    Updated {
        generation: u64,
        article: Article,
    },
    Deleted {
        generation: u64,
        document_id: String,
    },
    Failed {
        generation: u64,
        message: String,
    },
    SearchTermSet(String),
    SelectedCategorySet(String),
    ClearError,
    /// Clear list, detail, cursors and filters. Loading and error stay.
    Reset,
}

#[derive(Debug, Clone)]
pub enum CategoriesIntent {
    Started,
    Loaded {
        generation: u64,
        categories: Vec<Category>,
    },
    Failed {
        generation: u64,
        message: String,
    },
    ClearError,
}
