use parking_lot::RwLock;

use crate::api::{ArticleQuery, Services};
use crate::http::ApiError;
use crate::models::{
    AuthToken, CreateArticleRequest, LoginRequest, RegisterRequest, UpdateArticleRequest, UserPatch,
};
use crate::store::error::StoreError;
use crate::store::intent::{ArticlesIntent, AuthIntent, CategoriesIntent, StoreIntent};
use crate::store::mvi::Reducer;
use crate::store::reducer::StoreReducer;
use crate::store::session::{PersistedSession, SessionStore};
use crate::store::state::AppState;
use crate::validation::{ArticleForm, LoginForm, RegisterForm, Validate};

#[derive(Debug, Clone, Copy)]
enum Partition {
    Auth,
    Articles,
    Categories,
}

impl Partition {
    fn generation(self, state: &AppState) -> u64 {
        match self {
            Partition::Auth => state.auth.generation,
            Partition::Articles => state.articles.generation,
            Partition::Categories => state.categories.generation,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Partition::Auth => "auth",
            Partition::Articles => "articles",
            Partition::Categories => "categories",
        }
    }
}

/// The application store.
///
/// Read actions (list and detail fetches) record failures in the owning
/// partition and return normally. Write actions (login, register, create,
/// update, delete) record the failure and also return it to the caller.
/// The lock is never held across an await point.
pub struct AppStore {
    services: Services,
    session: Option<SessionStore>,
    state: RwLock<AppState>,
}

impl AppStore {
    /// Store without persistence; every run starts logged out.
    pub fn new(services: Services) -> Self {
        Self {
            services,
            session: None,
            state: RwLock::new(AppState::default()),
        }
    }

    /// Store backed by a session file. A stored session is restored
    /// immediately; an unreadable file is ignored.
    pub fn with_session(services: Services, session: SessionStore) -> Self {
        let store = Self {
            services,
            session: Some(session),
            state: RwLock::new(AppState::default()),
        };
        store.restore();
        store
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Immutable copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    // -- Auth -----------------------------------------------------------------

    pub async fn login(&self, credentials: &LoginRequest) -> Result<(), ApiError> {
        let generation = self.begin(Partition::Auth, StoreIntent::Auth(AuthIntent::Started));

        match self.services.auth.login(credentials).await {
            Ok(response) => {
                let applied = self.complete(
                    Partition::Auth,
                    generation,
                    StoreIntent::Auth(AuthIntent::LoggedIn {
                        generation,
                        user: response.user,
                        token: response.jwt,
                    }),
                );
                if applied {
                    self.persist();
                }
                Ok(())
            }
            Err(err) => {
                self.fail_auth(generation, &err, "Login failed");
                Err(err)
            }
        }
    }

    /// Create an account. Does not log the new user in.
    pub async fn register(&self, user: &RegisterRequest) -> Result<(), ApiError> {
        let generation = self.begin(Partition::Auth, StoreIntent::Auth(AuthIntent::Started));

        match self.services.auth.register(user).await {
            Ok(()) => {
                self.complete(
                    Partition::Auth,
                    generation,
                    StoreIntent::Auth(AuthIntent::Registered { generation }),
                );
                Ok(())
            }
            Err(err) => {
                self.fail_auth(generation, &err, "Registration failed");
                Err(err)
            }
        }
    }

    /// Forget the session and reset every user-scoped partition.
    pub fn logout(&self) {
        self.dispatch(StoreIntent::LoggedOut);
        self.persist();
        tracing::debug!("Logged out");
    }

    /// Merge fields into the cached user. No-op when logged out.
    pub fn update_user(&self, patch: UserPatch) {
        self.dispatch(StoreIntent::Auth(AuthIntent::UserPatched(patch)));
        self.persist();
    }

    /// Re-fetch the logged-in user. No-op without a token.
    pub async fn refresh_user(&self) {
        let Some(token) = self.token() else {
            return;
        };
        let generation = self.begin(Partition::Auth, StoreIntent::Auth(AuthIntent::Started));

        match self.services.auth.current_user(&token).await {
            Ok(user) => {
                let applied = self.complete(
                    Partition::Auth,
                    generation,
                    StoreIntent::Auth(AuthIntent::UserRefreshed { generation, user }),
                );
                if applied {
                    self.persist();
                }
            }
            Err(err) => self.fail_auth(generation, &err, "Failed to fetch user"),
        }
    }

    pub fn clear_auth_error(&self) {
        self.dispatch(StoreIntent::Auth(AuthIntent::ClearError));
    }

    // -- Articles -------------------------------------------------------------

    /// Fetch a page of articles.
    ///
    /// With `append` the page is added after the cached list; otherwise it
    /// replaces it. Appending a page after the first shows as "loading more".
    pub async fn fetch_articles(&self, query: &ArticleQuery, append: bool) {
        let loading_more = append && query.page.is_some_and(|p| p > 1);
        let generation = self.begin(
            Partition::Articles,
            StoreIntent::Articles(ArticlesIntent::Started { loading_more }),
        );

        match self.services.articles.list(query).await {
            Ok(response) => {
                tracing::debug!(
                    page = response.meta.pagination.page,
                    page_count = response.meta.pagination.page_count,
                    received = response.data.len(),
                    append,
                    "Fetched articles"
                );
                self.complete(
                    Partition::Articles,
                    generation,
                    StoreIntent::Articles(ArticlesIntent::PageLoaded {
                        generation,
                        articles: response.data,
                        pagination: response.meta.pagination,
                        append,
                    }),
                );
            }
            Err(err) => self.fail_articles(generation, &err, "Failed to fetch articles"),
        }
    }

    pub async fn fetch_article_by_id(&self, document_id: &str) {
        let token = self.token();
        let generation = self.begin(
            Partition::Articles,
            StoreIntent::Articles(ArticlesIntent::Started {
                loading_more: false,
            }),
        );

        match self.services.articles.get(document_id, token.as_ref()).await {
            Ok(response) => {
                self.complete(
                    Partition::Articles,
                    generation,
                    StoreIntent::Articles(ArticlesIntent::DetailLoaded {
                        generation,
                        article: response.data,
                    }),
                );
            }
            Err(err) => self.fail_articles(generation, &err, "Failed to fetch article"),
        }
    }

    pub async fn create_article(&self, request: &CreateArticleRequest) -> Result<(), ApiError> {
        let token = self.require_token()?;
        let generation = self.begin_article_write();

        match self.services.articles.create(request, &token).await {
            Ok(_) => {
                self.complete(
                    Partition::Articles,
                    generation,
                    StoreIntent::Articles(ArticlesIntent::Created { generation }),
                );
                Ok(())
            }
            Err(err) => {
                self.fail_articles(generation, &err, "Failed to create article");
                Err(err)
            }
        }
    }

    pub async fn update_article(
        &self,
        document_id: &str,
        request: &UpdateArticleRequest,
    ) -> Result<(), ApiError> {
        let token = self.require_token()?;
        let generation = self.begin_article_write();

        match self
            .services
            .articles
            .update(document_id, request, &token)
            .await
        {
            Ok(response) => {
                self.complete(
                    Partition::Articles,
                    generation,
                    StoreIntent::Articles(ArticlesIntent::Updated {
                        generation,
                        article: response.data,
                    }),
                );
                Ok(())
            }
            Err(err) => {
                self.fail_articles(generation, &err, "Failed to update article");
                Err(err)
            }
        }
    }

    pub async fn delete_article(&self, document_id: &str) -> Result<(), ApiError> {
        let token = self.require_token()?;
        let generation = self.begin_article_write();

        match self.services.articles.delete(document_id, &token).await {
            Ok(()) => {
                self.complete(
                    Partition::Articles,
                    generation,
                    StoreIntent::Articles(ArticlesIntent::Deleted {
                        generation,
                        document_id: document_id.to_string(),
                    }),
                );
                Ok(())
            }
            Err(err) => {
                self.fail_articles(generation, &err, "Failed to delete article");
                Err(err)
            }
        }
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.dispatch(StoreIntent::Articles(ArticlesIntent::SearchTermSet(
            term.into(),
        )));
    }

    pub fn set_selected_category(&self, category: impl Into<String>) {
        self.dispatch(StoreIntent::Articles(ArticlesIntent::SelectedCategorySet(
            category.into(),
        )));
    }

    pub fn clear_article_error(&self) {
        self.dispatch(StoreIntent::Articles(ArticlesIntent::ClearError));
    }

    pub fn reset_articles(&self) {
        self.dispatch(StoreIntent::Articles(ArticlesIntent::Reset));
    }

    // -- Categories -----------------------------------------------------------

    pub async fn fetch_categories(&self) {
        let token = self.token();
        let generation = self.begin(
            Partition::Categories,
            StoreIntent::Categories(CategoriesIntent::Started),
        );

        match self.services.categories.list(token.as_ref()).await {
            Ok(response) => {
                self.complete(
                    Partition::Categories,
                    generation,
                    StoreIntent::Categories(CategoriesIntent::Loaded {
                        generation,
                        categories: response.data,
                    }),
                );
            }
            Err(err) => {
                self.complete(
                    Partition::Categories,
                    generation,
                    StoreIntent::Categories(CategoriesIntent::Failed {
                        generation,
                        message: message_or(&err, "Failed to fetch categories"),
                    }),
                );
            }
        }
    }

    pub fn clear_category_error(&self) {
        self.dispatch(StoreIntent::Categories(CategoriesIntent::ClearError));
    }

    // -- Form submission ------------------------------------------------------

    /// Validate then log in. Nothing is sent when validation fails.
    pub async fn submit_login(&self, form: &LoginForm) -> Result<(), StoreError> {
        form.validate().map_err(StoreError::Validation)?;
        self.login(&LoginRequest::from(form)).await?;
        Ok(())
    }

    pub async fn submit_register(&self, form: &RegisterForm) -> Result<(), StoreError> {
        form.validate().map_err(StoreError::Validation)?;
        self.register(&RegisterRequest::from(form)).await?;
        Ok(())
    }

    pub async fn submit_new_article(&self, form: &ArticleForm) -> Result<(), StoreError> {
        form.validate().map_err(StoreError::Validation)?;
        self.create_article(&form.to_create_request()).await?;
        Ok(())
    }

    pub async fn submit_article_edit(
        &self,
        document_id: &str,
        form: &ArticleForm,
    ) -> Result<(), StoreError> {
        form.validate().map_err(StoreError::Validation)?;
        self.update_article(document_id, &form.to_update_request())
            .await?;
        Ok(())
    }

    // -- Internals ------------------------------------------------------------

    fn token(&self) -> Option<AuthToken> {
        self.state.read().auth.token.clone()
    }

    fn require_token(&self) -> Result<AuthToken, ApiError> {
        self.token().ok_or(ApiError::AuthenticationRequired)
    }

    fn dispatch(&self, intent: StoreIntent) {
        let mut guard = self.state.write();
        let current = std::mem::take(&mut *guard);
        *guard = StoreReducer::reduce(current, intent);
    }

    /// Dispatch a start intent and return the partition's new generation.
    fn begin(&self, partition: Partition, intent: StoreIntent) -> u64 {
        let mut guard = self.state.write();
        let current = std::mem::take(&mut *guard);
        *guard = StoreReducer::reduce(current, intent);
        partition.generation(&guard)
    }

    fn begin_article_write(&self) -> u64 {
        self.begin(
            Partition::Articles,
            StoreIntent::Articles(ArticlesIntent::Started {
                loading_more: false,
            }),
        )
    }

    /// Apply a completion unless a newer action on the same partition has
    /// started since. Returns whether the intent was applied.
    fn complete(&self, partition: Partition, generation: u64, intent: StoreIntent) -> bool {
        let mut guard = self.state.write();
        let latest = partition.generation(&guard);
        if latest != generation {
            tracing::warn!(
                partition = partition.name(),
                generation,
                latest,
                "Discarding stale response"
            );
            return false;
        }
        let current = std::mem::take(&mut *guard);
        *guard = StoreReducer::reduce(current, intent);
        true
    }

    fn fail_auth(&self, generation: u64, err: &ApiError, fallback: &str) {
        self.complete(
            Partition::Auth,
            generation,
            StoreIntent::Auth(AuthIntent::Failed {
                generation,
                message: message_or(err, fallback),
            }),
        );
    }

    fn fail_articles(&self, generation: u64, err: &ApiError, fallback: &str) {
        self.complete(
            Partition::Articles,
            generation,
            StoreIntent::Articles(ArticlesIntent::Failed {
                generation,
                message: message_or(err, fallback),
            }),
        );
    }

    fn restore(&self) {
        let Some(session) = &self.session else {
            return;
        };
        match session.load() {
            Ok(Some(persisted)) => {
                tracing::debug!(
                    authenticated = persisted.is_authenticated,
                    "Restored session"
                );
                self.dispatch(StoreIntent::Auth(AuthIntent::Restored(persisted)));
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring unreadable session file");
            }
        }
    }

    fn persist(&self) {
        let Some(session) = &self.session else {
            return;
        };
        let persisted = PersistedSession::from(&self.state.read().auth);
        if let Err(err) = session.save(&persisted) {
            tracing::warn!(error = %err, "Failed to persist session");
        }
    }
}

/// The error's message, or `fallback` when it has none.
fn message_or(err: &ApiError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
