use crate::store::intent::{ArticlesIntent, AuthIntent, CategoriesIntent, StoreIntent};
use crate::store::mvi::Reducer;
use crate::store::state::{AppState, ArticlesState, AuthState, CategoriesState, RequestPhase};

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = AppState;
    type Intent = StoreIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let AppState {
            auth,
            articles,
            categories,
        } = state;

        match intent {
            StoreIntent::Auth(intent) => AppState {
                auth: reduce_auth(auth, intent),
                articles,
                categories,
            },
            StoreIntent::Articles(intent) => AppState {
                auth,
                articles: reduce_articles(articles, intent),
                categories,
            },
            StoreIntent::Categories(intent) => AppState {
                auth,
                articles,
                categories: reduce_categories(categories, intent),
            },
            StoreIntent::LoggedOut => AppState {
                // Generations move forward so in-flight responses from the
                // old session are dropped.
                auth: AuthState {
                    generation: auth.generation + 1,
                    ..AuthState::default()
                },
                articles: ArticlesState {
                    generation: articles.generation + 1,
                    ..ArticlesState::default()
                },
                categories,
            },
        }
    }
}

fn reduce_auth(state: AuthState, intent: AuthIntent) -> AuthState {
    match intent {
        AuthIntent::Started => AuthState {
            phase: RequestPhase::Loading,
            error: None,
            generation: state.generation + 1,
            ..state
        },
        AuthIntent::LoggedIn {
            generation,
            user,
            token,
        } if generation == state.generation => AuthState {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
            phase: RequestPhase::Succeeded,
            error: None,
            ..state
        },
        AuthIntent::Registered { generation } if generation == state.generation => AuthState {
            phase: RequestPhase::Succeeded,
            error: None,
            ..state
        },
        AuthIntent::UserRefreshed { generation, user } if generation == state.generation => {
            AuthState {
                user: Some(user),
                phase: RequestPhase::Succeeded,
                error: None,
                ..state
            }
        }
        AuthIntent::Failed {
            generation,
            message,
        } if generation == state.generation => AuthState {
            phase: RequestPhase::Failed,
            error: Some(message),
            ..state
        },
        AuthIntent::UserPatched(patch) => match state.user {
            Some(mut user) => {
                user.apply(patch);
                AuthState {
                    user: Some(user),
                    ..state
                }
            }
            None => state,
        },
        AuthIntent::Restored(session) => AuthState {
            user: session.user,
            token: session.token,
            is_authenticated: session.is_authenticated,
            ..state
        },
        AuthIntent::ClearError => AuthState {
            error: None,
            phase: settle(state.phase),
            ..state
        },
        // Stale completion.
        _ => state,
    }
}

fn reduce_articles(state: ArticlesState, intent: ArticlesIntent) -> ArticlesState {
    match intent {
        ArticlesIntent::Started { loading_more } => ArticlesState {
            phase: if loading_more {
                RequestPhase::LoadingMore
            } else {
                RequestPhase::Loading
            },
            error: None,
            generation: state.generation + 1,
            ..state
        },
        ArticlesIntent::PageLoaded {
            generation,
            articles,
            pagination,
            append,
        } if generation == state.generation => {
            let articles = if append {
                let mut merged = state.articles;
                merged.extend(articles);
                merged
            } else {
                articles
            };
            ArticlesState {
                articles,
                current_page: pagination.page,
                total_pages: pagination.page_count,
                phase: RequestPhase::Succeeded,
                error: None,
                ..state
            }
        }
        ArticlesIntent::DetailLoaded {
            generation,
            article,
        } if generation == state.generation => ArticlesState {
            current_article: Some(article),
            phase: RequestPhase::Succeeded,
            error: None,
            ..state
        },
        ArticlesIntent::Created { generation } if generation == state.generation => {
            ArticlesState {
                phase: RequestPhase::Succeeded,
                error: None,
                ..state
            }
        }
        ArticlesIntent::Updated {
            generation,
            article,
        } if generation == state.generation => {
            let articles = state
                .articles
                .into_iter()
                .map(|existing| {
                    if existing.document_id == article.document_id {
                        article.clone()
                    } else {
                        existing
                    }
                })
                .collect();
            ArticlesState {
                articles,
                current_article: Some(article),
                phase: RequestPhase::Succeeded,
                error: None,
                ..state
            }
        }
        ArticlesIntent::Deleted {
            generation,
            document_id,
        } if generation == state.generation => {
            let articles = state
                .articles
                .into_iter()
                .filter(|a| a.document_id != document_id)
                .collect();
            let current_article = state
                .current_article
                .filter(|a| a.document_id != document_id);
            ArticlesState {
                articles,
                current_article,
                phase: RequestPhase::Succeeded,
                error: None,
                ..state
            }
        }
        ArticlesIntent::Failed {
            generation,
            message,
        } if generation == state.generation => ArticlesState {
            phase: RequestPhase::Failed,
            error: Some(message),
            ..state
        },
        ArticlesIntent::SearchTermSet(term) => ArticlesState {
            search_term: term,
            ..state
        },
        ArticlesIntent::SelectedCategorySet(category) => ArticlesState {
            selected_category: category,
            ..state
        },
        ArticlesIntent::ClearError => ArticlesState {
            error: None,
            phase: settle(state.phase),
            ..state
        },
        ArticlesIntent::Reset => {
            let initial = ArticlesState::default();
            ArticlesState {
                articles: initial.articles,
                current_article: initial.current_article,
                current_page: initial.current_page,
                total_pages: initial.total_pages,
                search_term: initial.search_term,
                selected_category: initial.selected_category,
                ..state
            }
        }
        // Stale completion.
        _ => state,
    }
}

fn reduce_categories(state: CategoriesState, intent: CategoriesIntent) -> CategoriesState {
    match intent {
        CategoriesIntent::Started => CategoriesState {
            phase: RequestPhase::Loading,
            error: None,
            generation: state.generation + 1,
            ..state
        },
        CategoriesIntent::Loaded {
            generation,
            categories,
        } if generation == state.generation => CategoriesState {
            categories,
            phase: RequestPhase::Succeeded,
            error: None,
            ..state
        },
        CategoriesIntent::Failed {
            generation,
            message,
        } if generation == state.generation => CategoriesState {
            phase: RequestPhase::Failed,
            error: Some(message),
            ..state
        },
        CategoriesIntent::ClearError => CategoriesState {
            error: None,
            phase: settle(state.phase),
            ..state
        },
        // Stale completion.
        _ => state,
    }
}

/// Dismissing an error returns a failed partition to idle.
fn settle(phase: RequestPhase) -> RequestPhase {
    match phase {
        RequestPhase::Failed => RequestPhase::Idle,
        other => other,
    }
}
