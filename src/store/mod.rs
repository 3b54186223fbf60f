//! Application state store.
//!
//! A single state object with three partitions (auth, articles,
//! categories). Async actions on [`AppStore`] are the only mutators: each
//! one dispatches a start intent, calls one resource service, and
//! dispatches the outcome through the pure [`StoreReducer`].

mod app_store;
mod error;
mod intent;
pub mod mvi;
mod reducer;
mod session;
mod state;

pub use app_store::AppStore;
pub use error::StoreError;
pub use intent::{ArticlesIntent, AuthIntent, CategoriesIntent, StoreIntent};
pub use reducer::StoreReducer;
pub use session::{PersistedSession, SessionError, SessionStore, STORAGE_KEY};
pub use state::{AppState, ArticlesState, AuthState, CategoriesState, RequestPhase};
