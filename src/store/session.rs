//! Persistence of the login session across runs.
//!
//! Only the user, token and authenticated flag are stored, as a single
//! keyed JSON blob. List, pagination and loading state never touch disk.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AuthToken, User};
use crate::store::state::AuthState;

/// Key naming the persisted blob; also the file stem on disk.
pub const STORAGE_KEY: &str = "app-storage";

const STORAGE_VERSION: u32 = 0;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to access session file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode session: {0}")]
    Encode(#[source] serde_json::Error),
}

/// The subset of auth state that survives a restart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub user: Option<User>,
    pub token: Option<AuthToken>,
    pub is_authenticated: bool,
}

impl From<&AuthState> for PersistedSession {
    fn from(auth: &AuthState) -> Self {
        Self {
            user: auth.user.clone(),
            token: auth.token.clone(),
            is_authenticated: auth.is_authenticated,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct StoredBlob {
    state: PersistedSession,
    version: u32,
}

/// File-backed session storage (`<dir>/app-storage.json`).
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session. A missing file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<PersistedSession>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let blob: StoredBlob =
            serde_json::from_str(&content).map_err(|source| SessionError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Ok(Some(blob.state))
    }

    /// Overwrite the stored session.
    ///
    /// The file is held under an exclusive lock while it is rewritten so
    /// concurrent processes never interleave partial writes.
    pub fn save(&self, session: &PersistedSession) -> Result<(), SessionError> {
        let blob = StoredBlob {
            state: session.clone(),
            version: STORAGE_VERSION,
        };
        let content = serde_json::to_string_pretty(&blob).map_err(SessionError::Encode)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;

        file.lock_exclusive().map_err(|source| self.io_error(source))?;
        let written = file
            .set_len(0)
            .and_then(|_| file.write_all(content.as_bytes()))
            .and_then(|_| file.flush());
        let unlocked = FileExt::unlock(&file);

        written.map_err(|source| self.io_error(source))?;
        unlocked.map_err(|source| self.io_error(source))?;
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn blob_uses_storage_key_and_camel_case() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        store
            .save(&PersistedSession {
                user: None,
                token: Some(AuthToken::new("tok")),
                is_authenticated: true,
            })
            .unwrap();

        assert!(store.path().ends_with("app-storage.json"));
        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["state"]["token"], "tok");
        assert_eq!(value["state"]["isAuthenticated"], true);
        assert_eq!(value["version"], 0);
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(store.load(), Err(SessionError::Parse { .. })));
    }
}
