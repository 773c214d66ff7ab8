//! Signed-in session
//!
//! [`Session`] is the single source of truth for the token and role. It is
//! shared behind a [`SessionHandle`] by the HTTP transport and the low-stock
//! watcher, written only on login, logout, and when the backend answers 401.
//! [`SessionStore`] persists the two keys (`token`, `userType`) so a restart
//! stays signed in.

use serde::{Deserialize, Serialize};
use shared::client::{LoginResponse, Page, UserInfo, UserType};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// In-memory session state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user_type: UserType,
    /// Present after login or `me`; not persisted
    pub user: Option<UserInfo>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Route gate for a signed-in user; anonymous sessions see nothing
    pub fn can_access(&self, page: Page) -> bool {
        self.is_authenticated() && self.user_type.can_access(page)
    }
}

pub type SessionHandle = Arc<RwLock<Session>>;

/// What ends up on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub token: String,
    pub user_type: UserType,
}

/// File-backed session storage
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(SESSION_FILE),
        }
    }

    pub fn save(&self, session: &PersistedSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Missing or unreadable file means no session
    pub fn load(&self) -> Option<PersistedSession> {
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&json) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring corrupt session file");
                None
            }
        }
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Session handle plus optional persistence, cheap to clone
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    handle: SessionHandle,
    store: Option<SessionStore>,
}

impl SessionManager {
    /// In-memory only
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Restore from `store` when a session file exists
    pub fn persistent(store: SessionStore) -> Self {
        Self::new(Some(store), None)
    }

    /// Session seeded from `store` (if any), then from an explicit `token`
    pub fn new(store: Option<SessionStore>, token: Option<String>) -> Self {
        let mut session = match store.as_ref().and_then(SessionStore::load) {
            Some(saved) => Session {
                token: Some(saved.token),
                user_type: saved.user_type,
                user: None,
            },
            None => Session::default(),
        };
        if token.is_some() {
            session.token = token;
        }
        Self {
            handle: Arc::new(RwLock::new(session)),
            store,
        }
    }

    pub fn handle(&self) -> SessionHandle {
        Arc::clone(&self.handle)
    }

    pub async fn snapshot(&self) -> Session {
        self.handle.read().await.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.handle.read().await.token.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.handle.read().await.is_authenticated()
    }

    /// Use a token obtained elsewhere (config, tests); role stays as is
    pub async fn set_token(&self, token: impl Into<String>) {
        self.handle.write().await.token = Some(token.into());
    }

    /// Record a successful login or registration
    pub async fn establish(&self, login: &LoginResponse) -> Result<(), SessionError> {
        {
            let mut session = self.handle.write().await;
            session.token = Some(login.token.clone());
            session.user_type = login.user.user_type;
            session.user = Some(login.user.clone());
        }
        if let Some(store) = &self.store {
            store.save(&PersistedSession {
                token: login.token.clone(),
                user_type: login.user.user_type,
            })?;
        }
        tracing::info!(user = %login.user.email, role = login.user.user_type.as_str(), "signed in");
        Ok(())
    }

    /// Refresh the profile from `me`
    pub async fn set_user(&self, user: UserInfo) {
        let mut session = self.handle.write().await;
        session.user_type = user.user_type;
        session.user = Some(user);
    }

    /// Forget the session in memory and on disk
    pub async fn clear(&self) {
        *self.handle.write().await = Session::default();
        if let Some(store) = &self.store
            && let Err(e) = store.clear()
        {
            tracing::warn!(error = %e, "failed to remove session file");
        }
    }
}
