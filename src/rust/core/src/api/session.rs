// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Authenticated session
//!
//! Holds the bearer token and the signed-in user. The token is persisted
//! through a [`TokenStore`] supplied by the host (browser storage, keychain,
//! memory) so the session itself stays free of global state.
//!
//! Lifecycle: `new` loads any stored token, `set_auth` after login/signup,
//! `handle_unauthorized` when the backend answers 401, `logout` on request.

use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub city: Option<String>,
}

/// Persistence for the bearer token
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// Cloneable handle; clones share the same state
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Start a session, picking up a previously stored token
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        let token = store.load();
        if token.is_some() {
            info!("Restored stored auth token");
        }
        Self {
            state: Arc::new(RwLock::new(SessionState { token, user: None })),
            store,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::default()))
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    /// Token present but user not loaded yet
    pub fn needs_user(&self) -> bool {
        let state = self.read();
        state.token.is_some() && state.user.is_none()
    }

    pub fn set_auth(&self, token: impl Into<String>, user: User) {
        let token = token.into();
        self.store.save(&token);
        let mut state = self.write();
        state.token = Some(token);
        state.user = Some(user);
    }

    pub fn set_user(&self, user: User) {
        self.write().user = Some(user);
    }

    /// Backend rejected the token
    pub fn handle_unauthorized(&self) {
        if self.is_authenticated() {
            info!("Auth token rejected, clearing session");
        }
        self.clear();
    }

    pub fn logout(&self) {
        self.clear();
    }

    fn clear(&self) {
        self.store.clear();
        let mut state = self.write();
        state.token = None;
        state.user = None;
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("Session")
            .field("authenticated", &state.token.is_some())
            .field("user", &state.user)
            .finish()
    }
}
