//! Session token cell.

use async_lock::{Mutex, MutexGuard, RwLock};

use super::ApiCredentials;

/// Owns the credentials and the current bearer token.
///
/// Reads go through an `RwLock`; any code path that logs in must hold the
/// refresh lock so only one login is in flight at a time.
pub struct Session {
    credentials: ApiCredentials,
    token: RwLock<Option<String>>,
    refresh: Mutex<()>,
}

impl Session {
    pub fn new(credentials: ApiCredentials) -> Self {
        Self {
            credentials,
            token: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    pub fn credentials(&self) -> &ApiCredentials {
        &self.credentials
    }

    /// Current token, if one has been acquired.
    pub(crate) async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub(crate) async fn store(&self, token: String) {
        *self.token.write().await = Some(token);
    }

    pub(crate) async fn clear(&self) {
        *self.token.write().await = None;
    }

    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    pub(crate) async fn lock_refresh(&self) -> MutexGuard<'_, ()> {
        self.refresh.lock().await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
