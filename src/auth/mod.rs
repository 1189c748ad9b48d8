//! Authentication — API-key credentials, login wire types, session token cell.
//!
//! ## Session Model
//!
//! - The bearer token is held by [`Session`] behind a lock and is NEVER exposed
//!   through a public accessor on the client. It is attached to every request
//!   except the login call itself.
//! - The token is acquired lazily on the first authenticated call and replaced
//!   whenever the server answers `401`. There is no expiry timer; expiry is
//!   only detected from responses.
//! - Refreshes are single-flight: callers that saw the same stale token share
//!   one login.

pub mod client;
pub mod session;

use serde::{Deserialize, Serialize};

pub use session::Session;

/// Username + API key pair used by `POST /Auth/loginKey`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub username: String,
    pub api_key: String,
}

impl ApiCredentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Login request body sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub api_key: String,
}

impl From<&ApiCredentials> for LoginRequest {
    fn from(credentials: &ApiCredentials) -> Self {
        Self {
            user_name: credentials.username.clone(),
            api_key: credentials.api_key.clone(),
        }
    }
}

/// Login response payload. The status fields live in the shared envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_names() {
        let creds = ApiCredentials::new("trader", "secret");
        let json = serde_json::to_value(LoginRequest::from(&creds)).unwrap();
        assert_eq!(json, serde_json::json!({ "userName": "trader", "apiKey": "secret" }));
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let creds = ApiCredentials::new("trader", "secret");
        let dbg = format!("{:?}", creds);
        assert!(dbg.contains("trader"));
        assert!(!dbg.contains("secret"));
    }
}
