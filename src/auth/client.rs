//! Auth sub-client — login, lazy token acquisition, local logout.

use crate::client::ProjectXClient;
use crate::error::SdkError;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a ProjectXClient,
}

impl<'a> Auth<'a> {
    /// Authenticate now, replacing any cached token.
    ///
    /// Fails with [`AuthError`](crate::error::AuthError) when the server
    /// answers with a non-success status or a `success: false` body.
    pub async fn login(&self) -> Result<(), SdkError> {
        self.client.http.login().await.map(|_| ())
    }

    /// Make sure a token is cached, logging in only if none is.
    pub async fn ensure_token(&self) -> Result<(), SdkError> {
        self.client.http.ensure_token().await.map(|_| ())
    }

    /// Whether a token is currently cached. It may still be rejected by the
    /// server; expiry is only discovered from responses.
    pub async fn is_authenticated(&self) -> bool {
        self.client.http.session().has_token().await
    }

    /// Drop the cached token. The next authenticated call logs in again.
    pub async fn logout(&self) {
        self.client.http.session().clear().await;
    }
}
