//! Low-level HTTP client — `ProjectXHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). Owns the session protocol: lazy
//! login, bearer injection, and the bounded re-authentication on `401`.

use crate::auth::{LoginRequest, LoginResponse, Session};
use crate::domain::account::wire::{AccountSearchRequest, AccountsResponse};
use crate::domain::contract::wire::{ContractSearchRequest, ContractsResponse};
use crate::domain::history::wire::{RetrieveBarsRequest, RetrieveBarsResponse};
use crate::domain::trade::wire::{TradeSearchRequest, TradesResponse};
use crate::error::{AuthError, HttpError, SdkError};
use crate::http::envelope::{self, ApiStatus};
use crate::http::retry::{AuthRetry, RetryPolicy};
use crate::http::transport::Transport;
use crate::network;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Low-level HTTP client for the ProjectX Gateway API.
pub struct ProjectXHttp {
    base_url: String,
    transport: Arc<dyn Transport>,
    session: Arc<Session>,
}

impl ProjectXHttp {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, session: Arc<Session>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    /// Force a fresh login and store the new token.
    pub async fn login(&self) -> Result<String, SdkError> {
        let _guard = self.session.lock_refresh().await;
        self.login_locked().await
    }

    /// Cached token, or a lazy login if there is none.
    pub async fn ensure_token(&self) -> Result<String, SdkError> {
        if let Some(token) = self.session.token().await {
            return Ok(token);
        }
        let _guard = self.session.lock_refresh().await;
        if let Some(token) = self.session.token().await {
            return Ok(token);
        }
        self.login_locked().await
    }

    /// Replace `stale` with a new token. If another caller already replaced
    /// it while we waited for the refresh lock, reuse theirs.
    async fn refresh_after(&self, stale: &str) -> Result<String, SdkError> {
        let _guard = self.session.lock_refresh().await;
        if let Some(current) = self.session.token().await {
            if current != stale {
                return Ok(current);
            }
        }
        self.login_locked().await
    }

    /// Caller must hold the refresh lock.
    async fn login_locked(&self) -> Result<String, SdkError> {
        let url = self.url(network::LOGIN_KEY_PATH);
        let body = serde_json::to_value(LoginRequest::from(self.session.credentials()))?;

        let resp = self.transport.post_json(&url, &body, None).await?;
        if !resp.is_success() {
            tracing::error!(status = resp.status, "Login rejected");
            return Err(AuthError::LoginFailed(format!(
                "status {}: {}",
                resp.status, resp.body
            ))
            .into());
        }

        let status: ApiStatus = serde_json::from_str(&resp.body)?;
        if !status.is_ok() {
            tracing::error!(error_code = ?status.error_code, "Login rejected");
            return Err(AuthError::LoginRejected {
                code: status.error_code,
                message: status.message(),
            }
            .into());
        }

        let login: LoginResponse = serde_json::from_str(&resp.body)?;
        let token = login
            .token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        self.session.store(token.clone()).await;
        tracing::debug!("Authenticated");
        Ok(token)
    }

    // ── Contracts ────────────────────────────────────────────────────────

    pub async fn search_contracts(
        &self,
        request: &ContractSearchRequest,
    ) -> Result<ContractsResponse, SdkError> {
        self.post(network::CONTRACT_SEARCH_PATH, request, RetryPolicy::ReauthOnce)
            .await
    }

    // ── History ──────────────────────────────────────────────────────────

    pub async fn retrieve_bars(
        &self,
        request: &RetrieveBarsRequest,
    ) -> Result<RetrieveBarsResponse, SdkError> {
        self.post(network::RETRIEVE_BARS_PATH, request, RetryPolicy::ReauthOnce)
            .await
    }

    // ── Accounts ─────────────────────────────────────────────────────────

    pub async fn search_accounts(
        &self,
        request: &AccountSearchRequest,
    ) -> Result<AccountsResponse, SdkError> {
        self.post(network::ACCOUNT_SEARCH_PATH, request, RetryPolicy::ReauthOnce)
            .await
    }

    // ── Trades ───────────────────────────────────────────────────────────

    pub async fn search_trades(
        &self,
        request: &TradeSearchRequest,
    ) -> Result<TradesResponse, SdkError> {
        self.post(network::TRADE_SEARCH_PATH, request, RetryPolicy::ReauthOnce)
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// Authenticated POST. The bearer is read from the session for every
    /// attempt, and a `401` is answered by at most `retry.max_reauth()`
    /// logins before it is returned as [`HttpError::Unauthorized`].
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, SdkError> {
        let url = self.url(path);
        let payload = serde_json::to_value(body)?;
        let mut budget = AuthRetry::new(retry);
        let mut token = self.ensure_token().await?;

        loop {
            let resp = self
                .transport
                .post_json(&url, &payload, Some(&token))
                .await?;

            if resp.status == 401 {
                if budget.try_consume() {
                    tracing::warn!(path, "Session token expired, re-authenticating");
                    token = self.refresh_after(&token).await?;
                    continue;
                }
                tracing::error!(path, "Request still unauthorized after re-authenticating");
                return Err(HttpError::Unauthorized.into());
            }

            if !resp.is_success() {
                tracing::error!(path, status = resp.status, "Request failed");
            }
            return envelope::decode(&resp);
        }
    }
}

impl Clone for ProjectXHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: self.transport.clone(),
            session: self.session.clone(),
        }
    }
}
