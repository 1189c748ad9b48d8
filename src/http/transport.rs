//! Transport seam — one JSON POST, answered with status + body.
//!
//! Implementations must not turn a non-2xx status into an error; status
//! classification happens in [`ProjectXHttp`](super::ProjectXHttp). Only
//! connection-level failures are returned as `Err`.

use async_trait::async_trait;

use crate::error::HttpError;

/// Raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `url`, with `Authorization: Bearer <token>` when
    /// `bearer` is set.
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<RawResponse, HttpError>;
}

/// Default transport on top of `reqwest`.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl ReqwestTransport {
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<RawResponse, HttpError> {
        let mut req = self.client.post(url).json(body);
        if let Some(token) = bearer {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(RawResponse { status, body })
    }
}
