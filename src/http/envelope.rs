//! Response envelope shared by every endpoint.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{HttpError, SdkError};
use crate::http::transport::RawResponse;

/// Status fields present on every response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    pub success: bool,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ApiStatus {
    /// `success` is set and `errorCode`, if present, is zero.
    pub fn is_ok(&self) -> bool {
        self.success && self.error_code.unwrap_or(0) == 0
    }

    /// Server-supplied message. Blank messages count as absent.
    pub fn message(&self) -> Option<String> {
        self.error_message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }

    pub fn into_result(self) -> Result<(), HttpError> {
        if self.is_ok() {
            return Ok(());
        }
        Err(HttpError::Rejected {
            code: self.error_code,
            message: self.message(),
        })
    }
}

/// Check status code and envelope, then decode the endpoint payload.
pub(crate) fn decode<T: DeserializeOwned>(resp: &RawResponse) -> Result<T, SdkError> {
    if !resp.is_success() {
        return Err(HttpError::Status {
            status: resp.status,
            body: resp.body.clone(),
        }
        .into());
    }

    let status: ApiStatus = serde_json::from_str(&resp.body)?;
    status.into_result()?;
    Ok(serde_json::from_str(&resp.body)?)
}
