//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No data: {0}")]
    NoData(String),

    #[error("No active accounts found")]
    NoAccounts,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Output(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdkError {
    /// The `errorMessage` the server sent, if any. `None` when the failure
    /// carried no message, even though [`Display`](std::fmt::Display) then
    /// shows a generic fallback.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SdkError::Http(HttpError::Rejected { message, .. })
            | SdkError::Auth(AuthError::LoginRejected { message, .. }) => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the token was rejected even after re-authenticating.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, SdkError::Http(HttpError::Unauthorized))
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Connection-level failure from a non-reqwest transport.
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request rejected (code {code:?}): {}", display_message(.message))]
    Rejected {
        code: Option<i64>,
        message: Option<String>,
    },

    #[error("Unauthorized")]
    Unauthorized,
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The login call itself failed (non-success HTTP status).
    #[error("Login failed: {0}")]
    LoginFailed(String),

    /// The server answered the login with `success: false`.
    #[error("Login rejected (code {code:?}): {}", display_message(.message))]
    LoginRejected {
        code: Option<i64>,
        message: Option<String>,
    },

    #[error("Login response carried no token")]
    MissingToken,
}

const UNKNOWN_ERROR: &str = "Unknown error";

fn display_message(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or(UNKNOWN_ERROR)
}
