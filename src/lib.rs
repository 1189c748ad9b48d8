//! # ProjectX SDK
//!
//! A Rust client for the ProjectX Gateway REST API: session handling,
//! contract resolution, bar history and per-account trade history.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, calendar-day windows, domain models
//! 2. **Auth** — Credentials, the shared session token, login/logout
//! 3. **HTTP API** — `ProjectXHttp` over a pluggable `Transport`, with bounded re-auth
//! 4. **High-Level Client** — `ProjectXClient` with nested sub-clients
//! 5. **Output** — `Sink` implementations for retrieved data
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use projectx_sdk::prelude::*;
//!
//! let client = ProjectXClient::builder()
//!     .credentials(ApiCredentials::new("user", "api-key"))
//!     .build()?;
//!
//! let daily = client.history().fetch_symbol_day("NQ", "ENQ", "2025-05-08").await?;
//! let report = client.trades().history("2025-05-08").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and day windows used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Endpoint URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: credentials, session token, login/logout.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with the re-auth policy and response envelope handling.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `ProjectXClient` — the primary entry point.
pub mod client;

// ── Layer 5: Output ──────────────────────────────────────────────────────────

/// CSV and other output sinks.
pub mod sink;

/// Environment configuration for the `projectx` binary.
#[cfg(feature = "cli")]
pub mod config;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AccountId, BarUnit, ContractId, DayWindow, DayZone, Side};

    // Domain types
    pub use crate::domain::account::Account;
    pub use crate::domain::contract::{Contract, ExpiryKey};
    pub use crate::domain::history::{Bar, BarQuery, DailyBars};
    pub use crate::domain::trade::{
        AccountFailure, AccountTrades, AggregationPolicy, Trade, TradeHistoryReport,
    };

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::{ApiCredentials, Session};

    // HTTP client + sub-clients
    pub use crate::client::{
        AccountsClient, AuthClient, ClientSettings, ContractsClient, HistoryClient,
        ProjectXClient, ProjectXClientBuilder, TradesClient,
    };
    pub use crate::http::{RawResponse, RetryPolicy, Transport};
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Output
    pub use crate::sink::{CsvSink, Sink};
}
