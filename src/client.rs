//! High-level client — `ProjectXClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared settings, and accessor methods.

use crate::auth::client::Auth;
use crate::auth::{ApiCredentials, Session};
use crate::domain::account::client::Accounts;
use crate::domain::contract::client::Contracts;
use crate::domain::history::client::History;
use crate::domain::trade::client::Trades;
use crate::domain::trade::AggregationPolicy;
use crate::error::SdkError;
use crate::http::{ProjectXHttp, Transport};
use crate::shared::{BarUnit, DayZone};

use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::account::client::Accounts as AccountsClient;
pub use crate::domain::contract::client::Contracts as ContractsClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// Default bar page size; one day of 1-minute bars fits.
pub const DEFAULT_BAR_LIMIT: u32 = 1000;

/// Request-shaping settings shared by all sub-clients.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    /// Live rather than simulated data.
    pub live: bool,
    pub bar_unit: BarUnit,
    pub bar_unit_number: u32,
    pub bar_limit: u32,
    /// Zone whose calendar defines "the day" for bar filtering.
    pub day_zone: DayZone,
    pub aggregation: AggregationPolicy,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            live: false,
            bar_unit: BarUnit::Minute,
            bar_unit_number: 5,
            bar_limit: DEFAULT_BAR_LIMIT,
            day_zone: DayZone::Local,
            aggregation: AggregationPolicy::FailFast,
        }
    }
}

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.contracts()`, `client.history()`, etc.
pub struct ProjectXClient {
    pub(crate) http: ProjectXHttp,
    pub(crate) settings: ClientSettings,
}

impl ProjectXClient {
    pub fn builder() -> ProjectXClientBuilder {
        ProjectXClientBuilder::default()
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn contracts(&self) -> Contracts<'_> {
        Contracts { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }
}

impl Clone for ProjectXClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            settings: self.settings.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ProjectXClientBuilder {
    base_url: String,
    credentials: Option<ApiCredentials>,
    transport: Option<Arc<dyn Transport>>,
    settings: ClientSettings,
}

impl Default for ProjectXClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            credentials: None,
            transport: None,
            settings: ClientSettings::default(),
        }
    }
}

impl ProjectXClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn credentials(mut self, credentials: ApiCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Replace the default `reqwest` transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn live(mut self, live: bool) -> Self {
        self.settings.live = live;
        self
    }

    pub fn bar_unit(mut self, unit: BarUnit, unit_number: u32) -> Self {
        self.settings.bar_unit = unit;
        self.settings.bar_unit_number = unit_number;
        self
    }

    pub fn bar_limit(mut self, limit: u32) -> Self {
        self.settings.bar_limit = limit;
        self
    }

    pub fn day_zone(mut self, zone: DayZone) -> Self {
        self.settings.day_zone = zone;
        self
    }

    pub fn aggregation(mut self, policy: AggregationPolicy) -> Self {
        self.settings.aggregation = policy;
        self
    }

    pub fn build(self) -> Result<ProjectXClient, SdkError> {
        let credentials = self
            .credentials
            .ok_or_else(|| SdkError::Validation("API credentials are required".to_string()))?;
        if self.settings.bar_unit_number == 0 {
            return Err(SdkError::Validation(
                "Bar unit number must be positive".to_string(),
            ));
        }
        if self.settings.bar_limit == 0 {
            return Err(SdkError::Validation("Bar limit must be positive".to_string()));
        }

        let transport = match self.transport {
            Some(t) => t,
            None => default_transport()?,
        };
        let session = Arc::new(Session::new(credentials));

        Ok(ProjectXClient {
            http: ProjectXHttp::new(&self.base_url, transport, session),
            settings: self.settings,
        })
    }
}

#[cfg(feature = "http")]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Ok(Arc::new(crate::http::ReqwestTransport::new()?))
}

#[cfg(not(feature = "http"))]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Validation(
        "No transport configured; enable the `http` feature or call `.transport(..)`".to_string(),
    ))
}
