//! Environment-driven gateway configuration for the `projectx` binary.

use std::env;

use crate::auth::ApiCredentials;
use crate::client::{ProjectXClient, ProjectXClientBuilder};
use crate::error::SdkError;
use crate::shared::{BarUnit, DayZone};

pub const DEFAULT_SEARCH_KEYWORD: &str = "NQ";
pub const DEFAULT_TARGET_SYMBOL: &str = "ENQ";

/// Everything the binary needs to build a client and pick a contract.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub credentials: ApiCredentials,
    pub search_keyword: String,
    pub target_symbol: String,
    pub bar_unit: BarUnit,
    pub bar_unit_number: u32,
    pub live: bool,
    pub day_zone: DayZone,
}

impl GatewayConfig {
    /// Load `.env` (if present), then read `PROJECTX_*` variables.
    pub fn from_env() -> Result<Self, SdkError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Failed to read .env");
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| SdkError::Validation(format!("{} is not set", key)))
        };
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bar_unit = or_default("PROJECTX_BAR_UNIT", "minute")
            .parse::<BarUnit>()
            .map_err(SdkError::Validation)?;
        let bar_unit_number = or_default("PROJECTX_BAR_UNIT_NUMBER", "5")
            .trim()
            .parse::<u32>()
            .map_err(|e| SdkError::Validation(format!("PROJECTX_BAR_UNIT_NUMBER: {}", e)))?;
        let live = match or_default("PROJECTX_LIVE", "false").trim() {
            "1" | "true" | "TRUE" | "yes" => true,
            "0" | "false" | "FALSE" | "no" => false,
            other => {
                return Err(SdkError::Validation(format!(
                    "PROJECTX_LIVE must be true or false, got {:?}",
                    other
                )))
            }
        };
        let day_zone = match lookup("PROJECTX_UTC_OFFSET_MINUTES") {
            None => DayZone::Local,
            Some(raw) => {
                let minutes = raw.trim().parse::<i32>().map_err(|e| {
                    SdkError::Validation(format!("PROJECTX_UTC_OFFSET_MINUTES: {}", e))
                })?;
                DayZone::from_offset_minutes(minutes).ok_or_else(|| {
                    SdkError::Validation(format!("UTC offset out of range: {}", minutes))
                })?
            }
        };

        Ok(Self {
            base_url: or_default("PROJECTX_BASE_URL", crate::network::DEFAULT_API_URL),
            credentials: ApiCredentials::new(
                required("PROJECTX_USERNAME")?,
                required("PROJECTX_API_KEY")?,
            ),
            search_keyword: or_default("PROJECTX_SEARCH_KEYWORD", DEFAULT_SEARCH_KEYWORD),
            target_symbol: or_default("PROJECTX_TARGET_SYMBOL", DEFAULT_TARGET_SYMBOL),
            bar_unit,
            bar_unit_number,
            live,
            day_zone,
        })
    }

    pub fn client_builder(&self) -> ProjectXClientBuilder {
        ProjectXClient::builder()
            .base_url(&self.base_url)
            .credentials(self.credentials.clone())
            .live(self.live)
            .bar_unit(self.bar_unit, self.bar_unit_number)
            .day_zone(self.day_zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_credentials_only() {
        let cfg = GatewayConfig::from_lookup(lookup(&[
            ("PROJECTX_USERNAME", "trader"),
            ("PROJECTX_API_KEY", "key"),
        ]))
        .unwrap();
        assert_eq!(cfg.base_url, crate::network::DEFAULT_API_URL);
        assert_eq!(cfg.search_keyword, "NQ");
        assert_eq!(cfg.target_symbol, "ENQ");
        assert_eq!(cfg.bar_unit, BarUnit::Minute);
        assert_eq!(cfg.bar_unit_number, 5);
        assert!(!cfg.live);
        assert_eq!(cfg.day_zone, DayZone::Local);
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let err = GatewayConfig::from_lookup(lookup(&[("PROJECTX_USERNAME", "trader")]))
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(msg) if msg.contains("PROJECTX_API_KEY")));
    }

    #[test]
    fn test_overrides() {
        let cfg = GatewayConfig::from_lookup(lookup(&[
            ("PROJECTX_USERNAME", "trader"),
            ("PROJECTX_API_KEY", "key"),
            ("PROJECTX_BAR_UNIT", "hour"),
            ("PROJECTX_BAR_UNIT_NUMBER", "1"),
            ("PROJECTX_LIVE", "true"),
            ("PROJECTX_UTC_OFFSET_MINUTES", "540"),
        ]))
        .unwrap();
        assert_eq!(cfg.bar_unit, BarUnit::Hour);
        assert_eq!(cfg.bar_unit_number, 1);
        assert!(cfg.live);
        assert_eq!(cfg.day_zone, DayZone::from_offset_minutes(540).unwrap());
    }

    #[test]
    fn test_bad_live_flag() {
        let err = GatewayConfig::from_lookup(lookup(&[
            ("PROJECTX_USERNAME", "trader"),
            ("PROJECTX_API_KEY", "key"),
            ("PROJECTX_LIVE", "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
}
