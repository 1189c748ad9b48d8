//! Contract domain — instrument search results and front-contract selection.

pub mod client;
pub mod rank;
pub mod wire;

use crate::shared::ContractId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use rank::ExpiryKey;

/// A tradable instrument snapshot from a search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub name: String,
    pub description: String,
    pub tick_size: Option<Decimal>,
    pub tick_value: Option<Decimal>,
    pub active_contract: bool,
}

impl Contract {
    /// Expiry parsed from the trailing `<monthCode><yy>` of the name.
    pub fn expiry(&self) -> Option<ExpiryKey> {
        ExpiryKey::from_name(&self.name)
    }
}

impl From<wire::ContractResponse> for Contract {
    fn from(c: wire::ContractResponse) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description.unwrap_or_default(),
            tick_size: c.tick_size,
            tick_value: c.tick_value,
            active_contract: c.active_contract,
        }
    }
}
