//! Account domain.

pub mod client;
pub mod wire;

use crate::shared::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A trading account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub balance: Decimal,
    pub can_trade: bool,
    pub is_visible: bool,
}

impl From<wire::AccountResponse> for Account {
    fn from(a: wire::AccountResponse) -> Self {
        Self {
            id: a.id,
            name: a.name,
            balance: a.balance,
            can_trade: a.can_trade,
            is_visible: a.is_visible,
        }
    }
}
