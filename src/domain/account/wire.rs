//! Wire types for `POST /Account/search`.

use crate::shared::serde_util::null_as_empty;
use crate::shared::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSearchRequest {
    pub only_active_accounts: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: AccountId,
    pub name: String,
    pub balance: Decimal,
    #[serde(default)]
    pub can_trade: bool,
    #[serde(default)]
    pub is_visible: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountsResponse {
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub accounts: Vec<AccountResponse>,
}
