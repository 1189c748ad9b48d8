//! Wire types for `POST /Trade/search`.

use crate::shared::serde_util::{null_as_empty, timestamp_millis_z};
use crate::shared::{AccountId, ContractId, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSearchRequest {
    pub account_id: AccountId,
    #[serde(with = "timestamp_millis_z")]
    pub start_timestamp: DateTime<Utc>,
    #[serde(with = "timestamp_millis_z")]
    pub end_timestamp: DateTime<Utc>,
}

/// REST response for a single trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub id: i64,
    pub account_id: AccountId,
    pub contract_id: ContractId,
    pub creation_timestamp: DateTime<Utc>,
    pub price: Decimal,
    #[serde(default)]
    pub profit_and_loss: Option<Decimal>,
    #[serde(default)]
    pub fees: Decimal,
    pub side: Side,
    pub size: u32,
    #[serde(default)]
    pub voided: bool,
    pub order_id: i64,
}

/// REST response for trades list. A missing array means no trades.
#[derive(Debug, Clone, Deserialize)]
pub struct TradesResponse {
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub trades: Vec<TradeResponse>,
}
