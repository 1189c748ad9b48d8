//! Wire types for `POST /History/retrieveBars`.

use crate::shared::serde_util::{null_as_empty, timestamp_millis_z};
use crate::shared::{BarUnit, ContractId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveBarsRequest {
    pub contract_id: ContractId,
    pub live: bool,
    #[serde(with = "timestamp_millis_z")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "timestamp_millis_z")]
    pub end_time: DateTime<Utc>,
    pub unit: BarUnit,
    pub unit_number: u32,
    pub limit: u32,
    pub include_partial_bar: bool,
}

/// A single bar from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarResponse {
    pub t: DateTime<Utc>,
    pub o: Decimal,
    pub h: Decimal,
    pub l: Decimal,
    pub c: Decimal,
    pub v: u64,
}

/// Response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrieveBarsResponse {
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub bars: Vec<BarResponse>,
}
