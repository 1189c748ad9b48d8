//! Trade domain — per-account trade records and the daily history report.

pub mod client;
mod convert;
pub mod history;
pub mod wire;

use crate::shared::{AccountId, ContractId, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use history::{AccountFailure, AccountTrades, AggregationPolicy, TradeHistoryReport};

/// A trade execution record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub id: i64,
    pub account_id: AccountId,
    pub contract_id: ContractId,
    pub timestamp: DateTime<Utc>,
    pub price: Decimal,
    /// `None` for a half-turn (opening) fill.
    pub profit_and_loss: Option<Decimal>,
    pub fees: Decimal,
    pub side: Side,
    pub size: u32,
    pub voided: bool,
    pub order_id: i64,
}

impl Trade {
    /// Realized P&L net of fees. `None` for half-turn fills.
    pub fn net_profit_and_loss(&self) -> Option<Decimal> {
        self.profit_and_loss.map(|pnl| pnl - self.fees)
    }
}
