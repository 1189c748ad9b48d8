//! Daily trade history report across all active accounts.

use super::Trade;
use crate::domain::account::Account;
use crate::shared::{AccountId, DayWindow};
use rust_decimal::Decimal;

/// What to do when one account's trade fetch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AggregationPolicy {
    /// The first failure aborts the whole report.
    #[default]
    FailFast,
    /// Record the failure against the account and keep going.
    CollectFailures,
}

/// One account's trades for the day.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountTrades {
    pub account_id: AccountId,
    pub account_name: String,
    pub balance: Decimal,
    pub trade_count: usize,
    pub trades: Vec<Trade>,
}

impl AccountTrades {
    pub fn new(account: &Account, trades: Vec<Trade>) -> Self {
        Self {
            account_id: account.id,
            account_name: account.name.clone(),
            balance: account.balance,
            trade_count: trades.len(),
            trades,
        }
    }

    /// Sum of realized P&L over non-voided trades.
    pub fn gross_profit_and_loss(&self) -> Decimal {
        self.trades
            .iter()
            .filter(|t| !t.voided)
            .filter_map(|t| t.profit_and_loss)
            .sum()
    }

    pub fn total_fees(&self) -> Decimal {
        self.trades.iter().filter(|t| !t.voided).map(|t| t.fees).sum()
    }
}

/// An account whose trades could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFailure {
    pub account_id: AccountId,
    pub account_name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeHistoryReport {
    pub day: DayWindow,
    pub accounts: Vec<AccountTrades>,
    /// Always empty under [`AggregationPolicy::FailFast`].
    pub failures: Vec<AccountFailure>,
}

impl TradeHistoryReport {
    pub fn new(day: DayWindow) -> Self {
        Self {
            day,
            accounts: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn trade_count(&self) -> usize {
        self.accounts.iter().map(|a| a.trade_count).sum()
    }

    /// Every active account reported.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
