//! Trades sub-client — per-account trade search and the daily report.

use crate::client::ProjectXClient;
use crate::domain::trade::wire::TradeSearchRequest;
use crate::domain::trade::{
    AccountFailure, AccountTrades, AggregationPolicy, Trade, TradeHistoryReport,
};
use crate::error::SdkError;
use crate::shared::{AccountId, DayWindow};
use chrono::{DateTime, Utc};

pub struct Trades<'a> {
    pub(crate) client: &'a ProjectXClient,
}

impl<'a> Trades<'a> {
    /// Trades for one account between `start` and `end`.
    pub async fn search(
        &self,
        account_id: AccountId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Trade>, SdkError> {
        let request = TradeSearchRequest {
            account_id,
            start_timestamp: start,
            end_timestamp: end,
        };
        let resp = self.client.http.search_trades(&request).await?;
        Ok(resp.trades.into_iter().map(Trade::from).collect())
    }

    /// Trades of every active account over the UTC day `date` (`YYYY-MM-DD`),
    /// using the client's [`AggregationPolicy`].
    ///
    /// Fails with [`SdkError::NoAccounts`] when there are no active accounts.
    pub async fn history(&self, date: &str) -> Result<TradeHistoryReport, SdkError> {
        self.history_with(date, self.client.settings.aggregation)
            .await
    }

    pub async fn history_with(
        &self,
        date: &str,
        policy: AggregationPolicy,
    ) -> Result<TradeHistoryReport, SdkError> {
        let day = DayWindow::parse(date)?;
        let accounts = self.client.accounts().active().await?;
        if accounts.is_empty() {
            return Err(SdkError::NoAccounts);
        }

        let (start, end) = day.utc_seconds_span();
        let mut report = TradeHistoryReport::new(day);

        // Accounts are fetched one at a time.
        for account in &accounts {
            match self.search(account.id, start, end).await {
                Ok(trades) => {
                    tracing::debug!(account_id = %account.id, count = trades.len(), "Trades fetched");
                    report.accounts.push(AccountTrades::new(account, trades));
                }
                Err(e) => match policy {
                    AggregationPolicy::FailFast => return Err(e),
                    AggregationPolicy::CollectFailures => {
                        tracing::warn!(account_id = %account.id, error = %e, "Trade fetch failed");
                        report.failures.push(AccountFailure {
                            account_id: account.id,
                            account_name: account.name.clone(),
                            message: e.to_string(),
                        });
                    }
                },
            }
        }

        tracing::info!(
            day = %report.day,
            accounts = report.accounts.len(),
            trades = report.trade_count(),
            failures = report.failures.len(),
            "Trade history collected"
        );
        Ok(report)
    }
}
