//! History sub-client — bar retrieval for a range or a calendar day.

use crate::client::ProjectXClient;
use crate::domain::history::wire::RetrieveBarsRequest;
use crate::domain::history::{filter_to_day, Bar, BarQuery, DailyBars};
use crate::error::SdkError;
use crate::shared::{ContractId, DayWindow};

/// Sub-client for price history operations.
pub struct History<'a> {
    pub(crate) client: &'a ProjectXClient,
}

impl<'a> History<'a> {
    /// Query configured for `contract_id` over the UTC span of `day`, using
    /// the client's granularity and page size. Partial bars are excluded.
    pub fn day_query(&self, day: &DayWindow, contract_id: &ContractId) -> BarQuery {
        let settings = &self.client.settings;
        let (start, end) = day.utc_millis_span();
        BarQuery {
            contract_id: contract_id.clone(),
            start,
            end,
            unit: settings.bar_unit,
            unit_number: settings.bar_unit_number,
            limit: settings.bar_limit,
            include_partial_bar: false,
        }
    }

    /// Bars exactly as the server returns them for `query`.
    pub async fn retrieve(&self, query: &BarQuery) -> Result<Vec<Bar>, SdkError> {
        let request = RetrieveBarsRequest {
            contract_id: query.contract_id.clone(),
            live: self.client.settings.live,
            start_time: query.start,
            end_time: query.end,
            unit: query.unit,
            unit_number: query.unit_number,
            limit: query.limit,
            include_partial_bar: query.include_partial_bar,
        };
        let resp = self.client.http.retrieve_bars(&request).await?;
        Ok(resp.bars.into_iter().map(Bar::from).collect())
    }

    /// Bars for `contract_id` on the calendar day `date` (`YYYY-MM-DD`).
    ///
    /// The server is asked for the UTC day; the result is then re-filtered to
    /// the day in the client's [`DayZone`](crate::shared::DayZone). Fails with
    /// [`SdkError::NoData`] when the server returns no bars at all.
    pub async fn fetch_bars(
        &self,
        date: &str,
        contract_id: &ContractId,
    ) -> Result<Vec<Bar>, SdkError> {
        let day = DayWindow::parse(date)?;
        self.fetch_day(&day, contract_id).await
    }

    pub async fn fetch_day(
        &self,
        day: &DayWindow,
        contract_id: &ContractId,
    ) -> Result<Vec<Bar>, SdkError> {
        let query = self.day_query(day, contract_id);
        let bars = self.retrieve(&query).await?;
        if bars.is_empty() {
            return Err(SdkError::NoData(format!(
                "No bars for {} on {}",
                contract_id, day
            )));
        }

        let total = bars.len();
        let kept = filter_to_day(bars, day, self.client.settings.day_zone);
        tracing::info!(
            contract_id = %contract_id,
            day = %day,
            total,
            kept = kept.len(),
            "Retrieved bars"
        );
        Ok(kept)
    }

    /// Resolve the active contract for `keyword`/`target_symbol`, then fetch
    /// its bars for `date`.
    pub async fn fetch_symbol_day(
        &self,
        keyword: &str,
        target_symbol: &str,
        date: &str,
    ) -> Result<DailyBars, SdkError> {
        let day = DayWindow::parse(date)?;
        let contract_id = self
            .client
            .contracts()
            .resolve(keyword, target_symbol)
            .await?;
        let bars = self.fetch_day(&day, &contract_id).await?;
        Ok(DailyBars {
            day,
            contract_id,
            bars,
        })
    }
}
