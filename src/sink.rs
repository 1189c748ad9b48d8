//! Output sinks. The client only produces plain data; a [`Sink`] decides
//! where it goes.

use std::io;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::account::Account;
use crate::domain::history::DailyBars;
use crate::domain::trade::TradeHistoryReport;
use crate::error::SdkError;
use crate::shared::DayZone;

pub const BAR_HEADERS: [&str; 6] = ["Timestamp", "Open", "High", "Low", "Close", "Volume"];

pub const ACCOUNT_HEADERS: [&str; 5] = ["Id", "Name", "Balance", "CanTrade", "IsVisible"];

pub const TRADE_HEADERS: [&str; 15] = [
    "Date",
    "FetchedAt",
    "AccountId",
    "AccountName",
    "Balance",
    "TradeId",
    "ContractId",
    "Timestamp",
    "Price",
    "ProfitAndLoss",
    "Fees",
    "Side",
    "Size",
    "Voided",
    "OrderId",
];

const BAR_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Destination for retrieval results.
pub trait Sink {
    fn write_bars(&mut self, daily: &DailyBars) -> Result<(), SdkError>;

    fn write_accounts(&mut self, accounts: &[Account]) -> Result<(), SdkError>;

    fn write_trade_history(
        &mut self,
        report: &TradeHistoryReport,
        fetched_at: DateTime<Utc>,
    ) -> Result<(), SdkError>;
}

/// Writes each result as a CSV table (header row + data rows).
pub struct CsvSink<W: io::Write> {
    writer: csv::Writer<W>,
    zone: DayZone,
}

impl<W: io::Write> CsvSink<W> {
    /// Bar timestamps are rendered as wall-clock time in `zone`.
    pub fn new(inner: W, zone: DayZone) -> Self {
        let writer = csv::WriterBuilder::new().flexible(true).from_writer(inner);
        Self { writer, zone }
    }

    pub fn into_inner(self) -> Result<W, SdkError> {
        self.writer
            .into_inner()
            .map_err(|e| SdkError::Io(e.into_error()))
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl<W: io::Write> Sink for CsvSink<W> {
    fn write_bars(&mut self, daily: &DailyBars) -> Result<(), SdkError> {
        self.writer.write_record(BAR_HEADERS)?;
        for bar in &daily.bars {
            self.writer.write_record([
                self.zone.format(&bar.timestamp, BAR_TIME_FORMAT),
                bar.open.to_string(),
                bar.high.to_string(),
                bar.low.to_string(),
                bar.close.to_string(),
                bar.volume.to_string(),
            ])?;
        }
        self.writer.flush()?;
        tracing::info!(day = %daily.day, rows = daily.bars.len(), "Wrote bars");
        Ok(())
    }

    fn write_accounts(&mut self, accounts: &[Account]) -> Result<(), SdkError> {
        self.writer.write_record(ACCOUNT_HEADERS)?;
        for account in accounts {
            self.writer.write_record([
                account.id.to_string(),
                account.name.clone(),
                account.balance.to_string(),
                yes_no(account.can_trade).to_string(),
                yes_no(account.is_visible).to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_trade_history(
        &mut self,
        report: &TradeHistoryReport,
        fetched_at: DateTime<Utc>,
    ) -> Result<(), SdkError> {
        let fetched_at = fetched_at.to_rfc3339_opts(SecondsFormat::Millis, true);
        let date = report.day.to_string();

        self.writer.write_record(TRADE_HEADERS)?;
        for account in &report.accounts {
            for trade in &account.trades {
                self.writer.write_record([
                    date.clone(),
                    fetched_at.clone(),
                    account.account_id.to_string(),
                    account.account_name.clone(),
                    account.balance.to_string(),
                    trade.id.to_string(),
                    trade.contract_id.to_string(),
                    trade.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
                    trade.price.to_string(),
                    trade
                        .profit_and_loss
                        .map(|p| p.to_string())
                        .unwrap_or_default(),
                    trade.fees.to_string(),
                    trade.side.to_string(),
                    trade.size.to_string(),
                    yes_no(trade.voided).to_string(),
                    trade.order_id.to_string(),
                ])?;
            }
        }
        self.writer.flush()?;
        tracing::info!(day = %report.day, rows = report.trade_count(), "Wrote trade history");
        Ok(())
    }
}
