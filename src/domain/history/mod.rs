//! History domain — OHLCV bars and the calendar-day filter.

pub mod client;
pub mod wire;

use crate::shared::{BarUnit, ContractId, DayWindow, DayZone};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One OHLCV aggregate. Bars keep the order the server returned them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

impl From<wire::BarResponse> for Bar {
    fn from(b: wire::BarResponse) -> Self {
        Self {
            timestamp: b.t,
            open: b.o,
            high: b.h,
            low: b.l,
            close: b.c,
            volume: b.v,
        }
    }
}

/// An explicit bar request over an arbitrary range.
#[derive(Debug, Clone, PartialEq)]
pub struct BarQuery {
    pub contract_id: ContractId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub unit: BarUnit,
    pub unit_number: u32,
    pub limit: u32,
    pub include_partial_bar: bool,
}

/// Bars for one contract on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBars {
    pub day: DayWindow,
    pub contract_id: ContractId,
    pub bars: Vec<Bar>,
}

/// Keep only bars inside `[local midnight of day, next local midnight)`.
pub fn filter_to_day(
    bars: impl IntoIterator<Item = Bar>,
    day: &DayWindow,
    zone: DayZone,
) -> Vec<Bar> {
    let (start, end) = day.local_bounds(zone);
    bars.into_iter()
        .filter(|b| b.timestamp >= start && b.timestamp < end)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bar_at(t: DateTime<Utc>) -> Bar {
        Bar {
            timestamp: t,
            open: Decimal::new(2100025, 2),
            high: Decimal::new(2100100, 2),
            low: Decimal::new(2099950, 2),
            close: Decimal::new(2100050, 2),
            volume: 42,
        }
    }

    #[test]
    fn test_filter_keeps_only_the_requested_day() {
        let day = DayWindow::parse("2025-05-08").unwrap();
        let bars = vec![
            bar_at(Utc.with_ymd_and_hms(2025, 5, 8, 0, 5, 0).unwrap()),
            bar_at(Utc.with_ymd_and_hms(2025, 5, 8, 23, 59, 0).unwrap()),
            bar_at(Utc.with_ymd_and_hms(2025, 5, 9, 0, 1, 0).unwrap()),
        ];
        let kept = filter_to_day(bars.clone(), &day, DayZone::utc());
        assert_eq!(kept, bars[..2].to_vec());
    }

    #[test]
    fn test_filter_uses_local_calendar_not_utc() {
        // UTC-5: the local day 2025-05-08 spans 05:00Z on the 8th to 05:00Z on the 9th.
        let zone = DayZone::from_offset_minutes(-5 * 60).unwrap();
        let day = DayWindow::parse("2025-05-08").unwrap();
        let bars = vec![
            bar_at(Utc.with_ymd_and_hms(2025, 5, 8, 4, 55, 0).unwrap()),
            bar_at(Utc.with_ymd_and_hms(2025, 5, 8, 5, 0, 0).unwrap()),
            bar_at(Utc.with_ymd_and_hms(2025, 5, 9, 4, 55, 0).unwrap()),
            bar_at(Utc.with_ymd_and_hms(2025, 5, 9, 5, 0, 0).unwrap()),
        ];
        let kept = filter_to_day(bars.clone(), &day, zone);
        assert_eq!(kept, vec![bars[1].clone(), bars[2].clone()]);
    }

    #[test]
    fn test_filter_preserves_server_order() {
        let day = DayWindow::parse("2025-05-08").unwrap();
        let later = bar_at(Utc.with_ymd_and_hms(2025, 5, 8, 12, 0, 0).unwrap());
        let earlier = bar_at(Utc.with_ymd_and_hms(2025, 5, 8, 6, 0, 0).unwrap());
        let kept = filter_to_day(vec![later.clone(), earlier.clone()], &day, DayZone::utc());
        assert_eq!(kept, vec![later, earlier]);
    }
}
