//! Calendar-day windows.
//!
//! The server is queried with UTC spans while the caller usually wants the
//! day as seen on a local calendar. [`DayWindow`] provides both views of the
//! same `YYYY-MM-DD` input so the two filters can be applied independently.

use chrono::{
    DateTime, Days, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta,
    TimeZone, Utc,
};

use crate::error::SdkError;

/// Time zone that defines where a calendar day begins and ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayZone {
    /// The process-local zone.
    #[default]
    Local,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl DayZone {
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// A fixed zone `minutes` east of UTC. `None` if out of range (±24h).
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::Fixed)
    }

    /// First instant at or after local midnight of `date`.
    pub fn midnight(&self, date: NaiveDate) -> DateTime<Utc> {
        match self {
            Self::Local => first_valid_instant(&Local, date.and_time(NaiveTime::MIN)),
            Self::Fixed(offset) => first_valid_instant(offset, date.and_time(NaiveTime::MIN)),
        }
    }

    /// Render `t` as wall-clock time in this zone.
    pub fn format(&self, t: &DateTime<Utc>, fmt: &str) -> String {
        match self {
            Self::Local => t.with_timezone(&Local).format(fmt).to_string(),
            Self::Fixed(offset) => t.with_timezone(offset).format(fmt).to_string(),
        }
    }
}

/// Resolves a wall-clock time to UTC. A time inside a DST gap moves forward
/// to the first minute that exists; an ambiguous time takes the earlier one.
fn first_valid_instant<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    let mut candidate = naive;
    for _ in 0..=(24 * 60) {
        if let Some(t) = tz.from_local_datetime(&candidate).earliest() {
            return t.with_timezone(&Utc);
        }
        candidate += TimeDelta::minutes(1);
    }
    naive.and_utc()
}

/// A validated `YYYY-MM-DD` calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayWindow {
    date: NaiveDate,
    next: NaiveDate,
}

impl DayWindow {
    /// Parse a strict `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> Result<Self, SdkError> {
        let bytes = input.as_bytes();
        let shaped = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(SdkError::Validation(format!(
                "Date must be in YYYY-MM-DD format: {:?}",
                input
            )));
        }

        let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map_err(|e| SdkError::Validation(format!("Invalid date {:?}: {}", input, e)))?;
        Self::from_date(date)
    }

    pub fn from_date(date: NaiveDate) -> Result<Self, SdkError> {
        let next = date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| SdkError::Validation(format!("Date out of range: {}", date)))?;
        Ok(Self { date, next })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    fn utc_midnight(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }

    /// `[D 00:00:00.000Z, D 23:59:59.999Z]`
    pub fn utc_millis_span(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.utc_midnight();
        (start, start + TimeDelta::days(1) - TimeDelta::milliseconds(1))
    }

    /// `[D 00:00:00Z, D 23:59:59Z]`
    pub fn utc_seconds_span(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.utc_midnight();
        (start, start + TimeDelta::days(1) - TimeDelta::seconds(1))
    }

    /// Half-open `[local midnight of D, local midnight of D+1)` in `zone`.
    pub fn local_bounds(&self, zone: DayZone) -> (DateTime<Utc>, DateTime<Utc>) {
        (zone.midnight(self.date), zone.midnight(self.next))
    }

    pub fn contains(&self, t: DateTime<Utc>, zone: DayZone) -> bool {
        let (start, end) = self.local_bounds(zone);
        t >= start && t < end
    }
}

impl std::fmt::Display for DayWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

impl std::str::FromStr for DayWindow {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DayWindow {
        DayWindow::parse(s).unwrap()
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for bad in ["2025-5-8", "20250508", "2025/05/08", "2025-05-08T00:00", "", "abcd-ef-gh"] {
            assert!(
                matches!(DayWindow::parse(bad), Err(SdkError::Validation(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(matches!(
            DayWindow::parse("2025-02-30"),
            Err(SdkError::Validation(_))
        ));
        assert!(DayWindow::parse("2024-02-29").is_ok());
    }

    #[test]
    fn test_utc_spans() {
        let d = day("2025-05-08");
        let (start, end) = d.utc_millis_span();
        assert_eq!(start.to_rfc3339(), "2025-05-08T00:00:00+00:00");
        assert_eq!(end.timestamp_millis() - start.timestamp_millis(), 86_399_999);

        let (start, end) = d.utc_seconds_span();
        assert_eq!(end.to_rfc3339(), "2025-05-08T23:59:59+00:00");
        assert_eq!(start, d.utc_millis_span().0);
    }

    #[test]
    fn test_local_bounds_follow_zone_offset() {
        let d = day("2025-05-08");
        let tokyo = DayZone::from_offset_minutes(9 * 60).unwrap();
        let (start, end) = d.local_bounds(tokyo);
        assert_eq!(start.to_rfc3339(), "2025-05-07T15:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-05-08T15:00:00+00:00");
    }

    #[test]
    fn test_contains_is_half_open() {
        let d = day("2025-05-08");
        let zone = DayZone::utc();
        let (start, end) = d.local_bounds(zone);
        assert!(d.contains(start, zone));
        assert!(d.contains(end - TimeDelta::milliseconds(1), zone));
        assert!(!d.contains(end, zone));
        assert!(!d.contains(start - TimeDelta::seconds(1), zone));
    }

    #[test]
    fn test_offset_out_of_range() {
        assert!(DayZone::from_offset_minutes(25 * 60).is_none());
        assert!(DayZone::from_offset_minutes(-5 * 60).is_some());
    }

    #[test]
    fn test_display_round_trips_input() {
        assert_eq!(day("2025-12-31").to_string(), "2025-12-31");
    }
}
