//! Date-range filter used by every list page.

use crate::validation::{self, Validation};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use depot_domain::config::FilterConfig;
use depot_domain::time::format_timestamp;

const LAST_MILLISECOND: TimeDelta = TimeDelta::milliseconds(86_399_999);

/// Inclusive calendar-day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `[today - days, today]`.
    #[must_use]
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        let start = today.checked_sub_days(Days::new(u64::from(days))).unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// The initial range of a list page.
    #[must_use]
    pub fn initial(today: NaiveDate, filters: &FilterConfig) -> Self {
        Self::last_days(today, filters.default_window_days)
    }

    /// Whole days between start and end.
    #[must_use]
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn validate(&self, max_span_days: u32) -> Validation {
        validation::date_range(self.start, self.end, max_span_days)
    }

    /// Start of the first day in `tz`, as UTC.
    pub fn start_instant<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Utc> {
        local_to_utc(tz, self.start.and_time(NaiveTime::MIN))
    }

    /// 23:59:59.999 of the last day in `tz`, as UTC, so the whole day is included.
    pub fn end_instant<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Utc> {
        local_to_utc(tz, self.end.and_time(NaiveTime::MIN) + LAST_MILLISECOND)
    }

    /// `startDate`/`endDate` query parameters for the list endpoints.
    pub fn query_params<Tz: TimeZone>(&self, tz: &Tz) -> [(&'static str, String); 2] {
        [
            ("startDate", format_timestamp(&self.start_instant(tz))),
            ("endDate", format_timestamp(&self.end_instant(tz))),
        ]
    }
}

/// Accepts `yyyy-MM-dd` or `dd/MM/yyyy`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
}

/// Local wall-clock time to UTC. Times skipped by a DST jump are read as UTC.
fn local_to_utc<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Utc> {
    tz.from_local_datetime(&local)
        .earliest()
        .map_or_else(|| local.and_utc(), |dt| dt.with_timezone(&Utc))
}
