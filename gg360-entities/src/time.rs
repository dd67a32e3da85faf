use std::fmt;

use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    OffsetDateTime, PrimitiveDateTime,
};

pub use time::{Date, Month, Weekday};

const ISO_DATE: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

const ISO_DATE_TIME_MINUTES: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

const ISO_DATE_TIME_SECONDS: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// A point in time with second precision or better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn try_from_millis(millis: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .ok()
            .map(Self)
    }

    pub fn as_millis(&self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    /// The calendar date in the offset the timestamp was recorded with.
    pub fn date(&self) -> Date {
        self.0.date()
    }

    pub const fn into_inner(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let t = self.0;
        write!(
            f,
            "{} {:02}:{:02}",
            format_iso_date(t.date()),
            t.hour(),
            t.minute()
        )
    }
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Normalizes a wire date into a calendar date.
///
/// Only the leading `YYYY-MM-DD` part is taken into account, i.e.
/// `2024-05-03T23:30:00.000Z` and `2024-05-03T00:00:00+02:00` are both
/// the 3rd of May. Time-of-day and offset never shift the day.
pub fn parse_calendar_date(s: &str) -> Option<Date> {
    let s = s.trim();
    let prefix = s.get(..10)?;
    Date::parse(prefix, ISO_DATE).ok()
}

/// Parses a wire timestamp.
///
/// Accepts RFC 3339, offset-less ISO date-times (taken as UTC) and plain
/// dates (midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<Timestamp> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(t) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(t.into());
    }
    if let Some(t) = [ISO_DATE_TIME_SECONDS, ISO_DATE_TIME_MINUTES]
        .into_iter()
        .find_map(|format| PrimitiveDateTime::parse(s, format).ok())
    {
        return Some(t.assume_utc().into());
    }
    Date::parse(s, ISO_DATE)
        .ok()
        .map(|d| d.midnight().assume_utc().into())
}
