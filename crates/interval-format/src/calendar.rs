//! Calendar decomposition: turning a pair of instants into per-unit deltas.
//!
//! The formatters only consume the deltas produced here. [`Calendar`] is the
//! seam; [`GregorianCalendar`] is the stock implementation on top of chrono.
//!
//! Deltas are signed (`to - from`) and produced coarsest first. A unit left
//! out of the allowed set does not lose its magnitude: it folds into the next
//! finer allowed unit, so `{month, day}` over two years yields 24 months.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Datelike, LocalResult, Months, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::unit::{TimeUnit, BASE_UNITS};

/// Identifies the calendar system an instant is anchored to.
///
/// Two instants can only be compared when their systems are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    #[default]
    Gregorian,
    Iso8601,
    Other(String),
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarSystem::Gregorian => f.write_str("gregorian"),
            CalendarSystem::Iso8601 => f.write_str("iso8601"),
            CalendarSystem::Other(name) => f.write_str(name),
        }
    }
}

/// An instant together with the zone and calendar it is read in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarInstant {
    pub instant: DateTime<Utc>,
    pub timezone: Tz,
    pub calendar: CalendarSystem,
}

impl CalendarInstant {
    /// A Gregorian instant read in `timezone`.
    pub fn new(instant: DateTime<Utc>, timezone: Tz) -> Self {
        Self {
            instant,
            timezone,
            calendar: CalendarSystem::Gregorian,
        }
    }

    /// A Gregorian instant read in UTC.
    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self::new(instant, Tz::UTC)
    }

    pub fn with_calendar(mut self, calendar: CalendarSystem) -> Self {
        self.calendar = calendar;
        self
    }

    /// Parse an RFC 3339 string, read in the IANA zone `timezone`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidDatetime`] or [`FormatError::InvalidTimezone`].
    pub fn parse(datetime: &str, timezone: &str) -> Result<Self, FormatError> {
        Ok(Self::new(parse_rfc3339(datetime)?, parse_timezone(timezone)?))
    }

    /// Wall-clock time in this instant's zone.
    pub fn local(&self) -> DateTime<Tz> {
        self.instant.with_timezone(&self.timezone)
    }

    pub fn is_compatible_with(&self, other: &CalendarInstant) -> bool {
        self.calendar == other.calendar
    }
}

/// Calendar arithmetic the formatters depend on.
pub trait Calendar: Send + Sync {
    /// Signed per-unit deltas from `from` to `to`, one entry per allowed base
    /// unit, coarsest first. [`TimeUnit::WeekOfYear`] in `units` is ignored.
    fn decompose(
        &self,
        units: &BTreeSet<TimeUnit>,
        from: &CalendarInstant,
        to: &CalendarInstant,
    ) -> Vec<(TimeUnit, i64)>;

    /// Number of days in the week containing `at`.
    fn days_in_week(&self, at: &CalendarInstant) -> i64;
}

/// Proleptic Gregorian arithmetic.
///
/// Years and months step by calendar month on the From-instant's wall clock
/// (clamping to the end of shorter months). Days and finer units are split out
/// of the exact elapsed time left after that, so DST transitions never add or
/// remove an hour.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianCalendar;

impl Calendar for GregorianCalendar {
    fn decompose(
        &self,
        units: &BTreeSet<TimeUnit>,
        from: &CalendarInstant,
        to: &CalendarInstant,
    ) -> Vec<(TimeUnit, i64)> {
        let tz = from.timezone;
        let (start, end, sign) = if from.instant <= to.instant {
            (from.instant, to.instant, 1)
        } else {
            (to.instant, from.instant, -1)
        };
        let end_local = end.with_timezone(&tz).naive_local();
        let mut cursor = start.with_timezone(&tz).naive_local();
        let mut stepped = false;
        let mut remaining: Option<i64> = None;

        let mut deltas = Vec::with_capacity(units.len());
        for unit in BASE_UNITS.into_iter().filter(|u| units.contains(u)) {
            let value = match unit {
                TimeUnit::Year => {
                    let years = whole_months_between(cursor, end_local) / 12;
                    cursor = add_months(cursor, years * 12).unwrap_or(cursor);
                    stepped |= years > 0;
                    i64::from(years)
                }
                TimeUnit::Month => {
                    let months = whole_months_between(cursor, end_local);
                    cursor = add_months(cursor, months).unwrap_or(cursor);
                    stepped |= months > 0;
                    i64::from(months)
                }
                _ => {
                    let seconds = remaining.get_or_insert_with(|| {
                        let anchor = if stepped {
                            resolve_local(&tz, cursor).unwrap_or(start)
                        } else {
                            start
                        };
                        (end - anchor).num_seconds().max(0)
                    });
                    let step = seconds_per(unit);
                    let count = *seconds / step;
                    *seconds -= count * step;
                    count
                }
            };
            deltas.push((unit, sign * value));
        }
        deltas
    }

    fn days_in_week(&self, _at: &CalendarInstant) -> i64 {
        7
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Parse an RFC 3339 datetime string into `DateTime<Utc>`.
pub(crate) fn parse_rfc3339(s: &str) -> Result<DateTime<Utc>, FormatError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FormatError::InvalidDatetime(format!("'{}': {}", s, e)))
}

/// Parse an IANA timezone string into `Tz`.
pub(crate) fn parse_timezone(s: &str) -> Result<Tz, FormatError> {
    s.parse::<Tz>()
        .map_err(|_| FormatError::InvalidTimezone(format!("'{}'", s)))
}

/// Map a wall-clock time back to an instant. An ambiguous time (DST fall
/// back) takes the earlier reading; a time inside a DST gap moves forward an
/// hour.
fn resolve_local(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    let resolved = match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => tz
            .from_local_datetime(&(local + chrono::Duration::hours(1)))
            .earliest(),
    };
    resolved.map(|dt| dt.with_timezone(&Utc))
}

fn seconds_per(unit: TimeUnit) -> i64 {
    match unit {
        TimeUnit::Day => 86_400,
        TimeUnit::Hour => 3_600,
        TimeUnit::Minute => 60,
        _ => 1,
    }
}

fn add_months(dt: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    dt.checked_add_months(Months::new(months))
}

/// Largest `n` such that `start + n months <= end`. Zero when `end < start`.
fn whole_months_between(start: NaiveDateTime, end: NaiveDateTime) -> u32 {
    let span = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let mut months = u32::try_from(span).unwrap_or(0);
    while months > 0 && add_months(start, months).is_none_or(|dt| dt > end) {
        months -= 1;
    }
    months
}

// ── Tests ───────────────────────────────────────────────────────────────────
