//! The unit catalog: which calendar units an interval can be split into.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// A calendar unit, ordered from coarsest to finest.
///
/// [`TimeUnit::WeekOfYear`] is a virtual unit derived from the day count. It
/// is only ever chosen by the colloquial path and never appears in an
/// itemized rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[serde(alias = "years", alias = "y")]
    Year,
    #[serde(alias = "months", alias = "mo")]
    Month,
    #[serde(rename = "week", alias = "weeks", alias = "w")]
    WeekOfYear,
    #[serde(alias = "days", alias = "d")]
    Day,
    #[serde(alias = "hours", alias = "h")]
    Hour,
    #[serde(alias = "minutes", alias = "m")]
    Minute,
    #[serde(alias = "seconds", alias = "s")]
    Second,
}

/// The six units an interval can be decomposed into, coarsest first.
pub const BASE_UNITS: [TimeUnit; 6] = [
    TimeUnit::Year,
    TimeUnit::Month,
    TimeUnit::Day,
    TimeUnit::Hour,
    TimeUnit::Minute,
    TimeUnit::Second,
];

impl TimeUnit {
    /// Stable code used to build localization keys (`"year"`, `"week"`, ...).
    pub fn code(self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Month => "month",
            TimeUnit::WeekOfYear => "week",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }

    /// Whether this unit can appear in an itemized (components) rendering.
    pub fn is_base(self) -> bool {
        self != TimeUnit::WeekOfYear
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TimeUnit {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "y" | "year" | "years" => Ok(TimeUnit::Year),
            "mo" | "month" | "months" => Ok(TimeUnit::Month),
            "w" | "week" | "weeks" => Ok(TimeUnit::WeekOfYear),
            "d" | "day" | "days" => Ok(TimeUnit::Day),
            "h" | "hour" | "hours" => Ok(TimeUnit::Hour),
            "m" | "min" | "minute" | "minutes" => Ok(TimeUnit::Minute),
            "s" | "sec" | "second" | "seconds" => Ok(TimeUnit::Second),
            other => Err(FormatError::InvalidConfig(format!(
                "unknown time unit '{other}'"
            ))),
        }
    }
}

/// All six base units.
pub fn all_units() -> BTreeSet<TimeUnit> {
    BASE_UNITS.into_iter().collect()
}

/// The absolute magnitude of an interval for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDelta {
    pub unit: TimeUnit,
    pub value: u64,
}

impl UnitDelta {
    pub fn new(unit: TimeUnit, value: u64) -> Self {
        Self { unit, value }
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }
}

/// Convert signed per-unit deltas into the magnitude-only sequence the
/// trimming engine works on, keeping only base units and their order.
pub fn magnitudes(signed: &[(TimeUnit, i64)]) -> Vec<UnitDelta> {
    signed
        .iter()
        .filter(|(unit, _)| unit.is_base())
        .map(|&(unit, value)| UnitDelta::new(unit, value.unsigned_abs()))
        .collect()
}
