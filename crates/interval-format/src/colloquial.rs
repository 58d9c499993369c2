//! Colloquial phrasing: "2 hours ago", "next week", "just now".
//!
//! A single dominant unit is chosen by checking units in a fixed priority
//! order (year, month, week, day, hour, minute, second) and taking the first
//! nonzero one. Weeks are carved out of the day count. When every delta is
//! zero the itemized renderer takes over.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};

use crate::calendar::{Calendar, CalendarInstant};
use crate::components::render_components;
use crate::config::FormatterConfig;
use crate::locale::Localizer;
use crate::unit::{magnitudes, TimeUnit};
use crate::zero::trim;

const NOW_KEY: &str = "colloquial.now";
const RELEVANT_TIME_KEY: &str = "colloquial.relevant_time";

/// Minute differences below this collapse to "now" when allowed.
const NOW_MINUTE_THRESHOLD: i64 = 5;

/// The outcome of dominant-unit selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Phrase the interval in terms of `unit`.
    Unit { unit: TimeUnit, value: u64 },
    /// Close enough to say "now".
    Now,
    /// Every delta is zero.
    Empty,
}

/// Pick the dominant unit from signed deltas.
///
/// `days_in_week` is the length of the week containing the From-date. The
/// minute check for "now" compares the *signed* minute delta, so any
/// negative minute difference qualifies.
pub fn select_dominant(
    deltas: &[(TimeUnit, i64)],
    days_in_week: i64,
    allows_now: bool,
) -> Selection {
    let delta = |unit: TimeUnit| {
        deltas
            .iter()
            .find(|(u, _)| *u == unit)
            .map_or(0, |&(_, v)| v)
    };
    let pick = |unit, value: i64| Selection::Unit {
        unit,
        value: value.unsigned_abs(),
    };

    let years = delta(TimeUnit::Year);
    if years != 0 {
        return pick(TimeUnit::Year, years);
    }
    let months = delta(TimeUnit::Month);
    if months != 0 {
        return pick(TimeUnit::Month, months);
    }
    let days = delta(TimeUnit::Day);
    if days_in_week > 0 && days.abs() >= days_in_week {
        return pick(TimeUnit::WeekOfYear, days.abs() / days_in_week);
    }
    if days != 0 {
        return pick(TimeUnit::Day, days);
    }
    let hours = delta(TimeUnit::Hour);
    if hours != 0 {
        return pick(TimeUnit::Hour, hours);
    }
    let minutes = delta(TimeUnit::Minute);
    if minutes != 0 {
        if allows_now && minutes < NOW_MINUTE_THRESHOLD {
            return Selection::Now;
        }
        return pick(TimeUnit::Minute, minutes);
    }
    let seconds = delta(TimeUnit::Second);
    if seconds != 0 {
        if allows_now {
            return Selection::Now;
        }
        return pick(TimeUnit::Second, seconds);
    }
    Selection::Empty
}

/// Render the interval between two compatible instants as a colloquial
/// phrase.
pub fn render_colloquial(
    from: &CalendarInstant,
    to: &CalendarInstant,
    config: &FormatterConfig,
    localizer: &dyn Localizer,
    calendar: &dyn Calendar,
) -> String {
    let deltas = calendar.decompose(&config.allowed_units, from, to);
    let selection = select_dominant(
        &deltas,
        calendar.days_in_week(from),
        config.allows_now_on_colloquial,
    );
    tracing::debug!(?selection, "colloquial selection");

    match selection {
        Selection::Now => localizer.lookup(NOW_KEY, &[]),
        Selection::Empty => {
            let kept = trim(
                &magnitudes(&deltas),
                config.zero_behavior,
                config.max_unit_count,
            );
            render_components(&kept, config.style, localizer)
        }
        Selection::Unit { unit, value } => {
            let is_future = from.instant > to.instant;
            let text = phrase(unit, value, is_future, localizer);
            if !config.include_relevant_time {
                return text;
            }
            let suffix = relevant_time(from, unit, localizer);
            if suffix.is_empty() {
                return text;
            }
            let joined = localizer.lookup(RELEVANT_TIME_KEY, &[&text, &suffix]);
            if joined.is_empty() {
                format!("{text} {suffix}")
            } else {
                joined
            }
        }
    }
}

/// Look up the tense- and unit-specific template and fill in the value.
fn phrase(unit: TimeUnit, value: u64, is_future: bool, localizer: &dyn Localizer) -> String {
    let tense = if is_future { "future" } else { "past" };
    let key = format!(
        "colloquial.{tense}.{}.{}",
        unit.code(),
        localizer.plural(value).name()
    );
    localizer.lookup(&key, &[&value.to_string()])
}

/// Format the From-instant with the unit's relevant-time pattern.
///
/// Empty when the bundle has no pattern for the unit or the pattern is not a
/// valid strftime string.
pub fn relevant_time(from: &CalendarInstant, unit: TimeUnit, localizer: &dyn Localizer) -> String {
    let pattern = localizer.lookup(&format!("relevant_time.{}", unit.code()), &[]);
    if pattern.is_empty() {
        return String::new();
    }

    let items: Vec<Item<'_>> = StrftimeItems::new(&pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        tracing::debug!(%unit, pattern = %pattern, "invalid relevant-time pattern");
        return String::new();
    }

    let mut out = String::new();
    match write!(out, "{}", from.local().format_with_items(items.iter())) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
