//! The public formatting facade.
//!
//! An [`IntervalFormatter`] bundles an immutable [`FormatterConfig`] with the
//! localization and calendar collaborators it was built with. Each call is
//! independent, so one formatter can be shared freely across threads.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::calendar::{Calendar, CalendarInstant, GregorianCalendar};
use crate::colloquial::render_colloquial;
use crate::components::render_components;
use crate::config::FormatterConfig;
use crate::error::FormatError;
use crate::locale::{Bundle, Localizer};
use crate::style::PresentationStyle;
use crate::unit::magnitudes;
use crate::zero::trim;

/// Formats the difference between two instants.
#[derive(Clone)]
pub struct IntervalFormatter {
    config: FormatterConfig,
    localizer: Arc<dyn Localizer>,
    calendar: Arc<dyn Calendar>,
}

impl std::fmt::Debug for IntervalFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalFormatter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl IntervalFormatter {
    /// A formatter using the built-in English bundle and Gregorian calendar.
    pub fn new(config: FormatterConfig) -> Self {
        Self::with_collaborators(
            config,
            Arc::new(Bundle::english()),
            Arc::new(GregorianCalendar),
        )
    }

    pub fn with_collaborators(
        config: FormatterConfig,
        localizer: Arc<dyn Localizer>,
        calendar: Arc<dyn Calendar>,
    ) -> Self {
        Self {
            config,
            localizer,
            calendar,
        }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Format the difference between `from` and `to`.
    ///
    /// Returns `None` only when the two instants are anchored to different
    /// calendar systems. An empty string is a valid result (for example an
    /// all-zero interval with zeros dropped).
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_format::{CalendarInstant, FormatterConfig, IntervalFormatter};
    ///
    /// let formatter = IntervalFormatter::new(FormatterConfig::default());
    /// let from = CalendarInstant::parse("2026-03-16T09:00:00Z", "UTC").unwrap();
    /// let to = CalendarInstant::parse("2026-03-16T11:15:00Z", "UTC").unwrap();
    /// assert_eq!(formatter.format(&from, &to).unwrap(), "2 hours, 15 minutes");
    /// ```
    pub fn format(&self, from: &CalendarInstant, to: &CalendarInstant) -> Option<String> {
        if !from.is_compatible_with(to) {
            tracing::debug!(
                from = %from.calendar,
                to = %to.calendar,
                "calendar systems differ, cannot compare"
            );
            return None;
        }

        let rendered = match self.config.style {
            PresentationStyle::Colloquial => render_colloquial(
                from,
                to,
                &self.config,
                self.localizer.as_ref(),
                self.calendar.as_ref(),
            ),
            style => {
                let deltas = self
                    .calendar
                    .decompose(&self.config.allowed_units, from, to);
                let kept = trim(
                    &magnitudes(&deltas),
                    self.config.zero_behavior,
                    self.config.max_unit_count,
                );
                render_components(&kept, style, self.localizer.as_ref())
            }
        };
        Some(rendered)
    }

    /// Format an elapsed interval ending at `now`.
    ///
    /// Both endpoints are read in UTC on the Gregorian calendar, so the result
    /// is never absent. A negative interval places the From-instant after
    /// `now`. Intervals reaching outside chrono's range render as empty.
    pub fn format_interval_at(&self, now: DateTime<Utc>, seconds: i64) -> String {
        let Some(start) = Duration::try_seconds(seconds).and_then(|d| now.checked_sub_signed(d))
        else {
            tracing::debug!(seconds, "interval out of range");
            return String::new();
        };
        let from = CalendarInstant::utc(start);
        let to = CalendarInstant::utc(now);
        self.format(&from, &to).unwrap_or_default()
    }

    /// [`format_interval_at`](Self::format_interval_at) anchored at the
    /// system clock.
    pub fn format_interval(&self, seconds: i64) -> String {
        self.format_interval_at(Utc::now(), seconds)
    }

    /// Format the difference between two RFC 3339 strings read in `timezone`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidDatetime`] or
    /// [`FormatError::InvalidTimezone`] if either input cannot be parsed.
    pub fn format_rfc3339(
        &self,
        from: &str,
        to: &str,
        timezone: &str,
    ) -> Result<Option<String>, FormatError> {
        let from = CalendarInstant::parse(from, timezone)?;
        let to = CalendarInstant::parse(to, timezone)?;
        Ok(self.format(&from, &to))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
