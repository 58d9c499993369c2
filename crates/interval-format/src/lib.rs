//! # interval-format
//!
//! Localized, human-readable formatting of the difference between two
//! instants.
//!
//! An interval is rendered either as itemized components
//! (`"2 hours, 15 minutes"`, `"2h, 15m"`, `"2:15:00"`) or as a colloquial
//! phrase built around a single dominant unit (`"2 hours ago"`,
//! `"next week"`, `"just now"`). Calendar arithmetic and localized strings
//! come from injected collaborators, so every formatting call is a pure
//! function of its inputs.
//!
//! ## Modules
//!
//! - [`unit`] — The unit catalog and per-unit deltas
//! - [`zero`] — Zero-trimming policy and engine
//! - [`style`] — Presentation styles and the localization keys they use
//! - [`locale`] — Localization provider trait and the JSON resource bundle
//! - [`calendar`] — Calendar decomposition trait and the Gregorian implementation
//! - [`components`] — Itemized rendering
//! - [`colloquial`] — Dominant-unit selection and phrase assembly
//! - [`config`] — Formatter configuration
//! - [`formatter`] — The [`IntervalFormatter`] facade
//! - [`error`] — Error types

pub mod calendar;
pub mod colloquial;
pub mod components;
pub mod config;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod style;
pub mod unit;
pub mod zero;

pub use calendar::{Calendar, CalendarInstant, CalendarSystem, GregorianCalendar};
pub use colloquial::{render_colloquial, select_dominant, Selection};
pub use components::{render_components, RenderEntry};
pub use config::{FormatterConfig, FormatterConfigBuilder};
pub use error::FormatError;
pub use formatter::IntervalFormatter;
pub use locale::{Bundle, Localizer, PluralCategory};
pub use style::PresentationStyle;
pub use unit::{TimeUnit, UnitDelta};
pub use zero::{trim, ZeroBehavior};
