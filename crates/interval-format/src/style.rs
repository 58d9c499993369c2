//! Presentation styles and the localization keys they resolve to.
//!
//! The style only chooses *keys*; the strings behind them come from the
//! [`Localizer`](crate::locale::Localizer).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::locale::PluralCategory;
use crate::unit::TimeUnit;

/// How an interval is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationStyle {
    /// `2:15:00`
    Positional,
    /// `2h, 15m`
    Abbreviated,
    /// `2 hr, 15 min`
    Short,
    /// `2 hours, 15 minutes`
    #[default]
    Full,
    /// `2 hours ago`
    Colloquial,
}

impl PresentationStyle {
    pub fn name(self) -> &'static str {
        match self {
            PresentationStyle::Positional => "positional",
            PresentationStyle::Abbreviated => "abbreviated",
            PresentationStyle::Short => "short",
            PresentationStyle::Full => "full",
            PresentationStyle::Colloquial => "colloquial",
        }
    }
}

impl fmt::Display for PresentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PresentationStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positional" => Ok(PresentationStyle::Positional),
            "abbreviated" | "abbrev" => Ok(PresentationStyle::Abbreviated),
            "short" => Ok(PresentationStyle::Short),
            "full" => Ok(PresentationStyle::Full),
            "colloquial" => Ok(PresentationStyle::Colloquial),
            other => Err(FormatError::InvalidConfig(format!(
                "unknown presentation style '{other}'"
            ))),
        }
    }
}

/// Key of the string placed between a value and its unit name.
pub fn value_separator_key(style: PresentationStyle) -> String {
    format!("style.{}.value_separator", style.name())
}

/// Key of the string placed between two rendered entries.
pub fn unit_separator_key(style: PresentationStyle) -> String {
    format!("style.{}.unit_separator", style.name())
}

/// Key of the localized unit name, e.g. `unit.hour.full.other`.
pub fn unit_name_key(style: PresentationStyle, unit: TimeUnit, plural: PluralCategory) -> String {
    format!("unit.{}.{}.{}", unit.code(), style.name(), plural.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_keys_follow_style_name() {
        assert_eq!(
            value_separator_key(PresentationStyle::Positional),
            "style.positional.value_separator"
        );
        assert_eq!(
            unit_separator_key(PresentationStyle::Full),
            "style.full.unit_separator"
        );
    }

    #[test]
    fn test_unit_name_key() {
        assert_eq!(
            unit_name_key(PresentationStyle::Short, TimeUnit::Minute, PluralCategory::One),
            "unit.minute.short.one"
        );
    }

    #[test]
    fn test_parse_and_display_round_trip_names() {
        for style in [
            PresentationStyle::Positional,
            PresentationStyle::Abbreviated,
            PresentationStyle::Short,
            PresentationStyle::Full,
            PresentationStyle::Colloquial,
        ] {
            assert_eq!(style.to_string().parse::<PresentationStyle>().unwrap(), style);
        }
        assert!("verbose".parse::<PresentationStyle>().is_err());
    }
}
