//! Formatter configuration.
//!
//! A [`FormatterConfig`] is an immutable value handed to the formatter at
//! construction. It can be built in code through [`FormatterConfig::builder`]
//! or loaded from JSON, where every field is optional:
//!
//! ```
//! use interval_format::config::FormatterConfig;
//! use interval_format::style::PresentationStyle;
//!
//! let config = FormatterConfig::from_json(r#"{
//!     "style": "abbreviated",
//!     "allowed_units": ["hour", "minute"],
//!     "max_unit_count": 1
//! }"#).unwrap();
//! assert_eq!(config.style, PresentationStyle::Abbreviated);
//! assert!(config.zero_behavior.is_all());
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::style::PresentationStyle;
use crate::unit::{all_units, TimeUnit};
use crate::zero::ZeroBehavior;

/// Options controlling one formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub style: PresentationStyle,
    /// Base units the interval may be split into.
    pub allowed_units: BTreeSet<TimeUnit>,
    /// Upper bound on the number of *nonzero* units rendered.
    pub max_unit_count: Option<usize>,
    pub zero_behavior: ZeroBehavior,
    /// Append a unit-scaled timestamp of the From-instant to colloquial phrases.
    pub include_relevant_time: bool,
    /// Collapse sub-five-minute colloquial differences to "now".
    pub allows_now_on_colloquial: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            style: PresentationStyle::default(),
            allowed_units: all_units(),
            max_unit_count: None,
            zero_behavior: ZeroBehavior::default(),
            include_relevant_time: false,
            allows_now_on_colloquial: false,
        }
    }
}

impl FormatterConfig {
    pub fn builder() -> FormatterConfigBuilder {
        FormatterConfigBuilder::default()
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidConfig`] if the JSON is malformed or the
    /// resulting configuration fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| FormatError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidConfig`] when `max_unit_count` is zero or
    /// `allowed_units` contains the week unit.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.max_unit_count == Some(0) {
            return Err(FormatError::InvalidConfig(
                "max_unit_count must be positive".to_string(),
            ));
        }
        if let Some(unit) = self.allowed_units.iter().find(|u| !u.is_base()) {
            return Err(FormatError::InvalidConfig(format!(
                "'{unit}' cannot be an allowed unit"
            )));
        }
        Ok(())
    }
}

/// Consuming builder for [`FormatterConfig`].
#[derive(Debug, Clone, Default)]
pub struct FormatterConfigBuilder {
    config: FormatterConfig,
}

impl FormatterConfigBuilder {
    pub fn style(mut self, style: PresentationStyle) -> Self {
        self.config.style = style;
        self
    }

    pub fn allowed_units<I: IntoIterator<Item = TimeUnit>>(mut self, units: I) -> Self {
        self.config.allowed_units = units.into_iter().collect();
        self
    }

    pub fn max_unit_count(mut self, max: usize) -> Self {
        self.config.max_unit_count = Some(max);
        self
    }

    pub fn zero_behavior(mut self, behavior: ZeroBehavior) -> Self {
        self.config.zero_behavior = behavior;
        self
    }

    pub fn include_relevant_time(mut self, include: bool) -> Self {
        self.config.include_relevant_time = include;
        self
    }

    pub fn allows_now_on_colloquial(mut self, allow: bool) -> Self {
        self.config.allows_now_on_colloquial = allow;
        self
    }

    /// # Errors
    ///
    /// See [`FormatterConfig::validate`].
    pub fn build(self) -> Result<FormatterConfig, FormatError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
