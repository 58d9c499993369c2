//! Localized string lookup.
//!
//! Formatting code never hard-codes user-visible text. Every separator, unit
//! name and phrase template is looked up by key through a [`Localizer`],
//! which makes the formatters deterministic under a fake provider in tests.
//!
//! [`Bundle`] is the stock implementation: a flat JSON object of
//! `key -> template`, with `{0}`, `{1}`, ... placeholders.

use std::collections::HashMap;

use crate::error::FormatError;

const ENGLISH: &str = include_str!("../resources/en.json");

/// Cardinal plural category used to pick a singular or plural unit name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    One,
    Other,
}

impl PluralCategory {
    pub fn name(self) -> &'static str {
        match self {
            PluralCategory::One => "one",
            PluralCategory::Other => "other",
        }
    }

    /// English cardinal rule: exactly one is singular.
    pub fn english(value: u64) -> Self {
        if value == 1 {
            PluralCategory::One
        } else {
            PluralCategory::Other
        }
    }
}

/// A read-only source of localized strings.
///
/// Implementations must return an empty string for unknown keys rather than
/// failing; callers treat empty as "not available".
pub trait Localizer: Send + Sync {
    /// Resolve `key` and substitute `args` into its `{n}` placeholders.
    fn lookup(&self, key: &str, args: &[&str]) -> String;

    /// Plural category for a unit value.
    fn plural(&self, value: u64) -> PluralCategory {
        PluralCategory::english(value)
    }
}

/// A localization bundle loaded from a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: HashMap<String, String>,
}

impl Bundle {
    /// The built-in English bundle.
    ///
    /// The bundle is embedded at build time; if it ever fails to parse the
    /// error is logged and an empty bundle is returned.
    pub fn english() -> Self {
        Self::from_json(ENGLISH).unwrap_or_else(|e| {
            tracing::error!(error = %e, "embedded English bundle is invalid");
            Self::default()
        })
    }

    /// Parse a bundle from a JSON object whose values are all strings.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidBundle`] if the text is not a JSON object
    /// of strings.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| FormatError::InvalidBundle(e.to_string()))?;
        Ok(Self { entries })
    }

    /// Build a bundle from explicit key/template pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Layer `overrides` on top of this bundle; keys in `overrides` win.
    pub fn with_overrides(mut self, overrides: Bundle) -> Self {
        self.entries.extend(overrides.entries);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for Bundle {
    fn lookup(&self, key: &str, args: &[&str]) -> String {
        match self.get(key) {
            Some(template) => interpolate(template, args),
            None => {
                tracing::trace!(key, "missing localization key");
                String::new()
            }
        }
    }
}

/// Replace `{n}` placeholders with `args[n]` in a single pass.
///
/// Placeholders with no matching argument, and braces that do not form a
/// placeholder, are copied through unchanged.
pub fn interpolate(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// ── Tests ───────────────────────────────────────────────────────────────────
