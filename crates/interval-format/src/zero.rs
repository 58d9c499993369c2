//! Zero-trimming: deciding which zero-valued units survive into the output.
//!
//! [`ZeroBehavior`] is a set of independent flags. Any combination is legal
//! and each flag is honored on its own:
//!
//! - `leading` drops zeros seen before the first nonzero unit.
//! - `middle` drops **every** zero, wherever it sits. This is a long-standing
//!   compatibility behavior and is kept as-is.
//! - `trailing` removes the zero-runs before the first and after the last
//!   nonzero unit, leaving interior zeros alone.
//!
//! The union of all three is [`ZeroBehavior::ALL`], the default.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::unit::UnitDelta;

/// Which zero-valued units to omit from an itemized rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<ZeroFlag>", into = "Vec<ZeroFlag>")]
pub struct ZeroBehavior {
    pub leading: bool,
    pub middle: bool,
    pub trailing: bool,
}

/// Serialized name of a single [`ZeroBehavior`] flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroFlag {
    Leading,
    Middle,
    Trailing,
    All,
}

impl ZeroBehavior {
    /// Keep every zero.
    pub const NONE: Self = Self {
        leading: false,
        middle: false,
        trailing: false,
    };
    pub const LEADING: Self = Self {
        leading: true,
        middle: false,
        trailing: false,
    };
    pub const MIDDLE: Self = Self {
        leading: false,
        middle: true,
        trailing: false,
    };
    pub const TRAILING: Self = Self {
        leading: false,
        middle: false,
        trailing: true,
    };
    /// Drop every zero.
    pub const ALL: Self = Self {
        leading: true,
        middle: true,
        trailing: true,
    };

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    pub fn is_all(self) -> bool {
        self == Self::ALL
    }

    pub fn contains(self, other: Self) -> bool {
        (!other.leading || self.leading)
            && (!other.middle || self.middle)
            && (!other.trailing || self.trailing)
    }
}

impl Default for ZeroBehavior {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for ZeroBehavior {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            leading: self.leading || rhs.leading,
            middle: self.middle || rhs.middle,
            trailing: self.trailing || rhs.trailing,
        }
    }
}

impl BitOrAssign for ZeroBehavior {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl From<ZeroFlag> for ZeroBehavior {
    fn from(flag: ZeroFlag) -> Self {
        match flag {
            ZeroFlag::Leading => Self::LEADING,
            ZeroFlag::Middle => Self::MIDDLE,
            ZeroFlag::Trailing => Self::TRAILING,
            ZeroFlag::All => Self::ALL,
        }
    }
}

impl From<Vec<ZeroFlag>> for ZeroBehavior {
    fn from(flags: Vec<ZeroFlag>) -> Self {
        flags
            .into_iter()
            .fold(Self::NONE, |acc, flag| acc | Self::from(flag))
    }
}

impl From<ZeroBehavior> for Vec<ZeroFlag> {
    fn from(behavior: ZeroBehavior) -> Self {
        if behavior.is_all() {
            return vec![ZeroFlag::All];
        }
        let mut flags = Vec::new();
        if behavior.leading {
            flags.push(ZeroFlag::Leading);
        }
        if behavior.middle {
            flags.push(ZeroFlag::Middle);
        }
        if behavior.trailing {
            flags.push(ZeroFlag::Trailing);
        }
        flags
    }
}

impl FromStr for ZeroBehavior {
    type Err = FormatError;

    /// Parse `"none"`, `"all"`, or a comma-separated list of
    /// `leading`/`middle`/`trailing`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut behavior = Self::NONE;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            behavior |= match part.to_lowercase().as_str() {
                "none" => Self::NONE,
                "all" => Self::ALL,
                "leading" => Self::LEADING,
                "middle" => Self::MIDDLE,
                "trailing" => Self::TRAILING,
                other => {
                    return Err(FormatError::InvalidConfig(format!(
                        "unknown zero behavior '{other}'"
                    )))
                }
            };
        }
        Ok(behavior)
    }
}

impl fmt::Display for ZeroBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = Vec::<ZeroFlag>::from(*self)
            .into_iter()
            .map(|flag| match flag {
                ZeroFlag::Leading => "leading",
                ZeroFlag::Middle => "middle",
                ZeroFlag::Trailing => "trailing",
                ZeroFlag::All => "all",
            })
            .collect();
        f.write_str(&names.join(","))
    }
}

/// Filter an ordered (coarsest-first) delta sequence down to the entries
/// that should be rendered.
///
/// `max_count` bounds the number of *nonzero* entries: once that many have
/// been seen, every remaining unit is discarded, zeros included.
///
/// ```
/// use interval_format::unit::{TimeUnit, UnitDelta};
/// use interval_format::zero::{trim, ZeroBehavior};
///
/// let deltas = [
///     UnitDelta::new(TimeUnit::Hour, 0),
///     UnitDelta::new(TimeUnit::Minute, 5),
///     UnitDelta::new(TimeUnit::Second, 0),
/// ];
/// let kept = trim(&deltas, ZeroBehavior::LEADING, None);
/// assert_eq!(kept.len(), 2);
/// assert_eq!(kept[0].unit, TimeUnit::Minute);
/// ```
pub fn trim(
    deltas: &[UnitDelta],
    behavior: ZeroBehavior,
    max_count: Option<usize>,
) -> Vec<UnitDelta> {
    let mut kept = Vec::with_capacity(deltas.len());
    let mut non_zero_seen = 0usize;

    for delta in deltas {
        if max_count.is_some_and(|max| non_zero_seen >= max) {
            break;
        }

        let drop = delta.is_zero()
            && (behavior.is_all()
                || (behavior.leading && non_zero_seen == 0)
                || behavior.middle);
        if !drop {
            kept.push(*delta);
        }

        if !delta.is_zero() {
            non_zero_seen += 1;
        }
    }

    if behavior.trailing {
        trim_edges(&mut kept);
    }
    kept
}

/// Strip the zero-runs before the first and after the last nonzero entry.
/// A sequence with no nonzero entry is left untouched.
fn trim_edges(entries: &mut Vec<UnitDelta>) {
    let Some(start) = entries.iter().position(|d| !d.is_zero()) else {
        return;
    };
    let end = entries
        .iter()
        .rposition(|d| !d.is_zero())
        .map_or(entries.len(), |last| last + 1);
    entries.truncate(end);
    entries.drain(..start);
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{TimeUnit, BASE_UNITS};
    use proptest::prelude::*;

    fn deltas(values: &[u64]) -> Vec<UnitDelta> {
        BASE_UNITS
            .iter()
            .zip(values)
            .map(|(&unit, &value)| UnitDelta::new(unit, value))
            .collect()
    }

    fn values(entries: &[UnitDelta]) -> Vec<u64> {
        entries.iter().map(|d| d.value).collect()
    }

    // ── flag set tests ──────────────────────────────────────────────────

    #[test]
    fn test_flags_combine_with_bitor() {
        let combined = ZeroBehavior::LEADING | ZeroBehavior::MIDDLE | ZeroBehavior::TRAILING;
        assert_eq!(combined, ZeroBehavior::ALL);
        assert!(combined.contains(ZeroBehavior::MIDDLE));
        assert!(!ZeroBehavior::LEADING.contains(ZeroBehavior::TRAILING));
        assert!(ZeroBehavior::NONE.is_empty());
    }

    #[test]
    fn test_default_is_drop_all() {
        assert!(ZeroBehavior::default().is_all());
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("none".parse::<ZeroBehavior>().unwrap(), ZeroBehavior::NONE);
        assert_eq!("all".parse::<ZeroBehavior>().unwrap(), ZeroBehavior::ALL);
        assert_eq!(
            "leading, trailing".parse::<ZeroBehavior>().unwrap(),
            ZeroBehavior::LEADING | ZeroBehavior::TRAILING
        );
        assert!("sideways".parse::<ZeroBehavior>().is_err());
    }

    #[test]
    fn test_serde_as_flag_list() {
        let behavior = ZeroBehavior::LEADING | ZeroBehavior::TRAILING;
        let json = serde_json::to_string(&behavior).unwrap();
        assert_eq!(json, r#"["leading","trailing"]"#);
        let back: ZeroBehavior = serde_json::from_str(&json).unwrap();
        assert_eq!(back, behavior);
        let all: ZeroBehavior = serde_json::from_str(r#"["all"]"#).unwrap();
        assert!(all.is_all());
        let none: ZeroBehavior = serde_json::from_str("[]").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(ZeroBehavior::NONE.to_string(), "none");
        assert_eq!(ZeroBehavior::ALL.to_string(), "all");
        assert_eq!(
            (ZeroBehavior::LEADING | ZeroBehavior::MIDDLE).to_string(),
            "leading,middle"
        );
    }

    // ── trim tests ──────────────────────────────────────────────────────

    #[test]
    fn test_keep_all_zeros_when_no_flags() {
        let input = deltas(&[0, 1, 0, 2, 0, 0]);
        assert_eq!(values(&trim(&input, ZeroBehavior::NONE, None)), vec![0, 1, 0, 2, 0, 0]);
    }

    #[test]
    fn test_drop_all_removes_every_zero() {
        let input = deltas(&[0, 1, 0, 2, 0, 0]);
        assert_eq!(values(&trim(&input, ZeroBehavior::ALL, None)), vec![1, 2]);
    }

    #[test]
    fn test_drop_all_on_all_zero_input_is_empty() {
        let input = deltas(&[0, 0, 0, 0, 0, 0]);
        assert!(trim(&input, ZeroBehavior::ALL, None).is_empty());
    }

    #[test]
    fn test_drop_leading_only() {
        let input = deltas(&[0, 0, 3, 0, 4, 0]);
        assert_eq!(
            values(&trim(&input, ZeroBehavior::LEADING, None)),
            vec![3, 0, 4, 0]
        );
    }

    #[test]
    fn test_drop_middle_drops_every_zero() {
        // Not just interior zeros: leading and trailing ones go too.
        let input = deltas(&[0, 1, 0, 2, 0, 0]);
        assert_eq!(values(&trim(&input, ZeroBehavior::MIDDLE, None)), vec![1, 2]);
    }

    #[test]
    fn test_drop_trailing_genuine_trailing_case() {
        let input = deltas(&[1, 2, 0, 0]);
        assert_eq!(values(&trim(&input, ZeroBehavior::TRAILING, None)), vec![1, 2]);
    }

    #[test]
    fn test_drop_trailing_keeps_interior_zero() {
        let input = deltas(&[1, 0, 2, 0]);
        let kept = trim(&input, ZeroBehavior::TRAILING, None);
        assert_eq!(values(&kept), vec![1, 0, 2]);
        assert_eq!(kept[1].unit, TimeUnit::Month);
    }

    #[test]
    fn test_drop_trailing_strips_both_edges() {
        let input = deltas(&[0, 0, 5, 0, 6, 0]);
        assert_eq!(
            values(&trim(&input, ZeroBehavior::TRAILING, None)),
            vec![5, 0, 6]
        );
    }

    #[test]
    fn test_drop_trailing_all_zero_is_unchanged() {
        let input = deltas(&[0, 0, 0]);
        assert_eq!(values(&trim(&input, ZeroBehavior::TRAILING, None)), vec![0, 0, 0]);
    }

    #[test]
    fn test_leading_and_trailing_keep_interior() {
        let input = deltas(&[0, 7, 0, 0, 8, 0]);
        let behavior = ZeroBehavior::LEADING | ZeroBehavior::TRAILING;
        assert_eq!(values(&trim(&input, behavior, None)), vec![7, 0, 0, 8]);
    }

    #[test]
    fn test_max_count_counts_nonzero_only() {
        let input = deltas(&[0, 1, 0, 2, 3, 4]);
        let kept = trim(&input, ZeroBehavior::NONE, Some(2));
        assert_eq!(values(&kept), vec![0, 1, 0, 2]);
    }

    #[test]
    fn test_max_count_discards_remaining_zeros() {
        let input = deltas(&[1, 0, 0, 0, 0, 0]);
        let kept = trim(&input, ZeroBehavior::NONE, Some(1));
        assert_eq!(values(&kept), vec![1]);
    }

    #[test]
    fn test_max_count_with_drop_all() {
        let input = deltas(&[0, 2, 0, 3, 0, 9]);
        let kept = trim(&input, ZeroBehavior::ALL, Some(2));
        assert_eq!(
            kept.iter().map(|d| d.unit).collect::<Vec<_>>(),
            vec![TimeUnit::Month, TimeUnit::Hour]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(trim(&[], ZeroBehavior::ALL, Some(3)).is_empty());
    }

    // ── properties ──────────────────────────────────────────────────────

    fn behavior_strategy() -> impl Strategy<Value = ZeroBehavior> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(leading, middle, trailing)| {
            ZeroBehavior {
                leading,
                middle,
                trailing,
            }
        })
    }

    proptest! {
        #[test]
        fn prop_drop_all_leaves_no_zeros(vals in proptest::collection::vec(0u64..4, 6)) {
            let kept = trim(&deltas(&vals), ZeroBehavior::ALL, None);
            prop_assert!(kept.iter().all(|d| d.value != 0));
        }

        #[test]
        fn prop_max_count_bounds_nonzero_entries(
            vals in proptest::collection::vec(0u64..4, 6),
            behavior in behavior_strategy(),
            max in 1usize..7,
        ) {
            let kept = trim(&deltas(&vals), behavior, Some(max));
            prop_assert!(kept.iter().filter(|d| d.value != 0).count() <= max);
        }

        #[test]
        fn prop_max_count_keeps_first_nonzero_entries(
            vals in proptest::collection::vec(0u64..4, 6),
            behavior in behavior_strategy(),
            max in 1usize..7,
        ) {
            let input = deltas(&vals);
            let kept = trim(&input, behavior, Some(max));
            let expected: Vec<UnitDelta> =
                input.iter().copied().filter(|d| d.value != 0).take(max).collect();
            let actual: Vec<UnitDelta> =
                kept.iter().copied().filter(|d| d.value != 0).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_order_is_preserved(
            vals in proptest::collection::vec(0u64..4, 6),
            behavior in behavior_strategy(),
        ) {
            let kept = trim(&deltas(&vals), behavior, None);
            prop_assert!(kept.windows(2).all(|w| w[0].unit < w[1].unit));
        }

        #[test]
        fn prop_nonzero_entries_survive_without_limit(
            vals in proptest::collection::vec(0u64..4, 6),
            behavior in behavior_strategy(),
        ) {
            let kept = trim(&deltas(&vals), behavior, None);
            let expected: Vec<u64> = vals.iter().copied().filter(|v| *v != 0).collect();
            let actual: Vec<u64> = kept.iter().map(|d| d.value).filter(|v| *v != 0).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
