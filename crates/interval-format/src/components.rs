//! Itemized rendering: `value + separator + unit name`, joined per style.

use crate::locale::Localizer;
use crate::style::{unit_name_key, unit_separator_key, value_separator_key, PresentationStyle};
use crate::unit::UnitDelta;

/// One entry ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEntry {
    pub value: u64,
    pub unit_name: String,
    pub value_separator: String,
}

impl RenderEntry {
    fn write_to(&self, out: &mut String) {
        out.push_str(&self.value.to_string());
        out.push_str(&self.value_separator);
        out.push_str(&self.unit_name);
    }
}

/// Resolve unit names and separators for already-trimmed deltas.
pub fn render_entries(
    filtered: &[UnitDelta],
    style: PresentationStyle,
    localizer: &dyn Localizer,
) -> Vec<RenderEntry> {
    let value_separator = localizer.lookup(&value_separator_key(style), &[]);
    filtered
        .iter()
        .map(|delta| RenderEntry {
            value: delta.value,
            unit_name: localizer.lookup(
                &unit_name_key(style, delta.unit, localizer.plural(delta.value)),
                &[],
            ),
            value_separator: value_separator.clone(),
        })
        .collect()
}

/// Render trimmed deltas as a single string, e.g. `"2 hours, 15 minutes"`.
///
/// Returns an empty string when nothing survived trimming.
pub fn render_components(
    filtered: &[UnitDelta],
    style: PresentationStyle,
    localizer: &dyn Localizer,
) -> String {
    let entries = render_entries(filtered, style, localizer);
    if entries.is_empty() {
        return String::new();
    }

    let unit_separator = localizer.lookup(&unit_separator_key(style), &[]);
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(&unit_separator);
        }
        entry.write_to(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Bundle;
    use crate::unit::TimeUnit;

    fn hm(hours: u64, minutes: u64) -> Vec<UnitDelta> {
        vec![
            UnitDelta::new(TimeUnit::Hour, hours),
            UnitDelta::new(TimeUnit::Minute, minutes),
        ]
    }

    #[test]
    fn test_render_full() {
        let bundle = Bundle::english();
        assert_eq!(
            render_components(&hm(2, 15), PresentationStyle::Full, &bundle),
            "2 hours, 15 minutes"
        );
    }

    #[test]
    fn test_render_singular() {
        let bundle = Bundle::english();
        assert_eq!(
            render_components(&hm(1, 1), PresentationStyle::Full, &bundle),
            "1 hour, 1 minute"
        );
    }

    #[test]
    fn test_render_zero_uses_plural() {
        let bundle = Bundle::english();
        assert_eq!(
            render_components(&hm(0, 5), PresentationStyle::Short, &bundle),
            "0 hrs, 5 mins"
        );
    }

    #[test]
    fn test_render_abbreviated() {
        let bundle = Bundle::english();
        assert_eq!(
            render_components(&hm(2, 15), PresentationStyle::Abbreviated, &bundle),
            "2h, 15m"
        );
    }

    #[test]
    fn test_render_positional() {
        let bundle = Bundle::english();
        let deltas = vec![
            UnitDelta::new(TimeUnit::Hour, 2),
            UnitDelta::new(TimeUnit::Minute, 15),
            UnitDelta::new(TimeUnit::Second, 40),
        ];
        assert_eq!(
            render_components(&deltas, PresentationStyle::Positional, &bundle),
            "2:15:40"
        );
    }

    #[test]
    fn test_render_empty_is_empty_string() {
        let bundle = Bundle::english();
        assert_eq!(render_components(&[], PresentationStyle::Full, &bundle), "");
    }

    #[test]
    fn test_render_entries_carry_separator() {
        let bundle = Bundle::english();
        let entries = render_entries(&hm(3, 0), PresentationStyle::Full, &bundle);
        assert_eq!(
            entries[0],
            RenderEntry {
                value: 3,
                unit_name: "hours".to_string(),
                value_separator: " ".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_keys_degrade_to_bare_values() {
        let bundle = Bundle::default();
        assert_eq!(
            render_components(&hm(2, 15), PresentationStyle::Full, &bundle),
            "215"
        );
    }
}
