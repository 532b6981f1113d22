//! Number and text formatting for labels, tooltips, legends and CSV cells.

use crate::models::{ConversationAttribute, MetricConfig, StatsType};

/// Where a formatted value ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    /// Tooltips, legends, overlay text.
    Display,
    /// CSV cells: empty for missing values, more precise percentages.
    Csv,
}

/// Metric magnitude suffixes, largest first.
const METRIC_RANGES: [(f64, &str); 6] = [
    (1e18, "E"),
    (1e15, "P"),
    (1e12, "T"),
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "K"),
];

/// Shortest decimal form, integers without a fractional part (`3`, `2.5`, `-0.1`).
pub fn js_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_owned()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity" } else { "-Infinity" }.to_owned()
    } else if v.fract() == 0.0 && v.abs() < 1e21 {
        // `{:.0}` would print "-0" for negative zero.
        format!("{:.0}", v + 0.0)
    } else {
        v.to_string()
    }
}

/// Round half up to `decimals` places.
pub fn round_number(v: f64, decimals: u32) -> f64 {
    let p = 10f64.powi(decimals as i32);
    (v * p + 0.5).floor() / p
}

/// `42%`, or `--%` when there is no usable value.
pub fn format_percentage(value: Option<f64>, decimals: u32) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{}%", js_number(round_number(v, decimals))),
        _ => "--%".to_owned(),
    }
}

/// `1 message`, `3 messages`.
pub fn pluralize(count: f64, noun: &str) -> String {
    let suffix = if count != 1.0 { "s" } else { "" };
    format!("{} {noun}{suffix}", js_number(count))
}

/// Compact magnitude form: `2651` -> `2.7K`, `1000000` -> `1M`. Ties round up.
pub fn suffix_number_magnitude(v: f64) -> String {
    for (divider, suffix) in METRIC_RANGES {
        if v >= divider {
            let scaled = format!("{:.1}", round_number(v / divider, 1)).replacen(".0", "", 1);
            return format!("{scaled}{suffix}");
        }
    }
    js_number(v)
}

/// Format one aggregated value according to what the metric measures.
///
/// - duration / handle time attributes are seconds, shown as minutes
/// - percentage stats are fractions, shown as percents
/// - everything else is rounded to two decimals
pub fn format_data_point_value(
    value: Option<f64>,
    metric: Option<&MetricConfig>,
    style: ValueStyle,
) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return match style {
            ValueStyle::Display => "--".to_owned(),
            ValueStyle::Csv => String::new(),
        };
    };

    let stats = metric.and_then(MetricConfig::stats_type);
    if let Some(ConversationAttribute::Duration | ConversationAttribute::HandleTime) =
        stats.and_then(StatsType::conversation_attribute)
    {
        return format!("{} min", js_number(round_number(v / 60.0, 1)));
    }

    if stats.is_some_and(StatsType::is_percentage) {
        let decimals = match style {
            ValueStyle::Display => 0,
            ValueStyle::Csv => 2,
        };
        return format_percentage(Some(v * 100.0), decimals);
    }

    js_number(round_number(v, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_number_drops_trailing_zero_fraction() {
        assert_eq!(js_number(3.0), "3");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(js_number(2.5), "2.5");
        assert_eq!(js_number(f64::NAN), "NaN");
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_number(2.346, 2), 2.35);
        assert_eq!(round_number(0.125, 2), 0.13);
        assert_eq!(round_number(-2.5, 0), -2.0);
        assert_eq!(round_number(7.0, 1), 7.0);
    }
}
