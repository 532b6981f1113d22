//! Tooltip and legend formatters.
//!
//! The renderer calls these per hovered point or legend item. They are kept out of
//! [`ChartSpec`](super::types::ChartSpec) so the spec stays plain data; an adapter
//! binds them right before handoff.

use crate::format::{ValueStyle, format_data_point_value, round_number, suffix_number_magnitude};
use crate::models::{ChartConfig, ChartDisplayType};

/// What the renderer knows about a hovered point. Labels are already resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoveredPoint<'p> {
    pub category: &'p str,
    pub series_name: Option<&'p str>,
    /// Slice name (pie charts).
    pub name: Option<&'p str>,
    pub y: Option<f64>,
    pub color: &'p str,
}

/// Tooltip formatter bound to one chart configuration.
#[derive(Debug, Clone, Copy)]
pub struct TooltipFormatter<'a> {
    chart: &'a ChartConfig,
}

impl<'a> TooltipFormatter<'a> {
    pub fn new(chart: &'a ChartConfig) -> Self {
        Self { chart }
    }

    pub fn format(&self, point: &HoveredPoint<'_>) -> String {
        let value = format!(
            "<strong>{}</strong>",
            format_data_point_value(point.y, self.chart.metric(), ValueStyle::Display)
        );
        let swatch = swatch(point.color);

        if self.chart.display_type() == Some(ChartDisplayType::PieChart) {
            let name = point.name.unwrap_or(point.category);
            return format!("<div>{swatch}{name}: {value}</div>");
        }
        match point.series_name {
            Some(series) if !series.is_empty() && series != point.category => format!(
                "<div>{}<br/>{swatch}{series}: {value}</div>",
                point.category
            ),
            _ => format!("<div>{}: {value}</div>", point.category),
        }
    }
}

/// Small colored square in front of a tooltip line.
pub fn swatch(color: &str) -> String {
    format!(
        "<span style=\"display: inline-block; width: 10px; height: 10px; border-radius: 30%; \
         background-color: {color}; margin-right: 5px; vertical-align: middle;\"></span>"
    )
}

/// Pie legend item formatter: swatch, name, magnitude-suffixed value and an optional
/// share-of-total badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendFormatter {
    /// Denominator for the badge; never zero.
    pub total: f64,
    pub show_percentage: bool,
}

impl LegendFormatter {
    pub fn percentage(&self, y: f64) -> String {
        format!("{:.2}%", round_number(y / self.total * 100.0, 2))
    }

    pub fn format(&self, name: &str, y: f64, color: &str) -> String {
        let badge = self.show_percentage.then(|| self.percentage(y));
        legend_markup(color, name, &suffix_number_magnitude(y), badge.as_deref())
    }
}

/// Legend item HTML. Also used to build the script template, with JS interpolations
/// passed in place of values.
pub(crate) fn legend_markup(color: &str, name: &str, value: &str, badge: Option<&str>) -> String {
    let badge = badge
        .map(|pct| {
            format!(
                "<span style='background-color: #E9ECEF; border-radius: 4px; padding: 1px 4px; \
                 font-size: 12px; line-height: 16px; color: #343A40; font-weight: 500; \
                 margin-left: 8px; flex-shrink: 0; display: inline-flex; align-items: center;'>\
                 {pct}</span>"
            )
        })
        .unwrap_or_default();
    format!(
        "<div class='legend-item' style='display: flex; align-items: center; white-space: nowrap; width: 100%;'>\
         <div style='width: 12px; height: 12px; flex-shrink: 0; border-radius: 2px; margin-right: 8px; background-color: {color};'></div>\
         <span style='font-size: 13px; overflow: hidden; text-overflow: ellipsis;'>{name}</span>\
         <span style='font-size: 13px; margin-left: 4px; flex-shrink: 0;'>: <strong>{value}</strong></span>\
         {badge}</div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_only_when_enabled() {
        let with = LegendFormatter {
            total: 200.0,
            show_percentage: true,
        };
        let without = LegendFormatter {
            show_percentage: false,
            ..with
        };
        let a = with.format("Positive", 50.0, "#7cb5ec");
        assert!(a.contains("25.00%"));
        assert!(a.contains("<strong>50</strong>"));
        assert!(!without.format("Positive", 50.0, "#7cb5ec").contains("#E9ECEF"));
    }

    #[test]
    fn legend_values_round_ties_up() {
        let legend = LegendFormatter {
            total: 10_000.0,
            show_percentage: true,
        };
        let item = legend.format("Neutral", 2250.0, "#90ed7d");
        assert!(item.contains("<strong>2.3K</strong>"));
        assert!(item.contains("22.50%"));
        assert_eq!(legend.percentage(1.0), "0.01%");
    }
}
