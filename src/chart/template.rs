//! Baseline option tree and palette selection.
//!
//! [`baseline`] builds a fresh tree on every call; chart kinds patch their copy.

use super::types::{
    AxisLabels, AxisTitle, ChartKind, ChartSection, ChartSpec, FontFamily, Legend,
    LinePlotOptions, Marker, PlotOptions, TextBlock, TextStyle, Toggle, TooltipOptions, XAxis,
    YAxis,
};
use crate::models::{ChartConfig, EvaluationData};

/// Renderer default series palette, used when the metric declares no colors.
pub const DEFAULT_COLORS: [&str; 10] = [
    "#7cb5ec", "#434348", "#90ed7d", "#f7a35c", "#8085e9", "#f15c80", "#e4d354", "#2b908f",
    "#f45b5b", "#91e8e1",
];

/// Slice count at which the donut drops its borders and rounding.
pub const MANY_CATEGORIES_THRESHOLD: usize = 10;

const TEXT_COLOR: &str = "#333333";
const TOOLTIP_BACKGROUND: &str = "var(--cresta-colors-gray-9)";
const TOOLTIP_TEXT: &str = "var(--cresta-colors-reversed-primary)";

pub fn baseline() -> ChartSpec {
    ChartSpec {
        chart: ChartSection {
            kind: None,
            style: FontFamily {
                font_family: "Arial, sans-serif".to_owned(),
            },
            spacing_bottom: 5,
            margin_top: 120,
        },
        title: TextBlock {
            text: String::new(),
            align: "left".to_owned(),
            y: 20,
            style: TextStyle::sized("22px").weight("bold").color(TEXT_COLOR),
        },
        subtitle: TextBlock {
            text: String::new(),
            align: "left".to_owned(),
            y: 45,
            style: TextStyle::sized("14px").color("#555555"),
        },
        legend: Legend::baseline(),
        tooltip: TooltipOptions {
            shared: true,
            use_html: true,
            background_color: TOOLTIP_BACKGROUND.to_owned(),
            border_color: TOOLTIP_BACKGROUND.to_owned(),
            style: TextStyle::sized("12px").color(TOOLTIP_TEXT),
            padding: 8,
        },
        exporting: Toggle::OFF,
        credits: Toggle::OFF,
        x_axis: XAxis {
            labels: AxisLabels {
                style: TextStyle::sized("12px").color(TEXT_COLOR),
                format: None,
            },
            line_color: "#cccccc".to_owned(),
            tick_color: "#cccccc".to_owned(),
            categories: None,
            visible: None,
        },
        y_axis: YAxis {
            title: AxisTitle::default(),
            min: 0.0,
            grid_line_color: "#e6e6e6".to_owned(),
            labels: AxisLabels {
                style: TextStyle::sized("12px").color(TEXT_COLOR),
                format: Some("{value}".to_owned()),
            },
        },
        plot_options: PlotOptions {
            line: Some(LinePlotOptions {
                marker: Marker::disabled(),
                line_width: Some(2.5),
            }),
            ..PlotOptions::default()
        },
        colors: default_colors(),
        series: Vec::new(),
    }
}

pub fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| (*c).to_owned()).collect()
}

/// Palette for a chart.
///
/// Declared metric colors replace the default palette. A line or bar chart with at
/// most one grouping axis and no configured group-by is single-series and keeps only
/// the first declared color.
pub fn palette(chart: &ChartConfig, evaluation: &EvaluationData, kind: ChartKind) -> Vec<String> {
    let declared = chart.metric().map(|m| m.colors.as_slice()).unwrap_or_default();
    if declared.is_empty() {
        return default_colors();
    }
    let single_series = matches!(kind, ChartKind::Bar | ChartKind::Line)
        && evaluation.group_by_values_for_all_keys.len() <= 1
        && chart.data_config.group_by.is_empty();
    if single_series {
        declared[..1].to_vec()
    } else {
        declared.to_vec()
    }
}
