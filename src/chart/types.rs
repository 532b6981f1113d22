//! Serializable chart specification handed to the rendering engine.
//!
//! Field names follow the renderer's option schema (camelCase). Optional sections are
//! skipped when unset so each chart kind only carries the keys it uses.

use crate::models::ChartDisplayType;
use serde::Serialize;

/// Layout the assembler dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    /// Line-shaped data without the line styling pass.
    Fallback,
}

impl ChartKind {
    pub fn from_display_type(display_type: Option<ChartDisplayType>) -> Self {
        match display_type {
            Some(ChartDisplayType::BarChart) => ChartKind::Bar,
            Some(ChartDisplayType::LineChart) => ChartKind::Line,
            Some(ChartDisplayType::PieChart) => ChartKind::Pie,
            _ => ChartKind::Fallback,
        }
    }
}

/// Renderer series type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
    Column,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub chart: ChartSection,
    pub title: TextBlock,
    pub subtitle: TextBlock,
    pub legend: Legend,
    pub tooltip: TooltipOptions,
    pub exporting: Toggle,
    pub credits: Toggle,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    #[serde(skip_serializing_if = "PlotOptions::is_empty")]
    pub plot_options: PlotOptions,
    pub colors: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn categories(&self) -> &[String] {
        self.x_axis.categories.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSection {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SeriesType>,
    pub style: FontFamily,
    pub spacing_bottom: u32,
    pub margin_top: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFamily {
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub text: String,
    pub align: String,
    pub y: i32,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
}

impl TextStyle {
    pub fn sized(font_size: &str) -> Self {
        Self {
            font_size: Some(font_size.to_owned()),
            ..Self::default()
        }
    }

    pub fn weight(mut self, weight: &str) -> Self {
        self.font_weight = Some(weight.to_owned());
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_owned());
        self
    }

    pub fn line_height(mut self, height: &str) -> Self {
        self.line_height = Some(height.to_owned());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub enabled: bool,
    pub align: String,
    pub vertical_align: String,
    pub layout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_width: Option<u32>,
}

impl Legend {
    fn placed(align: &str, vertical_align: &str, layout: &str) -> Self {
        Self {
            enabled: true,
            align: align.to_owned(),
            vertical_align: vertical_align.to_owned(),
            layout: layout.to_owned(),
            y: None,
            padding: None,
            item_style: None,
            symbol_radius: None,
            symbol_height: None,
            symbol_width: None,
        }
    }

    /// Horizontal band centered above the plot (line and bar charts).
    pub fn top_center() -> Self {
        Self {
            symbol_radius: Some(3),
            ..Self::placed("center", "top", "horizontal")
        }
    }

    /// Vertical list right of the donut.
    pub fn right_vertical() -> Self {
        Self {
            item_style: Some(
                TextStyle::sized("13px")
                    .weight("normal")
                    .line_height("22px"),
            ),
            ..Self::placed("right", "middle", "vertical")
        }
    }

    /// Baseline legend before any chart kind adjusts it.
    pub fn baseline() -> Self {
        Self {
            y: Some(70),
            padding: Some(5),
            item_style: Some(TextStyle::sized("12px").weight("normal").color("#333333")),
            symbol_radius: Some(3),
            symbol_height: Some(10),
            symbol_width: Some(10),
            ..Self::placed("left", "top", "horizontal")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub shared: bool,
    #[serde(rename = "useHTML")]
    pub use_html: bool,
    pub background_color: String,
    pub border_color: String,
    pub style: TextStyle,
    pub padding: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

impl Toggle {
    pub const ON: Toggle = Toggle { enabled: true };
    pub const OFF: Toggle = Toggle { enabled: false };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabels {
    pub style: TextStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    pub labels: AxisLabels,
    pub line_color: String,
    pub tick_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub title: AxisTitle,
    pub min: f64,
    pub grid_line_color: String,
    pub labels: AxisLabels,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LinePlotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnPlotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pie: Option<PiePlotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<SeriesPlotOptions>,
}

impl PlotOptions {
    pub fn is_empty(&self) -> bool {
        self.line.is_none() && self.column.is_none() && self.pie.is_none() && self.series.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePlotOptions {
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnPlotOptions {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PiePlotOptions {
    pub allow_point_select: bool,
    pub inner_size: String,
    pub border_width: u32,
    pub border_radius: u32,
    pub data_labels: Toggle,
    pub show_in_legend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPlotOptions {
    pub animation: bool,
    pub enable_mouse_tracking: bool,
    pub states: SeriesStates,
}

impl SeriesPlotOptions {
    /// One static frame: no animation, no hover, no mouse tracking.
    pub fn static_frame() -> Self {
        Self {
            animation: false,
            enable_mouse_tracking: false,
            states: SeriesStates { hover: Toggle::OFF },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesStates {
    pub hover: Toggle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl Marker {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            radius: None,
            symbol: None,
        }
    }

    /// Small circle, shown only when the series has a single point.
    pub fn for_point_count(points: usize) -> Self {
        Self {
            enabled: points == 1,
            radius: Some(3),
            symbol: Some("circle".to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Cartesian(CartesianSeries),
    Pie(PieSeries),
}

impl Series {
    pub fn name(&self) -> &str {
        match self {
            Series::Cartesian(s) => &s.name,
            Series::Pie(s) => &s.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartesianSeries {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SeriesType>,
    pub name: String,
    pub data: SeriesData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_in_legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

/// Series payload: named points, or plain values aligned with the categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesData {
    Points(Vec<NamedPoint>),
    Values(Vec<Option<f64>>),
}

impl SeriesData {
    pub fn len(&self) -> usize {
        match self {
            SeriesData::Points(p) => p.len(),
            SeriesData::Values(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A point with its own label; also a pie slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedPoint {
    pub name: String,
    pub y: f64,
}

impl NamedPoint {
    pub fn new(name: impl Into<String>, y: f64) -> Self {
        Self { name: name.into(), y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSeries {
    #[serde(rename = "type")]
    pub kind: SeriesType,
    pub name: String,
    pub inner_size: String,
    pub data: Vec<NamedPoint>,
}
