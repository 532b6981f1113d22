//! Chart option synthesis: evaluation results in, renderer-ready option tree out.
//!
//! - [`axis`] picks the category and series axes
//! - [`series`] groups points into series or pie slices
//! - [`labels`] composes subtitle text and fallback names
//! - [`template`] holds the baseline option tree and palette rules
//! - [`custom_code`] renders the donut legend/overlay script
//!
//! [`synthesize`] ties them together, dispatching on [`ChartKind`].

pub mod axis;
pub mod custom_code;
pub mod labels;
pub mod series;
pub mod template;
pub mod tooltip;
pub mod types;

pub use custom_code::PieOverlay;
pub use tooltip::{HoveredPoint, LegendFormatter, TooltipFormatter};
pub use types::{ChartKind, ChartSpec, NamedPoint, Series, SeriesData, SeriesType};

use crate::models::{ChartConfig, DataMaps, EvaluationData};
use axis::ProjectedPoint;
use types::{
    AxisTitle, CartesianSeries, ColumnPlotOptions, Legend, LinePlotOptions, Marker, PieSeries,
    PiePlotOptions, SeriesPlotOptions, Toggle,
};

const DONUT_INNER_SIZE: &str = "75%";

/// Result of one synthesis call.
#[derive(Debug, Clone)]
pub struct ChartOptions<'a> {
    pub spec: ChartSpec,
    /// Donut legend/overlay script; pie charts only.
    pub custom_code: Option<String>,
    pub pie_overlay: Option<PieOverlay>,
    pub tooltip: TooltipFormatter<'a>,
}

/// Build the option tree for `chart` from its evaluation result.
///
/// Pure: identical inputs give identical output. Data points whose labels cannot be
/// resolved are dropped, never reported as errors.
pub fn synthesize<'a>(
    chart: &'a ChartConfig,
    evaluation: &EvaluationData,
    maps: &DataMaps,
) -> ChartOptions<'a> {
    let kind = ChartKind::from_display_type(chart.display_type());
    let mut spec = template::baseline();
    spec.title.text = chart
        .display_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or("Chart")
        .to_owned();
    spec.subtitle.text = labels::subtitle(chart, evaluation, maps);
    spec.colors = template::palette(chart, evaluation, kind);

    let fallback_name = labels::metric_fallback_name(chart.metric(), maps);
    let points = axis::project(evaluation);

    let mut pie_overlay = None;
    match kind {
        ChartKind::Bar | ChartKind::Line => {
            apply_cartesian(&mut spec, kind, &points, maps, &fallback_name)
        }
        ChartKind::Pie => {
            let overlay = apply_pie(&mut spec, chart, evaluation, &points, maps, &fallback_name);
            pie_overlay = Some(overlay);
        }
        ChartKind::Fallback => {
            log::debug!(
                "display type {:?} has no dedicated layout, using line",
                chart.display_type()
            );
            apply_fallback(&mut spec, &points, maps, &fallback_name);
        }
    }
    finish(&mut spec);

    ChartOptions {
        spec,
        custom_code: pie_overlay.as_ref().map(PieOverlay::render),
        pie_overlay,
        tooltip: TooltipFormatter::new(chart),
    }
}

fn apply_cartesian(
    spec: &mut ChartSpec,
    kind: ChartKind,
    points: &[ProjectedPoint<'_>],
    maps: &DataMaps,
    fallback_name: &str,
) {
    let data = series::build_cartesian(points, maps, fallback_name);
    let series_type = if kind == ChartKind::Bar {
        SeriesType::Column
    } else {
        SeriesType::Line
    };

    spec.chart.kind = Some(series_type);
    spec.x_axis.categories = Some(data.categories);
    spec.x_axis.visible = Some(true);
    spec.y_axis.title = AxisTitle::default();
    spec.plot_options.line = Some(LinePlotOptions {
        marker: Marker::disabled(),
        line_width: None,
    });
    if series_type == SeriesType::Column {
        spec.plot_options.column = Some(ColumnPlotOptions::default());
    }
    spec.legend = Legend::top_center();

    let many = data.series.len() > 1;
    spec.series = data
        .series
        .into_iter()
        .filter(|s| !many || !s.name.is_empty())
        .map(|s| {
            Series::Cartesian(CartesianSeries {
                kind: Some(series_type),
                show_in_legend: Some(!s.name.is_empty()),
                legend_symbol: Some("rectangle".to_owned()),
                marker: Some(Marker::for_point_count(s.data.len())),
                name: s.name,
                data: s.data,
            })
        })
        .collect();
}

fn apply_pie(
    spec: &mut ChartSpec,
    chart: &ChartConfig,
    evaluation: &EvaluationData,
    points: &[ProjectedPoint<'_>],
    maps: &DataMaps,
    fallback_name: &str,
) -> PieOverlay {
    let slices = series::build_pie(points, maps, fallback_name);
    let non_zero = slices.iter().filter(|s| s.y > 0.0).count();
    let many = non_zero >= template::MANY_CATEGORIES_THRESHOLD;

    spec.chart.kind = Some(SeriesType::Pie);
    spec.plot_options.pie = Some(PiePlotOptions {
        allow_point_select: false,
        inner_size: DONUT_INNER_SIZE.to_owned(),
        border_width: if non_zero == 1 || many { 0 } else { 1 },
        border_radius: if many { 0 } else { 5 },
        data_labels: Toggle::OFF,
        show_in_legend: true,
    });

    let name = [chart.display_name.as_deref().unwrap_or_default(), fallback_name]
        .into_iter()
        .find(|n| !n.is_empty())
        .unwrap_or("Series")
        .to_owned();
    let overlay = PieOverlay::compute(chart, evaluation, &slices);
    spec.series = vec![Series::Pie(PieSeries {
        kind: SeriesType::Pie,
        name,
        inner_size: DONUT_INNER_SIZE.to_owned(),
        data: slices,
    })];
    spec.legend = Legend::right_vertical();
    overlay
}

fn apply_fallback(
    spec: &mut ChartSpec,
    points: &[ProjectedPoint<'_>],
    maps: &DataMaps,
    fallback_name: &str,
) {
    let data = series::build_cartesian(points, maps, fallback_name);
    spec.chart.kind = Some(SeriesType::Line);
    spec.x_axis.categories = Some(data.categories);
    spec.series = data
        .series
        .into_iter()
        .map(|s| {
            Series::Cartesian(CartesianSeries {
                kind: None,
                name: s.name,
                data: s.data,
                legend_symbol: None,
                show_in_legend: None,
                marker: None,
            })
        })
        .collect();
}

/// Static-frame series options, then drop plot options other chart types use.
fn finish(spec: &mut ChartSpec) {
    spec.plot_options.series = Some(SeriesPlotOptions::static_frame());
    if spec.chart.kind != Some(SeriesType::Line) {
        spec.plot_options.line = None;
    }
    if spec.chart.kind != Some(SeriesType::Column) {
        spec.plot_options.column = None;
    }
}
