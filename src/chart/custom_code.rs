//! Presentation script for donut charts.
//!
//! The script overrides the legend item formatter and writes the aggregated
//! statistic into the donut hole once the chart has loaded. Scalars are computed by
//! [`PieOverlay::compute`]; [`PieOverlay::render`] only fills the template.

use super::tooltip::{LegendFormatter, legend_markup};
use super::types::NamedPoint;
use crate::format::{ValueStyle, format_data_point_value, js_number};
use crate::models::{ChartConfig, EvaluationData, MetricConfig};
use crate::stats::{chart_aggregation, stats_label};

const SCRIPT_TEMPLATE: &str = r##"
Highcharts.setOptions({
  legend: {
    labelFormatter: function () {
      const total = __LEGEND_TOTAL__;
      const color = typeof this.color === 'string' ? this.color : JSON.stringify(this.color);
      const name = this.name;
      const percentage = (((this.y ?? 0) / total) * 100).toFixed(2) + '%';
      const ranges = [[1e18, 'E'], [1e15, 'P'], [1e12, 'T'], [1e9, 'G'], [1e6, 'M'], [1e3, 'K']];
      let formattedValue = String(this.y);
      for (const [divider, suffix] of ranges) {
        if (this.y >= divider) {
          formattedValue = (this.y / divider).toFixed(1).replace('.0', '') + suffix;
          break;
        }
      }
      return `__LEGEND_MARKUP__`;
    }
  },
  chart: {
    events: {
      load: function () {
        const x = this.plotLeft + this.plotWidth / 2;
        const y = this.plotTop + this.plotHeight / 2;
        this.centerText = this.renderer
          .text(__CENTER_TEXT__, x, y)
          .css({
            color: 'var(--cresta-colors-grausy-8)',
            fontSize: 'var(--cresta-fontSizes-xl)',
            fontWeight: 'bold',
            textAlign: 'center',
          })
          .attr({ align: 'center', class: 'highcharts-center-text' })
          .add();
      }
    }
  }
});
"##;

/// Scalars embedded in the donut script.
#[derive(Debug, Clone, PartialEq)]
pub struct PieOverlay {
    pub legend: LegendFormatter,
    /// Aggregated statistic over all data points.
    pub statistic: Option<f64>,
    pub center_value: String,
    pub center_label: String,
}

impl PieOverlay {
    /// Compute the overlay for a donut built from `slices`.
    ///
    /// The legend badge divides by the evaluation's ungrouped total, else by the sum
    /// of the slices, else by one. The badge itself is shown only for
    /// conversation-count metrics.
    pub fn compute(chart: &ChartConfig, evaluation: &EvaluationData, slices: &[NamedPoint]) -> Self {
        let total = evaluation
            .ungrouped_total
            .filter(|t| t.is_finite() && *t != 0.0)
            .unwrap_or_else(|| slices.iter().map(|s| s.y).sum());
        let total = if total.is_finite() && total != 0.0 { total } else { 1.0 };

        let statistic = chart_aggregation(
            chart,
            &evaluation.values(),
            evaluation.groups_as_filters_total,
        );
        Self {
            legend: LegendFormatter {
                total,
                show_percentage: chart.metric().is_some_and(MetricConfig::is_conversation_count),
            },
            statistic,
            center_value: format_data_point_value(statistic, chart.metric(), ValueStyle::Display),
            center_label: stats_label(chart, statistic),
        }
    }

    /// Text written into the donut hole.
    pub fn center_text(&self) -> String {
        format!("{} <br/> {} ", self.center_value, self.center_label)
    }

    pub fn render(&self) -> String {
        let markup = legend_markup(
            "${color}",
            "${name}",
            "${formattedValue}",
            self.legend.show_percentage.then_some("${percentage}"),
        );
        let center = serde_json::to_string(&self.center_text())
            .unwrap_or_else(|_| "\"\"".to_owned());
        SCRIPT_TEMPLATE
            .replace("__LEGEND_TOTAL__", &js_number(self.legend.total))
            .replace("__LEGEND_MARKUP__", &markup)
            .replace("__CENTER_TEXT__", &center)
    }
}
