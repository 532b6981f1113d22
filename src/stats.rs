use crate::format::pluralize;
use crate::models::{
    AggregationOperator, ChartConfig, CommonStatsType, ConversationAttribute, MetricConfig,
    MetricTarget,
};

/// Reduce `values` with `operator`.
///
/// Non-finite entries are ignored. An empty list yields `Some(0.0)`; `None` only when
/// a mean or extremum has no finite entry to work with. Unknown or absent operators
/// sum.
pub fn aggregate(operator: Option<AggregationOperator>, values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return Some(0.0);
    }
    let finite = values.iter().copied().filter(|v| v.is_finite());
    match operator {
        Some(AggregationOperator::Avg) => {
            let (sum, count) = finite.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
            (count > 0).then(|| sum / count as f64)
        }
        Some(AggregationOperator::Max) => finite.reduce(f64::max),
        Some(AggregationOperator::Min) => finite.reduce(f64::min),
        _ => Some(finite.sum()),
    }
}

/// The chart-level statistic shown in the pie overlay.
///
/// Conversation-count metrics (and percentages of conversations) use the grouped filter
/// total when the evaluation supplies one, regardless of `values`.
pub fn chart_aggregation(
    chart: &ChartConfig,
    values: &[f64],
    groups_as_filters_total: Option<f64>,
) -> Option<f64> {
    let metric = chart.metric();
    if let Some(total) = groups_as_filters_total {
        if metric.is_some_and(MetricConfig::is_conversation_count_like) {
            return Some(total);
        }
    }
    let operator = metric
        .and_then(MetricConfig::stats_type)
        .and_then(|s| s.aggregation_operator());
    aggregate(operator, values)
}

/// Counted-noun or qualifier shown under the overlay statistic: `12 occurrences`,
/// `average`, `maximum`, `3 messages`, `42 conversations`, or nothing for
/// self-describing durations.
pub fn stats_label(chart: &ChartConfig, stats: Option<f64>) -> String {
    let count = |noun: &str| match stats {
        Some(n) => pluralize(n, noun),
        None => format!("{noun}s"),
    };
    let Some(metric) = chart.metric() else {
        return count("conversation");
    };
    let stats_type = metric.stats_type().cloned().unwrap_or_default();

    if is_occurrence_count(metric) {
        return count("occurrence");
    }
    if stats_type.conversation_attribute_operator() == Some(AggregationOperator::Avg)
        || stats_type.per_conversation_operator() == Some(AggregationOperator::Avg)
    {
        return "average".to_owned();
    }
    match stats_type.metadata_operator() {
        Some(AggregationOperator::Avg) => return "average".to_owned(),
        Some(AggregationOperator::Max) => return "maximum".to_owned(),
        Some(AggregationOperator::Min) => return "minimum".to_owned(),
        Some(AggregationOperator::Sum) => return "total".to_owned(),
        _ => {}
    }
    match stats_type.conversation_attribute() {
        Some(ConversationAttribute::Duration | ConversationAttribute::HandleTime) => String::new(),
        Some(ConversationAttribute::MessageCount) => count("message"),
        _ => count("conversation"),
    }
}

/// Occurrence-based metrics: every subcategory or emotion metric, plus any metric with
/// an explicit occurrence count.
fn is_occurrence_count(metric: &MetricConfig) -> bool {
    matches!(
        metric.target,
        MetricTarget::Subcategory(_) | MetricTarget::Emotion(_)
    ) || metric.stats_type().and_then(|s| s.common_stats_type)
        == Some(CommonStatsType::OccurrenceCount)
}
