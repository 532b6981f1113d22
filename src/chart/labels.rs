//! Subtitle text and metric fallback names.

use crate::models::{
    AttributeValue, ChartConfig, ConversationAttribute, DataMaps, EvaluationData, MetricConfig,
    MetricTarget, MomentRef, NamedEntity, StatsType, display_name_in,
};
use crate::resolve::resolve_label;
use std::collections::HashMap;

/// `"<categories>, <use case>, <date range>"`.
pub fn subtitle(chart: &ChartConfig, evaluation: &EvaluationData, maps: &DataMaps) -> String {
    format!(
        "{}, {}, {}",
        category_summary(evaluation, maps),
        usecase_name(chart, maps),
        date_range_label(chart)
    )
}

/// First resolvable value of the first grouping axis, with `+N` for the rest.
pub fn category_summary(evaluation: &EvaluationData, maps: &DataMaps) -> String {
    let labels: Vec<String> = evaluation
        .group_by_values_for_all_keys
        .first()
        .map(|axis| {
            axis.group_by_values
                .iter()
                .filter_map(|gv| gv.value.as_ref())
                .filter_map(|v| resolve_label(v, maps))
                .collect()
        })
        .unwrap_or_default();
    match labels.as_slice() {
        [] => "All Data".to_owned(),
        [only] => only.clone(),
        [first, rest @ ..] => format!("{first} +{}", rest.len()),
    }
}

/// Display name of the first use case named by a filter.
pub fn usecase_name(chart: &ChartConfig, maps: &DataMaps) -> String {
    chart
        .data_config
        .filters
        .iter()
        .find_map(|f| f.single_values().iter().find_map(AttributeValue::usecase_name))
        .map(|key| {
            display_name_in(&maps.usecases_by_name, key)
                .filter(|n| !n.is_empty())
                .unwrap_or(key)
                .to_owned()
        })
        .unwrap_or_else(|| "All Usecases".to_owned())
}

/// Relative range of the first filter carrying range values.
pub fn date_range_label(chart: &ChartConfig) -> String {
    let Some(filter) = chart
        .data_config
        .filters
        .iter()
        .find(|f| !f.range_values().is_empty())
    else {
        return "All Time".to_owned();
    };
    let days = filter
        .range_values()
        .first()
        .and_then(|r| r.from_value.as_ref())
        .and_then(|from| from.relative_days());
    match days {
        Some(7) => "Last 7 days".to_owned(),
        Some(30) => "Last 30 days".to_owned(),
        Some(d) if d != 0 => format!("Last {d} days"),
        _ => "Custom Range".to_owned(),
    }
}

/// Name for data that has no series dimension of its own.
pub fn metric_fallback_name(metric: Option<&MetricConfig>, maps: &DataMaps) -> String {
    let Some(metric) = metric else {
        return "Value".to_owned();
    };
    match &metric.target {
        MetricTarget::Subcategory(m) => join_or(
            m.subcategories.iter().filter_map(|s| {
                maps.categories_by_name
                    .get(&s.moment_name)
                    .and_then(|info| info.display_name.as_deref())
            }),
            "Occurrences",
        ),
        MetricTarget::Behavior(m) => join_or(
            m.behaviors
                .iter()
                .filter_map(|b| display_name_in(&maps.behaviors_by_name, &b.behavior_name)),
            "Behaviors",
        ),
        MetricTarget::Sentiment(m) => {
            join_or(moment_names(&m.sentiments, &maps.sentiments_by_name), "Sentiments")
        }
        MetricTarget::Emotion(m) => {
            join_or(moment_names(&m.emotions, &maps.emotions_by_name), "Emotions")
        }
        MetricTarget::Metadata(m) => {
            join_or(moment_names(&m.metadata_keys, &maps.metadata_keys_by_name), "Metadata")
        }
        MetricTarget::Conversation(m) => conversation_metric_name(&m.stats_type).to_owned(),
        MetricTarget::Unspecified => "Value".to_owned(),
    }
}

fn moment_names<'a>(
    moments: &'a [MomentRef],
    table: &'a HashMap<String, NamedEntity>,
) -> impl Iterator<Item = &'a str> {
    moments
        .iter()
        .filter_map(|m| display_name_in(table, &m.moment_name))
}

fn join_or<'a>(names: impl Iterator<Item = &'a str>, fallback: &str) -> String {
    let names: Vec<&str> = names.filter(|n| !n.is_empty()).collect();
    if names.is_empty() {
        fallback.to_owned()
    } else {
        names.join(", ")
    }
}

fn conversation_metric_name(stats: &StatsType) -> &'static str {
    match stats.conversation_attribute() {
        Some(ConversationAttribute::HandleTime) => "Handle Time (Cresta AHT)",
        Some(ConversationAttribute::Duration) => "Conversation Duration",
        Some(ConversationAttribute::MessageCount) => "Message Count",
        _ if stats.metadata_operator().is_some() => "Metadata Value",
        _ => "Conversations",
    }
}
