//! Resolve tagged attribute values to display labels using [`DataMaps`].
//!
//! Resolution never fails hard: a missing lookup entry yields `None`, and callers
//! treat the affected data point as droppable.

use crate::format::js_number;
use crate::models::{
    AdherenceType, AttributeValue, BehaviorRef, DataMaps, MetadataAttribute, MetadataScalar,
    MomentRef, NumericValueRange, RangeBound, UserInfo, display_name_in,
};
use crate::time;

/// Sentinel the backend uses for "metadata key present without a value".
pub const NO_VALUE_METADATA: &str = "#NO_VALUE_METADATA#";
/// Label shown in place of [`NO_VALUE_METADATA`].
pub const NO_VALUE_METADATA_LABEL: &str = "(no value)";

const ACTIVE_TAXONOMY_STATE: &str = "STATE_ACTIVE";

/// Resolve to a label, or an empty string when the value is absent or unresolvable.
pub fn resolve(value: Option<&AttributeValue>, maps: &DataMaps) -> String {
    value
        .and_then(|v| resolve_label(v, maps))
        .unwrap_or_default()
}

/// Resolve to a non-empty label.
pub fn resolve_label(value: &AttributeValue, maps: &DataMaps) -> Option<String> {
    let label = match value {
        AttributeValue::Subcategory(moment) => subcategory_label(moment, maps),
        AttributeValue::Behavior(behavior) => behavior_label(behavior, maps),
        AttributeValue::Sentiment(moment) => {
            display_name_in(&maps.sentiments_by_name, &moment.moment_name).map(str::to_owned)
        }
        AttributeValue::Emotion(moment) => {
            display_name_in(&maps.emotions_by_name, &moment.moment_name).map(str::to_owned)
        }
        AttributeValue::Metadata(metadata) => metadata_label(metadata, maps),
        AttributeValue::UserName(name) => maps.users_by_name.get(name).map(display_user),
        AttributeValue::GroupName(name) => {
            display_name_in(&maps.groups_by_name, name).map(str::to_owned)
        }
        AttributeValue::Timestamp(ts) => time::format_month_day(ts),
        AttributeValue::UsecaseName(name) => {
            display_name_in(&maps.usecases_by_name, name).map(str::to_owned)
        }
        AttributeValue::String(s) => Some(s.clone()),
        AttributeValue::Int(i) => Some(i.to_string()),
        AttributeValue::Bool(b) => Some(b.to_string()),
        AttributeValue::Unrecognized(raw) => serde_json::to_string(raw).ok(),
    };
    let label = label.filter(|l| !l.is_empty());
    if label.is_none() {
        log::debug!("no display label for attribute value {value:?}");
    }
    label
}

fn subcategory_label(moment: &MomentRef, maps: &DataMaps) -> Option<String> {
    let info = maps.categories_by_name.get(&moment.moment_name)?;
    let name = info.display_name.as_deref()?;
    match info.taxonomy_state.as_deref() {
        Some(state) if state != ACTIVE_TAXONOMY_STATE => Some(format!("{name} (inactive)")),
        _ => Some(name.to_owned()),
    }
}

fn behavior_label(behavior: &BehaviorRef, maps: &DataMaps) -> Option<String> {
    let name = display_name_in(&maps.behaviors_by_name, &behavior.behavior_name)?;
    let suffix = behavior
        .adherence_types
        .first()
        .copied()
        .and_then(form_adherence_type)
        .and_then(adherence_chart_label);
    match suffix {
        Some(label) => Some(format!("{name} ({label})")),
        None => Some(name.to_owned()),
    }
}

/// API adherence code to the form-level code. The two enums share their codes; only
/// unknown codes have no form counterpart.
fn form_adherence_type(api: AdherenceType) -> Option<AdherenceType> {
    match api {
        AdherenceType::Unknown => None,
        known => Some(known),
    }
}

fn adherence_chart_label(form: AdherenceType) -> Option<&'static str> {
    match form {
        AdherenceType::DidDoX => Some("Done"),
        AdherenceType::DidNotDoX => Some("Not done"),
        AdherenceType::NoOpportunityToDoX => Some("No opportunity"),
        _ => None,
    }
}

fn metadata_label(metadata: &MetadataAttribute, maps: &DataMaps) -> Option<String> {
    if let Some(range) = metadata.numeric_value_ranges.first() {
        return Some(numeric_range_to_string(range));
    }

    let options = maps
        .metadata_values_by_name
        .get(&metadata.moment_name)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let describe = |matches: &dyn Fn(&MetadataScalar) -> bool| {
        options
            .iter()
            .filter(|o| o.value.as_ref().is_some_and(matches))
            .find_map(|o| o.description.clone())
            .filter(|d| !d.is_empty())
    };

    let first = metadata.values.first()?;
    if let Some(s) = &first.string_value {
        if let Some(description) = describe(&|v| v.string_value.as_deref() == Some(s.as_str())) {
            return Some(description);
        }
        return Some(if s == NO_VALUE_METADATA {
            NO_VALUE_METADATA_LABEL.to_owned()
        } else {
            s.clone()
        });
    }
    if let Some(b) = first.boolean_value {
        return describe(&|v| v.boolean_value == Some(b)).or_else(|| Some(b.to_string()));
    }
    None
}

/// Render a numeric interval, e.g. `[10 - 20)`.
pub fn numeric_range_to_string(range: &NumericValueRange) -> String {
    let exclusive = |b: Option<&RangeBound>| b.is_some_and(|b| b.is_exclusive);
    let text = |b: Option<&RangeBound>| b.and_then(|b| b.value).map(js_number).unwrap_or_default();
    let lower = range.lower_bound.as_ref();
    let upper = range.upper_bound.as_ref();
    format!(
        "{}{} - {}{}",
        if exclusive(lower) { '(' } else { '[' },
        text(lower),
        text(upper),
        if exclusive(upper) { ')' } else { ']' },
    )
}

/// Full name, then email, then username.
pub fn display_user(user: &UserInfo) -> String {
    [&user.full_name, &user.email, &user.username]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .cloned()
        .unwrap_or_else(|| "unknown".to_owned())
}
