//! Decide which grouping axis supplies categories and which supplies series names.

use crate::models::{AnalyticsNumber, AttributeValue, EvaluationData};

/// Axis roles for one evaluation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLayout {
    /// First axis whose first value is a timestamp.
    pub time_axis: Option<usize>,
    pub category_axis: usize,
    /// Only present when points reference more than one axis.
    pub series_axis: Option<usize>,
    /// Number of axis indexes each point carries.
    pub dimension: usize,
}

impl AxisLayout {
    pub fn detect(evaluation: &EvaluationData) -> Self {
        let time_axis = evaluation
            .group_by_values_for_all_keys
            .iter()
            .position(|axis| axis.value_at(0).is_some_and(AttributeValue::is_timestamp));
        let dimension = evaluation
            .analytics_numbers
            .first()
            .map(|n| n.group_by_value_indexes.len())
            .unwrap_or(0);

        let category_axis = match time_axis {
            Some(t) => t,
            None if dimension > 1 => 1,
            None => 0,
        };
        let series_axis = (dimension > 1).then_some(if category_axis > 0 { 0 } else { 1 });

        Self {
            time_axis,
            category_axis,
            series_axis,
            dimension,
        }
    }
}

/// One data point with its raw category and series values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint<'a> {
    pub value: Option<f64>,
    pub category: Option<&'a AttributeValue>,
    pub series: Option<&'a AttributeValue>,
}

/// Project every analytics number onto the detected axes. Nothing is dropped here;
/// unresolvable references come back as `None`.
pub fn project(evaluation: &EvaluationData) -> Vec<ProjectedPoint<'_>> {
    let layout = AxisLayout::detect(evaluation);
    evaluation
        .analytics_numbers
        .iter()
        .map(|number| ProjectedPoint {
            value: number.value,
            category: lookup(evaluation, number, layout.category_axis),
            series: layout
                .series_axis
                .and_then(|axis| lookup(evaluation, number, axis)),
        })
        .collect()
}

fn lookup<'a>(
    evaluation: &'a EvaluationData,
    number: &AnalyticsNumber,
    axis: usize,
) -> Option<&'a AttributeValue> {
    let index = usize::try_from((*number.group_by_value_indexes.get(axis)?)?).ok()?;
    evaluation.group_by_values_for_all_keys.get(axis)?.value_at(index)
}
