use chartopts::chart::axis::{AxisLayout, project};
use chartopts::models::{AttributeValue, EvaluationData};
use serde_json::json;

fn strings(values: &[&str]) -> serde_json::Value {
    json!({
        "groupByValues": values
            .iter()
            .map(|v| json!({ "value": { "stringValue": v } }))
            .collect::<Vec<_>>()
    })
}

fn timestamps(values: &[&str]) -> serde_json::Value {
    json!({
        "groupByValues": values
            .iter()
            .map(|v| json!({ "value": { "timestamp": v } }))
            .collect::<Vec<_>>()
    })
}

fn eval(axes: Vec<serde_json::Value>, numbers: serde_json::Value) -> EvaluationData {
    serde_json::from_value(json!({
        "groupByValuesForAllKeys": axes,
        "analyticsNumbers": numbers
    }))
    .unwrap()
}

fn s(v: &str) -> AttributeValue {
    AttributeValue::String(v.into())
}

#[test]
fn single_axis_is_category_without_series() {
    let e = eval(
        vec![strings(&["Jan", "Feb"])],
        json!([{ "value": 1, "groupByValueIndexes": [0] }, { "value": 2, "groupByValueIndexes": [1] }]),
    );
    let layout = AxisLayout::detect(&e);
    assert_eq!(layout.category_axis, 0);
    assert_eq!(layout.series_axis, None);
    assert_eq!(layout.time_axis, None);
    assert_eq!(layout.dimension, 1);

    let points = project(&e);
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].category, Some(&s("Feb")));
    assert_eq!(points[1].series, None);
    assert_eq!(points[1].value, Some(2.0));
}

#[test]
fn two_axes_use_second_as_category() {
    let e = eval(
        vec![strings(&["A", "B"]), strings(&["x", "y"])],
        json!([{ "value": 1, "groupByValueIndexes": [1, 0] }]),
    );
    let layout = AxisLayout::detect(&e);
    assert_eq!(layout.category_axis, 1);
    assert_eq!(layout.series_axis, Some(0));

    let points = project(&e);
    assert_eq!(points[0].category, Some(&s("x")));
    assert_eq!(points[0].series, Some(&s("B")));
}

#[test]
fn time_axis_becomes_category_wherever_it_is() {
    let first = eval(
        vec![timestamps(&["2024-03-05T10:00:00Z"]), strings(&["A"])],
        json!([{ "value": 1, "groupByValueIndexes": [0, 0] }]),
    );
    let layout = AxisLayout::detect(&first);
    assert_eq!(layout.time_axis, Some(0));
    assert_eq!(layout.category_axis, 0);
    assert_eq!(layout.series_axis, Some(1));

    let second = eval(
        vec![strings(&["A"]), timestamps(&["2024-03-05T10:00:00Z"])],
        json!([{ "value": 1, "groupByValueIndexes": [0, 0] }]),
    );
    let layout = AxisLayout::detect(&second);
    assert_eq!(layout.time_axis, Some(1));
    assert_eq!(layout.category_axis, 1);
    assert_eq!(layout.series_axis, Some(0));
}

#[test]
fn dangling_indexes_project_to_none() {
    let e = eval(
        vec![strings(&["A"]), strings(&["x"])],
        json!([
            { "value": 1, "groupByValueIndexes": [0, 5] },
            { "value": 2, "groupByValueIndexes": [null, 0] },
            { "groupByValueIndexes": [0, 0] }
        ]),
    );
    let points = project(&e);
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].category, None);
    assert_eq!(points[0].series, Some(&s("A")));
    assert_eq!(points[1].series, None);
    assert_eq!(points[2].value, None);
}

#[test]
fn empty_evaluation_projects_nothing() {
    let e = EvaluationData::default();
    assert!(project(&e).is_empty());
    assert_eq!(AxisLayout::detect(&e).category_axis, 0);
}

#[test]
fn negative_indexes_drop_only_their_point() {
    let e = eval(
        vec![strings(&["Jan", "Feb"])],
        json!([
            { "value": 1, "groupByValueIndexes": [0] },
            { "value": 2, "groupByValueIndexes": [-1] },
            { "value": 3, "groupByValueIndexes": ["1"] },
            { "value": 4, "groupByValueIndexes": [0.5] }
        ]),
    );
    assert_eq!(e.analytics_numbers[1].group_by_value_indexes, vec![Some(-1)]);

    let points = project(&e);
    assert_eq!(points.len(), 4);
    assert_eq!(points[0].category, Some(&s("Jan")));
    assert_eq!(points[1].category, None);
    assert_eq!(points[2].category, Some(&s("Feb")));
    assert_eq!(points[3].category, None);

    let data = chartopts::chart::series::build_cartesian(
        &points,
        &chartopts::models::DataMaps::default(),
        "Value",
    );
    assert_eq!(data.categories, vec!["Jan", "Feb"]);
}
