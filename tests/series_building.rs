use chartopts::chart::axis::ProjectedPoint;
use chartopts::chart::series::{build_cartesian, build_pie};
use chartopts::chart::{NamedPoint, SeriesData};
use chartopts::models::{AttributeValue, DataMaps, MomentRef};

fn s(v: &str) -> AttributeValue {
    AttributeValue::String(v.into())
}

fn pt<'a>(
    value: Option<f64>,
    category: Option<&'a AttributeValue>,
    series: Option<&'a AttributeValue>,
) -> ProjectedPoint<'a> {
    ProjectedPoint {
        value,
        category,
        series,
    }
}

#[test]
fn single_series_collapses_onto_categories() {
    let (jan, feb, mar) = (s("Jan"), s("Feb"), s("Mar"));
    let points = [
        pt(Some(1.0), Some(&jan), None),
        pt(Some(3.0), Some(&feb), None),
        pt(Some(2.0), Some(&mar), None),
        pt(Some(9.0), Some(&jan), None),
    ];
    let data = build_cartesian(&points, &DataMaps::default(), "Value");
    assert_eq!(data.categories, vec!["Jan", "Feb", "Mar"]);
    assert_eq!(data.series.len(), 1);
    assert_eq!(data.series[0].name, "Jan, Feb, Mar");
    assert_eq!(
        data.series[0].data,
        SeriesData::Values(vec![Some(1.0), Some(3.0), Some(2.0)])
    );
}

#[test]
fn multiple_series_keep_first_seen_order() {
    let (a, b, x, y) = (s("A"), s("B"), s("x"), s("y"));
    let points = [
        pt(Some(1.0), Some(&x), Some(&a)),
        pt(Some(2.0), Some(&x), Some(&b)),
        pt(Some(3.0), Some(&y), Some(&a)),
    ];
    let data = build_cartesian(&points, &DataMaps::default(), "Value");
    assert_eq!(data.categories, vec!["x", "y"]);
    let names: Vec<&str> = data.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
    assert_eq!(
        data.series[0].data,
        SeriesData::Points(vec![NamedPoint::new("x", 1.0), NamedPoint::new("y", 3.0)])
    );
    assert_eq!(data.series[1].data, SeriesData::Points(vec![NamedPoint::new("x", 2.0)]));
}

#[test]
fn incomplete_points_are_dropped() {
    let x = s("x");
    let a = s("A");
    let unknown = AttributeValue::Sentiment(MomentRef::new("s/missing"));
    let points = [
        pt(None, Some(&x), Some(&a)),
        pt(Some(1.0), None, Some(&a)),
        pt(Some(f64::NAN), Some(&x), Some(&a)),
        pt(Some(4.0), Some(&x), Some(&unknown)),
        pt(Some(5.0), Some(&x), Some(&a)),
    ];
    let data = build_cartesian(&points, &DataMaps::default(), "Value");
    assert_eq!(data.categories, vec!["x"]);
    assert_eq!(data.series.len(), 1);
    assert_eq!(data.series[0].data, SeriesData::Values(vec![Some(5.0)]));
}

#[test]
fn categories_never_repeat() {
    let labels: Vec<AttributeValue> = ["b", "a", "b", "c", "a"].iter().map(|v| s(v)).collect();
    let series = [s("one"), s("two")];
    let points: Vec<ProjectedPoint<'_>> = labels
        .iter()
        .enumerate()
        .map(|(i, c)| pt(Some(i as f64), Some(c), Some(&series[i % 2])))
        .collect();
    let data = build_cartesian(&points, &DataMaps::default(), "Value");
    assert_eq!(data.categories, vec!["b", "a", "c"]);
}

#[test]
fn no_points_no_series() {
    let data = build_cartesian(&[], &DataMaps::default(), "Value");
    assert!(data.categories.is_empty());
    assert!(data.series.is_empty());
}

#[test]
fn pie_slices_are_summed_and_sorted_stably() {
    let (a, b, c) = (s("A"), s("B"), s("C"));
    let points = [
        pt(Some(2.0), Some(&a), None),
        pt(Some(7.0), Some(&b), None),
        pt(Some(3.0), Some(&a), None),
        pt(Some(5.0), Some(&c), None),
    ];
    let slices = build_pie(&points, &DataMaps::default(), "Value");
    assert_eq!(
        slices,
        vec![
            NamedPoint::new("B", 7.0),
            NamedPoint::new("A", 5.0),
            NamedPoint::new("C", 5.0),
        ]
    );
    assert!(slices.windows(2).all(|w| w[0].y >= w[1].y));
}

#[test]
fn pie_labels_prefer_series_then_category_then_fallback() {
    let (cat, ser) = (s("category"), s("series"));
    let points = [
        pt(Some(1.0), Some(&cat), Some(&ser)),
        pt(Some(2.0), Some(&cat), None),
        pt(Some(4.0), None, None),
    ];
    let slices = build_pie(&points, &DataMaps::default(), "Conversations");
    assert_eq!(
        slices,
        vec![
            NamedPoint::new("Conversations", 4.0),
            NamedPoint::new("category", 2.0),
            NamedPoint::new("series", 1.0),
        ]
    );
}

#[test]
fn unresolvable_pie_labels_fall_through() {
    let cat = s("Cat");
    let unknown_sentiment = AttributeValue::Sentiment(MomentRef::new("unknown/sentiment"));
    let unknown_emotion = AttributeValue::Emotion(MomentRef::new("unknown/emotion"));
    let points = [
        pt(Some(3.0), Some(&cat), Some(&unknown_sentiment)),
        pt(Some(5.0), Some(&unknown_emotion), None),
        pt(Some(2.0), Some(&unknown_emotion), Some(&unknown_sentiment)),
    ];
    let slices = build_pie(&points, &DataMaps::default(), "Conversations");
    assert_eq!(
        slices,
        vec![
            NamedPoint::new("Conversations", 7.0),
            NamedPoint::new("Cat", 3.0),
        ]
    );
}
