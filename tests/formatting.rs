use chartopts::format::{
    ValueStyle, format_data_point_value, format_percentage, pluralize, suffix_number_magnitude,
};
use chartopts::models::MetricConfig;
use serde_json::json;

fn metric(v: serde_json::Value) -> MetricConfig {
    serde_json::from_value(v).unwrap()
}

#[test]
fn percentages_and_plurals() {
    assert_eq!(format_percentage(Some(42.4), 0), "42%");
    assert_eq!(format_percentage(Some(42.5), 0), "43%");
    assert_eq!(format_percentage(None, 0), "--%");
    assert_eq!(format_percentage(Some(f64::NAN), 2), "--%");

    assert_eq!(pluralize(1.0, "message"), "1 message");
    assert_eq!(pluralize(3.0, "message"), "3 messages");
    assert_eq!(pluralize(0.0, "conversation"), "0 conversations");
}

#[test]
fn magnitude_suffixes() {
    assert_eq!(suffix_number_magnitude(999.0), "999");
    assert_eq!(suffix_number_magnitude(1500.0), "1.5K");
    assert_eq!(suffix_number_magnitude(2651.0), "2.7K");
    assert_eq!(suffix_number_magnitude(1_000_000.0), "1M");
    assert_eq!(suffix_number_magnitude(3e12), "3T");
    assert_eq!(suffix_number_magnitude(1250.0), "1.3K");
    assert_eq!(suffix_number_magnitude(2250.0), "2.3K");
    assert_eq!(suffix_number_magnitude(2_450_000.0), "2.5M");
}

#[test]
fn durations_show_minutes() {
    let m = metric(json!({
        "forConversation": { "statsType": { "aggregationOnConversationAttribute": {
            "aggregationOperator": "AGGREGATION_OPERATOR_AVG",
            "aggregationAttribute": "CONVERSATION_HANDLE_TIME"
        } } }
    }));
    assert_eq!(format_data_point_value(Some(150.0), Some(&m), ValueStyle::Display), "2.5 min");
    assert_eq!(format_data_point_value(Some(60.0), Some(&m), ValueStyle::Csv), "1 min");
}

#[test]
fn percentage_stats_scale_by_hundred() {
    let m = metric(json!({
        "forSubcategory": { "statsType": { "commonStatsType": "COMMON_STATS_TYPE_PERCENTAGE" } }
    }));
    assert_eq!(format_data_point_value(Some(0.5), Some(&m), ValueStyle::Display), "50%");
    assert_eq!(format_data_point_value(Some(0.25), Some(&m), ValueStyle::Csv), "25%");
}

#[test]
fn plain_values_round_and_missing_values_degrade() {
    assert_eq!(format_data_point_value(Some(3.14159), None, ValueStyle::Display), "3.14");
    assert_eq!(format_data_point_value(Some(2651.0), None, ValueStyle::Display), "2651");
    assert_eq!(format_data_point_value(None, None, ValueStyle::Display), "--");
    assert_eq!(format_data_point_value(Some(f64::INFINITY), None, ValueStyle::Display), "--");
    assert_eq!(format_data_point_value(None, None, ValueStyle::Csv), "");
}
