use chartopts::{ChartError, ChartRequest, ExportSettings, OutputFormat};
use serde_json::{Value, json};

fn request(display_type: &str) -> Value {
    json!({
        "chartConfig": {
            "displayName": "Sentiment",
            "dataConfig": { "metrics": [{
                "forSentiment": { "statsType": { "commonStatsType": "COMMON_STATS_TYPE_CONVERSATION_COUNT" } }
            }] },
            "renderingConfig": { "chartDisplayType": display_type }
        },
        "evaluationData": {
            "groupByValuesForAllKeys": [{ "groupByValues": [
                { "value": { "sentimentValue": { "momentName": "s/pos" } } },
                { "value": { "sentimentValue": { "momentName": "s/neg" } } }
            ] }],
            "analyticsNumbers": [
                { "value": "2651", "groupByValueIndexes": [0] },
                { "value": "42", "groupByValueIndexes": [1] }
            ]
        },
        "chartDataMaps": {
            "sentimentsByName": {
                "s/pos": { "displayName": "Positive" },
                "s/neg": { "displayName": "Negative" }
            }
        }
    })
}

fn parse(v: Value) -> ChartRequest {
    ChartRequest::from_json(&v.to_string()).unwrap()
}

#[test]
fn missing_evaluation_data_is_rejected() {
    let mut v = request("PIE_CHART");
    v.as_object_mut().unwrap().remove("evaluationData");
    let req = parse(v);

    let err = req.validate().unwrap_err();
    match &err {
        ChartError::MissingInput { fields } => assert_eq!(fields, &["evaluationData"]),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("evaluationData"));
    assert!(err.to_string().starts_with("Missing required parameters"));

    let payload_err = req.build_payload(&ExportSettings::default()).unwrap_err();
    assert!(matches!(payload_err, ChartError::MissingInput { .. }));
}

#[test]
fn null_and_absent_inputs_are_all_reported() {
    let req = parse(json!({ "chartConfig": null }));
    match req.validate().unwrap_err() {
        ChartError::MissingInput { fields } => {
            assert_eq!(fields, ["chartConfig", "evaluationData", "chartDataMaps"])
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = ChartRequest::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ChartError::Json(_)));
}

#[test]
fn payload_uses_defaults_and_request_size() {
    let settings = ExportSettings::default();
    assert_eq!(settings.scale, 2);

    let payload = parse(request("PIE_CHART")).build_payload(&settings).unwrap();
    assert_eq!(payload.export.format, OutputFormat::Png);
    assert_eq!((payload.export.width, payload.export.height), (1000, 600));
    assert_eq!(payload.export.scale, 2);
    assert!(payload.export.custom_code.is_some());

    let mut v = request("PIE_CHART");
    v["renderingConfig"] = json!({ "width": 800 });
    let payload = parse(v).build_payload(&settings).unwrap();
    assert_eq!((payload.export.width, payload.export.height), (800, 600));
}

#[test]
fn pdf_export_requests_documents() {
    let payload = parse(request("PDF_EXPORT"))
        .build_payload(&ExportSettings::default())
        .unwrap();
    assert_eq!(payload.export.format, OutputFormat::Pdf);
    assert!(payload.export.custom_code.is_none());
}

#[test]
fn payload_json_shape() {
    let pie = parse(request("PIE_CHART"))
        .build_payload(&ExportSettings::default())
        .unwrap();
    let v = serde_json::to_value(&pie).unwrap();
    assert_eq!(v["export"]["type"], "png");
    assert_eq!(v["export"]["options"]["series"][0]["data"][0]["name"], "Positive");
    assert!(v["export"]["customCode"].as_str().unwrap().contains("labelFormatter"));

    let line = parse(request("LINE_CHART"))
        .build_payload(&ExportSettings::default())
        .unwrap();
    let v = serde_json::to_value(&line).unwrap();
    assert!(v["export"].get("customCode").is_none());
    assert_eq!(v["export"]["options"]["xAxis"]["categories"], json!(["Positive", "Negative"]));
}
