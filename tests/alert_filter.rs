// tests/alert_filter.rs
use serde_json::json;
use space_weather_report::fetch::filter_alerts;
use space_weather_report::fetch::types::Alert;

fn parse(v: serde_json::Value) -> Vec<Alert> {
    serde_json::from_value(v).expect("alert list")
}

#[test]
fn retains_only_the_2024_record() {
    let input = parse(json!([
        {"issue_datetime": "2023-05-01", "message": "a"},
        {"issue_datetime": "2024-06-01T00:00Z", "message": "b"}
    ]));
    let out = filter_alerts(input, "2024");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].issue_datetime.as_deref(), Some("2024-06-01T00:00Z"));
    assert_eq!(out[0].message_text(), "b");
}

#[test]
fn fixture_order_preserved_and_missing_timestamp_dropped() {
    let raw = std::fs::read_to_string("tests/fixtures/alerts.json").expect("missing tests/fixtures/alerts.json");
    let input: Vec<Alert> = serde_json::from_str(&raw).expect("fixture parses");
    assert_eq!(input.len(), 4);

    let out = filter_alerts(input, "2024");
    let ids: Vec<_> = out
        .iter()
        .map(|a| a.extra["product_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["EF3A", "K05A"]);
}

#[test]
fn substring_match_anywhere_in_timestamp() {
    let input = parse(json!([
        {"issue_datetime": "issued 12 May 2024", "message": "x"},
        {"issue_datetime": "20240", "message": "y"},
        {"issue_datetime": "2025-01-01", "message": "z"}
    ]));
    assert_eq!(filter_alerts(input, "2024").len(), 2);
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(filter_alerts(Vec::new(), "2024").is_empty());
}
