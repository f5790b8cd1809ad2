// tests/http_source.rs
//
// Exercises the real reqwest-backed source against a loopback axum server.

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use space_weather_report::config::Endpoints;
use space_weather_report::fetch::fetch_snapshot;
use space_weather_report::fetch::http::HttpSource;
use space_weather_report::fetch::types::JsonSource;

fn fixture(name: &str) -> Value {
    let raw = std::fs::read_to_string(format!("tests/fixtures/{name}"))
        .unwrap_or_else(|_| panic!("missing tests/fixtures/{name}"));
    serde_json::from_str(&raw).expect("fixture is JSON")
}

/// Serve the fixtures plus a few broken routes; returns the base URL.
async fn spawn_server() -> String {
    let plasma = fixture("plasma.json");
    let alerts = fixture("alerts.json");
    let wind = fixture("wind.json");

    let app = Router::new()
        .route("/plasma", get(move || async move { Json(plasma) }))
        .route("/alerts", get(move || async move { Json(alerts) }))
        .route("/wind", get(move || async move { Json(wind) }))
        .route(
            "/down",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        )
        .route("/garbage", get(|| async { "<html>not json</html>" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn endpoints(base: &str, plasma: &str, alerts: &str, wind: &str) -> Endpoints {
    Endpoints {
        plasma: format!("{base}/{plasma}"),
        alerts: format!("{base}/{alerts}"),
        wind: format!("{base}/{wind}"),
    }
}

#[tokio::test]
async fn get_json_decodes_body() {
    let base = spawn_server().await;
    let src = HttpSource::new().with_timeout(5);
    let v = src.get_json(&format!("{base}/wind")).await.expect("wind ok");
    assert_eq!(v, json!({"proton_speed": 412, "time_tag": "2024-05-10T15:01:00"}));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let base = spawn_server().await;
    let src = HttpSource::new();
    let err = src
        .get_json(&format!("{base}/down"))
        .await
        .expect_err("503 must fail");
    assert!(format!("{err:#}").contains("503"));
}

#[tokio::test]
async fn full_snapshot_over_http() {
    let base = spawn_server().await;
    let src = HttpSource::new().with_timeout(5);
    let snap = fetch_snapshot(&src, &endpoints(&base, "plasma", "alerts", "wind"), "2024")
        .await
        .expect("snapshot");
    assert_eq!(snap.plasma, fixture("plasma.json"));
    assert_eq!(snap.alerts.len(), 2);
    assert_eq!(snap.wind["proton_speed"], 412);
}

#[tokio::test]
async fn any_broken_endpoint_yields_no_snapshot() {
    let base = spawn_server().await;
    let src = HttpSource::new().with_timeout(5);
    let cases = [
        ("down", "alerts", "wind"),
        ("plasma", "garbage", "wind"),
        ("plasma", "alerts", "down"),
        ("plasma", "alerts", "garbage"),
        ("plasma", "alerts", "missing"),
    ];
    for (p, a, w) in cases {
        let snap = fetch_snapshot(&src, &endpoints(&base, p, a, w), "2024").await;
        assert!(snap.is_none(), "expected no snapshot for ({p}, {a}, {w})");
    }
}
