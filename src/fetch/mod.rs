// src/fetch/mod.rs
pub mod http;
pub mod types;

use crate::config::Endpoints;
use crate::fetch::types::{Alert, JsonSource, SolarSnapshot};
use anyhow::{Context, Result};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;
use serde_json::Value;

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("fetch_requests_total", "Product requests issued.");
        describe_counter!(
            "fetch_errors_total",
            "Fetch runs aborted by a transport, status or decode error."
        );
        describe_counter!("fetch_snapshots_total", "Complete snapshots assembled.");
        describe_counter!(
            "fetch_alerts_kept_total",
            "Alerts retained by the issue-year filter."
        );
        describe_histogram!("fetch_duration_ms", "Per-product request time in milliseconds.");
    });
}

/// Keep alerts whose `issue_datetime` contains `year`, in input order.
/// A missing timestamp reads as "na".
pub fn filter_alerts(alerts: Vec<Alert>, year: &str) -> Vec<Alert> {
    alerts
        .into_iter()
        .filter(|a| a.issued().contains(year))
        .collect()
}

async fn get_product<S: JsonSource + ?Sized>(source: &S, step: &str, url: &str) -> Result<Value> {
    let t0 = std::time::Instant::now();
    counter!("fetch_requests_total").increment(1);
    let out = source
        .get_json(url)
        .await
        .with_context(|| format!("{step} request"));
    histogram!("fetch_duration_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
    let value = out?;
    tracing::debug!(step, payload = %value, "product fetched");
    Ok(value)
}

/// Fetch plasma, alerts and wind in that order. The first failure aborts the
/// whole run.
pub async fn try_fetch_snapshot<S: JsonSource + ?Sized>(
    source: &S,
    endpoints: &Endpoints,
    alert_year: &str,
) -> Result<SolarSnapshot> {
    ensure_metrics_described();

    let plasma = get_product(source, "plasma", &endpoints.plasma).await?;

    let raw_alerts = get_product(source, "alerts", &endpoints.alerts).await?;
    let alerts: Vec<Alert> = serde_json::from_value(raw_alerts).context("alerts decode")?;
    let total = alerts.len();
    let alerts = filter_alerts(alerts, alert_year);
    for a in &alerts {
        tracing::info!("{}", a.headline());
    }
    counter!("fetch_alerts_kept_total").increment(alerts.len() as u64);
    tracing::debug!(total, kept = alerts.len(), year = alert_year, "alerts filtered");

    let wind = get_product(source, "wind", &endpoints.wind).await?;

    counter!("fetch_snapshots_total").increment(1);
    Ok(SolarSnapshot {
        plasma,
        alerts,
        wind,
        fetched_at: chrono::Utc::now(),
    })
}

/// Outermost catch: logs the failing step and yields `None` instead of a
/// partial snapshot.
pub async fn fetch_snapshot<S: JsonSource + ?Sized>(
    source: &S,
    endpoints: &Endpoints,
    alert_year: &str,
) -> Option<SolarSnapshot> {
    match try_fetch_snapshot(source, endpoints, alert_year).await {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::error!(
                provider = source.name(),
                error = %format!("{e:#}"),
                "error fetching solar data"
            );
            counter!("fetch_errors_total").increment(1);
            None
        }
    }
}
