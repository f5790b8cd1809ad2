//! Space weather report — binary entrypoint.
//! Fetches the SWPC products once, prints the retained alerts and the raw
//! aggregate, and optionally renders a report record from `report_path`.

use std::io::{self, Write};

use space_weather_report::config::AppConfig;
use space_weather_report::fetch::{fetch_snapshot, http::HttpSource};
use space_weather_report::report::{self, load_report};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact logs on stderr so stdout carries only report output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("space_weather_report=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; harmless when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = AppConfig::load_default().unwrap_or_else(|e| {
        warn!(error = %format!("{e:#}"), "config load failed; using defaults");
        AppConfig::default()
    });

    let source = HttpSource::from_config(&cfg);
    // Safe diagnostics only: presence of the token, never its value.
    info!(
        alert_year = %cfg.alert_year,
        token_present = source.has_token(),
        "fetching solar data"
    );

    let snapshot = fetch_snapshot(&source, &cfg.endpoints, &cfg.alert_year).await;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(s) = &snapshot {
        report::render_alerts(&s.alerts, &mut out)?;
    }
    writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;

    // The fetched products cannot fill a report record; render one only when
    // it comes from a separate file.
    if let Some(path) = &cfg.report_path {
        match load_report(path) {
            Ok(record) => {
                writeln!(out)?;
                report::render(Some(&record), &mut out)?;
            }
            Err(e) => warn!(error = %format!("{e:#}"), "report record not rendered"),
        }
    }
    if cfg.show_definitions {
        writeln!(out)?;
        report::show_definitions(&mut out)?;
    }

    Ok(())
}
