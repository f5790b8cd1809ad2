// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod classify;
pub mod config;
pub mod fetch;
pub mod report;

// ---- Re-exports for stable public API ----
pub use crate::classify::{classify, ClassificationThresholds, Metric, Severity, Thresholds};
pub use crate::config::AppConfig;
pub use crate::fetch::types::{Alert, JsonSource, SolarSnapshot};
pub use crate::fetch::{fetch_snapshot, filter_alerts};
pub use crate::report::{render, render_alerts, show_definitions, ReportRecord};
