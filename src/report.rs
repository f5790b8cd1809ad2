//! # Report
//! Text rendering of a classified solar activity summary, the glossary, and
//! the retained alert lines.
//!
//! `ReportRecord` is the shape the report needs. The SWPC products fetched by
//! [`crate::fetch`] carry no sunspot, flare-count or Kp data, so a record has
//! to come from elsewhere (see `AppConfig::report_path`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;

use crate::classify::{ClassificationThresholds, Metric};
use crate::fetch::types::Alert;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub sunspots: Sunspots,
    pub flare_activity: FlareActivity,
    pub solar_activity: SolarActivity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sunspots {
    pub number: f64,
    pub latest_observation_time: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlareActivity {
    pub xray_flux: XrayFlux,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrayFlux {
    pub xray_class_count: XrayClassCount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrayClassCount {
    pub x: f64,
    pub m: f64,
    pub c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarActivity {
    pub solar_wind: SolarWind,
    pub kp_index: KpIndex,
    pub goes_xray_flux: GoesXrayFlux,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarWind {
    pub speed: f64,
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpIndex {
    pub current: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoesXrayFlux {
    pub flux: f64,
    #[serde(rename = "class")]
    pub xray_class: String,
}

impl ReportRecord {
    /// Every key is required; a missing one is an error, not a default.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("decoding report record")
    }
}

pub fn load_report<P: AsRef<Path>>(path: P) -> Result<ReportRecord> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading report record from {}", path.display()))?;
    ReportRecord::from_json_str(&content)
}

/// Render with the built-in threshold table. `None` writes nothing.
pub fn render<W: Write>(report: Option<&ReportRecord>, out: &mut W) -> io::Result<()> {
    render_with(report, &ClassificationThresholds::default(), out)
}

pub fn render_with<W: Write>(
    report: Option<&ReportRecord>,
    thresholds: &ClassificationThresholds,
    out: &mut W,
) -> io::Result<()> {
    let Some(r) = report else {
        return Ok(());
    };

    let line = |out: &mut W, label: &str, metric: Metric, value: f64| -> io::Result<()> {
        writeln!(
            out,
            "  - {label}: {value} ({})",
            thresholds.classify(metric, value)
        )
    };

    writeln!(out, "Current Solar Data:")?;
    writeln!(out, "-------------------")?;
    writeln!(out, "Sunspots:")?;
    line(out, "Number of Sunspots", Metric::Sunspots, r.sunspots.number)?;
    writeln!(
        out,
        "  - Latest Observation Time: {}",
        r.sunspots.latest_observation_time
    )?;
    writeln!(out, "  - Location: {}", r.sunspots.location)?;
    writeln!(out)?;

    let counts = &r.flare_activity.xray_flux.xray_class_count;
    writeln!(out, "Solar Flare Activity:")?;
    line(out, "X-class Flares", Metric::XClassFlares, counts.x)?;
    line(out, "M-class Flares", Metric::MClassFlares, counts.m)?;
    line(out, "C-class Flares", Metric::CClassFlares, counts.c)?;
    writeln!(out)?;

    let sa = &r.solar_activity;
    writeln!(out, "Solar Activity:")?;
    line(
        out,
        "Solar Wind Speed (km/s)",
        Metric::SolarWindSpeed,
        sa.solar_wind.speed,
    )?;
    line(
        out,
        "Solar Wind Density (p/cm^3)",
        Metric::SolarWindDensity,
        sa.solar_wind.density,
    )?;
    line(out, "Kp Index", Metric::KpIndex, sa.kp_index.current)?;
    line(
        out,
        "GOES X-ray Flux (W/m^2)",
        Metric::GoesXrayFlux,
        sa.goes_xray_flux.flux,
    )?;
    writeln!(out, "  - GOES X-ray Class: {}", sa.goes_xray_flux.xray_class)?;
    Ok(())
}

const DEFINITIONS: &[(&str, &str)] = &[
    ("Sunspots", "The number of visible dark spots on the Sun's surface."),
    (
        "Solar Flare Activity",
        "Measures the occurrence of solar flares in different classes (X, M, C).",
    ),
    (
        "Solar Wind Speed",
        "The speed of the solar wind in kilometers per second.",
    ),
    (
        "Solar Wind Density",
        "The density of the solar wind in protons per cubic centimeter.",
    ),
    (
        "Kp Index",
        "A measure of geomagnetic activity caused by solar storms.",
    ),
    (
        "GOES X-ray Flux",
        "Measures the X-ray radiation emitted by the Sun.",
    ),
    (
        "GOES X-ray Class",
        "Classifies the X-ray flares based on their intensity.",
    ),
];

pub fn show_definitions<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Definitions:")?;
    writeln!(out, "-------------")?;
    for (term, text) in DEFINITIONS {
        writeln!(out, "{term}: {text}")?;
    }
    Ok(())
}

/// A 30-dash separator, then the alert headline, then a blank line.
pub fn render_alerts<W: Write>(alerts: &[Alert], out: &mut W) -> io::Result<()> {
    for a in alerts {
        writeln!(out, "{}", "-".repeat(30))?;
        writeln!(out, "{}", a.headline())?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_report_writes_nothing() {
        let mut buf = Vec::new();
        render(None, &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn definitions_list_every_term() {
        let mut buf = Vec::new();
        show_definitions(&mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.starts_with("Definitions:\n-------------\n"));
        assert_eq!(s.lines().count(), 2 + DEFINITIONS.len());
        assert!(s.contains("Kp Index: A measure of geomagnetic activity"));
    }
}
