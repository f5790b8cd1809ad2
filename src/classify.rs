//! # Severity classification
//! Maps a raw measurement onto one of five severity bands using inclusive
//! upper bounds. Breakpoints for every tracked metric live in one table
//! ([`ClassificationThresholds`]) so callers never carry literal numbers.

use std::fmt;

/// Severity band, ordered from calmest to most intense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::VeryLow => "Very Low",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive upper bounds of the four lowest bands. Anything above `high` is
/// [`Severity::VeryHigh`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub very_low: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Thresholds {
    pub const fn new(very_low: f64, low: f64, medium: f64, high: f64) -> Self {
        Self {
            very_low,
            low,
            medium,
            high,
        }
    }

    /// Band set centered on a typical reference value: "Medium" reaches up to
    /// the typical value, "High" up to twice it.
    pub fn around_typical(typical: f64) -> Self {
        Self::new(typical * 0.25, typical * 0.5, typical, typical * 2.0)
    }
}

/// Classify `value` against `t`. Boundary values belong to the lower band.
/// NaN never satisfies `<=` and lands in `VeryHigh`.
pub fn classify(value: f64, t: &Thresholds) -> Severity {
    if value <= t.very_low {
        Severity::VeryLow
    } else if value <= t.low {
        Severity::Low
    } else if value <= t.medium {
        Severity::Medium
    } else if value <= t.high {
        Severity::High
    } else {
        Severity::VeryHigh
    }
}

/// The eight measurements the report tracks.
/// Declaration order matches [`Metric::ALL`] and indexes the threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    Sunspots,
    XClassFlares,
    MClassFlares,
    CClassFlares,
    SolarWindSpeed,
    SolarWindDensity,
    KpIndex,
    GoesXrayFlux,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::Sunspots,
        Metric::XClassFlares,
        Metric::MClassFlares,
        Metric::CClassFlares,
        Metric::SolarWindSpeed,
        Metric::SolarWindDensity,
        Metric::KpIndex,
        Metric::GoesXrayFlux,
    ];

    /// Reference "typical" value for the metric.
    pub fn typical(self) -> f64 {
        match self {
            Metric::Sunspots => 50.0,
            Metric::XClassFlares => 5.0,
            Metric::MClassFlares => 20.0,
            Metric::CClassFlares => 100.0,
            Metric::SolarWindSpeed => 500.0,
            Metric::SolarWindDensity => 10.0,
            Metric::KpIndex => 5.0,
            Metric::GoesXrayFlux => 1.0e-5,
        }
    }
}

/// Per-metric band table, one row per [`Metric`]. Tests swap individual rows
/// with [`ClassificationThresholds::with_thresholds`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationThresholds {
    table: [Thresholds; 8],
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            table: Metric::ALL.map(|m| Thresholds::around_typical(m.typical())),
        }
    }
}

impl ClassificationThresholds {
    pub fn with_thresholds(mut self, metric: Metric, thresholds: Thresholds) -> Self {
        self.table[metric as usize] = thresholds;
        self
    }

    pub fn get(&self, metric: Metric) -> Thresholds {
        self.table[metric as usize]
    }

    pub fn classify(&self, metric: Metric, value: f64) -> Severity {
        classify(value, &self.get(metric))
    }
}
