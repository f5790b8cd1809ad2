// src/config/app.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};

pub const ENV_CONFIG_PATH: &str = "SPACE_WEATHER_CONFIG_PATH";
/// Credential variable. Read into config, never attached to a request.
pub const ENV_API_TOKEN: &str = "NCDC_TOK";

pub const DEFAULT_PLASMA_URL: &str =
    "https://services.swpc.noaa.gov/products/solar-wind/plasma-1-day.json";
pub const DEFAULT_ALERTS_URL: &str = "https://services.swpc.noaa.gov/products/alerts.json";
pub const DEFAULT_WIND_URL: &str =
    "https://services.swpc.noaa.gov/products/summary/solar-wind-speed.json";
pub const DEFAULT_ALERT_YEAR: &str = "2024";

/// The three SWPC products, fetched in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub plasma: String,
    pub alerts: String,
    pub wind: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            plasma: DEFAULT_PLASMA_URL.to_string(),
            alerts: DEFAULT_ALERTS_URL.to_string(),
            wind: DEFAULT_WIND_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoints: Endpoints,
    /// Substring an alert's `issue_datetime` must contain to be kept.
    pub alert_year: String,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout_secs: Option<u64>,
    /// Optional JSON file with a full report record to render.
    pub report_path: Option<PathBuf>,
    pub show_definitions: bool,
    /// Populated from `NCDC_TOK`; never read from the config file.
    #[serde(skip)]
    pub api_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            alert_year: DEFAULT_ALERT_YEAR.to_string(),
            timeout_secs: None,
            report_path: None,
            show_definitions: false,
            api_token: None,
        }
    }
}

impl AppConfig {
    /// Load config from an explicit path. Supports TOML or JSON formats.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let cfg = parse_config(&content, ext.as_str())
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg.finish())
    }

    /// Load config using env var + fallbacks:
    /// 1) $SPACE_WEATHER_CONFIG_PATH
    /// 2) config/space_weather.toml
    /// 3) config/space_weather.json
    /// 4) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from_file(&pb);
            } else {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
        }
        let toml_p = PathBuf::from("config/space_weather.toml");
        if toml_p.exists() {
            return Self::load_from_file(&toml_p);
        }
        let json_p = PathBuf::from("config/space_weather.json");
        if json_p.exists() {
            return Self::load_from_file(&json_p);
        }
        Ok(Self::default().finish())
    }

    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_secs.map(std::time::Duration::from_secs)
    }

    /// Sanitize values and pick up the credential from the environment.
    fn finish(mut self) -> Self {
        if self.timeout_secs == Some(0) {
            self.timeout_secs = None;
        }
        self.alert_year = self.alert_year.trim().to_string();
        if self.alert_year.is_empty() {
            self.alert_year = DEFAULT_ALERT_YEAR.to_string();
        }
        self.api_token = env::var(ENV_API_TOKEN)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }
}

fn parse_config(s: &str, hint_ext: &str) -> Result<AppConfig> {
    match hint_ext {
        "toml" => Ok(toml::from_str(s)?),
        "json" => Ok(serde_json::from_str(s)?),
        _ => {
            if let Ok(v) = serde_json::from_str(s) {
                return Ok(v);
            }
            toml::from_str(s).map_err(|e| anyhow!("unsupported config format: {e}"))
        }
    }
}
