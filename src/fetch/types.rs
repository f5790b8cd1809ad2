// src/fetch/types.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// One SWPC alert. Only `issue_datetime` is typed since the filter matches on
/// it; `message` and everything else the provider sends is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Alert {
    pub fn issued(&self) -> &str {
        self.issue_datetime.as_deref().unwrap_or("na")
    }

    /// Message as display text. Strings print bare, other JSON values in
    /// their compact JSON form.
    pub fn message_text(&self) -> Cow<'_, str> {
        match &self.message {
            None => Cow::Borrowed("na"),
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    /// `# <issue_datetime>: <message>`, with "na" for missing fields.
    pub fn headline(&self) -> String {
        format!("# {}: {}", self.issued(), self.message_text())
    }
}

/// Aggregate of one fetch run. Either all three products are present or
/// there is no snapshot at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSnapshot {
    /// Trailing-day plasma samples (density, speed, temperature), as sent.
    pub plasma: Value,
    pub alerts: Vec<Alert>,
    /// Current solar-wind-speed summary, as sent.
    pub wind: Value,
    pub fetched_at: DateTime<Utc>,
}

/// Anything that can turn a URL into a decoded JSON document.
#[async_trait::async_trait]
pub trait JsonSource: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
    fn name(&self) -> &'static str;
}
