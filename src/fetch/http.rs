// src/fetch/http.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::AppConfig;
use crate::fetch::types::JsonSource;

/// Plain GET against the SWPC products. No query, no body, no custom headers.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    timeout: Option<Duration>,
    // Held so an auth scheme can be wired in one place; not sent today.
    api_token: Option<String>,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            timeout: None,
            api_token: None,
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        let mut s = Self::new();
        s.timeout = cfg.timeout();
        s.api_token = cfg.api_token.clone();
        s
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    pub fn has_token(&self) -> bool {
        self.api_token.is_some()
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JsonSource for HttpSource {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let mut req = self.client.get(url);
        if let Some(t) = self.timeout {
            req = req.timeout(t);
        }
        let rsp = req
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?;
        rsp.json::<Value>()
            .await
            .with_context(|| format!("decoding JSON from {url}"))
    }

    fn name(&self) -> &'static str {
        "SWPC"
    }
}
