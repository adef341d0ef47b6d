// ABOUTME: Configuration module for the deck-viewer application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::errors::{DeckError, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_CHART_JS_URL: &str =
    "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the slide generator service
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    /// Chart.js bundle referenced by generated HTML pages
    pub chart_js_url: String,
    pub serve_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_ms: 30000, // 30 seconds
            chart_js_url: DEFAULT_CHART_JS_URL.to_string(),
            serve_port: 8080,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_base_url = env::var("SLIDE_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.api_base_url);
        let request_timeout_ms = env::var("REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.request_timeout_ms);
        let chart_js_url = env::var("CHART_JS_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.chart_js_url);
        let serve_port = env::var("SERVE_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(defaults.serve_port);

        Self {
            api_base_url,
            request_timeout_ms,
            chart_js_url,
            serve_port,
        }
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(mut self, api_url: Option<String>, timeout_ms: Option<u64>) -> Self {
        if let Some(api_url) = api_url {
            self.api_base_url = api_url;
        }
        if let Some(timeout_ms) = timeout_ms {
            self.request_timeout_ms = timeout_ms;
        }
        self
    }

    /// Parse the configured base URL, normalized to end with a slash so that
    /// endpoint paths join beneath it rather than replacing its last segment.
    pub fn api_base(&self) -> Result<Url> {
        let mut raw = self.api_base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(DeckError::ConfigError(format!(
                "Unsupported URL scheme '{}' in {}",
                other, self.api_base_url
            ))),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
