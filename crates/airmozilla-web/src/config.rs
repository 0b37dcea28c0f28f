//! Application configuration loaded from environment variables.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Context;
use chrono::TimeDelta;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// ClickHouse connection URL.
    pub clickhouse_url: String,

    /// ClickHouse database name.
    pub clickhouse_database: String,

    /// Base URL for this site (used in canonical URLs and OG tags).
    pub base_url: String,

    /// Site name shown in page titles and OG tags.
    pub site_name: String,

    /// How far ahead of its start time an event counts as live, in minutes.
    pub live_margin_minutes: u32,

    /// Where gated pages send requesters that must sign in.
    pub login_url: String,

    /// Bearer tokens that identify active staff requesters.
    pub staff_tokens: Arc<HashSet<String>>,

    /// Serve from a JSON fixture file instead of ClickHouse.
    pub fixtures_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `AIRMOZILLA_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `CLICKHOUSE_URL`: ClickHouse URL (default: "http://localhost:8123")
    /// - `CLICKHOUSE_DATABASE`: Database name (default: "airmozilla")
    /// - `AIRMOZILLA_BASE_URL`: Base URL for links (default: "http://localhost:8080")
    /// - `AIRMOZILLA_SITE_NAME`: Site name (default: "Air Mozilla")
    /// - `AIRMOZILLA_LIVE_MARGIN`: Live margin in minutes (default: 10)
    /// - `AIRMOZILLA_LOGIN_URL`: Login entry point (default: "/login")
    /// - `AIRMOZILLA_STAFF_TOKENS`: Comma-separated staff bearer tokens
    /// - `AIRMOZILLA_FIXTURES`: Path to a JSON fixture file
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("AIRMOZILLA_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let clickhouse_url =
            std::env::var("CLICKHOUSE_URL").unwrap_or_else(|_| "http://localhost:8123".to_string());

        let clickhouse_database =
            std::env::var("CLICKHOUSE_DATABASE").unwrap_or_else(|_| "airmozilla".to_string());

        let base_url = std::env::var("AIRMOZILLA_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("AIRMOZILLA_SITE_NAME").unwrap_or_else(|_| "Air Mozilla".to_string());

        let live_margin_minutes = match std::env::var("AIRMOZILLA_LIVE_MARGIN") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("AIRMOZILLA_LIVE_MARGIN must be minutes, got '{raw}'"))?,
            Err(_) => 10,
        };

        let login_url =
            std::env::var("AIRMOZILLA_LOGIN_URL").unwrap_or_else(|_| "/login".to_string());

        let staff_tokens: HashSet<String> = std::env::var("AIRMOZILLA_STAFF_TOKENS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let fixtures_path = std::env::var("AIRMOZILLA_FIXTURES")
            .ok()
            .filter(|s| !s.is_empty());

        tracing::info!(
            bind_addr = %bind_addr,
            clickhouse_url = %clickhouse_url,
            base_url = %base_url,
            site_name = %site_name,
            live_margin_minutes,
            login_url = %login_url,
            staff_token_count = staff_tokens.len(),
            fixtures = fixtures_path.as_deref().unwrap_or(""),
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            clickhouse_url,
            clickhouse_database,
            base_url,
            site_name,
            live_margin_minutes,
            login_url,
            staff_tokens: Arc::new(staff_tokens),
            fixtures_path,
        })
    }

    /// The live margin as a duration.
    pub fn live_margin(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.live_margin_minutes))
    }
}
