//! Application state shared across all request handlers.

use std::sync::Arc;

use airmozilla_core::{EventStore, MemoryStore};
use anyhow::Context;
use moka::future::Cache;

use crate::config::Config;
use crate::query::ClickHouseStore;

/// Cached HTML response with metadata.
#[derive(Clone, Debug)]
pub struct CachedHtml {
    /// Rendered HTML string.
    pub html: String,
    /// When this entry was cached.
    pub cached_at: chrono::DateTime<chrono::Utc>,
}

/// Type alias for the anonymous page cache, keyed by request path.
pub type HtmlCache = Cache<String, CachedHtml>;

/// Page cache capacity (number of entries).
const PAGE_CACHE_CAPACITY: u64 = 10_000;

/// Page cache TTL. Short, since the home page moves with the clock.
const PAGE_CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(60);

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Record store for events and participants.
    pub store: Arc<dyn EventStore>,

    /// Application configuration.
    pub config: Arc<Config>,

    /// Rendered pages served to anonymous requesters.
    pub cache: HtmlCache,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// Uses the fixture file when one is configured, ClickHouse otherwise.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn EventStore> = match config.fixtures_path.as_deref() {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading fixtures from {path}"))?;
                let store = MemoryStore::from_json(&json)
                    .with_context(|| format!("parsing fixtures from {path}"))?;
                tracing::info!(path = %path, events = store.event_count(), "serving fixtures");
                Arc::new(store)
            }
            None => Arc::new(ClickHouseStore::new(
                &config.clickhouse_url,
                &config.clickhouse_database,
            )),
        };

        Ok(Self::with_store(config, store))
    }

    /// Create application state around an existing store.
    pub fn with_store(config: Config, store: Arc<dyn EventStore>) -> Self {
        let cache = Cache::builder()
            .max_capacity(PAGE_CACHE_CAPACITY)
            .time_to_live(PAGE_CACHE_TTL)
            .build();

        tracing::info!(
            cache_capacity = PAGE_CACHE_CAPACITY,
            cache_ttl_secs = PAGE_CACHE_TTL.as_secs(),
            "application state initialized"
        );

        Self {
            store,
            config: Arc::new(config),
            cache,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::HashSet;

    /// Token accepted as an active staff requester in tests.
    pub const STAFF_TOKEN: &str = "staff-secret";

    pub fn test_config() -> Config {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            clickhouse_url: "http://localhost:8123".to_string(),
            clickhouse_database: "airmozilla".to_string(),
            base_url: "https://air.example".to_string(),
            site_name: "Air Mozilla".to_string(),
            live_margin_minutes: 10,
            login_url: "/login".to_string(),
            staff_tokens: Arc::new(HashSet::from([STAFF_TOKEN.to_string()])),
            fixtures_path: None,
        }
    }

    pub fn test_state(store: MemoryStore) -> AppState {
        AppState::with_store(test_config(), Arc::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::test_config;
    use super::*;

    #[tokio::test]
    async fn loads_fixture_store() {
        let mut config = test_config();
        config.fixtures_path = Some(
            concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/fixtures.json").to_string(),
        );
        let state = AppState::new(config).unwrap();
        let event = state.store.event_by_slug("weekly-project-meeting").await.unwrap();
        assert_eq!(event.map(|e| e.id), Some(1));
    }

    #[test]
    fn missing_fixture_is_an_error() {
        let mut config = test_config();
        config.fixtures_path = Some("/nonexistent/fixtures.json".to_string());
        assert!(AppState::new(config).is_err());
    }
}
