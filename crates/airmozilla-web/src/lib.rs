//! Air Mozilla web front end.
//!
//! Serves the public pages of the video site: a home page of live, upcoming
//! and archived events, event detail pages, participant profiles and a few
//! static pages. Records come from ClickHouse, or from a JSON fixture file
//! for local runs.
//!
//! # Architecture
//!
//! - **Store**: [`airmozilla_core::EventStore`] backed by ClickHouse ([`query`])
//! - **Access**: requester identification from staff bearer tokens ([`requester`])
//! - **Render**: HTML with Open Graph tags using maud (compile-time templates)
//! - **Cache**: in-process moka cache for anonymous pages + Cache-Control headers
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - URLs are validated (HTTPS/HTTP only) before use in attributes
//! - Strict Content-Security-Policy: no JavaScript execution
//! - X-Frame-Options: DENY prevents clickjacking
//! - Pages rendered for staff are never cached or marked public

pub mod config;
pub mod error;
pub mod query;
pub mod render;
pub mod requester;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
