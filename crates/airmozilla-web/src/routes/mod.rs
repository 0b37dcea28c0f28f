//! Route definitions for the site.
//!
//! ## Routes
//!
//! - `GET /` - Home page
//! - `GET /page/{page}` - Home page, later pages of past events
//! - `GET /details/{slug}` - Event page (historical slugs redirect)
//! - `GET /participant/{slug}` - Participant profile
//! - `GET /about`, `GET /login` - Static pages
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions

mod event;
mod health;
mod home;
mod page;
mod participant;

use axum::Router;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use maud::Markup;

use crate::render;
use crate::requester::Viewer;
use crate::state::{AppState, CachedHtml};

/// Browser cache lifetime for pages anyone may see, in seconds.
const PUBLIC_MAX_AGE: u32 = 60;

/// Build the complete site router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/page/{page}", get(home::home_paged))
        .route("/details/{slug}", get(event::event_page))
        .route("/participant/{slug}", get(participant::participant_page))
        .route("/about", get(page::about_page))
        .route("/login", get(page::login_page))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}

/// Look up a rendered page for an anonymous requester.
///
/// Staff see private events, so their pages never touch the shared cache.
async fn cached_page(state: &AppState, viewer: Viewer, key: &str) -> Option<Response> {
    if viewer.is_active() {
        return None;
    }
    let cached = state.cache.get(key).await?;
    tracing::debug!(key = %key, "cache hit");
    Some(build_response(&cached.html, cache_headers(viewer)))
}

/// Turn rendered markup into a response, caching it for anonymous requesters.
async fn serve_page(state: &AppState, viewer: Viewer, key: String, markup: Markup) -> Response {
    let html = markup.into_string();

    if !viewer.is_active() {
        let cached = CachedHtml {
            html: html.clone(),
            cached_at: chrono::Utc::now(),
        };
        state.cache.insert(key, cached).await;
    }

    build_response(&html, cache_headers(viewer))
}

/// Send the requester to the configured login page.
fn login_redirect(state: &AppState) -> Response {
    Redirect::to(&state.config.login_url).into_response()
}

/// Build an HTTP response with HTML content and security/cache headers.
fn build_response(html: &str, cache_headers: HeaderMap) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    for (key, value) in cache_headers.iter() {
        headers.insert(key.clone(), value.clone());
    }

    (StatusCode::OK, headers, html.to_string()).into_response()
}

/// Cache-Control for a page rendered for `viewer`.
fn cache_headers(viewer: Viewer) -> HeaderMap {
    let mut headers = HeaderMap::new();

    let value = if viewer.is_active() {
        "private, no-store".to_string()
    } else {
        format!("public, max-age={PUBLIC_MAX_AGE}")
    };

    if let Ok(val) = HeaderValue::from_str(&value) {
        headers.insert(header::CACHE_CONTROL, val);
    }

    headers
}
