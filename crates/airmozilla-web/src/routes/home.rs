//! Home page handlers.

use airmozilla_core::classify;
use axum::extract::{Path, State};
use axum::response::Response;
use chrono::Utc;

use crate::error::WebError;
use crate::render;
use crate::requester::Viewer;
use crate::state::AppState;

/// `GET /`
pub async fn home_page(
    State(state): State<AppState>,
    viewer: Viewer,
) -> Result<Response, WebError> {
    render_home(&state, viewer, 1).await
}

/// `GET /page/{page}`
///
/// Numbers past the end (and zero) land on the last page.
pub async fn home_paged(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(page): Path<String>,
) -> Result<Response, WebError> {
    let number = parse_page(&page)?;
    render_home(&state, viewer, number).await
}

async fn render_home(state: &AppState, viewer: Viewer, page: u32) -> Result<Response, WebError> {
    let key = format!("/page/{page}");
    if let Some(hit) = super::cached_page(state, viewer, &key).await {
        return Ok(hit);
    }

    let schedule = classify(
        state.store.as_ref(),
        Utc::now(),
        state.config.live_margin(),
        viewer.requester(),
        page,
    )
    .await?;

    tracing::debug!(
        page = schedule.past.number,
        num_pages = schedule.past.num_pages,
        live = schedule.live.is_some(),
        upcoming = schedule.upcoming.len(),
        "home page classified"
    );

    let markup = render::home::render(&schedule, &state.config.base_url, &state.config.site_name);
    Ok(super::serve_page(state, viewer, key, markup).await)
}

/// Parse a page number from the path. Oversized numbers saturate.
fn parse_page(raw: &str) -> Result<u32, WebError> {
    raw.parse::<u64>()
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        .map_err(|_| WebError::BadRequest(format!("invalid page number: {raw}")))
}
