//! Event detail handler.
//!
//! Handles `GET /details/{slug}`. Historical slugs redirect permanently to
//! the current one; private or unscheduled events send anonymous
//! requesters to the login page.

use airmozilla_core::{EventAccess, featured_events, resolve_event};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};

use crate::error::WebError;
use crate::render::{self, event_path};
use crate::requester::Viewer;
use crate::state::AppState;

pub async fn event_page(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let key = event_path(&slug);
    if let Some(hit) = super::cached_page(&state, viewer, &key).await {
        return Ok(hit);
    }

    match resolve_event(state.store.as_ref(), &slug, viewer.requester()).await? {
        EventAccess::Redirect { slug } => Ok(Redirect::permanent(&event_path(&slug)).into_response()),
        EventAccess::LoginRequired => Ok(super::login_redirect(&state)),
        EventAccess::Granted(event) => {
            let featured = featured_events(state.store.as_ref()).await?;
            let markup = render::event::render(
                &event,
                &featured,
                &state.config.base_url,
                &state.config.site_name,
            );
            Ok(super::serve_page(&state, viewer, key, markup).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;
    use airmozilla_core::{Event, EventStatus, MemoryStore, Requester};
    use axum::http::{StatusCode, header};
    use chrono::{TimeZone, Utc};

    fn event(id: u64, slug: &str, public: bool) -> Event {
        Event {
            id,
            slug: slug.to_string(),
            title: format!("Event {slug}"),
            description: "A talk.".to_string(),
            short_description: String::new(),
            location: "Berlin".to_string(),
            thumbnail_url: None,
            video_url: None,
            status: EventStatus::Scheduled,
            archive_time: None,
            start_time: Some(Utc.with_ymd_and_hms(2024, 3, 1, 17, 0, 0).unwrap()),
            public,
            featured: false,
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_event(event(1, "new-name", true))
            .with_event(event(2, "staff-only", false))
            .with_old_slug("old-name", 1)
    }

    async fn get(viewer: Requester, slug: &str) -> Result<Response, WebError> {
        event_page(State(test_state(store())), Viewer(viewer), Path(slug.to_string())).await
    }

    #[tokio::test]
    async fn public_event_renders() {
        let resp = get(Requester::ANONYMOUS, "new-name").await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CACHE_CONTROL], "public, max-age=60");
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Event new-name"));
        assert!(html.contains("Berlin"));
    }

    #[tokio::test]
    async fn old_slug_redirects_permanently() {
        let resp = get(Requester::ANONYMOUS, "old-name").await.unwrap();
        assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(resp.headers()[header::LOCATION], "/details/new-name");
    }

    #[tokio::test]
    async fn private_event_requires_login() {
        let resp = get(Requester::ANONYMOUS, "staff-only").await.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn staff_see_private_event_uncached() {
        let resp = get(Requester::ACTIVE, "staff-only").await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CACHE_CONTROL], "private, no-store");
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let err = get(Requester::ANONYMOUS, "nope").await.unwrap_err();
        assert!(matches!(err, WebError::NotFound(_)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
