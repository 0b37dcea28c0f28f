//! Static page handlers.

use airmozilla_core::featured_events;
use axum::extract::State;
use axum::response::Response;

use crate::error::WebError;
use crate::render::{self, page::StaticPage};
use crate::requester::Viewer;
use crate::state::AppState;

pub async fn about_page(
    State(state): State<AppState>,
    viewer: Viewer,
) -> Result<Response, WebError> {
    static_page(&state, viewer, StaticPage::About).await
}

pub async fn login_page(
    State(state): State<AppState>,
    viewer: Viewer,
) -> Result<Response, WebError> {
    static_page(&state, viewer, StaticPage::Login).await
}

async fn static_page(
    state: &AppState,
    viewer: Viewer,
    page: StaticPage,
) -> Result<Response, WebError> {
    if let Some(hit) = super::cached_page(state, viewer, page.path()).await {
        return Ok(hit);
    }

    let featured = featured_events(state.store.as_ref()).await?;
    let markup = render::page::render(
        page,
        &featured,
        &state.config.base_url,
        &state.config.site_name,
    );
    Ok(super::serve_page(state, viewer, page.path().to_string(), markup).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;
    use airmozilla_core::{Event, EventStatus, MemoryStore, Requester};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn about_lists_featured_events() {
        let featured = Event {
            id: 9,
            slug: "keynote".to_string(),
            title: "Opening keynote".to_string(),
            description: String::new(),
            short_description: String::new(),
            location: String::new(),
            thumbnail_url: None,
            video_url: None,
            status: EventStatus::Scheduled,
            archive_time: None,
            start_time: None,
            public: true,
            featured: true,
        };
        let state = test_state(MemoryStore::new().with_event(featured));
        let resp = about_page(State(state.clone()), Viewer(Requester::ANONYMOUS))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("Opening keynote"));
        assert!(state.cache.get("/about").await.is_some());
    }

    #[tokio::test]
    async fn login_page_renders() {
        let state = test_state(MemoryStore::new());
        let resp = login_page(State(state), Viewer(Requester::ANONYMOUS)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
