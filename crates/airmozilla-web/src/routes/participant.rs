//! Participant profile handler.

use airmozilla_core::{ParticipantAccess, featured_events, resolve_participant};
use axum::extract::{Path, State};
use axum::response::Response;

use crate::error::WebError;
use crate::render::{self, participant_path};
use crate::requester::Viewer;
use crate::state::AppState;

/// `GET /participant/{slug}`. Uncleared profiles redirect to login for
/// everyone.
pub async fn participant_page(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let key = participant_path(&slug);
    if let Some(hit) = super::cached_page(&state, viewer, &key).await {
        return Ok(hit);
    }

    match resolve_participant(state.store.as_ref(), &slug, viewer.requester()).await? {
        ParticipantAccess::LoginRequired => Ok(super::login_redirect(&state)),
        ParticipantAccess::Granted(participant) => {
            let featured = featured_events(state.store.as_ref()).await?;
            let markup = render::participant::render(
                &participant,
                &featured,
                &state.config.base_url,
                &state.config.site_name,
            );
            Ok(super::serve_page(&state, viewer, key, markup).await)
        }
    }
}
