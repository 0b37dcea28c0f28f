//! Requester identification.
//!
//! A request comes from an active staff member when it carries
//! `Authorization: Bearer <token>` with a token listed in
//! `AIRMOZILLA_STAFF_TOKENS`. Everything else is anonymous; a bad token is
//! not an error, the request is just not privileged.

use std::convert::Infallible;

use airmozilla_core::Requester;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::state::AppState;

/// Extractor for the [`Requester`] behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer(pub Requester);

impl Viewer {
    pub fn requester(&self) -> Requester {
        self.0
    }

    pub fn is_active(&self) -> bool {
        self.0.active
    }
}

impl FromRequestParts<AppState> for Viewer {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "));

        let active = match token {
            Some(token) if state.config.staff_tokens.contains(token) => true,
            Some(_) => {
                tracing::debug!("unrecognized staff token");
                false
            }
            None => false,
        };

        Ok(Viewer(Requester { active }))
    }
}
