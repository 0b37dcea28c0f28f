//! Error types for the web front end.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Web front end error type.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The requested event or participant does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A path parameter could not be parsed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (fixtures, rendering, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),

    /// ClickHouse query error.
    #[error("database error: {0}")]
    Database(#[from] clickhouse::error::Error),
}

impl From<airmozilla_core::Error> for WebError {
    fn from(err: airmozilla_core::Error) -> Self {
        match err {
            airmozilla_core::Error::NotFound { entity, slug } => {
                Self::NotFound(format!("{entity} {slug}"))
            }
            airmozilla_core::Error::Store(source) => {
                match source.downcast::<clickhouse::error::Error>() {
                    Ok(db) => Self::Database(*db),
                    Err(other) => Self::Internal(anyhow::anyhow!(other)),
                }
            }
            other => Self::Internal(other.into()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("We couldn't find that page: {msg}"),
            ),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                format!("The request could not be understood: {msg}"),
            ),
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
            Self::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Service Unavailable",
                    "The event database is temporarily unavailable. Please try again later."
                        .to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) " - Air Mozilla" }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to Air Mozilla" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
