//! Error types for the Air Mozilla view layer.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error raised by an [`EventStore`](crate::EventStore) backend.
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while resolving or classifying records.
#[derive(Error, Debug)]
pub enum Error {
    /// No record exists for the requested slug (current or historical).
    #[error("{entity} not found: {slug}")]
    NotFound {
        /// Kind of record that was looked up ("event", "participant").
        entity: &'static str,
        /// The slug that missed.
        slug: String,
    },

    /// A stored value could not be mapped onto the domain model.
    #[error("invalid field '{field}': {value}")]
    InvalidField {
        /// The name of the offending field.
        field: &'static str,
        /// The raw stored value.
        value: String,
    },

    /// The backing store failed.
    #[error("store error: {0}")]
    Store(#[source] StoreError),

    /// Fixture JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build a not-found error for an event slug.
    pub fn event_not_found(slug: &str) -> Self {
        Self::NotFound {
            entity: "event",
            slug: slug.to_string(),
        }
    }

    /// Build a not-found error for a participant slug.
    pub fn participant_not_found(slug: &str) -> Self {
        Self::NotFound {
            entity: "participant",
            slug: slug.to_string(),
        }
    }

    /// Wrap any backend error.
    pub fn store<E>(err: E) -> Self
    where
        E: Into<StoreError>,
    {
        Self::Store(err.into())
    }

    /// True if this is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = Error::event_not_found("old-name");
        assert_eq!(err.to_string(), "event not found: old-name");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_participant_not_found_display() {
        let err = Error::participant_not_found("jane");
        assert_eq!(err.to_string(), "participant not found: jane");
    }

    #[test]
    fn test_invalid_field_display() {
        let err = Error::InvalidField {
            field: "status",
            value: "bogus".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("status"));
        assert!(msg.contains("bogus"));
    }

    #[test]
    fn test_store_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::store(io_err);
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("refused"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
