//! Records read from the store: events, historical slugs and participants.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Scheduling state of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Created but not yet approved for the schedule.
    Initiated,
    /// On the schedule (live, upcoming or archived).
    Scheduled,
    /// Taken down.
    Removed,
}

impl EventStatus {
    /// Stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initiated => "initiated",
            Self::Scheduled => "scheduled",
            Self::Removed => "removed",
        }
    }
}

impl FromStr for EventStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initiated" => Ok(Self::Initiated),
            "scheduled" => Ok(Self::Scheduled),
            "removed" => Ok(Self::Removed),
            other => Err(Error::InvalidField {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A broadcast, live or recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    /// Current URL slug. Unique.
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    pub status: EventStatus,
    /// Set once the recording is available.
    #[serde(default)]
    pub archive_time: Option<DateTime<Utc>>,
    /// Scheduled live start.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub featured: bool,
}

impl Event {
    /// Whether an anonymous requester may see this event.
    ///
    /// Private events and events still awaiting approval are staff-only.
    pub fn is_publicly_viewable(&self) -> bool {
        self.public && self.status != EventStatus::Initiated
    }

    /// Short blurb for listings, falling back to the full description.
    pub fn summary(&self) -> &str {
        if self.short_description.is_empty() {
            &self.description
        } else {
            &self.short_description
        }
    }
}

/// A slug an event was previously published under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOldSlug {
    pub slug: String,
    pub event_id: u64,
}

/// Whether a participant agreed to appear on the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clearance {
    Yes,
    No,
    Pending,
}

impl Clearance {
    /// Stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Pending => "pending",
        }
    }
}

impl FromStr for Clearance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "pending" => Ok(Self::Pending),
            other => Err(Error::InvalidField {
                field: "cleared",
                value: other.to_string(),
            }),
        }
    }
}

/// A speaker or presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub blog_url: Option<String>,
    /// Twitter handle without the leading `@`.
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
    pub cleared: Clearance,
}

/// Who is making the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requester {
    /// Authenticated staff account in good standing.
    pub active: bool,
}

impl Requester {
    /// An unauthenticated visitor.
    pub const ANONYMOUS: Self = Self { active: false };

    /// An authenticated, active account.
    pub const ACTIVE: Self = Self { active: true };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(public: bool, status: EventStatus) -> Event {
        Event {
            id: 1,
            slug: "e".to_string(),
            title: "E".to_string(),
            description: "long".to_string(),
            short_description: String::new(),
            location: String::new(),
            thumbnail_url: None,
            video_url: None,
            status,
            archive_time: None,
            start_time: None,
            public,
            featured: false,
        }
    }

    #[test]
    fn status_parses_stored_strings() {
        assert_eq!("scheduled".parse::<EventStatus>().unwrap(), EventStatus::Scheduled);
        assert_eq!("initiated".parse::<EventStatus>().unwrap(), EventStatus::Initiated);
        assert_eq!("removed".parse::<EventStatus>().unwrap(), EventStatus::Removed);
        assert!("Scheduled".parse::<EventStatus>().is_err());
    }

    #[test]
    fn clearance_parses_stored_strings() {
        assert_eq!("yes".parse::<Clearance>().unwrap(), Clearance::Yes);
        assert_eq!("pending".parse::<Clearance>().unwrap(), Clearance::Pending);
        let err = "maybe".parse::<Clearance>().unwrap_err();
        assert!(err.to_string().contains("cleared"));
    }

    #[test]
    fn publicly_viewable_requires_public_and_approved() {
        assert!(event(true, EventStatus::Scheduled).is_publicly_viewable());
        assert!(!event(false, EventStatus::Scheduled).is_publicly_viewable());
        assert!(!event(true, EventStatus::Initiated).is_publicly_viewable());
    }

    #[test]
    fn summary_prefers_short_description() {
        let mut e = event(true, EventStatus::Scheduled);
        assert_eq!(e.summary(), "long");
        e.short_description = "short".to_string();
        assert_eq!(e.summary(), "short");
    }

    #[test]
    fn event_deserializes_with_defaults() {
        let json = r#"{"id": 7, "slug": "x", "title": "X", "status": "scheduled"}"#;
        let e: Event = serde_json::from_str(json).unwrap();
        assert_eq!(e.status, EventStatus::Scheduled);
        assert!(!e.public);
        assert!(e.archive_time.is_none());
    }
}
