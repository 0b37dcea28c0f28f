//! Read-only record store abstraction.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::filter::EventFilter;
use crate::model::{Event, EventOldSlug, Participant};

/// Read access to events, slug history and participants.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Events matching `filter`, ordered and limited as it says, skipping
    /// the first `offset`.
    async fn filter_events(&self, filter: &EventFilter, offset: u64) -> Result<Vec<Event>>;

    /// Number of events matching `filter`, ignoring its limit.
    async fn count_events(&self, filter: &EventFilter) -> Result<u64>;

    async fn event_by_slug(&self, slug: &str) -> Result<Option<Event>>;

    async fn event_by_id(&self, id: u64) -> Result<Option<Event>>;

    async fn old_slug(&self, slug: &str) -> Result<Option<EventOldSlug>>;

    async fn participant_by_slug(&self, slug: &str) -> Result<Option<Participant>>;
}

/// In-memory store, used for fixtures and tests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    events: Vec<Event>,
    #[serde(default)]
    old_slugs: Vec<EventOldSlug>,
    #[serde(default)]
    participants: Vec<Participant>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON document with `events`, `old_slugs` and
    /// `participants` arrays (each optional).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_old_slug(mut self, slug: &str, event_id: u64) -> Self {
        self.old_slugs.push(EventOldSlug {
            slug: slug.to_string(),
            event_id,
        });
        self
    }

    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    fn matching(&self, filter: &EventFilter) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        filter.sort(&mut events);
        events
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn filter_events(&self, filter: &EventFilter, offset: u64) -> Result<Vec<Event>> {
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = filter
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));
        Ok(self.matching(filter).into_iter().skip(skip).take(take).collect())
    }

    async fn count_events(&self, filter: &EventFilter) -> Result<u64> {
        Ok(self.events.iter().filter(|e| filter.matches(e)).count() as u64)
    }

    async fn event_by_slug(&self, slug: &str) -> Result<Option<Event>> {
        Ok(self.events.iter().find(|e| e.slug == slug).cloned())
    }

    async fn event_by_id(&self, id: u64) -> Result<Option<Event>> {
        Ok(self.events.iter().find(|e| e.id == id).cloned())
    }

    async fn old_slug(&self, slug: &str) -> Result<Option<EventOldSlug>> {
        Ok(self.old_slugs.iter().find(|o| o.slug == slug).cloned())
    }

    async fn participant_by_slug(&self, slug: &str) -> Result<Option<Participant>> {
        Ok(self.participants.iter().find(|p| p.slug == slug).cloned())
    }
}
