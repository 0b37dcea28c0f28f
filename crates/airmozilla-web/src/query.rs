//! ClickHouse-backed [`EventStore`].
//!
//! Listing queries are built from an [`EventFilter`]. Every value a filter
//! carries is a timestamp, a boolean or a status literal, so the `WHERE`
//! clause is rendered inline; slug lookups bind their parameter.

use airmozilla_core::{
    ArchivePredicate, Clearance, Error, Event, EventFilter, EventOldSlug, EventOrder, EventStatus,
    EventStore, Participant, Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use clickhouse::Client;
use serde::Deserialize;

const EVENT_COLUMNS: &str = "id, slug, title, description, short_description, location, \
     thumbnail_url, video_url, status, archive_time, start_time, public, featured";

const PARTICIPANT_COLUMNS: &str =
    "id, slug, name, photo_url, department, team, blog_url, twitter, role, description, cleared";

/// A row from the `events` table.
#[derive(Debug, Clone, Deserialize, clickhouse::Row)]
pub struct EventRow {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub location: String,
    /// Empty when there is no placeholder image.
    pub thumbnail_url: String,
    /// Empty until a recording or stream exists.
    pub video_url: String,
    /// `LowCardinality(String)`: initiated, scheduled, removed.
    pub status: String,
    /// `Nullable(DateTime)` as unix seconds.
    pub archive_time: Option<u32>,
    /// `Nullable(DateTime)` as unix seconds.
    pub start_time: Option<u32>,
    pub public: bool,
    pub featured: bool,
}

impl TryFrom<EventRow> for Event {
    type Error = Error;

    fn try_from(row: EventRow) -> Result<Self> {
        Ok(Event {
            id: row.id,
            slug: row.slug,
            title: row.title,
            description: row.description,
            short_description: row.short_description,
            location: row.location,
            thumbnail_url: non_empty(row.thumbnail_url),
            video_url: non_empty(row.video_url),
            status: row.status.parse::<EventStatus>()?,
            archive_time: row.archive_time.and_then(from_epoch),
            start_time: row.start_time.and_then(from_epoch),
            public: row.public,
            featured: row.featured,
        })
    }
}

/// A row from the `event_old_slugs` table.
#[derive(Debug, Clone, Deserialize, clickhouse::Row)]
pub struct OldSlugRow {
    pub slug: String,
    pub event_id: u64,
}

/// A row from the `participants` table.
#[derive(Debug, Clone, Deserialize, clickhouse::Row)]
pub struct ParticipantRow {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub photo_url: String,
    pub department: String,
    pub team: String,
    pub blog_url: String,
    pub twitter: String,
    pub role: String,
    pub description: String,
    /// yes, no, pending.
    pub cleared: String,
}

impl TryFrom<ParticipantRow> for Participant {
    type Error = Error;

    fn try_from(row: ParticipantRow) -> Result<Self> {
        Ok(Participant {
            id: row.id,
            slug: row.slug,
            name: row.name,
            photo_url: non_empty(row.photo_url),
            department: row.department,
            team: row.team,
            blog_url: non_empty(row.blog_url),
            twitter: row.twitter,
            role: row.role,
            description: row.description,
            cleared: row.cleared.parse::<Clearance>()?,
        })
    }
}

#[derive(Debug, Deserialize, clickhouse::Row)]
struct CountRow {
    count: u64,
}

/// [`EventStore`] over a ClickHouse database.
#[derive(Clone)]
pub struct ClickHouseStore {
    client: Client,
}

impl ClickHouseStore {
    pub fn new(url: &str, database: &str) -> Self {
        Self {
            client: Client::default().with_url(url).with_database(database),
        }
    }
}

#[async_trait]
impl EventStore for ClickHouseStore {
    async fn filter_events(&self, filter: &EventFilter, offset: u64) -> Result<Vec<Event>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE {} ORDER BY {}{}",
            where_clause(filter),
            order_clause(filter.order),
            limit_clause(filter.limit, offset),
        );
        tracing::trace!(sql = %sql, "filter events");

        let rows = self
            .client
            .query(&sql)
            .fetch_all::<EventRow>()
            .await
            .map_err(Error::store)?;

        rows.into_iter().map(Event::try_from).collect()
    }

    async fn count_events(&self, filter: &EventFilter) -> Result<u64> {
        let sql = format!(
            "SELECT count() AS count FROM events WHERE {}",
            where_clause(filter)
        );
        let row = self
            .client
            .query(&sql)
            .fetch_one::<CountRow>()
            .await
            .map_err(Error::store)?;
        Ok(row.count)
    }

    async fn event_by_slug(&self, slug: &str) -> Result<Option<Event>> {
        let row = self
            .client
            .query(&format!(
                "SELECT {EVENT_COLUMNS} FROM events WHERE slug = ? LIMIT 1"
            ))
            .bind(slug)
            .fetch_optional::<EventRow>()
            .await
            .map_err(Error::store)?;
        row.map(Event::try_from).transpose()
    }

    async fn event_by_id(&self, id: u64) -> Result<Option<Event>> {
        let row = self
            .client
            .query(&format!(
                "SELECT {EVENT_COLUMNS} FROM events WHERE id = ? LIMIT 1"
            ))
            .bind(id)
            .fetch_optional::<EventRow>()
            .await
            .map_err(Error::store)?;
        row.map(Event::try_from).transpose()
    }

    async fn old_slug(&self, slug: &str) -> Result<Option<EventOldSlug>> {
        let row = self
            .client
            .query("SELECT slug, event_id FROM event_old_slugs WHERE slug = ? LIMIT 1")
            .bind(slug)
            .fetch_optional::<OldSlugRow>()
            .await
            .map_err(Error::store)?;
        Ok(row.map(|r| EventOldSlug {
            slug: r.slug,
            event_id: r.event_id,
        }))
    }

    async fn participant_by_slug(&self, slug: &str) -> Result<Option<Participant>> {
        let row = self
            .client
            .query(&format!(
                "SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE slug = ? LIMIT 1"
            ))
            .bind(slug)
            .fetch_optional::<ParticipantRow>()
            .await
            .map_err(Error::store)?;
        row.map(Participant::try_from).transpose()
    }
}

/// Render the predicate part of a filter. Always yields a valid expression.
pub fn where_clause(filter: &EventFilter) -> String {
    let mut conditions: Vec<String> = Vec::new();

    match filter.archive {
        ArchivePredicate::Any => {}
        ArchivePredicate::Absent => conditions.push("archive_time IS NULL".to_string()),
        ArchivePredicate::Before(t) => {
            conditions.push(format!("archive_time < toDateTime({})", to_epoch(t)));
        }
    }
    if let Some(t) = filter.start_before {
        conditions.push(format!("start_time < toDateTime({})", to_epoch(t)));
    }
    if let Some(t) = filter.start_after {
        conditions.push(format!("start_time > toDateTime({})", to_epoch(t)));
    }
    if let Some(status) = filter.status {
        conditions.push(format!("status = '{}'", status.as_str()));
    }
    if filter.public_only {
        conditions.push("public = 1".to_string());
    }
    if filter.featured_only {
        conditions.push("featured = 1".to_string());
    }

    if conditions.is_empty() {
        "1".to_string()
    } else {
        conditions.join(" AND ")
    }
}

fn order_clause(order: EventOrder) -> &'static str {
    match order {
        EventOrder::ArchiveTimeDesc => "archive_time DESC NULLS LAST, id ASC",
        EventOrder::StartTimeAsc => "start_time ASC NULLS LAST, id ASC",
        EventOrder::StartTimeDesc => "start_time DESC NULLS LAST, id ASC",
    }
}

fn limit_clause(limit: Option<u64>, offset: u64) -> String {
    match (limit, offset) {
        (Some(limit), 0) => format!(" LIMIT {limit}"),
        (Some(limit), offset) => format!(" LIMIT {limit} OFFSET {offset}"),
        (None, 0) => String::new(),
        (None, offset) => format!(" OFFSET {offset}"),
    }
}

/// Clamp a timestamp into the `DateTime` column range.
fn to_epoch(t: DateTime<Utc>) -> u32 {
    u32::try_from(t.timestamp().max(0)).unwrap_or(u32::MAX)
}

fn from_epoch(secs: u32) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(i64::from(secs), 0)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
