//! Filter predicates over events.
//!
//! An [`EventFilter`] is a backend-neutral description of a query: which
//! events qualify, how they are ordered and how many to return. The SQL
//! store renders it to a `WHERE` clause; [`MemoryStore`](crate::MemoryStore)
//! evaluates it directly with [`EventFilter::matches`] and [`EventFilter::sort`].

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::model::{Event, EventStatus, Requester};

/// Constraint on an event's archive timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchivePredicate {
    /// No constraint.
    Any,
    /// The event has not been archived.
    Absent,
    /// Archived strictly before the given instant.
    Before(DateTime<Utc>),
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOrder {
    /// Most recently archived first.
    ArchiveTimeDesc,
    /// Earliest start first.
    StartTimeAsc,
    /// Latest start first.
    StartTimeDesc,
}

/// A query over events.
///
/// Missing timestamps never satisfy a time bound, and sort after present ones
/// regardless of direction. Ties are broken by ascending id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilter {
    pub archive: ArchivePredicate,
    /// `start_time < bound`.
    pub start_before: Option<DateTime<Utc>>,
    /// `start_time > bound`.
    pub start_after: Option<DateTime<Utc>>,
    pub status: Option<EventStatus>,
    pub public_only: bool,
    pub featured_only: bool,
    pub order: EventOrder,
    pub limit: Option<u64>,
}

impl EventFilter {
    fn scheduled(archive: ArchivePredicate, order: EventOrder) -> Self {
        Self {
            archive,
            start_before: None,
            start_after: None,
            status: Some(EventStatus::Scheduled),
            public_only: false,
            featured_only: false,
            order,
            limit: None,
        }
    }

    /// Archived before `now`, most recent first.
    pub fn past(now: DateTime<Utc>) -> Self {
        Self::scheduled(ArchivePredicate::Before(now), EventOrder::ArchiveTimeDesc)
    }

    /// Not archived and starting before `live_boundary`, earliest first.
    pub fn live(live_boundary: DateTime<Utc>) -> Self {
        Self {
            start_before: Some(live_boundary),
            ..Self::scheduled(ArchivePredicate::Absent, EventOrder::StartTimeAsc)
        }
    }

    /// Not archived and starting after `live_boundary`, earliest first.
    pub fn upcoming(live_boundary: DateTime<Utc>) -> Self {
        Self {
            start_after: Some(live_boundary),
            ..Self::scheduled(ArchivePredicate::Absent, EventOrder::StartTimeAsc)
        }
    }

    /// Public featured events with no time constraint, latest start first.
    pub fn featured() -> Self {
        Self {
            archive: ArchivePredicate::Any,
            start_before: None,
            start_after: None,
            status: None,
            public_only: true,
            featured_only: true,
            order: EventOrder::StartTimeDesc,
            limit: None,
        }
    }

    /// Restrict to public events unless the requester is active.
    ///
    /// Every requester-dependent listing goes through here.
    pub fn visible_to(mut self, requester: Requester) -> Self {
        if !requester.active {
            self.public_only = true;
        }
        self
    }

    /// Cap the number of results.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Evaluate the predicate part of the filter against one event.
    pub fn matches(&self, event: &Event) -> bool {
        let archive_ok = match self.archive {
            ArchivePredicate::Any => true,
            ArchivePredicate::Absent => event.archive_time.is_none(),
            ArchivePredicate::Before(t) => event.archive_time.is_some_and(|a| a < t),
        };
        let start_before_ok = self
            .start_before
            .is_none_or(|bound| event.start_time.is_some_and(|s| s < bound));
        let start_after_ok = self
            .start_after
            .is_none_or(|bound| event.start_time.is_some_and(|s| s > bound));

        archive_ok
            && start_before_ok
            && start_after_ok
            && self.status.is_none_or(|s| event.status == s)
            && (!self.public_only || event.public)
            && (!self.featured_only || event.featured)
    }

    /// Sort events in place according to [`EventFilter::order`].
    pub fn sort(&self, events: &mut [Event]) {
        events.sort_by(|a, b| {
            let primary = match self.order {
                EventOrder::ArchiveTimeDesc => cmp_nulls_last(a.archive_time, b.archive_time, true),
                EventOrder::StartTimeAsc => cmp_nulls_last(a.start_time, b.start_time, false),
                EventOrder::StartTimeDesc => cmp_nulls_last(a.start_time, b.start_time, true),
            };
            primary.then(a.id.cmp(&b.id))
        });
    }
}

fn cmp_nulls_last(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>, desc: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if desc => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
