//! Temporal classification of events into past, live and upcoming.
//!
//! Given a point in time and a live margin, every scheduled event falls in
//! at most one bucket:
//!
//! ```text
//!            now                  now + margin
//! ------------|------------------------|------------------>
//!   past: archived before now
//!   live: not archived, start < now + margin
//!   upcoming: not archived, start > now + margin
//! ```

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::access::featured_events;
use crate::error::Result;
use crate::filter::EventFilter;
use crate::model::{Event, Requester};
use crate::pagination::{PAST_EVENTS_PER_PAGE, Page, Paginator};
use crate::store::EventStore;

/// Upcoming events shown on the home page.
pub const UPCOMING_LIMIT: u64 = 3;

/// The instants that separate past, live and upcoming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveWindow {
    pub now: DateTime<Utc>,
    /// `now + margin`. Starts before this count as live.
    pub boundary: DateTime<Utc>,
}

impl LiveWindow {
    pub fn new(now: DateTime<Utc>, margin: TimeDelta) -> Self {
        Self {
            now,
            boundary: now + margin,
        }
    }

    pub fn past(&self, requester: Requester) -> EventFilter {
        EventFilter::past(self.now).visible_to(requester)
    }

    pub fn live(&self, requester: Requester) -> EventFilter {
        EventFilter::live(self.boundary).visible_to(requester)
    }

    pub fn upcoming(&self, requester: Requester) -> EventFilter {
        EventFilter::upcoming(self.boundary)
            .visible_to(requester)
            .with_limit(UPCOMING_LIMIT)
    }
}

/// Everything the home page shows.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    /// Archived events, one page of them.
    pub past: Page<Event>,
    /// The earliest-starting live event.
    pub live: Option<Event>,
    /// Remaining live events.
    pub also_live: Vec<Event>,
    pub upcoming: Vec<Event>,
    pub featured: Vec<Event>,
}

/// Classify events around `now` for `requester` and fetch page `page` of
/// the past listing.
pub async fn classify(
    store: &dyn EventStore,
    now: DateTime<Utc>,
    live_margin: TimeDelta,
    requester: Requester,
    page: u32,
) -> Result<Schedule> {
    let window = LiveWindow::new(now, live_margin);
    let past_filter = window.past(requester);
    let live_filter = window.live(requester);
    let upcoming_filter = window.upcoming(requester);

    let (past_total, live_events, upcoming, featured) = tokio::try_join!(
        store.count_events(&past_filter),
        store.filter_events(&live_filter, 0),
        store.filter_events(&upcoming_filter, 0),
        featured_events(store),
    )?;

    let paginator = Paginator::new(past_total, PAST_EVENTS_PER_PAGE);
    let number = paginator.page_number(page);
    if number != page {
        tracing::debug!(requested = page, served = number, "past page out of range");
    }
    let past_items = store
        .filter_events(
            &past_filter.with_limit(paginator.per_page()),
            paginator.offset(number),
        )
        .await?;

    let mut live_iter = live_events.into_iter();
    let live = live_iter.next();
    let also_live: Vec<Event> = live_iter.collect();

    tracing::debug!(
        past_total,
        page = number,
        live = live.is_some(),
        also_live = also_live.len(),
        upcoming = upcoming.len(),
        active = requester.active,
        "classified events"
    );

    Ok(Schedule {
        past: paginator.page(number, past_items),
        live,
        also_live,
        upcoming,
        featured,
    })
}
