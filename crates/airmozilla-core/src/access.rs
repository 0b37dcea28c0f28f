//! Access decisions for single-record pages.

use crate::error::{Error, Result};
use crate::filter::EventFilter;
use crate::model::{Clearance, Event, Participant, Requester};
use crate::store::EventStore;

/// Outcome of looking up an event page.
#[derive(Debug, Clone, PartialEq)]
pub enum EventAccess {
    /// Render the event.
    Granted(Event),
    /// The slug is historical; send the requester to the current one.
    Redirect {
        /// Current slug of the mapped event.
        slug: String,
    },
    /// The event exists but the requester must sign in first.
    LoginRequired,
}

/// Outcome of looking up a participant page.
#[derive(Debug, Clone, PartialEq)]
pub enum ParticipantAccess {
    Granted(Participant),
    LoginRequired,
}

/// Resolve an event slug for `requester`.
///
/// Current slugs win over historical ones. A historical slug always
/// redirects, even when the requester could not view the target; the
/// canonical page applies the gate itself.
pub async fn resolve_event(
    store: &dyn EventStore,
    slug: &str,
    requester: Requester,
) -> Result<EventAccess> {
    let Some(event) = store.event_by_slug(slug).await? else {
        let old = store
            .old_slug(slug)
            .await?
            .ok_or_else(|| Error::event_not_found(slug))?;
        let target = store
            .event_by_id(old.event_id)
            .await?
            .ok_or_else(|| Error::event_not_found(slug))?;
        tracing::debug!(old = %slug, current = %target.slug, "redirecting historical slug");
        return Ok(EventAccess::Redirect { slug: target.slug });
    };

    if !event.is_publicly_viewable() && !requester.active {
        tracing::debug!(slug = %slug, status = %event.status, public = event.public, "event requires login");
        return Ok(EventAccess::LoginRequired);
    }

    Ok(EventAccess::Granted(event))
}

/// Resolve a participant slug.
///
/// Only clearance decides visibility. Unlike events, an active requester
/// does not unlock an uncleared profile.
pub async fn resolve_participant(
    store: &dyn EventStore,
    slug: &str,
    requester: Requester,
) -> Result<ParticipantAccess> {
    let participant = store
        .participant_by_slug(slug)
        .await?
        .ok_or_else(|| Error::participant_not_found(slug))?;

    if participant.cleared != Clearance::Yes {
        tracing::debug!(
            slug = %slug,
            cleared = participant.cleared.as_str(),
            active = requester.active,
            "participant not cleared"
        );
        return Ok(ParticipantAccess::LoginRequired);
    }

    Ok(ParticipantAccess::Granted(participant))
}

/// Public featured events, shown alongside every page.
pub async fn featured_events(store: &dyn EventStore) -> Result<Vec<Event>> {
    store.filter_events(&EventFilter::featured(), 0).await
}
