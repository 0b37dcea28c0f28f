//! Core types and visibility rules for the Air Mozilla event site.
//!
//! This crate provides:
//! - The records the site reads (events, historical slugs, participants)
//! - Filter predicates and page arithmetic
//! - Classification of events into past, live and upcoming
//! - Access decisions for event and participant pages
//! - The [`EventStore`] trait and an in-memory implementation
//!
//! Nothing here reads the clock or the request: `now` and the [`Requester`]
//! are always passed in.

pub mod access;
mod error;
pub mod filter;
mod model;
pub mod pagination;
pub mod schedule;
mod store;

pub use access::{
    EventAccess, ParticipantAccess, featured_events, resolve_event, resolve_participant,
};
pub use error::{Error, Result, StoreError};
pub use filter::{ArchivePredicate, EventFilter, EventOrder};
pub use model::{Clearance, Event, EventOldSlug, EventStatus, Participant, Requester};
pub use pagination::{PAST_EVENTS_PER_PAGE, Page, Paginator};
pub use schedule::{LiveWindow, Schedule, UPCOMING_LIMIT, classify};
pub use store::{EventStore, MemoryStore};
