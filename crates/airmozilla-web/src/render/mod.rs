//! HTML rendering for site pages.
//!
//! Each page has a renderer that takes the records a handler resolved and
//! produces a complete HTML document, always including the featured list.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic XSS protection (all dynamic values are escaped).

pub mod components;
pub mod event;
pub mod home;
pub mod page;
pub mod participant;

/// Path of the canonical page for an event slug.
pub fn event_path(slug: &str) -> String {
    format!("/details/{slug}")
}

/// Path of a participant profile.
pub fn participant_path(slug: &str) -> String {
    format!("/participant/{slug}")
}

/// Path of a home page listing page.
pub fn home_page_path(number: u32) -> String {
    if number <= 1 {
        "/".to_string()
    } else {
        format!("/page/{number}")
    }
}
