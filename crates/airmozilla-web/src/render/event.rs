//! Event detail page.
//!
//! Renders the video (or placeholder image), title, times, location and
//! description of a single event.

use airmozilla_core::Event;
use maud::{Markup, html};

use super::components::{OpenGraphData, format_time, is_safe_url, page_shell, truncate};
use super::event_path;

/// Render an event page.
pub fn render(event: &Event, featured: &[Event], base_url: &str, site_name: &str) -> Markup {
    let title = format!("{} | {site_name}", event.title);
    let description = truncate(event.summary(), 200);
    let canonical = format!("{base_url}{}", event_path(&event.slug));

    let thumbnail = event.thumbnail_url.as_deref().filter(|u| is_safe_url(u));
    let video_src = event.video_url.as_deref().filter(|u| is_safe_url(u));

    let og = OpenGraphData {
        title: &event.title,
        description: &description,
        og_type: if video_src.is_some() {
            "video.other"
        } else {
            "website"
        },
        image: thumbnail,
    };

    let started = format_time(event.start_time);
    let archived = format_time(event.archive_time);

    let body = html! {
        div class="card" {
            @if let Some(src) = video_src {
                div class="video" {
                    video controls="" preload="metadata" poster=(thumbnail.unwrap_or("")) {
                        source src=(src) type="video/mp4";
                    }
                }
            } @else if let Some(thumb_url) = thumbnail {
                img class="card-thumb" src=(thumb_url) alt=(event.title) loading="lazy";
            }

            h1 class="event-title" {
                (event.title)
                @if !event.public {
                    span class="private-badge" { "Private" }
                }
            }

            div class="event-meta" {
                @if let Some((display, iso)) = &started {
                    span { "Starts " time datetime=(iso) { (display) } }
                }
                @if let Some((display, iso)) = &archived {
                    span { "Archived " time datetime=(iso) { (display) } }
                }
                @if !event.location.is_empty() {
                    span { (event.location) }
                }
            }

            @if !event.description.is_empty() {
                p class="event-description" { (event.description) }
            }
        }
    };

    page_shell(&title, &description, &canonical, og, body, featured, site_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use airmozilla_core::EventStatus;
    use chrono::{TimeZone, Utc};

    fn event() -> Event {
        Event {
            id: 1,
            slug: "all-hands".to_string(),
            title: "All Hands".to_string(),
            description: "Quarterly update from leadership.".to_string(),
            short_description: String::new(),
            location: "Mountain View".to_string(),
            thumbnail_url: Some("https://cdn.example/thumb.jpg".to_string()),
            video_url: Some("https://cdn.example/video.mp4".to_string()),
            status: EventStatus::Scheduled,
            archive_time: Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()),
            start_time: Some(Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap()),
            public: true,
            featured: false,
        }
    }

    #[test]
    fn renders_video_and_metadata() {
        let html = render(&event(), &[], "https://air.example", "Air Mozilla").into_string();
        assert!(html.contains("<title>All Hands | Air Mozilla</title>"));
        assert!(html.contains("https://air.example/details/all-hands"));
        assert!(html.contains("https://cdn.example/video.mp4"));
        assert!(html.contains("video.other"));
        assert!(html.contains("Jan 01, 2024 17:00 UTC"));
        assert!(html.contains("Mountain View"));
        assert!(html.contains("Quarterly update"));
    }

    #[test]
    fn falls_back_to_thumbnail_without_video() {
        let mut e = event();
        e.video_url = None;
        let html = render(&e, &[], "https://air.example", "Air Mozilla").into_string();
        assert!(!html.contains("<video"));
        assert!(html.contains("https://cdn.example/thumb.jpg"));
        assert!(html.contains("content=\"website\""));
    }

    #[test]
    fn unsafe_video_url_is_dropped() {
        let mut e = event();
        e.video_url = Some("javascript:alert(1)".to_string());
        let html = render(&e, &[], "https://air.example", "Air Mozilla").into_string();
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn includes_featured_sidebar() {
        let mut other = event();
        other.slug = "keynote".to_string();
        other.title = "Keynote".to_string();
        let html = render(&event(), &[other], "https://air.example", "Air Mozilla").into_string();
        assert!(html.contains("/details/keynote"));
    }
}
