//! Home page: live now, upcoming, and a page of past events.

use airmozilla_core::{Page, Schedule};
use maud::{Markup, html};

use super::components::{OpenGraphData, event_card, format_time, page_shell};
use super::{event_path, home_page_path};

/// Render the home page for one classified schedule.
pub fn render(schedule: &Schedule, base_url: &str, site_name: &str) -> Markup {
    let title = if schedule.past.number > 1 {
        format!("{site_name} - page {}", schedule.past.number)
    } else {
        site_name.to_string()
    };
    let description = format!("Live and recorded events from {site_name}.");
    let canonical = format!("{base_url}{}", home_page_path(schedule.past.number));

    let og = OpenGraphData {
        title: &title,
        description: &description,
        og_type: "website",
        image: None,
    };

    let body = html! {
        @if let Some(live) = &schedule.live {
            h3 class="section-title" { "Live now" }
            (event_card(live, true))
            @if !schedule.also_live.is_empty() {
                h3 class="section-title" { "Also live" }
                @for event in &schedule.also_live {
                    (event_card(event, true))
                }
            }
        }

        @if !schedule.upcoming.is_empty() {
            h3 class="section-title" { "Upcoming" }
            div class="card" {
                ul class="upcoming" {
                    @for event in &schedule.upcoming {
                        li {
                            a href=(event_path(&event.slug)) { (event.title) }
                            @if let Some((display, iso)) = format_time(event.start_time) {
                                " " time class="card-meta" datetime=(iso) { (display) }
                            }
                        }
                    }
                }
            }
        }

        h3 class="section-title" { "Recent events" }
        @if schedule.past.is_empty() {
            p class="empty" { "No archived events yet." }
        } @else {
            @for event in &schedule.past.items {
                (event_card(event, false))
            }
        }
        (pager(&schedule.past))
    };

    page_shell(
        &title,
        &description,
        &canonical,
        og,
        body,
        &schedule.featured,
        site_name,
    )
}

/// Previous/next links for a listing page.
fn pager<T>(page: &Page<T>) -> Markup {
    html! {
        @if page.num_pages > 1 {
            nav class="pager" {
                span {
                    @if let Some(prev) = page.previous_number() {
                        a href=(home_page_path(prev)) rel="prev" { "Newer" }
                    }
                }
                span { "Page " (page.number) " of " (page.num_pages) }
                span {
                    @if let Some(next) = page.next_number() {
                        a href=(home_page_path(next)) rel="next" { "Older" }
                    }
                }
            }
        }
    }
}
