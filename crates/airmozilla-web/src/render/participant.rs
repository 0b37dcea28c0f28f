//! Participant (speaker) profile page.

use airmozilla_core::{Event, Participant};
use maud::{Markup, html};

use super::components::{OpenGraphData, is_safe_url, page_shell, truncate};
use super::participant_path;

/// Render a participant profile page.
pub fn render(
    participant: &Participant,
    featured: &[Event],
    base_url: &str,
    site_name: &str,
) -> Markup {
    let name = participant.name.as_str();
    let title = format!("{name} | {site_name}");
    let description = if participant.description.is_empty() {
        format!("{name} on {site_name}")
    } else {
        truncate(&participant.description, 200)
    };
    let canonical = format!("{base_url}{}", participant_path(&participant.slug));
    let photo = participant.photo_url.as_deref().filter(|u| is_safe_url(u));

    let og = OpenGraphData {
        title: name,
        description: &description,
        og_type: "profile",
        image: photo,
    };

    let initial = name
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    let affiliation: Vec<&str> = [participant.department.as_str(), participant.team.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();

    let body = html! {
        div class="card" {
            div class="profile-header" {
                div class="profile-pic" {
                    (initial.as_str())
                    @if let Some(src) = photo {
                        img src=(src) alt=(name) loading="lazy";
                    }
                }
                div {
                    div class="profile-name" { (name) }
                    @if !participant.role.is_empty() {
                        div class="profile-role" { (participant.role) }
                    }
                }
            }

            @if !participant.description.is_empty() {
                p class="profile-about" { (participant.description) }
            }

            div class="profile-meta" {
                @if !affiliation.is_empty() {
                    span { (affiliation.join(", ")) }
                }
                @if let Some(blog) = participant.blog_url.as_deref() {
                    @if is_safe_url(blog) {
                        a href=(blog) rel="nofollow noopener" target="_blank" {
                            (truncate(blog.strip_prefix("https://").or_else(|| blog.strip_prefix("http://")).unwrap_or(blog), 40))
                        }
                    }
                }
                @if !participant.twitter.is_empty() {
                    @let handle = participant.twitter.trim_start_matches('@');
                    a href={ "https://twitter.com/" (handle) } rel="nofollow noopener" target="_blank" {
                        "@" (handle)
                    }
                }
            }
        }
    };

    page_shell(&title, &description, &canonical, og, body, featured, site_name)
}
