//! Shared HTML components used across all pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use airmozilla_core::Event;
use chrono::{DateTime, Utc};
use maud::{Markup, PreEscaped, html};

use super::event_path;

/// Inline CSS for all pages.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#f9f9fa;--fg:#0c0c0d;--fg2:#4a4a4f;--fg3:#8f8f9d;--accent:#0060df;--accent-hover:#003eaa;--live:#d70022;--surface:#fff;--border:rgba(12,12,13,.1);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto}

.site-header{width:100%;max-width:980px;display:flex;align-items:center;justify-content:space-between;margin-bottom:1.5rem}
.site-name{font-size:1.5rem;font-weight:800;letter-spacing:-.03em;color:var(--fg)}
.site-nav{display:flex;gap:1rem;font-size:.9rem}

.layout{width:100%;max-width:980px;display:grid;grid-template-columns:1fr 260px;gap:2rem;flex:1}
@media(max-width:760px){.layout{grid-template-columns:1fr}}
main{min-width:0}

.section-title{font-size:.8rem;font-weight:700;text-transform:uppercase;letter-spacing:.06em;color:var(--fg3);margin:1.5rem 0 .75rem}
.section-title:first-child{margin-top:0}

.card{padding:1.25rem;border:1px solid var(--border);border-radius:8px;background:var(--surface);margin-bottom:1rem}
.card h2{font-size:1.15rem;font-weight:700;line-height:1.3}
.card h2 a{color:var(--fg)}
.card h2 a:hover{color:var(--accent);text-decoration:none}
.card-meta{font-size:.85rem;color:var(--fg3);margin:.25rem 0 .5rem}
.card-summary{color:var(--fg2);font-size:.95rem}
.card-thumb{width:100%;aspect-ratio:16/9;object-fit:cover;border-radius:6px;margin-bottom:.75rem;background:#000}

.live-card{border-color:var(--live)}
.live-badge{display:inline-block;background:var(--live);color:#fff;font-size:.7rem;font-weight:700;padding:.1rem .5rem;border-radius:100px;letter-spacing:.05em;text-transform:uppercase;margin-bottom:.5rem}
.private-badge{display:inline-block;border:1px solid var(--border);color:var(--fg3);font-size:.7rem;font-weight:600;padding:.1rem .5rem;border-radius:100px;text-transform:uppercase;margin-left:.35rem}

.event-title{font-size:1.75rem;font-weight:700;letter-spacing:-.02em;line-height:1.25;margin-bottom:.5rem}
.event-meta{display:flex;gap:1.25rem;flex-wrap:wrap;font-size:.9rem;color:var(--fg3);margin-bottom:1rem}
.event-description{white-space:pre-wrap;word-break:break-word;color:var(--fg2);line-height:1.7;font-size:1.02rem}
.video{margin:0 0 1rem;border-radius:8px;overflow:hidden;background:#000}
.video video{width:100%;display:block}

.profile-header{display:flex;align-items:center;gap:1rem;margin-bottom:1rem}
.profile-pic{width:96px;height:96px;border-radius:50%;background:var(--accent);flex-shrink:0;display:flex;align-items:center;justify-content:center;color:#fff;font-weight:700;font-size:2.2rem;text-transform:uppercase;overflow:hidden;position:relative}
.profile-pic img{position:absolute;inset:0;width:100%;height:100%;object-fit:cover}
.profile-name{font-size:1.6rem;font-weight:700;letter-spacing:-.02em}
.profile-role{color:var(--fg3);font-size:.95rem}
.profile-about{margin:.75rem 0;white-space:pre-wrap;word-break:break-word;color:var(--fg2)}
.profile-meta{display:flex;gap:1.25rem;flex-wrap:wrap;font-size:.9rem;color:var(--fg3)}

.featured{font-size:.9rem}
.featured ul{list-style:none}
.featured li{padding:.5rem 0;border-bottom:1px solid var(--border)}
.featured li:last-child{border-bottom:none}

.pager{display:flex;justify-content:space-between;align-items:center;margin:1rem 0;font-size:.9rem;color:var(--fg3)}
.empty{color:var(--fg3);font-size:.95rem}

.footer{text-align:center;margin-top:2rem;padding-top:.75rem;font-size:.8rem;color:var(--fg3);width:100%;max-width:980px}

@media(prefers-color-scheme:dark){
:root{--bg:#0c0c0d;--fg:#f9f9fa;--fg2:#b1b1b3;--fg3:#737373;--accent:#45a1ff;--accent-hover:#80ebff;--surface:#18181a;--border:rgba(249,249,250,.12)}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#f9f9fa;color:#0c0c0d;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#4a4a4f;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#0060df}
@media(prefers-color-scheme:dark){
body{background:#0c0c0d;color:#f9f9fa}
.error-page p{color:#b1b1b3}
.error-page a{color:#45a1ff}
}
"#;

/// Content-Security-Policy header value.
///
/// Inline styles only, no scripts. Media may come from any HTTPS origin.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src https: data:; media-src https:; form-action 'none'; frame-ancestors 'none'";

/// Open Graph metadata for a page.
pub struct OpenGraphData<'a> {
    /// OG title.
    pub title: &'a str,
    /// OG description.
    pub description: &'a str,
    /// OG type (e.g., "website", "video.other", "profile").
    pub og_type: &'a str,
    /// OG image URL.
    pub image: Option<&'a str>,
}

/// Render the full HTML page shell: head, site header, main column and the
/// featured sidebar.
pub fn page_shell(
    title: &str,
    description: &str,
    canonical_url: &str,
    og: OpenGraphData<'_>,
    body_content: Markup,
    featured: &[Event],
    site_name: &str,
) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                link rel="canonical" href=(canonical_url);

                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:url" content=(canonical_url);
                meta property="og:site_name" content=(site_name);
                meta property="og:type" content=(og.og_type);
                @if let Some(image) = og.image {
                    meta property="og:image" content=(image);
                }

                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="site-header" {
                    a class="site-name" href="/" { (site_name) }
                    nav class="site-nav" {
                        a href="/" { "Home" }
                        a href="/about" { "About" }
                    }
                }
                div class="layout" {
                    main { (body_content) }
                    (featured_sidebar(featured))
                }
                footer class="footer" {
                    (site_name) " - live and recorded events"
                }
            }
        }
    }
}

/// Sidebar listing featured events.
pub fn featured_sidebar(featured: &[Event]) -> Markup {
    html! {
        aside class="featured" {
            h3 class="section-title" { "Featured" }
            @if featured.is_empty() {
                p class="empty" { "Nothing featured right now." }
            } @else {
                ul {
                    @for event in featured {
                        li {
                            a href=(event_path(&event.slug)) { (event.title) }
                        }
                    }
                }
            }
        }
    }
}

/// A listing card for one event.
pub fn event_card(event: &Event, live: bool) -> Markup {
    let when = if live {
        format_time(event.start_time)
    } else {
        format_time(event.archive_time.or(event.start_time))
    };
    let thumbnail = event.thumbnail_url.as_deref().filter(|u| is_safe_url(u));

    html! {
        article.card.live-card[live] {
            @if live {
                span class="live-badge" { "Live" }
            }
            @if let Some(src) = thumbnail {
                a href=(event_path(&event.slug)) {
                    img class="card-thumb" src=(src) alt=(event.title) loading="lazy";
                }
            }
            h2 {
                a href=(event_path(&event.slug)) { (event.title) }
                @if !event.public {
                    span class="private-badge" { "Private" }
                }
            }
            @if let Some((display, iso)) = when {
                div class="card-meta" {
                    time datetime=(iso) { (display) }
                    @if !event.location.is_empty() {
                        " \u{b7} " (event.location)
                    }
                }
            }
            @let summary = event.summary();
            @if !summary.is_empty() {
                p class="card-summary" { (truncate(summary, 240)) }
            }
        }
    }
}

/// Format a timestamp as ("Mon DD, YYYY HH:MM UTC", ISO 8601).
pub fn format_time(time: Option<DateTime<Utc>>) -> Option<(String, String)> {
    let ts = time?;
    let display = ts.format("%b %d, %Y %H:%M UTC").to_string();
    let iso = ts.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    Some((display, iso))
}

/// Check if a URL is safe to use in `src` or `href` attributes.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Truncate a string to a maximum length, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airmozilla_core::EventStatus;
    use chrono::TimeZone;

    fn event() -> Event {
        Event {
            id: 1,
            slug: "all-hands".to_string(),
            title: "All Hands".to_string(),
            description: "Full description".to_string(),
            short_description: String::new(),
            location: "Mountain View".to_string(),
            thumbnail_url: Some("javascript:alert(1)".to_string()),
            video_url: None,
            status: EventStatus::Scheduled,
            archive_time: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            start_time: None,
            public: true,
            featured: false,
        }
    }

    // -- truncate() tests --

    #[test]
    fn truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_long_string() {
        let long = "a".repeat(300);
        let result = truncate(&long, 100);
        assert_eq!(result.len(), 103);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let s = "\u{e9}\u{e9}\u{e9}";
        assert_eq!(truncate(s, 3), "\u{e9}...");
    }

    // -- is_safe_url() tests --

    #[test]
    fn is_safe_url_schemes() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("http://example.com"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("/relative"));
        assert!(!is_safe_url(""));
    }

    // -- format_time() tests --

    #[test]
    fn format_time_none() {
        assert!(format_time(None).is_none());
    }

    #[test]
    fn format_time_valid() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let (display, iso) = format_time(Some(ts)).unwrap();
        assert_eq!(display, "Jan 01, 2024 00:00 UTC");
        assert_eq!(iso, "2024-01-01T00:00:00Z");
    }

    // -- event_card() tests --

    #[test]
    fn event_card_links_to_details_page() {
        let html = event_card(&event(), false).into_string();
        assert!(html.contains("href=\"/details/all-hands\""));
        assert!(html.contains("All Hands"));
        assert!(html.contains("Jan 01, 2024"));
        assert!(html.contains("Mountain View"));
        assert!(!html.contains("live-badge"));
    }

    #[test]
    fn event_card_drops_unsafe_thumbnail() {
        let html = event_card(&event(), false).into_string();
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn event_card_marks_live_and_private() {
        let mut e = event();
        e.public = false;
        let html = event_card(&e, true).into_string();
        assert!(html.contains("live-badge"));
        assert!(html.contains("Private"));
    }

    #[test]
    fn event_card_escapes_title() {
        let mut e = event();
        e.title = "<script>x</script>".to_string();
        let html = event_card(&e, false).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    // -- featured_sidebar() tests --

    #[test]
    fn featured_sidebar_empty() {
        let html = featured_sidebar(&[]).into_string();
        assert!(html.contains("Nothing featured"));
    }

    #[test]
    fn featured_sidebar_lists_events() {
        let html = featured_sidebar(&[event()]).into_string();
        assert!(html.contains("/details/all-hands"));
    }
}
