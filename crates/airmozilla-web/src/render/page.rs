//! Static pages. They carry no records of their own beyond the featured list.

use airmozilla_core::Event;
use maud::{Markup, html};

use super::components::{OpenGraphData, page_shell};

/// A page served without any lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticPage {
    About,
    Login,
}

impl StaticPage {
    pub fn path(&self) -> &'static str {
        match self {
            Self::About => "/about",
            Self::Login => "/login",
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Login => "Sign in",
        }
    }
}

/// Render a static page.
pub fn render(page: StaticPage, featured: &[Event], base_url: &str, site_name: &str) -> Markup {
    let title = format!("{} | {site_name}", page.heading());
    let description = format!("{} - {site_name}", page.heading());
    let canonical = format!("{base_url}{}", page.path());

    let og = OpenGraphData {
        title: &title,
        description: &description,
        og_type: "website",
        image: None,
    };

    let body = html! {
        div class="card" {
            h1 class="event-title" { (page.heading()) }
            @match page {
                StaticPage::About => {
                    p class="event-description" {
                        (site_name) " publishes live broadcasts and recordings of public "
                        "talks, meetings and presentations. Live events appear on the home "
                        "page shortly before they start; recordings are listed once they "
                        "have been archived."
                    }
                }
                StaticPage::Login => {
                    p class="event-description" {
                        "This event or profile is only available to signed-in staff. "
                        "Sign in through your organisation's account and try the link again."
                    }
                    p { a href="/" { "Back to the home page" } }
                }
            }
        }
    };

    page_shell(&title, &description, &canonical, og, body, featured, site_name)
}
