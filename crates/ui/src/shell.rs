//! Persistent chrome around every page.

use crate::app::use_site_config;
use crate::routes::Route;
use crate::theme::use_theme;
use dioxus::prelude::*;
use folio_domain::Page;

/// Layout route: header, the active page, footer.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Header {}
        Outlet::<Route> {}
        Footer {}
    }
}

/// One link per route plus the theme toggle.
#[component]
pub fn Header() -> Element {
    let (theme, store) = use_theme();
    let next = theme().toggled();

    rsx! {
        header {
            nav {
                for page in Page::ALL {
                    Link { key: "{page}", to: Route::from(page), active_class: "active", "{page}" }
                }
            }
            button {
                class: "theme-toggle",
                title: "Switch to {next} theme",
                onclick: move |_| {
                    store.toggle();
                },
                "Toggle Theme"
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let config = use_site_config();
    let year = config.owner.copyright_year;
    let owner = config.owner.name.clone();

    rsx! {
        footer {
            p { "© {year} {owner}. All rights reserved." }
        }
    }
}
