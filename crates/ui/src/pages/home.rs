use crate::app::use_site_config;
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn Home() -> Element {
    let config = use_site_config();
    let profile_image = config.owner.profile_image.clone();

    rsx! {
        main { class: "home-container",
            div { class: "text-content",
                h1 { "Всем Приветик)" }
                p { "Меня зовут Марина и это мое портфолио)))" }
            }
            img { src: "{profile_image}", alt: "Profile", class: "profile-image" }
        }
    }
}

/// Paths outside the table land on Home.
#[component]
pub fn Fallback(segments: Vec<String>) -> Element {
    debug!(path = %segments.join("/"), "Unknown path, rendering home");
    rsx! {
        Home {}
    }
}
