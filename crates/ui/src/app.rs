use crate::routes::Route;
use crate::theme::{ThemeHandle, mirror_document_theme, use_theme};
use dioxus::document;
use dioxus::prelude::*;
use folio_domain::config::SiteConfig;

/// Site configuration provided by the launcher, or the built-in defaults.
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}

/// Root composer: theme store, document theme attribute, stylesheet and router.
#[component]
pub fn App() -> Element {
    let config = use_site_config();
    use_context_provider(|| ThemeHandle::new(config.appearance.default_theme));

    let (theme, _) = use_theme();
    use_effect(move || mirror_document_theme(theme()));

    let stylesheet = config.appearance.stylesheet.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: "{stylesheet}" }
        Router::<Route> {}
    }
}
