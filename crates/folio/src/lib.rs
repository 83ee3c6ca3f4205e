//! Facade crate for the portfolio.
//! Re-exports domain/kernel primitives and, with the `client` feature, the Dioxus UI.
//! Keep this crate thin: it should compose other crates, not implement behaviour.
//!
//! ## Usage
//! - Add `folio` with the `client` feature from a launcher crate.
//! - Load a [`domain::config::SiteConfig`], provide it as root context and mount `ui::App`.

pub use folio_domain as domain;
pub use folio_kernel as kernel;
#[cfg(feature = "client")]
pub use folio_ui as ui;

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Site configuration compiled into launchers as the fallback source.
pub const DEFAULT_SITE: &str = include_str!("../site.toml");
