//! Kernel behaviour shared by every front end.
//! Keep this crate free of UI code: it owns the state machines the components drive,
//! the GitHub client, and config loading.
//!
//! ## Theme store
//! ```rust
//! # use folio_kernel::theme::ThemeStore;
//! # use folio_kernel::domain::Theme;
//! let store = ThemeStore::new(Theme::Dark);
//! assert_eq!(store.toggle(), Theme::Light);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use folio_kernel::config::load_embedded;
//! let cfg: folio_kernel::domain::config::SiteConfig = load_embedded(include_str!("site.toml"))?;
//! ```
pub mod config;
pub mod contact;
mod error;
pub mod projects;
pub mod theme;

pub use folio_domain as domain;
