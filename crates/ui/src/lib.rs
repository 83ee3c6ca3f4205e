//! # UI
//!
//! Dioxus components for the portfolio. [`App`] is the root composer: it owns the
//! theme store, mirrors the theme onto the document and mounts the [`Route`] table
//! inside the navigation [`shell::Shell`].
//!
//! Renderer-agnostic: a launcher mounts [`App`] and provides a
//! [`folio_domain::config::SiteConfig`] as root context.

mod app;
pub mod pages;
mod routes;
pub mod shell;
pub mod theme;

pub use crate::app::{App, use_site_config};
pub use crate::routes::Route;
