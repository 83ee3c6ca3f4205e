//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod config;
pub mod contact;
pub mod page;
pub mod project;
pub mod theme;

pub use crate::contact::{ContactDraft, ContactField};
pub use crate::page::Page;
pub use crate::project::Project;
pub use crate::theme::Theme;
