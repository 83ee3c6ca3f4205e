//! Client-side route table.
//!
//! Paths are matched exactly and case-sensitively (`/Skills` is not `/skills`).
//! Anything outside the table resolves to [`Page::Home`]; there is no 404 page.

use strum_macros::{Display, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum Page {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Page {
    /// Every page in navigation order.
    pub const ALL: [Self; 5] = [Self::Home, Self::About, Self::Skills, Self::Projects, Self::Contact];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Skills => "/Skills",
            Self::Projects => "/projects",
            Self::Contact => "/contact",
        }
    }

    /// Navigation label shown in the header.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Looks up the page registered for `path`, falling back to [`Page::Home`].
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        Self::ALL.into_iter().find(|page| page.path() == path).unwrap_or(Self::Home)
    }
}
