use crate::pages::{About, Contact, Fallback, Home, Projects, Skills};
use crate::shell::Shell;
use dioxus::prelude::*;
use folio_domain::Page;

/// Client-side route table. Mirrors [`Page`] one to one, plus a catch-all that
/// renders Home for anything outside the table.
#[derive(Debug, Clone, PartialEq, Eq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/Skills")]
        Skills {},
        #[route("/projects")]
        Projects {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        Fallback { segments: Vec<String> },
}

impl Route {
    /// The page this route renders.
    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            Self::Home {} | Self::Fallback { .. } => Page::Home,
            Self::About {} => Page::About,
            Self::Skills {} => Page::Skills,
            Self::Projects {} => Page::Projects,
            Self::Contact {} => Page::Contact,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Self::Home {},
            Page::About => Self::About {},
            Page::Skills => Self::Skills {},
            Page::Projects => Self::Projects {},
            Page::Contact => Self::Contact {},
        }
    }
}
