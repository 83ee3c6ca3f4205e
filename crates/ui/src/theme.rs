//! Theme wiring between the kernel [`ThemeStore`] and Dioxus signals.
//!
//! The store is provided as context by [`crate::App`]; components subscribe through
//! [`use_theme`] and are unsubscribed when they unmount.

use dioxus::document;
use dioxus::prelude::*;
use folio_domain::Theme;
use folio_kernel::theme::ThemeStore;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use tracing::debug;

/// Shared handle to the page's theme store. Compares by identity.
#[derive(Clone)]
pub struct ThemeHandle(Rc<ThemeStore>);

impl ThemeHandle {
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        Self(Rc::new(ThemeStore::new(initial)))
    }
}

impl Deref for ThemeHandle {
    type Target = ThemeStore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for ThemeHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ThemeHandle").field(&*self.0).finish()
    }
}

/// Subscribes the calling component to the theme store.
///
/// Returns a signal tracking the current theme and the store handle for toggling.
/// The subscription is dropped together with the component.
pub fn use_theme() -> (Signal<Theme>, ThemeHandle) {
    let store = use_context::<ThemeHandle>();
    let theme = use_signal(|| store.get());

    let subscription = use_hook(|| {
        store.subscribe(move |next| {
            let mut theme = theme;
            theme.set(next);
        })
    });

    use_drop({
        let store = store.clone();
        move || {
            store.unsubscribe(subscription);
        }
    });

    (theme, store)
}

/// Mirrors the theme onto `<html data-theme="...">` for stylesheet selection.
pub fn mirror_document_theme(theme: Theme) {
    let _ = document::eval(&theme_script(theme));
    debug!(%theme, "Document theme updated");
}

fn theme_script(theme: Theme) -> String {
    format!("document.documentElement.setAttribute('data-theme', '{theme}');")
}
