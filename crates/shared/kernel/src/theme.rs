//! Observable light/dark theme value.
//!
//! The store is single-threaded: it lives on the UI thread and notifies every
//! subscriber synchronously from inside [`ThemeStore::toggle`].

use folio_domain::Theme;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Handle returned by [`ThemeStore::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Rc<dyn Fn(Theme)>;

pub struct ThemeStore {
    theme: Cell<Theme>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback)>>,
}

impl ThemeStore {
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        Self { theme: Cell::new(initial), next_id: Cell::new(0), subscribers: RefCell::default() }
    }

    #[must_use]
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    /// Flips the theme and notifies subscribers with the new value.
    ///
    /// Callbacks are snapshotted before notification, so a callback may toggle
    /// again or (un)subscribe without poisoning the store. A subscriber removed
    /// by an earlier callback in the same round is skipped.
    pub fn toggle(&self) -> Theme {
        let next = self.theme.get().toggled();
        self.theme.set(next);
        debug!(theme = %next, "Theme toggled");

        let snapshot: Vec<(SubscriptionId, Callback)> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in snapshot {
            if self.is_subscribed(id) {
                callback(next);
            }
        }

        next
    }

    pub fn subscribe(&self, callback: impl Fn(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Returns `false` if `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.borrow().iter().any(|(existing, _)| *existing == id)
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_returns_new_value() {
        let store = ThemeStore::new(Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.get(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
    }

    #[test]
    fn subscribers_see_every_change_synchronously() {
        let store = ThemeStore::new(Theme::Light);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |theme| sink.borrow_mut().push(theme));

        store.toggle();
        assert_eq!(*seen.borrow(), [Theme::Dark]);
        store.toggle();
        assert_eq!(*seen.borrow(), [Theme::Dark, Theme::Light]);
    }

    #[test]
    fn unsubscribed_callbacks_are_not_called() {
        let store = ThemeStore::default();
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));
        store.toggle();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle();

        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn callbacks_may_reenter_the_store() {
        let store = Rc::new(ThemeStore::new(Theme::Dark));
        let inner = Rc::clone(&store);
        let seen = Rc::new(Cell::new(None));

        let sink = Rc::clone(&seen);
        store.subscribe(move |theme| {
            sink.set(Some(theme));
            let _ = inner.subscriber_count();
        });

        store.toggle();
        assert_eq!(seen.get(), Some(Theme::Light));
    }

    #[test]
    fn subscriber_removed_mid_round_is_skipped() {
        let store = Rc::new(ThemeStore::default());
        let late_calls = Rc::new(Cell::new(0));
        let late_id = Rc::new(Cell::new(None));

        let remover = Rc::clone(&store);
        let target = Rc::clone(&late_id);
        store.subscribe(move |_| {
            if let Some(id) = target.get() {
                remover.unsubscribe(id);
            }
        });

        let counter = Rc::clone(&late_calls);
        late_id.set(Some(store.subscribe(move |_| counter.set(counter.get() + 1))));

        store.toggle();
        assert_eq!(late_calls.get(), 0);
    }
}
