//! # Handles for the thread-safe flavor.
//!
//! Same shape as the single-threaded plumbing, with `Arc`/`Weak` in place of
//! their `rc` counterparts and the entry list behind a
//! [`Mutex`](parking_lot::Mutex). Disposal removes by pointer identity and
//! stays idempotent; the back-link to the list is weak, so handles that
//! outlive their event dispose into nothing.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::disposable::Disposable;
use crate::invoke::Invocable;

pub(crate) type Entry<T> = Arc<dyn Invocable<T> + Send + Sync>;

pub(crate) type EntryList<T> = Mutex<Vec<Entry<T>>>;

/// A weak target paired with the handler to call on it.
pub(crate) struct Binding<U, F> {
    target: Weak<U>,
    handler: F,
}

impl<U, F> Binding<U, F> {
    pub(crate) fn new(target: &Arc<U>, handler: F) -> Self {
        Self {
            target: Arc::downgrade(target),
            handler,
        }
    }
}

impl<U, T, F> Invocable<T> for Binding<U, F>
where
    F: Fn(&U, &T),
{
    fn invoke(&self, payload: &T) {
        if let Some(target) = self.target.upgrade() {
            (self.handler)(&*target, payload);
        }
    }

    fn is_live(&self) -> bool {
        self.target.strong_count() > 0
    }
}

/// Handle for one registration on a [`sync::Event`](crate::sync::Event).
#[must_use = "dropping the handle keeps the subscription alive but forfeits dispose()"]
pub struct Subscription<T: 'static> {
    entry: Entry<T>,
    list: Weak<EntryList<T>>,
}

impl<T: 'static> Subscription<T> {
    pub(crate) fn new(entry: Entry<T>, list: &Arc<EntryList<T>>) -> Self {
        Self {
            entry,
            list: Arc::downgrade(list),
        }
    }
}

impl<T: 'static> Disposable for Subscription<T> {
    fn dispose(&self) {
        if let Some(list) = self.list.upgrade() {
            list.lock().retain(|entry| !Arc::ptr_eq(entry, &self.entry));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::sync::Event;
    use crate::Disposable;

    #[derive(Default)]
    struct Counter {
        hits: AtomicUsize,
    }

    impl Counter {
        fn bump(&self, _value: &u8) {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_duplicate_registration_delivers_twice() {
        let event: Event<u8> = Event::new();
        let counter = Arc::new(Counter::default());

        let _first = event.add_handler(&counter, Counter::bump);
        let _second = event.add_handler(&counter, Counter::bump);

        event.raise(&1);

        assert_eq!(
            counter.hits.load(Ordering::SeqCst),
            2,
            "each registration must deliver on its own"
        );
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let event: Event<u8> = Event::new();
        let counter = Arc::new(Counter::default());

        let sub = event.add_handler(&counter, Counter::bump);
        let _keep = event.add_handler(&counter, Counter::bump);

        sub.dispose();
        sub.dispose();
        event.raise(&1);

        assert_eq!(
            counter.hits.load(Ordering::SeqCst),
            1,
            "second dispose must not remove another entry"
        );
    }

    #[test]
    fn test_dispose_after_event_drop_is_noop() {
        let event: Event<u8> = Event::new();
        let counter = Arc::new(Counter::default());
        let sub = event.add_handler(&counter, Counter::bump);

        drop(event);

        sub.dispose();
        sub.dispose();
    }
}
