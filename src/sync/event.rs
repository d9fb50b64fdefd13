//! # Thread-safe typed event.
//!
//! The cross-thread twin of [`events::Event`](crate::Event). Targets live in
//! [`Arc`](std::sync::Arc), the entry list sits behind a
//! [`Mutex`](parking_lot::Mutex), and any thread holding a reference to the
//! event may subscribe or raise.
//!
//! ## Locking contract
//!
//! The lock guards the entry list only, never handler execution. `raise`
//! snapshots the entries under the lock, releases it, then invokes the
//! snapshot. Handlers therefore run without any crate lock held and are free
//! to subscribe, dispose, or raise again on the same event. The cost is the
//! same relaxation as re-entrancy on the single-threaded flavor: an entry
//! disposed after the snapshot was taken can still see one in-flight raise.
//!
//! The event handle itself is `Send + Sync` for any payload type; the
//! payload only needs to exist on the thread that raises it.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::policies::SweepPolicy;

use super::subscription::{Binding, Entry, EntryList, Subscription};

/// A typed broadcast point that may be shared across threads.
///
/// Delivery rules match the single-threaded [`Event`](crate::Event):
/// registration order, snapshot iteration, weak targets, sweep policy. See
/// the [module docs](self) for what the lock does and does not cover.
pub struct Event<T: 'static> {
    entries: Arc<EntryList<T>>,
    sweep: SweepPolicy,
}

impl<T: 'static> Event<T> {
    /// Creates an event with the default sweep policy,
    /// [`SweepPolicy::AfterRaise`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_sweep(SweepPolicy::default())
    }

    /// Creates an event with an explicit sweep policy.
    #[must_use]
    pub fn with_sweep(sweep: SweepPolicy) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            sweep,
        }
    }

    /// Subscribes `handler` to run against `target` on every raise.
    ///
    /// The target is captured weakly. Handlers may be invoked from whichever
    /// thread calls [`raise`](Event::raise), so both the target and the
    /// handler must be `Send + Sync`.
    pub fn add_handler<U, F>(&self, target: &Arc<U>, handler: F) -> Subscription<T>
    where
        U: Send + Sync + 'static,
        F: Fn(&U, &T) + Send + Sync + 'static,
    {
        let entry: Entry<T> = Arc::new(Binding::new(target, handler));
        self.entries.lock().push(Arc::clone(&entry));
        Subscription::new(entry, &self.entries)
    }

    /// Delivers `payload` to every live subscriber, in registration order.
    ///
    /// The entry list lock is held only while the snapshot is taken, so
    /// handlers run lock-free and concurrent raises from other threads are
    /// not serialized against handler execution.
    ///
    /// # Panics
    ///
    /// A panicking handler propagates out of `raise`; remaining entries in
    /// the snapshot are not invoked. The entry list itself stays consistent.
    pub fn raise(&self, payload: &T) {
        let snapshot: Vec<Entry<T>> = self.entries.lock().clone();
        for entry in &snapshot {
            entry.invoke(payload);
        }
        if self.sweep.sweeps_after_raise() {
            self.purge();
        }
    }

    /// Removes entries whose targets have been dropped.
    pub fn purge(&self) {
        self.entries.lock().retain(|entry| entry.is_live());
    }

    /// Current number of entries, live or not.
    #[inline]
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` when no entries are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// The sweep policy this event was built with.
    #[inline]
    #[must_use]
    pub fn sweep_policy(&self) -> SweepPolicy {
        self.sweep
    }
}

impl<T: 'static> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("subscribers", &self.subscriber_count())
            .field("sweep", &self.sweep)
            .finish()
    }
}
