//! # Single-threaded typed event.
//!
//! [`Event<T>`] is a broadcast point for values of one payload type. Targets
//! subscribe with a handler, the publisher raises payloads, and every live
//! subscriber hears every raise in the order subscriptions were added.
//!
//! Targets are held weakly. An `Event` never keeps a subscriber alive, and a
//! subscriber that has been dropped is skipped without any bookkeeping on
//! the caller's side.
//!
//! ## Delivery rules
//!
//! - Delivery is synchronous. `raise` returns after the last handler ran.
//! - Entries fire in registration order, each with a reference to the same
//!   payload.
//! - `raise` iterates a snapshot taken up front. Handlers may add or dispose
//!   subscriptions on the event they are being called from: an addition is
//!   only guaranteed delivery from the next raise on (whether the in-flight
//!   raise sees it is unspecified), and an entry disposed mid-raise still
//!   receives the raise it was snapshotted into.
//! - Dead entries are reclaimed according to the event's [`SweepPolicy`].
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use weakcast::{Disposable, Event};
//!
//! struct Recorder {
//!     seen: RefCell<Vec<i32>>,
//! }
//!
//! impl Recorder {
//!     fn record(&self, value: &i32) {
//!         self.seen.borrow_mut().push(*value);
//!     }
//! }
//!
//! let event = Event::new();
//! let recorder = Rc::new(Recorder { seen: RefCell::new(Vec::new()) });
//! let sub = event.add_handler(&recorder, Recorder::record);
//!
//! event.raise(&1);
//! event.raise(&2);
//! sub.dispose();
//! event.raise(&3);
//!
//! assert_eq!(*recorder.seen.borrow(), vec![1, 2]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::policies::SweepPolicy;

use super::subscription::{Binding, Entry, EntryList, Subscription};

/// A typed broadcast point for single-threaded use.
///
/// See the [module docs](self) for the delivery rules.
pub struct Event<T: 'static> {
    entries: Rc<EntryList<T>>,
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
            entries: Rc::new(RefCell::new(Vec::new())),
            sweep,
        }
    }

    /// Subscribes `handler` to run against `target` on every raise.
    ///
    /// The target is captured weakly; the registration never extends its
    /// lifetime. `handler` is typically a plain method path such as
    /// `Recorder::record`, but any `Fn(&U, &T)` closure works.
    ///
    /// The same target may be registered any number of times, with the same
    /// handler or different ones. Each call adds an independent entry and
    /// returns the handle for exactly that entry.
    pub fn add_handler<U, F>(&self, target: &Rc<U>, handler: F) -> Subscription<T>
    where
        U: 'static,
        F: Fn(&U, &T) + 'static,
    {
        let entry: Entry<T> = Rc::new(Binding::new(target, handler));
        self.entries.borrow_mut().push(Rc::clone(&entry));
        Subscription::new(entry, &self.entries)
    }

    /// Delivers `payload` to every live subscriber, in registration order.
    ///
    /// Iterates a snapshot of the current entries, so handlers are free to
    /// subscribe or dispose on this same event. With
    /// [`SweepPolicy::AfterRaise`] the entry list is purged of dead targets
    /// before returning.
    ///
    /// # Panics
    ///
    /// A panicking handler propagates out of `raise`; remaining entries in
    /// the snapshot are not invoked.
    pub fn raise(&self, payload: &T) {
        let snapshot: Vec<Entry<T>> = self.entries.borrow().clone();
        for entry in &snapshot {
            entry.invoke(payload);
        }
        if self.sweep.sweeps_after_raise() {
            self.purge();
        }
    }

    /// Removes entries whose targets have been dropped.
    ///
    /// Only needed under [`SweepPolicy::Manual`]; calling it under
    /// [`SweepPolicy::AfterRaise`] is harmless.
    pub fn purge(&self) {
        self.entries.borrow_mut().retain(|entry| entry.is_live());
    }

    /// Current number of entries, live or not.
    #[inline]
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` when no entries are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
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
