//! # Observed value cell.
//!
//! [`Property<T>`] wraps a value and announces changes through two events:
//! a veto-able [`changing`](Property::changing) before the write and a
//! [`changed`](Property::changed) after it. Built for the common pattern of
//! a field whose observers want a say before the fact and a notification
//! after it.
//!
//! ## Set pipeline
//!
//! ```text
//!   set(next)
//!     │ next == current ──────────────► Unchanged, no events raised
//!     │
//!     ├─ changing.raise(&Changing)      every subscriber sees the proposal
//!     │    │ any veto() ──────────────► Vetoed, value untouched
//!     │
//!     └─ commit next
//!          changed.raise(&next) ──────► Applied
//! ```
//!
//! No borrow of the stored value is held while either event is raising, so
//! handlers may call [`get`](Property::get) or even [`set`](Property::set)
//! on the same property.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use weakcast::{Changing, Property, SetOutcome};
//!
//! struct Guard;
//!
//! impl Guard {
//!     fn block_negative(&self, change: &Changing<i32>) {
//!         if *change.proposed() < 0 {
//!             change.veto();
//!         }
//!     }
//! }
//!
//! struct Log {
//!     seen: RefCell<Vec<i32>>,
//! }
//!
//! impl Log {
//!     fn note(&self, value: &i32) {
//!         self.seen.borrow_mut().push(*value);
//!     }
//! }
//!
//! let level = Property::new(0);
//! let guard = Rc::new(Guard);
//! let log = Rc::new(Log { seen: RefCell::new(Vec::new()) });
//!
//! let _g = level.changing().add_handler(&guard, Guard::block_negative);
//! let _l = level.changed().add_handler(&log, Log::note);
//!
//! assert_eq!(level.set(3), SetOutcome::Applied);
//! assert_eq!(level.set(3), SetOutcome::Unchanged);
//! assert_eq!(level.set(-1), SetOutcome::Vetoed);
//!
//! assert_eq!(level.get(), 3);
//! assert_eq!(*log.seen.borrow(), vec![3]);
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::events::Event;

use super::changing::Changing;

/// What a call to [`Property::set`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The value changed and `changed` was raised.
    Applied,
    /// The proposed value equalled the current one; nothing was raised.
    Unchanged,
    /// A `changing` subscriber vetoed; the value is untouched.
    Vetoed,
}

impl SetOutcome {
    /// Stable lowercase label, handy for log lines and assertions.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            SetOutcome::Applied => "applied",
            SetOutcome::Unchanged => "unchanged",
            SetOutcome::Vetoed => "vetoed",
        }
    }

    /// Returns `true` when the write went through.
    #[inline]
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, SetOutcome::Applied)
    }
}

/// A value with observable, veto-able writes. Single-threaded.
pub struct Property<T: Clone + PartialEq + 'static> {
    value: RefCell<T>,
    changing: Event<Changing<T>>,
    changed: Event<T>,
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    /// Creates a property holding `initial`. No events are raised.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            changing: Event::new(),
            changed: Event::new(),
        }
    }

    /// A clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Proposes `next` as the new value and reports what happened.
    ///
    /// Equal values short-circuit to [`SetOutcome::Unchanged`] before any
    /// subscriber is involved. Otherwise every `changing` subscriber sees
    /// the proposal; if none vetoed, the value is committed and `changed`
    /// raises with the new value already readable through [`get`](Self::get).
    pub fn set(&self, next: T) -> SetOutcome {
        let unchanged = *self.value.borrow() == next;
        if unchanged {
            return SetOutcome::Unchanged;
        }

        let pending = Changing::new(next);
        self.changing.raise(&pending);
        if pending.is_vetoed() {
            return SetOutcome::Vetoed;
        }

        let committed = pending.into_proposed();
        *self.value.borrow_mut() = committed.clone();
        self.changed.raise(&committed);
        SetOutcome::Applied
    }

    /// The pre-commit event. Subscribers may [`veto`](Changing::veto).
    #[inline]
    pub fn changing(&self) -> &Event<Changing<T>> {
        &self.changing
    }

    /// The post-commit event, raised with the value just written.
    #[inline]
    pub fn changed(&self) -> &Event<T> {
        &self.changed
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.borrow())
            .field("changing_subscribers", &self.changing.subscriber_count())
            .field("changed_subscribers", &self.changed.subscriber_count())
            .finish()
    }
}
