//! # Subscription handles and their backing entries.
//!
//! [`Event::add_handler`](crate::Event::add_handler) stores one [`Binding`]
//! per registration and returns a [`Subscription`] that shares ownership of
//! it. The handle also keeps a weak link back to the event's entry list, so
//! [`dispose`](crate::Disposable::dispose) can remove exactly its own entry
//! by pointer identity.
//!
//! ## Rules
//!
//! - Disposal is idempotent. Once the entry is out of the list, further
//!   calls find nothing to remove.
//! - Dropping the handle does nothing. A fire-and-forget registration stays
//!   live for as long as its target does.
//! - The link back to the list is weak. Disposing a handle that outlived its
//!   event is a no-op, not an error.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::disposable::Disposable;
use crate::invoke::Invocable;

/// One registered entry, shared by the event's list and the handle.
pub(crate) type Entry<T> = Rc<dyn Invocable<T>>;

/// The list an event delivers from and a handle removes from.
pub(crate) type EntryList<T> = RefCell<Vec<Entry<T>>>;

/// A weak target paired with the handler to call on it.
///
/// The target is held weakly so a registration never extends its lifetime.
/// Upgrade happens per delivery; a failed upgrade skips the call.
pub(crate) struct Binding<U, F> {
    target: Weak<U>,
    handler: F,
}

impl<U, F> Binding<U, F> {
    pub(crate) fn new(target: &Rc<U>, handler: F) -> Self {
        Self {
            target: Rc::downgrade(target),
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

/// Handle for one registration on an [`Event`](crate::Event).
///
/// Disposing removes the matching entry from the event's list. The match is
/// by identity, so two registrations of the same target and handler are
/// still independent.
#[must_use = "dropping the handle keeps the subscription alive but forfeits dispose()"]
pub struct Subscription<T: 'static> {
    entry: Entry<T>,
    list: Weak<EntryList<T>>,
}

impl<T: 'static> Subscription<T> {
    pub(crate) fn new(entry: Entry<T>, list: &Rc<EntryList<T>>) -> Self {
        Self {
            entry,
            list: Rc::downgrade(list),
        }
    }
}

impl<T: 'static> Disposable for Subscription<T> {
    fn dispose(&self) {
        if let Some(list) = self.list.upgrade() {
            list.borrow_mut()
                .retain(|entry| !Rc::ptr_eq(entry, &self.entry));
        }
    }
}
