//! # Pre-commit change proposal.
//!
//! The payload type raised on [`Property::changing`](super::Property::changing).
//! Carries the proposed value and a veto flag any handler may set. The fan-out
//! is never short-circuited: every changing subscriber sees the proposal, and
//! the property checks the flag once all of them have run.

use std::cell::Cell;

/// A proposed value change, open to veto while its raise is in flight.
#[derive(Debug)]
pub struct Changing<T> {
    proposed: T,
    vetoed: Cell<bool>,
}

impl<T> Changing<T> {
    pub(crate) fn new(proposed: T) -> Self {
        Self {
            proposed,
            vetoed: Cell::new(false),
        }
    }

    /// The value the property is about to take.
    #[inline]
    #[must_use]
    pub fn proposed(&self) -> &T {
        &self.proposed
    }

    /// Rejects the change. Sticky: once set, no handler can clear it.
    #[inline]
    pub fn veto(&self) {
        self.vetoed.set(true);
    }

    /// Returns `true` once any handler has vetoed the change.
    #[inline]
    #[must_use]
    pub fn is_vetoed(&self) -> bool {
        self.vetoed.get()
    }

    pub(crate) fn into_proposed(self) -> T {
        self.proposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_veto_is_sticky() {
        let change = Changing::new(42);

        assert!(!change.is_vetoed(), "a fresh proposal starts unvetoed");

        change.veto();
        change.veto();

        assert!(change.is_vetoed());
        assert_eq!(*change.proposed(), 42, "veto must not touch the value");
    }
}
