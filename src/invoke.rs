//! # Type-erased delivery capability.
//!
//! Both event flavors store their subscriber entries as trait objects so a
//! single list can hold bindings to targets of different concrete types.
//! [`Invocable`] is that erasure seam: an entry can be invoked with a payload
//! and asked whether its target is still reachable.
//!
//! The trait is crate-private. Users never see entries, only the
//! [`Subscription`](crate::Subscription) handles that wrap them.

/// One registered subscriber entry, erased over its target and handler types.
pub(crate) trait Invocable<T> {
    /// Delivers `payload` to the bound target.
    ///
    /// A dead target is skipped silently; delivery is not an error.
    fn invoke(&self, payload: &T);

    /// Returns `true` while the bound target is still reachable.
    fn is_live(&self) -> bool;
}
