//! # Sweep policies for reclaimed subscriber entries.
//!
//! A subscriber whose target has been dropped is never invoked again, but its
//! entry still occupies a slot in the event's list until something removes
//! it. [`SweepPolicy`] controls when that removal happens.
//!
//! ## Choosing a policy
//!
//! - [`AfterRaise`](SweepPolicy::AfterRaise) keeps the list tidy without any
//!   caller involvement. Dead entries survive at most one raise. This is the
//!   default.
//! - [`Manual`](SweepPolicy::Manual) never removes entries on its own; the
//!   owner calls [`Event::purge`](crate::Event::purge) at moments it chooses.
//!   Useful when raises are frequent and subscriber churn is rare.
//!
//! Either way, a dead entry only costs memory. Delivery skips it silently.

/// Controls when an event removes entries whose targets are gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepPolicy {
    /// Drop dead entries at the end of every raise.
    AfterRaise,
    /// Keep dead entries until `purge` is called explicitly.
    Manual,
}

impl SweepPolicy {
    pub(crate) fn sweeps_after_raise(self) -> bool {
        matches!(self, SweepPolicy::AfterRaise)
    }
}

impl Default for SweepPolicy {
    /// Returns [`SweepPolicy::AfterRaise`].
    fn default() -> Self {
        SweepPolicy::AfterRaise
    }
}
