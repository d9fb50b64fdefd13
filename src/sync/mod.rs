//! # Thread-safe event channel.
//!
//! Mirror of the crate root's single-threaded types for targets shared
//! between threads: `Arc` in place of `Rc`, a [`Mutex`](parking_lot::Mutex)
//! around the entry list, `Send + Sync` bounds on targets and handlers.
//! Semantics are otherwise identical, including the snapshot taken per
//! raise; the lock is never held while handlers run.
//!
//! ## Contents
//!
//! - [`Event`]: typed broadcast point shareable across threads.
//! - [`Subscription`]: per-registration handle, removable via
//!   [`Disposable`](crate::Disposable).

mod event;
pub(crate) mod subscription;

pub use event::Event;
pub use subscription::Subscription;
