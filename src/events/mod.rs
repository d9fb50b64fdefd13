//! # Single-threaded event channel.
//!
//! The default flavor of the crate. Everything here assumes one thread:
//! targets live in [`Rc`](std::rc::Rc), the entry list sits in a `RefCell`,
//! and raises run handlers inline on the calling thread.
//!
//! For delivery across threads use the [`sync`](crate::sync) flavor instead.
//!
//! ## Contents
//!
//! - [`Event`]: typed broadcast point, raises payloads to live subscribers.
//! - [`Subscription`]: per-registration handle, removable via
//!   [`Disposable`](crate::Disposable).

mod event;
pub(crate) mod subscription;

pub use event::Event;
pub use subscription::Subscription;
