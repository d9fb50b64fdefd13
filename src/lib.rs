//! # Weakcast
//!
//! **Weakcast** is a small synchronous broadcast library: typed events that
//! fan payloads out to weakly-held subscriber targets, with a disposable
//! handle per registration.
//!
//! It is a wiring primitive, not a message queue. There is no buffering, no
//! delivery thread, no async runtime. A raise is an ordinary sequence of
//! method calls that has finished by the time it returns.
//!
//! ## Architecture
//!
//! ```text
//!                       ┌────────────────────────────────┐
//!   raise(&payload) ──► │            Event<T>            │
//!                       │  entries in registration order │
//!                       │  ┌──────────────────────────┐  │
//!                       │  │ binding: Weak<U> + F     │──┼─► upgrade ok: F(&target, &payload)
//!                       │  ├──────────────────────────┤  │
//!                       │  │ binding: Weak<V> + G     │──┼─► target gone: skipped, swept
//!                       │  └──────────────────────────┘  │
//!                       └───────────────▲────────────────┘
//!                                       │ dispose() removes one entry
//!                                 Subscription<T>
//! ```
//!
//! A handler is a function of the target and the payload, typically a plain
//! method path. Subscribing stores a weak reference to the target next to
//! the handler; each raise upgrades per entry, calls the handler on the
//! still-live targets, and silently skips the rest.
//!
//! ## Features
//!
//! - Typed fan-out: one [`Event<T>`](Event) per signal, handlers run in
//!   registration order, synchronously, on the raising thread.
//! - Weak targets: subscribing never extends a target's lifetime, and a
//!   dropped subscriber needs no explicit deregistration.
//! - Disposable handles: every registration returns its own
//!   [`Subscription`]; [`dispose`](Disposable::dispose) is idempotent and
//!   removes exactly that entry.
//! - Re-entrancy: raises iterate a snapshot, so handlers may subscribe and
//!   dispose on the event currently raising.
//! - Sweep control: dead entries are reclaimed per [`SweepPolicy`].
//! - Two flavors: the `Rc`-based default, and an `Arc` + mutex mirror in
//!   [`sync`] for targets shared between threads.
//! - Observed values: [`Property`] layers a veto-able `changing` and a
//!   post-commit `changed` event over a stored value.
//!
//! ## Feature flags
//!
//! - `logging` (off by default): enables [`LogProbe`], a stdout subscriber
//!   for taps during development.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use weakcast::{Disposable, Event};
//!
//! // A publisher owns one event per signal it announces.
//! struct Thermostat {
//!     reading: Event<i32>,
//! }
//!
//! // Subscribers are plain structs; handlers are ordinary methods.
//! #[derive(Default)]
//! struct History {
//!     readings: RefCell<Vec<i32>>,
//! }
//!
//! impl History {
//!     fn track(&self, reading: &i32) {
//!         self.readings.borrow_mut().push(*reading);
//!     }
//! }
//!
//! let thermostat = Thermostat { reading: Event::new() };
//! let history = Rc::new(History::default());
//!
//! let sub = thermostat.reading.add_handler(&history, History::track);
//! thermostat.reading.raise(&21);
//! thermostat.reading.raise(&23);
//!
//! sub.dispose();
//! thermostat.reading.raise(&25);
//!
//! assert_eq!(*history.readings.borrow(), vec![21, 23]);
//! ```

mod disposable;
mod events;
mod invoke;
mod policies;
mod properties;

pub mod sync;

#[cfg(feature = "logging")]
mod probes;

pub use disposable::Disposable;
pub use events::{Event, Subscription};
pub use policies::SweepPolicy;
pub use properties::{Changing, Property, SetOutcome};

#[cfg(feature = "logging")]
pub use probes::LogProbe;
