//! # Observed properties.
//!
//! A small layer over the single-threaded event flavor for the "field with
//! observers" pattern: a stored value, a veto-able pre-commit event, and a
//! post-commit notification.
//!
//! ## Contents
//!
//! - [`Property`]: the value cell with its two events.
//! - [`Changing`]: pre-commit payload carrying the proposal and veto flag.
//! - [`SetOutcome`]: what a write attempt did.

mod changing;
mod property;

pub use changing::Changing;
pub use property::{Property, SetOutcome};
