//! # Policy types.
//!
//! ## Contents
//!
//! - [`SweepPolicy`]: when to remove entries whose targets were dropped.

mod sweep;

pub use sweep::SweepPolicy;
