//! # Diagnostic subscribers (feature `logging`).
//!
//! ## Contents
//!
//! - [`LogProbe`]: prints payloads to stdout with a label.

mod log;

pub use log::LogProbe;
