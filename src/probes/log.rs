//! # Console probe subscriber.
//!
//! Prints every payload it hears to stdout. Intended as a development aid
//! while wiring events up, not as a production logging layer.
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use weakcast::{Event, LogProbe};
//!
//! let event: Event<u32> = Event::new();
//! let probe = Rc::new(LogProbe::new("reading"));
//! let _p = event.add_handler(&probe, LogProbe::observe);
//!
//! event.raise(&42); // prints: [reading] 42
//! ```

use std::borrow::Cow;
use std::fmt::Debug;

/// A subscriber target that prints payloads, tagged with a label.
///
/// [`observe`](LogProbe::observe) fits the handler seam for any payload type
/// that implements [`Debug`], so one probe can tap events of different
/// payload types at once. The probe is stateless beyond its label and is
/// `Send + Sync`, so it also works as a target for the [`sync`](crate::sync)
/// flavor.
pub struct LogProbe {
    label: Cow<'static, str>,
}

impl LogProbe {
    /// Creates a probe that prefixes its output with `label`.
    #[must_use]
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Prints one payload. Use as the handler when subscribing the probe.
    pub fn observe<T: Debug>(&self, payload: &T) {
        println!("[{}] {:?}", self.label, payload);
    }

    /// The label given at construction.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_reports_construction_value() {
        let borrowed = LogProbe::new("tap");
        assert_eq!(borrowed.label(), "tap");

        let owned = LogProbe::new(String::from("owned-tap"));
        assert_eq!(owned.label(), "owned-tap");
    }
}
