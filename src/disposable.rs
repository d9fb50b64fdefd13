//! # Cancellation capability for event subscriptions.
//!
//! [`Disposable`] is the one-method contract returned by both event flavors:
//! whatever else a subscription handle is, it can be told to stop. Keeping
//! the capability separate from the concrete handle types lets callers
//! collect handles of mixed payload types behind `Box<dyn Disposable>` and
//! retire them together.
//!
//! ## Rules
//!
//! - `dispose` is idempotent: the first call removes the entry, repeat calls
//!   are no-ops.
//! - `dispose` takes `&self`. A handle stays usable (and inert) after the
//!   subscription it controlled is gone.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use weakcast::{Disposable, Event};
//!
//! struct Audit {
//!     hits: Cell<u32>,
//! }
//!
//! impl Audit {
//!     fn on_login(&self, _who: &String) {
//!         self.hits.set(self.hits.get() + 1);
//!     }
//!     fn on_logout(&self, _who: &String) {
//!         self.hits.set(self.hits.get() + 1);
//!     }
//! }
//!
//! let logins: Event<String> = Event::new();
//! let logouts: Event<String> = Event::new();
//! let audit = Rc::new(Audit { hits: Cell::new(0) });
//!
//! // Handles for different events share one retirement list.
//! let mut handles: Vec<Box<dyn Disposable>> = Vec::new();
//! handles.push(Box::new(logins.add_handler(&audit, Audit::on_login)));
//! handles.push(Box::new(logouts.add_handler(&audit, Audit::on_logout)));
//!
//! logins.raise(&"ada".to_string());
//! assert_eq!(audit.hits.get(), 1);
//!
//! for handle in &handles {
//!     handle.dispose();
//! }
//!
//! logins.raise(&"ada".to_string());
//! logouts.raise(&"ada".to_string());
//! assert_eq!(audit.hits.get(), 1, "disposed handles deliver nothing");
//! ```

/// Something that can be cancelled exactly once.
///
/// Implemented by the subscription handles of both event flavors. Calling
/// [`dispose`](Disposable::dispose) again after the entry is gone is a no-op.
pub trait Disposable {
    /// Stops the subscription this handle controls.
    fn dispose(&self);
}
