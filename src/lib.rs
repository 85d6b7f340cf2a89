//! Call-site trace accumulation and diagnostic fields for Rust errors.
//!
//! error-trail wraps a failure in a [`Fault`] that accumulates one frame
//! descriptor per trace operation plus an ordered [`FieldStore`] of
//! key/value diagnostics, while keeping identity-based comparison against
//! and unwrapping to the original failure. Re-tracing an already-traced
//! fault extends the same entity in place; it never nests wrappers.
//!
//! # Examples
//!
//! ## Construct, propagate, inspect
//!
//! ```
//! use error_trail::{fields, trace_with_field, FieldValue};
//!
//! let fault = error_trail::new_with_fields("disk full", fields!("code" => 503));
//! let fault = trace_with_field(Some(fault), "retry", true).unwrap();
//!
//! let fields = fault.fields();
//! assert_eq!(fields.get("code"), Some(&FieldValue::from(503)));
//! assert_eq!(fields.get("retry"), Some(&FieldValue::from(true)));
//! assert!(fields.get("stack").is_some());
//! assert_eq!(fault.frames().len(), 2);
//! ```
//!
//! ## Identity survives tracing
//!
//! ```
//! use error_trail::{trace, Fault};
//! use std::io;
//!
//! let original = Fault::new(io::Error::other("disk full"));
//! let traced = trace(Some(original.clone())).unwrap();
//! let traced = trace(Some(traced)).unwrap();
//!
//! assert!(traced.is(&original));
//! assert_eq!(traced.original().to_string(), "disk full");
//! ```
//!
//! ## Result boundaries
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn read_config() -> FaultResult<String> {
//!     std::fs::read_to_string("definitely-missing.toml").trace()
//! }
//!
//! assert!(read_config().is_err());
//! ```

/// Call-site frame capture
pub mod frame;
/// Ergonomic macros for building faults and field stores
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Construction surface: `new`, `trace` and their field/depth variants
pub mod trace;
/// Capability and extension traits
pub mod traits;
/// Fault, TracedError and FieldStore types
pub mod types;

pub use trace::*;
pub use traits::*;
pub use types::{
    Fault, FaultResult, FailureRef, FieldStore, FieldValue, MessageError, TracedError, STACK_FIELD,
};
