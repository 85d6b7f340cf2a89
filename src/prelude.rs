//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_trail::prelude::*;
//! ```
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn load_config() -> FaultResult<String> {
//!     std::fs::read_to_string("definitely-missing.toml")
//!         .trace_field("path", "definitely-missing.toml")
//! }
//!
//! let fault = load_config().unwrap_err();
//! assert!(fault.is_traced());
//! ```

// Macros
pub use crate::{fault, fields};

// Core types
pub use crate::types::{Fault, FaultResult, FieldStore, FieldValue, TracedError};

// Traits
pub use crate::traits::{Failure, ResultExt, Transience};

// Construction surface
pub use crate::trace::{
    new, new_ex, new_with_field, new_with_fields, trace, trace_with_field, trace_with_field_ex,
    trace_with_fields, trace_with_fields_ex,
};
