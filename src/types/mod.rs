//! Fault, TracedError and FieldStore types.
//!
//! # Examples
//!
//! ```
//! use error_trail::types::{Fault, FieldStore};
//! use std::io;
//!
//! let fault = Fault::new(io::Error::other("link down"));
//! assert!(fault.fields().is_empty());
//! assert!(fault.is(&fault));
//! ```

pub mod fault;
pub mod field_store;
pub mod traced_error;

pub use fault::{Fault, FaultResult, FailureRef, MessageError};
pub use field_store::{FieldStore, FieldValue};
pub use traced_error::{TracedError, STACK_FIELD};
