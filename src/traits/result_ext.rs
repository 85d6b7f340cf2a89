//! Extension trait for tracing errors at `Result` boundaries.
//!
//! The `Result`-shaped face of the trace API: `Ok` passes through untouched,
//! `Err` gains one frame attributed to the caller. Because the conversion
//! goes through [`new_ex`](crate::trace::new_ex), an already-traced fault is
//! extended in place rather than re-wrapped.
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn read_config() -> FaultResult<String> {
//!     std::fs::read_to_string("definitely-missing.toml")
//!         .trace_field("path", "definitely-missing.toml")
//! }
//!
//! let fault = read_config().unwrap_err();
//! assert!(fault.fields().get("path").is_some());
//! ```

use crate::trace::new_ex;
use crate::types::{Fault, FaultResult, FieldStore, FieldValue};

/// Adds trace methods to `Result` values whose error converts to [`Fault`].
pub trait ResultExt<T> {
    /// Appends a caller frame to the error, converting it to a [`Fault`].
    fn trace(self) -> FaultResult<T>;

    /// Like [`trace`](Self::trace), additionally merging a field store.
    fn trace_fields(self, fields: FieldStore) -> FaultResult<T>;

    /// Like [`trace`](Self::trace), additionally setting one field.
    fn trace_field(
        self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> FaultResult<T>;
}

impl<T, E: Into<Fault>> ResultExt<T> for Result<T, E> {
    fn trace(self) -> FaultResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(failure) => Err(new_ex(1, failure.into(), None)),
        }
    }

    fn trace_fields(self, fields: FieldStore) -> FaultResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(failure) => Err(new_ex(1, failure.into(), Some(fields))),
        }
    }

    fn trace_field(
        self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> FaultResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(failure) => {
                let fields = FieldStore::new().with(key, value);
                Err(new_ex(1, failure.into(), Some(fields)))
            }
        }
    }
}
