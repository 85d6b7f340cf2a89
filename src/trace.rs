//! Construction surface of the trace API.
//!
//! Key functions:
//! - [`new`] / [`new_with_field`] / [`new_with_fields`] build a fresh
//!   message failure and wrap it with one frame at the caller.
//! - [`new_ex`] is the general entry point: it extends an already-traced
//!   fault in place or wraps a plain one, at an explicit depth.
//! - [`trace`] and the `trace_with_*` family annotate a fault as it crosses
//!   a propagation boundary; `None` in means `None` out, so the absence of
//!   a failure is never turned into one.
//!
//! # Depth semantics
//!
//! Every call here captures exactly one frame. Depth 0 attributes it to the
//! immediate caller; the `_ex` variants take an extra offset so that helper
//! functions layered on top can attribute the frame to *their* caller by
//! passing one more than a direct call would use.
//!
//! # Examples
//!
//! ```
//! use error_trail::{fields, trace_with_fields};
//!
//! let fault = error_trail::new_with_field("disk full", "code", 503);
//! let fault = trace_with_fields(Some(fault), fields!("retry" => true)).unwrap();
//! assert_eq!(fault.frames().len(), 2);
//! ```

use crate::frame;
use crate::types::{Fault, FieldStore, FieldValue, MessageError, TracedError};

/// Builds a fresh message failure and wraps it at the caller's frame.
///
/// For formatted messages use the [`fault!`](crate::fault) macro, which
/// forwards here after `format!`.
///
/// # Examples
///
/// ```
/// let fault = error_trail::new("disk full");
/// assert_eq!(fault.to_string(), "disk full");
/// assert_eq!(fault.frames().len(), 1);
/// ```
pub fn new(message: impl Into<String>) -> Fault {
    new_ex(1, Fault::new(MessageError::new(message)), None)
}

/// Like [`new`], seeding the fields with one key/value pair.
pub fn new_with_field(
    message: impl Into<String>,
    key: impl Into<String>,
    value: impl Into<FieldValue>,
) -> Fault {
    let fields = FieldStore::new().with(key, value);
    new_ex(1, Fault::new(MessageError::new(message)), Some(fields))
}

/// Like [`new`], seeding the fields from a store.
pub fn new_with_fields(message: impl Into<String>, fields: FieldStore) -> Fault {
    new_ex(1, Fault::new(MessageError::new(message)), Some(fields))
}

/// General entry point: wraps a plain fault or extends a traced one.
///
/// A traced fault gains one frame captured at `depth` and, if `fields` is
/// given, has them merged in; the same entity is returned, not a copy. A
/// plain fault is wrapped exactly once, keeping the original failure intact
/// for identity comparison. `depth` 0 attributes the frame to the immediate
/// caller of `new_ex`.
pub fn new_ex(depth: usize, fault: Fault, fields: Option<FieldStore>) -> Fault {
    let frame = frame::capture(depth + 1);
    match fault {
        Fault::Traced(traced) => {
            traced.push_frame(frame);
            if let Some(fields) = fields {
                traced.merge_fields(fields);
            }
            Fault::Traced(traced)
        }
        Fault::Plain(original) => {
            Fault::Traced(TracedError::construct(original, fields.unwrap_or_default(), frame))
        }
    }
}

/// Appends a caller frame to a fault as it crosses a boundary.
///
/// `None` propagates as `None`.
///
/// # Examples
///
/// ```
/// use error_trail::trace;
///
/// assert!(trace(None).is_none());
///
/// let fault = trace(Some(error_trail::new("boom"))).unwrap();
/// assert_eq!(fault.frames().len(), 2);
/// ```
pub fn trace(fault: Option<Fault>) -> Option<Fault> {
    Some(new_ex(1, fault?, None))
}

/// Like [`trace`], additionally merging a field store.
pub fn trace_with_fields(fault: Option<Fault>, fields: FieldStore) -> Option<Fault> {
    trace_with_fields_ex(fault, fields, 1)
}

/// Like [`trace_with_fields`], with an explicit extra depth offset.
///
/// Pass 0 for a direct call; a wrapper forwarding here passes one more so
/// the frame is attributed to its own caller.
pub fn trace_with_fields_ex(fault: Option<Fault>, fields: FieldStore, depth: usize) -> Option<Fault> {
    Some(new_ex(depth + 1, fault?, Some(fields)))
}

/// Like [`trace`], additionally setting one field.
pub fn trace_with_field(
    fault: Option<Fault>,
    key: impl Into<String>,
    value: impl Into<FieldValue>,
) -> Option<Fault> {
    trace_with_field_ex(fault, key, value, 1)
}

/// Like [`trace_with_field`], with an explicit extra depth offset.
pub fn trace_with_field_ex(
    fault: Option<Fault>,
    key: impl Into<String>,
    value: impl Into<FieldValue>,
    depth: usize,
) -> Option<Fault> {
    let fields = FieldStore::new().with(key, value);
    trace_with_fields_ex(fault, fields, depth + 1)
}
