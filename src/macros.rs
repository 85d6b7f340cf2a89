//! Ergonomic macros for building faults and field stores.
//!
//! - [`macro@crate::fault`] - Formats a message and wraps it at the caller's
//!   frame, the template/args form of [`new`](crate::trace::new).
//! - [`macro@crate::fields`] - Builds a [`FieldStore`](crate::FieldStore)
//!   from `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use error_trail::{fault, fields, trace_with_fields};
//!
//! let boom = fault!("disk {} full", "sda1");
//! assert_eq!(boom.to_string(), "disk sda1 full");
//!
//! let boom = trace_with_fields(Some(boom), fields!("code" => 503, "retry" => true));
//! assert_eq!(boom.unwrap().fields().len(), 3);
//! ```

/// Formats a message and wraps it as a traced fault.
///
/// Expands to [`new`](crate::trace::new) at the call site, so the captured
/// frame is attributed to the function invoking the macro.
///
/// # Examples
///
/// ```
/// use error_trail::fault;
///
/// let fault = fault!("no route to {}", "10.0.0.7");
/// assert_eq!(fault.to_string(), "no route to 10.0.0.7");
/// ```
#[macro_export]
macro_rules! fault {
    ($($arg:tt)*) => {
        $crate::new(::std::format!($($arg)*))
    };
}

/// Builds a [`FieldStore`](crate::FieldStore) from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use error_trail::fields;
///
/// let store = fields!("code" => 503, "device" => "sda1");
/// assert_eq!(store.len(), 2);
///
/// let empty = fields!();
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::FieldStore::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut store = $crate::FieldStore::new();
        $(store.set($key, $value);)+
        store
    }};
}
