//! Call-site frame capture.
//!
//! [`capture`] resolves a single caller frame into a short descriptor of the
//! form `"{file}:{line} {function}"`. Construction functions capture exactly
//! one frame per call; the accumulated descriptors are later joined with
//! [`SEPARATOR`] into the reserved `"stack"` field.

use std::path::Path;

/// Separator used when joining accumulated frame descriptors.
pub const SEPARATOR: &str = ";";

/// Descriptor returned when a frame cannot be resolved.
///
/// Out-of-range depths and missing debug info degrade to this placeholder
/// rather than failing.
pub const UNRESOLVED: &str = "<unresolved>";

/// Captures the frame `skip` caller levels above the immediate caller.
///
/// A `skip` of 0 attributes the frame to the direct caller of `capture`;
/// each increment moves one level further up the stack. Thin wrappers built
/// on top of the trace API pass one more than a direct call would, so the
/// frame lands on *their* caller.
///
/// # Examples
///
/// ```
/// let descriptor = error_trail::frame::capture(0);
/// assert!(!descriptor.is_empty());
/// ```
#[inline(never)]
pub fn capture(skip: usize) -> String {
    // Frame 0 of the walk is `capture` itself.
    let target = skip + 1;
    let mut index = 0usize;
    let mut descriptor: Option<String> = None;
    backtrace::trace(|frame| {
        if index < target {
            index += 1;
            return true;
        }
        backtrace::resolve_frame(frame, |symbol| {
            if descriptor.is_none() {
                descriptor = Some(describe(symbol));
            }
        });
        false
    });
    descriptor.unwrap_or_else(|| UNRESOLVED.to_owned())
}

fn describe(symbol: &backtrace::Symbol) -> String {
    let name = symbol.name().map(|name| name.to_string());
    let location = match (symbol.filename().and_then(Path::to_str), symbol.lineno()) {
        (Some(file), Some(line)) => Some(format!("{file}:{line}")),
        (Some(file), None) => Some(file.to_owned()),
        _ => None,
    };
    match (location, name) {
        (Some(location), Some(name)) => format!("{location} {name}"),
        (Some(location), None) => location,
        (None, Some(name)) => name,
        (None, None) => UNRESOLVED.to_owned(),
    }
}
