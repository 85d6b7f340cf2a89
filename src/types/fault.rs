//! The API boundary value: a failure that is either plain or traced.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::traits::failure::Failure;
use crate::types::field_store::FieldStore;
use crate::types::traced_error::TracedError;

/// Shared reference to an original failure.
pub type FailureRef = Arc<dyn Failure>;

/// Result alias for fallible operations that annotate their failures.
pub type FaultResult<T> = Result<T, Fault>;

pub(crate) fn same_failure(a: &FailureRef, b: &FailureRef) -> bool {
    // Data-pointer comparison; vtable pointers are not stable across
    // codegen units.
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// A failure value flowing through the trace API.
///
/// The plain/traced distinction is decided once, here at the boundary:
/// construction functions extend a [`Traced`](Fault::Traced) fault in place
/// and wrap a [`Plain`](Fault::Plain) one exactly once. Cloning is cheap and
/// preserves identity, so callers can keep a handle to the original fault
/// and compare against it after any number of trace operations.
///
/// # Examples
///
/// ```
/// use error_trail::{trace, Fault};
/// use std::io;
///
/// let fault = Fault::new(io::Error::other("link down"));
/// let traced = trace(Some(fault.clone())).unwrap();
/// assert!(traced.is(&fault));
/// ```
#[derive(Clone)]
pub enum Fault {
    /// A failure that has not been traced yet.
    Plain(FailureRef),
    /// A failure carrying accumulated frames and fields.
    Traced(TracedError),
}

impl Fault {
    /// Wraps a failure value as a plain, untraced fault.
    #[inline]
    pub fn new<E: Failure>(failure: E) -> Self {
        Self::Plain(Arc::new(failure))
    }

    /// Returns the underlying original failure.
    ///
    /// For a plain fault this is the failure itself, so the operation is
    /// idempotent; for a traced fault a single resolution step reaches the
    /// original, never another wrapper.
    pub fn original(&self) -> FailureRef {
        match self {
            Self::Plain(failure) => Arc::clone(failure),
            Self::Traced(traced) => traced.original(),
        }
    }

    /// Tests whether both faults resolve to the same underlying failure.
    ///
    /// Identity of the resolved originals, not message equality.
    pub fn is(&self, other: &Fault) -> bool {
        same_failure(&self.original(), &other.original())
    }

    /// Returns the diagnostic fields.
    ///
    /// A traced fault materializes its frame trail into the `"stack"` field
    /// on first call; a plain fault yields an empty store.
    pub fn fields(&self) -> FieldStore {
        match self {
            Self::Plain(_) => FieldStore::new(),
            Self::Traced(traced) => traced.fields(),
        }
    }

    /// Returns the accumulated frame descriptors, oldest first.
    pub fn frames(&self) -> Vec<String> {
        match self {
            Self::Plain(_) => Vec::new(),
            Self::Traced(traced) => traced.frames(),
        }
    }

    /// Returns `true` if this fault has been traced at least once.
    #[inline]
    pub fn is_traced(&self) -> bool {
        matches!(self, Self::Traced(_))
    }

    /// Probes this value, as given, for the timeout capability.
    ///
    /// The probe does not unwrap: a traced fault exposes no transience of
    /// its own, so it reports `false` even when the original would not.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Plain(failure) => failure.transience().is_timeout(),
            Self::Traced(_) => false,
        }
    }

    /// Probes this value, as given, for the temporary capability.
    ///
    /// Same outer-value rule as [`is_timeout`](Self::is_timeout).
    pub fn is_temporary(&self) -> bool {
        match self {
            Self::Plain(failure) => failure.transience().is_temporary(),
            Self::Traced(_) => false,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(failure) => write!(f, "{failure}"),
            Self::Traced(traced) => write!(f, "{traced}"),
        }
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(failure) => f.debug_tuple("Plain").field(failure).finish(),
            Self::Traced(traced) => f.debug_tuple("Traced").field(traced).finish(),
        }
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Plain(failure) => failure.as_ref().source(),
            Self::Traced(traced) => traced.source(),
        }
    }
}

impl<E: Failure> From<E> for Fault {
    #[inline]
    fn from(failure: E) -> Self {
        Self::new(failure)
    }
}

impl From<FailureRef> for Fault {
    #[inline]
    fn from(failure: FailureRef) -> Self {
        Self::Plain(failure)
    }
}

impl From<TracedError> for Fault {
    #[inline]
    fn from(traced: TracedError) -> Self {
        Self::Traced(traced)
    }
}

/// Formatted-message failure backing [`new`](crate::trace::new).
///
/// Exposes no transience capabilities.
#[derive(Debug)]
pub struct MessageError {
    message: String,
}

impl MessageError {
    /// Creates a failure from a message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for MessageError {}

impl Failure for MessageError {}
