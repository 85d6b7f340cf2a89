//! Failure capability classification.
//!
//! [`Failure`] is the erased object a [`Fault`](crate::Fault) holds. Beyond
//! the standard error contract it answers one optional question: does this
//! failure expose timeout or temporary behavior? The answer is an explicit
//! [`Transience`] value rather than duck typing, and it defaults to
//! [`Transience::None`], so probes on values without the capability resolve
//! to `false` instead of failing.

use std::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Recoverability capabilities a failure may expose.
///
/// # Examples
///
/// ```
/// use error_trail::Transience;
///
/// let t = Transience::from_flags(true, false);
/// assert!(t.is_timeout());
/// assert!(!t.is_temporary());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Transience {
    /// Neither capability.
    #[default]
    None,
    /// The failure arose from an operation timing out.
    Timeout,
    /// The failure is temporary and may clear on retry.
    Temporary,
    /// Both capabilities.
    Both,
}

impl Transience {
    /// Builds a variant from individual capability flags.
    pub fn from_flags(timeout: bool, temporary: bool) -> Self {
        match (timeout, temporary) {
            (true, true) => Self::Both,
            (true, false) => Self::Timeout,
            (false, true) => Self::Temporary,
            (false, false) => Self::None,
        }
    }

    /// Returns `true` if the timeout capability is present.
    #[inline]
    pub fn is_timeout(self) -> bool {
        matches!(self, Self::Timeout | Self::Both)
    }

    /// Returns `true` if the temporary capability is present.
    #[inline]
    pub fn is_temporary(self) -> bool {
        matches!(self, Self::Temporary | Self::Both)
    }
}

/// An error value that can flow through the trace API.
///
/// Implement this for your error types to make them wrappable by
/// [`Fault`](crate::Fault); override [`transience`](Self::transience) when
/// the error carries timeout or temporary semantics.
///
/// # Examples
///
/// ```
/// use error_trail::{Failure, Fault, Transience};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct DeadlineExceeded;
///
/// impl fmt::Display for DeadlineExceeded {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "deadline exceeded")
///     }
/// }
///
/// impl std::error::Error for DeadlineExceeded {}
///
/// impl Failure for DeadlineExceeded {
///     fn transience(&self) -> Transience {
///         Transience::Timeout
///     }
/// }
///
/// let fault = Fault::new(DeadlineExceeded);
/// assert!(fault.is_timeout());
/// assert!(!fault.is_temporary());
/// ```
pub trait Failure: Error + Send + Sync + 'static {
    /// Reports which recoverability capabilities this failure exposes.
    #[inline]
    fn transience(&self) -> Transience {
        Transience::None
    }
}

impl Failure for std::io::Error {
    fn transience(&self) -> Transience {
        use std::io::ErrorKind;
        let timeout = matches!(self.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock);
        let temporary = matches!(
            self.kind(),
            ErrorKind::ConnectionRefused
                | ErrorKind::ConnectionReset
                | ErrorKind::ConnectionAborted
                | ErrorKind::TimedOut
                | ErrorKind::Interrupted
                | ErrorKind::WouldBlock
        );
        Transience::from_flags(timeout, temporary)
    }
}
