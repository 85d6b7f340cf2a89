//! The accumulating wrapped-error entity.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::frame;
use crate::types::fault::{same_failure, Fault, FailureRef};
use crate::types::field_store::{FieldStore, FieldValue};

/// Reserved field key holding the joined frame trail.
pub const STACK_FIELD: &str = "stack";

/// A failure annotated with accumulated call frames and diagnostic fields.
///
/// `TracedError` is a shared handle: clones refer to the same entity, and
/// every trace operation applied to any clone appends to the one frame list.
/// The original failure is set at construction and never replaced, and it is
/// never itself a `TracedError` — re-tracing extends in place instead of
/// nesting, so a single unwrap always reaches the plain failure.
///
/// Frame and field mutation is serialized internally; the join of the frame
/// list into the [`STACK_FIELD`] entry happens at most once, on the first
/// [`fields`](Self::fields) call, even under concurrent readers.
#[derive(Clone)]
pub struct TracedError {
    inner: Arc<Inner>,
}

struct Inner {
    original: FailureRef,
    state: Mutex<State>,
    stack: OnceLock<String>,
}

struct State {
    frames: Vec<String>,
    fields: FieldStore,
}

impl TracedError {
    pub(crate) fn construct(original: FailureRef, fields: FieldStore, frame: String) -> Self {
        Self {
            inner: Arc::new(Inner {
                original,
                state: Mutex::new(State { frames: vec![frame], fields }),
                stack: OnceLock::new(),
            }),
        }
    }

    pub(crate) fn push_frame(&self, frame: String) {
        self.lock_state().frames.push(frame);
    }

    /// Sets a single diagnostic field, overwriting any existing value.
    pub fn set_field(&self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.lock_state().fields.set(key, value);
    }

    /// Merges a field store into this entity's fields.
    ///
    /// Colliding keys are overwritten, new keys appended, existing order kept.
    pub fn merge_fields(&self, fields: FieldStore) {
        self.lock_state().fields.merge(fields);
    }

    /// Returns the diagnostic fields, materializing the frame trail first.
    ///
    /// The first call joins the frames accumulated so far with
    /// [`frame::SEPARATOR`] and writes the result under [`STACK_FIELD`].
    /// The join runs at most once per entity: frames appended afterwards
    /// stay visible through [`frames`](Self::frames) but are not reflected
    /// in the stored stack value.
    pub fn fields(&self) -> FieldStore {
        self.inner.stack.get_or_init(|| {
            let mut state = self.lock_state();
            let joined = state.frames.join(frame::SEPARATOR);
            state.fields.set(STACK_FIELD, joined.clone());
            joined
        });
        self.lock_state().fields.clone()
    }

    /// Returns the frame descriptors accumulated so far, oldest first.
    pub fn frames(&self) -> Vec<String> {
        self.lock_state().frames.clone()
    }

    /// Returns the original failure this entity annotates.
    #[inline]
    pub fn original(&self) -> FailureRef {
        Arc::clone(&self.inner.original)
    }

    /// Tests whether `other` resolves to the same underlying failure.
    ///
    /// Comparison is by identity of the resolved originals, not by message.
    pub fn matches(&self, other: &Fault) -> bool {
        same_failure(&self.original(), &other.original())
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Display for TracedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.original)
    }
}

impl fmt::Debug for TracedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock_state();
        f.debug_struct("TracedError")
            .field("original", &self.inner.original)
            .field("frames", &state.frames)
            .field("fields", &state.fields)
            .finish()
    }
}

impl Error for TracedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let original: &(dyn Error + 'static) = self.inner.original.as_ref();
        Some(original)
    }
}
