//! Capability and extension traits.
//!
//! - [`Failure`]: the erased failure object, carrying the optional
//!   timeout/temporary capability via [`Transience`]
//! - [`ResultExt`]: `.trace()` and friends on `Result` for propagation
//!   boundaries

pub mod failure;
pub mod result_ext;

pub use failure::{Failure, Transience};
pub use result_ext::ResultExt;
