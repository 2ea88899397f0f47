//! Error values and the building blocks they are made of.
//!
//! - [`Error`]: an inner error with optional cause, context and stack trace
//! - [`Errors`]: a flattened aggregate presented as one error
//! - [`ConcurrentErrors`]: a lock-guarded sink for errors from parallel work
//! - [`Message`] and [`UnexpectedType`]: leaf errors produced by this crate
//! - [`AnyError`]: the tagged union every one of them converts into
//!
//! # Examples
//!
//! ```
//! use error_lineage::{AnyError, Error, Errors};
//!
//! let first: AnyError = Error::new("upload failed").with_cause("timeout").into();
//! let all = Errors::aggregate([first.clone(), AnyError::from("quota exceeded")]).unwrap();
//!
//! assert!(all.matches(&first));
//! assert_eq!(
//!     all.to_string(),
//!     "2 errors: upload failed\nCause:  timeout, quota exceeded"
//! );
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod any_error;
pub mod concurrent;
pub mod error;
pub mod errors;
pub mod message;
#[cfg(feature = "serde")]
mod serialize;
pub mod unexpected_type;

pub use any_error::{AnyError, Leaf};
pub use concurrent::ConcurrentErrors;
pub use error::{Error, CAUSE_LABEL, CONTEXT_LABEL};
pub use errors::{aggregate, Errors};
pub use message::{Arg, Message};
pub use unexpected_type::{AnyType, Sample, UnexpectedType};

/// SmallVec-backed collection used for aggregated and collected errors.
///
/// Stores up to two errors inline, which covers the common "an error and the
/// cleanup failure that followed it" case without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
