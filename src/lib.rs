//! Errors that remember where they came from.
//!
//! An [`Error`] wraps an underlying failure together with its **cause** (the
//! error that directly produced it) and its **context** (the error that was
//! already being handled when it arose), plus a stack trace captured when it
//! was built and rendered only when it is displayed. Failures from parallel
//! work are funneled into a [`ConcurrentErrors`] sink, and any batch of errors
//! can be flattened into a single [`Errors`] aggregate that still answers
//! identity and type queries about its members.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_lineage::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Cause and context
//!
//! ```
//! use error_lineage::{errorf_with_cause, root_cause, Error};
//!
//! let err = Error::new("saving draft failed")
//!     .with_cause(Error::new("write failed").with_cause("disk full"))
//!     .with_context("user logged out");
//!
//! assert_eq!(root_cause(&err.clone().into()).to_string(), "disk full");
//!
//! let traced = errorf_with_cause!("disk full", "writing block {}", 7);
//! assert!(traced.trace().is_some());
//! ```
//!
//! ## Deferred capture
//!
//! ```
//! use error_lineage::{wrap_deferred, AnyError};
//!
//! fn copy() -> Result<(), AnyError> {
//!     let mut failure: Option<AnyError> = Some("read failed".into());
//!     wrap_deferred(&mut failure, || Err("close failed"));
//!     failure.map_or(Ok(()), Err)
//! }
//!
//! let err = copy().unwrap_err();
//! assert_eq!(err.to_string(), "close failed\nContext:  read failed");
//! ```
//!
//! ## Aggregation
//!
//! ```
//! use error_lineage::{aggregate, AnyError, ConcurrentErrors};
//!
//! let errors = ConcurrentErrors::new();
//! std::thread::scope(|scope| {
//!     for shard in 0..4 {
//!         let errors = &errors;
//!         scope.spawn(move || {
//!             if shard % 2 == 1 {
//!                 errors.add(format!("shard {shard} unavailable"));
//!             }
//!         });
//!     }
//! });
//!
//! let all = aggregate([errors.snapshot(), Some(AnyError::from("retry budget spent"))]);
//! assert!(all.unwrap().to_string().starts_with("2 errors: 2 errors:\n    shard "));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Emits a `tracing` event when the `tracing` feature is enabled and
/// compiles to nothing otherwise.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

/// Root-cause lookup and deferred error capture
mod chain;
/// Message and error construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
mod sync;
/// Stack capture and trace rendering configuration
pub mod trace;
/// Extension traits for `Result`
pub mod traits;
/// Error, aggregate and collector types
pub mod types;

/// Advanced API level for library authors
pub mod advanced;

pub use chain::{root_cause, wrap_deferred};
pub use trace::Trace;
#[cfg(feature = "std")]
pub use trace::{ConfigError, TraceConfig};
pub use traits::ResultExt;
pub use types::{
    aggregate, AnyError, AnyType, Arg, ConcurrentErrors, Error, Errors, Leaf, Message, Sample,
    UnexpectedType,
};
