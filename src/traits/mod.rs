//! Extension traits for working with provenance-carrying errors.
//!
//! - [`ResultExt`]: wraps the error of a `Result` as a cause or a context, or
//!   folds a finalizer's failure into it.
//!
//! # Examples
//!
//! ```
//! use error_lineage::traits::ResultExt;
//!
//! let result: Result<(), &str> = Err("disk full");
//! let err = result.while_handling("flush failed").unwrap_err();
//!
//! assert_eq!(err.context().unwrap().to_string(), "flush failed");
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;
