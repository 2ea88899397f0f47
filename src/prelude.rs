//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use error_lineage::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`errorf!`], [`errorf_with_cause!`], [`errorf_with_context!`],
//!   [`errorf_with_cause_and_context!`], [`message!`]
//! - **Types**: [`AnyError`], [`Error`], [`Errors`], [`ConcurrentErrors`], [`Message`]
//! - **Functions**: [`aggregate`], [`root_cause`], [`wrap_deferred`]
//! - **Traits**: [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use error_lineage::prelude::*;
//!
//! fn read_settings() -> Result<String, Error> {
//!     std::fs::read_to_string("definitely/missing/settings.toml")
//!         .caused("reading settings")
//! }
//!
//! let err = read_settings().unwrap_err();
//! assert!(err.extract_as::<std::io::Error>().is_some());
//! ```

// Macros
pub use crate::{
    errorf, errorf_with_cause, errorf_with_cause_and_context, errorf_with_context, message,
};

// Core types
pub use crate::types::{aggregate, AnyError, ConcurrentErrors, Error, Errors, Message};

// Functions and traits
pub use crate::chain::{root_cause, wrap_deferred};
pub use crate::traits::ResultExt;

/// Result type whose error is a [`Error`].
///
/// # Examples
///
/// ```
/// use error_lineage::prelude::*;
///
/// fn parse_port(raw: &str) -> LineageResult<u16> {
///     raw.parse::<u16>().map_err(|_| errorf!("invalid port {:?}", raw.to_string()))
/// }
///
/// assert!(parse_port("80").is_ok());
/// assert!(parse_port("eighty").is_err());
/// ```
pub type LineageResult<T> = Result<T, Error>;
