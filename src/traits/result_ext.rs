//! Extension trait for attaching provenance to `Result` errors.
//!
//! This module provides [`ResultExt`], which wraps the error of a `Result`
//! as a cause or a context without spelling out `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use error_lineage::traits::ResultExt;
//!
//! fn load_config() -> Result<String, error_lineage::Error> {
//!     std::fs::read_to_string("definitely/missing/config.toml")
//!         .caused("loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.to_string().starts_with("loading configuration file"));
//! assert!(err.cause().is_some());
//! ```
use core::hint::black_box;

use crate::chain::merge_deferred;
use crate::types::{AnyError, Error, Message};

/// Extension methods for any `Result` whose error converts into [`AnyError`].
///
/// `caused` and `while_handling` capture the stack at their caller, like the
/// [`errorf!`](crate::errorf) family.
pub trait ResultExt<T> {
    /// Wraps the error under a new message; the original error becomes the
    /// cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_lineage::traits::ResultExt;
    ///
    /// let result: Result<(), &str> = Err("connection refused");
    /// let err = result.caused("fetching profile").unwrap_err();
    ///
    /// assert_eq!(err.inner().to_string(), "fetching profile");
    /// assert_eq!(err.cause().unwrap().to_string(), "connection refused");
    /// ```
    fn caused(self, message: impl Into<Message>) -> Result<T, Error>;

    /// Marks the error as raised while `prior` was being handled; `prior`
    /// becomes the context.
    fn while_handling(self, prior: impl Into<AnyError>) -> Result<T, Error>;

    /// Runs `f` regardless of the outcome and folds its failure in the way
    /// [`wrap_deferred`](crate::wrap_deferred) does.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_lineage::traits::ResultExt;
    ///
    /// let result: Result<u8, &str> = Err("write failed");
    /// let err = result.finally(|| Err("close failed")).unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "close failed\nContext:  write failed");
    /// ```
    fn finally<F, E>(self, f: F) -> Result<T, AnyError>
    where
        F: FnOnce() -> Result<(), E>,
        E: Into<AnyError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AnyError>,
{
    #[inline(never)]
    fn caused(self, message: impl Into<Message>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let message: Message = message.into();
                Err(black_box(Error::create(message, Some(error.into()), None, 1)))
            },
        }
    }

    #[inline(never)]
    fn while_handling(self, prior: impl Into<AnyError>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(black_box(Error::create(error, None, Some(prior.into()), 1))),
        }
    }

    fn finally<F, E2>(self, f: F) -> Result<T, AnyError>
    where
        F: FnOnce() -> Result<(), E2>,
        E2: Into<AnyError>,
    {
        let late: Option<AnyError> = f().err().map(Into::into);
        match (self, late) {
            (Ok(value), None) => Ok(value),
            (Ok(_), Some(late)) => Err(late),
            (Err(error), None) => Err(error.into()),
            (Err(error), Some(late)) => Err(merge_deferred(Some(error.into()), late)),
        }
    }
}
