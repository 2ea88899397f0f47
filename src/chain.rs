//! Walking cause chains and folding late failures into an error slot.
use crate::types::{AnyError, Error};

/// Follows the cause chain of `error` to its end and returns the innermost
/// error reached.
///
/// Only causes are followed, never contexts. A wrapped error without a cause
/// yields its inner error; anything that is not a wrapped error is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use error_lineage::{root_cause, AnyError, Error};
///
/// let err: AnyError = Error::new("request failed")
///     .with_cause(Error::new("connect failed").with_cause("refused"))
///     .with_context("shutting down")
///     .into();
///
/// assert_eq!(root_cause(&err).to_string(), "refused");
/// ```
pub fn root_cause(error: &AnyError) -> &AnyError {
    let mut current = error;
    loop {
        let Some(wrapped) = current.as_wrapped() else {
            return current;
        };
        match wrapped.cause() {
            Some(cause) => current = cause,
            None => return wrapped.inner(),
        }
    }
}

/// Runs a finalizer and records its failure in `slot` without losing an
/// earlier one.
///
/// - If `f` succeeds, `slot` is left as it was.
/// - If `f` fails and `slot` is empty, the slot takes the new error.
/// - If `f` fails and `slot` already holds an error, the slot becomes an
///   [`Error`] whose inner error is the new failure and whose context is the
///   earlier one.
///
/// # Examples
///
/// ```
/// use error_lineage::{wrap_deferred, AnyError};
///
/// let mut slot: Option<AnyError> = Some("write failed".into());
/// wrap_deferred(&mut slot, || Err("close failed"));
///
/// let err = slot.unwrap();
/// assert_eq!(err.to_string(), "close failed\nContext:  write failed");
/// ```
pub fn wrap_deferred<F, E>(slot: &mut Option<AnyError>, f: F)
where
    F: FnOnce() -> Result<(), E>,
    E: Into<AnyError>,
{
    if let Err(error) = f() {
        let merged = merge_deferred(slot.take(), error.into());
        *slot = Some(merged);
    }
}

/// Combines a prior failure with one raised while handling it.
pub(crate) fn merge_deferred(prior: Option<AnyError>, error: AnyError) -> AnyError {
    match prior {
        Some(prior) => {
            log_event!(debug, prior = %prior, error = %error, "preserving earlier failure as context");
            Error::new(error).with_context(prior).into()
        },
        None => error,
    }
}
