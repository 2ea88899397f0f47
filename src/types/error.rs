//! Errors that remember what caused them and what was being handled.
//!
//! An [`Error`] wraps an inner error together with two independent kinds of
//! provenance:
//!
//! - the **cause**, the error that directly produced this one, and
//! - the **context**, the error that was already being handled when this one
//!   arose (for example a cleanup failure after an earlier failure).
//!
//! Errors built through [`Error::create`] or the `errorf!` macros also carry a
//! [`Trace`] of the call stack at construction time.
//!
//! # Examples
//!
//! ```
//! use error_lineage::Error;
//!
//! let err = Error::new("flush failed")
//!     .with_cause("disk full")
//!     .with_context("request aborted");
//!
//! assert_eq!(
//!     err.to_string(),
//!     "flush failed\nCause:  disk full\nContext:  request aborted"
//! );
//! ```
use core::any::Any;
use core::error::Error as StdError;
use core::fmt::{self, Display};
use core::hint::black_box;

use crate::trace::Trace;
use crate::types::{AnyError, Message};

/// Label written before the cause when rendering.
pub const CAUSE_LABEL: &str = "Cause:  ";
/// Label written before the context when rendering.
pub const CONTEXT_LABEL: &str = "Context:  ";

/// An inner error plus optional cause, context and stack trace.
///
/// `Error` is immutable once built. Rendering (`Display`) produces, joined by
/// newlines and omitting whatever is absent:
///
/// 1. the inner error's text,
/// 2. one `function\n\tfile:line` entry per captured frame, newest first,
/// 3. `Cause:  <cause>`,
/// 4. `Context:  <context>`.
#[derive(Clone, Debug)]
pub struct Error {
    inner: AnyError,
    cause: Option<AnyError>,
    context: Option<AnyError>,
    trace: Option<Trace>,
}

impl Error {
    /// Wraps `inner` without cause, context or trace.
    #[inline]
    pub fn new(inner: impl Into<AnyError>) -> Self {
        Self { inner: inner.into(), cause: None, context: None, trace: None }
    }

    /// Builds an error and captures the stack.
    ///
    /// With `skip = 0` the first recorded frame is the function that called
    /// `create`; every extra unit of `skip` starts one frame further out.
    #[inline(never)]
    pub fn create(
        inner: impl Into<AnyError>,
        cause: Option<AnyError>,
        context: Option<AnyError>,
        skip: usize,
    ) -> Self {
        let trace = Trace::capture(skip + 1);
        Self { inner: inner.into(), cause, context, trace }
    }

    /// Builds an error from a message, capturing the stack at the caller.
    ///
    /// Usually reached through [`errorf!`](crate::errorf).
    ///
    /// The `errorf*` constructors pass their result through `black_box` so the
    /// call to `create` is never a tail call and their own frame stays on the
    /// stack to be skipped.
    #[inline(never)]
    pub fn errorf(message: Message) -> Self {
        black_box(Self::create(message, None, None, 1))
    }

    /// Like [`errorf`](Self::errorf) with a cause.
    #[inline(never)]
    pub fn errorf_with_cause(cause: impl Into<AnyError>, message: Message) -> Self {
        black_box(Self::create(message, Some(cause.into()), None, 1))
    }

    /// Like [`errorf`](Self::errorf) with a context.
    #[inline(never)]
    pub fn errorf_with_context(context: impl Into<AnyError>, message: Message) -> Self {
        black_box(Self::create(message, None, Some(context.into()), 1))
    }

    /// Like [`errorf`](Self::errorf) with both a cause and a context.
    #[inline(never)]
    pub fn errorf_with_cause_and_context(
        cause: impl Into<AnyError>,
        context: impl Into<AnyError>,
        message: Message,
    ) -> Self {
        black_box(Self::create(message, Some(cause.into()), Some(context.into()), 1))
    }

    /// Sets the cause.
    #[must_use]
    #[inline]
    pub fn with_cause(mut self, cause: impl Into<AnyError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Sets the context.
    #[must_use]
    #[inline]
    pub fn with_context(mut self, context: impl Into<AnyError>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The wrapped error.
    #[inline]
    pub fn inner(&self) -> &AnyError {
        &self.inner
    }

    /// The error that directly produced this one, if recorded.
    #[inline]
    pub fn cause(&self) -> Option<&AnyError> {
        self.cause.as_ref()
    }

    /// The error that was being handled when this one arose, if any.
    #[inline]
    pub fn context(&self) -> Option<&AnyError> {
        self.context.as_ref()
    }

    /// The stack captured at construction, if any.
    #[inline]
    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// Follows the cause chain to its end; see [`root_cause`](crate::root_cause).
    pub fn root_cause(&self) -> &AnyError {
        match &self.cause {
            Some(cause) => crate::chain::root_cause(cause),
            None => &self.inner,
        }
    }

    /// Returns `true` if this error, or its inner error, cause or context,
    /// matches `target`.
    ///
    /// A wrapped `target` matches when it has the same shape: the inner
    /// errors match, both causes are absent or match, and both contexts are
    /// absent or match. Traces are never compared.
    pub fn matches(&self, target: &AnyError) -> bool {
        if let AnyError::Wrapped(other) = target {
            if self.same_shape(other) {
                return true;
            }
        }
        self.inner.matches(target)
            || self.cause.as_ref().is_some_and(|cause| cause.matches(target))
            || self.context.as_ref().is_some_and(|context| context.matches(target))
    }

    fn same_shape(&self, other: &Error) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        self.inner.matches(&other.inner)
            && both_match(self.cause.as_ref(), other.cause.as_ref())
            && both_match(self.context.as_ref(), other.context.as_ref())
    }

    /// Returns `self` if `T` is `Error`, otherwise the first `T` found in the
    /// inner error, then the cause, then the context.
    pub fn extract_as<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        if let Some(this) = (self as &dyn Any).downcast_ref::<T>() {
            return Some(this);
        }
        self.inner
            .extract_as::<T>()
            .or_else(|| self.cause.as_ref().and_then(|cause| cause.extract_as::<T>()))
            .or_else(|| self.context.as_ref().and_then(|context| context.extract_as::<T>()))
    }
}

fn both_match(left: Option<&AnyError>, right: Option<&AnyError>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => left.matches(right),
        _ => false,
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)?;
        if let Some(trace) = &self.trace {
            trace.write_sections(f)?;
        }
        if let Some(cause) = &self.cause {
            write!(f, "\n{CAUSE_LABEL}{cause}")?;
        }
        if let Some(context) = &self.context {
            write!(f, "\n{CONTEXT_LABEL}{context}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|cause| cause as &(dyn StdError + 'static))
    }
}
