//! Macros for building messages and message-backed errors.
//!
//! - [`macro@crate::message`] - Builds a [`Message`](crate::types::Message) from a
//!   template and arguments without formatting it.
//! - [`macro@crate::errorf`] - Builds an [`Error`](crate::Error) around a message and
//!   captures the stack at the call site.
//! - [`macro@crate::errorf_with_cause`], [`macro@crate::errorf_with_context`] and
//!   [`macro@crate::errorf_with_cause_and_context`] - The same, with provenance attached.
//!
//! Arguments are stored by value and must be `Display + Debug + Send + Sync + 'static`;
//! formatting happens only when the error is rendered.
//!
//! # Examples
//!
//! ```
//! use error_lineage::{errorf, errorf_with_cause};
//!
//! let port = 8080;
//! let err = errorf_with_cause!("address in use", "cannot bind port {}", port);
//!
//! assert!(err.to_string().starts_with("cannot bind port 8080\n"));
//! assert!(err.to_string().ends_with("\nCause:  address in use"));
//! assert!(err.trace().is_some());
//!
//! let plain = errorf!("{} of {} shards failed", 2, 5);
//! assert_eq!(plain.inner().to_string(), "2 of 5 shards failed");
//! ```

/// Builds a [`Message`](crate::types::Message) from a template and arguments.
///
/// The template uses `{}`, `{N}`, `{:?}` and `{N:?}` placeholders.
///
/// # Examples
///
/// ```
/// use error_lineage::message;
///
/// let msg = message!("{1} before {0}", "second", "first");
/// assert_eq!(msg.to_string(), "first before second");
/// assert_eq!(msg.args().len(), 2);
/// ```
#[macro_export]
macro_rules! message {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::types::Message::new($template)$(.arg($arg))*
    };
}

/// Builds an [`Error`](crate::Error) from a message template, capturing the
/// stack at the call site.
///
/// # Examples
///
/// ```
/// use error_lineage::errorf;
///
/// let err = errorf!("retry budget of {} exhausted", 3);
/// assert!(err.to_string().starts_with("retry budget of 3 exhausted"));
/// assert!(err.cause().is_none());
/// ```
#[macro_export]
macro_rules! errorf {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::Error::errorf($crate::message!($template $(, $arg)*))
    };
}

/// Like [`errorf!`](crate::errorf), with a cause as the first argument.
#[macro_export]
macro_rules! errorf_with_cause {
    ($cause:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::Error::errorf_with_cause($cause, $crate::message!($template $(, $arg)*))
    };
}

/// Like [`errorf!`](crate::errorf), with a context as the first argument.
#[macro_export]
macro_rules! errorf_with_context {
    ($context:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::Error::errorf_with_context($context, $crate::message!($template $(, $arg)*))
    };
}

/// Like [`errorf!`](crate::errorf), with a cause and a context as the first
/// two arguments.
///
/// # Examples
///
/// ```
/// use error_lineage::errorf_with_cause_and_context;
///
/// let err = errorf_with_cause_and_context!(
///     "permission denied",
///     "rollback in progress",
///     "cannot remove {}",
///     "/tmp/lock"
/// );
/// let text = err.to_string();
/// assert!(text.contains("\nCause:  permission denied"));
/// assert!(text.ends_with("\nContext:  rollback in progress"));
/// ```
#[macro_export]
macro_rules! errorf_with_cause_and_context {
    ($cause:expr, $context:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::Error::errorf_with_cause_and_context(
            $cause,
            $context,
            $crate::message!($template $(, $arg)*),
        )
    };
}
