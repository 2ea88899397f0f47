//! The closed set of error shapes understood by this crate.
//!
//! Every error that flows through [`Error`], [`Errors`] or
//! [`ConcurrentErrors`](crate::ConcurrentErrors) is an [`AnyError`]: either an
//! opaque [`Leaf`], a [`Wrapped`](AnyError::Wrapped) error with provenance,
//! or a flattened [`Aggregate`](AnyError::Aggregate). Matching and type
//! extraction dispatch on that discriminant instead of relying on runtime
//! reflection.
//!
//! # Examples
//!
//! ```
//! use error_lineage::{AnyError, Error, Leaf};
//!
//! #[derive(Debug, PartialEq)]
//! struct NotFound;
//!
//! impl std::fmt::Display for NotFound {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("not found")
//!     }
//! }
//!
//! impl std::error::Error for NotFound {}
//!
//! let sentinel = AnyError::from(Leaf::comparable(NotFound));
//! let wrapped: AnyError = Error::new("lookup failed")
//!     .with_cause(Leaf::comparable(NotFound))
//!     .into();
//!
//! assert!(wrapped.matches(&sentinel));
//! assert!(wrapped.extract_as::<NotFound>().is_some());
//! ```
use core::error::Error as StdError;
use core::fmt::{self, Debug, Display};

use crate::types::alloc_type::{Arc, Box, String};
use crate::types::{Error, Errors, Message, UnexpectedType};

type DynError = dyn StdError + Send + Sync + 'static;
type EqFn = fn(&DynError, &DynError) -> bool;

fn eq_as<E>(left: &DynError, right: &DynError) -> bool
where
    E: StdError + PartialEq + Send + Sync + 'static,
{
    match (left.downcast_ref::<E>(), right.downcast_ref::<E>()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

/// An opaque error with no structure this crate understands.
///
/// A leaf built with [`Leaf::new`] is identified by its allocation: clones of
/// the same leaf match each other, independently created leaves never do.
/// [`Leaf::comparable`] additionally treats two leaves of the same concrete
/// type as identical when they compare equal, which is what sentinel errors
/// need.
#[derive(Clone)]
pub struct Leaf {
    error: Arc<DynError>,
    eq: Option<EqFn>,
}

impl Leaf {
    /// Wraps an error that is identified by allocation only.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self { error: Arc::new(error), eq: None }
    }

    /// Wraps an error whose `PartialEq` implementation defines its identity.
    #[inline]
    pub fn comparable<E>(error: E) -> Self
    where
        E: StdError + PartialEq + Send + Sync + 'static,
    {
        Self { error: Arc::new(error), eq: Some(eq_as::<E>) }
    }

    /// Takes ownership of an already boxed error.
    #[inline]
    pub fn from_boxed(error: Box<DynError>) -> Self {
        Self { error: Arc::from(error), eq: None }
    }

    /// The wrapped error.
    #[inline]
    pub fn get(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.error
    }

    /// Returns `true` if both leaves denote the same error.
    ///
    /// Symmetric: when only one side was built with [`Leaf::comparable`],
    /// its comparison decides for both.
    pub fn is_same(&self, other: &Leaf) -> bool {
        if Arc::ptr_eq(&self.error, &other.error) {
            return true;
        }
        match self.eq.or(other.eq) {
            Some(eq) => eq(&*self.error, &*other.error),
            None => false,
        }
    }

    /// Searches the leaf and its `source()` chain for a `T`.
    pub fn extract_as<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        let mut current: Option<&(dyn StdError + 'static)> = Some(&*self.error);
        while let Some(error) = current {
            if let Some(found) = error.downcast_ref::<T>() {
                return Some(found);
            }
            current = error.source();
        }
        None
    }
}

impl Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.error, f)
    }
}

impl Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Leaf").field(&self.error).finish()
    }
}

/// Any error value: an opaque leaf, a wrapped [`Error`], or an aggregate.
///
/// Cloning is cheap; every variant shares its payload.
#[derive(Clone, Debug)]
pub enum AnyError {
    /// An opaque error.
    Leaf(Leaf),
    /// An error with optional cause, context and stack trace.
    Wrapped(Arc<Error>),
    /// A flattened collection of errors.
    Aggregate(Arc<Errors>),
}

impl AnyError {
    /// Wraps an opaque error identified by allocation.
    #[inline]
    pub fn leaf<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Leaf(Leaf::new(error))
    }

    /// Wraps an opaque error identified by `PartialEq`.
    #[inline]
    pub fn comparable<E>(error: E) -> Self
    where
        E: StdError + PartialEq + Send + Sync + 'static,
    {
        Self::Leaf(Leaf::comparable(error))
    }

    /// Returns `true` if `self`, or anything reachable through its inner
    /// error, cause, context or aggregate members, matches `target`.
    ///
    /// - Leaves match by [`Leaf::is_same`].
    /// - A wrapped error matches a wrapped target of the same shape: inner
    ///   errors match, causes are both absent or match, contexts likewise.
    /// - An aggregate matches an aggregate target of the same length whose
    ///   members match position by position.
    pub fn matches(&self, target: &AnyError) -> bool {
        match self {
            Self::Leaf(leaf) => match target {
                Self::Leaf(other) => leaf.is_same(other),
                _ => false,
            },
            Self::Wrapped(error) => error.matches(target),
            Self::Aggregate(errors) => errors.matches(target),
        }
    }

    /// Finds the first `T` in this error, walking inner, cause, context and
    /// aggregate members in order.
    pub fn extract_as<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        match self {
            Self::Leaf(leaf) => leaf.extract_as::<T>(),
            Self::Wrapped(error) => error.extract_as::<T>(),
            Self::Aggregate(errors) => errors.extract_as::<T>(),
        }
    }

    /// Returns the wrapped [`Error`] if this is one.
    #[inline]
    pub fn as_wrapped(&self) -> Option<&Error> {
        match self {
            Self::Wrapped(error) => Some(error.as_ref()),
            _ => None,
        }
    }

    /// Returns the [`Errors`] aggregate if this is one, including an
    /// aggregate that was boxed up as an opaque leaf.
    #[inline]
    pub fn as_aggregate(&self) -> Option<&Errors> {
        match self {
            Self::Aggregate(errors) => Some(errors.as_ref()),
            Self::Leaf(leaf) => leaf.get().downcast_ref::<Errors>(),
            Self::Wrapped(_) => None,
        }
    }
}

impl Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => Display::fmt(leaf, f),
            Self::Wrapped(error) => Display::fmt(error, f),
            Self::Aggregate(errors) => Display::fmt(errors, f),
        }
    }
}

impl StdError for AnyError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Leaf(leaf) => leaf.get().source(),
            Self::Wrapped(error) => error.source(),
            Self::Aggregate(_) => None,
        }
    }
}

impl From<Leaf> for AnyError {
    #[inline]
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Error> for AnyError {
    #[inline]
    fn from(error: Error) -> Self {
        Self::Wrapped(Arc::new(error))
    }
}

impl From<Arc<Error>> for AnyError {
    #[inline]
    fn from(error: Arc<Error>) -> Self {
        Self::Wrapped(error)
    }
}

impl From<Errors> for AnyError {
    #[inline]
    fn from(errors: Errors) -> Self {
        Self::Aggregate(Arc::new(errors))
    }
}

impl From<Message> for AnyError {
    #[inline]
    fn from(message: Message) -> Self {
        Self::comparable(message)
    }
}

impl From<UnexpectedType> for AnyError {
    #[inline]
    fn from(error: UnexpectedType) -> Self {
        Self::comparable(error)
    }
}

impl From<&'static str> for AnyError {
    #[inline]
    fn from(text: &'static str) -> Self {
        Self::comparable(Message::literal(text))
    }
}

impl From<String> for AnyError {
    #[inline]
    fn from(text: String) -> Self {
        Self::comparable(Message::literal(text))
    }
}

impl From<Box<DynError>> for AnyError {
    #[inline]
    fn from(error: Box<DynError>) -> Self {
        Self::Leaf(Leaf::from_boxed(error))
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for AnyError {
    #[inline]
    fn from(error: std::io::Error) -> Self {
        Self::leaf(error)
    }
}
