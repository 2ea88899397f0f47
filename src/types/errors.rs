//! Flattened aggregates of errors presented as a single error.
//!
//! # Examples
//!
//! ```
//! use error_lineage::{AnyError, Errors};
//!
//! let inner = Errors::aggregate([AnyError::from("b"), AnyError::from("c")]).unwrap();
//! let outer = Errors::aggregate([
//!     Some(AnyError::from("a")),
//!     None,
//!     Some(inner.into()),
//! ])
//! .unwrap();
//!
//! assert_eq!(outer.len(), 3);
//! assert_eq!(outer.to_string(), "3 errors: a, b, c");
//! ```
use core::any::Any;
use core::error::Error as StdError;
use core::fmt::{self, Display};

use crate::types::{AnyError, ErrorVec};

/// An ordered, flattened, non-empty collection of errors.
///
/// No member is ever itself an aggregate: building an `Errors` splices the
/// members of any aggregate input into place, so nesting never survives
/// construction.
#[derive(Clone, Debug)]
pub struct Errors {
    members: ErrorVec<AnyError>,
}

impl Errors {
    /// Aggregates `errors`, dropping `None`s and flattening nested aggregates.
    ///
    /// Returns `None` when nothing is left.
    pub fn aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Option<AnyError>>,
    {
        let mut members = ErrorVec::new();
        for error in errors {
            if let Some(error) = error.into() {
                push_flattened(&mut members, error);
            }
        }
        Self::from_members(members)
    }

    fn from_members(members: ErrorVec<AnyError>) -> Option<Self> {
        if members.is_empty() {
            None
        } else {
            Some(Self { members })
        }
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; an empty aggregate is represented by `None`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The members in flattening order.
    #[inline]
    pub fn members(&self) -> &[AnyError] {
        &self.members
    }

    /// Iterates the members in flattening order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, AnyError> {
        self.members.iter()
    }

    /// The first member.
    #[inline]
    pub fn first(&self) -> &AnyError {
        &self.members[0]
    }

    /// A new aggregate over every member but the first, or `None` if that
    /// leaves nothing.
    ///
    /// Repeated peeling walks the aggregate one member at a time.
    pub fn peel(&self) -> Option<Self> {
        Self::from_members(self.members.iter().skip(1).cloned().collect())
    }

    /// Compares against an aggregate position by position, otherwise looks
    /// for any member matching `target`.
    pub fn matches(&self, target: &AnyError) -> bool {
        if let Some(other) = target.as_aggregate() {
            return self.members.len() == other.members.len()
                && self
                    .members
                    .iter()
                    .zip(other.members.iter())
                    .all(|(member, expected)| member.matches(expected));
        }
        self.members.iter().any(|member| member.matches(target))
    }

    /// Returns `self` if `T` is `Errors`, otherwise the first member that
    /// yields a `T`.
    pub fn extract_as<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        if let Some(this) = (self as &dyn Any).downcast_ref::<T>() {
            return Some(this);
        }
        self.members.iter().find_map(|member| member.extract_as::<T>())
    }
}

fn push_flattened(members: &mut ErrorVec<AnyError>, error: AnyError) {
    match error.as_aggregate() {
        Some(nested) => members.extend(nested.members.iter().cloned()),
        None => members.push(error),
    }
}

/// Aggregates `errors` into a single [`AnyError`]; see [`Errors::aggregate`].
pub fn aggregate<I, E>(errors: I) -> Option<AnyError>
where
    I: IntoIterator<Item = E>,
    E: Into<Option<AnyError>>,
{
    Errors::aggregate(errors).map(AnyError::from)
}

impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors: ", self.members.len())?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(member, f)?;
        }
        Ok(())
    }
}

impl StdError for Errors {}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a AnyError;
    type IntoIter = core::slice::Iter<'a, AnyError>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
