//! Errors for values that arrived with the wrong type.
//!
//! # Examples
//!
//! ```
//! use error_lineage::{AnyType, UnexpectedType};
//!
//! let err = UnexpectedType::new(0u32, "zero");
//! assert!(err.to_string().ends_with(
//!     "expected: 0 (type: u32), but found: \"zero\" (type: &str)"
//! ));
//!
//! let err = UnexpectedType::new(AnyType::new().or(0u8).or(0i64), 1.5f32);
//! assert!(err.to_string().contains("expected any of: 0 (type: u8) or 0 (type: i64)"));
//! ```
use core::any::Any;
use core::fmt::{self, Debug, Display};

use crate::types::alloc_type::{format, Arc, Vec};

trait SampleValue: Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T> SampleValue for T
where
    T: Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A value kept together with the name of its type.
#[derive(Clone)]
pub struct Sample {
    type_name: &'static str,
    value: Arc<dyn SampleValue>,
}

impl Sample {
    /// Records `value` and its type.
    pub fn of<T>(value: T) -> Self
    where
        T: Debug + Send + Sync + 'static,
    {
        Self { type_name: core::any::type_name::<T>(), value: Arc::new(value) }
    }

    /// Name of the recorded value's type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The recorded value, if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        let value: &dyn SampleValue = &*self.value;
        value.as_any().downcast_ref::<T>()
    }
}

impl Debug for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.value, f)
    }
}

/// `value (type: T)`.
impl Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (type: {})", self.value, self.type_name)
    }
}

impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && format!("{self:?}") == format!("{other:?}")
    }
}

/// Marks an expected value as "any of these types".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnyType {
    options: Vec<Sample>,
}

impl AnyType {
    /// An empty set of alternatives.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alternative.
    #[must_use]
    pub fn or<T>(mut self, value: T) -> Self
    where
        T: Debug + Send + Sync + 'static,
    {
        self.options.push(Sample::of(value));
        self
    }

    /// The alternatives, in the order they were added.
    #[inline]
    pub fn options(&self) -> &[Sample] {
        &self.options
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Expected {
    One(Sample),
    AnyOf(AnyType),
}

/// A value was found where a value of another type was expected.
///
/// Renders as
/// `UnexpectedType: expected: <value> (type: <type>), but found: <value> (type: <type>)`,
/// with `expected any of: a (type: A) or b (type: B)` when the expectation is
/// an [`AnyType`].
#[derive(Clone, Debug, PartialEq)]
pub struct UnexpectedType {
    expected: Expected,
    actual: Sample,
}

impl UnexpectedType {
    /// Records what was expected and what was found.
    ///
    /// Passing an [`AnyType`] as `expected` describes a set of acceptable
    /// types rather than a single one.
    pub fn new<E, A>(expected: E, actual: A) -> Self
    where
        E: Debug + Send + Sync + 'static,
        A: Debug + Send + Sync + 'static,
    {
        let expected = match (&expected as &dyn Any).downcast_ref::<AnyType>() {
            Some(any) => Expected::AnyOf(any.clone()),
            None => Expected::One(Sample::of(expected)),
        };
        Self { expected, actual: Sample::of(actual) }
    }

    /// The acceptable values; one entry unless built from an [`AnyType`].
    pub fn expected(&self) -> &[Sample] {
        match &self.expected {
            Expected::One(sample) => core::slice::from_ref(sample),
            Expected::AnyOf(any) => any.options(),
        }
    }

    /// Returns `true` if built from an [`AnyType`].
    pub fn expects_any(&self) -> bool {
        matches!(self.expected, Expected::AnyOf(_))
    }

    /// The value that was actually found.
    #[inline]
    pub fn actual(&self) -> &Sample {
        &self.actual
    }
}

impl Display for UnexpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = core::any::type_name::<Self>();
        let name = name.rsplit_once("::").map_or(name, |(_, short)| short);
        write!(f, "{name}: ")?;
        match &self.expected {
            Expected::One(sample) => write!(f, "expected: {sample}")?,
            Expected::AnyOf(any) if any.options.is_empty() => f.write_str("expected any of: nothing")?,
            Expected::AnyOf(any) => {
                f.write_str("expected any of: ")?;
                for (i, option) in any.options.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    Display::fmt(option, f)?;
                }
            },
        }
        write!(f, ", but found: {}", self.actual)
    }
}

impl core::error::Error for UnexpectedType {}
