//! `serde` support for structured logging of errors.
//!
//! Errors serialize one way only; leaves become their rendered text, wrapped
//! errors become `{ message, cause?, context?, trace? }` and aggregates become
//! `{ count, errors }`.
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::types::{AnyError, Error, Errors};

impl Serialize for AnyError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(leaf) => serializer.collect_str(leaf),
            Self::Wrapped(error) => error.serialize(serializer),
            Self::Aggregate(errors) => errors.serialize(serializer),
        }
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[cfg(feature = "std")]
        let frames = self.trace().map(|trace| trace.frames());

        let mut state = serializer.serialize_struct("Error", 4)?;
        state.serialize_field("message", self.inner())?;
        match self.cause() {
            Some(cause) => state.serialize_field("cause", cause)?,
            None => state.skip_field("cause")?,
        }
        match self.context() {
            Some(context) => state.serialize_field("context", context)?,
            None => state.skip_field("context")?,
        }
        #[cfg(feature = "std")]
        match &frames {
            Some(frames) if !frames.is_empty() => state.serialize_field("trace", frames)?,
            _ => state.skip_field("trace")?,
        }
        #[cfg(not(feature = "std"))]
        state.skip_field("trace")?;
        state.end()
    }
}

impl Serialize for Errors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Errors", 2)?;
        state.serialize_field("count", &self.len())?;
        state.serialize_field("errors", self.members())?;
        state.end()
    }
}
