//! Advanced API level for library authors and power users.
//!
//! This module exposes internal structures and low-level building blocks.
//! Use these types when you need to build custom error shapes, inspect
//! captured stacks or render traces against a non-global configuration.

// Core internals
pub use crate::types::any_error::Leaf;
pub use crate::types::concurrent::SNAPSHOT_SEPARATOR;
pub use crate::types::error::{CAUSE_LABEL, CONTEXT_LABEL};
pub use crate::types::ErrorVec;

// Message arguments and type samples
pub use crate::types::message::Arg;
pub use crate::types::unexpected_type::Sample;

// Stack capture
pub use crate::trace::{Trace, INLINE_FRAMES};
#[cfg(feature = "std")]
pub use crate::trace::{ConfigError, Frame, TraceConfig, TraceDisplay, ROOT_ENV};
