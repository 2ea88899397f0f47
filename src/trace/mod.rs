//! Call-stack snapshots attached to [`Error`](crate::Error) values.
//!
//! Capturing only records instruction pointers. Symbol names, files and line
//! numbers are resolved when the trace is rendered, so building an error stays
//! cheap even when nobody ever prints it.
//!
//! Without the `std` feature there is no unwinder to walk the stack:
//! [`Trace::capture`] returns `None` and errors carry no trace section.
#[cfg(feature = "std")]
mod config;

#[cfg(feature = "std")]
pub use config::{ConfigError, TraceConfig, ROOT_ENV};

use core::fmt;

use smallvec::SmallVec;

#[cfg(feature = "std")]
use crate::types::alloc_type::{format, String, ToString, Vec};

/// Number of frames kept inline before the buffer spills to the heap.
///
/// Past this window the buffer doubles its capacity each time it fills, so
/// deep stacks are recorded in full.
pub const INLINE_FRAMES: usize = 32;

/// An immutable snapshot of the call stack, newest frame first.
#[derive(Clone, PartialEq, Eq)]
pub struct Trace {
    ips: SmallVec<[usize; INLINE_FRAMES]>,
}

impl Trace {
    /// Captures the current stack.
    ///
    /// `skip = 0` makes the caller of `capture` the first recorded frame; each
    /// additional unit drops one more frame above it. Returns `None` when no
    /// frames remain (or when stack walking is unavailable).
    #[cfg(feature = "std")]
    #[inline(never)]
    pub fn capture(skip: usize) -> Option<Self> {
        let anchor = Self::capture as fn(usize) -> Option<Self> as usize;
        let mut ips: SmallVec<[usize; INLINE_FRAMES]> = SmallVec::new();
        let mut anchor_at = None;

        backtrace::trace(|frame| {
            if anchor_at.is_none() && frame.symbol_address() as usize == anchor {
                anchor_at = Some(ips.len());
            }
            ips.push(frame.ip() as usize);
            true
        });

        let start = first_recorded(anchor_at, skip);
        if start >= ips.len() {
            return None;
        }
        ips.drain(..start);
        Some(Self { ips })
    }

    /// Captures the current stack.
    ///
    /// Stack walking requires the `std` feature; this build never records frames.
    #[cfg(not(feature = "std"))]
    #[inline]
    pub fn capture(_skip: usize) -> Option<Self> {
        None
    }

    /// Number of captured frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.ips.len()
    }

    /// Returns `true` if no frame was captured.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }

    /// The raw instruction pointers, newest first.
    #[inline]
    pub fn instruction_pointers(&self) -> &[usize] {
        &self.ips
    }

    /// Resolves every captured frame, shortening paths with the process-wide
    /// [`TraceConfig`].
    #[cfg(feature = "std")]
    pub fn frames(&self) -> Vec<Frame> {
        self.frames_with(TraceConfig::global())
    }

    /// Resolves every captured frame against an explicit configuration.
    ///
    /// An instruction pointer that maps to inlined functions yields one frame
    /// per function. Pointers that resolve to nothing are skipped. At most
    /// `config.max_frames` frames are returned.
    #[cfg(feature = "std")]
    pub fn frames_with(&self, config: &TraceConfig) -> Vec<Frame> {
        let limit = config.max_frames.unwrap_or(usize::MAX);
        let mut frames = Vec::with_capacity(self.ips.len().min(limit));
        for &ip in &self.ips {
            if frames.len() >= limit {
                break;
            }
            backtrace::resolve(ip as *mut core::ffi::c_void, |symbol| {
                if frames.len() >= limit {
                    return;
                }
                let function = symbol.name().map(|name| format!("{name:#}"));
                let file = symbol
                    .filename()
                    .map(|path| config.shorten(path).display().to_string());
                if function.is_none() && file.is_none() {
                    return;
                }
                frames.push(Frame {
                    function: function.unwrap_or_else(|| "<unknown>".to_string()),
                    file,
                    line: symbol.lineno(),
                });
            });
        }
        frames
    }

    /// Renders the trace against an explicit configuration instead of the
    /// process-wide one.
    #[cfg(feature = "std")]
    #[inline]
    pub fn display_with<'a>(&'a self, config: &'a TraceConfig) -> TraceDisplay<'a> {
        TraceDisplay { trace: self, config }
    }

    /// Writes each frame as `"\n{function}\n\t{file}:{line}"`.
    ///
    /// Used by [`Error`](crate::Error) so that an unresolvable trace adds
    /// nothing to the rendered error.
    pub(crate) fn write_sections(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "std")]
        for frame in self.frames() {
            write!(f, "\n{frame}")?;
        }
        #[cfg(not(feature = "std"))]
        let _ = f;
        Ok(())
    }
}

fn first_recorded(anchor_at: Option<usize>, skip: usize) -> usize {
    match anchor_at {
        Some(anchor) => anchor + 1 + skip,
        // The capture frame could not be identified, keep the whole stack.
        None => 0,
    }
}

impl fmt::Debug for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trace").field("frames", &self.ips.len()).finish()
    }
}

/// Frames separated by newlines, each as `function\n\tfile:line`.
impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "std")]
        return fmt::Display::fmt(&self.display_with(TraceConfig::global()), f);
        #[cfg(not(feature = "std"))]
        {
            let _ = f;
            Ok(())
        }
    }
}

/// A resolved stack frame.
#[cfg(feature = "std")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Demangled function name without the trailing hash.
    pub function: String,
    /// Source file, shortened by the configured root prefix.
    pub file: Option<String>,
    /// Line number within `file`.
    pub line: Option<u32>,
}

#[cfg(feature = "std")]
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\t", self.function)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{file}:{line}"),
            (Some(file), None) => f.write_str(file),
            (None, _) => f.write_str("<unknown>"),
        }
    }
}

/// Display adapter returned by [`Trace::display_with`].
#[cfg(feature = "std")]
pub struct TraceDisplay<'a> {
    trace: &'a Trace,
    config: &'a TraceConfig,
}

#[cfg(feature = "std")]
impl fmt::Display for TraceDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.trace.frames_with(self.config).iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(frame, f)?;
        }
        Ok(())
    }
}
