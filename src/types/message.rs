//! Formatted messages that are only rendered when displayed.
//!
//! A [`Message`] keeps its template and its arguments apart until it is
//! formatted, so building one on an error path costs a few clones instead of
//! a full `format!`. Templates use the familiar Rust placeholder syntax:
//!
//! - `{}` takes the next positional argument
//! - `{N}` takes argument `N` without advancing the positional counter
//! - `{:?}` and `{N:?}` use the argument's `Debug` output
//! - `{{` and `}}` are literal braces
//!
//! A placeholder that has no matching argument renders as `{MISSING}`.
//!
//! Text that is already final, such as a string converted into an error,
//! becomes a [`Message::literal`] and is never parsed.
//!
//! # Examples
//!
//! ```
//! use error_lineage::{message, Message};
//!
//! let msg = message!("failed to open {} ({:?})", "config.toml", 2);
//! assert_eq!(msg.to_string(), "failed to open config.toml (2)");
//!
//! let escaped = Message::new("{{ not a placeholder }}");
//! assert_eq!(escaped.to_string(), "{ not a placeholder }");
//!
//! let verbatim = Message::from(format!("state {:?}", ()));
//! assert_eq!(verbatim.to_string(), "state ()");
//! assert_eq!(Message::from("{} stays").to_string(), "{} stays");
//! ```
use core::fmt::{self, Debug, Display};

use crate::types::alloc_type::{format, Arc, Cow, Vec};

trait ArgValue: Send + Sync {
    fn type_name(&self) -> &'static str;
    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

struct Displayed<T>(T);

impl<T> ArgValue for Displayed<T>
where
    T: Display + Debug + Send + Sync + 'static,
{
    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }

    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

struct DebugOnly<T>(T);

impl<T> ArgValue for DebugOnly<T>
where
    T: Debug + Send + Sync + 'static,
{
    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }

    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

/// A type-erased message argument.
///
/// Arguments are shared, so cloning a [`Message`] never clones the
/// underlying values. Two arguments are equal when they have the same type
/// and the same `Debug` output.
#[derive(Clone)]
pub struct Arg(Arc<dyn ArgValue>);

impl Arg {
    /// Wraps a value that renders through `Display` (and `Debug` for `{:?}`).
    #[inline]
    pub fn new<T>(value: T) -> Self
    where
        T: Display + Debug + Send + Sync + 'static,
    {
        Self(Arc::new(Displayed(value)))
    }

    /// Wraps a value that only implements `Debug`; `{}` renders it with `Debug` too.
    #[inline]
    pub fn debug<T>(value: T) -> Self
    where
        T: Debug + Send + Sync + 'static,
    {
        Self(Arc::new(DebugOnly(value)))
    }

    /// Name of the wrapped value's type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }
}

impl Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_display(f)
    }
}

impl Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_debug(f)
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        self.type_name() == other.type_name() && format!("{self:?}") == format!("{other:?}")
    }
}

/// An immutable template plus positional arguments.
///
/// `Message` implements `core::error::Error`, so it is the usual leaf of an
/// [`Error`](crate::Error) built with the `errorf!` family of macros.
///
/// Strings converted with `From` are [literal](Message::literal): text that
/// was formatted at run time is shown as is, braces included. A template
/// without any braces renders the same either way and is stored as literal.
#[derive(Clone, PartialEq)]
pub struct Message {
    template: Cow<'static, str>,
    args: Vec<Arg>,
    literal: bool,
}

impl Message {
    /// Creates a message without arguments.
    #[inline]
    pub fn new(template: impl Into<Cow<'static, str>>) -> Self {
        let template = template.into();
        let literal = !has_braces(&template);
        Self { template, args: Vec::new(), literal }
    }

    /// Creates a message whose text is rendered exactly as given.
    ///
    /// Braces are not placeholders and arguments are never substituted.
    #[inline]
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        Self { template: text.into(), args: Vec::new(), literal: true }
    }

    /// Creates a message from a template and a prepared argument list.
    #[inline]
    pub fn with_args(template: impl Into<Cow<'static, str>>, args: Vec<Arg>) -> Self {
        let template = template.into();
        let literal = !has_braces(&template);
        Self { template, args, literal }
    }

    /// Appends a `Display` argument.
    #[must_use]
    #[inline]
    pub fn arg<T>(mut self, value: T) -> Self
    where
        T: Display + Debug + Send + Sync + 'static,
    {
        self.args.push(Arg::new(value));
        self
    }

    /// Appends a `Debug`-only argument.
    #[must_use]
    #[inline]
    pub fn debug_arg<T>(mut self, value: T) -> Self
    where
        T: Debug + Send + Sync + 'static,
    {
        self.args.push(Arg::debug(value));
        self
    }

    /// Returns `true` if the text is rendered verbatim.
    #[inline]
    pub fn is_literal(&self) -> bool {
        self.literal
    }

    /// The unrendered template.
    #[inline]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The positional arguments, in order.
    #[inline]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }
}

fn has_braces(text: &str) -> bool {
    text.contains(['{', '}'])
}

#[derive(Debug, PartialEq, Eq)]
struct Placeholder {
    index: Option<usize>,
    debug: bool,
}

impl Placeholder {
    /// Parses the text between `{` and `}`; `None` means the braces are literal text.
    fn parse(spec: &str) -> Option<Self> {
        let (index, format) = match spec.split_once(':') {
            Some((index, format)) => (index, format),
            None => (spec, ""),
        };
        let index = if index.is_empty() {
            None
        } else {
            Some(index.parse::<usize>().ok()?)
        };
        let debug = match format {
            "" => false,
            "?" => true,
            _ => return None,
        };
        Some(Self { index, debug })
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literal {
            return f.write_str(&self.template);
        }
        let mut rest: &str = &self.template;
        let mut next = 0usize;

        while let Some(at) = rest.find(['{', '}']) {
            f.write_str(&rest[..at])?;
            let tail = &rest[at..];

            if tail.starts_with("{{") || tail.starts_with("}}") {
                f.write_str(&tail[..1])?;
                rest = &tail[2..];
                continue;
            }
            if tail.starts_with('}') {
                f.write_str("}")?;
                rest = &tail[1..];
                continue;
            }

            let Some(end) = tail[1..].find('}') else {
                f.write_str(tail)?;
                return Ok(());
            };
            let closed = &tail[..end + 2];
            rest = &tail[end + 2..];

            let Some(placeholder) = Placeholder::parse(&tail[1..end + 1]) else {
                f.write_str(closed)?;
                continue;
            };
            let index = placeholder.index.unwrap_or_else(|| {
                next += 1;
                next - 1
            });
            match self.args.get(index) {
                Some(arg) if placeholder.debug => Debug::fmt(arg, f)?,
                Some(arg) => Display::fmt(arg, f)?,
                None => f.write_str("{MISSING}")?,
            }
        }

        f.write_str(rest)
    }
}

impl Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("template", &self.template)
            .field("args", &self.args)
            .field("literal", &self.literal)
            .finish()
    }
}

impl core::error::Error for Message {}

impl From<&'static str> for Message {
    #[inline]
    fn from(text: &'static str) -> Self {
        Self::literal(text)
    }
}

impl From<crate::types::alloc_type::String> for Message {
    #[inline]
    fn from(text: crate::types::alloc_type::String) -> Self {
        Self::literal(text)
    }
}
