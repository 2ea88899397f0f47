use core::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static GLOBAL: OnceLock<TraceConfig> = OnceLock::new();

/// Environment variable that overrides the root prefix stripped from paths.
pub const ROOT_ENV: &str = "ERROR_LINEAGE_ROOT";

/// How traces are rendered.
///
/// A process has one global configuration, installed at most once with
/// [`TraceConfig::install`] and never changed afterwards. Without an
/// explicit install the first rendering falls back to
/// [`TraceConfig::from_env`]. Rendering reads it through
/// [`TraceConfig::global`]; code that wants different settings passes its own
/// value to [`Trace::display_with`](super::Trace::display_with).
///
/// # Examples
///
/// ```
/// use error_lineage::trace::TraceConfig;
/// use std::path::Path;
///
/// let config = TraceConfig::new().with_root_prefix("/home/build/project");
/// assert_eq!(
///     config.shorten(Path::new("/home/build/project/src/main.rs")),
///     Path::new("src/main.rs")
/// );
/// assert_eq!(config.shorten(Path::new("/rustc/lib.rs")), Path::new("/rustc/lib.rs"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceConfig {
    /// Prefix removed from frame paths that start with it.
    pub root_prefix: Option<PathBuf>,
    /// Upper bound on rendered frames; `None` renders all of them.
    ///
    /// Capture always records the full stack, this only shortens output.
    pub max_frames: Option<usize>,
}

impl TraceConfig {
    /// A configuration that leaves paths untouched.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix stripped from frame paths.
    #[must_use]
    #[inline]
    pub fn with_root_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.root_prefix = Some(prefix.into());
        self
    }

    /// Limits how many frames are rendered.
    #[must_use]
    #[inline]
    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Derives the root prefix from the process environment.
    ///
    /// `ERROR_LINEAGE_ROOT` wins when set. Otherwise `CARGO_MANIFEST_DIR` is
    /// read at run time, which cargo only sets for `cargo run` and
    /// `cargo test`; a binary started any other way gets no prefix unless
    /// `ERROR_LINEAGE_ROOT` is exported. To bake the build-time root into
    /// the binary, install a configuration built from `env!` instead:
    ///
    /// ```
    /// use error_lineage::trace::TraceConfig;
    ///
    /// let config = TraceConfig::new().with_root_prefix(env!("CARGO_MANIFEST_DIR"));
    /// assert!(config.root_prefix.is_some());
    /// // Early in `main`: config.install()?;
    /// ```
    pub fn from_env() -> Self {
        let root_prefix = std::env::var_os(ROOT_ENV)
            .or_else(|| std::env::var_os("CARGO_MANIFEST_DIR"))
            .filter(|root| !root.is_empty())
            .map(PathBuf::from);
        Self { root_prefix, max_frames: None }
    }

    /// Installs this configuration for the whole process.
    ///
    /// Fails if a configuration is already installed, including the
    /// [`from_env`](Self::from_env) default that the first rendering installs
    /// implicitly.
    pub fn install(self) -> Result<(), ConfigError> {
        GLOBAL.set(self).map_err(|_| ConfigError::AlreadyInstalled)
    }

    /// The installed configuration, or the environment-derived default.
    pub fn global() -> &'static TraceConfig {
        GLOBAL.get_or_init(Self::from_env)
    }

    /// Strips the root prefix from `path` when it applies.
    pub fn shorten<'a>(&self, path: &'a Path) -> &'a Path {
        match &self.root_prefix {
            Some(prefix) => path.strip_prefix(prefix).unwrap_or(path),
            None => path,
        }
    }
}

/// Failure to install a [`TraceConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The process-wide configuration was already set.
    AlreadyInstalled,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInstalled => f.write_str("trace configuration is already installed"),
        }
    }
}

impl core::error::Error for ConfigError {}
