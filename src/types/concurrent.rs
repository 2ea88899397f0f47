//! A shared sink for errors produced by concurrently running work.
//!
//! # Examples
//!
//! ```
//! use error_lineage::ConcurrentErrors;
//!
//! let errors = ConcurrentErrors::new();
//! std::thread::scope(|scope| {
//!     for id in 0..3 {
//!         let errors = &errors;
//!         scope.spawn(move || errors.add(format!("worker {id} failed")));
//!     }
//! });
//!
//! let err = errors.snapshot().unwrap();
//! assert!(err.to_string().starts_with("3 errors:\n    worker "));
//! ```
use core::fmt::{self, Debug, Display};

use crate::sync::Mutex;
use crate::types::{AnyError, ErrorVec, Errors, Message};

/// Separator placed between members in a snapshot.
pub const SNAPSHOT_SEPARATOR: &str = "\n    ";

/// An append-only list of errors guarded by a mutex.
///
/// Workers call [`add`](Self::add) instead of returning early, so one failure
/// does not hide the others. After the workers are done, [`snapshot`](Self::snapshot)
/// turns whatever was collected into one error.
#[derive(Default)]
pub struct ConcurrentErrors {
    errors: Mutex<ErrorVec<AnyError>>,
}

impl ConcurrentErrors {
    /// Creates an empty collector.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one error.
    pub fn add(&self, error: impl Into<AnyError>) {
        let error = error.into();
        let mut errors = self.errors.lock();
        errors.push(error);
        log_event!(trace, count = errors.len(), "collected concurrent error");
    }

    /// Appends several errors in order, dropping `None`s.
    ///
    /// The batch is appended under a single lock acquisition, so it stays
    /// contiguous even when other threads add at the same time.
    pub fn add_all<I, E>(&self, errors: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Option<AnyError>>,
    {
        let batch: ErrorVec<AnyError> = errors.into_iter().filter_map(Into::into).collect();
        if batch.is_empty() {
            return;
        }
        let mut errors = self.errors.lock();
        errors.extend(batch);
        log_event!(trace, count = errors.len(), "collected concurrent errors");
    }

    /// Number of errors collected so far.
    pub fn len(&self) -> usize {
        self.errors.lock().len()
    }

    /// Returns `true` if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.errors.lock().is_empty()
    }

    /// Joins the collected errors into one, or returns `None` if there are none.
    ///
    /// The result holds a copy of the current members; its text
    /// (`"<n> errors:\n    <first>\n    <second>..."`) is produced when it is
    /// displayed. Later additions show up in later snapshots only.
    pub fn snapshot(&self) -> Option<AnyError> {
        let members = {
            let errors = self.errors.lock();
            if errors.is_empty() {
                return None;
            }
            errors.clone()
        };
        log_event!(debug, count = members.len(), "snapshot of concurrent errors");
        let count = members.len();
        Some(Message::new("{} errors:\n    {}").arg(count).arg(Unjoined(members)).into())
    }

    /// Flattens the collected errors into an [`Errors`] aggregate.
    pub fn aggregate(&self) -> Option<Errors> {
        let members = self.errors.lock().clone();
        Errors::aggregate(members)
    }
}

impl Debug for ConcurrentErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentErrors").field("errors", &*self.errors.lock()).finish()
    }
}

/// Members of a snapshot, joined only when displayed.
struct Unjoined(ErrorVec<AnyError>);

impl Display for Unjoined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(SNAPSHOT_SEPARATOR)?;
            }
            Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl Debug for Unjoined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
