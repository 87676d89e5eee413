//! Error types for the [`sync`](super) module.
//!
//! Uses [`exn`] for automatic location tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A sync error with automatic location tracking via [`exn::Exn`].
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for sync operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classifies the origin of a sync failure.
///
/// The split that matters is per-file vs store-level:
///
/// ### Per-file (never aborts the pass)
/// - [`ErrorKind::Walk`] — a directory or entry could not be enumerated.
/// - [`ErrorKind::Io`] — an archive's bytes could not be read from disk.
/// - [`ErrorKind::Archive`] — the container could not be opened.
///
/// These end up in the [`SyncReport`](super::SyncReport) error list; the prior
/// catalog entry for the path (if any) is left untouched, because the path was
/// never confirmed missing.
///
/// ### Store-level (always aborts the pass)
/// - [`ErrorKind::Cache`] — a catalog read or write failed. Aborting beats
///   continuing against a store in an unknown state; entries committed before
///   the failure remain valid.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Directory enumeration failed at or under the given path.
    #[display("failed to walk: {}", _0.display())]
    Walk(#[error(not(source))] PathBuf),
    /// Reading a file's contents from disk failed.
    #[display("failed to read: {}", _0.display())]
    Io(#[error(not(source))] PathBuf),
    /// The archive container could not be opened.
    #[display("unreadable archive: {}", _0.display())]
    Archive(#[error(not(source))] PathBuf),
    /// A catalog operation via [`tanko_cache::Repository`] failed.
    #[display("catalog operation failed")]
    Cache,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            // Transient filesystem races (a file deleted mid-pass) clear up
            // by the next pass.
            Self::Walk(_) | Self::Io(_) => true,
            Self::Archive(_) | Self::Cache => false,
        }
    }

    /// The file path this error is about, when it is a per-file error.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Walk(path) | Self::Io(path) | Self::Archive(path) => Some(path),
            Self::Cache => None,
        }
    }
}
