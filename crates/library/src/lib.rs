//! Incremental synchronization of an archive library with its catalog.
//!
//! One [`sync`] pass walks a directory of comic archives, decides per path
//! whether the file is new, changed, unchanged, or gone relative to the
//! persisted catalog, extracts metadata from changed files only, and returns
//! a [`SyncReport`]. Unchanged files are skipped on the strength of a cheap
//! fingerprint without ever being opened — on a quiet library the pass costs
//! one directory walk and one catalog read.
//!
//! Filename identity lives in `tanko-naming`, container reading in
//! `tanko-archive`, persistence in `tanko-cache`; this crate owns the state
//! machine that ties them together.

pub mod error;
mod notify;
pub mod sync;

pub use crate::notify::{Notifier, NullNotifier, notify_changed, should_notify};
pub use crate::sync::{MAX_SYNC_CONCURRENCY, SyncOptions, SyncReport, catalog_key, sync};

use std::path::Path;
use tanko_naming::ArchiveIdentity;

/// Resolves the identity of an archive from its path's final component.
///
/// Identity is always derived on demand — the catalog never stores it — so
/// this is the one place a path becomes a series/volume claim.
pub fn identity_of(path: impl AsRef<Path>) -> ArchiveIdentity {
    let path = path.as_ref();
    let name = path.file_name().map(|name| name.to_string_lossy().into_owned());
    tanko_naming::resolve(name.unwrap_or_else(|| path.to_string_lossy().into_owned()))
}
