use crate::sync::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A per-file failure surfaced by a pass, with the catalog key it concerns.
#[derive(Debug)]
pub struct FileFailure {
    pub path: String,
    pub error: Error,
}

/// The outcome of one sync pass.
///
/// A pass that ran to completion always produces one of these, even when some
/// files errored — only a store-level failure aborts without a report. There
/// is no global log-file side channel; everything a caller needs to render or
/// assert on is in here.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Paths observed for the first time and inserted.
    pub added: u64,
    /// Paths whose fingerprint changed and were re-extracted.
    pub updated: u64,
    /// Paths with a matching fingerprint, skipped without opening the archive.
    pub skipped: u64,
    /// Catalog entries pruned because the path was not observed this pass.
    pub removed: u64,
    /// Per-file failures. These paths' prior entries were left untouched.
    pub errors: Vec<FileFailure>,
    /// Paths catalogued with an empty descriptor payload because the embedded
    /// descriptor was missing or malformed.
    pub degraded: Vec<String>,
    /// The pass was cancelled: counts cover the work committed before the
    /// cancellation point, and the deletion barrier did not run.
    pub cancelled: bool,
}

impl SyncReport {
    /// Number of files that failed this pass.
    pub fn errored(&self) -> u64 {
        self.errors.len() as u64
    }

    /// Whether the pass changed the catalog at all.
    pub fn changed_catalog(&self) -> bool {
        self.added + self.updated + self.removed > 0
    }

    /// Whether every observed file was processed without error.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for SyncReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "added={} updated={} skipped={} removed={} errored={}",
            self.added,
            self.updated,
            self.skipped,
            self.removed,
            self.errored(),
        )?;
        if self.cancelled {
            write!(f, " (cancelled)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_summary() {
        let report = SyncReport { added: 2, skipped: 10, ..SyncReport::default() };
        assert_eq!(report.to_string(), "added=2 updated=0 skipped=10 removed=0 errored=0");
        assert!(report.changed_catalog());
        assert!(report.is_clean());
    }

    #[test]
    fn test_cancelled_marker() {
        let report = SyncReport { cancelled: true, ..SyncReport::default() };
        assert!(report.to_string().ends_with("(cancelled)"));
        assert!(!report.changed_catalog());
    }
}
