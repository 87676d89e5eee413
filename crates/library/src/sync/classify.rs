use tanko_cache::Fingerprint;
use time::UtcDateTime;

/// Per-path state-machine classification for one pass.
///
/// The fourth state from the model — Missing — never appears here: a path is
/// only missing once the *whole* walk has completed without observing it, so
/// that verdict belongs to the deletion barrier, not to per-file
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Not in the catalog; full extraction required.
    Unseen,
    /// In the catalog with a matching cheap signal; skip without any I/O.
    /// This is the efficiency-critical path: deciding it must never require
    /// opening the archive.
    Unchanged,
    /// In the catalog but the cheap signal differs; the file needs a fresh
    /// look. In content-hash mode this is provisional — the hash may still
    /// prove the content identical.
    Changed,
}

/// Classifies a walked file against its prior fingerprint using only the
/// cheap signal (size + mtime).
pub(crate) fn classify_cheap(prior: Option<&Fingerprint>, size: u64, modified_at: UtcDateTime) -> Disposition {
    match prior {
        None => Disposition::Unseen,
        Some(fingerprint) if fingerprint.matches_cheap(size, modified_at) => Disposition::Unchanged,
        Some(_) => Disposition::Changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mtime(unix: i64) -> UtcDateTime {
        UtcDateTime::from_unix_timestamp(unix).unwrap()
    }

    #[test]
    fn test_unknown_path_is_unseen() {
        assert_eq!(classify_cheap(None, 100, mtime(1000)), Disposition::Unseen);
    }

    #[test]
    fn test_matching_signal_is_unchanged() {
        let prior = Fingerprint::cheap(100, mtime(1000));
        assert_eq!(classify_cheap(Some(&prior), 100, mtime(1000)), Disposition::Unchanged);
    }

    #[test]
    fn test_size_or_mtime_drift_is_changed() {
        let prior = Fingerprint::cheap(100, mtime(1000));
        assert_eq!(classify_cheap(Some(&prior), 101, mtime(1000)), Disposition::Changed);
        // An mtime touch alone reclassifies the file, even if the bytes are
        // identical: the cheap signal is size + mtime, nothing deeper.
        assert_eq!(classify_cheap(Some(&prior), 100, mtime(2000)), Disposition::Changed);
    }
}
