use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use time::UtcDateTime;

/// How the synchronizer decides whether a file changed since the last pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FingerprintMode {
    /// Size + modification time only. Strictly cheaper than opening the
    /// archive; an mtime touch with unchanged bytes counts as changed. This
    /// is the documented trade-off, not a bug.
    #[default]
    Cheap,
    /// BLAKE3 hash of the file contents, for filesystems with unreliable
    /// mtimes. The hash is authoritative and is cached against the cheap
    /// signal, so unchanged files are only re-hashed after their cheap
    /// signal moves.
    ContentHash,
}
impl Display for FingerprintMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Cheap => write!(f, "cheap"),
            Self::ContentHash => write!(f, "content-hash"),
        }
    }
}

/// Change-sensitive signature of a file on disk.
///
/// The cheap signal (size + mtime) is always present; the content hash only
/// when [`FingerprintMode::ContentHash`] is in effect. Modification times are
/// compared at second precision because that's what survives the round-trip
/// through the catalog's unix-timestamp column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    /// File size in bytes.
    pub size: u64,
    /// Last modification timestamp.
    pub modified_at: UtcDateTime,
    /// BLAKE3 hash of the file contents, when the authoritative mode is on.
    pub content_hash: Option<String>,
}
impl Fingerprint {
    /// A cheap (size + mtime) fingerprint.
    pub fn cheap(size: u64, modified_at: UtcDateTime) -> Self {
        Self { size, modified_at, content_hash: None }
    }

    /// Attach an authoritative content hash to this fingerprint.
    pub fn with_content_hash(self, hash: impl Into<String>) -> Self {
        Self { content_hash: Some(hash.into()), ..self }
    }

    /// Whether the cheap signal matches what's currently on disk.
    pub fn matches_cheap(&self, size: u64, modified_at: UtcDateTime) -> bool {
        self.size == size && self.modified_at.unix_timestamp() == modified_at.unix_timestamp()
    }
}
