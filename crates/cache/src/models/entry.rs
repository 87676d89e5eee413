use super::Fingerprint;
use tanko_archive::DescriptorPayload;
use time::UtcDateTime;

/// One persisted catalog row: everything known about a single archive path.
///
/// The catalog deliberately never stores derived identity (series, volume) —
/// it is the source of truth for "what changed on disk", and the name
/// resolver is the source of truth for "what a name means". Keeping those
/// apart means a resolver improvement never requires a catalog rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Normalized absolute path; the primary key.
    pub path: String,
    /// Change-detection signature from the pass that last touched this row.
    pub fingerprint: Fingerprint,
    /// Flattened embedded-descriptor fields. Empty when the archive has no
    /// (readable) descriptor.
    pub descriptor: DescriptorPayload,
    /// When a sync pass last created or updated this row.
    pub last_scanned_at: UtcDateTime,
}
impl CatalogEntry {
    pub fn new(
        path: impl Into<String>,
        fingerprint: Fingerprint,
        descriptor: DescriptorPayload,
        last_scanned_at: UtcDateTime,
    ) -> Self {
        Self {
            path: path.into(),
            fingerprint,
            descriptor,
            last_scanned_at,
        }
    }
}
impl AsRef<CatalogEntry> for CatalogEntry {
    fn as_ref(&self) -> &CatalogEntry {
        self
    }
}
