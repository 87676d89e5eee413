use super::{Confidence, FixMarker, Numbering};

/// Structured identity derived from a raw archive filename.
///
/// Immutable once computed. The catalog never stores one of these — identity
/// is always re-derived from the path on demand, so a rule-table improvement
/// retroactively applies to every file already on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchiveIdentity {
    /// Normalized series title: case-folded, separator runs collapsed to
    /// single spaces, punctuation stripped.
    pub series: String,
    /// Volume or chapter number, when one could be parsed.
    pub numbering: Option<Numbering>,
    /// Corrected re-release marker, when the filename carried one.
    pub fix: Option<FixMarker>,
    /// The name of the rule that matched, for diagnostics.
    pub rule: Option<&'static str>,
    /// The original input, retained for diagnostics and manual review.
    pub raw: String,
    pub confidence: Confidence,
}
impl ArchiveIdentity {
    /// Whether the filename marked this as a corrected re-release.
    pub fn is_fixed_release(&self) -> bool {
        self.fix.is_some()
    }

    /// The explicit fix index, when the marker carried one. Absent for a bare
    /// `(F)` marker (the first fix) and for unfixed releases.
    pub fn fix_index(&self) -> Option<u32> {
        self.fix.and_then(FixMarker::index)
    }
}
impl AsRef<ArchiveIdentity> for ArchiveIdentity {
    fn as_ref(&self) -> &ArchiveIdentity {
        self
    }
}
