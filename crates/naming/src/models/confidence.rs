use std::fmt::{Display, Formatter, Result as FmtResult};

/// How much trust to place in a resolved identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Confidence {
    /// No pattern matched; the series name is a best-effort cleanup and the
    /// numbering is absent. Flag for manual review.
    Unresolved,
    /// The trailing-number fallback heuristic matched.
    Low,
    /// Series and number both matched one of the strict naming rules.
    High,
}
impl Confidence {
    /// Returns `true` if the identity came from a real pattern match rather
    /// than the unresolvable worst case.
    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}
impl Display for Confidence {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Unresolved => write!(f, "unresolved"),
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
        }
    }
}
