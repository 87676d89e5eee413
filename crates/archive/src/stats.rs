use std::fmt::{Display, Formatter, Result as FmtResult};

/// Entry counts for an archive, gathered without decompressing anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageStats {
    /// Entries with a recognized image extension.
    pub pages: u32,
    /// Entries that are neither pages, directories, nor the descriptor.
    pub junk: u32,
}
impl PageStats {
    /// Whether the archive carries entries that don't belong in a comic.
    pub fn has_junk(&self) -> bool {
        self.junk > 0
    }
}
impl Display for PageStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} pages, {} junk", self.pages, self.junk)
    }
}
