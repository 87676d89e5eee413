//! Archive Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};

/// An archive error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally:
/// a [`Container`](ErrorKind::Container) failure means the file itself is
/// suspect and must not be treated as observed content; a
/// [`Descriptor`](ErrorKind::Descriptor) failure only poisons the embedded
/// metadata, the pages are still fine.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The container could not be opened as a zip archive at all.
    #[display("unreadable archive container")]
    Container,
    /// An embedded descriptor exists but could not be parsed.
    #[display("malformed embedded descriptor")]
    Descriptor,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The bytes are either a valid container or they're not.
        false
    }
}
