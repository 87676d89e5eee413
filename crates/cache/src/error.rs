//! Catalog Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};

/// A catalog error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Anything store-level ([`Database`](ErrorKind::Database)) is fatal to the
/// sync pass that triggered it: the synchronizer aborts rather than risk a
/// partially-written catalog. Previously committed rows stay valid.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("catalog database error")]
    Database,
    #[display("catalog migration error")]
    Migration,
    /// A row or model field failed conversion.
    #[display("invalid catalog data: {_0}")]
    InvalidData(#[error(not(source))] &'static str),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // SQLITE_BUSY is absorbed by the connection's busy_timeout; anything
        // that still surfaces here won't be fixed by trying again.
        false
    }
}
