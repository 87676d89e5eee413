mod classify;
pub mod error;
mod file;
mod pass;
mod report;
mod walk;

pub use self::classify::Disposition;
pub use self::pass::{MAX_SYNC_CONCURRENCY, SyncOptions, sync};
pub use self::report::{FileFailure, SyncReport};
pub use self::walk::catalog_key;
