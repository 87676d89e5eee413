mod entry;
mod fingerprint;
mod row;

pub use self::entry::CatalogEntry;
pub use self::fingerprint::{Fingerprint, FingerprintMode};
pub(crate) use self::row::EntryRow;
