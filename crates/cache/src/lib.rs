//! SQLite catalog of archive metadata.
//!
//! This crate provides the persisted catalog that tracks the current known
//! state of the archive library. The catalog is not the source of truth — the
//! archives on disk are. If the database is deleted, a single sync pass
//! rebuilds it.
//!
//! # Architecture
//! One table, one logical row per archive path:
//! - the **fingerprint** (size + mtime, optionally a BLAKE3 content hash)
//!   lets the synchronizer skip unchanged files without opening them;
//! - the **descriptor payload** is the flattened embedded metadata from the
//!   archive, stored as a JSON column;
//! - derived identity (series/volume) is never stored; it is re-resolved from
//!   the filename whenever it's needed.

mod db;
pub mod error;
mod models;
mod repo;

pub use crate::db::Database;
pub use crate::models::{CatalogEntry, Fingerprint, FingerprintMode};
pub use crate::repo::Repository;
