//! Configuration loading and validation.
//!
//! Layered figment-style: built-in defaults, then an optional TOML file, then
//! `TANKO_*` environment variables, later sources winning. Nothing here
//! performs I/O beyond reading the config file — wiring the resulting values
//! into a database connection or a sync pass is the caller's job.
//!
//! ```toml
//! [library]
//! root = "/data/comics"
//!
//! [sync]
//! concurrency = 8
//! fingerprint = "cheap"
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tanko_cache::FingerprintMode;
use tracing::debug;

/// Environment variable prefix: `TANKO_LIBRARY_ROOT`, `TANKO_SYNC_CONCURRENCY`, …
const ENV_PREFIX: &str = "TANKO_";
/// Default config filename looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "tanko.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub library: LibrarySection,
    pub cache: CacheSection,
    pub sync: SyncSection,
}

/// Where the archives live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibrarySection {
    /// Root directory of the archive library. Required; there is no sensible
    /// default for somebody else's comics folder.
    pub root: PathBuf,
}

/// Where the catalog database lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheSection {
    /// Path of the SQLite catalog file.
    pub database: PathBuf,
}

/// Knobs for the sync pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncSection {
    /// Upper bound on concurrently-processed archives.
    pub concurrency: usize,
    /// Change-detection strategy. `cheap` unless the filesystem's mtimes
    /// can't be trusted.
    pub fingerprint: FingerprintMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library: LibrarySection::default(),
            cache: CacheSection::default(),
            sync: SyncSection::default(),
        }
    }
}
impl Default for LibrarySection {
    fn default() -> Self {
        Self { root: PathBuf::new() }
    }
}
impl Default for CacheSection {
    fn default() -> Self {
        Self { database: default_database_path() }
    }
}
impl Default for SyncSection {
    fn default() -> Self {
        Self {
            concurrency: 8,
            fingerprint: FingerprintMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, the given TOML file (may be absent),
    /// and `TANKO_*` environment variables, in that order of precedence.
    pub fn load(file: impl AsRef<Path>) -> Result<Self> {
        let file = file.as_ref();
        debug!(file = %file.display(), "loading configuration");
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("_"))
            .extract()
            .or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        Ok(config)
    }

    /// Sanity-checks a loaded configuration.
    pub fn validate(&self) -> Result<()> {
        if self.library.root.as_os_str().is_empty() {
            exn::bail!(ErrorKind::Invalid("library root is not set"));
        }
        if !self.library.root.is_absolute() {
            exn::bail!(ErrorKind::Invalid("library root must be an absolute path"));
        }
        if self.cache.database.as_os_str().is_empty() {
            exn::bail!(ErrorKind::Invalid("catalog database path is not set"));
        }
        if self.sync.concurrency == 0 {
            exn::bail!(ErrorKind::Invalid("sync concurrency must be at least 1"));
        }
        Ok(())
    }
}

/// Platform default location of the catalog database, falling back to the
/// working directory when the platform reports no cache dir.
fn default_database_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "tanko")
        .map(|dirs| dirs.cache_dir().join("catalog.db"))
        .unwrap_or_else(|| PathBuf::from("tanko-catalog.db"))
}
