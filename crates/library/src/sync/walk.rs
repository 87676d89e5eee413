//! Recursive discovery of archive files under the library root.
//!
//! Iterative stack walk over `tokio::fs`, yielding one [`WalkedFile`] per
//! archive. Enumeration failures are yielded as items instead of ending the
//! stream, so one unreadable subdirectory doesn't hide the rest of the
//! library from the pass.

use crate::sync::error::{ErrorKind, Result};
use async_stream::stream;
use futures::Stream;
use std::path::{Path, PathBuf};
use time::UtcDateTime;
use tokio::fs::{self, DirEntry};

/// Extensions accepted as archive containers during a walk. Rar-based `.cbr`
/// files are deliberately absent: repacking them into zip containers happens
/// upstream of this library.
pub(crate) const ARCHIVE_EXTENSIONS: &[&str] = &["cbz", "zip"];

/// An archive discovered on disk, with the cheap-fingerprint inputs already
/// collected from its directory entry metadata.
#[derive(Debug, Clone)]
pub(crate) struct WalkedFile {
    /// Absolute filesystem path.
    pub(crate) path: PathBuf,
    /// Normalized catalog key for the path.
    pub(crate) key: String,
    pub(crate) size: u64,
    pub(crate) modified_at: UtcDateTime,
}

enum WalkEntry {
    File(WalkedFile),
    Descend(PathBuf),
    Skip,
}

/// Normalizes an absolute path into its catalog key.
///
/// Keys must compare equal whenever the host filesystem would consider the
/// paths the same file: on Windows that means folding case and separators; on
/// case-sensitive filesystems the path is already canonical.
pub fn catalog_key(path: &Path) -> String {
    if cfg!(windows) {
        path.to_string_lossy().replace('\\', "/").to_lowercase()
    } else {
        path.to_string_lossy().into_owned()
    }
}

fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ARCHIVE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

async fn process_entry(entry: DirEntry) -> Result<WalkEntry> {
    let path = entry.path();
    let metadata = match entry.metadata().await {
        Ok(metadata) => metadata,
        Err(_) => exn::bail!(ErrorKind::Walk(path)),
    };
    if metadata.is_dir() {
        return Ok(WalkEntry::Descend(path));
    }
    if metadata.is_file() && is_archive(&path) {
        let Ok(modified) = metadata.modified() else {
            exn::bail!(ErrorKind::Walk(path));
        };
        let key = catalog_key(&path);
        return Ok(WalkEntry::File(WalkedFile {
            path,
            key,
            size: metadata.len(),
            modified_at: time::OffsetDateTime::from(modified).to_utc(),
        }));
    }
    // Non-archive files, sockets, and broken symlinks are silently dropped.
    Ok(WalkEntry::Skip)
}

/// Streams every archive file under `root`, depth-first, in no particular
/// order. Walk order is not semantically significant — no archive depends on
/// another — which is what lets the caller fingerprint them in parallel.
pub(crate) fn walk(root: &Path) -> impl Stream<Item = Result<WalkedFile>> + '_ {
    let mut stack = vec![root.to_path_buf()];
    stream! {
        'dirs: while let Some(current) = stack.pop() {
            let mut entries = match fs::read_dir(&current).await {
                Ok(entries) => entries,
                // A directory deleted between discovery and descent just
                // contributes no files.
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
                Err(_) => {
                    yield Err(exn::Exn::from(ErrorKind::Walk(current.clone())));
                    continue 'dirs;
                },
            };
            'entries: loop {
                let entry = match entries.next_entry().await {
                    Ok(Some(entry)) => entry,
                    Ok(None) => break 'entries,
                    Err(_) => {
                        yield Err(exn::Exn::from(ErrorKind::Walk(current.clone())));
                        continue 'entries;
                    },
                };
                match process_entry(entry).await {
                    Ok(WalkEntry::File(file)) => yield Ok(file),
                    Ok(WalkEntry::Descend(dir)) => stack.push(dir),
                    Ok(WalkEntry::Skip) => {},
                    Err(e) => yield Err(e),
                }
            }
        }
    }
}
