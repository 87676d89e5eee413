use crate::error::{ErrorKind as LibraryErrorKind, Result as LibraryResult};
use crate::sync::error::{ErrorKind, Result as SyncResult};
use crate::sync::file::{Action, sync_file};
use crate::sync::report::{FileFailure, SyncReport};
use crate::sync::walk::{catalog_key, walk};
use exn::ResultExt;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tanko_cache::{CatalogEntry, FingerprintMode, Repository};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

/// Hard ceiling on concurrently-processed archives, whatever the options say.
pub const MAX_SYNC_CONCURRENCY: usize = 64;

/// Knobs for one sync pass.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Worker-pool width for the fingerprint-and-extract phase. Clamped to
    /// [`MAX_SYNC_CONCURRENCY`].
    pub concurrency: usize,
    pub fingerprint: FingerprintMode,
    /// Checked between per-file tasks. A cancelled pass keeps everything
    /// committed so far, reports what it did, and skips the deletion barrier.
    pub cancel: CancellationToken,
}
impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            concurrency: 8,
            fingerprint: FingerprintMode::default(),
            cancel: CancellationToken::new(),
        }
    }
}

/// Runs one incremental sync pass: walk `root`, reconcile the catalog, report.
///
/// Per-file failures never abort the pass — they surface in the returned
/// [`SyncReport`] with the affected path's prior entry left untouched. Only a
/// catalog (store-level) failure aborts with `Err`; entries committed before
/// the failure remain valid.
pub async fn sync(root: impl AsRef<Path>, repo: &Repository, options: &SyncOptions) -> LibraryResult<SyncReport> {
    sync_inner(root.as_ref(), repo, options).await.or_raise(|| LibraryErrorKind::Sync)
}

#[instrument(skip_all, fields(root = %root.display()))]
async fn sync_inner(root: &Path, repo: &Repository, options: &SyncOptions) -> SyncResult<SyncReport> {
    // A root that cannot be resolved is a pass failure, not an empty library.
    // Treating it as empty would hand the deletion barrier the entire catalog.
    let root = tokio::fs::canonicalize(root).await.or_raise(|| ErrorKind::Walk(root.to_path_buf()))?;

    let prior: HashMap<String, CatalogEntry> = repo
        .list_entries()
        .await
        .or_raise(|| ErrorKind::Cache)?
        .into_iter()
        .map(|entry| (entry.path.clone(), entry))
        .collect();

    let mut report = SyncReport::default();

    // Discovery. Collected up front: the delete set may only be computed from
    // a complete observed-path set, so deletion is a barrier, not a streaming
    // step. Paths that error still count as observed — they were seen, just
    // not readable, and must not be pruned.
    let mut files = Vec::new();
    let mut observed = HashSet::new();
    {
        let stream = walk(&root);
        futures::pin_mut!(stream);
        while let Some(item) = stream.next().await {
            if options.cancel.is_cancelled() {
                report.cancelled = true;
                info!(%report, "sync pass cancelled during discovery");
                return Ok(report);
            }
            match item {
                Ok(file) => {
                    observed.insert(file.key.clone());
                    files.push(file);
                },
                Err(error) => {
                    let path = error.path().map(|p| catalog_key(p)).unwrap_or_default();
                    observed.insert(path.clone());
                    report.errors.push(FileFailure { path, error });
                },
            }
        }
    }

    // Extraction. Workers are pure over their inputs and run concurrently up
    // to the configured width; completed futures are replaced FIFO. Every
    // catalog write happens below, on this task — the single serialized
    // writer the store requires.
    let concurrency = options.concurrency.clamp(1, MAX_SYNC_CONCURRENCY);
    let mut pending: Vec<_> = files
        .into_iter()
        .map(|file| {
            let prior_entry = prior.get(&file.key).cloned();
            sync_file(file, prior_entry, options.fingerprint)
        })
        .collect();
    let mut processing = FuturesUnordered::new();
    processing.extend(pending.drain(..concurrency.min(pending.len())));
    while let Some(result) = processing.next().await {
        match result {
            Ok(outcome) => {
                if let Some(entry) = &outcome.entry {
                    repo.upsert(entry).await.or_raise(|| ErrorKind::Cache)?;
                }
                if outcome.degraded {
                    report.degraded.push(outcome.key.clone());
                }
                match outcome.action {
                    Action::Added => report.added += 1,
                    Action::Updated => report.updated += 1,
                    Action::Skipped => report.skipped += 1,
                }
            },
            Err(error) => {
                let path = error.path().map(|p| catalog_key(p)).unwrap_or_default();
                warn!(%error, %path, "file failed to sync; prior entry left untouched");
                report.errors.push(FileFailure { path, error });
            },
        }
        // Promote the next queued file unless the pass was cancelled between
        // tasks. In-flight work still drains and commits.
        if options.cancel.is_cancelled() {
            report.cancelled = true;
        } else if !pending.is_empty() {
            processing.push(pending.remove(0));
        }
    }

    // Re-check here: with nothing to process, the in-loop checks never ran.
    report.cancelled = report.cancelled || options.cancel.is_cancelled();
    if report.cancelled {
        info!(%report, "sync pass cancelled; deletion barrier skipped");
        return Ok(report);
    }

    // Deletion barrier. Runs strictly after the walk and all workers: a path
    // is only Missing once the whole pass failed to observe it. An incomplete
    // enumeration means the observed set can't be trusted for pruning.
    let walk_was_partial = report.errors.iter().any(|failure| matches!(&*failure.error, ErrorKind::Walk(_)));
    if walk_was_partial {
        warn!("directory enumeration was incomplete; skipping deletion barrier");
    } else {
        for key in prior.keys() {
            if !observed.contains(key) && repo.delete_by_path(key).await.or_raise(|| ErrorKind::Cache)? {
                report.removed += 1;
            }
        }
    }

    info!(%report, "sync pass complete");
    Ok(report)
}
