use crate::sync::classify::{Disposition, classify_cheap};
use crate::sync::error::{ErrorKind, Result};
use crate::sync::walk::WalkedFile;
use exn::ResultExt;
use tanko_archive::{Archive, DescriptorPayload};
use tanko_cache::{CatalogEntry, Fingerprint, FingerprintMode};
use time::UtcDateTime;
use tracing::{debug, warn};

/// What a single file contributed to the pass counters.
#[derive(Debug)]
pub(crate) enum Action {
    Added,
    Updated,
    Skipped,
}

/// The result of processing one walked file.
///
/// Workers never touch the catalog themselves; when `entry` is `Some`, the
/// driving loop performs the upsert so all writes stay on one task.
#[derive(Debug)]
pub(crate) struct FileOutcome {
    pub(crate) key: String,
    pub(crate) action: Action,
    pub(crate) entry: Option<CatalogEntry>,
    /// The archive was catalogued with an empty payload because its embedded
    /// descriptor was missing or malformed.
    pub(crate) degraded: bool,
}

/// Processes one walked file against its prior catalog entry.
///
/// The fast path never performs I/O: a matching cheap fingerprint returns
/// immediately. Everything else reads the file once and works from those
/// bytes — fingerprinting, container inspection, and descriptor extraction
/// included.
pub(crate) async fn sync_file(
    file: WalkedFile,
    prior: Option<CatalogEntry>,
    mode: FingerprintMode,
) -> Result<FileOutcome> {
    match classify_cheap(prior.as_ref().map(|entry| &entry.fingerprint), file.size, file.modified_at) {
        Disposition::Unchanged => {
            return Ok(FileOutcome {
                key: file.key,
                action: Action::Skipped,
                entry: None,
                degraded: false,
            });
        },
        Disposition::Unseen | Disposition::Changed => {},
    }

    let bytes = tokio::fs::read(&file.path).await.or_raise(|| ErrorKind::Io(file.path.clone()))?;
    let mut fingerprint = Fingerprint::cheap(file.size, file.modified_at);

    if mode == FingerprintMode::ContentHash {
        let hash = blake3::hash(&bytes).to_string();
        if let Some(prior) = &prior
            && prior.fingerprint.content_hash.as_deref() == Some(hash.as_str())
        {
            // The mtime moved but the bytes didn't. Refresh the cheap signal
            // so the next pass skips without re-hashing, and keep the
            // descriptor already on record.
            debug!(path = %file.path.display(), "content hash unchanged; refreshing cheap signal");
            let entry = CatalogEntry::new(
                file.key.clone(),
                fingerprint.with_content_hash(hash),
                prior.descriptor.clone(),
                UtcDateTime::now(),
            );
            return Ok(FileOutcome {
                key: file.key,
                action: Action::Skipped,
                entry: Some(entry),
                degraded: false,
            });
        }
        fingerprint = fingerprint.with_content_hash(hash);
    }

    let mut archive = Archive::from_bytes(bytes).or_raise(|| ErrorKind::Archive(file.path.clone()))?;
    let stats = archive.stats();
    if stats.has_junk() {
        warn!(path = %file.path.display(), %stats, "archive contains non-page entries");
    }

    let (descriptor, degraded) = match archive.descriptor() {
        Ok(Some(payload)) => (payload, false),
        Ok(None) => {
            debug!(path = %file.path.display(), "archive has no embedded descriptor");
            (DescriptorPayload::empty(), true)
        },
        Err(error) if matches!(&*error, tanko_archive::error::ErrorKind::Descriptor) => {
            warn!(path = %file.path.display(), "malformed embedded descriptor; cataloguing with empty payload");
            (DescriptorPayload::empty(), true)
        },
        Err(error) => return Err(error).or_raise(|| ErrorKind::Archive(file.path.clone())),
    };

    // Identity is diagnostic only here: the catalog stays the source of truth
    // for what changed on disk, the resolver for what a name means.
    if let Some(name) = file.path.file_name().map(|name| name.to_string_lossy()) {
        let identity = tanko_naming::resolve(name.as_ref());
        if identity.confidence.is_resolved() {
            debug!(
                path = %file.path.display(),
                series = %identity.series,
                numbering = ?identity.numbering,
                confidence = %identity.confidence,
                "resolved archive identity"
            );
        } else {
            warn!(path = %file.path.display(), "filename did not match any naming convention");
        }
    }

    let action = match prior {
        Some(_) => Action::Updated,
        None => Action::Added,
    };
    let entry = CatalogEntry::new(file.key.clone(), fingerprint, descriptor, UtcDateTime::now());
    Ok(FileOutcome {
        key: file.key,
        action,
        entry: Some(entry),
        degraded,
    })
}
