//! Remote library-server notification seam.
//!
//! After a pass that changed the catalog, a media server (Kavita and friends)
//! usually wants a "rescan library N" nudge. The wire protocol is not this
//! crate's business — callers supply a [`Notifier`] and the dispatch is
//! fire-and-forget: the sync core never awaits the server.

use crate::sync::SyncReport;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// External collaborator that tells a remote library server to rescan.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Request a rescan of the given remote library. Implementations should
    /// swallow and log transport failures — nobody is listening for them.
    async fn notify_rescan(&self, library_id: u64);
}

/// A notifier that does nothing. The default wiring for library-less setups.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn notify_rescan(&self, _library_id: u64) {}
}

/// Whether a pass warrants waking the remote server at all.
pub fn should_notify(report: &SyncReport) -> bool {
    report.changed_catalog() && !report.cancelled
}

/// Fires a rescan notification for `library_id` if the pass changed the
/// catalog. Spawned and forgotten; returns immediately.
pub fn notify_changed(notifier: Arc<dyn Notifier>, library_id: u64, report: &SyncReport) {
    if !should_notify(report) {
        debug!(library_id, "catalog unchanged; remote server not notified");
        return;
    }
    _ = tokio::spawn(async move { notifier.notify_rescan(library_id).await });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    struct ChannelNotifier(mpsc::UnboundedSender<u64>);

    #[async_trait]
    impl Notifier for ChannelNotifier {
        async fn notify_rescan(&self, library_id: u64) {
            _ = self.0.send(library_id);
        }
    }

    #[test]
    fn test_should_notify() {
        assert!(!should_notify(&SyncReport::default()));
        assert!(should_notify(&SyncReport { added: 1, ..SyncReport::default() }));
        assert!(should_notify(&SyncReport { removed: 2, ..SyncReport::default() }));
        // Skips alone don't wake the server, and neither does a cancelled pass.
        assert!(!should_notify(&SyncReport { skipped: 50, ..SyncReport::default() }));
        assert!(!should_notify(&SyncReport { added: 1, cancelled: true, ..SyncReport::default() }));
    }

    #[tokio::test]
    async fn test_notify_is_dispatched() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notifier = Arc::new(ChannelNotifier(tx));
        let report = SyncReport { updated: 1, ..SyncReport::default() };
        notify_changed(notifier, 7, &report);
        assert_eq!(rx.recv().await, Some(7));
    }

    #[tokio::test]
    async fn test_unchanged_pass_does_not_notify() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notifier = Arc::new(ChannelNotifier(tx));
        notify_changed(notifier, 7, &SyncReport { skipped: 3, ..SyncReport::default() });
        // Sender dropped without sending — no Arc clone survives in a task.
        assert_eq!(rx.recv().await, None);
    }
}
