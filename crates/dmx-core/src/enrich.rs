//! Record enrichment: basename now, icon later.
//!
//! `Enricher::begin` does the synchronous part (basename, `Pending` icon) so
//! the UI can show a display name and a loading icon immediately. The
//! returned `IconTask` performs the lookup and writes the result onto the
//! same shared record.

use crate::config::DmxConfig;
use crate::icon::{resolve_icon, IconRef, IconService, IconSize};
use crate::record::TrackedRecord;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Enriches download records using one icon service.
#[derive(Clone)]
pub struct Enricher {
    service: Arc<dyn IconService>,
    size: IconSize,
}

impl std::fmt::Debug for Enricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enricher").field("size", &self.size).finish()
    }
}

impl Enricher {
    pub fn new(service: Arc<dyn IconService>, size: IconSize) -> Self {
        Self { service, size }
    }

    pub fn from_config(service: Arc<dyn IconService>, cfg: &DmxConfig) -> Self {
        Self::new(service, cfg.icon_size)
    }

    pub fn size(&self) -> IconSize {
        self.size
    }

    /// Derives the basename and marks the icon pending, then hands back the
    /// lookup. Both writes are visible to subscribers before this returns.
    pub fn begin(&self, record: &TrackedRecord) -> IconTask {
        record.derive_basename();
        let lookup = record.mark_icon_pending();
        IconTask {
            record: record.clone(),
            service: Arc::clone(&self.service),
            size: self.size,
            lookup,
        }
    }

    /// Enriches `record` and waits for the icon.
    pub async fn enrich(&self, record: &TrackedRecord) -> Option<IconRef> {
        self.begin(record).run().await
    }

    /// Enriches `record`, running the icon lookup on the tokio runtime.
    ///
    /// The synchronous part has completed when this returns.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime (see `tokio::spawn`).
    pub fn spawn(&self, record: &TrackedRecord) -> JoinHandle<Option<IconRef>> {
        let task = self.begin(record);
        tokio::spawn(task.run())
    }
}

/// Icon lookup prepared by `Enricher::begin`.
pub struct IconTask {
    record: TrackedRecord,
    service: Arc<dyn IconService>,
    size: IconSize,
    lookup: bool,
}

impl IconTask {
    /// Whether `run` will call the icon service.
    pub fn issues_lookup(&self) -> bool {
        self.lookup
    }

    /// Resolves the icon and, if a lookup was issued, stores it on the record.
    pub async fn run(self) -> Option<IconRef> {
        let snapshot = self.record.snapshot();
        let icon = resolve_icon(&snapshot, self.service.as_ref(), self.size).await;
        if self.lookup {
            if let Some(icon) = &icon {
                self.record.set_resolved_icon(icon.clone());
                tracing::debug!(id = snapshot.id, icon = %icon, "icon resolved");
            }
        }
        icon
    }
}
