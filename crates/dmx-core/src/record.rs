//! Download records and basename derivation.
//!
//! A `DownloadRecord` mirrors one download tracked by the host platform. The
//! UI holds a `TrackedRecord` (shared handle) and subscribes to its change
//! channel; every field write made through the handle is broadcast as a
//! `RecordChange`, including the intermediate `Pending` icon state.

use crate::icon::IconRef;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;

/// Platform-assigned download identifier.
pub type DownloadId = i64;

/// Default capacity of a record's change channel.
pub const DEFAULT_CHANGE_BUFFER: usize = 16;

/// Smallest change-channel capacity: one enrichment writes basename, pending
/// and resolved icon before a subscriber gets to run.
pub const MIN_CHANGE_BUFFER: usize = 3;

/// Returns the part of `path` after the rightmost `/` or `\`.
///
/// POSIX and Windows separators may be mixed; whichever occurs later wins.
/// A path without separators is returned whole.
///
/// # Examples
///
/// - `derive_basename("C:\\Users\\a\\file.zip")` → `"file.zip"`
/// - `derive_basename("/tmp/report.pdf")` → `"report.pdf"`
pub fn derive_basename(path: &str) -> &str {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Icon field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "icon", rename_all = "lowercase")]
pub enum IconState {
    /// Enrichment not attempted yet.
    #[default]
    Unset,
    /// Lookup issued, value not arrived.
    Pending,
    /// Lookup settled. The reference may be empty (placeholder).
    Resolved(IconRef),
}

impl IconState {
    /// True when a usable (non-empty) icon is already resolved.
    pub fn is_known(&self) -> bool {
        matches!(self, IconState::Resolved(icon) if !icon.is_empty())
    }

    pub fn resolved(&self) -> Option<&IconRef> {
        match self {
            IconState::Resolved(icon) => Some(icon),
            IconState::Unset | IconState::Pending => None,
        }
    }
}

/// One download as reported by the platform, plus the derived display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRecord {
    pub id: DownloadId,
    /// Full path-like filename; `None` while the platform has not chosen one.
    #[serde(default)]
    pub filename: Option<String>,
    /// Short display name, derived once.
    #[serde(default)]
    pub basename: Option<String>,
    #[serde(default)]
    pub icon: IconState,
}

impl DownloadRecord {
    pub fn new(id: DownloadId, filename: Option<String>) -> Self {
        Self {
            id,
            filename,
            basename: None,
            icon: IconState::Unset,
        }
    }

    /// The filename, treating an empty string the same as no filename.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref().filter(|f| !f.is_empty())
    }

    /// Fills `basename` from `filename` if it is not set yet. Returns whether
    /// a write happened.
    pub fn derive_basename(&mut self) -> bool {
        if self.basename.is_some() {
            return false;
        }
        let Some(filename) = self.filename() else {
            return false;
        };
        self.basename = Some(derive_basename(filename).to_string());
        true
    }

    /// True when enrichment has to ask the icon service.
    pub fn needs_icon(&self) -> bool {
        self.filename().is_some() && !self.icon.is_known()
    }
}

/// Field that changed on a tracked record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangedField {
    Basename(String),
    Icon(IconState),
}

/// Change notification delivered to record subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChange {
    pub id: DownloadId,
    pub field: ChangedField,
}

#[derive(Debug)]
struct Shared {
    id: DownloadId,
    record: RwLock<DownloadRecord>,
    changes: broadcast::Sender<RecordChange>,
}

/// Shared, observable handle to a `DownloadRecord`.
///
/// Clones point at the same record. Writes go through the handle so that
/// subscribers see every transition.
#[derive(Debug, Clone)]
pub struct TrackedRecord {
    inner: Arc<Shared>,
}

impl TrackedRecord {
    pub fn new(record: DownloadRecord) -> Self {
        Self::with_capacity(record, DEFAULT_CHANGE_BUFFER)
    }

    /// Like `new`, with an explicit change-channel capacity, raised to
    /// `MIN_CHANGE_BUFFER` when smaller.
    pub fn with_capacity(record: DownloadRecord, capacity: usize) -> Self {
        let (changes, _) = broadcast::channel(capacity.max(MIN_CHANGE_BUFFER));
        Self {
            inner: Arc::new(Shared {
                id: record.id,
                record: RwLock::new(record),
                changes,
            }),
        }
    }

    pub fn id(&self) -> DownloadId {
        self.inner.id
    }

    /// Subscribe to field changes made after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<RecordChange> {
        self.inner.changes.subscribe()
    }

    /// Copy of the current record state.
    pub fn snapshot(&self) -> DownloadRecord {
        self.read().clone()
    }

    /// True if both handles refer to the same record instance.
    pub fn ptr_eq(&self, other: &TrackedRecord) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Derives the basename in place and notifies subscribers on write.
    pub fn derive_basename(&self) -> bool {
        let basename = {
            let mut record = self.write();
            if !record.derive_basename() {
                return false;
            }
            record.basename.clone().unwrap_or_default()
        };
        self.emit(ChangedField::Basename(basename));
        true
    }

    /// Marks the icon `Pending` when a lookup is needed. Returns whether a
    /// lookup should be issued.
    ///
    /// An icon that is already `Pending` stays as is and is not re-announced.
    pub fn mark_icon_pending(&self) -> bool {
        {
            let mut record = self.write();
            if !record.needs_icon() {
                return false;
            }
            if record.icon == IconState::Pending {
                return true;
            }
            record.icon = IconState::Pending;
        }
        self.emit(ChangedField::Icon(IconState::Pending));
        true
    }

    /// Stores a resolved icon. Writing the value the record already holds is
    /// not a change and emits nothing.
    pub fn set_resolved_icon(&self, icon: IconRef) -> bool {
        let state = IconState::Resolved(icon);
        {
            let mut record = self.write();
            if record.icon == state {
                return false;
            }
            record.icon = state.clone();
        }
        self.emit(ChangedField::Icon(state));
        true
    }

    fn emit(&self, field: ChangedField) {
        // No subscribers is fine: nobody is rendering this record.
        let _ = self.inner.changes.send(RecordChange {
            id: self.inner.id,
            field,
        });
    }

    fn read(&self) -> RwLockReadGuard<'_, DownloadRecord> {
        self.inner
            .record
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DownloadRecord> {
        self.inner
            .record
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
