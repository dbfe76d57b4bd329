//! Icon service interface provided by the host platform.

use super::{IconRef, IconSize};
use crate::record::DownloadId;
use async_trait::async_trait;

/// Failure reported by an icon service. Never surfaces past `resolve_icon`.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("no download with id {0}")]
    UnknownDownload(DownloadId),
    #[error("icon service unavailable: {0}")]
    Unavailable(String),
}

/// Maps a download id to its display icon.
///
/// Implementations may return an empty `IconRef` when the platform has no
/// icon for the file.
#[async_trait]
pub trait IconService: Send + Sync {
    async fn fetch_icon(&self, id: DownloadId, size: IconSize) -> Result<IconRef, IconError>;
}
