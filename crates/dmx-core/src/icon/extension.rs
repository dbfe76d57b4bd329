//! In-process icon service keyed on the file extension.
//!
//! Stands in for the platform icon lookup where none exists (CLI, tests):
//! downloads are registered with their filename and get a generic icon for
//! their extension family.

use super::{IconError, IconRef, IconService, IconSize};
use crate::record::{derive_basename, DownloadId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Generic icon name for a lowercase file extension.
pub fn icon_for_extension(ext: &str) -> Option<&'static str> {
    let name = match ext {
        "zip" | "7z" | "rar" | "tar" | "gz" | "tgz" | "bz2" | "xz" | "zst" => "archive",
        "deb" | "rpm" | "apk" | "msi" | "exe" | "dmg" | "appimage" => "package",
        "iso" | "img" => "disc",
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" | "ico" => "image",
        "mp3" | "flac" | "ogg" | "wav" | "m4a" | "opus" => "audio",
        "mp4" | "mkv" | "webm" | "avi" | "mov" => "video",
        "pdf" => "pdf",
        "txt" | "md" | "log" | "csv" => "text",
        "doc" | "docx" | "odt" | "rtf" => "document",
        "xls" | "xlsx" | "ods" => "spreadsheet",
        "html" | "htm" | "json" | "xml" | "js" | "css" => "code",
        _ => return None,
    };
    Some(name)
}

/// Icon service that answers from registered filenames.
#[derive(Debug, Default)]
pub struct ExtensionIconService {
    filenames: RwLock<HashMap<DownloadId, String>>,
}

impl ExtensionIconService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the filename known for a download.
    pub fn register(&self, id: DownloadId, filename: impl Into<String>) {
        self.filenames
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, filename.into());
    }

    pub fn unregister(&self, id: DownloadId) {
        self.filenames
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }

    fn icon_for(filename: &str, size: IconSize) -> IconRef {
        let ext = derive_basename(filename)
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match ext.as_deref().and_then(icon_for_extension) {
            Some(name) => IconRef::new(format!("icon://{}?size={}", name, size.pixels())),
            None => IconRef::empty(),
        }
    }
}

#[async_trait]
impl IconService for ExtensionIconService {
    async fn fetch_icon(&self, id: DownloadId, size: IconSize) -> Result<IconRef, IconError> {
        let filenames = self
            .filenames
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let filename = filenames.get(&id).ok_or(IconError::UnknownDownload(id))?;
        Ok(Self::icon_for(filename, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_families() {
        assert_eq!(icon_for_extension("zip"), Some("archive"));
        assert_eq!(icon_for_extension("deb"), Some("package"));
        assert_eq!(icon_for_extension("pdf"), Some("pdf"));
        assert_eq!(icon_for_extension("unknown"), None);
    }

    #[tokio::test]
    async fn registered_filename_maps_to_icon() {
        let svc = ExtensionIconService::new();
        svc.register(1, "C:\\Downloads\\Setup.EXE");
        svc.register(2, "/tmp/notes.txt");
        assert_eq!(
            svc.fetch_icon(1, IconSize::Large).await.unwrap(),
            IconRef::new("icon://package?size=32")
        );
        assert_eq!(
            svc.fetch_icon(2, IconSize::Small).await.unwrap(),
            IconRef::new("icon://text?size=16")
        );
    }

    #[tokio::test]
    async fn unknown_extension_is_empty() {
        let svc = ExtensionIconService::new();
        svc.register(3, "/tmp/README");
        svc.register(4, "/tmp/blob.qqq");
        // Dot in a directory name is not an extension.
        svc.register(5, "/tmp/v1.2/file");
        for id in [3, 4, 5] {
            assert!(svc.fetch_icon(id, IconSize::Large).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn unknown_id_is_an_error() {
        let svc = ExtensionIconService::new();
        svc.register(9, "a.zip");
        svc.unregister(9);
        assert!(matches!(
            svc.fetch_icon(9, IconSize::Large).await,
            Err(IconError::UnknownDownload(9))
        ));
    }
}
