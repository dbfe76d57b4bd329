//! Message catalogs in the browser-extension `messages.json` format.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error loading a message catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("reading catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Source of localized messages, looked up by message name.
pub trait MessageCatalog {
    fn message(&self, key: &str) -> Option<String>;
}

impl MessageCatalog for HashMap<String, String> {
    fn message(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[derive(Debug, Deserialize)]
struct MessageEntry {
    message: String,
}

/// Catalog parsed from `_locales/<lang>/messages.json`.
///
/// Message names are case-insensitive, as in the extension platform.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    messages: HashMap<String, String>,
}

impl JsonCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, MessageEntry> = serde_json::from_str(json)?;
        let messages = raw
            .into_iter()
            .map(|(key, entry)| (key.to_lowercase(), entry.message))
            .collect();
        Ok(Self { messages })
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl MessageCatalog for JsonCatalog {
    fn message(&self, key: &str) -> Option<String> {
        self.messages.get(&key.to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "extName": { "message": "Download Manager", "description": "Extension name" },
        "pause": { "message": "Pause" }
    }"#;

    #[test]
    fn parses_messages_json() {
        let cat = JsonCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.message("extName").as_deref(), Some("Download Manager"));
        assert_eq!(cat.message("pause").as_deref(), Some("Pause"));
        assert_eq!(cat.message("resume"), None);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let cat = JsonCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(cat.message("EXTNAME").as_deref(), Some("Download Manager"));
    }

    #[test]
    fn entry_without_message_is_rejected() {
        let err = JsonCatalog::from_json(r#"{"x": {"description": "d"}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonCatalog::from_path(&dir.path().join("messages.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("messages.json"));
    }
}
