use crate::icon::IconSize;
use crate::record::{DEFAULT_CHANGE_BUFFER, MIN_CHANGE_BUFFER};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/dmx/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmxConfig {
    /// Icon resolution requested from the icon service: "small" (16px) or "large" (32px).
    pub icon_size: IconSize,
    /// Capacity of each record's change channel; slow subscribers past this lag.
    /// Must be at least 3 (one enrichment's worth of writes).
    pub change_buffer: usize,
    /// Optional `messages.json` catalog used to build the UI string table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages_path: Option<PathBuf>,
}

impl Default for DmxConfig {
    fn default() -> Self {
        Self {
            icon_size: IconSize::Large,
            change_buffer: DEFAULT_CHANGE_BUFFER,
            messages_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dmx")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DmxConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DmxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<DmxConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: DmxConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

impl DmxConfig {
    /// Checks values serde alone can't bound.
    pub fn validate(&self) -> Result<()> {
        if self.change_buffer < MIN_CHANGE_BUFFER {
            anyhow::bail!(
                "change_buffer must be at least {}, got {}",
                MIN_CHANGE_BUFFER,
                self.change_buffer
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = DmxConfig::default();
        assert_eq!(cfg.icon_size, IconSize::Large);
        assert_eq!(cfg.change_buffer, 16);
        assert!(cfg.messages_path.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DmxConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DmxConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            icon_size = "small"
            change_buffer = 4
            messages_path = "/usr/share/dmx/_locales/en/messages.json"
        "#;
        let cfg: DmxConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.icon_size, IconSize::Small);
        assert_eq!(cfg.change_buffer, 4);
        assert_eq!(
            cfg.messages_path.as_deref(),
            Some(Path::new("/usr/share/dmx/_locales/en/messages.json"))
        );
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: DmxConfig = toml::from_str("change_buffer = 4").unwrap();
        assert_eq!(cfg.icon_size, IconSize::Large);
        assert_eq!(cfg.change_buffer, 4);
    }

    #[test]
    fn config_toml_rejects_unknown_icon_size() {
        assert!(toml::from_str::<DmxConfig>(r#"icon_size = "huge""#).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "icon_size = \"small\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.icon_size, IconSize::Small);

        assert!(load_from(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn load_from_rejects_small_change_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "change_buffer = 1\n").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("change_buffer must be at least 3"));

        fs::write(&path, "change_buffer = 3\n").unwrap();
        assert_eq!(load_from(&path).unwrap().change_buffer, 3);
    }
}
