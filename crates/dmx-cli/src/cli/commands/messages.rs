//! `dmx messages [path]` – print the UI string table.

use anyhow::{Context, Result};
use dmx_core::config::DmxConfig;
use dmx_core::i18n::{JsonCatalog, Translations};
use std::path::Path;

pub fn run_messages(cfg: &DmxConfig, path: Option<&Path>) -> Result<()> {
    let path = path
        .or(cfg.messages_path.as_deref())
        .context("no catalog given and no messages_path in config")?;
    let catalog = JsonCatalog::from_path(path)?;
    let table = Translations::load(&catalog);

    let missing = table.iter().filter(|(_, text)| text.is_empty()).count();
    for (name, text) in table.iter() {
        println!("{:<46} {}", name, text);
    }
    if missing > 0 {
        println!("({missing} of {} messages missing from catalog)", table.len());
    }
    Ok(())
}
