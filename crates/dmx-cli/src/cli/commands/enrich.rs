//! `dmx enrich <id> <filename>` – enrich one record with the built-in icon table.

use anyhow::Result;
use dmx_core::config::DmxConfig;
use dmx_core::enrich::Enricher;
use dmx_core::icon::{ExtensionIconService, IconRef};
use dmx_core::record::{ChangedField, DownloadRecord, IconState, RecordChange, TrackedRecord};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::TryRecvError};

pub async fn run_enrich(
    cfg: &DmxConfig,
    id: i64,
    filename: &str,
    icon: Option<&str>,
) -> Result<()> {
    let icons = Arc::new(ExtensionIconService::new());
    icons.register(id, filename);

    let mut record = DownloadRecord::new(id, Some(filename.to_string()));
    if let Some(icon) = icon {
        record.icon = IconState::Resolved(IconRef::new(icon));
    }
    let tracked = TrackedRecord::with_capacity(record, cfg.change_buffer);
    let mut changes = tracked.subscribe();

    let enricher = Enricher::from_config(icons, cfg);
    enricher.enrich(&tracked).await;

    for change in drain_changes(&mut changes) {
        match change.field {
            ChangedField::Basename(name) => println!("basename -> {name}"),
            ChangedField::Icon(IconState::Resolved(icon)) if icon.is_empty() => {
                println!("icon     -> (placeholder)")
            }
            ChangedField::Icon(IconState::Resolved(icon)) => println!("icon     -> {icon}"),
            ChangedField::Icon(state) => println!("icon     -> {state:?}"),
        }
    }
    println!("{}", serde_json::to_string_pretty(&tracked.snapshot())?);
    Ok(())
}

/// Collects every queued change. A lagging receiver skips what it missed and
/// keeps reading; only an empty or closed channel ends the drain.
fn drain_changes(rx: &mut broadcast::Receiver<RecordChange>) -> Vec<RecordChange> {
    let mut out = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(change) => out.push(change),
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "change subscriber lagged");
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
    out
}
