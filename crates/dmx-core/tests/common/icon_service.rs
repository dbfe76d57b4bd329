//! Scriptable icon service for integration tests.
//!
//! Answers from a fixed id -> result table, counts calls, and can hold every
//! lookup until the test releases it.

use async_trait::async_trait;
use dmx_core::icon::{IconError, IconRef, IconService, IconSize};
use dmx_core::record::DownloadId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

#[derive(Debug, Clone)]
pub enum Answer {
    Icon(&'static str),
    Fail,
}

#[derive(Default)]
pub struct ScriptedIcons {
    answers: Mutex<HashMap<DownloadId, Answer>>,
    calls: AtomicUsize,
    sizes: Mutex<Vec<IconSize>>,
    gate: Option<Notify>,
}

impl ScriptedIcons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookups wait until `release` is called.
    pub fn gated() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::default()
        }
    }

    pub fn answer(self, id: DownloadId, answer: Answer) -> Self {
        self.answers.lock().unwrap().insert(id, answer);
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sizes(&self) -> Vec<IconSize> {
        self.sizes.lock().unwrap().clone()
    }
}

#[async_trait]
impl IconService for ScriptedIcons {
    async fn fetch_icon(&self, id: DownloadId, size: IconSize) -> Result<IconRef, IconError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sizes.lock().unwrap().push(size);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let answer = self.answers.lock().unwrap().get(&id).cloned();
        match answer {
            Some(Answer::Icon(icon)) => Ok(IconRef::new(icon)),
            Some(Answer::Fail) => Err(IconError::Unavailable("scripted failure".to_string())),
            None => Ok(IconRef::empty()),
        }
    }
}
