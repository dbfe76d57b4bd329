//! Fire-and-forget download start.

/// Failure reported by the platform when starting a download.
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    /// The browser blocks bursts of downloads for a few seconds.
    #[error("download blocked by host: {0}")]
    Blocked(String),
    #[error("invalid download url: {0}")]
    InvalidUrl(String),
    #[error("platform error: {0}")]
    Platform(String),
}

/// Host capability that starts a download for a url.
pub trait DownloadTrigger {
    fn start(&self, url: &str) -> Result<(), TriggerError>;
}

/// Starts a download for `url` once.
///
/// The url is trimmed; blank input is ignored. A platform failure is logged
/// and swallowed, the caller gets no error path. Returns whether the trigger
/// was invoked.
pub fn start_download(trigger: &dyn DownloadTrigger, url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    match trigger.start(url) {
        Ok(()) => tracing::debug!(url, "download started"),
        Err(err) => tracing::warn!(url, "download not started: {}", err),
    }
    true
}
