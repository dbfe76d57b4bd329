//! Icon resolution for a single record.

use super::{IconRef, IconService, IconSize};
use crate::record::DownloadRecord;

/// Resolves the icon for `record`.
///
/// - No filename, or a non-empty icon already resolved: returns the current
///   value (`None` if nothing was ever resolved) without calling the service.
/// - Otherwise asks `service` once and returns its answer, which may be empty.
///
/// Service errors are logged and turned into the empty reference; this
/// function never fails.
pub async fn resolve_icon(
    record: &DownloadRecord,
    service: &dyn IconService,
    size: IconSize,
) -> Option<IconRef> {
    if !record.needs_icon() {
        return record.icon.resolved().cloned();
    }

    tracing::debug!(id = record.id, size = size.pixels(), "fetching file icon");
    match service.fetch_icon(record.id, size).await {
        Ok(icon) => Some(icon),
        Err(err) => {
            tracing::warn!(id = record.id, "icon lookup failed, using placeholder: {}", err);
            Some(IconRef::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconError;
    use crate::record::{DownloadId, IconState};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed {
        answer: Result<&'static str, ()>,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn ok(icon: &'static str) -> Self {
            Self {
                answer: Ok(icon),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                answer: Err(()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl IconService for Fixed {
        async fn fetch_icon(&self, _id: DownloadId, size: IconSize) -> Result<IconRef, IconError> {
            assert_eq!(size, IconSize::Large);
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.answer {
                Ok(icon) => Ok(IconRef::new(icon)),
                Err(()) => Err(IconError::Unavailable("boom".to_string())),
            }
        }
    }

    fn record(filename: Option<&str>) -> DownloadRecord {
        DownloadRecord::new(7, filename.map(str::to_string))
    }

    #[tokio::test]
    async fn fetches_when_icon_unset() {
        let svc = Fixed::ok("data:image/png;base64,AAAA");
        let icon = resolve_icon(&record(Some("x/y.txt")), &svc, IconSize::Large).await;
        assert_eq!(icon, Some(IconRef::new("data:image/png;base64,AAAA")));
        assert_eq!(svc.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_answer_is_passed_through() {
        let svc = Fixed::ok("");
        let icon = resolve_icon(&record(Some("x/y.txt")), &svc, IconSize::Large).await;
        assert_eq!(icon, Some(IconRef::empty()));
    }

    #[tokio::test]
    async fn known_icon_skips_service() {
        let svc = Fixed::ok("other");
        let mut r = record(Some("x/y.txt"));
        r.icon = IconState::Resolved(IconRef::new("icon://text"));
        let icon = resolve_icon(&r, &svc, IconSize::Large).await;
        assert_eq!(icon, Some(IconRef::new("icon://text")));
        assert_eq!(svc.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn no_filename_skips_service() {
        let svc = Fixed::ok("other");
        let icon = resolve_icon(&record(None), &svc, IconSize::Large).await;
        assert_eq!(icon, None);
        assert_eq!(svc.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn service_error_becomes_empty_icon() {
        let svc = Fixed::failing();
        let icon = resolve_icon(&record(Some("a.zip")), &svc, IconSize::Large).await;
        assert_eq!(icon, Some(IconRef::empty()));
        assert_eq!(svc.calls.load(Ordering::SeqCst), 1);
    }
}
