//! Watchlist management service

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::WatchlistSnapshot;

/// Watchlist management service
pub struct WatchlistService {
    ctx: Arc<ServiceContext>,
}

impl WatchlistService {
    /// Creates a watchlist service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Fetches the currently flagged domains and derives the snapshot label.
    pub async fn fetch(&self) -> CoreResult<WatchlistSnapshot> {
        match self.ctx.api.list_flagged().await {
            Ok(entries) => {
                log::info!("Fetched {} flagged domains", entries.len());
                Ok(WatchlistSnapshot::from_entries(entries))
            }
            Err(e) => Err(self.ctx.handle_api_error("Fetching flagged domains", e)),
        }
    }

    /// Marks one flagged domain as non-dangerous.
    ///
    /// Returns only after the service has acknowledged the update; callers
    /// must not drop local state for the domain before this succeeds.
    pub async fn whitelist(&self, domain_id: &str) -> CoreResult<()> {
        match self.ctx.api.whitelist(domain_id).await {
            Ok(()) => {
                log::info!("Domain {domain_id} whitelisted");
                Ok(())
            }
            Err(e) => Err(self.ctx.handle_api_error("Whitelisting", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use squatwatch_api::ApiError;

    use crate::error::CoreError;
    use crate::test_utils::{create_test_watchlist_service, test_domain};
    use crate::utils::datetime::today_display_date;

    #[tokio::test]
    async fn fetch_builds_snapshot_from_entries() {
        let (svc, api) = create_test_watchlist_service();
        let mut first = test_domain("1", "http://post-rossia.ru");
        first.last_updated = "14.03.2023".to_string();
        api.set_flagged(vec![first, test_domain("2", "http://pochta-rf.ru")])
            .await;

        let snapshot = svc.fetch().await.unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.entries[0].domain_id, "1");
        assert_eq!(snapshot.last_updated, "14.03.2023");
    }

    #[tokio::test]
    async fn fetch_empty_set_labels_with_today() {
        let (svc, _api) = create_test_watchlist_service();

        let snapshot = svc.fetch().await.unwrap();

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.last_updated, today_display_date());
    }

    #[tokio::test]
    async fn fetch_propagates_api_errors() {
        let (svc, api) = create_test_watchlist_service();
        api.set_list_error(Some(ApiError::Timeout {
            detail: "30s elapsed".to_string(),
        }))
        .await;

        let err = svc.fetch().await.unwrap_err();

        assert!(matches!(err, CoreError::Api(ApiError::Timeout { .. })));
    }

    #[tokio::test]
    async fn whitelist_forwards_domain_id() {
        let (svc, api) = create_test_watchlist_service();
        api.set_flagged(vec![test_domain("42", "http://pochta-login.ru")])
            .await;

        svc.whitelist("42").await.unwrap();

        assert_eq!(api.whitelisted_ids().await, vec!["42".to_string()]);
    }

    #[tokio::test]
    async fn whitelist_propagates_not_found() {
        let (svc, api) = create_test_watchlist_service();
        api.set_whitelist_error(Some(ApiError::DomainNotFound {
            domain_id: "42".to_string(),
            raw_message: None,
        }))
        .await;

        let err = svc.whitelist("42").await.unwrap_err();

        assert!(err.is_expected());
        assert!(matches!(
            err,
            CoreError::Api(ApiError::DomainNotFound { .. })
        ));
        assert!(api.whitelisted_ids().await.is_empty());
    }
}
