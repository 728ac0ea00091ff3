//! Test helper module
//!
//! Provides mock implementations and convenience factory methods.

use std::sync::Arc;

use async_trait::async_trait;
use squatwatch_api::{ApiError, FlaggedDomain, WatchlistApi};
use tokio::sync::RwLock;

use crate::services::{ServiceContext, WatchlistService};

// ===== MockWatchlistApi =====

/// Scripted in-memory `WatchlistApi`.
pub struct MockWatchlistApi {
    flagged: RwLock<Vec<FlaggedDomain>>,
    /// When Some, `list_flagged` returns this error.
    list_error: RwLock<Option<ApiError>>,
    /// When Some, `whitelist` returns this error.
    whitelist_error: RwLock<Option<ApiError>>,
    /// Domain ids whitelisted so far, in call order.
    whitelisted: RwLock<Vec<String>>,
}

impl MockWatchlistApi {
    pub fn new() -> Self {
        Self {
            flagged: RwLock::new(Vec::new()),
            list_error: RwLock::new(None),
            whitelist_error: RwLock::new(None),
            whitelisted: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_flagged(&self, entries: Vec<FlaggedDomain>) {
        *self.flagged.write().await = entries;
    }

    pub async fn set_list_error(&self, err: Option<ApiError>) {
        *self.list_error.write().await = err;
    }

    pub async fn set_whitelist_error(&self, err: Option<ApiError>) {
        *self.whitelist_error.write().await = err;
    }

    pub async fn whitelisted_ids(&self) -> Vec<String> {
        self.whitelisted.read().await.clone()
    }
}

#[async_trait]
impl WatchlistApi for MockWatchlistApi {
    async fn list_flagged(&self) -> squatwatch_api::Result<Vec<FlaggedDomain>> {
        if let Some(err) = self.list_error.read().await.clone() {
            return Err(err);
        }
        Ok(self.flagged.read().await.clone())
    }

    async fn whitelist(&self, domain_id: &str) -> squatwatch_api::Result<()> {
        if let Some(err) = self.whitelist_error.read().await.clone() {
            return Err(err);
        }
        self.whitelisted.write().await.push(domain_id.to_string());
        self.flagged
            .write()
            .await
            .retain(|d| d.domain_id != domain_id);
        Ok(())
    }
}

// ===== Factory methods =====

/// Creates a test `ServiceContext` with its mock API.
pub fn create_test_context() -> (Arc<ServiceContext>, Arc<MockWatchlistApi>) {
    let api = Arc::new(MockWatchlistApi::new());
    let ctx = Arc::new(ServiceContext::new(api.clone()));
    (ctx, api)
}

/// Creates a test `WatchlistService` with its mock API.
pub fn create_test_watchlist_service() -> (WatchlistService, Arc<MockWatchlistApi>) {
    let (ctx, api) = create_test_context();
    (WatchlistService::new(ctx), api)
}

/// Creates a `FlaggedDomain` for tests; optional fields start unset.
pub fn test_domain(id: &str, url: &str) -> FlaggedDomain {
    FlaggedDomain {
        domain_id: id.to_string(),
        url: url.to_string(),
        registrar_name: String::new(),
        abuse_emails: None,
        owner_name: None,
        last_updated: String::new(),
    }
}
