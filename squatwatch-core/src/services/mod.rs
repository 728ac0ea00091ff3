//! Business logic service layer

mod export_service;
mod watchlist_service;

pub use export_service::{ExportService, EXPORT_FILE_NAME};
pub use watchlist_service::WatchlistService;

use std::sync::Arc;

use squatwatch_api::{ApiError, WatchlistApi};

use crate::error::CoreError;

/// Service context - holds all dependencies
///
/// The platform layer creates this context and injects its own API transport
/// (HTTP client in production, mocks in tests).
pub struct ServiceContext {
    /// Watchlist API access
    pub api: Arc<dyn WatchlistApi>,
}

impl ServiceContext {
    /// Creates the service context
    #[must_use]
    pub fn new(api: Arc<dyn WatchlistApi>) -> Self {
        Self { api }
    }

    /// Wraps an API error as a core error, logging at the level its
    /// expected/unexpected classification calls for.
    pub fn handle_api_error(&self, operation: &str, err: ApiError) -> CoreError {
        if err.is_expected() {
            log::warn!("{operation} failed: {err}");
        } else {
            log::error!("{operation} failed: {err}");
        }
        CoreError::Api(err)
    }
}
