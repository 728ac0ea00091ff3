use async_trait::async_trait;

use crate::error::Result;
use crate::types::FlaggedDomain;

/// Watchlist API operations.
///
/// Implemented by the HTTP client and by test mocks; the core layer only
/// ever talks to this trait.
#[async_trait]
pub trait WatchlistApi: Send + Sync {
    /// Fetches all currently flagged domains, in service order.
    async fn list_flagged(&self) -> Result<Vec<FlaggedDomain>>;

    /// Marks one flagged domain as non-dangerous.
    ///
    /// Succeeds only once the service has acknowledged the update.
    async fn whitelist(&self, domain_id: &str) -> Result<()>;
}
