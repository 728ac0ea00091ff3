//! Console backend over the core services.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use squatwatch_api::{FlaggedDomain, HttpWatchlistClient};
use squatwatch_core::services::{ExportService, WatchlistService, EXPORT_FILE_NAME};
use squatwatch_core::{CoreError, CoreResult, ServiceContext, WatchlistSnapshot};

/// Blocking gateway to the watchlist services.
///
/// Every call runs to completion before the next frame is drawn; the UI
/// shows the outcome, never a pending state.
pub trait ConsoleBackend: Send + Sync {
    /// Fetch the current flagged set.
    fn fetch_watchlist(&self) -> CoreResult<WatchlistSnapshot>;

    /// Mark an entry as safe on the server.
    fn whitelist(&self, domain_id: &str) -> CoreResult<()>;

    /// Write the entries to a CSV file and return its path.
    fn export_csv(&self, entries: &[FlaggedDomain]) -> CoreResult<PathBuf>;
}

/// Production backend: core services driven on an owned tokio runtime.
pub struct ConsoleService {
    runtime: Runtime,
    watchlist: WatchlistService,
}

impl ConsoleService {
    /// Connect to the watchlist API at the given base URL.
    pub fn new(api_base: &str) -> Result<Self> {
        let runtime = Runtime::new().context("failed to start the async runtime")?;

        let client = Arc::new(HttpWatchlistClient::new(api_base));
        let ctx = Arc::new(ServiceContext::new(client));
        let watchlist = WatchlistService::new(ctx);

        Ok(Self { runtime, watchlist })
    }

    /// Downloads directory when the platform reports one, else the working
    /// directory.
    fn export_path() -> PathBuf {
        dirs::download_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(EXPORT_FILE_NAME)
    }
}

impl ConsoleBackend for ConsoleService {
    fn fetch_watchlist(&self) -> CoreResult<WatchlistSnapshot> {
        self.runtime.block_on(self.watchlist.fetch())
    }

    fn whitelist(&self, domain_id: &str) -> CoreResult<()> {
        self.runtime.block_on(self.watchlist.whitelist(domain_id))
    }

    fn export_csv(&self, entries: &[FlaggedDomain]) -> CoreResult<PathBuf> {
        let csv = ExportService::to_csv(entries);
        let path = Self::export_path();

        self.runtime
            .block_on(tokio::fs::write(&path, csv))
            .map_err(|err| CoreError::ExportError(err.to_string()))?;

        log::info!("Exported {} entries to {}", entries.len(), path.display());
        Ok(path)
    }
}
