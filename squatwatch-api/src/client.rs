//! HTTP implementation of the watchlist API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::http::HttpUtils;
use crate::traits::WatchlistApi;
use crate::types::FlaggedDomain;

/// Default connect timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Retries for transient failures on idempotent requests.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Creates an HTTP client with timeout configuration.
#[allow(clippy::expect_used)]
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// Client for the flagged-domain API.
///
/// Both endpoints hang off one collection path:
/// `GET {base}/dangerous-urls` and `PATCH {base}/dangerous-urls/{domain_id}`.
pub struct HttpWatchlistClient {
    client: Client,
    base_url: String,
}

impl HttpWatchlistClient {
    /// Creates a client against the given API base, e.g. `http://localhost/api`.
    ///
    /// A trailing slash on the base is tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: create_http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/dangerous-urls", self.base_url)
    }

    fn entry_url(&self, domain_id: &str) -> String {
        format!("{}/dangerous-urls/{domain_id}", self.base_url)
    }
}

#[async_trait]
impl WatchlistApi for HttpWatchlistClient {
    async fn list_flagged(&self) -> Result<Vec<FlaggedDomain>> {
        let url = self.collection_url();
        let request = self.client.get(&url);

        let (status, body) =
            HttpUtils::execute_request_with_retry(request, "GET", &url, DEFAULT_MAX_RETRIES)
                .await?;

        if !(200..300).contains(&status) {
            log::error!("Listing flagged domains failed (HTTP {status})");
            return Err(ApiError::Unexpected {
                status,
                raw_message: body,
            });
        }

        let domains: Vec<FlaggedDomain> = HttpUtils::parse_json(&body)?;
        log::debug!("Fetched {} flagged domains", domains.len());
        Ok(domains)
    }

    async fn whitelist(&self, domain_id: &str) -> Result<()> {
        let url = self.entry_url(domain_id);
        let request = self.client.patch(&url);

        // PATCH is idempotent here (the row either flips to whitelisted or
        // is already gone), so transient failures are retried too.
        let (status, body) =
            HttpUtils::execute_request_with_retry(request, "PATCH", &url, DEFAULT_MAX_RETRIES)
                .await?;

        match status {
            200..=299 => {
                log::info!("Domain {domain_id} has been whitelisted");
                Ok(())
            }
            404 => {
                log::warn!("Whitelist target {domain_id} not found");
                Err(ApiError::DomainNotFound {
                    domain_id: domain_id.to_string(),
                    raw_message: (!body.is_empty()).then_some(body),
                })
            }
            _ => {
                log::error!("Whitelisting {domain_id} failed (HTTP {status})");
                Err(ApiError::Unexpected {
                    status,
                    raw_message: body,
                })
            }
        }
    }
}
