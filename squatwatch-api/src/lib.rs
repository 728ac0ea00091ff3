//! # squatwatch-api
//!
//! HTTP client bindings for the Squatwatch flagged-domain API.
//!
//! The monitoring service tracks look-alike domains for a protected brand and
//! exposes the flagged set over two endpoints:
//!
//! | Endpoint | Method | Purpose |
//! |----------|--------|---------|
//! | `/dangerous-urls` | GET | list all flagged domains |
//! | `/dangerous-urls/{domain_id}` | PATCH | mark one domain as non-dangerous |
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use squatwatch_api::{HttpWatchlistClient, WatchlistApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpWatchlistClient::new("http://localhost/api");
//!
//!     let flagged = client.list_flagged().await?;
//!     for domain in &flagged {
//!         println!("{} ({})", domain.url, domain.registrar_name);
//!     }
//!
//!     if let Some(first) = flagged.first() {
//!         client.whitelist(&first.domain_id).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Transient errors
//! (`NetworkError`, `Timeout`, `RateLimited`) are automatically retried with
//! exponential backoff before being surfaced.

mod client;
mod error;
mod http;
mod traits;
mod types;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the API trait and its HTTP implementation
pub use client::HttpWatchlistClient;
pub use traits::WatchlistApi;

// Re-export wire types
pub use types::FlaggedDomain;
