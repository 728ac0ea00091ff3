//! Squatwatch Core Library
//!
//! Provides the business logic for the flagged-domain review console:
//! - Watchlist Service (fetch the flagged set, whitelist entries)
//! - CSV export of the flagged set
//!
//! This library is designed to be platform-independent, abstracting the API
//! transport through the `WatchlistApi` trait so terminal and test hosts can
//! inject their own implementation.

pub mod error;
pub mod services;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use types::WatchlistSnapshot;
