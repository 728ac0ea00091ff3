//! Core type definitions

mod watchlist;

pub use watchlist::WatchlistSnapshot;
