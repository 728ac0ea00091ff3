//! Page views.

pub mod watchlist;
