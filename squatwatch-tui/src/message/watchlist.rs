//! Watchlist table messages.

/// Messages for the flagged-domain table.
#[derive(Debug, Clone)]
pub enum WatchlistMessage {
    /// Select the previous row
    SelectPrevious,
    /// Select the next row
    SelectNext,
    /// Jump to the first row
    SelectFirst,
    /// Jump to the last row
    SelectLast,
    /// Ask to whitelist the selected row (opens the confirmation)
    RequestWhitelist,
}
