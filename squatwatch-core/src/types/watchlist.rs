//! App-level watchlist types.

use squatwatch_api::FlaggedDomain;

use crate::utils::datetime::today_display_date;

/// One fetch of the flagged set, with its derived summary label.
#[derive(Debug, Clone)]
pub struct WatchlistSnapshot {
    /// Flagged domains in service order.
    pub entries: Vec<FlaggedDomain>,
    /// Label text for the "last updated" indicator: the first record's
    /// `last_updated` verbatim, or today's date when the set is empty.
    pub last_updated: String,
}

impl WatchlistSnapshot {
    /// Builds a snapshot from fetched entries, deriving the label.
    #[must_use]
    pub fn from_entries(entries: Vec<FlaggedDomain>) -> Self {
        let last_updated = entries
            .first()
            .map_or_else(today_display_date, |first| first.last_updated.clone());
        Self {
            entries,
            last_updated,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
