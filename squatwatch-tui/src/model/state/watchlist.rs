//! Watchlist table state.

use squatwatch_api::FlaggedDomain;
use squatwatch_core::WatchlistSnapshot;

/// State of the flagged-domain table.
#[derive(Debug, Clone, Default)]
pub struct WatchlistState {
    /// Flagged domains in server order
    pub entries: Vec<FlaggedDomain>,
    /// Index of the selected row
    pub selected: usize,
    /// Freshness label reported by the server, empty before the first load
    pub last_updated: String,
    /// Load failure shown in place of the table
    pub error: Option<String>,
}

impl WatchlistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move the selection down.
    pub fn select_next(&mut self) {
        if !self.entries.is_empty() && self.selected < self.entries.len() - 1 {
            self.selected += 1;
        }
    }

    /// Jump to the first row.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump to the last row.
    pub fn select_last(&mut self) {
        if !self.entries.is_empty() {
            self.selected = self.entries.len() - 1;
        }
    }

    /// Get the selected entry.
    pub fn selected_entry(&self) -> Option<&FlaggedDomain> {
        self.entries.get(self.selected)
    }

    /// Replace the table contents with a freshly fetched snapshot.
    ///
    /// Resets the selection and clears any previous load failure.
    pub fn apply_snapshot(&mut self, snapshot: WatchlistSnapshot) {
        self.entries = snapshot.entries;
        self.last_updated = snapshot.last_updated;
        self.selected = 0;
        self.error = None;
    }

    /// Remove the entry with the given id, keeping the selection in bounds.
    ///
    /// Entries are keyed by `domain_id`, so rows sharing a URL are unaffected.
    /// Returns false when no entry carries that id.
    pub fn remove_by_id(&mut self, domain_id: &str) -> bool {
        let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.domain_id == domain_id)
        else {
            return false;
        };

        self.entries.remove(index);

        if self.entries.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.entries.len() {
            self.selected = self.entries.len() - 1;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(domain_id: &str, url: &str) -> FlaggedDomain {
        FlaggedDomain {
            domain_id: domain_id.to_string(),
            url: url.to_string(),
            registrar_name: "REGRU-RU".to_string(),
            abuse_emails: Some("abuse@reg.ru".to_string()),
            owner_name: None,
            last_updated: "07.03.2024".to_string(),
        }
    }

    fn snapshot(ids: &[&str]) -> WatchlistSnapshot {
        WatchlistSnapshot::from_entries(
            ids.iter()
                .map(|id| entry(id, &format!("{id}.example.ru")))
                .collect(),
        )
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = WatchlistState::new();
        state.apply_snapshot(snapshot(&["1", "2", "3"]));

        state.select_previous();
        assert_eq!(state.selected, 0);

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);

        state.select_first();
        assert_eq!(state.selected, 0);

        state.select_last();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_selection_on_empty_table() {
        let mut state = WatchlistState::new();

        state.select_next();
        state.select_last();
        assert_eq!(state.selected, 0);
        assert!(state.selected_entry().is_none());
    }

    #[test]
    fn test_apply_snapshot_resets_selection_and_error() {
        let mut state = WatchlistState::new();
        state.apply_snapshot(snapshot(&["1", "2", "3"]));
        state.select_last();
        state.error = Some("boom".to_string());

        state.apply_snapshot(snapshot(&["4"]));

        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.selected, 0);
        assert!(state.error.is_none());
        assert_eq!(state.last_updated, "07.03.2024");
    }

    #[test]
    fn test_remove_by_id_keeps_selection_in_bounds() {
        let mut state = WatchlistState::new();
        state.apply_snapshot(snapshot(&["1", "2", "3"]));
        state.select_last();

        assert!(state.remove_by_id("3"));

        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.selected, 1);
        assert_eq!(state.selected_entry().map(|e| e.domain_id.as_str()), Some("2"));
    }

    #[test]
    fn test_remove_by_id_targets_id_not_url() {
        let mut state = WatchlistState::new();
        let mut duplicate = entry("2", "same.example.ru");
        duplicate.owner_name = Some("ООО Ромашка".to_string());
        state.apply_snapshot(WatchlistSnapshot::from_entries(vec![
            entry("1", "same.example.ru"),
            duplicate,
        ]));

        assert!(state.remove_by_id("2"));

        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].domain_id, "1");
    }

    #[test]
    fn test_remove_last_entry() {
        let mut state = WatchlistState::new();
        state.apply_snapshot(snapshot(&["1"]));

        assert!(state.remove_by_id("1"));

        assert!(state.entries.is_empty());
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut state = WatchlistState::new();
        state.apply_snapshot(snapshot(&["1", "2"]));

        assert!(!state.remove_by_id("missing"));
        assert_eq!(state.entries.len(), 2);
    }
}
