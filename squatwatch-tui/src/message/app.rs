//! Top-level message enum.

use super::{ModalMessage, WatchlistMessage};

/// Application message.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Watchlist table messages
    Watchlist(WatchlistMessage),

    /// Dialog messages
    Modal(ModalMessage),

    /// Re-fetch the watchlist from the server
    Refresh,

    /// Write the current table to a CSV file
    ExportCsv,

    /// Show the help overlay
    ShowHelp,

    /// Close the dialog or clear the status bar
    GoBack,

    /// No operation (used to ignore unhandled events)
    Noop,
}
