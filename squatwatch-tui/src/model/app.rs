//! Top-level application state.

use std::sync::Arc;

use crate::backend::ConsoleBackend;
use crate::model::state::{ModalState, WatchlistState};

/// Application state.
///
/// Created once at startup and mutated exclusively by the update layer.
pub struct App {
    /// Set to true to leave the main loop after the next draw
    pub should_quit: bool,

    /// Transient message shown in the status bar
    pub status_message: Option<String>,

    /// The flagged-domain table
    pub watchlist: WatchlistState,

    /// Currently open dialog, if any
    pub modal: ModalState,

    /// Gateway to the watchlist services
    pub backend: Arc<dyn ConsoleBackend>,
}

impl App {
    pub fn new(backend: Arc<dyn ConsoleBackend>) -> Self {
        Self {
            should_quit: false,
            status_message: None,
            watchlist: WatchlistState::new(),
            modal: ModalState::new(),
            backend,
        }
    }

    /// Set the status bar message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status bar message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
