//! Dialog state.

/// A dialog variant carries all of its own data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Confirm removing a domain from the watchlist
    ConfirmWhitelist {
        /// Id of the entry, the removal key
        domain_id: String,
        /// Displayed address
        url: String,
        /// Focus: 0 = cancel, 1 = confirm
        focus: usize,
    },
    /// Error report
    Error { title: String, message: String },
    /// Keyboard shortcut overview
    Help,
}

/// Container for the currently active dialog.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    /// None = no dialog open
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the active dialog.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// Whether a dialog is open.
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Open the whitelist confirmation with the focus on cancel.
    pub fn show_confirm_whitelist(&mut self, domain_id: &str, url: &str) {
        self.active = Some(Modal::ConfirmWhitelist {
            domain_id: domain_id.to_string(),
            url: url.to_string(),
            focus: 0,
        });
    }

    /// Open the error dialog.
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// Open the help overlay.
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
