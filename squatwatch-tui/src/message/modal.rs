//! Dialog messages.

/// Messages for the active dialog.
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// Close the dialog
    Close,

    /// Switch between cancel and confirm in the confirmation dialog
    ToggleFocus,

    /// Activate the focused button
    Confirm,
}
