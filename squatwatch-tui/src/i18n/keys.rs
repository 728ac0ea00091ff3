//! Translation key definitions.
//!
//! Structs of static strings, one field per piece of UI text. Texts are
//! grouped by the component they appear in; dialog texts live under
//! `modal.*`, shared words under `common.*`.

/// Root of all translated text.
pub struct Translations {
    /// Shared words
    pub common: CommonTexts,
    /// Flagged-domain table
    pub watchlist: WatchlistTexts,
    /// Dialogs
    pub modal: ModalTexts,
    /// Status bar hints and messages
    pub status_bar: StatusBarTexts,
    /// Help overlay
    pub help: HelpTexts,
}

/// Words reused across components.
pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
}

/// Flagged-domain table texts.
pub struct WatchlistTexts {
    /// Page title
    pub title: &'static str,
    /// Prefix of the freshness label in the title bar
    pub updated_label: &'static str,
    // Column headers
    pub col_index: &'static str,
    pub col_url: &'static str,
    pub col_registrar: &'static str,
    pub col_abuse_emails: &'static str,
    pub col_owner: &'static str,
    /// Shown when the registry omits the owner
    pub unknown_owner: &'static str,
    /// Shown when the registry omits the abuse address
    pub unknown_emails: &'static str,
    // Empty state
    pub empty: &'static str,
    pub empty_hint: &'static str,
    // Load failure state
    pub load_failed: &'static str,
    pub retry_hint: &'static str,
}

/// Dialog texts.
pub struct ModalTexts {
    pub confirm_whitelist: ConfirmWhitelistTexts,
    pub error: ErrorModalTexts,
}

/// Whitelist confirmation dialog.
pub struct ConfirmWhitelistTexts {
    pub title: &'static str,
    pub question: &'static str,
    /// Label of the confirming button
    pub confirm: &'static str,
}

/// Error dialog titles and hints.
pub struct ErrorModalTexts {
    pub whitelist_title: &'static str,
    pub export_title: &'static str,
    pub close_hint: &'static str,
}

/// Status bar texts: shortcut hints and transient messages.
pub struct StatusBarTexts {
    // Hint verbs
    pub navigate: &'static str,
    pub whitelist: &'static str,
    pub refresh: &'static str,
    pub export: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    // Messages
    pub loaded: &'static str,
    pub refreshing: &'static str,
    pub whitelisted: &'static str,
    pub exported: &'static str,
    pub export_empty: &'static str,
}

/// Help overlay texts.
pub struct HelpTexts {
    pub title: &'static str,
    pub section_table: &'static str,
    pub section_dialog: &'static str,
    pub navigate: &'static str,
    pub whitelist: &'static str,
    pub refresh: &'static str,
    pub export: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub switch_button: &'static str,
    pub activate: &'static str,
    pub close_dialog: &'static str,
    pub close_hint: &'static str,
}
