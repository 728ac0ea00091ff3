//! English translations (en-US)

use super::keys::{
    CommonTexts, ConfirmWhitelistTexts, ErrorModalTexts, HelpTexts, ModalTexts, StatusBarTexts,
    Translations, WatchlistTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Squatwatch",
        cancel: "Cancel",
        close: "Close",
    },

    watchlist: WatchlistTexts {
        title: "Dangerous domains",
        updated_label: "Data current as of:",
        col_index: "#",
        col_url: "Address",
        col_registrar: "Registrar",
        col_abuse_emails: "Abuse emails",
        col_owner: "Owner",
        unknown_owner: "Unknown",
        unknown_emails: "Unknown",
        empty: "No dangerous domains on the watchlist.",
        empty_hint: "Press r to refresh.",
        load_failed: "Failed to load the watchlist",
        retry_hint: "Press r to try again.",
    },

    modal: ModalTexts {
        confirm_whitelist: ConfirmWhitelistTexts {
            title: "Remove from watchlist",
            question: "Mark this domain as safe and remove it?",
            confirm: "Whitelist",
        },
        error: ErrorModalTexts {
            whitelist_title: "Whitelisting failed",
            export_title: "Export failed",
            close_hint: "Press Esc or Enter to close",
        },
    },

    status_bar: StatusBarTexts {
        navigate: "Navigate",
        whitelist: "Whitelist",
        refresh: "Refresh",
        export: "Export",
        help: "Help",
        quit: "Quit",
        loaded: "Dangerous domains loaded:",
        refreshing: "Refreshing...",
        whitelisted: "Removed from watchlist:",
        exported: "Exported to",
        export_empty: "Nothing to export",
    },

    help: HelpTexts {
        title: "Help",
        section_table: "Table",
        section_dialog: "Dialogs",
        navigate: "Move the selection",
        whitelist: "Whitelist the selected domain",
        refresh: "Reload the watchlist",
        export: "Export the table to CSV",
        help: "Show this help",
        quit: "Quit",
        switch_button: "Switch button",
        activate: "Press the focused button",
        close_dialog: "Close the dialog",
        close_hint: "Press Esc to close the help",
    },
};
