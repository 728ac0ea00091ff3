//! Event handler.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ModalMessage, WatchlistMessage};
use crate::model::state::Modal;
use crate::model::App;

/// Poll for the next terminal event.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an event into a message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Terminal resize redraws on the next loop pass
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// Translate a key event into a message.
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only react to Press; Release and Repeat would double keystrokes on
    // Windows terminals
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // An open dialog captures all input
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // Global shortcuts
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::EXPORT.matches(&key) {
        return AppMessage::ExportCsv;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    handle_table_keys(key)
}

/// Keys for the flagged-domain table.
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::WHITELIST.matches(&key) {
        return AppMessage::Watchlist(WatchlistMessage::RequestWhitelist);
    }

    match key.code {
        // Up or k: previous row
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Watchlist(WatchlistMessage::SelectPrevious)
        }

        // Down or j: next row
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Watchlist(WatchlistMessage::SelectNext),

        // Home: first row
        KeyCode::Home => AppMessage::Watchlist(WatchlistMessage::SelectFirst),

        // End: last row
        KeyCode::End => AppMessage::Watchlist(WatchlistMessage::SelectLast),

        // Enter: whitelist the selected row
        KeyCode::Enter => AppMessage::Watchlist(WatchlistMessage::RequestWhitelist),

        _ => AppMessage::Noop,
    }
}

/// Keys while a dialog is open.
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc and Ctrl+C always close the dialog
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::ConfirmWhitelist { .. } => handle_confirm_whitelist_keys(key),
        Modal::Error { .. } | Modal::Help => match key.code {
            KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// Keys for the whitelist confirmation dialog.
fn handle_confirm_whitelist_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab or arrows: switch between cancel and confirm
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleFocus)
        }

        // Enter: activate the focused button
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}
