//! Update layer: state transitions.
//!
//! The only place that mutates the model. Messages arrive from the event
//! layer; backend calls happen here, synchronously, between two draws.

mod modal;
mod watchlist;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;

/// Apply a message to the application state.
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Watchlist(watchlist_msg) => {
            watchlist::update(app, watchlist_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Refresh => {
            app.set_status(t().status_bar.refreshing);
            bootstrap(app);
        }

        AppMessage::ExportCsv => {
            export_watchlist(app);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
            }
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// Load the watchlist from the server.
///
/// Called once at startup and again on every refresh. A failure leaves the
/// previous entries untouched and records the error so the view can offer a
/// retry; a success replaces the table and the freshness label.
pub fn bootstrap(app: &mut App) {
    let texts = t();

    match app.backend.fetch_watchlist() {
        Ok(snapshot) => {
            let count = snapshot.len();
            app.watchlist.apply_snapshot(snapshot);
            app.set_status(format!("{} {count}", texts.status_bar.loaded));
        }
        Err(err) => {
            app.watchlist.error = Some(err.to_string());
            app.clear_status();
        }
    }
}

/// Write the current table to a CSV file next to the user's downloads.
fn export_watchlist(app: &mut App) {
    let texts = t();

    if app.watchlist.entries.is_empty() {
        app.set_status(texts.status_bar.export_empty);
        return;
    }

    match app.backend.export_csv(&app.watchlist.entries) {
        Ok(path) => {
            app.set_status(format!("{} {}", texts.status_bar.exported, path.display()));
        }
        Err(err) => {
            app.modal
                .show_error(texts.modal.error.export_title, &err.to_string());
        }
    }
}
