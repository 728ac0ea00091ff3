//! Watchlist table updates.

use crate::message::WatchlistMessage;
use crate::model::App;

/// Handle table messages.
pub fn update(app: &mut App, msg: WatchlistMessage) {
    match msg {
        WatchlistMessage::SelectPrevious => {
            app.watchlist.select_previous();
        }

        WatchlistMessage::SelectNext => {
            app.watchlist.select_next();
        }

        WatchlistMessage::SelectFirst => {
            app.watchlist.select_first();
        }

        WatchlistMessage::SelectLast => {
            app.watchlist.select_last();
        }

        WatchlistMessage::RequestWhitelist => {
            if let Some(entry) = app.watchlist.selected_entry() {
                let domain_id = entry.domain_id.clone();
                let url = entry.url.clone();
                app.modal.show_confirm_whitelist(&domain_id, &url);
            }
        }
    }
}
