//! Dialog updates.

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::state::Modal;
use crate::model::App;

/// Handle dialog messages.
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmWhitelist { .. } => handle_confirm_whitelist(app, msg),
        Modal::Error { .. } | Modal::Help => handle_simple_modal(app, msg),
    }
}

/// Handle the whitelist confirmation dialog.
fn handle_confirm_whitelist(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmWhitelist {
        ref domain_id,
        ref url,
        ref mut focus,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::ToggleFocus => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                let domain_id = domain_id.clone();
                let url = url.clone();
                app.modal.close();
                whitelist_entry(app, &domain_id, &url);
            } else {
                app.modal.close();
                app.clear_status();
            }
        }
    }
}

/// Persist the whitelisting, then drop the row.
///
/// The row stays in the table until the server confirms. On failure the
/// table is left untouched and the error dialog is shown instead.
fn whitelist_entry(app: &mut App, domain_id: &str, url: &str) {
    let texts = t();

    match app.backend.whitelist(domain_id) {
        Ok(()) => {
            app.watchlist.remove_by_id(domain_id);
            app.set_status(format!("{} {url}", texts.status_bar.whitelisted));
        }
        Err(err) => {
            app.modal
                .show_error(texts.modal.error.whitelist_title, &err.to_string());
        }
    }
}

/// Error and help dialogs only react to close.
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.modal.close();
        }
        ModalMessage::ToggleFocus => {}
    }
}
