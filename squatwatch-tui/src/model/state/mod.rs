//! Page and dialog state containers.

mod modal;
mod watchlist;

pub use modal::{Modal, ModalState};
pub use watchlist::WatchlistState;
