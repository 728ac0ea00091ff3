//! Message layer: the bridge between events and updates.
//!
//! Every user action is expressed as a message. The event layer translates
//! raw terminal input into these values; the update layer consumes them.

mod app;
mod modal;
mod watchlist;

pub use app::AppMessage;
pub use modal::ModalMessage;
pub use watchlist::WatchlistMessage;
