//! Terminal review console for the Squatwatch dangerous-domain watchlist.
//!
//! The UI follows the Elm architecture with strictly separated layers:
//!
//! - `model`: application state, the single source of truth
//! - `message`: everything the user can ask the application to do
//! - `update`: the only place that mutates the model
//! - `view`: pure rendering of the model onto a ratatui frame
//! - `event`: translation of terminal input into messages
//! - `backend`: blocking bridge to the async services in `squatwatch-core`
//!
//! The main loop in [`app`] drives the cycle: draw the model, poll for an
//! event, translate it into a message, apply it to the model, repeat.

pub mod app;
pub mod backend;
pub mod event;
pub mod i18n;
pub mod message;
pub mod model;
pub mod update;
pub mod util;
pub mod view;
