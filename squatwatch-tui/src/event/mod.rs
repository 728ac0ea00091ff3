//! Event layer: input handling.
//!
//! Translates keyboard input into messages. Which keys mean what depends on
//! whether a dialog is open; the dialog always wins.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
