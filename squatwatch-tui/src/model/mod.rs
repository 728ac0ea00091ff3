//! Model layer: application state.
//!
//! The model is the single source of truth. It holds plain data only; every
//! mutation goes through the update layer, every read through the view layer.

mod app;

pub mod state;

pub use app::App;
