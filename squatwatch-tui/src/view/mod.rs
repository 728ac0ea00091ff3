//! View layer: rendering.
//!
//! Pure functions from model to frame. Nothing in here mutates state.

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
