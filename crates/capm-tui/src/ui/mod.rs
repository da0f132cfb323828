//! UI module for the TUI.

mod footer;
mod header;
mod layout;
mod modal;
mod result;
mod sliders;

pub use layout::draw_ui;
