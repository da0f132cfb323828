//! Main layout for the TUI.

use ratatui::prelude::*;

use super::footer::draw_footer;
use super::header::draw_header;
use super::modal::draw_error_modal;
use super::result::draw_result;
use super::sliders::draw_sliders;
use crate::app::{App, InputMode};

/// Draw the main UI layout.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Create main layout: header, sliders, result, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(9),    // Sliders
            Constraint::Length(3), // Result
            Constraint::Length(2), // Footer
        ])
        .split(size);

    draw_header(frame, chunks[0], app);
    draw_sliders(frame, chunks[1], app);
    draw_result(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    // The error dialog blocks everything underneath
    if app.input_mode == InputMode::ErrorDialog {
        draw_error_modal(frame, size, app);
    }
}
