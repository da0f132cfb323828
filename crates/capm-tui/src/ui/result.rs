//! Result panel widget.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Draw the result panel.
///
/// Before the first calculation the placeholder is rendered dimmed so it
/// cannot be mistaken for a computed 0.00.
pub fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let style = if app.result.is_some() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let result = Paragraph::new(app.result_text())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(" Result "));

    frame.render_widget(result, area);
}
