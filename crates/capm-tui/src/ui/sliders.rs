//! Slider controls for the three formula inputs.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge},
};

use crate::app::{App, Control};

/// Draw the three input sliders.
pub fn draw_sliders(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    for (chunk, &control) in chunks.iter().zip(Control::all()) {
        draw_slider(frame, *chunk, app, control);
    }
}

fn draw_slider(frame: &mut Frame, area: Rect, app: &App, control: Control) {
    let slider = app.slider(control);
    let selected = control == app.selected;

    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let config = slider.config();
    let title = format!(
        " {} [{:.2} - {:.2}] ",
        control.name(),
        config.min,
        config.max
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .gauge_style(Style::default().fg(if selected { Color::Yellow } else { Color::Cyan }))
        .ratio(slider.ratio())
        .label(format!("{:.2}", slider.value()));

    frame.render_widget(gauge, area);
}
