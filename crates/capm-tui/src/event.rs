//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::{App, InputMode};

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl-C quits from any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::ErrorDialog => handle_error_dialog_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Control selection
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),

        // Slider adjustment
        KeyCode::Left | KeyCode::Char('h') => app.adjust_down(),
        KeyCode::Right | KeyCode::Char('l') => app.adjust_up(),

        // Explicit calculation request
        KeyCode::Enter | KeyCode::Char('c') => app.calculate(),

        _ => {}
    }
}

fn handle_error_dialog_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.dismiss_error(),
        _ => {}
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Control;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_quits() {
        let mut app = App::new();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let mut app = App::new();
        app.input_mode = InputMode::ErrorDialog;
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_arrow_keys_select_and_adjust() {
        let mut app = App::new();

        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected, Control::Beta);

        handle_key_event(&mut app, key(KeyCode::Right));
        handle_key_event(&mut app, key(KeyCode::Right));
        assert!((app.beta.value() - 0.02).abs() < 1e-12);

        handle_key_event(&mut app, key(KeyCode::Left));
        assert!((app.beta.value() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_enter_calculates() {
        let mut app = App::new();
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.result_text(), "Expected Return: 0.00");
    }

    #[test]
    fn test_c_calculates() {
        let mut app = app_with_result_pending();
        handle_key_event(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.result_text(), "Expected Return: 0.09");
    }

    #[test]
    fn test_slider_keys_do_not_calculate() {
        let mut app = App::new();
        handle_key_event(&mut app, key(KeyCode::Right));
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.result, None);
    }

    #[test]
    fn test_dialog_swallows_normal_keys() {
        let mut app = App::new();
        app.input_mode = InputMode::ErrorDialog;

        handle_key_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.risk_free_rate.value(), 0.0);
        assert_eq!(app.input_mode, InputMode::ErrorDialog);
    }

    #[test]
    fn test_dialog_dismissed_with_enter_or_esc() {
        for code in [KeyCode::Enter, KeyCode::Esc] {
            let mut app = App::new();
            app.input_mode = InputMode::ErrorDialog;
            handle_key_event(&mut app, key(code));
            assert_eq!(app.input_mode, InputMode::Normal);
        }
    }

    fn app_with_result_pending() -> App {
        let mut app = App::new();
        app.risk_free_rate.set_position(3); // 0.03
        app.beta.set_position(120); // 1.20
        app.expected_market_return.set_position(8); // 0.08
        app
    }
}
