use crate::app::AppState;
use crate::domain::{Command, InputMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle a keyboard event; returns true when the user asked to quit.
///
/// While adjusting, editing keys go to the text buffer and never reach the
/// countdown. Everything else maps onto the fixed command set, gated by the
/// current mode; unmatched keys are silently ignored.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if app.mode == InputMode::Adjusting {
        match key.code {
            KeyCode::Backspace => {
                app.input_backspace();
                return Ok(false);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.input_push_char(c);
                return Ok(false);
            }
            _ => {}
        }
    }

    let command = match map_key(key) {
        Some(command) => command,
        None => return Ok(false),
    };
    if !app.mode.accepts(command) {
        return Ok(false);
    }

    dispatch(app, command)
}

/// Map a key event onto the command it is bound to
fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('s') => Some(Command::Toggle),
        KeyCode::Char('a') => Some(Command::Add),
        KeyCode::Char('c') => Some(Command::ClearLog),
        KeyCode::Enter => Some(Command::Submit),
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

fn dispatch(app: &mut AppState, command: Command) -> Result<bool> {
    match command {
        Command::Toggle => app.toggle_timer(),
        Command::Add => app.start_adjust(),
        Command::Submit => app.submit_adjust(),
        Command::Cancel => app.cancel_adjust(),
        Command::ClearLog => app.clear_log(),
        Command::Quit => return Ok(true),
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn create_test_app() -> AppState {
        AppState::new(Duration::seconds(10))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_quit_keys_in_normal_mode() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());

        let mut app = create_test_app();
        assert!(handle_key(&mut app, ctrl('c')).unwrap());
    }

    #[test]
    fn test_toggle_key() {
        let mut app = create_test_app();
        assert!(app.timer.is_running());

        handle_key(&mut app, press(KeyCode::Char('s'))).unwrap();
        assert!(!app.timer.is_running());

        handle_key(&mut app, press(KeyCode::Char('s'))).unwrap();
        assert!(app.timer.is_running());
    }

    #[test]
    fn test_add_key_enters_adjusting() {
        let mut app = create_test_app();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.mode, InputMode::Adjusting);
    }

    #[test]
    fn test_clear_key() {
        let mut app = create_test_app();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        for c in "5m".chars() {
            handle_key(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.log.len(), 1);

        handle_key(&mut app, press(KeyCode::Char('c'))).unwrap();
        assert!(app.log.is_empty());
    }

    #[test]
    fn test_unmatched_keys_ignored() {
        let mut app = create_test_app();
        assert!(!handle_key(&mut app, press(KeyCode::Char('z'))).unwrap());
        assert!(!handle_key(&mut app, press(KeyCode::Up)).unwrap());
        assert_eq!(app.mode, InputMode::Normal);
        assert!(app.timer.is_running());
    }

    #[test]
    fn test_submit_and_cancel_ignored_in_normal_mode() {
        let mut app = create_test_app();
        assert!(!handle_key(&mut app, press(KeyCode::Enter)).unwrap());
        assert!(!handle_key(&mut app, press(KeyCode::Esc)).unwrap());
        assert_eq!(app.mode, InputMode::Normal);
    }

    #[test]
    fn test_characters_go_to_buffer_while_adjusting() {
        let mut app = create_test_app();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();

        // Normal-mode command keys are just text here
        for c in "sq5m".chars() {
            handle_key(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.adjust_input.as_ref().unwrap().value, "sq5m");
        assert!(app.timer.is_running());
        assert_eq!(app.mode, InputMode::Adjusting);

        handle_key(&mut app, press(KeyCode::Backspace)).unwrap();
        assert_eq!(app.adjust_input.as_ref().unwrap().value, "sq5");
    }

    #[test]
    fn test_quit_disabled_while_adjusting() {
        let mut app = create_test_app();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();

        assert!(!handle_key(&mut app, ctrl('c')).unwrap());
        assert_eq!(app.mode, InputMode::Adjusting);
    }

    #[test]
    fn test_enter_submits_while_adjusting() {
        let mut app = create_test_app();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        for c in "-30s".chars() {
            handle_key(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.log[0].message, "Removed 30s");
        assert_eq!(
            app.timer.total(),
            Duration::seconds(10) - Duration::seconds(30)
        );
    }

    #[test]
    fn test_esc_cancels_while_adjusting() {
        let mut app = create_test_app();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        for c in "5m".chars() {
            handle_key(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, press(KeyCode::Esc)).unwrap();

        assert_eq!(app.mode, InputMode::Normal);
        assert!(app.log.is_empty());
        assert_eq!(app.timer.total(), Duration::seconds(10));
    }
}
