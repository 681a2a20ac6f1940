use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

/// What a key press means in the current app state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Quit,
    Input(InputAction),
    Ignored,
}

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(tick_rate)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
            log::info!("quit requested");
            return Ok(());
        }
    }
}

/// Applies a key press. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    match map_key(app, code) {
        KeyOutcome::Quit => true,
        KeyOutcome::Input(action) => {
            let _ = app.handle_input(action);
            false
        }
        KeyOutcome::Ignored => false,
    }
}

/// Overlays take the keyboard first: help, then history, then the raise field.
pub fn map_key(app: &AppState, code: KeyCode) -> KeyOutcome {
    use InputAction as A;
    use KeyOutcome::{Ignored, Input};

    if !app.raise_entry_active() {
        match code {
            KeyCode::Char('?') => return Input(A::ToggleHelp),
            KeyCode::Char('h' | 'H') => return Input(A::ToggleHistory),
            _ => {}
        }
    }
    if app.help_open() {
        return if code == KeyCode::Esc { Input(A::ToggleHelp) } else { Ignored };
    }
    if app.history_open() {
        return match code {
            KeyCode::Up => Input(A::HistoryUp),
            KeyCode::Down => Input(A::HistoryDown),
            KeyCode::Esc => Input(A::ToggleHistory),
            _ => Ignored,
        };
    }
    if app.raise_entry_active() {
        return match code {
            KeyCode::Esc => Input(A::RaiseCancel),
            KeyCode::Enter => Input(A::RaiseSubmit),
            KeyCode::Backspace => Input(A::RaiseBackspace),
            KeyCode::Char(c) => Input(A::RaiseChar(c)),
            _ => Ignored,
        };
    }
    if matches!(code, KeyCode::Char('q' | 'Q')) {
        return KeyOutcome::Quit;
    }

    match app.scene {
        Scene::Setup => match code {
            KeyCode::Up => Input(A::MenuPrev),
            KeyCode::Down => Input(A::MenuNext),
            KeyCode::Char('+' | '=') | KeyCode::Right => Input(A::MenuInc),
            KeyCode::Char('-' | '_') | KeyCode::Left => Input(A::MenuDec),
            KeyCode::Enter => Input(A::MenuApply),
            KeyCode::Esc => Input(A::MenuCancel),
            _ => Ignored,
        },
        Scene::Table => match code {
            KeyCode::Char('m' | 'M') => Input(A::ToggleMenu),
            KeyCode::Char('f' | 'F') => Input(A::Fold),
            KeyCode::Char('c' | 'C') => Input(A::CallCheck),
            KeyCode::Char('r' | 'R') => Input(A::RaiseOpen),
            KeyCode::Char('w' | 'W') => Input(A::AwardFocus),
            KeyCode::Char(']') | KeyCode::Right => Input(A::FocusNext),
            KeyCode::Char('[') | KeyCode::Left => Input(A::FocusPrev),
            // 1..9 pick seats 0..8, 0 picks the tenth seat
            KeyCode::Char(c @ '0'..='9') => {
                let seat = c.to_digit(10).map_or(9, |d| (d as usize + 9) % 10);
                Input(A::FocusSeat(seat))
            }
            _ => Ignored,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_app() -> AppState {
        let mut app = AppState::default();
        app.apply_menu();
        app
    }

    #[test]
    fn digits_pick_seats() {
        let app = table_app();
        assert_eq!(map_key(&app, KeyCode::Char('1')), KeyOutcome::Input(InputAction::FocusSeat(0)));
        assert_eq!(map_key(&app, KeyCode::Char('9')), KeyOutcome::Input(InputAction::FocusSeat(8)));
        assert_eq!(map_key(&app, KeyCode::Char('0')), KeyOutcome::Input(InputAction::FocusSeat(9)));
    }

    #[test]
    fn help_swallows_table_keys() {
        let mut app = table_app();
        let _ = app.handle_input(InputAction::ToggleHelp);
        assert_eq!(map_key(&app, KeyCode::Char('c')), KeyOutcome::Ignored);
        assert_eq!(map_key(&app, KeyCode::Char('q')), KeyOutcome::Ignored);
        assert_eq!(map_key(&app, KeyCode::Esc), KeyOutcome::Input(InputAction::ToggleHelp));
    }

    #[test]
    fn quit_from_either_scene() {
        let mut app = AppState::default();
        assert_eq!(map_key(&app, KeyCode::Char('q')), KeyOutcome::Quit);
        app.apply_menu();
        assert_eq!(map_key(&app, KeyCode::Char('Q')), KeyOutcome::Quit);
    }
}
