use crate::config::TableConfig;
use crate::engine::ChipEngine;
use crate::round::{ActionError, RoundEngine};
use crate::table::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Setup,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    Fold,
    CallCheck,
    RaiseOpen,
    RaiseChar(char),
    RaiseBackspace,
    RaiseSubmit,
    RaiseCancel,
    AwardFocus,
    FocusNext,
    FocusPrev,
    FocusSeat(usize),
}

/// A user intent for the table, forwarded to the engine as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    Fold,
    CallCheck,
    /// Raw text from the raise field.
    Raise(String),
    Award(usize),
}

/// Forwards one intent to the engine. `Ok(false)` means the raise text was rejected and
/// nothing changed.
pub fn apply_action<E: ChipEngine + ?Sized>(
    engine: &mut E,
    action: &TableAction,
) -> Result<bool, ActionError> {
    match action {
        TableAction::Fold => engine.fold().map(|()| true),
        TableAction::CallCheck => engine.call_or_check().map(|()| true),
        TableAction::Raise(text) => engine.raise_text(text),
        TableAction::Award(seat) => engine.award_pot(*seat).map(|()| true),
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub engine: RoundEngine,
    // Seat picked for pot awards; follows the acting seat after each action
    pub focus: usize,
    // Setup form being edited
    pub menu_index: usize,
    pub cfg_num_players: usize,
    pub cfg_chip_value_cents: u64,
    pub cfg_starting_stack: u64,
    pub cfg_small_blind: u64,
    pub cfg_big_blind: u64,
    menu_error: Option<String>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    raise_entry: Option<String>,
    raise_entry_error: Option<String>,
    action_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let config = TableConfig::default();
        let cfg_num_players = config.players().len();
        let cfg_starting_stack = config.players().first().map(|p| p.chips()).unwrap_or(100);
        let cfg_chip_value_cents = config.chip_value_cents();
        let cfg_small_blind = config.small_blind();
        let cfg_big_blind = config.big_blind();
        let mut engine = RoundEngine::new(config);
        engine.start_round();
        Self {
            scene: Scene::Setup,
            engine,
            focus: 0,
            menu_index: 0,
            cfg_num_players,
            cfg_chip_value_cents,
            cfg_starting_stack,
            cfg_small_blind,
            cfg_big_blind,
            menu_error: None,
            help_open: false,
            history_open: false,
            history_offset: 0,
            raise_entry: None,
            raise_entry_error: None,
            action_error: None,
        }
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const RAISE_ENTRY_MAX_LEN: usize = 12;

    /// Betting controls are live on the table scene until the hand reaches `ShowCards`.
    pub fn can_bet(&self) -> bool {
        self.scene == Scene::Table && self.engine.stage() != Stage::ShowCards
    }

    fn perform(&mut self, action: TableAction) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        match apply_action(&mut self.engine, &action) {
            Ok(applied) => {
                self.action_error = None;
                if applied {
                    self.focus = self.engine.current_player_index();
                }
                applied
            }
            Err(err) => {
                log::debug!("rejected {action:?}: {err}");
                self.action_error = Some(err.to_string());
                false
            }
        }
    }

    fn bet_action(&mut self, action: TableAction) -> bool {
        if !self.can_bet() {
            return false;
        }
        self.perform(action)
    }

    pub fn raise_entry_active(&self) -> bool {
        self.raise_entry.is_some()
    }

    pub fn raise_entry_text(&self) -> Option<&str> {
        self.raise_entry.as_deref()
    }

    pub fn raise_entry_error(&self) -> Option<&str> {
        self.raise_entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn menu_error(&self) -> Option<&str> {
        self.menu_error.as_deref()
    }

    pub(crate) fn set_menu_error(&mut self, err: Option<String>) {
        self.menu_error = err;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    pub(crate) fn close_raise_entry(&mut self) {
        self.raise_entry = None;
        self.raise_entry_error = None;
    }

    fn open_raise_entry(&mut self) -> bool {
        if !self.can_bet() {
            return false;
        }
        self.raise_entry = Some(self.engine.big_blind().max(1).to_string());
        self.raise_entry_error = None;
        true
    }

    fn raise_entry_push(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if let Some(buf) = self.raise_entry.as_mut() {
            if buf.chars().count() >= Self::RAISE_ENTRY_MAX_LEN {
                return;
            }
            buf.push(c);
        }
        self.raise_entry_error = None;
    }

    fn raise_entry_backspace(&mut self) {
        if let Some(buf) = self.raise_entry.as_mut() {
            buf.pop();
        }
        self.raise_entry_error = None;
    }

    fn raise_entry_submit(&mut self) -> bool {
        let Some(text) = self.raise_entry.clone() else {
            return false;
        };
        if self.bet_action(TableAction::Raise(text)) {
            self.close_raise_entry();
            return true;
        }
        if self.action_error.is_none() {
            self.raise_entry_error = Some("Enter a positive whole number of chips".to_string());
        }
        false
    }

    /// Applies one input. Returns true only when an engine action went through.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        if action == InputAction::ToggleMenu {
            self.toggle_menu();
            return false;
        }
        match self.scene {
            Scene::Setup => {
                self.handle_setup_input(action);
                false
            }
            Scene::Table => self.handle_table_input(action),
        }
    }

    fn handle_setup_input(&mut self, action: InputAction) {
        match action {
            InputAction::MenuNext => self.menu_next(),
            InputAction::MenuPrev => self.menu_prev(),
            InputAction::MenuInc => self.menu_inc(),
            InputAction::MenuDec => self.menu_dec(),
            InputAction::MenuApply => self.apply_menu(),
            InputAction::MenuCancel => self.cancel_menu(),
            _ => {}
        }
    }

    fn handle_table_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.history_open = false;
                self.help_open = !self.help_open;
            }
            InputAction::ToggleHistory => {
                self.help_open = false;
                self.history_offset = 0;
                self.history_open = !self.history_open;
            }
            InputAction::HistoryUp if self.history_open => {
                let max_offset = self.engine.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                self.history_offset = (self.history_offset + 1).min(max_offset);
            }
            InputAction::HistoryDown if self.history_open => {
                self.history_offset = self.history_offset.saturating_sub(1);
            }
            InputAction::Fold => return self.bet_action(TableAction::Fold),
            InputAction::CallCheck => return self.bet_action(TableAction::CallCheck),
            InputAction::RaiseOpen => return self.open_raise_entry(),
            InputAction::RaiseChar(c) => self.raise_entry_push(c),
            InputAction::RaiseBackspace => self.raise_entry_backspace(),
            InputAction::RaiseSubmit => return self.raise_entry_submit(),
            InputAction::RaiseCancel => self.close_raise_entry(),
            InputAction::AwardFocus => return self.perform(TableAction::Award(self.focus)),
            InputAction::FocusNext => self.focus_next(),
            InputAction::FocusPrev => self.focus_prev(),
            InputAction::FocusSeat(idx) => self.set_focus(idx),
            _ => {}
        }
        false
    }

    pub fn focus_next(&mut self) {
        let n = self.engine.players().len();
        if n == 0 {
            return;
        }
        self.focus = (self.focus + 1) % n;
    }

    pub fn focus_prev(&mut self) {
        let n = self.engine.players().len();
        if n == 0 {
            return;
        }
        self.focus = (self.focus + n - 1) % n;
    }

    pub fn set_focus(&mut self, idx: usize) {
        let n = self.engine.players().len();
        if n == 0 {
            return;
        }
        self.focus = idx % n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn betting_disabled_at_show_cards() {
        let mut app = AppState::default();
        app.apply_menu();
        app.engine.table.stage = Stage::ShowCards;
        let before = app.engine.table().clone();

        assert!(!app.handle_input(InputAction::CallCheck));
        assert!(!app.handle_input(InputAction::Fold));
        assert!(!app.handle_input(InputAction::RaiseOpen));
        assert_eq!(app.engine.table(), &before);
    }

    #[test]
    fn award_still_allowed_at_show_cards() {
        let mut app = AppState::default();
        app.apply_menu();
        app.engine.table.stage = Stage::ShowCards;
        let pot = app.engine.pot();
        let _ = app.handle_input(InputAction::FocusSeat(2));
        let stack = app.engine.players()[2].chips();

        assert!(app.handle_input(InputAction::AwardFocus));
        assert_eq!(app.engine.players()[2].chips(), stack + pot);
        assert_eq!(app.engine.stage(), Stage::PreFlop);
    }
}
