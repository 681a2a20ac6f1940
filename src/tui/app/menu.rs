use crate::config::{TableConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::money::format_chips;
use crate::round::RoundEngine;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Players,
    ChipValue,
    StartingStack,
    SmallBlind,
    BigBlind,
}

// cents per chip
const CHIP_VALUES: [u64; 8] = [1, 5, 10, 25, 50, 100, 500, 1000];
const STACK_STEP: u64 = 10;

const MENU_ITEMS: [MenuItem; 5] = [
    MenuItem::Players,
    MenuItem::ChipValue,
    MenuItem::StartingStack,
    MenuItem::SmallBlind,
    MenuItem::BigBlind,
];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        let cents = app.cfg_chip_value_cents;
        match self {
            MenuItem::Players => format!("Players: {}", app.cfg_num_players),
            MenuItem::ChipValue => format!("Chip Value: {}", format_chips(1, cents)),
            MenuItem::StartingStack => format!(
                "Starting Stack: {} chips ({})",
                app.cfg_starting_stack,
                format_chips(app.cfg_starting_stack, cents)
            ),
            MenuItem::SmallBlind => format!("Small Blind: {}", app.cfg_small_blind),
            MenuItem::BigBlind => format!("Big Blind: {}", app.cfg_big_blind),
        }
    }

    /// Moves the field one notch up or down, keeping small blind <= big blind.
    fn step(self, app: &mut AppState, up: bool) {
        match self {
            MenuItem::Players => {
                app.cfg_num_players = if up {
                    (app.cfg_num_players + 1).min(MAX_PLAYERS)
                } else {
                    app.cfg_num_players.saturating_sub(1).max(MIN_PLAYERS)
                };
            }
            MenuItem::ChipValue => {
                let last = CHIP_VALUES.len() - 1;
                let at = CHIP_VALUES
                    .iter()
                    .position(|&v| v >= app.cfg_chip_value_cents)
                    .unwrap_or(last);
                let next = if up { (at + 1).min(last) } else { at.saturating_sub(1) };
                app.cfg_chip_value_cents = CHIP_VALUES[next];
            }
            MenuItem::StartingStack => {
                app.cfg_starting_stack = if up {
                    app.cfg_starting_stack.saturating_add(STACK_STEP)
                } else {
                    app.cfg_starting_stack.saturating_sub(STACK_STEP).max(STACK_STEP)
                };
            }
            MenuItem::SmallBlind => {
                app.cfg_small_blind = nudge(app.cfg_small_blind, up);
                app.cfg_big_blind = app.cfg_big_blind.max(app.cfg_small_blind);
            }
            MenuItem::BigBlind => {
                app.cfg_big_blind = nudge(app.cfg_big_blind, up);
                app.cfg_small_blind = app.cfg_small_blind.min(app.cfg_big_blind);
            }
        }
    }
}

fn nudge(v: u64, up: bool) -> u64 {
    if up {
        v.saturating_add(1)
    } else {
        v.saturating_sub(1).max(1)
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.close_raise_entry();
        self.scene = match self.scene {
            super::Scene::Setup => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Setup
            }
        };
    }

    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.close_raise_entry();
        self.menu_index = 0;
        self.set_menu_error(None);
        self.cfg_num_players = self.engine.players().len();
        self.cfg_chip_value_cents = self.engine.chip_value_cents();
        self.cfg_small_blind = self.engine.small_blind();
        self.cfg_big_blind = self.engine.big_blind();
        self.scene = super::Scene::Setup;
    }

    /// Builds a fresh table from the form and deals the first hand. Stacks start over.
    pub fn apply_menu(&mut self) {
        match TableConfig::with_seats(
            self.cfg_num_players,
            self.cfg_starting_stack,
            self.cfg_chip_value_cents,
            self.cfg_small_blind,
            self.cfg_big_blind,
        ) {
            Ok(config) => {
                log::info!(
                    "new table: {} players, {} chips each, blinds {}/{}",
                    self.cfg_num_players,
                    self.cfg_starting_stack,
                    self.cfg_small_blind,
                    self.cfg_big_blind
                );
                self.engine = RoundEngine::new(config);
                self.engine.start_round();
                self.focus = self.engine.current_player_index();
                self.set_menu_error(None);
                self.scene = super::Scene::Table;
            }
            Err(err) => self.set_menu_error(Some(err.to_string())),
        }
    }

    pub fn cancel_menu(&mut self) {
        self.set_menu_error(None);
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_index = self.menu_index.checked_sub(1).unwrap_or(MENU_ITEMS.len() - 1);
    }

    pub fn menu_inc(&mut self) {
        self.selected_item().step(self, true);
    }

    pub fn menu_dec(&mut self) {
        self.selected_item().step(self, false);
    }

    fn selected_item(&self) -> MenuItem {
        MENU_ITEMS[self.menu_index % MENU_ITEMS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_count_stays_in_table_range() {
        let mut app = AppState::default();
        for _ in 0..20 {
            app.menu_inc();
        }
        assert_eq!(app.cfg_num_players, MAX_PLAYERS);
        for _ in 0..20 {
            app.menu_dec();
        }
        assert_eq!(app.cfg_num_players, MIN_PLAYERS);
    }

    #[test]
    fn blinds_stay_ordered() {
        let mut app = AppState::default();
        app.menu_index = 3;
        for _ in 0..5 {
            app.menu_inc();
        }
        assert!(app.cfg_small_blind <= app.cfg_big_blind);
        app.menu_index = 4;
        for _ in 0..20 {
            app.menu_dec();
        }
        assert_eq!(app.cfg_big_blind, 1);
        assert_eq!(app.cfg_small_blind, 1);
    }

    #[test]
    fn chip_value_walks_the_ladder() {
        let mut app = AppState::default();
        app.menu_index = 1;
        assert_eq!(app.cfg_chip_value_cents, 25);
        app.menu_inc();
        assert_eq!(app.cfg_chip_value_cents, 50);
        for _ in 0..10 {
            app.menu_dec();
        }
        assert_eq!(app.cfg_chip_value_cents, 1);
    }

    #[test]
    fn apply_seats_configured_table() {
        let mut app = AppState::default();
        app.cfg_num_players = 6;
        app.cfg_starting_stack = 200;
        app.cfg_small_blind = 5;
        app.cfg_big_blind = 10;
        app.apply_menu();
        assert_eq!(app.engine.players().len(), 6);
        assert_eq!(app.engine.pot(), 15);
        assert_eq!(app.engine.players()[5].chips(), 200);
        assert!(app.menu_error().is_none());
    }
}
