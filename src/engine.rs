// Engine API boundary. The presentation layer drives a hand through this trait and
// renders the snapshot queries, without reaching into `RoundEngine` internals.

use crate::input::RaiseAmount;
use crate::player::Player;
use crate::round::{ActionError, RoundEngine};
use crate::table::Stage;

pub trait ChipEngine {
    // Hand lifecycle
    fn start_round(&mut self);
    fn award_pot(&mut self, winner: usize) -> Result<(), ActionError>;

    // Player actions, always for the acting seat
    fn call_or_check(&mut self) -> Result<(), ActionError>;
    fn raise(&mut self, amount: RaiseAmount) -> Result<(), ActionError>;
    fn raise_text(&mut self, text: &str) -> Result<bool, ActionError>;
    fn fold(&mut self) -> Result<(), ActionError>;

    // Queries
    fn players(&self) -> &[Player];
    fn pot(&self) -> u64;
    fn current_highest_bet(&self) -> u64;
    fn stage(&self) -> Stage;
    fn current_player_index(&self) -> usize;
    fn amount_owed(&self) -> u64;
    fn call_label(&self) -> String;
    fn raise_label(&self, amount: Option<RaiseAmount>) -> String;
    fn chip_value_cents(&self) -> u64;
}

impl ChipEngine for RoundEngine {
    fn start_round(&mut self) {
        self.start_round();
    }
    fn award_pot(&mut self, winner: usize) -> Result<(), ActionError> {
        self.award_pot(winner)
    }

    fn call_or_check(&mut self) -> Result<(), ActionError> {
        self.call_or_check()
    }
    fn raise(&mut self, amount: RaiseAmount) -> Result<(), ActionError> {
        self.raise(amount)
    }
    fn raise_text(&mut self, text: &str) -> Result<bool, ActionError> {
        self.raise_text(text)
    }
    fn fold(&mut self) -> Result<(), ActionError> {
        self.fold()
    }

    fn players(&self) -> &[Player] {
        self.players()
    }
    fn pot(&self) -> u64 {
        self.pot()
    }
    fn current_highest_bet(&self) -> u64 {
        self.current_highest_bet()
    }
    fn stage(&self) -> Stage {
        self.stage()
    }
    fn current_player_index(&self) -> usize {
        self.current_player_index()
    }
    fn amount_owed(&self) -> u64 {
        self.amount_owed()
    }
    fn call_label(&self) -> String {
        self.call_label()
    }
    fn raise_label(&self, amount: Option<RaiseAmount>) -> String {
        self.raise_label(amount)
    }
    fn chip_value_cents(&self) -> u64 {
        self.chip_value_cents()
    }
}
