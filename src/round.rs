use crate::config::TableConfig;
use crate::history::{HandHistory, HandHistoryEntry, HistoryVerb};
use crate::input::RaiseAmount;
use crate::labels;
use crate::player::Player;
use crate::table::{Stage, Table};

/// Paid actions at `Showdown` that flip the hand to `ShowCards`.
pub const SHOWDOWN_PAID_ACTIONS: u32 = 2;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("seat {seat} has folded and cannot act")]
    PlayerFolded { seat: usize },
    #[error("seat {seat} does not exist at a {seats}-seat table")]
    InvalidSeat { seat: usize, seats: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AwardReason {
    /// Everyone else folded.
    LastStanding,
    /// Settled through [`RoundEngine::award_pot`].
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Award {
    pub hand: u32,
    pub seat: usize,
    pub amount: u64,
    pub reason: AwardReason,
}

/// Authoritative state for one table's hands, and the only place chips move.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    pub(crate) table: Table,
    pub(crate) small_blind: u64,
    pub(crate) big_blind: u64,
    pub(crate) chip_value_cents: u64,
    hand: u32,
    history: HandHistory,
    last_award: Option<Award>,
}

impl RoundEngine {
    /// Seats the configured players. No blinds are posted until [`RoundEngine::start_round`].
    pub fn new(config: TableConfig) -> Self {
        let TableConfig { players, chip_value_cents, small_blind, big_blind } = config;
        Self {
            table: Table::new(players),
            small_blind,
            big_blind,
            chip_value_cents,
            hand: 0,
            history: HandHistory::default(),
            last_award: None,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn players(&self) -> &[Player] {
        self.table.players()
    }

    pub fn pot(&self) -> u64 {
        self.table.pot
    }

    pub fn current_highest_bet(&self) -> u64 {
        self.table.current_highest_bet
    }

    pub fn stage(&self) -> Stage {
        self.table.stage
    }

    pub fn current_player_index(&self) -> usize {
        self.table.current_player_index
    }

    pub fn showdown_bet_count(&self) -> u32 {
        self.table.showdown_bet_count
    }

    pub fn small_blind(&self) -> u64 {
        self.small_blind
    }

    pub fn big_blind(&self) -> u64 {
        self.big_blind
    }

    pub fn chip_value_cents(&self) -> u64 {
        self.chip_value_cents
    }

    /// Number of the hand in progress, starting at 1 once the first round starts.
    pub fn hand_number(&self) -> u32 {
        self.hand
    }

    pub fn last_award(&self) -> Option<Award> {
        self.last_award
    }

    pub fn total_chips(&self) -> u64 {
        self.table.total_chips()
    }

    /// What the acting player must add to stay in.
    pub fn amount_owed(&self) -> u64 {
        self.table.to_call(self.table.current_player_index)
    }

    pub fn to_call(&self, seat: usize) -> u64 {
        self.table.to_call(seat)
    }

    pub fn call_label(&self) -> String {
        labels::call_label(self.amount_owed(), self.chip_value_cents)
    }

    pub fn raise_label(&self, amount: Option<RaiseAmount>) -> String {
        labels::raise_label(amount, self.chip_value_cents)
    }

    pub fn history_recent(&self, n: usize) -> Vec<HandHistoryEntry> {
        self.history.recent(n)
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HandHistoryEntry> {
        self.history.recent_offset(n, offset)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Resets per-hand state in place and collects blinds from seats 0 and 1.
    ///
    /// Stacks carry over. A seat short of its blind posts whatever it has.
    pub fn start_round(&mut self) {
        self.hand += 1;
        for p in &mut self.table.players {
            p.reset_for_hand();
        }
        self.table.pot = 0;
        self.table.current_highest_bet = 0;
        self.table.showdown_bet_count = 0;
        self.table.stage = Stage::PreFlop;

        let sb = self.post_blind(0, self.small_blind, HistoryVerb::SmallBlind);
        let bb = self.post_blind(1, self.big_blind, HistoryVerb::BigBlind);
        // a short big blind can post less than the small blind
        self.table.current_highest_bet = bb.max(sb);
        self.table.current_player_index = 0;
        log::info!("hand {} started: blinds {sb}/{bb}, pot {}", self.hand, self.table.pot);
    }

    fn post_blind(&mut self, seat: usize, amount: u64, verb: HistoryVerb) -> u64 {
        let Some(p) = self.table.players.get_mut(seat) else {
            return 0;
        };
        let paid = p.commit(amount);
        match verb {
            HistoryVerb::SmallBlind => p.is_small_blind = true,
            _ => p.is_big_blind = true,
        }
        p.last_action = Some(format!("{} {paid}", verb.label()));
        self.table.pot += paid;
        self.record(seat, verb, Some(paid));
        paid
    }

    /// Matches the highest bet, or checks when nothing is owed. Short stacks call all-in.
    pub fn call_or_check(&mut self) -> Result<(), ActionError> {
        let seat = self.ensure_can_act()?;
        let needed = self.table.to_call(seat);
        let paid = if needed == 0 { 0 } else { self.table.players[seat].commit(needed) };
        self.table.pot += paid;
        let p = &mut self.table.players[seat];
        if paid == 0 {
            p.last_action = Some("Check".into());
            self.record(seat, HistoryVerb::Check, None);
            log::debug!("seat {seat} checks");
        } else {
            p.last_action = Some(format!("Call {paid}"));
            self.record(seat, HistoryVerb::Call, Some(paid));
            log::debug!("seat {seat} calls {paid} (owed {needed})");
        }
        self.count_showdown_action(paid);
        self.next_player();
        Ok(())
    }

    /// Raises the highest bet by `amount`. A short stack goes all-in for what it has, which may
    /// leave the highest bet where it was.
    pub fn raise(&mut self, amount: RaiseAmount) -> Result<(), ActionError> {
        let seat = self.ensure_can_act()?;
        let target = self.table.current_highest_bet.saturating_add(amount.get());
        let p = &mut self.table.players[seat];
        let needed = target.saturating_sub(p.current_bet);
        let paid = p.commit(needed);
        let bet = p.current_bet;
        p.last_action = Some(format!("Raise to {bet}"));
        self.table.pot += paid;
        if bet > self.table.current_highest_bet {
            self.table.current_highest_bet = bet;
        }
        self.record(seat, HistoryVerb::Raise, Some(bet));
        log::debug!("seat {seat} raises by {amount}: paid {paid}, bet now {bet}");
        self.count_showdown_action(paid);
        self.next_player();
        Ok(())
    }

    /// Raises from free text. Returns `Ok(false)` without touching the table when the text is
    /// not a positive whole number.
    pub fn raise_text(&mut self, text: &str) -> Result<bool, ActionError> {
        match RaiseAmount::parse(text) {
            Some(amount) => self.raise(amount).map(|()| true),
            None => {
                log::debug!("ignoring raise input {text:?}");
                Ok(false)
            }
        }
    }

    /// Folds the acting seat. Chips already bet stay in the pot.
    pub fn fold(&mut self) -> Result<(), ActionError> {
        let seat = self.ensure_can_act()?;
        let p = &mut self.table.players[seat];
        p.is_folded = true;
        p.last_action = Some("Fold".into());
        self.record(seat, HistoryVerb::Fold, None);
        log::debug!("seat {seat} folds");
        self.next_player();
        Ok(())
    }

    /// Pays the whole pot to `winner` and deals the next hand.
    pub fn award_pot(&mut self, winner: usize) -> Result<(), ActionError> {
        let seats = self.table.players.len();
        if winner >= seats {
            return Err(ActionError::InvalidSeat { seat: winner, seats });
        }
        self.settle(winner, AwardReason::Manual);
        self.start_round();
        Ok(())
    }

    fn ensure_can_act(&self) -> Result<usize, ActionError> {
        let seat = self.table.current_player_index;
        match self.table.players.get(seat) {
            None => Err(ActionError::InvalidSeat { seat, seats: self.table.players.len() }),
            Some(p) if p.is_folded => Err(ActionError::PlayerFolded { seat }),
            Some(_) => Ok(seat),
        }
    }

    fn count_showdown_action(&mut self, paid: u64) {
        if self.table.stage != Stage::Showdown || paid == 0 {
            return;
        }
        self.table.showdown_bet_count += 1;
        if self.table.showdown_bet_count >= SHOWDOWN_PAID_ACTIONS {
            self.table.stage = Stage::ShowCards;
            log::info!("hand {}: showdown escalates to show cards", self.hand);
        }
    }

    /// Ends the turn: a lone survivor takes the pot, otherwise the next active seat acts and a
    /// matched table moves on a stage.
    fn next_player(&mut self) {
        if let Some(winner) = self.table.survivor() {
            self.settle(winner, AwardReason::LastStanding);
            self.start_round();
            return;
        }
        self.table.current_player_index =
            self.table.next_active_from(self.table.current_player_index);
        if self.table.is_round_complete() {
            self.advance_stage();
        }
    }

    fn advance_stage(&mut self) {
        let from = self.table.stage;
        let to = from.next();
        for p in &mut self.table.players {
            p.current_bet = 0;
        }
        self.table.current_highest_bet = 0;
        self.table.stage = to;
        if to == Stage::Showdown {
            self.table.showdown_bet_count = 0;
        }
        log::info!("hand {}: {} -> {}", self.hand, from.label(), to.label());
    }

    fn settle(&mut self, winner: usize, reason: AwardReason) {
        let amount = self.table.pot;
        self.table.players[winner].chips += amount;
        self.table.pot = 0;
        self.record(winner, HistoryVerb::Win, Some(amount));
        self.last_award = Some(Award { hand: self.hand, seat: winner, amount, reason });
        log::info!("hand {}: seat {winner} wins {amount} ({reason:?})", self.hand);
    }

    fn record(&mut self, seat: usize, verb: HistoryVerb, amount: Option<u64>) {
        self.history.push(HandHistoryEntry {
            hand: self.hand,
            seat,
            verb,
            amount,
            stage: self.table.stage,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(n: usize, stack: u64, sb: u64, bb: u64) -> RoundEngine {
        let config = TableConfig::with_seats(n, stack, 25, sb, bb).expect("valid config");
        let mut e = RoundEngine::new(config);
        e.start_round();
        e
    }

    /// Puts a fresh hand straight into `Showdown` with no bets out.
    fn at_showdown(n: usize) -> RoundEngine {
        let mut e = engine(n, 100, 1, 2);
        for p in &mut e.table.players {
            p.current_bet = 0;
        }
        e.table.current_highest_bet = 0;
        e.table.stage = Stage::Showdown;
        e.table.showdown_bet_count = 0;
        e
    }

    #[test]
    fn raise_then_call_escalates_to_show_cards() {
        let mut e = at_showdown(3);
        e.raise(RaiseAmount::new(10).unwrap()).unwrap();
        assert_eq!(e.showdown_bet_count(), 1);
        assert_eq!(e.stage(), Stage::Showdown);
        e.call_or_check().unwrap();
        assert_eq!(e.stage(), Stage::ShowCards);
    }

    #[test]
    fn check_at_showdown_is_not_counted() {
        let mut e = at_showdown(3);
        e.table.current_player_index = 2;
        e.table.players[0].current_bet = 5;
        e.table.players[2].current_bet = 5;
        e.table.current_highest_bet = 5;
        e.call_or_check().unwrap();
        assert_eq!(e.showdown_bet_count(), 0);
        assert_eq!(e.stage(), Stage::Showdown);
    }

    #[test]
    fn completed_showdown_round_reenters_and_resets_counter() {
        let mut e = at_showdown(2);
        e.table.showdown_bet_count = 1;
        // nothing owed, so this checks and leaves the table matched
        e.call_or_check().unwrap();
        assert_eq!(e.stage(), Stage::Showdown);
        assert_eq!(e.showdown_bet_count(), 0);
        assert_eq!(e.current_player_index(), 1);
        assert!(e.players().iter().all(|p| p.current_bet() == 0));
    }

    #[test]
    fn show_cards_is_terminal() {
        let mut e = at_showdown(2);
        e.table.stage = Stage::ShowCards;
        e.call_or_check().unwrap();
        assert_eq!(e.stage(), Stage::ShowCards);
    }

    #[test]
    fn acting_on_folded_seat_is_rejected() {
        let mut e = engine(3, 100, 1, 2);
        e.table.players[0].is_folded = true;
        let before = e.table.clone();
        assert_eq!(e.call_or_check(), Err(ActionError::PlayerFolded { seat: 0 }));
        assert_eq!(e.fold(), Err(ActionError::PlayerFolded { seat: 0 }));
        assert_eq!(
            e.raise(RaiseAmount::new(3).unwrap()),
            Err(ActionError::PlayerFolded { seat: 0 })
        );
        assert_eq!(e.table, before);
    }

    #[test]
    fn award_to_missing_seat_is_rejected() {
        let mut e = engine(3, 100, 1, 2);
        let before = e.table.clone();
        assert_eq!(e.award_pot(3), Err(ActionError::InvalidSeat { seat: 3, seats: 3 }));
        assert_eq!(e.table, before);
    }

    #[test]
    fn short_big_blind_sets_highest_bet_to_what_was_posted() {
        let mut e = engine(3, 100, 5, 10);
        e.table.players[1].chips = 7;
        e.start_round();
        assert_eq!(e.players()[1].current_bet(), 7);
        assert_eq!(e.players()[1].chips(), 0);
        assert_eq!(e.current_highest_bet(), 7);

        e.table.players[1].chips = 3;
        e.start_round();
        assert_eq!(e.current_highest_bet(), 5, "small blind outbids an all-in big blind");
    }
}
