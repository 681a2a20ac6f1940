use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Stage {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    ShowCards,
}

impl Stage {
    /// The stage a completed betting round moves to. `Showdown` is re-entered until two paid
    /// actions escalate it; `ShowCards` is terminal.
    pub fn next(self) -> Stage {
        match self {
            Stage::PreFlop => Stage::Flop,
            Stage::Flop => Stage::Turn,
            Stage::Turn => Stage::River,
            Stage::River | Stage::Showdown => Stage::Showdown,
            Stage::ShowCards => Stage::ShowCards,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::PreFlop => "Pre-Flop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
            Stage::Showdown => "Showdown",
            Stage::ShowCards => "Show Cards",
        }
    }
}

/// Round state for one table. Mutated only through [`crate::round::RoundEngine`];
/// the display layer reads it as a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Table {
    pub(crate) players: Vec<Player>,
    pub(crate) pot: u64,
    pub(crate) current_highest_bet: u64,
    pub(crate) stage: Stage,
    pub(crate) current_player_index: usize,
    pub(crate) showdown_bet_count: u32,
}

impl Table {
    pub(crate) fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            pot: 0,
            current_highest_bet: 0,
            stage: Stage::PreFlop,
            current_player_index: 0,
            showdown_bet_count: 0,
        }
    }

    /// Returns a reference to the players in turn order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the current pot size
    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn current_highest_bet(&self) -> u64 {
        self.current_highest_bet
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the index of the seat whose turn it is
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Paid actions taken since `Showdown` was entered.
    pub fn showdown_bet_count(&self) -> u32 {
        self.showdown_bet_count
    }

    /// Chips the given seat still owes to match the highest bet.
    pub fn to_call(&self, seat: usize) -> u64 {
        self.players
            .get(seat)
            .map(|p| self.current_highest_bet.saturating_sub(p.current_bet))
            .unwrap_or(0)
    }

    /// Pot plus every stack. Constant between settlements.
    pub fn total_chips(&self) -> u64 {
        self.pot + self.players.iter().map(|p| p.chips).sum::<u64>()
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded).count()
    }

    /// Exactly one player has not folded.
    pub fn is_single_survivor(&self) -> bool {
        self.active_count() == 1
    }

    /// Seat of the lone non-folded player, if the hand is down to one.
    pub fn survivor(&self) -> Option<usize> {
        if !self.is_single_survivor() {
            return None;
        }
        self.players.iter().position(|p| !p.is_folded)
    }

    /// Every non-folded player has matched the largest bet on the table.
    ///
    /// A player with an empty stack counts as matched: they have nothing left to call with.
    pub fn is_round_complete(&self) -> bool {
        let top = self
            .players
            .iter()
            .filter(|p| !p.is_folded)
            .map(|p| p.current_bet)
            .max()
            .unwrap_or(0);
        self.players
            .iter()
            .filter(|p| !p.is_folded)
            .all(|p| p.current_bet == top || (p.chips == 0 && p.current_bet < top))
    }

    /// Next non-folded seat after `from`, circularly. Returns `from` if nobody else is left.
    pub(crate) fn next_active_from(&self, from: usize) -> usize {
        let n = self.players.len();
        if n == 0 {
            return 0;
        }
        let mut i = (from + 1) % n;
        for _ in 0..n {
            if !self.players[i].is_folded {
                return i;
            }
            i = (i + 1) % n;
        }
        from % n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerIds;

    fn table(bets: &[(u64, u64, bool)]) -> Table {
        let mut ids = PlayerIds::new();
        let players = bets
            .iter()
            .enumerate()
            .map(|(i, &(chips, bet, folded))| {
                let mut p = Player::new(ids.allocate(), format!("P{}", i + 1), chips);
                p.current_bet = bet;
                p.is_folded = folded;
                p
            })
            .collect();
        Table::new(players)
    }

    #[test]
    fn betting_stages_run_forward_to_showdown() {
        let mut s = Stage::PreFlop;
        let mut seen = vec![s];
        for _ in 0..5 {
            s = s.next();
            seen.push(s);
        }
        assert_eq!(
            seen,
            vec![
                Stage::PreFlop,
                Stage::Flop,
                Stage::Turn,
                Stage::River,
                Stage::Showdown,
                Stage::Showdown
            ]
        );
        assert_eq!(Stage::ShowCards.next(), Stage::ShowCards);
    }

    #[test]
    fn round_complete_ignores_folded_seats() {
        let t = table(&[(80, 20, false), (50, 5, true), (80, 20, false)]);
        assert!(t.is_round_complete());
        assert!(!t.is_single_survivor());
    }

    #[test]
    fn round_incomplete_while_someone_owes() {
        let t = table(&[(80, 20, false), (90, 10, false)]);
        assert!(!t.is_round_complete());
    }

    #[test]
    fn all_in_short_stack_counts_as_matched() {
        let t = table(&[(0, 5, false), (90, 10, false)]);
        assert!(t.is_round_complete());
    }

    #[test]
    fn single_survivor_detected() {
        let t = table(&[(80, 20, true), (50, 5, true), (80, 20, false)]);
        assert!(t.is_single_survivor());
        assert_eq!(t.survivor(), Some(2));
    }

    #[test]
    fn next_active_skips_folded_and_wraps() {
        let t = table(&[(10, 0, false), (10, 0, true), (10, 0, true), (10, 0, false)]);
        assert_eq!(t.next_active_from(0), 3);
        assert_eq!(t.next_active_from(3), 0);
    }
}
