use crate::player::{Player, PlayerId, PlayerIds};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("need at least 2 players, got {got}")]
    TooFewPlayers { got: usize },
    #[error("at most 10 players fit at a table, got {got}")]
    TooManyPlayers { got: usize },
    #[error("player id {0} appears more than once")]
    DuplicatePlayerId(PlayerId),
    #[error("small blind {small} exceeds big blind {big}")]
    BlindsOutOfOrder { small: u64, big: u64 },
    #[error("chip value must be at least one cent")]
    ZeroChipValue,
}

/// Setup record handed to [`crate::round::RoundEngine::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TableConfig {
    pub(crate) players: Vec<Player>,
    pub(crate) chip_value_cents: u64,
    pub(crate) small_blind: u64,
    pub(crate) big_blind: u64,
}

impl TableConfig {
    pub fn new(
        players: Vec<Player>,
        chip_value_cents: u64,
        small_blind: u64,
        big_blind: u64,
    ) -> Result<Self, ConfigError> {
        if players.len() < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers { got: players.len() });
        }
        if players.len() > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers { got: players.len() });
        }
        let mut ids: Vec<PlayerId> = players.iter().map(Player::id).collect();
        ids.sort_unstable();
        if let Some(w) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(ConfigError::DuplicatePlayerId(w[0]));
        }
        if small_blind > big_blind {
            return Err(ConfigError::BlindsOutOfOrder { small: small_blind, big: big_blind });
        }
        if chip_value_cents == 0 {
            return Err(ConfigError::ZeroChipValue);
        }
        Ok(Self { players, chip_value_cents, small_blind, big_blind })
    }

    /// Seats `num_players` players named `P1..Pn`, each with `starting_stack` chips.
    pub fn with_seats(
        num_players: usize,
        starting_stack: u64,
        chip_value_cents: u64,
        small_blind: u64,
        big_blind: u64,
    ) -> Result<Self, ConfigError> {
        let mut ids = PlayerIds::new();
        let players = (1..=num_players)
            .map(|i| Player::new(ids.allocate(), format!("P{i}"), starting_stack))
            .collect();
        Self::new(players, chip_value_cents, small_blind, big_blind)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn chip_value_cents(&self) -> u64 {
        self.chip_value_cents
    }

    pub fn small_blind(&self) -> u64 {
        self.small_blind
    }

    pub fn big_blind(&self) -> u64 {
        self.big_blind
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        let mut ids = PlayerIds::new();
        let players = (1..=4).map(|i| Player::new(ids.allocate(), format!("P{i}"), 100)).collect();
        Self { players, chip_value_cents: 25, small_blind: 1, big_blind: 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_player_counts_outside_range() {
        let err = TableConfig::with_seats(1, 100, 25, 1, 2).unwrap_err();
        assert_eq!(err, ConfigError::TooFewPlayers { got: 1 });
        let err = TableConfig::with_seats(11, 100, 25, 1, 2).unwrap_err();
        assert_eq!(err, ConfigError::TooManyPlayers { got: 11 });
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut ids = PlayerIds::new();
        let id = ids.allocate();
        let players = vec![Player::new(id, "A", 10), Player::new(id, "B", 10)];
        let err = TableConfig::new(players, 25, 1, 2).unwrap_err();
        assert_eq!(err, ConfigError::DuplicatePlayerId(id));
    }

    #[test]
    fn rejects_inverted_blinds_and_zero_chip_value() {
        assert!(matches!(
            TableConfig::with_seats(3, 100, 25, 5, 2),
            Err(ConfigError::BlindsOutOfOrder { small: 5, big: 2 })
        ));
        assert_eq!(TableConfig::with_seats(3, 100, 0, 1, 2), Err(ConfigError::ZeroChipValue));
    }

    #[test]
    fn default_is_valid() {
        let d = TableConfig::default();
        let rebuilt =
            TableConfig::new(d.players.clone(), d.chip_value_cents, d.small_blind, d.big_blind);
        assert_eq!(rebuilt, Ok(d));
    }
}
