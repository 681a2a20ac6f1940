use std::fmt;

/// Stable seat-independent identifier. Handed out by [`PlayerIds`] and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u32);

impl PlayerId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id allocator used while building a roster.
#[derive(Debug, Clone, Default)]
pub struct PlayerIds {
    next: u32,
}

impl PlayerIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> PlayerId {
        let id = PlayerId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) chips: u64,
    pub(crate) current_bet: u64,
    pub(crate) is_folded: bool,
    pub(crate) is_small_blind: bool,
    pub(crate) is_big_blind: bool,
    pub(crate) last_action: Option<String>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, chips: u64) -> Self {
        Self {
            id,
            name: name.into(),
            chips,
            current_bet: 0,
            is_folded: false,
            is_small_blind: false,
            is_big_blind: false,
            last_action: None,
        }
    }

    /// Renames the player. Only reachable before the player is seated at a table.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's remaining stack in chip units
    pub fn chips(&self) -> u64 {
        self.chips
    }

    /// Returns the chips committed in the current betting round
    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    pub fn is_folded(&self) -> bool {
        self.is_folded
    }

    /// True once the player has nothing left behind.
    pub fn is_all_in(&self) -> bool {
        !self.is_folded && self.chips == 0
    }

    pub fn is_small_blind(&self) -> bool {
        self.is_small_blind
    }

    pub fn is_big_blind(&self) -> bool {
        self.is_big_blind
    }

    /// Returns the player's last action as a string
    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    pub(crate) fn reset_for_hand(&mut self) {
        self.current_bet = 0;
        self.is_folded = false;
        self.is_small_blind = false;
        self.is_big_blind = false;
        self.last_action = None;
    }

    /// Moves up to `amount` chips from the stack into the current bet and returns what moved.
    pub(crate) fn commit(&mut self, amount: u64) -> u64 {
        let paid = self.chips.min(amount);
        self.chips -= paid;
        self.current_bet += paid;
        paid
    }
}
