use crate::table::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryVerb {
    SmallBlind,
    BigBlind,
    Check,
    Call,
    Raise,
    Fold,
    Win,
}

impl HistoryVerb {
    pub fn label(self) -> &'static str {
        match self {
            HistoryVerb::SmallBlind => "SB",
            HistoryVerb::BigBlind => "BB",
            HistoryVerb::Check => "Check",
            HistoryVerb::Call => "Call",
            HistoryVerb::Raise => "Raise to",
            HistoryVerb::Fold => "Fold",
            HistoryVerb::Win => "Win",
        }
    }
}

/// One line of the running log. `amount` is chips moved, except for `Raise` where it is
/// the player's resulting bet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HandHistoryEntry {
    pub hand: u32,
    pub seat: usize,
    pub verb: HistoryVerb,
    pub amount: Option<u64>,
    pub stage: Stage,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct HandHistory {
    entries: Vec<HandHistoryEntry>,
}

impl HandHistory {
    pub(crate) fn push(&mut self, entry: HandHistoryEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn recent(&self, n: usize) -> Vec<HandHistoryEntry> {
        if n == 0 {
            return Vec::new();
        }
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..].to_vec()
    }

    pub(crate) fn recent_offset(&self, n: usize, offset: usize) -> Vec<HandHistoryEntry> {
        let len = self.entries.len();
        if n == 0 || len == 0 {
            return Vec::new();
        }
        let offset = offset.min(len.saturating_sub(n));
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.entries[start..end].to_vec()
    }
}
