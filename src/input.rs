use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// A raise increment over the current highest bet, in chips. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RaiseAmount(NonZeroU64);

impl RaiseAmount {
    pub fn new(chips: u64) -> Option<Self> {
        NonZeroU64::new(chips).map(Self)
    }

    /// Parses free text from the raise field. Anything but a positive whole number yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<u64>().ok().and_then(Self::new)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for RaiseAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("raise must be a positive whole number of chips")]
pub struct InvalidRaise;

impl FromStr for RaiseAmount {
    type Err = InvalidRaise;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(InvalidRaise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(RaiseAmount::parse("10").map(RaiseAmount::get), Some(10));
        assert_eq!(RaiseAmount::parse(" 7 ").map(RaiseAmount::get), Some(7));
        assert_eq!("25".parse::<RaiseAmount>().map(RaiseAmount::get), Ok(25));
    }

    #[test]
    fn rejects_zero_negative_and_text() {
        for bad in ["0", "-5", "abc", "", "1.5", "+"] {
            assert_eq!(RaiseAmount::parse(bad), None, "{bad:?} should be rejected");
        }
        assert_eq!("-5".parse::<RaiseAmount>(), Err(InvalidRaise));
    }
}
