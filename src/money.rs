//! Chip counts as display money. Pure formatting; the engine only ever counts chips.

use std::fmt;

/// An amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money {
    cents: u128,
}

impl Money {
    pub fn from_chips(chips: u64, chip_value_cents: u64) -> Self {
        Self { cents: u128::from(chips) * u128::from(chip_value_cents) }
    }

    pub fn cents(self) -> u128 {
        self.cents
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// `chips × chip_value_cents` rendered as dollars with two decimals, e.g. `$12.50`.
pub fn format_chips(chips: u64, chip_value_cents: u64) -> String {
    Money::from_chips(chips, chip_value_cents).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_major_and_minor_units() {
        assert_eq!(format_chips(0, 25), "$0.00");
        assert_eq!(format_chips(3, 25), "$0.75");
        assert_eq!(format_chips(99, 25), "$24.75");
        assert_eq!(format_chips(1, 5), "$0.05");
        assert_eq!(format_chips(7, 100), "$7.00");
    }

    #[test]
    fn does_not_overflow_on_large_stacks() {
        let m = Money::from_chips(u64::MAX, u64::MAX);
        assert!(m.cents() > u128::from(u64::MAX));
    }
}
