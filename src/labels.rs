use crate::input::RaiseAmount;
use crate::money::format_chips;

/// "Check" when nothing is owed, otherwise the call cost in money.
pub fn call_label(needed: u64, chip_value_cents: u64) -> String {
    if needed == 0 {
        "Check".to_string()
    } else {
        format!("Call {}", format_chips(needed, chip_value_cents))
    }
}

/// Echoes the parsed raise amount, or a bare "Raise" while the field holds nothing valid.
pub fn raise_label(amount: Option<RaiseAmount>, chip_value_cents: u64) -> String {
    match amount {
        Some(a) => format!("Raise {}", format_chips(a.get(), chip_value_cents)),
        None => "Raise".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_label_switches_to_check() {
        assert_eq!(call_label(0, 25), "Check");
        assert_eq!(call_label(4, 25), "Call $1.00");
    }

    #[test]
    fn raise_label_echoes_amount() {
        assert_eq!(raise_label(RaiseAmount::parse("10"), 50), "Raise $5.00");
        assert_eq!(raise_label(RaiseAmount::parse("abc"), 50), "Raise");
    }
}
