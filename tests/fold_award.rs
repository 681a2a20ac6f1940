use chip_table::config::TableConfig;
use chip_table::round::{ActionError, AwardReason, RoundEngine};
use chip_table::table::Stage;

fn started(n: usize, stack: u64, sb: u64, bb: u64) -> RoundEngine {
    let mut e = RoundEngine::new(TableConfig::with_seats(n, stack, 25, sb, bb).unwrap());
    e.start_round();
    e
}

#[test]
fn last_player_standing_takes_pot_and_new_hand_starts() {
    let mut e = started(3, 100, 1, 2);
    e.fold().unwrap();
    assert_eq!(e.stage(), Stage::PreFlop);
    assert_eq!(e.hand_number(), 1);
    e.fold().unwrap();

    assert_eq!(e.hand_number(), 2);
    assert_eq!(e.stage(), Stage::PreFlop);
    assert_eq!(e.players()[2].chips(), 103);
    assert_eq!(e.players()[0].chips(), 98);
    assert_eq!(e.players()[1].chips(), 96);
    assert_eq!(e.pot(), 3);
    assert!(e.players().iter().all(|p| !p.is_folded()));

    let award = e.last_award().expect("pot was awarded");
    assert_eq!(award.hand, 1);
    assert_eq!(award.seat, 2);
    assert_eq!(award.amount, 3);
    assert_eq!(award.reason, AwardReason::LastStanding);
}

#[test]
fn folded_bets_stay_in_the_pot() {
    let mut e = started(3, 100, 1, 2);
    e.call_or_check().unwrap();
    e.raise_text("4").unwrap();
    assert_eq!(e.pot(), 8);
    e.fold().unwrap();
    assert_eq!(e.pot(), 8);
    assert_eq!(e.players()[2].chips(), 100);
    e.fold().unwrap();

    let award = e.last_award().unwrap();
    assert_eq!((award.seat, award.amount), (1, 8));
    assert_eq!(e.players()[0].chips(), 97);
    assert_eq!(e.players()[1].chips(), 100);
    assert_eq!(e.players()[2].chips(), 100);
    assert_eq!(e.total_chips(), 300);
}

#[test]
fn manual_award_settles_mid_hand() {
    let mut e = started(3, 100, 1, 2);
    e.call_or_check().unwrap();
    e.award_pot(0).unwrap();

    let award = e.last_award().unwrap();
    assert_eq!(award.reason, AwardReason::Manual);
    assert_eq!(award.amount, 4);
    assert_eq!(e.players()[0].chips(), 98 + 4 - 1);
    assert_eq!(e.stage(), Stage::PreFlop);
    assert_eq!(e.total_chips(), 300);
}

#[test]
fn award_to_unknown_seat_is_an_error() {
    let mut e = started(3, 100, 1, 2);
    let before = e.table().clone();

    assert_eq!(e.award_pot(5), Err(ActionError::InvalidSeat { seat: 5, seats: 3 }));
    assert_eq!(e.table(), &before);
    assert!(e.last_award().is_none());
}
