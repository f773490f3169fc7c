//! End-to-end settlement scenarios.
//!
//! These tests drive the public API the way a front end would: build a
//! ledger, settle it, and render the report.

use poker_settle::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::Path;

fn m(v: Decimal) -> Money {
    Money::new(v)
}

fn game(rows: &[(&str, Decimal, Decimal)]) -> Vec<Player> {
    rows.iter()
        .enumerate()
        .map(|(i, (name, buy_in, cash_out))| Player::new(PlayerId(i as u64 + 1), *name, m(*buy_in), m(*cash_out)))
        .collect()
}

fn describe(players: &[Player], transfers: &[Transfer]) -> Vec<String> {
    transfers
        .iter()
        .map(|t| format!("{} -> {} {}", name_of(players, t.payer), name_of(players, t.payee), t.amount))
        .collect()
}

#[test]
fn heads_up_loser_pays_winner() {
    let players = game(&[("A", dec!(100), dec!(150)), ("B", dec!(100), dec!(50))]);
    let transfers = compute_settlements(&players, m(dec!(1)));
    assert_eq!(describe(&players, &transfers), vec!["B -> A 50.00"]);

    let report = generate_report(&players, m(dec!(1)));
    assert!(report.contains("B pays A: £50.00"));
    assert!(report.contains("Total buy-ins: £200.00"));
    assert!(report.contains("Total cash-outs: £200.00"));
}

#[test]
fn everyone_broke_even() {
    let players = game(&[("A", dec!(100), dec!(100)), ("B", dec!(100), dec!(100))]);
    assert!(compute_settlements(&players, m(dec!(1))).is_empty());
    assert!(matches!(
        settlement_status(&players, m(dec!(1))),
        SettlementStatus::NothingOwed { .. }
    ));
}

#[test]
fn dealer_error_spread_over_table() {
    let players = game(&[
        ("A", dec!(100), dec!(0)),
        ("B", dec!(100), dec!(0)),
        ("C", dec!(0), dec!(210)),
    ]);

    // 10 extra came out of the box; a threshold of 1 refuses it
    assert!(compute_settlements(&players, m(dec!(1))).is_empty());

    // a threshold of 10 absorbs it, 3.33 off each cash-out
    let transfers = compute_settlements(&players, m(dec!(10)));
    assert_eq!(transfers.len(), 2);
    assert_eq!(describe(&players, &transfers), vec!["A -> C 103.33", "B -> C 103.33"]);

    // C was owed 206.67 and receives 206.66: within a cent
    let received: Money = transfers.iter().map(|t| t.amount).sum();
    assert!(m(dec!(206.67)).sub(received).is_settled());
}

#[test]
fn lone_player_cannot_settle() {
    let players = game(&[("A", dec!(100), dec!(0))]);
    assert!(compute_settlements(&players, m(dec!(1))).is_empty());
    assert_eq!(
        settlement_status(&players, m(dec!(1))),
        SettlementStatus::Unreconcilable { imbalance: m(dec!(-100)) }
    );
}

#[test]
fn nine_handed_game_stays_under_bound() {
    let players = game(&[
        ("Ana", dec!(50), dec!(0)),
        ("Ben", dec!(50), dec!(138.45)),
        ("Cas", dec!(100), dec!(61.20)),
        ("Dee", dec!(50), dec!(50)),
        ("Eli", dec!(25), dec!(0)),
        ("Fay", dec!(75), dec!(120.35)),
        ("Gus", dec!(50), dec!(14.00)),
        ("Hal", dec!(50), dec!(91.00)),
        ("Ivy", dec!(50), dec!(25.00)),
    ]);
    let totals = Totals::of(&players);
    assert_eq!(totals.imbalance(), Money::ZERO);

    let transfers = compute_settlements(&players, Money::ZERO);
    assert!(transfers.len() <= players.len() - 1);

    // every net position is cleared exactly
    for p in &players {
        let paid: Money = transfers.iter().filter(|t| t.payer == p.id).map(|t| t.amount).sum();
        let received: Money = transfers.iter().filter(|t| t.payee == p.id).map(|t| t.amount).sum();
        assert_eq!(p.net().add(paid).sub(received).value(), Decimal::ZERO, "{}", p.name);
    }
}

#[test]
fn unknown_ids_resolve_to_empty_name() {
    let players = game(&[("A", dec!(10), dec!(20)), ("B", dec!(10), dec!(0))]);
    let transfers = compute_settlements(&players, Money::ZERO);
    let strangers = &players[..1];
    assert_eq!(name_of(strangers, transfers[0].payer), "");
    assert_eq!(name_of(strangers, transfers[0].payee), "A");
}

#[test]
fn ledger_workflow() {
    let mut ledger = Ledger::new(SettleConfig::default()).unwrap();
    let ann = ledger.add_player("Ann", m(dec!(20)), m(dec!(0))).unwrap();
    let bo = ledger.add_player("Bo", m(dec!(20)), m(dec!(40))).unwrap();

    assert_eq!(ledger.settle().len(), 1);
    assert!(!ledger.is_stale());

    ledger
        .update_player(ann, PlayerUpdate { cash_out: Some(m(dec!(10))), ..Default::default() })
        .unwrap();
    assert!(ledger.settlements().is_none());
    assert!(ledger.status().is_unreconcilable());

    ledger
        .update_player(bo, PlayerUpdate { cash_out: Some(m(dec!(30))), ..Default::default() })
        .unwrap();
    let transfers = ledger.settle().to_vec();
    assert_eq!(transfers[0].payer, ann);
    assert_eq!(transfers[0].amount, m(dec!(10)));
    assert!(ledger.report().contains("Ann pays Bo: £10.00"));
}

#[test]
fn demo_snapshot_settles() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/friday_game.json");
    let mut ledger = LedgerSnapshot::load(&path).unwrap().into_ledger().unwrap();

    assert!(matches!(ledger.status(), SettlementStatus::Settleable { .. }));
    let transfers = ledger.settle().to_vec();
    assert_eq!(
        describe(ledger.players(), &transfers),
        vec![
            "Bob -> Alice 60.20",
            "Dave -> Alice 12.00",
            "Dave -> Carol 10.25",
            "Erin -> Carol 0.70",
        ]
    );

    let report = ledger.report();
    assert!(report.contains("Small imbalance of £1.00 (within threshold of £2.00)"));
}

#[test]
fn oversized_snapshot_rejected_before_report() {
    let json = r#"{ "players": [
        { "name": "A", "buy_in": "79228162514264337593543950335", "cash_out": "79228162514264337593543950335" },
        { "name": "B", "buy_in": 1, "cash_out": 1 }
    ] }"#;
    let err = LedgerSnapshot::from_json(json).unwrap().into_ledger().unwrap_err();
    assert!(matches!(err, SnapshotError::Ledger(LedgerError::AmountTooLarge { .. })));

    // the engine and report still survive the same amounts when called directly
    let players = game(&[("A", Decimal::MAX, Decimal::MAX), ("B", dec!(1), dec!(1))]);
    assert!(generate_report(&players, m(dec!(1))).contains("Settlements"));
}

#[test]
fn missing_snapshot_file() {
    let err = LedgerSnapshot::load(Path::new("/nonexistent/game.json")).unwrap_err();
    assert!(matches!(err, SnapshotError::Io { .. }));
}
