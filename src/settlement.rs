// 3.0 settlement.rs: turns buy-ins and cash-outs into "who pays whom" transfers.
// pure function of (players, threshold). no state survives a call.
//
// 3.1 imbalance check: refuse when cash-outs and buy-ins differ by more than the threshold
// 3.2 spread the tolerated imbalance equally over every cash-out
// 3.3 greedy matching: biggest debtor pays biggest creditor until one side is exhausted

use crate::player::Player;
use crate::totals::Totals;
use crate::types::{Money, PlayerId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// A single payment instruction. payer owes payee `amount`, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub payer: PlayerId,
    pub payee: PlayerId,
    pub amount: Money,
}

// What a caller should make of an empty transfer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SettlementStatus {
    // every adjusted balance is already within a cent of zero
    NothingOwed { imbalance: Money },
    // transfers are needed and the engine will produce them
    Settleable { imbalance: Money },
    // buy-ins and cash-outs disagree by more than the threshold. engine refuses
    Unreconcilable { imbalance: Money },
}

impl SettlementStatus {
    pub fn imbalance(&self) -> Money {
        match self {
            SettlementStatus::NothingOwed { imbalance }
            | SettlementStatus::Settleable { imbalance }
            | SettlementStatus::Unreconcilable { imbalance } => *imbalance,
        }
    }

    pub fn is_unreconcilable(&self) -> bool {
        matches!(self, SettlementStatus::Unreconcilable { .. })
    }
}

// net position of one player during a single computation. `index` is the
// player's position in the input slice and breaks ties between equal magnitudes.
#[derive(Debug, Clone)]
struct Balance<'a> {
    index: usize,
    id: PlayerId,
    name: &'a str,
    amount: Money,
}

/// Compute the transfers that settle `players`.
///
/// Returns an empty list when there is nothing to settle and also when the
/// ledger's imbalance exceeds `imbalance_threshold`. Use [`settlement_status`]
/// to tell the two apart.
pub fn compute_settlements(players: &[Player], imbalance_threshold: Money) -> Vec<Transfer> {
    let totals = Totals::of(players);
    let imbalance = totals.imbalance();

    if imbalance.abs() > imbalance_threshold {
        log::warn!(
            "refusing to settle: imbalance {} exceeds threshold {} (buy-ins {}, cash-outs {})",
            imbalance,
            imbalance_threshold,
            totals.buy_ins,
            totals.cash_outs
        );
        return Vec::new();
    }

    let transfers = match_balances(opening_balances(players, imbalance));
    log::debug!(
        "settled {} players with {} transfers (imbalance {})",
        players.len(),
        transfers.len(),
        imbalance
    );
    transfers
}

/// Classify a ledger the same way [`compute_settlements`] would treat it.
pub fn settlement_status(players: &[Player], imbalance_threshold: Money) -> SettlementStatus {
    let imbalance = Totals::of(players).imbalance();
    if imbalance.abs() > imbalance_threshold {
        SettlementStatus::Unreconcilable { imbalance }
    } else if opening_balances(players, imbalance).is_empty() {
        SettlementStatus::NothingOwed { imbalance }
    } else {
        SettlementStatus::Settleable { imbalance }
    }
}

// 3.2: absorb the imbalance by trimming every cash-out by an equal share, then
// drop anyone already within a cent.
fn opening_balances(players: &[Player], imbalance: Money) -> Vec<Balance<'_>> {
    let share = if imbalance == Money::ZERO || players.is_empty() {
        Money::ZERO
    } else {
        imbalance.div(Decimal::from(players.len()))
    };

    players
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let cash_out = if share == Money::ZERO {
                player.cash_out
            } else {
                player.cash_out.sub(share).round_cents()
            };
            Balance {
                index,
                id: player.id,
                name: player.name.as_str(),
                amount: cash_out.sub(player.buy_in).round_cents(),
            }
        })
        .filter(|b| !b.amount.is_settled())
        .collect()
}

// largest magnitude first, ties in player order
fn by_magnitude(a: &Balance<'_>, b: &Balance<'_>) -> Ordering {
    b.amount
        .abs()
        .cmp(&a.amount.abs())
        .then_with(|| a.index.cmp(&b.index))
}

// 3.3: each round zeroes at least one balance, so at most n - 1 transfers come out.
fn match_balances(mut balances: Vec<Balance<'_>>) -> Vec<Transfer> {
    let mut transfers = Vec::new();

    while balances.len() >= 2 {
        balances.sort_by(by_magnitude);

        // with the top two of opposite sign these are exactly indices 0 and 1.
        // a one-signed remainder is rounding dust nobody can pay off.
        let Some(debtor) = balances.iter().position(|b| b.amount.is_negative()) else {
            break;
        };
        let Some(creditor) = balances.iter().position(|b| b.amount.is_positive()) else {
            break;
        };

        let amount = balances[debtor]
            .amount
            .abs()
            .min(balances[creditor].amount)
            .round_cents();

        if amount > Money::ZERO {
            log::debug!(
                "{} ({}) pays {} ({}): {}",
                balances[debtor].name,
                balances[debtor].id,
                balances[creditor].name,
                balances[creditor].id,
                amount
            );
            transfers.push(Transfer {
                payer: balances[debtor].id,
                payee: balances[creditor].id,
                amount,
            });
        }

        balances[debtor].amount = balances[debtor].amount.add(amount).round_cents();
        balances[creditor].amount = balances[creditor].amount.sub(amount).round_cents();
        balances.retain(|b| !b.amount.is_settled());
    }

    transfers
}
