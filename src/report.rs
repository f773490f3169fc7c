//! Plain-text settlement report.
//!
//! The report always recomputes transfers through the engine, so the text can
//! never drift from what [`compute_settlements`] would return for the same
//! players and threshold.

use crate::config::SettleConfig;
use crate::player::{name_of, Player};
use crate::settlement::{compute_settlements, settlement_status, SettlementStatus};
use crate::totals::Totals;
use crate::types::Money;

const TITLE: &str = "Poker Settlement Report";

/// Report using the default currency symbol.
pub fn generate_report(players: &[Player], imbalance_threshold: Money) -> String {
    generate_report_with(players, &SettleConfig::with_threshold(imbalance_threshold))
}

pub fn generate_report_with(players: &[Player], config: &SettleConfig) -> String {
    let symbol = config.currency_symbol.as_str();
    let threshold = config.imbalance_threshold;
    let fmt = |m: Money| m.format_with(symbol);

    let mut lines = vec![TITLE.to_string(), "=".repeat(TITLE.len()), String::new()];

    lines.push("Players".to_string());
    lines.push("  Name | Buy-in | Cash-out | Net".to_string());
    for p in players {
        lines.push(format!(
            "  {} | {} | {} | {}",
            p.name,
            fmt(p.buy_in),
            fmt(p.cash_out),
            fmt(p.net())
        ));
    }
    lines.push(String::new());

    let totals = Totals::of(players);
    lines.push(format!("Total buy-ins: {}", fmt(totals.buy_ins)));
    lines.push(format!("Total cash-outs: {}", fmt(totals.cash_outs)));
    lines.push(String::new());

    let difference = totals.imbalance();
    if !difference.is_settled() {
        lines.push("Imbalance".to_string());
        if totals.within(threshold) {
            lines.push(format!(
                "  Small imbalance of {} (within threshold of {}), split equally across cash-outs.",
                fmt(difference.abs()),
                fmt(threshold)
            ));
        } else {
            let direction = if difference.is_positive() {
                "Cash-outs exceed buy-ins"
            } else {
                "Buy-ins exceed cash-outs"
            };
            lines.push(format!("  {direction} by {}.", fmt(difference.abs())));
            lines.push(format!(
                "  This is more than the threshold of {}; settlements cannot be computed.",
                fmt(threshold)
            ));
        }
        lines.push(String::new());
    }

    lines.push("Settlements".to_string());
    let transfers = compute_settlements(players, threshold);
    if transfers.is_empty() {
        let note = match settlement_status(players, threshold) {
            SettlementStatus::Unreconcilable { .. } => {
                "  Unavailable until buy-ins and cash-outs reconcile."
            }
            SettlementStatus::NothingOwed { .. } | SettlementStatus::Settleable { .. } => {
                "  No settlements needed."
            }
        };
        lines.push(note.to_string());
    }
    for t in &transfers {
        lines.push(format!(
            "  {} pays {}: {}",
            name_of(players, t.payer),
            name_of(players, t.payee),
            fmt(t.amount)
        ));
    }

    lines.join("\n") + "\n"
}
