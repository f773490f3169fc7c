// 2.0 totals.rs: ledger-wide sums. shared by the engine, the report and the status check
// so all three agree on what the imbalance is.

use crate::player::Player;
use crate::types::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub buy_ins: Money,
    pub cash_outs: Money,
}

impl Totals {
    pub fn of(players: &[Player]) -> Self {
        Self {
            buy_ins: players.iter().map(|p| p.buy_in).sum(),
            cash_outs: players.iter().map(|p| p.cash_out).sum(),
        }
    }

    // positive: more money left the table than came in
    pub fn imbalance(&self) -> Money {
        self.cash_outs.sub(self.buy_ins).round_cents()
    }

    pub fn is_balanced(&self) -> bool {
        self.imbalance().is_settled()
    }

    pub fn within(&self, threshold: Money) -> bool {
        self.imbalance().abs() <= threshold
    }
}
