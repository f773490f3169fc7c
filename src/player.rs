//! Player records as supplied by whoever owns the game state.
//!
//! The settlement engine only ever borrows a slice of these; adding, removing
//! and editing players is the job of [`crate::ledger::Ledger`].

use crate::types::{Money, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub buy_in: Money,
    pub cash_out: Money,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, buy_in: Money, cash_out: Money) -> Self {
        Self {
            id,
            name: name.into(),
            buy_in,
            cash_out,
        }
    }

    /// Unadjusted net position: what the player walked away with minus what they put in.
    pub fn net(&self) -> Money {
        self.cash_out.sub(self.buy_in)
    }
}

/// Name for an id, or an empty string when the id is not in the list.
pub fn name_of(players: &[Player], id: PlayerId) -> &str {
    players
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.as_str())
        .unwrap_or("")
}
