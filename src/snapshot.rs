// 7.0 snapshot.rs: a game written down as JSON. what the CLI reads.
// ids are assigned on load, in file order, so the file only carries names and amounts.

use crate::config::SettleConfig;
use crate::ledger::{Ledger, LedgerError};
use crate::types::Money;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    #[serde(flatten)]
    pub config: SettleConfig,
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    #[serde(default)]
    pub buy_in: Money,
    #[serde(default)]
    pub cash_out: Money,
}

impl LedgerSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn of(ledger: &Ledger) -> Self {
        Self {
            config: ledger.config().clone(),
            players: ledger
                .players()
                .iter()
                .map(|p| PlayerEntry {
                    name: p.name.clone(),
                    buy_in: p.buy_in,
                    cash_out: p.cash_out,
                })
                .collect(),
        }
    }

    /// Build a validated ledger. Fails on the first bad entry.
    pub fn into_ledger(self) -> Result<Ledger, SnapshotError> {
        let mut ledger = Ledger::new(self.config)?;
        for entry in self.players {
            ledger.add_player(entry.name, entry.buy_in, entry.cash_out)?;
        }
        Ok(ledger)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid ledger: {0}")]
    Ledger(#[from] LedgerError),
}
