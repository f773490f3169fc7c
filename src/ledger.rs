//! Game ledger: the state a front end owns between settlement runs.
//!
//! Holds the player list and the settle config, validates input before it
//! reaches the engine, and caches the last computed transfers. Any mutation
//! marks the cache stale, so a caller can never show transfers for a player
//! list that has since changed.

use crate::config::{ConfigError, SettleConfig};
use crate::player::Player;
use crate::report::generate_report_with;
use crate::settlement::{compute_settlements, settlement_status, SettlementStatus, Transfer};
use crate::totals::Totals;
use crate::types::{Money, PlayerId, MAX_AMOUNT};

#[derive(Debug, Clone)]
pub struct Ledger {
    config: SettleConfig,
    players: Vec<Player>,
    next_player_id: u64,
    settlements: Option<Vec<Transfer>>,
}

// Partial edit of a player. `None` leaves the field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub buy_in: Option<Money>,
    pub cash_out: Option<Money>,
}

impl Ledger {
    pub fn new(config: SettleConfig) -> Result<Self, LedgerError> {
        config.validate()?;
        Ok(Self {
            config,
            players: Vec::new(),
            next_player_id: 1,
            settlements: None,
        })
    }

    pub fn config(&self) -> &SettleConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn imbalance_threshold(&self) -> Money {
        self.config.imbalance_threshold
    }

    pub fn set_imbalance_threshold(&mut self, threshold: Money) -> Result<(), LedgerError> {
        let config = SettleConfig {
            imbalance_threshold: threshold,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        self.invalidate();
        Ok(())
    }

    pub fn set_currency_symbol(&mut self, symbol: impl Into<String>) -> Result<(), LedgerError> {
        let config = SettleConfig {
            currency_symbol: symbol.into(),
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        buy_in: Money,
        cash_out: Money,
    ) -> Result<PlayerId, LedgerError> {
        check_amount("buy-in", buy_in)?;
        check_amount("cash-out", cash_out)?;

        let id = PlayerId(self.next_player_id);
        self.next_player_id += 1;
        let player = Player::new(id, name, buy_in, cash_out);
        log::info!("added player {} ({})", player.name, id);
        self.players.push(player);
        self.invalidate();
        Ok(id)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, LedgerError> {
        let index = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(LedgerError::PlayerNotFound(id))?;
        let player = self.players.remove(index);
        log::info!("removed player {} ({})", player.name, id);
        self.invalidate();
        Ok(player)
    }

    pub fn update_player(&mut self, id: PlayerId, update: PlayerUpdate) -> Result<(), LedgerError> {
        if let Some(buy_in) = update.buy_in {
            check_amount("buy-in", buy_in)?;
        }
        if let Some(cash_out) = update.cash_out {
            check_amount("cash-out", cash_out)?;
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(LedgerError::PlayerNotFound(id))?;

        if let Some(name) = update.name {
            player.name = name;
        }
        if let Some(buy_in) = update.buy_in {
            player.buy_in = buy_in;
        }
        if let Some(cash_out) = update.cash_out {
            player.cash_out = cash_out;
        }
        self.invalidate();
        Ok(())
    }

    pub fn totals(&self) -> Totals {
        Totals::of(&self.players)
    }

    pub fn status(&self) -> SettlementStatus {
        settlement_status(&self.players, self.config.imbalance_threshold)
    }

    /// Run the engine and cache the result until the next mutation.
    pub fn settle(&mut self) -> &[Transfer] {
        let transfers = compute_settlements(&self.players, self.config.imbalance_threshold);
        self.settlements.insert(transfers)
    }

    /// Transfers from the last [`Ledger::settle`], or `None` if anything changed since.
    pub fn settlements(&self) -> Option<&[Transfer]> {
        self.settlements.as_deref()
    }

    pub fn is_stale(&self) -> bool {
        self.settlements.is_none()
    }

    pub fn report(&self) -> String {
        generate_report_with(&self.players, &self.config)
    }

    fn invalidate(&mut self) {
        if self.settlements.take().is_some() {
            log::debug!("player list changed, settlements are stale");
        }
    }
}

fn check_amount(field: &'static str, amount: Money) -> Result<(), LedgerError> {
    if amount.is_negative() {
        return Err(LedgerError::NegativeAmount { field, amount });
    }
    if amount > MAX_AMOUNT {
        return Err(LedgerError::AmountTooLarge { field, amount, max: MAX_AMOUNT });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("{field} must be non-negative, got {amount}")]
    NegativeAmount { field: &'static str, amount: Money },

    #[error("{field} of {amount} exceeds the maximum of {max}")]
    AmountTooLarge { field: &'static str, amount: Money, max: Money },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
