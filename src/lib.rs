// poker-settle: settles a home poker game. buy-ins and cash-outs in, transfers out.
// the engine and the report are pure functions over a player slice.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: PlayerId, Money, cent rounding, settle tolerance
//        player.rs: Player record, id -> name lookup
//   2.x  totals.rs: total buy-ins, total cash-outs, imbalance
//   3.x  settlement.rs: settlement engine, Transfer, SettlementStatus
//   4.x  report.rs: plain-text report, recomputes settlements itself
//   5.x  config.rs: imbalance threshold + currency symbol, presets
//   6.x  ledger.rs: state container owned by the caller, stale tracking
//   7.x  snapshot.rs: JSON game snapshot for the CLI

// core
pub mod player;
pub mod settlement;
pub mod totals;
pub mod types;

// presentation
pub mod report;

// integration
pub mod config;
pub mod ledger;
pub mod snapshot;

// re exports for convenience
pub use player::*;
pub use report::*;
pub use settlement::*;
pub use totals::*;
pub use types::*;
pub use config::{ConfigError, SettleConfig, DEFAULT_CURRENCY_SYMBOL};
pub use ledger::{Ledger, LedgerError, PlayerUpdate};
pub use snapshot::{LedgerSnapshot, PlayerEntry, SnapshotError};
