//! Poker game settlement CLI.
//!
//! Reads a game snapshot (players with buy-ins and cash-outs) from a JSON file
//! and prints who pays whom. Set `RUST_LOG=debug` to trace each transfer.

use clap::Parser;
use poker_settle::*;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "poker-settle", version, about = "Settle up a home poker game")]
struct Args {
    /// JSON snapshot with `players` and optional `imbalance_threshold` / `currency_symbol`
    file: PathBuf,

    /// Override the snapshot's imbalance threshold
    #[arg(short, long)]
    threshold: Option<Decimal>,

    /// Override the currency symbol used in the report
    #[arg(short, long)]
    currency: Option<String>,

    /// Print the transfers as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(status) if status.is_unreconcilable() => ExitCode::from(2),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<SettlementStatus, SnapshotError> {
    let mut snapshot = LedgerSnapshot::load(&args.file)?;
    if let Some(threshold) = args.threshold {
        snapshot.config.imbalance_threshold = Money::new(threshold);
    }
    if let Some(symbol) = &args.currency {
        snapshot.config.currency_symbol = symbol.clone();
    }

    let mut ledger = snapshot.into_ledger()?;
    log::info!(
        "loaded {} players from {}",
        ledger.players().len(),
        args.file.display()
    );

    if args.json {
        let transfers = ledger.settle();
        println!("{}", serde_json::to_string_pretty(transfers)?);
    } else {
        print!("{}", ledger.report());
    }

    Ok(ledger.status())
}
