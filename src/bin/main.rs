use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cbdc_ledger::{AccountId, Amount, Ledger};

/// A cli interface to the currency ledger
///
/// Constructs a ledger, applies the operation records from the given CSV
/// file in order, and writes the final balances as CSV to stdout.
#[derive(Debug, Parser)]
#[clap(version)]
struct Args {
    /// The account id of the initial controlling party
    #[clap(long)]
    controlling_party: AccountId,
    /// The initial supply in base units, minted to the controlling party
    #[clap(long)]
    initial_supply: Amount,
    /// Write the emitted events to this file as JSON lines
    #[clap(long)]
    events: Option<std::path::PathBuf>,
    /// The path to the operations CSV file
    filename: std::path::PathBuf,
}

/// One row of the final balance report
#[derive(Debug, serde::Serialize)]
struct BalanceRecord {
    account: AccountId,
    balance: Amount,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(args.filename)?;
    let mut ledger = Ledger::new(args.controlling_party, args.initial_supply)?;

    for (index, operation) in reader.deserialize().enumerate() {
        // a rejected record leaves the ledger untouched
        if let Err(error) = ledger.apply(operation?) {
            tracing::warn!(record = index + 1, %error, "operation rejected");
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(std::io::stdout());

    for (&account, &balance) in ledger.balances() {
        writer.serialize(BalanceRecord { account, balance })?;
    }
    writer.flush()?;

    if let Some(path) = args.events {
        let mut file = std::fs::File::create(path)?;
        for event in ledger.events() {
            serde_json::to_writer(&mut file, event)?;
            writeln!(file)?;
        }
    }

    Ok(())
}
