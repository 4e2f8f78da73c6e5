mod cli;
mod tables;

use clap::{Parser, crate_version};
use meterbook::prelude::*;

use crate::cli::{Args, Command};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    debug!(version = crate_version!(), "starting…");

    let args = Args::parse();
    info!(tariff_class = %args.tariff_class, ledger = ?args.ledger, "configured");

    match args.command {
        Command::Bill(bill_args) => bill_args.run(args.tariff_class)?,
        Command::Profile(profile_args) => profile_args.run(&args.ledger, args.tariff_class)?,
        Command::Reading(reading_args) => reading_args.run(&args.ledger, args.tariff_class)?,
    }

    debug!("done!");
    Ok(())
}
