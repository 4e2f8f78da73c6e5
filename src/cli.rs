mod bill;
mod profile;
mod reading;

use std::{path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};
use meterbook::TariffClass;

pub use self::{bill::BillArgs, profile::ProfileArgs, reading::ReadingArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Ledger file with the profiles and their readings.
    #[clap(long, env = "METERBOOK_LEDGER", default_value = "meterbook.toml", global = true)]
    pub ledger: PathBuf,

    /// Tariff class to estimate the bills with: `standard` or `protected`.
    #[clap(
        long,
        env = "TARIFF_CLASS",
        default_value = "standard",
        value_parser = TariffClass::from_str,
        global = true
    )]
    pub tariff_class: TariffClass,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the bill for the given consumption.
    #[clap(name = "bill")]
    Bill(BillArgs),

    /// Manage the metering profiles.
    #[clap(name = "profile")]
    Profile(ProfileArgs),

    /// Record and review the meter readings.
    #[clap(name = "reading")]
    Reading(ReadingArgs),
}
