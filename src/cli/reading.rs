use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use meterbook::{
    TariffClass,
    Units,
    ledger::{Ledger, N_RECENT_READINGS, NewReading},
    prelude::*,
};

use crate::tables::build_readings_table;

#[derive(Parser)]
pub struct ReadingArgs {
    #[command(subcommand)]
    command: ReadingCommand,
}

#[derive(Subcommand)]
enum ReadingCommand {
    /// Record the meter position at the end of a billing period.
    Add {
        #[clap(long = "profile")]
        profile_id: u32,

        /// Meter position at the end of the period.
        #[clap(long, value_parser = Units::parse_non_negative)]
        current: Units,

        /// Meter position at the start of the period, defaults to the latest known position.
        #[clap(long, value_parser = Units::parse_non_negative)]
        previous: Option<Units>,

        /// Reading date, defaults to today.
        #[clap(long)]
        date: Option<NaiveDate>,
    },

    /// List the recent readings of the profile, newest first.
    List {
        #[clap(long = "profile")]
        profile_id: u32,

        #[clap(long, default_value_t = N_RECENT_READINGS)]
        limit: usize,
    },

    /// Delete the reading.
    Delete { id: u32 },
}

impl ReadingArgs {
    pub fn run(self, ledger_path: &Path, tariff_class: TariffClass) -> Result {
        let mut ledger = Ledger::read_from(ledger_path)?;

        match self.command {
            ReadingCommand::Add { profile_id, current, previous, date } => {
                let new_reading = NewReading::builder()
                    .date(date.unwrap_or_else(|| Local::now().date_naive()))
                    .maybe_previous(previous)
                    .current(current)
                    .build();
                let reading = ledger.add_reading(profile_id, new_reading)?;
                println!("{}", build_readings_table([reading], tariff_class)?);
            }
            ReadingCommand::List { profile_id, limit } => {
                let profile = ledger.profile(profile_id)?;
                println!("{}", build_readings_table(profile.recent_readings(limit), tariff_class)?);
                return Ok(());
            }
            ReadingCommand::Delete { id } => {
                let reading = ledger.delete_reading(id)?;
                debug!(date = %reading.date, "deleted");
            }
        }

        ledger.write_to(ledger_path)
    }
}
