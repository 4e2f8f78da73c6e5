use std::path::Path;

use clap::{Parser, Subcommand};
use meterbook::{
    TariffClass,
    Units,
    calculate_bill,
    ledger::{Ledger, N_RECENT_READINGS, NewProfile},
    prelude::*,
};

use crate::tables::{build_profile_table, build_profiles_table, build_readings_table};

#[derive(Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommand,
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Register a new profile.
    Add(ProfileFields),

    /// List the profiles with their latest consumption and expected bill.
    List,

    /// Show the profile and its recent readings.
    Show {
        id: u32,

        /// Number of readings to show.
        #[clap(long, default_value_t = N_RECENT_READINGS)]
        limit: usize,
    },

    /// Replace the profile details.
    Edit {
        id: u32,

        #[clap(flatten)]
        fields: ProfileFields,
    },

    /// Set the meter position the profile started with.
    SetInitialReading {
        id: u32,

        #[clap(value_parser = Units::parse_non_negative)]
        initial_reading: Units,
    },

    /// Delete the profile together with its readings.
    Delete { id: u32 },
}

#[derive(Parser)]
struct ProfileFields {
    #[clap(long)]
    tenant_name: String,

    #[clap(long)]
    meter_number: String,

    /// Meter position when the profile was registered.
    #[clap(long, value_parser = Units::parse_non_negative)]
    initial_reading: Option<Units>,
}

impl From<ProfileFields> for NewProfile {
    fn from(fields: ProfileFields) -> Self {
        Self::builder()
            .tenant_name(fields.tenant_name)
            .meter_number(fields.meter_number)
            .maybe_initial_reading(fields.initial_reading)
            .build()
    }
}

impl ProfileArgs {
    pub fn run(self, ledger_path: &Path, tariff_class: TariffClass) -> Result {
        let mut ledger = Ledger::read_from(ledger_path)?;

        match self.command {
            ProfileCommand::List => {
                println!("{}", build_profiles_table(&ledger.summaries(), tariff_class)?);
                return Ok(());
            }
            ProfileCommand::Show { id, limit } => {
                let profile = ledger.profile(id)?;
                println!("{}", build_profile_table(profile));
                println!("{}", build_readings_table(profile.recent_readings(limit), tariff_class)?);
                if let Some(reading) = profile.latest_reading() {
                    let expected_bill = calculate_bill(reading.consumption(), tariff_class)?;
                    info!(%tariff_class, %expected_bill, "latest billing period");
                }
                return Ok(());
            }
            ProfileCommand::Add(fields) => {
                let profile = ledger.add_profile(fields.into())?;
                println!("{}", build_profile_table(profile));
            }
            ProfileCommand::Edit { id, fields } => {
                let profile = ledger.update_profile(id, fields.into())?;
                println!("{}", build_profile_table(profile));
            }
            ProfileCommand::SetInitialReading { id, initial_reading } => {
                let profile = ledger.set_initial_reading(id, initial_reading)?;
                println!("{}", build_profile_table(profile));
            }
            ProfileCommand::Delete { id } => {
                ledger.delete_profile(id)?;
            }
        }

        ledger.write_to(ledger_path)
    }
}
