use clap::Parser;
use meterbook::{BillBreakdown, Cost, TariffClass, Units, prelude::*};
use serde::Serialize;

use crate::tables::build_breakdown_table;

#[derive(Parser)]
pub struct BillArgs {
    /// Consumption for the billing period, in units.
    #[clap(long, value_parser = Units::parse_non_negative)]
    units: Units,

    /// Print the breakdown as JSON instead of a table.
    #[clap(long)]
    json: bool,
}

impl BillArgs {
    #[instrument(skip_all, fields(units = %self.units, tariff_class = %tariff_class))]
    pub fn run(self, tariff_class: TariffClass) -> Result {
        let breakdown = BillBreakdown::try_calculate(self.units, tariff_class)?;
        if self.json {
            let report = BillReport { total: breakdown.total(), breakdown: &breakdown };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", build_breakdown_table(&breakdown));
        }
        info!(total = %breakdown.total(), "estimated");
        Ok(())
    }
}

#[derive(Serialize)]
struct BillReport<'a> {
    #[serde(flatten)]
    breakdown: &'a BillBreakdown,

    total: Cost,
}
