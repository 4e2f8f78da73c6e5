use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use meterbook::{
    BillBreakdown,
    Cost,
    TariffClass,
    Units,
    calculate_bill,
    ledger::{Profile, ProfileSummary, Reading},
    prelude::*,
    tariff::SlabBound,
};
use rust_decimal_macros::dec;

const HIGH_CONSUMPTION: Units = Units(dec!(200));
const ELEVATED_CONSUMPTION: Units = Units(dec!(150));

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn consumption_color(consumption: Units) -> Color {
    if consumption >= HIGH_CONSUMPTION {
        Color::Red
    } else if consumption >= ELEVATED_CONSUMPTION {
        Color::DarkYellow
    } else {
        Color::Green
    }
}

fn consumption_cell(consumption: Units) -> Cell {
    Cell::new(consumption).set_alignment(CellAlignment::Right).fg(consumption_color(consumption))
}

pub fn build_breakdown_table(breakdown: &BillBreakdown) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(format!("{} units, {}", breakdown.units.0.normalize(), breakdown.tariff_class)),
        Cell::new("Units"),
        Cell::new("Rate"),
        Cell::new("Amount"),
    ]);

    let mut lower_bound = Units::ZERO;
    for line in &breakdown.slabs {
        let slab = match line.slab.bound {
            SlabBound::UpTo(upper_bound) => {
                let slab = format!("Slab {}–{}", lower_bound.0.normalize(), upper_bound.0.normalize());
                lower_bound = upper_bound;
                slab
            }
            SlabBound::Unbounded => format!("Slab above {}", lower_bound.0.normalize()),
        };
        table.add_row(vec![
            Cell::new(slab).add_attribute(Attribute::Dim),
            Cell::new(line.units).set_alignment(CellAlignment::Right),
            Cell::new(line.slab.rate).set_alignment(CellAlignment::Right),
            Cell::new(line.charge).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
        ]);
    }
    if breakdown.unbilled_units > Units::ZERO {
        table.add_row(vec![
            Cell::new("Not covered by any slab").fg(Color::Magenta),
            Cell::new(breakdown.unbilled_units).set_alignment(CellAlignment::Right).fg(Color::Magenta),
            Cell::new(""),
            Cell::new(""),
        ]);
    }

    for (name, amount) in breakdown.components() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(""),
            Cell::new(""),
            Cell::new(amount).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Subtotal").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(breakdown.subtotal.round_to_paisa()).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Advance income tax"),
        Cell::new(""),
        Cell::new(""),
        Cell::new(breakdown.advance_income_tax.round_to_paisa())
            .set_alignment(CellAlignment::Right)
            .fg(if breakdown.advance_income_tax > Cost::ZERO {
                Color::Red
            } else {
                Color::Reset
            }),
    ]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(breakdown.total()).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_profile_table(profile: &Profile) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Tenant", "Meter", "Initial reading", "Readings"]);
    table.add_row(vec![
        Cell::new(profile.id).add_attribute(Attribute::Dim),
        Cell::new(&profile.tenant_name),
        Cell::new(&profile.meter_number),
        optional_cell(profile.initial_reading),
        Cell::new(profile.readings.len()).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_profiles_table(summaries: &[ProfileSummary], tariff_class: TariffClass) -> Result<Table> {
    let mut table = new_table();
    table.set_header(vec![
        "ID",
        "Tenant",
        "Meter",
        "Initial reading",
        "Last consumption",
        "Last reading",
        "Expected bill",
    ]);
    for summary in summaries {
        let expected_bill = summary
            .last_consumption
            .map(|consumption| calculate_bill(consumption, tariff_class))
            .transpose()?;
        table.add_row(vec![
            Cell::new(summary.id).add_attribute(Attribute::Dim),
            Cell::new(&summary.tenant_name),
            Cell::new(&summary.meter_number),
            optional_cell(summary.initial_reading),
            summary.last_consumption.map_or_else(|| optional_cell::<Units>(None), consumption_cell),
            optional_cell(summary.last_reading_date),
            optional_cell(expected_bill),
        ]);
    }
    Ok(table)
}

pub fn build_readings_table<'a>(
    readings: impl IntoIterator<Item = &'a Reading>,
    tariff_class: TariffClass,
) -> Result<Table> {
    let mut table = new_table();
    table.set_header(vec!["ID", "Date", "Previous", "Current", "Consumption", "Bill"]);
    for reading in readings {
        let consumption = reading.consumption();
        let bill = calculate_bill(consumption, tariff_class)
            .with_context(|| format!("failed to estimate the bill for reading #{}", reading.id))?;
        table.add_row(vec![
            Cell::new(reading.id).add_attribute(Attribute::Dim),
            Cell::new(reading.date),
            Cell::new(reading.previous).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(reading.current).set_alignment(CellAlignment::Right),
            consumption_cell(consumption),
            Cell::new(bill).set_alignment(CellAlignment::Right),
        ]);
    }
    Ok(table)
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    value.map_or_else(|| Cell::new("—").add_attribute(Attribute::Dim), |value| Cell::new(value.to_string()))
}
