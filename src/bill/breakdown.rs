use serde::Serialize;

use crate::{
    bill::charges::{
        ELECTRICITY_DUTY,
        FUEL_PRICE_ADJUSTMENT,
        METER_RENT,
        MUNICIPAL_UTILITY_CHARGE,
        QUARTERLY_ADJUSTMENT,
        SALES_TAX,
        TARIFF_RATIONALIZATION_SURCHARGE,
        advance_income_tax,
        fixed_charge,
    },
    error::BillingError,
    prelude::*,
    quantity::{Cost, Units},
    tariff::{SlabCharge, TariffClass, TariffSchedule},
};

/// Itemised bill.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BillBreakdown {
    pub units: Units,
    pub tariff_class: TariffClass,

    /// Energy charge per slab.
    pub slabs: Vec<SlabCharge>,

    /// Consumption that no slab of the schedule covers, and which is therefore not billed.
    pub unbilled_units: Units,

    pub energy_charge: Cost,
    pub fixed_charge: Cost,
    pub meter_rent: Cost,
    pub electricity_duty: Cost,
    pub sales_tax: Cost,
    pub fuel_price_adjustment: Cost,
    pub tariff_rationalization_surcharge: Cost,
    pub quarterly_adjustment: Cost,
    pub municipal_utility_charge: Cost,

    /// Everything above, not rounded.
    pub subtotal: Cost,

    /// Not rounded either.
    pub advance_income_tax: Cost,
}

impl BillBreakdown {
    #[instrument(level = "debug", skip_all, fields(units = %units, tariff_class = %tariff_class))]
    pub fn try_calculate(units: Units, tariff_class: TariffClass) -> Result<Self, BillingError> {
        let units = units.ensure_billable()?;

        let energy = TariffSchedule::try_new(tariff_class.schedule().slabs())?.energy_charge(units);
        if energy.unbilled > Units::ZERO {
            warn!(
                unbilled = %energy.unbilled,
                "the consumption exceeds the last slab of the schedule, the surplus is not billed"
            );
        }
        let energy_charge = energy.total();

        let fixed_charge = fixed_charge(units);
        let electricity_duty = energy_charge * ELECTRICITY_DUTY;
        let sales_tax = energy_charge * SALES_TAX;
        let fuel_price_adjustment = units * FUEL_PRICE_ADJUSTMENT;
        let tariff_rationalization_surcharge = units * TARIFF_RATIONALIZATION_SURCHARGE;
        let quarterly_adjustment = units * QUARTERLY_ADJUSTMENT;

        let subtotal = energy_charge
            + fixed_charge
            + METER_RENT
            + electricity_duty
            + sales_tax
            + fuel_price_adjustment
            + tariff_rationalization_surcharge
            + quarterly_adjustment
            + MUNICIPAL_UTILITY_CHARGE;
        let advance_income_tax = advance_income_tax(subtotal);
        debug!(%energy_charge, %subtotal, %advance_income_tax, "calculated");

        Ok(Self {
            units,
            tariff_class,
            slabs: energy.lines,
            unbilled_units: energy.unbilled,
            energy_charge,
            fixed_charge,
            meter_rent: METER_RENT,
            electricity_duty,
            sales_tax,
            fuel_price_adjustment,
            tariff_rationalization_surcharge,
            quarterly_adjustment,
            municipal_utility_charge: MUNICIPAL_UTILITY_CHARGE,
            subtotal,
            advance_income_tax,
        })
    }

    /// Total payable amount, rounded to paisa.
    pub fn total(&self) -> Cost {
        (self.subtotal + self.advance_income_tax).round_to_paisa()
    }

    /// Named components that make up the subtotal, in the order they appear on the bill.
    pub fn components(&self) -> [(&'static str, Cost); 9] {
        [
            ("Energy charge", self.energy_charge),
            ("Fixed charge", self.fixed_charge),
            ("Meter rent", self.meter_rent),
            ("Electricity duty", self.electricity_duty),
            ("Sales tax", self.sales_tax),
            ("Fuel price adjustment", self.fuel_price_adjustment),
            ("Tariff rationalization surcharge", self.tariff_rationalization_surcharge),
            ("Quarterly adjustment", self.quarterly_adjustment),
            ("Municipal utility charge", self.municipal_utility_charge),
        ]
    }
}
