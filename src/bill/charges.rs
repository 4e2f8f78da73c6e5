//! Charges levied on top of the energy charge.

use rust_decimal_macros::dec;

use crate::quantity::{Cost, Proportion, UnitRate, Units};

/// Consumption up to which the lower fixed charge applies, inclusive.
pub const FIXED_CHARGE_THRESHOLD: Units = Units(dec!(200));

pub const LOWER_FIXED_CHARGE: Cost = Cost(dec!(500));
pub const HIGHER_FIXED_CHARGE: Cost = Cost(dec!(1000));

/// 6.00 PKR rent plus 18% sales tax on it.
pub const METER_RENT: Cost = Cost(dec!(7.08));

/// Municipal utility charges, «MUCT».
pub const MUNICIPAL_UTILITY_CHARGE: Cost = Cost(dec!(50));

/// Provincial electricity duty, on the energy charge.
pub const ELECTRICITY_DUTY: Proportion = Proportion(dec!(0.015));

/// General sales tax, on the energy charge.
pub const SALES_TAX: Proportion = Proportion(dec!(0.17));

/// «FPA».
pub const FUEL_PRICE_ADJUSTMENT: UnitRate = UnitRate(dec!(2.00));

pub const TARIFF_RATIONALIZATION_SURCHARGE: UnitRate = UnitRate(dec!(1.00));

pub const QUARTERLY_ADJUSTMENT: UnitRate = UnitRate(dec!(0.50));

/// Bills starting from this amount pay the advance income tax on the entire amount.
pub const ADVANCE_INCOME_TAX_THRESHOLD: Cost = Cost(dec!(25000));

pub const ADVANCE_INCOME_TAX: Proportion = Proportion(dec!(0.075));

pub fn fixed_charge(units: Units) -> Cost {
    if units <= FIXED_CHARGE_THRESHOLD { LOWER_FIXED_CHARGE } else { HIGHER_FIXED_CHARGE }
}

/// Advance income tax due on the pre-tax subtotal.
///
/// This is a cliff, not a marginal rate: once the threshold is reached, the whole subtotal is taxed.
pub fn advance_income_tax(subtotal: Cost) -> Cost {
    if subtotal >= ADVANCE_INCOME_TAX_THRESHOLD { subtotal * ADVANCE_INCOME_TAX } else { Cost::ZERO }
}
