//! Electricity bill estimate for a single billing period.
//!
//! The energy charge is billed progressively through the slabs of the consumer's
//! [`TariffClass`], then the fixed charges, taxes and per-unit surcharges are added on top.
//! Rounding to paisa happens exactly once, on the final amount.

mod breakdown;
pub mod charges;

pub use self::breakdown::BillBreakdown;
use crate::{
    error::BillingError,
    quantity::{Cost, Units},
    tariff::TariffClass,
};

/// Total payable amount for the consumption.
///
/// # Errors
///
/// [`BillingError::InvalidConsumption`] for negative consumption, or consumption above [`Units::MAX_BILLABLE`].
pub fn calculate_bill(units: Units, tariff_class: TariffClass) -> Result<Cost, BillingError> {
    Ok(BillBreakdown::try_calculate(units, tariff_class)?.total())
}
