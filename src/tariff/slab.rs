use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::quantity::{Cost, UnitRate, Units};

/// Inclusive upper bound of a slab.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlabBound {
    UpTo(Units),

    /// All remaining units.
    Unbounded,
}

impl SlabBound {
    /// Units that fit into the slab once everything up to `previous` has been billed.
    ///
    /// [`None`] means the slab has no capacity limit.
    #[must_use]
    pub fn width_above(self, previous: Units) -> Option<Units> {
        match self {
            Self::UpTo(bound) => Some(bound - previous),
            Self::Unbounded => None,
        }
    }
}

/// Consumption tier billed at its own flat per-unit rate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Slab {
    pub bound: SlabBound,
    pub rate: UnitRate,
}

impl Slab {
    pub const fn up_to(bound: Units, rate: UnitRate) -> Self {
        Self { bound: SlabBound::UpTo(bound), rate }
    }

    pub const fn unbounded(rate: UnitRate) -> Self {
        Self { bound: SlabBound::Unbounded, rate }
    }
}

/// Portion of the consumption billed within a single slab.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SlabCharge {
    pub slab: Slab,
    pub units: Units,
    pub charge: Cost,
}

impl SlabCharge {
    pub fn new(slab: Slab, units: Units) -> Self {
        Self { slab, units, charge: units * slab.rate }
    }
}

pub const RATE_UP_TO_100: UnitRate = UnitRate(dec!(14.00));
pub const RATE_UP_TO_200: UnitRate = UnitRate(dec!(25.00));
pub const RATE_UP_TO_300: UnitRate = UnitRate(dec!(43.00));
pub const RATE_UP_TO_400: UnitRate = UnitRate(dec!(65.00));
pub const RATE_UP_TO_700: UnitRate = UnitRate(dec!(65.00));

/// Rate for everything above 700 units. Lower than the 300–700 rates, and that is how the tariff is published.
pub const RATE_ABOVE_700: UnitRate = UnitRate(dec!(43.00));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_above() {
        assert_eq!(
            SlabBound::UpTo(Units(dec!(300))).width_above(Units(dec!(200))),
            Some(Units(dec!(100))),
        );
        assert_eq!(SlabBound::Unbounded.width_above(Units(dec!(700))), None);
    }

    #[test]
    fn test_slab_charge() {
        let charge = SlabCharge::new(Slab::up_to(Units(dec!(300)), RATE_UP_TO_300), Units(dec!(50)));
        assert_eq!(charge.charge.0, dec!(2150.00));
    }
}
