use rust_decimal_macros::dec;

use crate::{
    error::BillingError,
    quantity::{Cost, Units},
    tariff::slab::{
        RATE_ABOVE_700,
        RATE_UP_TO_100,
        RATE_UP_TO_200,
        RATE_UP_TO_300,
        RATE_UP_TO_400,
        RATE_UP_TO_700,
        Slab,
        SlabBound,
        SlabCharge,
    },
};

/// Ordered slab table, ascending by the upper bound.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TariffSchedule<'a> {
    slabs: &'a [Slab],
}

impl TariffSchedule<'static> {
    pub const STANDARD: Self = Self {
        slabs: &[
            Slab::up_to(Units(dec!(100)), RATE_UP_TO_100),
            Slab::up_to(Units(dec!(200)), RATE_UP_TO_200),
            Slab::up_to(Units(dec!(300)), RATE_UP_TO_300),
            Slab::up_to(Units(dec!(400)), RATE_UP_TO_400),
            Slab::up_to(Units(dec!(700)), RATE_UP_TO_700),
            Slab::unbounded(RATE_ABOVE_700),
        ],
    };

    /// Protected consumers only have the two lowest slabs.
    ///
    /// Nothing covers consumption above 200 units, see [`EnergyCharge::unbilled`].
    pub const PROTECTED: Self = Self {
        slabs: &[
            Slab::up_to(Units(dec!(100)), RATE_UP_TO_100),
            Slab::up_to(Units(dec!(200)), RATE_UP_TO_200),
        ],
    };
}

impl<'a> TariffSchedule<'a> {
    /// Validate a slab table: the bounds must strictly increase and only the last slab may be unbounded.
    pub fn try_new(slabs: &'a [Slab]) -> Result<Self, BillingError> {
        if slabs.is_empty() {
            return Err(BillingError::InvalidSchedule("the schedule has no slabs"));
        }
        let mut previous = Units::ZERO;
        for (index, slab) in slabs.iter().enumerate() {
            if slab.rate.is_negative() {
                return Err(BillingError::InvalidSchedule("slab rates must not be negative"));
            }
            match slab.bound {
                SlabBound::UpTo(bound) if bound <= previous => {
                    return Err(BillingError::InvalidSchedule("slab bounds must strictly increase"));
                }
                SlabBound::UpTo(bound) => previous = bound,
                SlabBound::Unbounded if index + 1 != slabs.len() => {
                    return Err(BillingError::InvalidSchedule("only the last slab may be unbounded"));
                }
                SlabBound::Unbounded => {}
            }
        }
        Ok(Self { slabs })
    }

    #[must_use]
    pub const fn slabs(&self) -> &'a [Slab] {
        self.slabs
    }

    /// Whether the schedule covers any consumption, that is, ends with an unbounded slab.
    #[must_use]
    pub fn is_exhaustive(&self) -> bool {
        self.slabs.last().is_some_and(|slab| slab.bound == SlabBound::Unbounded)
    }

    /// Progressively bill the consumption through the slabs.
    pub fn energy_charge(&self, units: Units) -> EnergyCharge {
        let mut remaining = units;
        let mut previous_bound = Units::ZERO;
        let mut lines = Vec::with_capacity(self.slabs.len());

        for slab in self.slabs {
            if remaining <= Units::ZERO {
                break;
            }
            let billed = slab.bound.width_above(previous_bound).map_or(remaining, |width| remaining.min(width));
            lines.push(SlabCharge::new(*slab, billed));
            remaining -= billed;
            if let SlabBound::UpTo(bound) = slab.bound {
                previous_bound = bound;
            }
        }

        EnergyCharge { lines, unbilled: remaining.max(Units::ZERO) }
    }
}

/// Result of walking the consumption through a schedule.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnergyCharge {
    pub lines: Vec<SlabCharge>,

    /// Consumption left over after the last slab. Non-zero only for non-exhaustive schedules.
    pub unbilled: Units,
}

impl EnergyCharge {
    pub fn total(&self) -> Cost {
        self.lines.iter().map(|line| line.charge).sum()
    }
}
