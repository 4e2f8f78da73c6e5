use rust_decimal::RoundingStrategy;

use crate::quantity::Proportion;

quantity!(
    /// Money, in Pakistani rupees.
    Cost,
    suffix: "PKR",
    precision: 2
);

impl Cost {
    /// Round the cost to [paisa][1], half away from zero.
    ///
    /// [1]: https://en.wikipedia.org/wiki/Paisa
    pub fn round_to_paisa(self) -> Self {
        Self(self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Number of digits after the decimal point, as stored.
    #[must_use]
    pub const fn scale(self) -> u32 {
        self.0.scale()
    }
}

impl std::ops::Mul<Proportion> for Cost {
    type Output = Self;

    fn mul(self, rhs: Proportion) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_round_to_paisa() {
        assert_eq!(Cost(dec!(0.005)).round_to_paisa(), Cost(dec!(0.01)));
        assert_eq!(Cost(dec!(2582.6425)).round_to_paisa(), Cost(dec!(2582.64)));
        assert_eq!(Cost(dec!(26875.41468750)).round_to_paisa(), Cost(dec!(26875.41)));
        assert_eq!(Cost(dec!(557.08)).round_to_paisa(), Cost(dec!(557.08)));
    }

    #[test]
    fn test_mul_proportion() {
        assert_eq!(Cost(dec!(1400)) * Proportion(dec!(0.17)), Cost(dec!(238)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost(dec!(2566.08)).to_string(), "2566.08 PKR");
        assert_eq!(Cost(dec!(50)).to_string(), "50.00 PKR");
    }
}
