use std::fmt::{Debug, Display, Formatter};

use rust_decimal::Decimal;

/// A dimensionless share of an amount, `0.17` being 17%.
#[derive(Copy, Clone, Eq, Ord, PartialEq, PartialOrd, Hash, derive_more::From)]
#[must_use]
pub struct Proportion(pub Decimal);

impl Display for Proportion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}

impl Debug for Proportion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Proportion(dec!(0.015)).to_string(), "1.5%");
        assert_eq!(Proportion(dec!(0.075)).to_string(), "7.5%");
    }
}
