use crate::quantity::{Cost, Units};

quantity!(
    /// Rupees per unit.
    UnitRate,
    suffix: "PKR/unit",
    precision: 2
);

implement_mul!(Units, UnitRate, Cost);

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_mul_units() {
        assert_eq!(Units(dec!(50)) * UnitRate(dec!(43.00)), Cost(dec!(2150)));
        assert_eq!(UnitRate(dec!(0.50)) * Units(dec!(250)), Cost(dec!(125)));
    }
}
