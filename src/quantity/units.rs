use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::BillingError;

quantity!(
    /// Metered consumption, in units (kilowatt-hours).
    ///
    /// Also used for the absolute meter positions that consumption is derived from.
    Units,
    suffix: "units"
);

impl Units {
    /// Largest consumption the bill calculator accepts, so that no charge can overflow [`Decimal`].
    pub const MAX_BILLABLE: Self = Self(dec!(1000000000000));

    /// Convert a floating-point measurement, rejecting anything that is not a finite, non-negative number.
    pub fn try_from_f64(value: f64) -> Result<Self, BillingError> {
        if !value.is_finite() || value < 0.0 {
            return Err(BillingError::InvalidConsumption(value.to_string()));
        }
        Decimal::try_from(value)
            .map(Self)
            .map_err(|_| BillingError::InvalidConsumption(value.to_string()))
    }

    /// Parse user input, rejecting anything that is not a non-negative decimal number.
    pub fn parse_non_negative(input: &str) -> Result<Self, BillingError> {
        let units: Self = input
            .trim()
            .parse()
            .map_err(|_| BillingError::InvalidConsumption(input.to_string()))?;
        units.ensure_non_negative()
    }

    pub fn ensure_non_negative(self) -> Result<Self, BillingError> {
        if self.is_negative() {
            Err(BillingError::InvalidConsumption(self.0.to_string()))
        } else {
            Ok(self)
        }
    }

    /// Ensure the consumption is non-negative and within [`Self::MAX_BILLABLE`].
    pub fn ensure_billable(self) -> Result<Self, BillingError> {
        let units = self.ensure_non_negative()?;
        if units > Self::MAX_BILLABLE {
            Err(BillingError::InvalidConsumption(units.0.to_string()))
        } else {
            Ok(units)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Units::try_from_f64(250.0), Ok(Units(dec!(250))));
        assert_eq!(Units::try_from_f64(0.5), Ok(Units(dec!(0.5))));
    }

    #[test]
    fn test_try_from_f64_rejects_garbage() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.01] {
            assert!(
                matches!(Units::try_from_f64(value), Err(BillingError::InvalidConsumption(_))),
                "{value} must be rejected",
            );
        }
    }

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(Units::parse_non_negative(" 100.5 "), Ok(Units(dec!(100.5))));
        assert_eq!(Units::parse_non_negative("0"), Ok(Units::ZERO));
        assert!(Units::parse_non_negative("-1").is_err());
        assert!(Units::parse_non_negative("NaN").is_err());
        assert!(Units::parse_non_negative("twelve").is_err());
        assert!(Units::parse_non_negative("").is_err());
    }

    #[test]
    fn test_ensure_billable() {
        assert_eq!(Units::MAX_BILLABLE.ensure_billable(), Ok(Units::MAX_BILLABLE));
        assert!(Units(dec!(1000000000000.01)).ensure_billable().is_err());
        assert!(Units(Decimal::MAX).ensure_billable().is_err());
        assert!(Units(dec!(-0.5)).ensure_billable().is_err());
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        assert!(!Units(-Decimal::ZERO).is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(Units(dec!(250.00)).to_string(), "250 units");
        assert_eq!(format!("{:?}", Units(dec!(0.50))), "0.5units");
    }
}
