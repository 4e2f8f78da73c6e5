use thiserror::Error;

/// Contract violations reported by the bill calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    #[error("invalid consumption `{0}`: expected a finite, non-negative number of units")]
    InvalidConsumption(String),

    #[error("invalid tariff class `{0}`: expected `standard` or `protected`")]
    InvalidTariffClass(String),

    #[error("invalid tariff schedule: {0}")]
    InvalidSchedule(&'static str),
}
