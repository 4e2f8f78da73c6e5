use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{error::BillingError, tariff::TariffSchedule};

/// Selects the slab schedule that applies to a consumer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TariffClass {
    /// Regular residential consumer.
    Standard,

    /// Subsidised residential consumer, billed on the two lowest slabs only.
    Protected,
}

impl TariffClass {
    #[must_use]
    pub const fn schedule(self) -> TariffSchedule<'static> {
        match self {
            Self::Standard => TariffSchedule::STANDARD,
            Self::Protected => TariffSchedule::PROTECTED,
        }
    }
}

impl Display for TariffClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Protected => write!(f, "protected"),
        }
    }
}

impl FromStr for TariffClass {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "protected" => Ok(Self::Protected),
            _ => Err(BillingError::InvalidTariffClass(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("standard".parse(), Ok(TariffClass::Standard));
        assert_eq!(" Protected ".parse(), Ok(TariffClass::Protected));
        assert_eq!(
            "industrial".parse::<TariffClass>(),
            Err(BillingError::InvalidTariffClass("industrial".to_string())),
        );
    }

    #[test]
    fn test_display_round_trips() {
        for class in [TariffClass::Standard, TariffClass::Protected] {
            assert_eq!(class.to_string().parse(), Ok(class));
        }
    }

    #[test]
    fn test_schedule() {
        assert_eq!(TariffClass::Standard.schedule().slabs().len(), 6);
        assert_eq!(TariffClass::Protected.schedule().slabs().len(), 2);
    }
}
