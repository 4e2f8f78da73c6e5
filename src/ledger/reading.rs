use bon::Builder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::quantity::Units;

/// Meter reading closing a billing period.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: u32,
    pub date: NaiveDate,

    /// Meter position at the start of the period.
    pub previous: Units,

    /// Meter position at the end of the period.
    pub current: Units,
}

impl Reading {
    pub fn consumption(&self) -> Units {
        self.current - self.previous
    }
}

/// Reading to be recorded.
#[derive(Builder)]
pub struct NewReading {
    pub date: NaiveDate,

    /// Defaults to the profile's [suggestion][crate::ledger::Profile::suggested_previous].
    pub previous: Option<Units>,

    pub current: Units,
}
