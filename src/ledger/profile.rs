use std::cmp::Reverse;

use bon::Builder;
use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{ledger::Reading, quantity::Units};

/// Metering profile: a tenant and the meter they are billed by.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u32,
    pub tenant_name: String,
    pub meter_number: String,

    /// Meter position when the profile was registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_reading: Option<Units>,

    #[serde(default, rename = "reading")]
    pub readings: Vec<Reading>,
}

impl Profile {
    /// The newest reading by date. Same-day readings are ordered by their IDs.
    #[must_use]
    pub fn latest_reading(&self) -> Option<&Reading> {
        self.readings.iter().max_by_key(|reading| (reading.date, reading.id))
    }

    /// Newest readings first.
    pub fn recent_readings(&self, limit: usize) -> impl Iterator<Item = &Reading> {
        self.readings.iter().sorted_by_key(|reading| Reverse((reading.date, reading.id))).take(limit)
    }

    /// Where the next period starts: the latest meter position, or the initial reading if nothing is recorded yet.
    #[must_use]
    pub fn suggested_previous(&self) -> Option<Units> {
        self.latest_reading().map(|reading| reading.current).or(self.initial_reading)
    }

    pub fn summary(&self) -> ProfileSummary {
        let latest_reading = self.latest_reading();
        ProfileSummary {
            id: self.id,
            tenant_name: self.tenant_name.clone(),
            meter_number: self.meter_number.clone(),
            initial_reading: self.initial_reading,
            last_consumption: latest_reading.map(Reading::consumption),
            last_reading_date: latest_reading.map(|reading| reading.date),
        }
    }
}

/// Profile as listed, with its latest reading folded in.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub id: u32,
    pub tenant_name: String,
    pub meter_number: String,
    pub initial_reading: Option<Units>,
    pub last_consumption: Option<Units>,
    pub last_reading_date: Option<NaiveDate>,
}

/// Profile details as entered by the user.
#[derive(Builder)]
pub struct NewProfile {
    #[builder(into)]
    pub tenant_name: String,

    #[builder(into)]
    pub meter_number: String,

    pub initial_reading: Option<Units>,
}
