//! Profiles and their meter readings, kept in a TOML file.

mod profile;
mod reading;

use std::{fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};

pub use self::{
    profile::{NewProfile, Profile, ProfileSummary},
    reading::{NewReading, Reading},
};
use crate::{prelude::*, quantity::Units};

/// Default number of readings to show for a profile.
pub const N_RECENT_READINGS: usize = 10;

#[must_use]
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default, rename = "profile")]
    profiles: Vec<Profile>,
}

impl Ledger {
    /// Read the ledger file. A missing file is an empty ledger.
    #[instrument(name = "reading the ledger…", skip_all, fields(path = ?path))]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            debug!("no ledger file yet");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let ledger: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        debug!(n_profiles = ledger.profiles.len(), "loaded");
        Ok(ledger)
    }

    #[instrument(name = "writing the ledger…", skip_all, fields(path = ?path))]
    pub fn write_to<P: AsRef<Path> + Debug>(&self, path: P) -> Result {
        let path = path.as_ref();
        fs::write(path, toml::to_string(self)?)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        Ok(())
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn summaries(&self) -> Vec<ProfileSummary> {
        self.profiles.iter().map(Profile::summary).collect()
    }

    pub fn profile(&self, id: u32) -> Result<&Profile> {
        self.profiles
            .iter()
            .find(|profile| profile.id == id)
            .with_context(|| format!("profile #{id} is not found"))
    }

    fn profile_mut(&mut self, id: u32) -> Result<&mut Profile> {
        self.profiles
            .iter_mut()
            .find(|profile| profile.id == id)
            .with_context(|| format!("profile #{id} is not found"))
    }

    pub fn add_profile(&mut self, new_profile: NewProfile) -> Result<&Profile> {
        let new_profile = Self::validate_profile(new_profile)?;
        let id = self.profiles.iter().map(|profile| profile.id).max().map_or(1, |id| id + 1);
        self.profiles.push(Profile {
            id,
            tenant_name: new_profile.tenant_name,
            meter_number: new_profile.meter_number,
            initial_reading: new_profile.initial_reading,
            readings: Vec::new(),
        });
        info!(id, "added the profile");
        self.profile(id)
    }

    /// Replace the profile details, keeping its readings.
    pub fn update_profile(&mut self, id: u32, new_profile: NewProfile) -> Result<&Profile> {
        let new_profile = Self::validate_profile(new_profile)?;
        let profile = self.profile_mut(id)?;
        profile.tenant_name = new_profile.tenant_name;
        profile.meter_number = new_profile.meter_number;
        profile.initial_reading = new_profile.initial_reading;
        info!(id, "updated the profile");
        self.profile(id)
    }

    pub fn set_initial_reading(&mut self, id: u32, initial_reading: Units) -> Result<&Profile> {
        let initial_reading = initial_reading.ensure_non_negative()?;
        self.profile_mut(id)?.initial_reading = Some(initial_reading);
        info!(id, %initial_reading, "set the initial reading");
        self.profile(id)
    }

    /// Delete the profile together with its readings.
    pub fn delete_profile(&mut self, id: u32) -> Result<Profile> {
        let index = self
            .profiles
            .iter()
            .position(|profile| profile.id == id)
            .with_context(|| format!("profile #{id} is not found"))?;
        let profile = self.profiles.remove(index);
        info!(id, n_readings = profile.readings.len(), "deleted the profile");
        Ok(profile)
    }

    /// Record a reading, deriving the consumption from the previous meter position.
    pub fn add_reading(&mut self, profile_id: u32, new_reading: NewReading) -> Result<&Reading> {
        let id = self.next_reading_id();
        let profile = self.profile_mut(profile_id)?;

        let previous = match new_reading.previous {
            Some(previous) => previous,
            None => profile.suggested_previous().context(
                "the profile has neither readings nor an initial reading, specify the previous reading",
            )?,
        };
        let previous = previous.ensure_non_negative()?;
        let current = new_reading.current.ensure_non_negative()?;
        ensure!(current >= previous, "current reading must be greater than previous");

        profile.readings.push(Reading { id, date: new_reading.date, previous, current });
        info!(profile_id, id, consumption = %(current - previous), "added the reading");
        profile.readings.last().context("the reading has not been added")
    }

    /// Delete the reading, whichever profile it belongs to.
    pub fn delete_reading(&mut self, id: u32) -> Result<Reading> {
        for profile in &mut self.profiles {
            if let Some(index) = profile.readings.iter().position(|reading| reading.id == id) {
                info!(profile_id = profile.id, id, "deleted the reading");
                return Ok(profile.readings.remove(index));
            }
        }
        bail!("reading #{id} is not found")
    }

    /// Reading IDs are unique across all the profiles.
    fn next_reading_id(&self) -> u32 {
        self.profiles
            .iter()
            .flat_map(|profile| &profile.readings)
            .map(|reading| reading.id)
            .max()
            .map_or(1, |id| id + 1)
    }

    fn validate_profile(mut new_profile: NewProfile) -> Result<NewProfile> {
        new_profile.tenant_name = new_profile.tenant_name.trim().to_string();
        new_profile.meter_number = new_profile.meter_number.trim().to_string();
        ensure!(!new_profile.tenant_name.is_empty(), "tenant name is required");
        ensure!(!new_profile.meter_number.is_empty(), "meter number is required");
        if let Some(initial_reading) = new_profile.initial_reading {
            initial_reading.ensure_non_negative()?;
        }
        Ok(new_profile)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, day).unwrap()
    }

    fn ledger_with_profile() -> Ledger {
        let mut ledger = Ledger::default();
        ledger
            .add_profile(
                NewProfile::builder()
                    .tenant_name("Ground floor")
                    .meter_number("LESCO-0042")
                    .initial_reading(Units(dec!(1000)))
                    .build(),
            )
            .unwrap();
        ledger
    }

    #[test]
    fn test_add_profile_assigns_ids() {
        let mut ledger = ledger_with_profile();
        let profile = ledger
            .add_profile(NewProfile::builder().tenant_name("Upstairs").meter_number("M-2").build())
            .unwrap();
        assert_eq!(profile.id, 2);
        assert_eq!(profile.initial_reading, None);
    }

    #[test]
    fn test_add_profile_requires_names() {
        let mut ledger = Ledger::default();
        let error = ledger
            .add_profile(NewProfile::builder().tenant_name("  ").meter_number("M-1").build())
            .unwrap_err();
        assert_eq!(error.to_string(), "tenant name is required");
        assert!(
            ledger
                .add_profile(NewProfile::builder().tenant_name("Tenant").meter_number("").build())
                .is_err()
        );
    }

    #[test]
    fn test_add_profile_rejects_negative_initial_reading() {
        let mut ledger = Ledger::default();
        let new_profile = NewProfile::builder()
            .tenant_name("Tenant")
            .meter_number("M-1")
            .initial_reading(Units(dec!(-5)))
            .build();
        assert!(ledger.add_profile(new_profile).is_err());
    }

    #[test]
    fn test_update_profile_keeps_readings() {
        let mut ledger = ledger_with_profile();
        ledger
            .add_reading(1, NewReading::builder().date(date(1)).current(Units(dec!(1100))).build())
            .unwrap();
        let profile = ledger
            .update_profile(1, NewProfile::builder().tenant_name("Renamed").meter_number("M-9").build())
            .unwrap();
        assert_eq!(profile.tenant_name, "Renamed");
        assert_eq!(profile.initial_reading, None);
        assert_eq!(profile.readings.len(), 1);
    }

    #[test]
    fn test_set_initial_reading() {
        let mut ledger = ledger_with_profile();
        ledger.set_initial_reading(1, Units(dec!(2000))).unwrap();
        assert_eq!(ledger.profile(1).unwrap().initial_reading, Some(Units(dec!(2000))));
        assert!(ledger.set_initial_reading(1, Units(dec!(-1))).is_err());
        assert!(ledger.set_initial_reading(42, Units(dec!(1))).is_err());
    }

    #[test]
    fn test_add_reading_defaults_previous() {
        let mut ledger = ledger_with_profile();
        let first = ledger
            .add_reading(1, NewReading::builder().date(date(1)).current(Units(dec!(1150))).build())
            .unwrap();
        assert_eq!(first.previous, Units(dec!(1000)));
        assert_eq!(first.consumption(), Units(dec!(150)));

        let second = ledger
            .add_reading(1, NewReading::builder().date(date(30)).current(Units(dec!(1400))).build())
            .unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(second.previous, Units(dec!(1150)));
        assert_eq!(second.consumption(), Units(dec!(250)));
    }

    #[test]
    fn test_add_reading_without_any_previous() {
        let mut ledger = Ledger::default();
        ledger.add_profile(NewProfile::builder().tenant_name("T").meter_number("M").build()).unwrap();
        let result =
            ledger.add_reading(1, NewReading::builder().date(date(1)).current(Units(dec!(10))).build());
        assert!(result.is_err());
    }

    #[test]
    fn test_add_reading_rejects_backwards_meter() {
        let mut ledger = ledger_with_profile();
        let error = ledger
            .add_reading(
                1,
                NewReading::builder()
                    .date(date(1))
                    .previous(Units(dec!(1200)))
                    .current(Units(dec!(1100)))
                    .build(),
            )
            .unwrap_err();
        assert_eq!(error.to_string(), "current reading must be greater than previous");
        assert!(ledger.profile(1).unwrap().readings.is_empty());
    }

    #[test]
    fn test_add_reading_allows_zero_consumption() {
        let mut ledger = ledger_with_profile();
        let reading = ledger
            .add_reading(1, NewReading::builder().date(date(1)).current(Units(dec!(1000))).build())
            .unwrap();
        assert_eq!(reading.consumption(), Units::ZERO);
    }

    #[test]
    fn test_add_reading_unknown_profile() {
        let mut ledger = ledger_with_profile();
        let error = ledger
            .add_reading(7, NewReading::builder().date(date(1)).current(Units(dec!(1))).build())
            .unwrap_err();
        assert_eq!(error.to_string(), "profile #7 is not found");
    }

    #[test]
    fn test_reading_ids_are_unique_across_profiles() {
        let mut ledger = ledger_with_profile();
        ledger
            .add_profile(
                NewProfile::builder()
                    .tenant_name("Upstairs")
                    .meter_number("M-2")
                    .initial_reading(Units(dec!(0)))
                    .build(),
            )
            .unwrap();
        ledger
            .add_reading(1, NewReading::builder().date(date(1)).current(Units(dec!(1100))).build())
            .unwrap();
        let reading = ledger
            .add_reading(2, NewReading::builder().date(date(1)).current(Units(dec!(90))).build())
            .unwrap();
        assert_eq!(reading.id, 2);
    }

    #[test]
    fn test_delete_reading() {
        let mut ledger = ledger_with_profile();
        ledger
            .add_reading(1, NewReading::builder().date(date(1)).current(Units(dec!(1100))).build())
            .unwrap();
        assert_eq!(ledger.delete_reading(1).unwrap().current, Units(dec!(1100)));
        assert!(ledger.delete_reading(1).is_err());
    }

    #[test]
    fn test_delete_profile() {
        let mut ledger = ledger_with_profile();
        assert_eq!(ledger.delete_profile(1).unwrap().tenant_name, "Ground floor");
        assert!(ledger.profiles().is_empty());
        assert!(ledger.delete_profile(1).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut ledger = ledger_with_profile();
        ledger
            .add_reading(1, NewReading::builder().date(date(1)).current(Units(dec!(1100.5))).build())
            .unwrap();
        let serialized = toml::to_string(&ledger).unwrap();
        assert!(serialized.contains("[[profile]]"), "{serialized}");
        assert!(serialized.contains("[[profile.reading]]"), "{serialized}");
        assert!(serialized.contains(r#"current = "1100.5""#), "{serialized}");
        assert_eq!(toml::from_str::<Ledger>(&serialized).unwrap(), ledger);
    }

    #[test]
    fn test_read_from_missing_file() {
        let path = std::env::temp_dir().join("meterbook-missing-ledger.toml");
        assert!(Ledger::read_from(&path).unwrap().profiles().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let path = std::env::temp_dir().join(format!("meterbook-{}.toml", std::process::id()));
        let ledger = ledger_with_profile();
        ledger.write_to(&path).unwrap();
        let loaded = Ledger::read_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, ledger);
    }
}
