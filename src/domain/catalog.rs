// Catalog domain model - what the data directory currently offers
use super::observation::ObservationKey;
use super::plant::Plant;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Read-only projection of the data directory at scan time.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    /// Cities in the order they were first seen.
    pub cities: Vec<String>,
    pub years: Vec<i32>,
    pub months: Vec<u32>,
    pub plants: Vec<Plant>,
    #[serde(skip)]
    pub entries: Vec<ObservationKey>,
    pub scanned_at: DateTime<Utc>,
}

impl Catalog {
    pub fn years_for(&self, city: &str) -> Vec<i32> {
        self.entries
            .iter()
            .filter(|e| e.city == city)
            .map(|e| e.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn plants_for(&self, city: &str, year: i32) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.city == city && e.year == year)
            .map(|e| e.plant.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn months_for(&self, city: &str, year: i32, plant: &str) -> Vec<u32> {
        self.entries
            .iter()
            .filter(|e| e.city == city && e.year == year && e.plant == plant)
            .map(|e| e.month)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Accumulates scan results; used by repositories while walking a data source.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    cities: Vec<String>,
    years: BTreeSet<i32>,
    months: BTreeSet<u32>,
    entries: Vec<ObservationKey>,
}

impl CatalogBuilder {
    pub fn record_year(&mut self, year: i32) {
        self.years.insert(year);
    }

    pub fn record_month(&mut self, month: u32) {
        self.months.insert(month);
    }

    pub fn record_file(&mut self, key: ObservationKey) {
        if !self.cities.contains(&key.city) {
            self.cities.push(key.city.clone());
        }
        self.record_year(key.year);
        self.record_month(key.month);
        self.entries.push(key);
    }

    pub fn build(self, scanned_at: DateTime<Utc>) -> Catalog {
        Catalog {
            cities: self.cities,
            years: self.years.into_iter().collect(),
            months: self.months.into_iter().collect(),
            plants: Plant::ALL.to_vec(),
            entries: self.entries,
            scanned_at,
        }
    }
}
