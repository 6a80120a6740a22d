// Observation domain models
use serde::Serialize;
use std::path::PathBuf;

/// Marker separating the city/plant prefix from the period suffix in file names.
pub const FILE_MARKER: &str = " pelud za ";

/// Separator between city and plant in the file name prefix.
pub const CITY_PLANT_SEPARATOR: &str = " - ";

/// A single row of an observation file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub level: f64,
    pub date: String,
}

impl Observation {
    pub fn new(level: f64, date: String) -> Self {
        Self { level, date }
    }
}

/// Identifies one observation file: a city, a plant and a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ObservationKey {
    pub city: String,
    pub plant: String,
    pub year: i32,
    pub month: u32,
}

impl ObservationKey {
    pub fn new(city: impl Into<String>, plant: impl Into<String>, year: i32, month: u32) -> Self {
        Self {
            city: city.into(),
            plant: plant.into(),
            year,
            month,
        }
    }

    /// File name for this key, e.g. `Zagreb - AMBROZIJA pelud za 9.2022.`
    pub fn file_name(&self) -> String {
        format!(
            "{}{}{}{}{}.{}.",
            self.city, CITY_PLANT_SEPARATOR, self.plant, FILE_MARKER, self.month, self.year
        )
    }

    /// Path of the file relative to the data root: `<year>/<month>/<file name>`.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.year.to_string())
            .join(self.month.to_string())
            .join(self.file_name())
    }
}

/// Extract `(city, plant)` from an observation file name.
///
/// Returns `None` when the name lacks the marker or its prefix does not split
/// into exactly two non-empty parts.
pub fn parse_file_name(name: &str) -> Option<(&str, &str)> {
    let (prefix, _) = name.split_once(FILE_MARKER)?;
    let mut parts = prefix.split(CITY_PLANT_SEPARATOR);
    let city = parts.next()?;
    let plant = parts.next()?;
    if parts.next().is_some() || city.is_empty() || plant.is_empty() {
        return None;
    }
    Some((city, plant))
}
