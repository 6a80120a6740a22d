// Selection cascade - city -> year -> plant -> month
use super::catalog::Catalog;
use super::observation::ObservationKey;
use serde::{Deserialize, Serialize};

/// A partial set of dropdown values, filled in cascade order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Selection {
    pub city: Option<String>,
    pub year: Option<i32>,
    pub plant: Option<String>,
    pub month: Option<u32>,
}

/// The dropdown that still needs a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    City,
    Year,
    Plant,
    Month,
    Ready,
}

/// Options for the next dropdown in the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", content = "options", rename_all = "snake_case")]
pub enum StageOptions {
    City(Vec<String>),
    Year(Vec<i32>),
    Plant(Vec<String>),
    Month(Vec<u32>),
    Ready,
}

impl Selection {
    /// First unset stage; values after an unset field are ignored.
    pub fn stage(&self) -> Stage {
        match (&self.city, self.year, &self.plant, self.month) {
            (None, ..) => Stage::City,
            (Some(_), None, ..) => Stage::Year,
            (Some(_), Some(_), None, _) => Stage::Plant,
            (Some(_), Some(_), Some(_), None) => Stage::Month,
            (Some(_), Some(_), Some(_), Some(_)) => Stage::Ready,
        }
    }

    /// The observation file this selection points at, once every stage is set.
    pub fn key(&self) -> Option<ObservationKey> {
        match (&self.city, self.year, &self.plant, self.month) {
            (Some(city), Some(year), Some(plant), Some(month)) => {
                Some(ObservationKey::new(city.clone(), plant.clone(), year, month))
            }
            _ => None,
        }
    }
}

/// Options for the stage following `selection`, filtered by every earlier choice.
pub fn next_options(catalog: &Catalog, selection: &Selection) -> StageOptions {
    match (&selection.city, selection.year, &selection.plant, selection.month) {
        (None, ..) => StageOptions::City(catalog.cities.clone()),
        (Some(city), None, ..) => StageOptions::Year(catalog.years_for(city)),
        (Some(city), Some(year), None, _) => StageOptions::Plant(catalog.plants_for(city, year)),
        (Some(city), Some(year), Some(plant), None) => {
            StageOptions::Month(catalog.months_for(city, year, plant))
        }
        (Some(_), Some(_), Some(_), Some(_)) => StageOptions::Ready,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogBuilder;
    use chrono::Utc;

    fn catalog() -> Catalog {
        let mut builder = CatalogBuilder::default();
        builder.record_file(ObservationKey::new("Zagreb", "AMBROZIJA", 2022, 9));
        builder.record_file(ObservationKey::new("Zagreb", "TRAVE", 2022, 6));
        builder.record_file(ObservationKey::new("Zagreb", "TRAVE", 2022, 5));
        builder.record_file(ObservationKey::new("Pula", "MASLINA", 2023, 5));
        builder.build(Utc::now())
    }

    fn select(city: Option<&str>, year: Option<i32>, plant: Option<&str>, month: Option<u32>) -> Selection {
        Selection {
            city: city.map(str::to_string),
            year,
            plant: plant.map(str::to_string),
            month,
        }
    }

    #[test]
    fn test_stage_progression() {
        assert_eq!(Selection::default().stage(), Stage::City);
        assert_eq!(select(Some("Zagreb"), None, None, None).stage(), Stage::Year);
        assert_eq!(select(Some("Zagreb"), Some(2022), None, None).stage(), Stage::Plant);
        assert_eq!(
            select(Some("Zagreb"), Some(2022), Some("TRAVE"), None).stage(),
            Stage::Month
        );
        assert_eq!(
            select(Some("Zagreb"), Some(2022), Some("TRAVE"), Some(5)).stage(),
            Stage::Ready
        );
    }

    #[test]
    fn test_later_values_ignored_when_earlier_missing() {
        let selection = select(None, Some(2022), Some("TRAVE"), Some(5));
        assert_eq!(selection.stage(), Stage::City);
        assert_eq!(selection.key(), None);
    }

    #[test]
    fn test_next_options_filters_by_earlier_choices() {
        let catalog = catalog();
        assert_eq!(
            next_options(&catalog, &Selection::default()),
            StageOptions::City(vec!["Zagreb".to_string(), "Pula".to_string()])
        );
        assert_eq!(
            next_options(&catalog, &select(Some("Pula"), None, None, None)),
            StageOptions::Year(vec![2023])
        );
        assert_eq!(
            next_options(&catalog, &select(Some("Zagreb"), Some(2022), None, None)),
            StageOptions::Plant(vec!["AMBROZIJA".to_string(), "TRAVE".to_string()])
        );
        assert_eq!(
            next_options(&catalog, &select(Some("Zagreb"), Some(2022), Some("TRAVE"), None)),
            StageOptions::Month(vec![5, 6])
        );
        assert_eq!(
            next_options(&catalog, &select(Some("Zagreb"), Some(2022), Some("TRAVE"), Some(5))),
            StageOptions::Ready
        );
    }

    #[test]
    fn test_stage_options_json_shape() {
        let json = serde_json::to_value(StageOptions::Month(vec![5, 6])).unwrap();
        assert_eq!(json, serde_json::json!({ "stage": "month", "options": [5, 6] }));

        let json = serde_json::to_value(StageOptions::Ready).unwrap();
        assert_eq!(json, serde_json::json!({ "stage": "ready" }));
    }

    #[test]
    fn test_key_for_complete_selection() {
        let selection = select(Some("Zagreb"), Some(2022), Some("AMBROZIJA"), Some(9));
        assert_eq!(
            selection.key(),
            Some(ObservationKey::new("Zagreb", "AMBROZIJA", 2022, 9))
        );
    }
}
