// Plant domain model
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Plants the pollen monitoring network reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Plant {
    PitomiKesten,
    Koprive,
    Bor,
    Trave,
    Lipa,
    Trputac,
    Maslina,
    HrastCrnika,
    Crkvina,
    Cempresi,
    Ambrozija,
    Hrast,
    Loboda,
    HrastSp,
    Pelin,
}

impl Plant {
    pub const ALL: [Plant; 15] = [
        Plant::PitomiKesten,
        Plant::Koprive,
        Plant::Bor,
        Plant::Trave,
        Plant::Lipa,
        Plant::Trputac,
        Plant::Maslina,
        Plant::HrastCrnika,
        Plant::Crkvina,
        Plant::Cempresi,
        Plant::Ambrozija,
        Plant::Hrast,
        Plant::Loboda,
        Plant::HrastSp,
        Plant::Pelin,
    ];

    /// Token used for this plant in observation file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Plant::PitomiKesten => "PITOMI_KESTEN",
            Plant::Koprive => "KOPRIVE",
            Plant::Bor => "BOR",
            Plant::Trave => "TRAVE",
            Plant::Lipa => "LIPA",
            Plant::Trputac => "TRPUTAC",
            Plant::Maslina => "MASLINA",
            Plant::HrastCrnika => "HRAST_CRNIKA",
            Plant::Crkvina => "CRKVINA",
            Plant::Cempresi => "CEMPRESI",
            Plant::Ambrozija => "AMBROZIJA",
            Plant::Hrast => "HRAST",
            Plant::Loboda => "LOBODA",
            Plant::HrastSp => "HRAST_SP",
            Plant::Pelin => "PELIN",
        }
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plant `{0}`")]
pub struct UnknownPlant(pub String);

impl FromStr for Plant {
    type Err = UnknownPlant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plant::ALL
            .iter()
            .copied()
            .find(|plant| plant.as_str() == s)
            .ok_or_else(|| UnknownPlant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for plant in Plant::ALL {
            assert_eq!(plant.as_str().parse::<Plant>(), Ok(plant));
        }
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(
            "Ambrozija".parse::<Plant>(),
            Err(UnknownPlant("Ambrozija".to_string()))
        );
    }

    #[test]
    fn test_serializes_as_file_token() {
        let json = serde_json::to_string(&Plant::HrastCrnika).unwrap();
        assert_eq!(json, "\"HRAST_CRNIKA\"");
    }
}
