// Chart domain models
use super::observation::Observation;
use serde::Serialize;

pub const DATE_AXIS_LABEL: &str = "Datum";
pub const LEVEL_AXIS_LABEL: &str = "Razina peludi";
pub const NO_DATA_MESSAGE: &str = "Nema dostupnih podataka za odabrane parametre.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
}

/// Everything the page needs to draw a chart: dates on x, pollen levels on y.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

impl ChartSpec {
    pub fn bar(observations: Vec<Observation>) -> Self {
        let (y, x) = observations.into_iter().map(|o| (o.level, o.date)).unzip();
        Self {
            kind: ChartKind::Bar,
            x_label: DATE_AXIS_LABEL.to_string(),
            y_label: LEVEL_AXIS_LABEL.to_string(),
            x,
            y,
        }
    }

    pub fn empty() -> Self {
        Self::bar(Vec::new())
    }
}

/// Outcome of resolving a selection: a chart, or a message explaining why there is none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Rendering {
    Chart { chart: ChartSpec },
    NoData { message: String },
}

impl Rendering {
    pub fn chart(chart: ChartSpec) -> Self {
        Rendering::Chart { chart }
    }

    pub fn no_data() -> Self {
        Rendering::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }
    }
}
