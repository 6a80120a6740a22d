// Parser for whitespace-separated observation files (level, date)
use crate::domain::observation::Observation;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("file contains no rows")]
    Empty,
    #[error("line {line} has {found} column(s), expected at least 2")]
    TooFewColumns { line: usize, found: usize },
    #[error("line {line} has a non-numeric or non-finite pollen level `{value}`")]
    InvalidLevel { line: usize, value: String },
}

/// Parse observation rows. Blank lines are skipped and columns past the date are ignored.
pub fn parse_observations(content: &str) -> Result<Vec<Observation>, ParseError> {
    let mut observations = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [level, date, ..] => {
                let level = level
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ParseError::InvalidLevel {
                        line,
                        value: level.to_string(),
                    })?;
                observations.push(Observation::new(level, date.to_string()));
            }
            [_] => return Err(ParseError::TooFewColumns { line, found: 1 }),
        }
    }

    if observations.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(observations)
}
