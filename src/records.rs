// src/records.rs
//! Contest records as handed over by the fetch stage.
//!
//! The fetch stage writes a JSON array of objects shaped like
//! `{"date", "home_team", "away_team", "score_home", "score_away"}`. Scores
//! arrive as numbers, numeric strings, empty strings (game not played yet)
//! or `null`, so they are kept raw here and interpreted by the builder.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BeatpathError, Result};

/// A score exactly as it appeared in the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScore {
    Number(f64),
    Text(String),
    /// Any other JSON value (`true`, objects, arrays). Never usable.
    Other(serde_json::Value),
}

impl RawScore {
    /// Empty text or a numeric zero. A textual `"0"` is not falsy.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0.0,
            Self::Text(s) => s.is_empty(),
            Self::Other(_) => false,
        }
    }

    /// True when the score carries nothing at all (empty text).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    /// The finite numeric value, if the score has one.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawScore {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawScore {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One head-to-head result between a home and an away competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestRecord {
    pub date: String,
    #[serde(rename = "home_team")]
    pub home: String,
    #[serde(rename = "away_team")]
    pub away: String,
    #[serde(rename = "score_home", default)]
    pub home_score: Option<RawScore>,
    #[serde(rename = "score_away", default)]
    pub away_score: Option<RawScore>,
}

impl ContestRecord {
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        home: impl Into<String>,
        away: impl Into<String>,
        home_score: Option<f64>,
        away_score: Option<f64>,
    ) -> Self {
        Self {
            date: date.into(),
            home: home.into(),
            away: away.into(),
            home_score: home_score.map(RawScore::Number),
            away_score: away_score.map(RawScore::Number),
        }
    }
}

/// Parses a records document.
///
/// # Errors
/// Returns the serde error if the document is not an array of records.
pub fn parse(json: &str) -> serde_json::Result<Vec<ContestRecord>> {
    serde_json::from_str(json)
}

/// Reads and parses a records file.
///
/// # Errors
/// Returns error if the file cannot be read or is not a records document.
pub fn load(path: &Path) -> Result<Vec<ContestRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| BeatpathError::io(e, path))?;
    let records = parse(&contents).map_err(|e| BeatpathError::json(e, path))?;
    tracing::debug!(count = records.len(), path = %path.display(), "loaded contest records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_score_shape() {
        let json = r#"[
            {"date": "2023/11/06", "home_team": "Duke", "away_team": "Army",
             "score_home": "78", "score_away": 62},
            {"date": "2023/11/07", "home_team": "Iona", "away_team": "Yale",
             "score_home": "", "score_away": null},
            {"date": "2023/11/08", "home_team": "Navy", "away_team": "Penn"}
        ]"#;
        let records = parse(json).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].home, "Duke");
        assert_eq!(records[0].home_score, Some(RawScore::Text("78".into())));
        assert_eq!(records[0].away_score, Some(RawScore::Number(62.0)));
        assert_eq!(records[1].home_score, Some(RawScore::Text(String::new())));
        assert_eq!(records[1].away_score, None);
        assert_eq!(records[2].home_score, None);
    }

    #[test]
    fn falsy_matches_legacy_truthiness() {
        assert!(RawScore::Number(0.0).is_falsy());
        assert!(RawScore::Text(String::new()).is_falsy());
        assert!(!RawScore::Text("0".into()).is_falsy());
        assert!(!RawScore::Number(71.0).is_falsy());
    }

    #[test]
    fn value_rejects_garbage_and_non_finite() {
        assert_eq!(RawScore::from(" 64 ").value(), Some(64.0));
        assert_eq!(RawScore::from("0").value(), Some(0.0));
        assert_eq!(RawScore::from("final").value(), None);
        assert_eq!(RawScore::from("NaN").value(), None);
        assert_eq!(RawScore::from("").value(), None);
    }

    #[test]
    fn odd_score_types_do_not_reject_the_document() {
        let json = r#"[
            {"date": "d1", "home_team": "A", "away_team": "B",
             "score_home": true, "score_away": 3},
            {"date": "d2", "home_team": "C", "away_team": "D",
             "score_home": {"q1": 20}, "score_away": [61]},
            {"date": "d3", "home_team": "A", "away_team": "C",
             "score_home": 70, "score_away": 65}
        ]"#;
        let records = parse(json).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0].home_score,
            Some(RawScore::Other(serde_json::Value::Bool(true)))
        );
        assert_eq!(records[0].home_score.as_ref().and_then(RawScore::value), None);
        assert!(!records[1].away_score.as_ref().is_some_and(RawScore::is_falsy));
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let err = load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
