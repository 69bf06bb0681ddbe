use serde::Deserialize;

use crate::error::DataError;

/// Two-valued sentiment polarity produced by a classifier run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Pos,
    Neg,
}

impl Polarity {
    /// Case-insensitive parse of the two-valued label domain.
    pub fn parse(value: &str) -> Result<Self, DataError> {
        match value.trim().to_lowercase().as_str() {
            "pos" => Ok(Polarity::Pos),
            "neg" => Ok(Polarity::Neg),
            _ => Err(DataError::InvalidLabel {
                value: value.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Pos => "pos",
            Polarity::Neg => "neg",
        }
    }
}

/// A post as supplied by the ingestion side, before cleaning.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    #[serde(rename = "Body")]
    pub body: String,
    #[serde(rename = "ID")]
    pub game_id: String,
    #[serde(rename = "TEAM A")]
    pub team_a: String,
    #[serde(rename = "TEAM B")]
    pub team_b: String,
    #[serde(rename = "Label", default)]
    pub label: Option<String>,
}

/// A post after normalization and scoring. Immutable for the rest of a run.
#[derive(Debug, Clone)]
pub struct ScoredPost {
    pub body: String,
    pub game_id: String,
    pub team_a: String,
    pub team_b: String,
    pub label: Polarity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Team,
    Player,
}

/// One post attributed to one entity within a team's scan.
#[derive(Debug, Clone)]
pub struct AttributionRecord {
    pub target: String,
    pub team: String,
    pub post_body: String,
    /// Distinct labels observed for this body, in observation order. A body
    /// normally carries one label; duplicates scored differently carry all.
    pub labels: Vec<Polarity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntitySummary {
    pub entity: String,
    pub pos_count: usize,
    pub neg_count: usize,
    pub pos_pct: f64,
    pub neg_pct: f64,
}

/// One positional pairing of two classifier runs over the same corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label_a: String,
    pub label_b: String,
    pub post: String,
}
