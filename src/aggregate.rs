use clap::ValueEnum;

use crate::error::DivisionError;
use crate::models::{AttributionRecord, EntityKind, EntitySummary, Polarity};

/// Ranking requests above these caps are rejected outright, not clamped.
pub const MAX_TEAM_RANKS: usize = 20;
pub const MAX_PLAYER_RANKS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankBy {
    /// Raw positive count.
    Pos,
    /// Raw negative count.
    Neg,
    /// Positive percentage.
    Pperc,
    /// Negative percentage.
    Nperc,
}

/// Tally one entity's records into a summary row. Zero records yield `None`:
/// an entity nobody mentioned is omitted from the table, not zero-filled.
///
/// A record counts once, by its first observed label, so the row total always
/// equals the record count even for degenerate multi-label bodies.
pub fn summarize(entity: &str, records: &[&AttributionRecord]) -> Option<EntitySummary> {
    if records.is_empty() {
        return None;
    }

    let mut pos_count = 0usize;
    let mut neg_count = 0usize;
    for record in records {
        match record.labels.first() {
            Some(Polarity::Pos) => pos_count += 1,
            Some(Polarity::Neg) => neg_count += 1,
            None => {
                // The pipeline indexes a label for every candidate body, so
                // a label-less record means attribution and scoring diverged.
                debug_assert!(
                    false,
                    "attribution record for '{entity}' carries no labels"
                );
                tracing::error!(entity, body = %record.post_body, "label-less attribution record");
            }
        }
    }

    let (pos_pct, neg_pct) = percentages(entity, pos_count, neg_count).ok()?;
    Some(EntitySummary {
        entity: entity.to_string(),
        pos_count,
        neg_count,
        pos_pct,
        neg_pct,
    })
}

/// Percentage math behind the zero-record guard. Exact 1.0/0.0 when only one
/// class was observed; otherwise the positive share rounds to two decimals
/// and the negative share is its complement, so the pair always sums to 1.0
/// even at half-fraction boundaries.
pub fn percentages(
    entity: &str,
    pos_count: usize,
    neg_count: usize,
) -> Result<(f64, f64), DivisionError> {
    let total = pos_count + neg_count;
    if total == 0 {
        return Err(DivisionError {
            entity: entity.to_string(),
        });
    }

    if neg_count == 0 {
        Ok((1.0, 0.0))
    } else if pos_count == 0 {
        Ok((0.0, 1.0))
    } else {
        let pos_pct = round2(pos_count as f64 / total as f64);
        Ok((pos_pct, round2(1.0 - pos_pct)))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn rank_cap(kind: EntityKind) -> usize {
    match kind {
        EntityKind::Team => MAX_TEAM_RANKS,
        EntityKind::Player => MAX_PLAYER_RANKS,
    }
}

/// The `n` largest rows by the chosen column, descending. Requests above the
/// per-kind cap return an empty result.
pub fn top_n(
    rows: &[EntitySummary],
    kind: EntityKind,
    rank_by: RankBy,
    n: usize,
) -> Vec<EntitySummary> {
    let cap = rank_cap(kind);
    if n > cap {
        tracing::warn!(n, cap, "top-n request above cap rejected");
        return Vec::new();
    }

    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        rank_key(b, rank_by)
            .partial_cmp(&rank_key(a, rank_by))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

fn rank_key(row: &EntitySummary, rank_by: RankBy) -> f64 {
    match rank_by {
        RankBy::Pos => row.pos_count as f64,
        RankBy::Neg => row.neg_count as f64,
        RankBy::Pperc => row.pos_pct,
        RankBy::Nperc => row.neg_pct,
    }
}
