use std::collections::HashSet;

use anyhow::Result;
use tracing::{debug, info};

use crate::aggregate;
use crate::catalog::Catalog;
use crate::classifier::Classifier;
use crate::matcher::{self, LabelIndex};
use crate::models::{AttributionRecord, EntitySummary, Polarity, RawPost, ScoredPost};
use crate::normalize;

pub struct AnalysisOutput {
    pub scored: Vec<ScoredPost>,
    pub records: Vec<AttributionRecord>,
    pub team_summaries: Vec<EntitySummary>,
    pub player_summaries: Vec<EntitySummary>,
}

/// Normalize and score a raw corpus, preserving input order. Drops are
/// expected (deleted posts, empty bodies), so they are filtered silently; an
/// out-of-domain precomputed label is a data error and aborts the run.
pub fn score_corpus(raw_posts: &[RawPost], classifier: &dyn Classifier) -> Result<Vec<ScoredPost>> {
    let mut scored = Vec::new();
    for raw in raw_posts {
        let Some(body) = normalize::normalize(&raw.body) else {
            continue;
        };
        let label = match &raw.label {
            Some(value) => Polarity::parse(value)?,
            None => classifier.score(&body),
        };
        scored.push(ScoredPost {
            body,
            game_id: raw.game_id.clone(),
            team_a: raw.team_a.trim().to_lowercase(),
            team_b: raw.team_b.trim().to_lowercase(),
            label,
        });
    }
    info!(
        raw = raw_posts.len(),
        kept = scored.len(),
        classifier = classifier.name(),
        "corpus normalized and scored"
    );
    Ok(scored)
}

/// Full batch run: normalize + score, match per team, aggregate per entity.
/// Single threaded; the catalog is read-only throughout and each team's scan
/// owns its claimed set.
pub fn run(
    raw_posts: &[RawPost],
    catalog: &Catalog,
    classifier: &dyn Classifier,
) -> Result<AnalysisOutput> {
    let scored = score_corpus(raw_posts, classifier)?;
    let labels = label_index(&scored);

    let mut records = Vec::new();
    for team in catalog.teams() {
        let candidates = matcher::candidate_posts(team, &scored);
        let team_records = matcher::match_team(team, &candidates, &labels);
        debug!(
            team = %team.name,
            candidates = candidates.len(),
            attributed = team_records.len(),
            "team scan complete"
        );
        records.extend(team_records);
    }

    let team_summaries: Vec<EntitySummary> = catalog
        .teams()
        .iter()
        .filter_map(|team| summarize_entity(&records, &team.name))
        .collect();

    let mut seen_players = HashSet::new();
    let mut player_summaries = Vec::new();
    for team in catalog.teams() {
        for player in &team.roster {
            if !seen_players.insert(player.full_name.as_str()) {
                continue;
            }
            if let Some(summary) = summarize_entity(&records, &player.full_name) {
                player_summaries.push(summary);
            }
        }
    }

    info!(
        records = records.len(),
        teams = team_summaries.len(),
        players = player_summaries.len(),
        "attribution and aggregation complete"
    );

    Ok(AnalysisOutput {
        scored,
        records,
        team_summaries,
        player_summaries,
    })
}

/// Run two classifiers over the identical ordered corpus and pair their
/// labels positionally. Normalization (and its drops) happens once, so the
/// two label sequences are aligned by construction; precomputed labels are
/// ignored here because the point is to compare the scorers themselves.
pub fn compare_classifiers(
    raw_posts: &[RawPost],
    left: &dyn Classifier,
    right: &dyn Classifier,
) -> Result<Vec<crate::models::ComparisonRow>> {
    let mut bodies = Vec::new();
    let mut left_labels = Vec::new();
    let mut right_labels = Vec::new();
    for raw in raw_posts {
        let Some(body) = normalize::normalize(&raw.body) else {
            continue;
        };
        left_labels.push(left.render(left.score(&body)).to_string());
        right_labels.push(right.render(right.score(&body)).to_string());
        bodies.push(body);
    }
    info!(
        posts = bodies.len(),
        left = left.name(),
        right = right.name(),
        "classifier comparison built"
    );
    Ok(crate::compare::pair(&left_labels, &right_labels, &bodies)?)
}

fn summarize_entity(records: &[AttributionRecord], entity: &str) -> Option<EntitySummary> {
    let targeted: Vec<&AttributionRecord> =
        records.iter().filter(|r| r.target == entity).collect();
    aggregate::summarize(entity, &targeted)
}

/// Distinct labels per body, observation order. Duplicate bodies scored the
/// same collapse to one label; scored differently, they keep both.
fn label_index(scored: &[ScoredPost]) -> LabelIndex {
    let mut index = LabelIndex::new();
    for post in scored {
        let labels = index.entry(post.body.clone()).or_default();
        if !labels.contains(&post.label) {
            labels.push(post.label);
        }
    }
    index
}
