use std::fmt::Write;

use crate::aggregate::{self, RankBy};
use crate::models::{EntityKind, EntitySummary};

const RANK_SECTIONS: [(RankBy, &str); 4] = [
    (RankBy::Pos, "Most positive mentions"),
    (RankBy::Neg, "Most negative mentions"),
    (RankBy::Pperc, "Highest positive share"),
    (RankBy::Nperc, "Highest negative share"),
];

/// Render one top-n block for the console, one line per entity. Rejected
/// over-cap requests and empty tables read differently.
pub fn render_top(rows: &[EntitySummary], kind: EntityKind, rank_by: RankBy, n: usize) -> String {
    let mut output = String::new();

    let cap = aggregate::rank_cap(kind);
    if n > cap {
        let _ = writeln!(output, "Requested {n} rows but the cap is {cap}; request rejected.");
        return output;
    }

    let ranked = aggregate::top_n(rows, kind, rank_by, n);
    if ranked.is_empty() {
        let _ = writeln!(output, "No entities to rank.");
        return output;
    }

    for row in ranked.iter() {
        let _ = writeln!(
            output,
            "- {}: {} pos / {} neg ({:.2} / {:.2})",
            row.entity, row.pos_count, row.neg_count, row.pos_pct, row.neg_pct
        );
    }
    output
}

pub fn build_report(
    classifier_name: &str,
    generated_on: chrono::NaiveDate,
    team_summaries: &[EntitySummary],
    player_summaries: &[EntitySummary],
    n: usize,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Matchday Sentiment Report");
    let _ = writeln!(
        output,
        "Classifier: {} (generated {})",
        classifier_name, generated_on
    );

    for (kind, heading, summaries) in [
        (EntityKind::Team, "Teams", team_summaries),
        (EntityKind::Player, "Players", player_summaries),
    ] {
        let _ = writeln!(output);
        let _ = writeln!(output, "## {heading}");

        if summaries.is_empty() {
            let _ = writeln!(output, "No attributed mentions in this corpus.");
            continue;
        }

        for (rank_by, title) in RANK_SECTIONS {
            let _ = writeln!(output);
            let _ = writeln!(output, "### {title}");
            output.push_str(&render_top(summaries, kind, rank_by, n));
        }
    }

    output
}
