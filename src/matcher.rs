use std::collections::{HashMap, HashSet};

use crate::catalog::TeamEntry;
use crate::models::{AttributionRecord, Polarity, ScoredPost};

/// Name fragments that are also common English words. A hit on one of these
/// alone never counts as a mention.
pub const STOPLIST: &[&str] = &["al", "ed"];

/// Distinct labels observed per post body across the corpus.
pub type LabelIndex = HashMap<String, Vec<Polarity>>;

/// Unique post bodies (first-seen order) belonging to games this team played.
pub fn candidate_posts(team: &TeamEntry, posts: &[ScoredPost]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for post in posts {
        if post.team_a == team.name || post.team_b == team.name {
            if seen.insert(post.body.as_str()) {
                candidates.push(post.body.clone());
            }
        }
    }
    candidates
}

/// Scan one team's candidate posts against its roster, then the team name
/// itself. First-come-first-served: the first entity whose token hits an
/// unclaimed post claims it, and the claimed set suppresses every later hit
/// within this scan. The claimed set is owned by this call; the same body may
/// be claimed again in another team's scan.
///
/// Matching is substring, not word-boundary. That tolerates casual text at a
/// known precision cost, partially mitigated by the stoplist; changing it
/// would change output.
pub fn match_team(
    team: &TeamEntry,
    candidates: &[String],
    labels: &LabelIndex,
) -> Vec<AttributionRecord> {
    let mut records = Vec::new();
    let mut claimed: HashSet<&str> = HashSet::new();

    for post in candidates {
        for player in &team.roster {
            for token in &player.tokens {
                if STOPLIST.contains(&token.as_str()) {
                    continue;
                }
                if post.contains(token.as_str()) && !claimed.contains(post.as_str()) {
                    claimed.insert(post.as_str());
                    records.push(AttributionRecord {
                        target: player.full_name.clone(),
                        team: team.name.clone(),
                        post_body: post.clone(),
                        labels: labels.get(post).cloned().unwrap_or_default(),
                    });
                }
            }
        }

        for token in &team.tokens {
            if post.contains(token.as_str()) && !claimed.contains(post.as_str()) {
                claimed.insert(post.as_str());
                records.push(AttributionRecord {
                    target: team.name.clone(),
                    team: team.name.clone(),
                    post_body: post.clone(),
                    labels: labels.get(post).cloned().unwrap_or_default(),
                });
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, RosterRow};

    fn hawks_catalog() -> Catalog {
        Catalog::build(
            &["hawks".to_string()],
            &[
                RosterRow {
                    team: "hawks".to_string(),
                    player: "john smith".to_string(),
                },
                RosterRow {
                    team: "hawks".to_string(),
                    player: "al green".to_string(),
                },
            ],
        )
        .unwrap()
    }

    fn index(entries: &[(&str, &[Polarity])]) -> LabelIndex {
        entries
            .iter()
            .map(|(body, labels)| (body.to_string(), labels.to_vec()))
            .collect()
    }

    #[test]
    fn player_token_claims_post_before_team_name() {
        let catalog = hawks_catalog();
        let team = &catalog.teams()[0];
        let candidates = vec!["great game by smith tonight go hawks".to_string()];
        let labels = index(&[("great game by smith tonight go hawks", &[Polarity::Pos])]);

        let records = match_team(team, &candidates, &labels);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target, "john smith");
        assert_eq!(records[0].team, "hawks");
        assert_eq!(records[0].labels, vec![Polarity::Pos]);
    }

    #[test]
    fn team_name_claims_post_no_player_matched() {
        let catalog = hawks_catalog();
        let team = &catalog.teams()[0];
        let candidates = vec!["go hawks".to_string()];
        let labels = index(&[("go hawks", &[Polarity::Pos])]);

        let records = match_team(team, &candidates, &labels);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target, "hawks");
    }

    #[test]
    fn a_post_is_claimed_at_most_once_per_scan() {
        let catalog = Catalog::build(
            &["hawks".to_string()],
            &[
                RosterRow {
                    team: "hawks".to_string(),
                    player: "john smith".to_string(),
                },
                RosterRow {
                    team: "hawks".to_string(),
                    player: "mike jones".to_string(),
                },
            ],
        )
        .unwrap();
        let team = &catalog.teams()[0];
        let candidates = vec!["smith to jones what a play hawks".to_string()];
        let labels = index(&[("smith to jones what a play hawks", &[Polarity::Pos])]);

        let records = match_team(team, &candidates, &labels);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target, "john smith");
    }

    #[test]
    fn stoplisted_tokens_never_trigger_a_match() {
        let catalog = hawks_catalog();
        let team = &catalog.teams()[0];
        // "al" appears but only as the stoplisted token; "green" does not.
        let candidates = vec!["al was everywhere tonight".to_string()];
        let labels = index(&[("al was everywhere tonight", &[Polarity::Neg])]);

        let records = match_team(team, &candidates, &labels);
        assert!(records.is_empty());
    }

    #[test]
    fn stoplist_does_not_block_the_players_other_tokens() {
        let catalog = hawks_catalog();
        let team = &catalog.teams()[0];
        let candidates = vec!["green locked it down".to_string()];
        let labels = index(&[("green locked it down", &[Polarity::Pos])]);

        let records = match_team(team, &candidates, &labels);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target, "al green");
    }

    #[test]
    fn candidates_are_unique_bodies_for_the_teams_games() {
        let posts = vec![
            ScoredPost {
                body: "go hawks".to_string(),
                game_id: "g1".to_string(),
                team_a: "hawks".to_string(),
                team_b: "eagles".to_string(),
                label: Polarity::Pos,
            },
            ScoredPost {
                body: "go hawks".to_string(),
                game_id: "g2".to_string(),
                team_a: "owls".to_string(),
                team_b: "hawks".to_string(),
                label: Polarity::Pos,
            },
            ScoredPost {
                body: "eagles all the way".to_string(),
                game_id: "g3".to_string(),
                team_a: "eagles".to_string(),
                team_b: "owls".to_string(),
                label: Polarity::Pos,
            },
        ];
        let catalog = hawks_catalog();
        let team = &catalog.teams()[0];

        let candidates = candidate_posts(team, &posts);
        assert_eq!(candidates, vec!["go hawks".to_string()]);
    }

    #[test]
    fn degenerate_bodies_carry_all_distinct_labels() {
        let catalog = hawks_catalog();
        let team = &catalog.teams()[0];
        let candidates = vec!["smith again".to_string()];
        let labels = index(&[("smith again", &[Polarity::Pos, Polarity::Neg])]);

        let records = match_team(team, &candidates, &labels);
        assert_eq!(records[0].labels, vec![Polarity::Pos, Polarity::Neg]);
    }
}
