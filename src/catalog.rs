use crate::error::ConfigError;

/// A roster row as read from reference data: one player on one team.
#[derive(Debug, Clone)]
pub struct RosterRow {
    pub team: String,
    pub player: String,
}

#[derive(Debug, Clone)]
pub struct PlayerEntry {
    pub full_name: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TeamEntry {
    pub name: String,
    pub tokens: Vec<String>,
    pub roster: Vec<PlayerEntry>,
}

/// Teams and rosters, lowercased and tokenized once at build time.
/// Read-only shared state for the remainder of a run.
#[derive(Debug, Clone)]
pub struct Catalog {
    teams: Vec<TeamEntry>,
}

impl Catalog {
    /// Build the catalog from reference data. Any inconsistency is fatal:
    /// a partial catalog must never reach the matcher.
    pub fn build(team_names: &[String], roster_rows: &[RosterRow]) -> Result<Self, ConfigError> {
        if team_names.is_empty() {
            return Err(ConfigError::NoTeams);
        }

        let mut teams: Vec<TeamEntry> = team_names
            .iter()
            .map(|name| {
                let name = name.trim().to_lowercase();
                TeamEntry {
                    tokens: tokenize(&name),
                    name,
                    roster: Vec::new(),
                }
            })
            .collect();

        for row in roster_rows {
            let team = row.team.trim().to_lowercase();
            let player = row.player.trim().to_lowercase();
            let entry = teams
                .iter_mut()
                .find(|t| t.name == team)
                .ok_or_else(|| ConfigError::UnknownRosterTeam {
                    team: team.clone(),
                    player: player.clone(),
                })?;
            entry.roster.push(PlayerEntry {
                tokens: tokenize(&player),
                full_name: player,
            });
        }

        for team in &teams {
            if team.roster.is_empty() {
                return Err(ConfigError::EmptyRoster {
                    team: team.name.clone(),
                });
            }
        }

        Ok(Catalog { teams })
    }

    pub fn teams(&self) -> &[TeamEntry] {
        &self.teams
    }

    pub fn player_count(&self) -> usize {
        self.teams.iter().map(|t| t.roster.len()).sum()
    }
}

fn tokenize(name: &str) -> Vec<String> {
    name.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<RosterRow> {
        pairs
            .iter()
            .map(|(team, player)| RosterRow {
                team: team.to_string(),
                player: player.to_string(),
            })
            .collect()
    }

    #[test]
    fn lowercases_and_tokenizes_names_once() {
        let catalog = Catalog::build(
            &["Hawks".to_string()],
            &rows(&[("Hawks", "John Smith"), ("hawks", "Al Jones")]),
        )
        .unwrap();

        let team = &catalog.teams()[0];
        assert_eq!(team.name, "hawks");
        assert_eq!(team.tokens, vec!["hawks"]);
        assert_eq!(team.roster.len(), 2);
        assert_eq!(team.roster[0].full_name, "john smith");
        assert_eq!(team.roster[0].tokens, vec!["john", "smith"]);
    }

    #[test]
    fn rejects_roster_rows_for_unknown_teams() {
        let err = Catalog::build(
            &["hawks".to_string()],
            &rows(&[("hawks", "john smith"), ("eagles", "ed brown")]),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::UnknownRosterTeam {
                team: "eagles".to_string(),
                player: "ed brown".to_string(),
            }
        );
    }

    #[test]
    fn rejects_teams_without_players() {
        let err = Catalog::build(
            &["hawks".to_string(), "eagles".to_string()],
            &rows(&[("hawks", "john smith")]),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::EmptyRoster {
                team: "eagles".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_team_list() {
        assert_eq!(Catalog::build(&[], &[]).unwrap_err(), ConfigError::NoTeams);
    }
}
