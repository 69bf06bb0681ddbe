use thiserror::Error;

/// Malformed reference data (teams / rosters). Always fatal: a partial
/// catalog must never be used for matching.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("team list is empty")]
    NoTeams,

    #[error("roster references unknown team '{team}' (player '{player}')")]
    UnknownRosterTeam { team: String, player: String },

    #[error("team '{team}' has an empty roster")]
    EmptyRoster { team: String },
}

/// Malformed corpus data or an out-of-domain classifier label.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DataError {
    #[error("sentiment label '{value}' is outside the pos/neg domain")]
    InvalidLabel { value: String },

    #[error("comparison inputs are misaligned: {left} left labels, {right} right labels, {posts} posts")]
    MisalignedComparison {
        left: usize,
        right: usize,
        posts: usize,
    },
}

/// Aggregation attempted percentage math over zero records. Callers guard
/// this case by omitting the entity; the error exists for the unguarded path.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("cannot compute sentiment percentages for '{entity}': no records")]
pub struct DivisionError {
    pub entity: String,
}
