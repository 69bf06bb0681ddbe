use std::path::Path;

use anyhow::Context;

use crate::catalog::RosterRow;
use crate::models::RawPost;

/// Read the team list (`TEAM` column).
pub fn read_teams(path: &Path) -> anyhow::Result<Vec<String>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        #[serde(rename = "TEAM")]
        team: String,
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open team list {}", path.display()))?;
    let mut teams = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        let row = result.with_context(|| format!("malformed team row in {}", path.display()))?;
        teams.push(row.team);
    }
    Ok(teams)
}

/// Read roster rows (`TEAM,PLAYER` columns).
pub fn read_rosters(path: &Path) -> anyhow::Result<Vec<RosterRow>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        #[serde(rename = "TEAM")]
        team: String,
        #[serde(rename = "PLAYER")]
        player: String,
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open rosters {}", path.display()))?;
    let mut rows = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        let row = result.with_context(|| format!("malformed roster row in {}", path.display()))?;
        rows.push(RosterRow {
            team: row.team,
            player: row.player,
        });
    }
    Ok(rows)
}

/// Read the post corpus (`Body,ID,TEAM A,TEAM B` and optional `Label`).
/// Order is preserved; two classifier runs over the same file see the same
/// ordered corpus.
pub fn read_posts(path: &Path) -> anyhow::Result<Vec<RawPost>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open posts {}", path.display()))?;
    let mut posts = Vec::new();
    for result in reader.deserialize::<RawPost>() {
        let post = result.with_context(|| format!("malformed post row in {}", path.display()))?;
        posts.push(post);
    }
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("matchday-ingest-{name}-{}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_posts_with_and_without_labels() {
        let path = write_temp(
            "posts",
            "Body,ID,TEAM A,TEAM B,Label\ngo hawks,g1,hawks,eagles,pos\nrough night,g1,hawks,eagles,\n",
        );
        let posts = read_posts(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].label.as_deref(), Some("pos"));
        // csv maps an empty field to None for Option fields.
        assert_eq!(posts[1].label, None);
        assert_eq!(posts[1].team_b, "eagles");
    }

    #[test]
    fn reads_teams_and_rosters() {
        let teams_path = write_temp("teams", "TEAM\nHawks\nEagles\n");
        let rosters_path = write_temp("rosters", "TEAM,PLAYER\nHawks,John Smith\n");

        let teams = read_teams(&teams_path).unwrap();
        let rosters = read_rosters(&rosters_path).unwrap();
        std::fs::remove_file(&teams_path).ok();
        std::fs::remove_file(&rosters_path).ok();

        assert_eq!(teams, vec!["Hawks".to_string(), "Eagles".to_string()]);
        assert_eq!(rosters.len(), 1);
        assert_eq!(rosters[0].player, "John Smith");
    }

    #[test]
    fn missing_required_columns_fail() {
        let path = write_temp("bad", "Body,ID\nhello,g1\n");
        assert!(read_posts(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
