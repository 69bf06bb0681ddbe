use std::path::Path;

use anyhow::Context;

use crate::models::{ComparisonRow, EntityKind, EntitySummary};

/// Write an entity summary table. Column order is fixed:
/// `Team|Player,Pos,Neg,PPerc,NPerc`.
pub fn write_entity_table(
    path: &Path,
    kind: EntityKind,
    rows: &[EntitySummary],
) -> anyhow::Result<()> {
    let entity_header = match kind {
        EntityKind::Team => "Team",
        EntityKind::Player => "Player",
    };

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record([entity_header, "Pos", "Neg", "PPerc", "NPerc"])?;
    for row in rows {
        writer.write_record([
            row.entity.as_str(),
            &row.pos_count.to_string(),
            &row.neg_count.to_string(),
            &format!("{:.2}", row.pos_pct),
            &format!("{:.2}", row.neg_pct),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Read a summary table back, accepting either entity header.
pub fn read_entity_table(path: &Path) -> anyhow::Result<Vec<EntitySummary>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.with_context(|| format!("malformed row in {}", path.display()))?;
        rows.push(EntitySummary {
            entity: field(&record, 0, path)?.to_string(),
            pos_count: field(&record, 1, path)?.parse().context("Pos column")?,
            neg_count: field(&record, 2, path)?.parse().context("Neg column")?,
            pos_pct: field(&record, 3, path)?.parse().context("PPerc column")?,
            neg_pct: field(&record, 4, path)?.parse().context("NPerc column")?,
        });
    }
    Ok(rows)
}

fn field<'a>(record: &'a csv::StringRecord, i: usize, path: &Path) -> anyhow::Result<&'a str> {
    record
        .get(i)
        .ok_or_else(|| anyhow::anyhow!("missing column {i} in {}", path.display()))
}

/// Write the side-by-side classifier comparison. The first two headers carry
/// the classifier identities of the two runs.
pub fn write_comparison(
    path: &Path,
    left_name: &str,
    right_name: &str,
    rows: &[ComparisonRow],
) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record([left_name, right_name, "Post"])?;
    for row in rows {
        writer.write_record([row.label_a.as_str(), row.label_b.as_str(), row.post.as_str()])?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
