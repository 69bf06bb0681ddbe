use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod aggregate;
mod catalog;
mod classifier;
mod compare;
mod error;
mod export;
mod ingest;
mod matcher;
mod models;
mod normalize;
mod pipeline;
mod report;

use classifier::{Classifier, CompoundLexicon, MeanPolarityLexicon};
use models::EntityKind;

#[derive(Parser)]
#[command(name = "matchday-sentiment")]
#[command(about = "Attribute game-thread sentiment to teams and players", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ClassifierChoice {
    Compound,
    Polarity,
}

impl ClassifierChoice {
    fn build(self) -> Box<dyn Classifier> {
        match self {
            ClassifierChoice::Compound => Box::new(CompoundLexicon),
            ClassifierChoice::Polarity => Box::new(MeanPolarityLexicon),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindChoice {
    Team,
    Player,
}

impl From<KindChoice> for EntityKind {
    fn from(kind: KindChoice) -> Self {
        match kind {
            KindChoice::Team => EntityKind::Team,
            KindChoice::Player => EntityKind::Player,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Attribute the corpus and write the team and player summary tables
    Analyze {
        #[arg(long)]
        posts: PathBuf,
        #[arg(long)]
        teams: PathBuf,
        #[arg(long)]
        rosters: PathBuf,
        #[arg(long, value_enum, default_value = "compound")]
        classifier: ClassifierChoice,
        #[arg(long, default_value = "data")]
        out_dir: PathBuf,
    },
    /// Print the top entities of a previously written summary table
    Top {
        #[arg(long)]
        results: PathBuf,
        #[arg(long, value_enum)]
        kind: KindChoice,
        #[arg(long, value_enum, default_value = "pos")]
        by: aggregate::RankBy,
        #[arg(long, default_value_t = 10)]
        n: usize,
    },
    /// Generate a markdown report of top teams and players
    Report {
        #[arg(long)]
        posts: PathBuf,
        #[arg(long)]
        teams: PathBuf,
        #[arg(long)]
        rosters: PathBuf,
        #[arg(long, value_enum, default_value = "compound")]
        classifier: ClassifierChoice,
        #[arg(long, default_value_t = 10)]
        n: usize,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Run two classifiers over the same corpus and write the comparison
    Compare {
        #[arg(long)]
        posts: PathBuf,
        #[arg(long, value_enum, default_value = "compound")]
        left: ClassifierChoice,
        #[arg(long, value_enum, default_value = "polarity")]
        right: ClassifierChoice,
        #[arg(long, default_value = "data/comparison_of_scores.csv")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            posts,
            teams,
            rosters,
            classifier,
            out_dir,
        } => {
            let classifier = classifier.build();
            let output = analyze(&posts, &teams, &rosters, classifier.as_ref())?;

            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;
            let suffix = classifier.name().to_uppercase();
            let team_path = out_dir.join(format!("team_results_{suffix}.csv"));
            let player_path = out_dir.join(format!("player_results_{suffix}.csv"));
            export::write_entity_table(&team_path, EntityKind::Team, &output.team_summaries)?;
            export::write_entity_table(&player_path, EntityKind::Player, &output.player_summaries)?;

            println!(
                "Attributed {} mentions across {} teams and {} players.",
                output.records.len(),
                output.team_summaries.len(),
                output.player_summaries.len()
            );
            println!("Tables written to {} and {}.", team_path.display(), player_path.display());
        }
        Commands::Top { results, kind, by, n } => {
            let rows = export::read_entity_table(&results)?;
            print!("{}", report::render_top(&rows, kind.into(), by, n));
        }
        Commands::Report {
            posts,
            teams,
            rosters,
            classifier,
            n,
            out,
        } => {
            let classifier = classifier.build();
            let output = analyze(&posts, &teams, &rosters, classifier.as_ref())?;
            let report = report::build_report(
                classifier.name(),
                chrono::Utc::now().date_naive(),
                &output.team_summaries,
                &output.player_summaries,
                n,
            );
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Compare {
            posts,
            left,
            right,
            out,
        } => {
            let left = left.build();
            let right = right.build();
            let raw_posts = ingest::read_posts(&posts)?;
            let rows = pipeline::compare_classifiers(&raw_posts, left.as_ref(), right.as_ref())?;

            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
            }
            export::write_comparison(
                &out,
                &left.name().to_uppercase(),
                &right.name().to_uppercase(),
                &rows,
            )?;
            println!("Comparison of {} posts written to {}.", rows.len(), out.display());
        }
    }

    Ok(())
}

/// Shared front half of `analyze` and `report`: ingest, build the catalog,
/// run the pipeline. Reference-data problems abort here, before any matching.
fn analyze(
    posts: &Path,
    teams: &Path,
    rosters: &Path,
    classifier: &dyn Classifier,
) -> anyhow::Result<pipeline::AnalysisOutput> {
    let team_names = ingest::read_teams(teams)?;
    let roster_rows = ingest::read_rosters(rosters)?;
    let catalog = catalog::Catalog::build(&team_names, &roster_rows)
        .context("reference data is malformed")?;
    tracing::info!(
        teams = catalog.teams().len(),
        players = catalog.player_count(),
        "catalog built"
    );

    let raw_posts = ingest::read_posts(posts)?;
    pipeline::run(&raw_posts, &catalog, classifier)
}
