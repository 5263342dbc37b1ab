mod analysis;
mod config;
mod data;
mod display;
mod error;

use analysis::group_stats::GroupKind;
use analysis::report::Report;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use config::Config;
use display::output::{
    display_deck_stats, display_error, display_group_report, display_info, display_match_matrix,
    display_next_game, display_progress, display_set_house, display_success, display_trend,
};
use indicatif::ProgressBar;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Section {
    /// Per-deck plays, wins and key stats
    Decks,
    /// Deck vs deck keys forged
    Matrix,
    /// Pool size and completion per match
    Progress,
    /// Deck counts per set and house
    Overview,
    /// Set/house stats and group vs group grids
    Groups,
    /// Win rate vs SAS fit
    Trend,
    /// Next match to play
    Next,
}

#[derive(Parser, Debug)]
#[command(name = "KeyForge Stats")]
#[command(about = "Deck, set and house statistics for a KeyForge league", long_about = None)]
struct Args {
    /// Deck table CSV (overrides KEYFORGE_DECKS_PATH)
    #[arg(short, long)]
    decks: Option<PathBuf>,

    /// Match table CSV (overrides KEYFORGE_MATCHES_PATH)
    #[arg(short, long)]
    matches: Option<PathBuf>,

    /// Sections to show (default: all)
    #[arg(short, long, value_enum)]
    section: Vec<Section>,

    /// Group kinds for the groups section: set, house (default: both)
    #[arg(short, long)]
    kind: Vec<GroupKind>,

    /// Print every table as one JSON document
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(decks) = args.decks {
        config.decks_path = decks;
    }
    if let Some(matches) = args.matches {
        config.matches_path = matches;
    }

    let catalog = data::loader::load_decks(&config.decks_path)
        .with_context(|| format!("loading decks from {}", config.decks_path.display()))?;
    let matches = data::loader::load_matches(&config.matches_path, &catalog)
        .with_context(|| format!("loading matches from {}", config.matches_path.display()))?;

    if args.json {
        let report = Report::build(&catalog, &matches, &ProgressBar::hidden());
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    display_success(&format!(
        "Loaded {} decks and {} matches",
        catalog.len(),
        matches.len()
    ));

    let pb = ProgressBar::new(matches.len() as u64);
    pb.set_message("Replaying match log");
    let report = Report::build(&catalog, &matches, &pb);

    let show = |section: Section| args.section.is_empty() || args.section.contains(&section);
    let kinds = if args.kind.is_empty() {
        vec![GroupKind::Set, GroupKind::House]
    } else {
        args.kind.clone()
    };

    if show(Section::Overview) {
        display_set_house(&report.set_house);
    }
    if show(Section::Progress) {
        display_progress(&report.progress, &report.matches_per_year);
    }
    if show(Section::Matrix) {
        display_match_matrix(&report.match_matrix);
    }
    if show(Section::Decks) {
        display_deck_stats(&report.decks);
    }
    if show(Section::Groups) {
        for kind in kinds {
            display_group_report(report.group(kind));
        }
    }
    if show(Section::Trend) {
        display_trend(report.sas_trend.as_ref());
    }
    if show(Section::Next) {
        display_next_game(report.next_game.as_ref(), &report.decks);
    }

    display_info(&format!(
        "{} of {} deck pairs played",
        report.matrix.played_pairs(),
        catalog.len() * catalog.len().saturating_sub(1) / 2
    ));

    Ok(())
}
