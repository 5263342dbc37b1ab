use crate::analysis::deck_stats::AnnotatedDeck;
use crate::analysis::group_pairwise::{GroupPairwise, NO_WIN_RATE};
use crate::analysis::match_matrix::{MatrixTable, UNPLAYED};
use crate::analysis::progress::{MatchProgress, YearCount};
use crate::analysis::recommender::MatchupRecommendation;
use crate::analysis::report::GroupReport;
use crate::analysis::set_house::SetHouseTable;
use crate::analysis::trend::SasTrend;
use colored::*;
use tabled::{builder::Builder, settings::Style, Table, Tabled};

const NO_DATA: &str = "-";

#[derive(Tabled)]
struct DeckRow {
    #[tabled(rename = "#")]
    id: String,
    name: String,
    set: String,
    houses: String,
    sas: String,
    plays: String,
    wins: String,
    win_rate: String,
    avg_keys: String,
    avg_diff: String,
}

#[derive(Tabled)]
struct GroupRow {
    group: String,
    decks: String,
    plays: String,
    wins: String,
    win_rate: String,
    avg_keys: String,
    avg_diff: String,
    avg_sas: String,
    deck_win_rate: String,
}

#[derive(Tabled)]
struct ProgressRow {
    #[tabled(rename = "#")]
    number: String,
    date: String,
    decks: String,
    matches: String,
    possible: String,
    completion: String,
}

fn fmt_opt(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{:.1}{}", v, suffix),
        None => NO_DATA.to_string(),
    }
}

fn print_header(title: &str, width: usize) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(width).cyan());
}

fn print_table(mut table: Table) {
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_deck_stats(decks: &[AnnotatedDeck]) {
    print_header("🃏 DECK STATISTICS", 80);

    let rows: Vec<DeckRow> = decks
        .iter()
        .map(|d| DeckRow {
            id: d.deck.id.to_string(),
            name: d.deck.name.clone(),
            set: d.deck.set.to_string(),
            houses: d.deck.houses().map(|h| h.to_string()).join(" / "),
            sas: format!("{:.0}", d.deck.sas),
            plays: d.stats.plays.to_string(),
            wins: d.stats.wins.to_string(),
            win_rate: fmt_opt(d.stats.win_rate, "%"),
            avg_keys: fmt_opt(d.stats.avg_keys_forged, ""),
            avg_diff: fmt_opt(d.stats.avg_key_diff, ""),
        })
        .collect();

    print_table(Table::new(rows));

    let unplayed = decks.iter().filter(|d| d.stats.plays == 0).count();
    if unplayed > 0 {
        println!(
            "{} {} deck(s) have not played yet\n",
            "⚠️".yellow(),
            unplayed
        );
    }
}

pub fn display_match_matrix(matrix: &MatrixTable) {
    print_header("⚔️ MATCH RESULTS (keys forged by row deck)", 80);

    let mut builder = Builder::default();
    let mut header = vec![String::new()];
    header.extend(matrix.decks.iter().map(|id| id.to_string()));
    builder.push_record(header);

    for (id, row) in matrix.decks.iter().zip(&matrix.results) {
        let mut record = vec![id.to_string()];
        record.extend(row.iter().map(|&cell| {
            if cell == UNPLAYED {
                ".".to_string()
            } else {
                cell.to_string()
            }
        }));
        builder.push_record(record);
    }

    print_table(builder.build());
}

pub fn display_progress(progress: &[MatchProgress], years: &[YearCount]) {
    print_header("📈 MATCH PROGRESS", 60);

    if progress.is_empty() {
        println!("{}", "No matches recorded yet".yellow());
        return;
    }

    let rows: Vec<ProgressRow> = progress
        .iter()
        .map(|p| ProgressRow {
            number: p.sequence_index.to_string(),
            date: p.date.to_string(),
            decks: p.number_decks.to_string(),
            matches: p.cumulative_matches.to_string(),
            possible: p.possible_matches.to_string(),
            completion: fmt_opt(p.perc_completion, "%"),
        })
        .collect();
    print_table(Table::new(rows));

    let per_year: Vec<String> = years
        .iter()
        .map(|y| format!("{}: {}", y.year, y.matches))
        .collect();
    println!("{} {}\n", "Matches per year:".bold(), per_year.join(", "));
}

pub fn display_set_house(table: &SetHouseTable) {
    print_header("🏠 DECKS PER SET AND HOUSE", 80);

    let mut builder = Builder::default();
    let mut header = vec![String::new()];
    header.extend(table.houses.iter().map(|h| h.to_string()));
    builder.push_record(header);

    for (set, row) in table.sets.iter().zip(&table.counts) {
        let mut record = vec![set.to_string()];
        record.extend(row.iter().map(|c| c.to_string()));
        builder.push_record(record);
    }

    print_table(builder.build());
}

pub fn display_group_report(report: &GroupReport) {
    let title = format!("📊 {} STATISTICS", report.kind.to_string().to_uppercase());
    print_header(&title, 80);

    let rows: Vec<GroupRow> = report
        .stats
        .iter()
        .map(|g| GroupRow {
            group: g.group.to_string(),
            decks: g.decks.to_string(),
            plays: g.totals.plays.to_string(),
            wins: g.totals.wins.to_string(),
            win_rate: fmt_opt(g.totals.win_rate, "%"),
            avg_keys: fmt_opt(g.totals.avg_keys_forged, ""),
            avg_diff: fmt_opt(g.totals.avg_key_diff, ""),
            avg_sas: fmt_opt(g.avg_deck_sas, ""),
            deck_win_rate: match (g.avg_deck_win_rate, g.std_deck_win_rate) {
                (Some(avg), Some(std)) => format!("{:.1}% ± {:.1}", avg, std),
                _ => NO_DATA.to_string(),
            },
        })
        .collect();
    print_table(Table::new(rows));

    println!("{}", "Plays (row vs column)".bold().yellow());
    display_grid(&report.pairwise, |p, i, j| p.plays_grid[i][j].to_string());

    println!("{}", "Win rate % (row vs column)".bold().yellow());
    display_grid(&report.pairwise, |p, i, j| match p.win_rate_grid[i][j] {
        NO_WIN_RATE => ".".to_string(),
        rate => rate.to_string(),
    });
}

fn display_grid<F>(pairwise: &GroupPairwise, cell: F)
where
    F: Fn(&GroupPairwise, usize, usize) -> String,
{
    let mut builder = Builder::default();
    let mut header = vec![String::new()];
    header.extend(pairwise.groups.iter().map(|g| g.to_string()));
    builder.push_record(header);

    for (i, group) in pairwise.groups.iter().enumerate() {
        let mut record = vec![group.to_string()];
        record.extend((0..pairwise.groups.len()).map(|j| cell(pairwise, i, j)));
        builder.push_record(record);
    }

    print_table(builder.build());
}

pub fn display_trend(trend: Option<&SasTrend>) {
    print_header("📉 WIN RATE VS SAS", 60);

    match trend {
        Some(t) => {
            println!(
                "  win rate ≈ {:.2} × SAS {} {:.1}",
                t.slope,
                if t.intercept < 0.0 { "-" } else { "+" },
                t.intercept.abs()
            );
            println!("  R² = {:.3} over {} decks\n", t.r_squared, t.decks);
        }
        None => println!(
            "{}\n",
            "Not enough played decks with distinct SAS to fit a trend".yellow()
        ),
    }
}

pub fn display_next_game(next: Option<&MatchupRecommendation>, decks: &[AnnotatedDeck]) {
    print_header("🎯 NEXT MATCH", 60);

    let Some(rec) = next else {
        println!("{}\n", "No unplayed pairing left for the least-played sets".yellow());
        return;
    };

    println!(
        "  {} vs {} has the fewest plays ({})",
        rec.set1.to_string().bold(),
        rec.set2.to_string().bold(),
        rec.set_plays
    );

    for id in [rec.deck1, rec.deck2] {
        if let Some(d) = decks.iter().find(|d| d.deck.id == id) {
            println!(
                "  {} #{} {} ({} - {}) SAS {:.0}, {} plays",
                "•".green(),
                d.deck.id,
                d.deck.name,
                d.deck.set,
                d.deck.houses().map(|h| h.to_string()).join(" / "),
                d.deck.sas,
                d.stats.plays
            );
        }
    }

    println!();
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
