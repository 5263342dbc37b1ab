use super::deck_stats::AnnotatedDeck;
use serde::Serialize;

/// Least-squares line `win_rate = slope * SAS + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SasTrend {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub decks: u32,
}

impl SasTrend {
    #[allow(dead_code)]
    pub fn predict(&self, sas: f64) -> f64 {
        self.slope * sas + self.intercept
    }
}

/// Fits deck win rate against SAS over the decks that have played. Needs at
/// least two decks with different SAS.
pub fn win_rate_vs_sas(decks: &[AnnotatedDeck]) -> Option<SasTrend> {
    let points: Vec<(f64, f64)> = decks
        .iter()
        .filter_map(|d| d.stats.win_rate.map(|rate| (d.deck.sas, rate)))
        .collect();

    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let sxx: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
    let sxy: f64 = points.iter().map(|(x, y)| (x - mean_x) * (y - mean_y)).sum();
    let syy: f64 = points.iter().map(|(_, y)| (y - mean_y).powi(2)).sum();

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    // Flat win rates are fitted exactly by the flat line
    let r_squared = if syy == 0.0 { 1.0 } else { sxy * sxy / (sxx * syy) };

    Some(SasTrend {
        slope,
        intercept,
        r_squared,
        decks: points.len() as u32,
    })
}
