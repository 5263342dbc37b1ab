/// Rounds half to even at `decimals` places, so 0.25 becomes 0.2 and 12.5
/// becomes 12.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// `numerator / plays * scale` rounded to `decimals`, or `None` without plays.
pub fn rate(numerator: f64, plays: u32, scale: f64, decimals: i32) -> Option<f64> {
    if plays == 0 {
        None
    } else {
        Some(round_to(numerator / plays as f64 * scale, decimals))
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

// Population standard deviation (divides by n)
pub fn population_std(values: &[f64]) -> Option<f64> {
    let mu = mean(values)?;
    let variance = values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}
