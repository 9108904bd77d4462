use super::domain::{round_to, ConfidenceInterval};

/// Notional number of observations behind every probability estimate.
pub const DEFAULT_SAMPLE_SIZE: u32 = 100;
const Z_95: f64 = 1.96;

/// Wilson score interval at 95% around `probability`, rounded to three decimals.
///
/// Reported alongside the score only; it never gates eligibility.
pub fn confidence_interval(probability: f64, sample_size: u32) -> ConfidenceInterval {
    if probability <= 0.0 {
        return ConfidenceInterval(0.0, 0.0);
    }
    if probability >= 1.0 {
        return ConfidenceInterval(1.0, 1.0);
    }

    let n = f64::from(sample_size.max(1));
    let z_squared = Z_95 * Z_95;
    let denominator = 1.0 + z_squared / n;
    let center = (probability + z_squared / (2.0 * n)) / denominator;
    let margin = Z_95
        * (probability * (1.0 - probability) / n + z_squared / (4.0 * n * n)).sqrt()
        / denominator;

    let lower = (center - margin).max(0.0);
    let upper = (center + margin).min(1.0);
    ConfidenceInterval(round_to(lower, 3), round_to(upper, 3))
}
