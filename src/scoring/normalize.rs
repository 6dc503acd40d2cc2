//! Inverted min-max normalization.
//!
//! Maps the smallest value to 1 and the largest to 0. When every value is
//! the same (or the range is not finite) there is nothing to rank, and
//! every entry maps to `DEGENERATE_SCORE`.

pub const DEGENERATE_SCORE: f64 = 1.0;

pub fn invert_min_max(values: &[f64]) -> Vec<f64> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;

    if !range.is_finite() || range <= 0.0 {
        if !values.is_empty() {
            log::debug!(
                "Degenerate normalization range over {} values; using {}",
                values.len(),
                DEGENERATE_SCORE
            );
        }
        return vec![DEGENERATE_SCORE; values.len()];
    }

    values
        .iter()
        .map(|&v| (1.0 - (v - min) / range).clamp(0.0, 1.0))
        .collect()
}
