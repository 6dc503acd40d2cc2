use crate::config::ScoringConfig;
use crate::error::Result;
use crate::filters::position_kf::{FilterState, PositionKf, StepOutcome};
use crate::types::{PositionedStep, ScoredStep};

use super::normalize::invert_min_max;
use super::ErraticismScorer;

/// Kalman residual heuristic.
///
/// Runs the position filter over the whole trajectory, then ranks each
/// step's post-update residual against the run's range. The smallest
/// residual scores 1, the largest 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct KalmanScorer;

impl ErraticismScorer for KalmanScorer {
    fn name(&self) -> &'static str {
        "kalman"
    }

    fn score(&self, steps: &[PositionedStep], config: &ScoringConfig) -> Result<Vec<ScoredStep>> {
        config.validate()?;
        Ok(score_steps(steps, config.process_noise))
    }
}

/// Pass 1: filter every step in order, keeping each step's diagnostics.
pub fn run_filter(steps: &[PositionedStep], process_noise: f64) -> Vec<StepOutcome> {
    let kf = PositionKf::new(process_noise);
    let mut state = FilterState::default();
    let mut outcomes = Vec::with_capacity(steps.len());

    for step in steps {
        let (next, outcome) = kf.step(state, &step.position());
        state = next;
        outcomes.push(outcome);
    }

    let skipped = outcomes.iter().filter(|o| !o.corrected).count();
    if skipped > 0 {
        log::warn!("Kalman correction skipped on {} of {} steps", skipped, steps.len());
    }

    outcomes
}

/// Score every step. Output is only available once the whole run is filtered.
pub fn score_steps(steps: &[PositionedStep], process_noise: f64) -> Vec<ScoredStep> {
    let residuals: Vec<f64> = run_filter(steps, process_noise)
        .iter()
        .map(|o| o.residual)
        .collect();

    if let (Some(min), Some(max)) = (
        residuals.iter().copied().reduce(f64::min),
        residuals.iter().copied().reduce(f64::max),
    ) {
        log::debug!(
            "Kalman residual range over {} steps: [{:.4}, {:.4}] m",
            residuals.len(),
            min,
            max
        );
    }

    // Pass 2
    steps
        .iter()
        .zip(invert_min_max(&residuals))
        .map(|(step, score)| ScoredStep {
            timestamp: step.timestamp,
            score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::normalize::DEGENERATE_SCORE;
    use approx::assert_abs_diff_eq;

    fn step_at(timestamp: i64, x: f64, y: f64) -> PositionedStep {
        PositionedStep {
            timestamp,
            displacement: 0.0,
            heading: 0.0,
            x,
            y,
        }
    }

    fn wander(n: usize) -> Vec<PositionedStep> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                step_at(i as i64 * 1_000_000, t * 0.7, (t * 0.9).sin() * 2.0)
            })
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(score_steps(&[], 0.01).is_empty());
    }

    #[test]
    fn test_single_step_is_degenerate() {
        let scored = score_steps(&[step_at(7, 1.0, 0.0)], 0.01);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].timestamp, 7);
        assert_eq!(scored[0].score, DEGENERATE_SCORE);
    }

    #[test]
    fn test_static_trajectory_is_degenerate() {
        // Walker never leaves the origin: every residual is exactly zero
        let steps: Vec<PositionedStep> = (0..20).map(|i| step_at(i, 0.0, 0.0)).collect();
        let scored = score_steps(&steps, 0.01);
        assert!(scored.iter().all(|s| s.score == DEGENERATE_SCORE));
        assert!(scored.iter().all(|s| !s.score.is_nan()));
    }

    #[test]
    fn test_normalized_range() {
        let scored = score_steps(&wander(100), 0.01);
        let min = scored.iter().map(|s| s.score).fold(f64::INFINITY, f64::min);
        let max = scored.iter().map(|s| s.score).fold(f64::NEG_INFINITY, f64::max);
        assert_abs_diff_eq!(min, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(max, 1.0, epsilon = 1e-9);
        assert!(scored.iter().all(|s| (0.0..=1.0).contains(&s.score)));
    }

    #[test]
    fn test_two_steps_rank() {
        // Step 0 residual: 1/2.01. The walker stays put, so step 1 lags less.
        let steps = vec![step_at(0, 1.0, 0.0), step_at(1, 1.0, 0.0)];
        let outcomes = run_filter(&steps, 0.01);
        assert_abs_diff_eq!(outcomes[0].residual, 1.0 / 2.01, epsilon = 1e-12);
        assert!(outcomes[1].residual < outcomes[0].residual);

        let scored = score_steps(&steps, 0.01);
        assert_eq!(scored[0].score, 0.0);
        assert_eq!(scored[1].score, 1.0);
    }

    #[test]
    fn test_residual_is_post_update() {
        let outcomes = run_filter(&wander(30), 0.01);
        for o in &outcomes {
            assert!(o.residual < o.innovation || o.innovation == 0.0);
        }
    }

    #[test]
    fn test_zero_process_noise() {
        let scored = score_steps(&wander(40), 0.0);
        assert_eq!(scored.len(), 40);
        assert!(scored.iter().all(|s| s.score.is_finite()));
    }

    #[test]
    fn test_scorer_rejects_negative_noise() {
        let config = ScoringConfig {
            process_noise: -1.0,
            ..Default::default()
        };
        assert!(KalmanScorer.score(&wander(5), &config).is_err());
    }
}
