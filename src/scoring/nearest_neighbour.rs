use crate::config::ScoringConfig;
use crate::error::Result;
use crate::types::{PositionedStep, ScoredStep};

use super::ErraticismScorer;

/// Windowed nearest-neighbour spread heuristic.
///
/// A step far from its recent neighbours scores low; a step that stays
/// close to them scores high.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestNeighbourScorer;

impl ErraticismScorer for NearestNeighbourScorer {
    fn name(&self) -> &'static str {
        "nearest_neighbour"
    }

    fn score(&self, steps: &[PositionedStep], config: &ScoringConfig) -> Result<Vec<ScoredStep>> {
        config.validate()?;
        let scored = score_steps(steps, config.window_size, config.distance_threshold);
        log::debug!(
            "Scored {} steps (window {}, threshold {:.2} m)",
            scored.len(),
            config.window_size,
            config.distance_threshold
        );
        Ok(scored)
    }
}

/// Score every step against its trailing window.
///
/// Steps with fewer than `window_size` predecessors score 0.
pub fn score_steps(
    steps: &[PositionedStep],
    window_size: usize,
    threshold: f64,
) -> Vec<ScoredStep> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let score = if i < window_size {
                0.0
            } else {
                score_against_window(step, &steps[i - window_size..i], threshold)
            };
            ScoredStep {
                timestamp: step.timestamp,
                score,
            }
        })
        .collect()
}

/// Score one step against the `window` of steps that precede it.
///
/// The backward walk starts one before the window's last entry, so the
/// immediately preceding step never counts, and it samples at most
/// `window.len() - 1` neighbours.
pub fn score_against_window(
    step: &PositionedStep,
    window: &[PositionedStep],
    threshold: f64,
) -> f64 {
    let max_distance = farthest_sampled_neighbour(step, window);
    1.0 - (max_distance / threshold).min(1.0)
}

fn farthest_sampled_neighbour(step: &PositionedStep, window: &[PositionedStep]) -> f64 {
    let sampled = window.len().saturating_sub(1);
    window[..sampled]
        .iter()
        .rev()
        .map(|neighbour| step.distance_to(neighbour))
        .fold(0.0, f64::max)
}
