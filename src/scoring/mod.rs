//! Erraticism scorers
//!
//! Both engines read the same dead-reckoned trajectory and emit one score
//! per step, in step order. The caller picks the engine.

pub mod kalman;
pub mod nearest_neighbour;
pub mod normalize;

pub use kalman::KalmanScorer;
pub use nearest_neighbour::NearestNeighbourScorer;

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::types::{PositionedStep, ScoredStep};

pub trait ErraticismScorer {
    /// Short name used in logs and run summaries.
    fn name(&self) -> &'static str;

    /// Score every step. Rejects configs that fail `ScoringConfig::validate`.
    fn score(&self, steps: &[PositionedStep], config: &ScoringConfig) -> Result<Vec<ScoredStep>>;
}
