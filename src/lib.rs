//! Step erraticism scoring for pedestrian dead-reckoning logs.
//!
//! A step log is integrated into a planar trajectory (`trajectory`), then
//! scored by one of two engines (`scoring`): the windowed nearest-neighbour
//! spread heuristic or the 2D Kalman residual heuristic.

pub mod app;
pub mod config;
pub mod error;
pub mod filters;
pub mod output;
pub mod scoring;
pub mod steplog;
pub mod summary;
pub mod trajectory;
pub mod types;

pub use config::ScoringConfig;
pub use error::{ErraticismError, Result};
pub use scoring::{ErraticismScorer, KalmanScorer, NearestNeighbourScorer};
pub use types::{PositionedStep, RawStepRecord, ScoredStep};
