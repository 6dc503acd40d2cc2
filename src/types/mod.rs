pub mod linalg;

pub use linalg::*;

use serde::{Deserialize, Serialize};

/// One line of a step log, as emitted by the pedestrian dead-reckoning tracker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawStepRecord {
    pub timestamp: i64,    // nanoseconds
    pub displacement: f64, // stride length, meters
    pub heading: f64,      // radians
    /// Trailing channels of the log format. Parsed, never read.
    pub reserved: [f64; 2],
}

/// A step placed on the plane by dead reckoning from the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionedStep {
    pub timestamp: i64,
    pub displacement: f64,
    pub heading: f64,
    pub x: f64, // meters, cumulative
    pub y: f64, // meters, cumulative
}

impl PositionedStep {
    pub fn position(&self) -> PosMeasureVec {
        PosMeasureVec::new(self.x, self.y)
    }

    pub fn distance_to(&self, other: &PositionedStep) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredStep {
    pub timestamp: i64,
    pub score: f64,
}
