//! 2D Position Kalman Filter
//!
//! State Vector (2D):
//! [0-1]: Position (X, Y) in the dead-reckoning frame (meters)
//!
//! Linear model with no motion term: the walker is expected to stay where
//! it was, and every step observes the full position. The filter holds only
//! the model; the belief is a `FilterState` value passed in and returned by
//! `step`, so each recursion can be checked in isolation.

use serde::{Deserialize, Serialize};

use crate::types::{
    KalmanGainPos, ObservationPos, PosMeasureNoise, PosMeasureVec, PosStateMat, PosStateVec,
};

/// Gaussian belief over the walker position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterState {
    pub mean: PosStateVec,
    pub covariance: PosStateMat,
}

impl Default for FilterState {
    /// Origin with unit uncertainty.
    fn default() -> Self {
        Self {
            mean: PosStateVec::zeros(),
            covariance: PosStateMat::identity(),
        }
    }
}

/// Diagnostics from one predict/update cycle.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StepOutcome {
    /// ‖H·mean − z‖ after the update. This is what the erraticism score uses.
    pub residual: f64,
    /// ‖z − H·mean'‖ against the prediction (the classic innovation).
    /// Reported only; never scored.
    pub innovation: f64,
    /// False when the innovation covariance could not be inverted and the
    /// correction was skipped.
    pub corrected: bool,
}

#[derive(Clone, Debug)]
pub struct PositionKf {
    /// Transition matrix F
    transition: PosStateMat,
    /// Process noise Q
    process_noise: PosStateMat,
    /// Observation matrix H
    observation: ObservationPos,
    /// Measurement noise R
    measurement_noise: PosMeasureNoise,
}

impl PositionKf {
    /// Identity transition and observation, unit measurement noise,
    /// `Q = process_noise · I`.
    pub fn new(process_noise: f64) -> Self {
        Self::with_measurement_noise(process_noise, PosMeasureNoise::identity())
    }

    pub fn with_measurement_noise(process_noise: f64, measurement_noise: PosMeasureNoise) -> Self {
        Self {
            transition: PosStateMat::identity(),
            process_noise: PosStateMat::identity() * process_noise,
            observation: ObservationPos::identity(),
            measurement_noise,
        }
    }

    /// Predict: `mean' = F·mean`, `P' = F·P·Fᵀ + Q`
    pub fn predict(&self, state: &FilterState) -> FilterState {
        FilterState {
            mean: self.transition * state.mean,
            covariance: self.transition * state.covariance * self.transition.transpose()
                + self.process_noise,
        }
    }

    /// One full predict/update cycle against observation `z`.
    pub fn step(&self, state: FilterState, z: &PosMeasureVec) -> (FilterState, StepOutcome) {
        let predicted = self.predict(&state);
        let h = &self.observation;
        let h_t = h.transpose();

        let innovation = z - h * predicted.mean;

        // Innovation covariance: S = H*P'*H^T + R
        let s_mat = h * predicted.covariance * h_t + self.measurement_noise;

        let (updated, corrected) = match s_mat.try_inverse() {
            Some(s_inv) => {
                // Kalman gain: K = P'*H^T*S^-1
                let gain: KalmanGainPos = predicted.covariance * h_t * s_inv;
                let updated = FilterState {
                    mean: predicted.mean + gain * innovation,
                    covariance: (PosStateMat::identity() - gain * h) * predicted.covariance,
                };
                (updated, true)
            }
            None => {
                log::warn!("Singular innovation covariance; keeping predicted position");
                (predicted, false)
            }
        };

        let residual = (h * updated.mean - z).norm();

        (
            updated,
            StepOutcome {
                residual,
                innovation: innovation.norm(),
                corrected,
            },
        )
    }
}
