//! Linear algebra type system for the step filters
//!
//! Fixed-size aliases so the position filter gets compile-time
//! dimension checking.

use nalgebra::{SMatrix, SVector};

// ===== State Dimensions =====
pub const STATE_DIM_POS: usize = 2; // (x, y)

// ===== Measurement Dimensions =====
pub const MEASURE_DIM_POS: usize = 2; // dead-reckoned (x, y)

// ===== Position Filter Types =====
pub type PosStateVec = SVector<f64, STATE_DIM_POS>;
pub type PosStateMat = SMatrix<f64, STATE_DIM_POS, STATE_DIM_POS>;

pub type PosMeasureVec = SVector<f64, MEASURE_DIM_POS>;
pub type PosMeasureNoise = SMatrix<f64, MEASURE_DIM_POS, MEASURE_DIM_POS>;

// Observation matrix and Kalman gain
pub type ObservationPos = SMatrix<f64, MEASURE_DIM_POS, STATE_DIM_POS>; // 2×2
pub type KalmanGainPos = SMatrix<f64, STATE_DIM_POS, MEASURE_DIM_POS>; // 2×2
