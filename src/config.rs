use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ErraticismError, Result};

pub const DEFAULT_WINDOW_SIZE: usize = 25;
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 14.0; // meters
pub const DEFAULT_PROCESS_NOISE: f64 = 0.01;

/// Tunables shared by both scorers. Each scorer reads only its own fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Trailing steps considered by the nearest-neighbour scorer
    pub window_size: usize,
    /// Neighbour spread (meters) at which a step scores 0
    pub distance_threshold: f64,
    /// Diagonal of the Kalman process covariance
    pub process_noise: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            process_noise: DEFAULT_PROCESS_NOISE,
        }
    }
}

impl ScoringConfig {
    /// Load from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| ErraticismError::io(path, e))?;
        let config: Self = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            ErraticismError::ConfigFormat {
                path: path.to_path_buf(),
                source,
            }
        })?;
        log::debug!("Loaded scoring config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(ErraticismError::InvalidConfig(
                "window_size must be at least 1".to_string(),
            ));
        }
        if !self.distance_threshold.is_finite() || self.distance_threshold <= 0.0 {
            return Err(ErraticismError::InvalidConfig(format!(
                "distance_threshold must be a positive number, got {}",
                self.distance_threshold
            )));
        }
        if !self.process_noise.is_finite() || self.process_noise < 0.0 {
            return Err(ErraticismError::InvalidConfig(format!(
                "process_noise must be non-negative, got {}",
                self.process_noise
            )));
        }
        Ok(())
    }
}
