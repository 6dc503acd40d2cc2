use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{ErraticismError, Result};
use crate::steplog::ParsedLog;
use crate::trajectory::{net_displacement, path_length};
use crate::types::{PositionedStep, ScoredStep};

/// Run statistics for display and JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub scorer: String,
    pub generated_at: String, // RFC 3339
    pub lines_read: usize,
    pub skipped_lines: usize,
    pub steps: usize,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub mean_score: Option<f64>,
    pub path_length_m: f64,
    pub net_displacement_m: f64,
}

impl RunSummary {
    pub fn new(
        scorer: &str,
        log: &ParsedLog,
        steps: &[PositionedStep],
        scored: &[ScoredStep],
    ) -> Self {
        let scores = scored.iter().map(|s| s.score);
        let mean_score = if scored.is_empty() {
            None
        } else {
            Some(scores.clone().sum::<f64>() / scored.len() as f64)
        };

        Self {
            scorer: scorer.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            lines_read: log.lines_read,
            skipped_lines: log.skipped_lines,
            steps: steps.len(),
            min_score: scores.clone().reduce(f64::min),
            max_score: scores.reduce(f64::max),
            mean_score,
            path_length_m: path_length(steps),
            net_displacement_m: net_displacement(steps),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| ErraticismError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| ErraticismError::io(path, e.into()))?;
        writer.flush().map_err(|e| ErraticismError::io(path, e))?;
        Ok(())
    }
}
