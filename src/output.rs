use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{ErraticismError, Result};
use crate::types::ScoredStep;

pub const CSV_HEADER: &str = "timestamp,erraticism";

/// Write the `timestamp,erraticism` table, one row per step in order.
pub fn write_scores<W: Write>(writer: &mut W, scored: &[ScoredStep]) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for step in scored {
        writeln!(writer, "{},{}", step.timestamp, step.score)?;
    }
    writer.flush()
}

pub fn write_scores_to_path(path: &Path, scored: &[ScoredStep]) -> Result<()> {
    let file = File::create(path).map_err(|e| ErraticismError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_scores(&mut writer, scored).map_err(|e| ErraticismError::io(path, e))?;
    log::info!("Wrote {} rows to {}", scored.len(), path.display());
    Ok(())
}
