//! Command-line plumbing shared by the scorer binaries.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::ScoringConfig;
use crate::output::write_scores_to_path;
use crate::scoring::ErraticismScorer;
use crate::steplog::{load_steplog, prompt_steplog_path};
use crate::summary::RunSummary;
use crate::trajectory::reconstruct;

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to a .steplog (or .steplog.gz) file; prompted for when omitted
    #[arg(long)]
    pub steplog: Option<PathBuf>,

    /// Output CSV path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// JSON file with scoring parameters (window_size, distance_threshold, process_noise)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write a JSON run summary to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

impl CommonArgs {
    /// Config file if given, defaults otherwise.
    pub fn base_config(&self) -> Result<ScoringConfig> {
        match &self.config {
            Some(path) => Ok(ScoringConfig::from_json_file(path)?),
            None => Ok(ScoringConfig::default()),
        }
    }
}

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Load, reconstruct, score and write one step log.
pub fn run<S: ErraticismScorer>(
    scorer: &S,
    args: &CommonArgs,
    config: &ScoringConfig,
    default_output: &str,
) -> Result<RunSummary> {
    config.validate()?;

    let steplog_path = match &args.steplog {
        Some(path) => path.clone(),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            prompt_steplog_path(&mut stdin.lock(), &mut stdout.lock())
                .context("Failed to read step log path from stdin")?
        }
    };

    let parsed = load_steplog(&steplog_path)
        .with_context(|| format!("Unable to open the steplog file {}", steplog_path.display()))?;
    let steps = reconstruct(&parsed.records);

    log::info!("Scoring {} steps with {} scorer", steps.len(), scorer.name());
    let scored = scorer.score(&steps, config)?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_output));
    write_scores_to_path(&output_path, &scored)
        .with_context(|| format!("Unable to create the output file {}", output_path.display()))?;

    let summary = RunSummary::new(scorer.name(), &parsed, &steps, &scored);
    log::info!(
        "{} steps scored ({} lines skipped), path length {:.1} m",
        summary.steps,
        summary.skipped_lines,
        summary.path_length_m
    );
    if let Some(summary_path) = &args.summary {
        summary
            .write_json(summary_path)
            .with_context(|| format!("Unable to write run summary {}", summary_path.display()))?;
    }

    println!("Output written to {}", output_path.display());
    Ok(summary)
}
