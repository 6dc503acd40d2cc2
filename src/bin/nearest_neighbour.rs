use anyhow::Result;
use clap::Parser;
use step_erraticism_rs::app::{self, CommonArgs};
use step_erraticism_rs::scoring::NearestNeighbourScorer;

#[derive(Parser, Debug)]
#[command(name = "nearest_neighbour")]
#[command(about = "Step erraticism from trailing nearest-neighbour spread", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Trailing steps in the neighbour window
    #[arg(long)]
    window_size: Option<usize>,

    /// Neighbour spread (meters) at which a step scores 0
    #[arg(long)]
    distance_threshold: Option<f64>,
}

fn main() -> Result<()> {
    app::init_logging();
    let args = Args::parse();

    let mut config = args.common.base_config()?;
    if let Some(window_size) = args.window_size {
        config.window_size = window_size;
    }
    if let Some(threshold) = args.distance_threshold {
        config.distance_threshold = threshold;
    }

    app::run(
        &NearestNeighbourScorer,
        &args.common,
        &config,
        "nearest_neighbour_output.csv",
    )?;
    Ok(())
}
