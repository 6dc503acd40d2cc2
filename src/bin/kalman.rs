use anyhow::Result;
use clap::Parser;
use step_erraticism_rs::app::{self, CommonArgs};
use step_erraticism_rs::scoring::KalmanScorer;

#[derive(Parser, Debug)]
#[command(name = "kalman")]
#[command(about = "Step erraticism from 2D Kalman filter residuals", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Diagonal of the process covariance Q
    #[arg(long)]
    process_noise: Option<f64>,
}

fn main() -> Result<()> {
    app::init_logging();
    let args = Args::parse();

    let mut config = args.common.base_config()?;
    if let Some(q) = args.process_noise {
        config.process_noise = q;
    }

    app::run(&KalmanScorer, &args.common, &config, "kalman_output.csv")?;
    Ok(())
}
