use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mcarea::experiment::{self, LogObserver};
use mcarea::prelude::*;

/// Monte Carlo area of the three-circle intersection over a range of sample counts
#[derive(Debug, Parser)]
#[command(name = "mcarea", version)]
struct Args {
    /// CSV file to write the results to
    #[arg(short, long, default_value = "monte_carlo_results.csv")]
    output: PathBuf,

    /// First sample count
    #[arg(long, default_value_t = experiment::SWEEP_START)]
    start: usize,

    /// Increment between sample counts
    #[arg(long, default_value_t = experiment::SWEEP_STEP)]
    step: usize,

    /// Last sample count (inclusive)
    #[arg(long, default_value_t = experiment::SWEEP_END)]
    end: usize,

    /// Base seed; when given, seeds are derived from it instead of using N
    #[arg(short, long)]
    seed: Option<u64>,

    /// Records between progress messages (0 disables them)
    #[arg(long, default_value_t = experiment::DEFAULT_PROGRESS_EVERY)]
    progress_every: usize,
}

fn execute(args: &Args) -> Result<usize> {
    let mut config = ExperimentConfig::reference()?;
    config
        .set_sweep(Sweep::new(args.start, args.step, args.end)?)
        .set_progress_every(args.progress_every);
    if let Some(base) = args.seed {
        config.set_seed_policy(SeedPolicy::Derived { base });
    }

    let records = run_with(&config, &mut LogObserver::new(config.progress_every()))?;

    let mut csv = CsvWriter::new(BufWriter::new(File::create(&args.output)?))?;
    csv.write_all(&records)?;
    let rows = csv.rows();
    csv.finish()?;
    Ok(rows)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mcarea=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match execute(&args) {
        Ok(rows) => info!("wrote {} rows to {}", rows, args.output.display()),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
