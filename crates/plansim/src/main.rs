use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use jiff::Timestamp;
use plansim::{Report, init_logging, load_market_data, load_plan_file};
use plansim_core::run_comparison;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "plansim")]
#[command(about = "Monte Carlo projection of an investment plan")]
struct Args {
    /// Path to the plan JSON file
    #[arg(short, long)]
    plan: PathBuf,

    /// Path to the market data JSON file (prices and inflation indices)
    #[arg(short, long)]
    market_data: PathBuf,

    /// Seed for the random source (default: drawn from the OS)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the plan's simulation count
    #[arg(long)]
    simulations: Option<usize>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let mut file = load_plan_file(&args.plan)?;
    if let Some(simulations) = args.simulations {
        file.plan.simulation_count = simulations;
    }
    let market = load_market_data(&args.market_data)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "Running comparison");
    let mut rng = StdRng::seed_from_u64(seed);

    let comparison = run_comparison(&file.plan, &market, &file.config, &mut rng)
        .wrap_err("Strategy comparison failed")?;
    tracing::info!(
        best = comparison.best_strategy_name(),
        "Selected projection method"
    );

    let report = Report::new(&file, &comparison, Timestamp::now());
    println!("{}", report.to_json(args.pretty)?);

    Ok(())
}
