use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod baseline;
mod commands;
mod config;
mod prompt;
mod report;

#[derive(Parser)]
#[command(name = "sleepsim", version, about = "Sleep environment statistics and simulation")]
struct Cli {
    /// Config file (defaults to ~/.config/sleepsim/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Historical readings JSON used to derive generator parameters
    #[arg(long, global = true)]
    baseline: Option<PathBuf>,
    /// Seed for a reproducible simulation
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Statistics for the historical readings
    Analyze(commands::analyze::AnalyzeArgs),
    /// Generate nights and present the first few
    Simulate(commands::simulate::SimulateArgs),
    /// Am I getting enough sleep?
    EnoughSleep(commands::sleep::EnoughSleepArgs),
    /// How good was my sleep environment on given nights?
    Quality(commands::quality::QualityArgs),
    /// Guided question-and-answer session
    Interactive,
    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = commands::Context::load(cli.config.as_deref(), cli.baseline.as_deref(), cli.seed)
        .and_then(|ctx| match cli.command {
            Commands::Analyze(args) => commands::analyze::run(&ctx, args),
            Commands::Simulate(args) => commands::simulate::run(&ctx, args),
            Commands::EnoughSleep(args) => commands::sleep::run(&ctx, args),
            Commands::Quality(args) => commands::quality::run(&ctx, args),
            Commands::Interactive => commands::interactive::run(&ctx),
            Commands::Config { action } => commands::config::run(&ctx, action),
        });

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
