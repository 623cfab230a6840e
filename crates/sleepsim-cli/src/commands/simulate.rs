use clap::Args;

use sleepsim_core::CoreError;

use super::Context;
use crate::report;

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of nights to present (defaults to `simulation.show_nights`)
    #[arg(long)]
    pub show: Option<usize>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(ctx: &Context, args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let nights = ctx.nights()?;
    let show = args.show.unwrap_or(ctx.config.simulation.show_nights);

    let mut overviews = Vec::new();
    for night in nights.first(show) {
        match night.overview() {
            Ok(overview) => overviews.push(overview),
            // A zero-minute night has nothing to average; skip it.
            Err(CoreError::EmptyInput { .. }) => {
                if !args.json {
                    println!("Night {}: no sleep recorded.\n", night.id());
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&overviews)?);
    } else {
        println!("Simulated {} nights.\n", nights.len());
        for overview in &overviews {
            println!("{}", report::overview(overview));
        }
    }
    Ok(())
}
