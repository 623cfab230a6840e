use clap::Args;

use sleepsim_core::sleep_quality;

use super::Context;
use crate::report;

#[derive(Args)]
pub struct QualityArgs {
    /// Night(s) to analyse, 1-based; repeat the flag for several nights
    #[arg(long = "night", required = true)]
    pub nights: Vec<u32>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(ctx: &Context, args: QualityArgs) -> Result<(), Box<dyn std::error::Error>> {
    let nights = ctx.nights()?;

    let mut reports = Vec::with_capacity(args.nights.len());
    for night_id in args.nights {
        reports.push(sleep_quality(night_id, &nights)?);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for r in &reports {
            println!("{}", report::environment(r));
        }
    }
    Ok(())
}
