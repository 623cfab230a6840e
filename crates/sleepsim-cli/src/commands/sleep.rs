use clap::Args;

use sleepsim_core::enough_sleep;

use super::Context;
use crate::report;

#[derive(Args)]
pub struct EnoughSleepArgs {
    /// Target hours of sleep per night (1-24)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=24))]
    pub target_hours: u32,
    /// Name to greet in the report
    #[arg(long)]
    pub name: Option<String>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(ctx: &Context, args: EnoughSleepArgs) -> Result<(), Box<dyn std::error::Error>> {
    let nights = ctx.nights()?;
    let result = enough_sleep(args.target_hours, &nights)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::sufficiency(&result, args.name.as_deref()));
    }
    Ok(())
}
