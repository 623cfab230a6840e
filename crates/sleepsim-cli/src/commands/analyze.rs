use std::collections::BTreeMap;

use clap::Args;
use sleepsim_core::MetricKind;

use super::Context;
use crate::report;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Only summarize this metric (repeatable; default: all four)
    #[arg(long = "metric", value_name = "KIND")]
    pub metrics: Vec<MetricKind>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(ctx: &Context, args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let readings = ctx
        .baseline
        .as_ref()
        .ok_or("analyze needs historical readings: pass --baseline <file.json>")?;
    let summaries: Vec<_> = readings
        .summaries()?
        .into_iter()
        .filter(|(kind, _)| args.metrics.is_empty() || args.metrics.contains(kind))
        .collect();

    if args.json {
        let by_metric: BTreeMap<_, _> = summaries.into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&by_metric)?);
        return Ok(());
    }

    for (kind, stats) in &summaries {
        println!("----------- Statistics for {kind} values -----------");
        println!("{}", report::summary(*kind, stats));
    }
    Ok(())
}
