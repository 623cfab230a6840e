//! Guided question-and-answer session over a simulated collection.

use std::io::{self, BufRead, Write};

use sleepsim_core::{enough_sleep, sleep_quality, CoreError, NightCollection};

use super::Context;
use crate::prompt::{ask, ask_in_range, confirm};
use crate::report;

pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let nights = ctx.nights()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    run_session(&mut input, &mut output, &nights)
}

/// Ask for a name and target, report sufficiency, then analyse nights until
/// the user declines to continue or input ends.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    nights: &NightCollection,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(name) = ask(input, output, "What is your name? ")? else {
        return Ok(());
    };

    let question = format!("Hi {name}! How many hours of sleep do you want to get every night (1-24)? ");
    let Some(target_hours) = ask_in_range(input, output, &question, 1..=24)? else {
        return Ok(());
    };
    writeln!(output)?;
    write!(output, "{}", report::sufficiency(&enough_sleep(target_hours, nights)?, Some(name.as_str())))?;

    let last = u32::try_from(nights.len()).unwrap_or(u32::MAX);
    if last == 0 {
        return Ok(());
    }
    let night_question = format!("Which night (1-{last}) would you like to analyse? ");

    let mut next = ask_in_range(input, output, &night_question, 1..=last)?;
    while let Some(night_id) = next {
        writeln!(output)?;
        match sleep_quality(night_id, nights) {
            Ok(r) => write!(output, "{}", report::environment(&r))?,
            Err(CoreError::EmptyInput { .. }) => {
                writeln!(output, "No sleep was recorded on night {night_id}.")?
            }
            Err(e) => return Err(e.into()),
        }

        next = if confirm(
            input,
            output,
            "Would you like to analyse another night? (Y for yes, anything else for no.) ",
        )? {
            ask_in_range(input, output, &night_question, 1..=last)?
        } else {
            None
        };
    }

    writeln!(output, "Goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sleepsim_core::{build_nights, sim_rng, BaselineParams, MetricParams};
    use std::io::Cursor;

    fn nights() -> NightCollection {
        let params = BaselineParams {
            light: MetricParams::new(2.5, 1.8),
            sound: MetricParams::new(32.0, 6.0),
            temperature: MetricParams::new(19.5, 0.8),
            movement: MetricParams::new(45.0, 30.0),
        };
        build_nights(&mut sim_rng(Some(11)), 10, 480.0, 20.0, &params).unwrap()
    }

    fn session(script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run_session(&mut input, &mut output, &nights()).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_full_session() {
        let text = session("ada\n30\n8\n0\n2\ny\n5\nn\n");
        assert!(text.contains("Hi ada!"));
        assert!(text.contains("Invalid entry. Please enter an integer between 1-24."));
        assert!(text.contains("Invalid entry. Please enter an integer between 1-10."));
        assert!(text.contains("Sleep environment on night 2"));
        assert!(text.contains("Sleep environment on night 5"));
        assert!(text.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn test_session_stops_at_end_of_input() {
        let text = session("ada\n");
        assert!(!text.contains("Goodbye!"));
        assert!(!text.contains("Am I getting enough sleep?"));
    }

    #[test]
    fn test_many_repeats_do_not_recurse() {
        let mut script = String::from("bo\n8\n1\n");
        for _ in 0..200 {
            script.push_str("y\n3\n");
        }
        script.push_str("n\n");
        let text = session(&script);
        assert_eq!(text.matches("Sleep environment on night 3").count(), 200);
    }
}
