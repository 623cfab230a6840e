//! Line-based prompting with re-validation.
//!
//! Every prompt loops until it gets acceptable input. End of input yields
//! `None` so callers can stop cleanly instead of spinning.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

/// Ask a question and return the trimmed answer, or `None` at end of input.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for an integer within `range`, re-prompting until one is given.
pub fn ask_in_range<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    range: RangeInclusive<u32>,
) -> io::Result<Option<u32>> {
    let retry = format!(
        "Invalid entry. Please enter an integer between {}-{}. ",
        range.start(),
        range.end()
    );
    let mut current = question.to_string();
    loop {
        let Some(answer) = ask(input, output, &current)? else {
            return Ok(None);
        };
        match answer.parse::<u32>() {
            Ok(value) if range.contains(&value) => return Ok(Some(value)),
            _ => current.clone_from(&retry),
        }
    }
}

/// Ask a yes/no question; only "y"/"Y" counts as yes.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    Ok(ask(input, output, question)?.is_some_and(|a| a.eq_ignore_ascii_case("y")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reprompts_until_valid() {
        let mut input = Cursor::new("abc\n0\n25\n8\n");
        let mut output = Vec::new();
        let value = ask_in_range(&mut input, &mut output, "Hours? ", 1..=24).unwrap();
        assert_eq!(value, Some(8));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Invalid entry").count(), 3);
        assert!(text.starts_with("Hours? "));
    }

    #[test]
    fn test_end_of_input() {
        let mut input = Cursor::new("nope\n");
        let mut output = Vec::new();
        let value = ask_in_range(&mut input, &mut output, "Night? ", 1..=100).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_confirm() {
        let mut output = Vec::new();
        assert!(confirm(&mut Cursor::new("y\n"), &mut output, "?").unwrap());
        assert!(confirm(&mut Cursor::new(" Y \n"), &mut output, "?").unwrap());
        assert!(!confirm(&mut Cursor::new("yes\n"), &mut output, "?").unwrap());
        assert!(!confirm(&mut Cursor::new(""), &mut output, "?").unwrap());
    }

    #[test]
    fn test_ask_trims() {
        let mut output = Vec::new();
        let answer = ask(&mut Cursor::new("  ada  \n"), &mut output, "Name? ").unwrap();
        assert_eq!(answer.as_deref(), Some("ada"));
    }
}
