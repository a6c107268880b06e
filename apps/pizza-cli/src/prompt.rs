//! # Console Prompts
//!
//! Numbered-menu input handling.
//!
//! ## Input Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Single choice ("Enter your choice (1/2): ")                            │
//! │  ├── "2"        → option 2                                              │
//! │  ├── "7", "x"   → re-prompt                                             │
//! │  └── EOF        → CliError::InputClosed                                 │
//! │                                                                         │
//! │  Multiple choice ("Enter your choices (e.g., 1,2): ")                   │
//! │  ├── "1, 3"     → options 1 and 3                                       │
//! │  ├── "1,x,9,1"  → option 1 (junk, out-of-range, repeats skipped)        │
//! │  └── ""         → re-prompt, at least one is required                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{CliError, CliResult};

/// Parses a 1-based choice into a 0-based index.
pub fn parse_choice(line: &str, count: usize) -> Option<usize> {
    let n: usize = line.trim().parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

/// Parses a comma-separated list of 1-based choices into 0-based indices.
///
/// Invalid entries are skipped; repeats keep their first position.
pub fn parse_choices(line: &str, count: usize) -> Vec<usize> {
    let mut picked = Vec::new();
    for index in line.split(',').filter_map(|part| parse_choice(part, count)) {
        if !picked.contains(&index) {
            picked.push(index);
        }
    }
    picked
}

/// Reads choices from `input`, writes menus to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Direct access to the output (for the summary).
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> CliResult<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line)
    }

    fn list(&mut self, title: &str, options: &[String]) -> CliResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", title)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, option)?;
        }
        Ok(())
    }

    /// Asks for exactly one option; returns its 0-based index.
    pub fn choose_one(&mut self, title: &str, options: &[String]) -> CliResult<usize> {
        self.list(title, options)?;
        let numbers = (1..=options.len())
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("/");
        let question = format!("Enter your choice ({}): ", numbers);

        loop {
            let line = self.ask(&question)?;
            match parse_choice(&line, options.len()) {
                Some(index) => return Ok(index),
                None => {
                    debug!(input = line.trim(), "Rejected choice");
                    self.say(&format!("Please enter a number from 1 to {}.", options.len()))?;
                }
            }
        }
    }

    /// Asks for one or more options; returns their 0-based indices.
    pub fn choose_many(&mut self, title: &str, options: &[String]) -> CliResult<Vec<usize>> {
        self.list(title, options)?;

        loop {
            let line = self.ask("Enter your choices (e.g., 1,2): ")?;
            let picked = parse_choices(&line, options.len());
            if !picked.is_empty() {
                return Ok(picked);
            }
            debug!(input = line.trim(), "No usable choices");
            self.say("Please choose at least one option.")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1", 2), Some(0));
        assert_eq!(parse_choice(" 2\n", 2), Some(1));
        assert_eq!(parse_choice("0", 2), None);
        assert_eq!(parse_choice("3", 2), None);
        assert_eq!(parse_choice("-1", 2), None);
        assert_eq!(parse_choice("two", 2), None);
        assert_eq!(parse_choice("", 2), None);
    }

    #[test]
    fn test_parse_choices_skips_junk_and_repeats() {
        assert_eq!(parse_choices("1, 3,x,9,1", 3), vec![0, 2]);
        assert_eq!(parse_choices("3,1", 3), vec![2, 0]);
        assert!(parse_choices("", 3).is_empty());
        assert!(parse_choices(" , ,", 3).is_empty());
    }

    #[test]
    fn test_choose_one_reprompts() {
        let mut p = prompter("9\nabc\n2\n");
        let index = p.choose_one("Select your pizza base:", &options(&["Thin", "Thick"])).unwrap();
        assert_eq!(index, 1);

        let shown = String::from_utf8(p.into_output()).unwrap();
        assert!(shown.contains("1. Thin\n2. Thick\n"));
        assert!(shown.contains("Enter your choice (1/2): "));
        assert_eq!(shown.matches("Please enter a number from 1 to 2.").count(), 2);
    }

    #[test]
    fn test_choose_many_requires_one() {
        let mut p = prompter("\n5\n2,1\n");
        let picked = p.choose_many("Toppings:", &options(&["Tomato", "Cheese"])).unwrap();
        assert_eq!(picked, vec![1, 0]);

        let shown = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(shown.matches("Please choose at least one option.").count(), 2);
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut p = prompter("7\n");
        let err = p.choose_one("Sizes:", &options(&["Small"])).unwrap_err();
        assert!(matches!(err, CliError::InputClosed));
    }
}
