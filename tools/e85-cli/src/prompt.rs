//! Line-based console prompts
//!
//! Every question re-asks until the answer is acceptable. End of input is an error so a
//! closed stdin cannot spin a retry loop forever.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use e85_rom::Serial;

/// Asks questions on `output` and reads trimmed answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer the questions go to, for output between prompts.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `question` and return the trimmed answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            bail!("unexpected end of input");
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer is 1 to 12 digits.
    pub fn ask_serial(&mut self) -> Result<Serial> {
        loop {
            let answer = self.ask("Please enter the serial number (1 to 12 digits): ")?;
            if let Ok(serial) = Serial::parse(&answer) {
                return Ok(serial);
            }
            writeln!(self.output, "Invalid input. Enter from 1 to 12 digits.")?;
        }
    }

    /// Yes only for `y`/`Y`; anything else is no.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        Ok(self.ask(question)?.eq_ignore_ascii_case("y"))
    }

    /// Ask until the answer is non-empty.
    pub fn ask_non_empty(&mut self, question: &str) -> Result<String> {
        loop {
            let answer = self.ask(question)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Ask until the answer (case-insensitive) is one of `choices`; returns it lowercased.
    pub fn ask_choice(&mut self, question: &str, choices: &[char], retry: &str) -> Result<char> {
        loop {
            let answer = self.ask(question)?.to_ascii_lowercase();
            let mut chars = answer.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if choices.contains(&c) => return Ok(c),
                _ => writeln!(self.output, "{}", retry)?,
            }
        }
    }

    /// Wait for Enter. End of input counts as Enter.
    pub fn pause(&mut self) -> Result<()> {
        write!(self.output, "Press Enter to exit...")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }
}
