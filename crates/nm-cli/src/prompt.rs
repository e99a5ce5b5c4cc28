//! Line-oriented prompting with default fallbacks.

use std::io::{BufRead, Write};

use nm_core::{
    utilities::{
        data_formatters::format_flag,
        data_parsers::{parse_finite, parse_natural_or, parse_real_or, parse_yes_no_or},
    },
    Natural, Real,
};

use crate::{CliError, Result};

/// Asks questions on `W` and reads answers from `R`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for plain result lines.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompter and return the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and return the trimmed answer.
    ///
    /// Fails with [`CliError::InputClosed`] at end of input.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }

    /// Ask for a real number, showing `default` and keeping it on an empty
    /// answer. Unparsable answers are asked again.
    pub fn real(&mut self, question: &str, default: Real) -> Result<Real> {
        loop {
            let answer = self.ask(&format!("{question} ({default:0.3}) "))?;
            match parse_real_or(&answer, default) {
                Some(v) => return Ok(v),
                None => writeln!(self.output, "Invalid input! Please enter a numeric value.")?,
            }
        }
    }

    /// Ask for a real number with no default. Empty, non-finite and
    /// unparsable answers are asked again.
    pub fn real_required(&mut self, question: &str) -> Result<Real> {
        loop {
            let answer = self.ask(question)?;
            match parse_finite(&answer) {
                Some(v) => return Ok(v),
                None => writeln!(self.output, "Invalid input! Please enter a numeric value.")?,
            }
        }
    }

    /// Ask for a non-negative integer, keeping `default` on an empty answer.
    pub fn natural(&mut self, question: &str, default: Natural) -> Result<Natural> {
        loop {
            let answer = self.ask(&format!("{question} ({default}) "))?;
            match parse_natural_or(&answer, default) {
                Some(v) => return Ok(v),
                None => writeln!(self.output, "Invalid input! Please enter an integer.")?,
            }
        }
    }

    /// Ask a yes/no question. `y`, `yes` and `true` (any case) mean yes,
    /// an empty answer keeps `default`, anything else means no.
    pub fn yes_no(&mut self, question: &str, default: bool) -> Result<bool> {
        let answer = self.ask(&format!("{question} ({}) ", format_flag(default)))?;
        Ok(parse_yes_no_or(&answer, default))
    }
}
