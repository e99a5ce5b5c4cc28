//! # nm-cli
//!
//! Interactive front-ends over the numethods core. Each program reads
//! answers line by line from any `BufRead` and writes to any `Write`, so a
//! whole session can be driven from a string in tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::io;

use thiserror::Error;

pub mod linear;
pub mod normal;
pub mod prompt;
pub mod student_t;

pub use prompt::Prompter;

/// Errors that end a CLI session.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The numeric core rejected the request.
    #[error(transparent)]
    Numeric(#[from] nm_core::Error),

    /// Input ended while a prompt was waiting for an answer.
    #[error("input closed")]
    InputClosed,

    /// Bad command line.
    #[error("usage: {0}")]
    Usage(String),
}

/// Shorthand `Result` for the CLI.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// The programs the binary can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Gaussian probabilities and cut-offs.
    Normal,
    /// Student's t cumulative probabilities.
    StudentT,
    /// Direct and Gauss-Seidel linear solves.
    Linear,
}

impl Command {
    /// Parse a subcommand name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "normal" => Ok(Command::Normal),
            "student-t" | "t" => Ok(Command::StudentT),
            "linear" => Ok(Command::Linear),
            other => Err(CliError::Usage(format!(
                "unknown command {other:?}, expected normal, student-t or linear"
            ))),
        }
    }
}

/// Run `command` against the given input and output.
pub fn run<R: io::BufRead, W: io::Write>(
    command: Command,
    settings: &nm_core::Settings,
    input: R,
    output: W,
) -> Result<()> {
    let mut prompter = Prompter::new(input, output);
    match command {
        Command::Normal => normal::run(&mut prompter, settings),
        Command::StudentT => student_t::run(&mut prompter, settings),
        Command::Linear => linear::run(prompter.output(), settings),
    }
}
