//! Gaussian probabilities: either `P` from a cut-off `c`, or the cut-off `c`
//! that gives a target `P`.

use std::io::{BufRead, Write};

use nm_core::{Real, Settings};
use nm_math::distributions::{find_cutoff, Coverage, Gaussian, Tail};

use crate::{CliError, Prompter, Result};

/// What the user is solving for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Given `c`, compute `P`.
    Probability,
    /// Given `P`, solve for `c`.
    Cutoff,
}

/// Answers carried from one round to the next; each one is the default shown
/// at the following prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalSession {
    /// Population mean.
    pub mean: Real,
    /// Standard deviation.
    pub stdev: Real,
    /// Cut-off value.
    pub c: Real,
    /// Target probability when solving for `c`.
    pub target: Real,
    /// One-sided (`true`) or symmetric two-sided probability.
    pub one_sided: bool,
    /// `P(x > c)` when `true`, `P(x < c)` otherwise.
    pub greater_than: bool,
}

impl Default for NormalSession {
    fn default() -> Self {
        Self {
            mean: 0.0,
            stdev: 1.0,
            c: 0.5,
            target: 0.5,
            one_sided: true,
            greater_than: false,
        }
    }
}

impl NormalSession {
    fn tail(&self) -> Tail {
        Tail::from_greater_than(self.greater_than)
    }

    fn coverage(&self) -> Coverage {
        if self.one_sided {
            Coverage::OneSided(self.tail())
        } else {
            Coverage::TwoSided
        }
    }

    /// Result line for the current `c`.
    pub fn probability_report(&self, settings: &Settings) -> nm_core::Result<String> {
        let g = Gaussian::new(self.mean, self.stdev)?;
        if self.one_sided {
            let p = g.probability(self.c, self.tail(), settings)?;
            Ok(format!(
                "P(x {} {:.2} | {:.2}, {:.2}) = {:.3}",
                self.tail(),
                self.c,
                self.mean,
                self.stdev,
                p
            ))
        } else {
            let p = g.symmetric_interval_probability(self.c, settings)?;
            let (lo, hi) = g.symmetric_interval(self.c);
            Ok(format!(
                "P({lo:.2} < x < {hi:.2} | {:.2}, {:.2}) = {p:.3}",
                self.mean, self.stdev
            ))
        }
    }

    /// Result line for the current target probability.
    pub fn cutoff_report(&self, settings: &Settings) -> nm_core::Result<String> {
        let g = Gaussian::new(self.mean, self.stdev)?;
        let r = find_cutoff(g, self.coverage(), self.target, settings)?;
        Ok(format!(
            "Value of c that gives probability {:.3} is: {:.3}",
            self.target, r.root
        ))
    }
}

fn ask_mode<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Mode> {
    loop {
        let answer = p.ask(concat!(
            "Are you specifying c and solving for P (enter 'P') ",
            "or specifying P and solving for c (enter 'C')? ",
        ))?;
        match answer.to_lowercase().as_str() {
            "p" => return Ok(Mode::Probability),
            "c" => return Ok(Mode::Cutoff),
            _ => writeln!(p.output(), "Please enter 'P' or 'C'.")?,
        }
    }
}

/// One question-and-answer round. Numeric rejections from the core are
/// printed and do not end the session.
pub fn round<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    session: &mut NormalSession,
    settings: &Settings,
) -> Result<()> {
    let mode = ask_mode(p)?;
    session.mean = p.real("Population mean?", session.mean)?;
    session.stdev = p.real("Standard deviation?", session.stdev)?;
    match mode {
        Mode::Probability => session.c = p.real("c value?", session.c)?,
        Mode::Cutoff => session.target = p.real("Target probability?", session.target)?,
    }
    session.greater_than = p.yes_no("Probability greater than c?", session.greater_than)?;
    session.one_sided = p.yes_no("One-sided probability?", session.one_sided)?;

    let report = match mode {
        Mode::Probability => session.probability_report(settings),
        Mode::Cutoff => session.cutoff_report(settings),
    };
    match report {
        Ok(line) => writeln!(p.output(), "{line}")?,
        Err(e) => {
            tracing::debug!(error = %e, "rejected normal-probability request");
            writeln!(p.output(), "Error: {e}")?
        }
    }
    Ok(())
}

/// Run rounds until the user declines to go again or input ends.
pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>, settings: &Settings) -> Result<()> {
    let mut session = NormalSession::default();
    loop {
        match round(p, &mut session, settings) {
            Err(CliError::InputClosed) => return Ok(()),
            other => other?,
        }
        match p.yes_no("Go again? (Y/N)", false) {
            Ok(true) => continue,
            Ok(false) | Err(CliError::InputClosed) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}
