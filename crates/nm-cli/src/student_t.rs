//! Student's t cumulative probabilities for three t-scores at a time.

use std::io::{BufRead, Write};

use nm_core::{Natural, Real, Settings};
use nm_math::distributions::StudentT;

use crate::{CliError, Prompter, Result};

/// Degrees of freedom the tables are asked for.
pub const ALLOWED_DF: [Natural; 3] = [7, 11, 15];

/// How many t-scores each round asks for.
pub const SCORES_PER_ROUND: usize = 3;

/// State carried between rounds.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentTSession {
    /// Degrees of freedom, offered as the default at the next prompt.
    pub df: Natural,
}

impl Default for StudentTSession {
    fn default() -> Self {
        Self { df: ALLOWED_DF[0] }
    }
}

/// `P(T < z) for m degrees of freedom = p`, to five decimals.
pub fn cdf_report(t: &StudentT, z: Real, settings: &Settings) -> nm_core::Result<String> {
    let p = t.cdf(z, settings)?;
    Ok(format!(
        "P(T < {z}) for {} degrees of freedom = {p:.5}",
        t.df()
    ))
}

/// One round: degrees of freedom, then three t-scores, then three result lines.
pub fn round<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    session: &mut StudentTSession,
    settings: &Settings,
) -> Result<()> {
    let df = loop {
        let df = p.natural("Enter degrees of freedom (m=7, 11, or 15):", session.df)?;
        if ALLOWED_DF.contains(&df) {
            break df;
        }
        writeln!(p.output(), "Invalid choice! Please enter 7, 11, or 15.")?;
    };
    session.df = df;
    let t = StudentT::new(df)?;

    let mut scores = [0.0; SCORES_PER_ROUND];
    for z in scores.iter_mut() {
        *z = p.real_required("Enter t-score (z value): ")?;
    }
    for z in scores {
        match cdf_report(&t, z, settings) {
            Ok(line) => writeln!(p.output(), "{line}")?,
            Err(e) => {
                tracing::debug!(error = %e, "rejected t-score");
                writeln!(p.output(), "Error: {e}")?
            }
        }
    }
    Ok(())
}

/// Run rounds until the user declines to go again or input ends.
pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>, settings: &Settings) -> Result<()> {
    let mut session = StudentTSession::default();
    loop {
        match round(p, &mut session, settings) {
            Err(CliError::InputClosed) => return Ok(()),
            other => other?,
        }
        match p.yes_no("Go again? (Y/N):", false) {
            Ok(true) => continue,
            Ok(false) | Err(CliError::InputClosed) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}
