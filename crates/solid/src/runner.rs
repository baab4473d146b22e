//! Running several demonstrations in sequence

use std::io::Write;

use crate::{DemoContext, Principle, Result, SolidError};

/// How one demonstration ended.
#[derive(Debug)]
pub enum Outcome {
    /// Ran to the end
    Completed,

    /// Stopped at a deliberate violation, recorded because the
    /// context asked to keep going
    Violated(SolidError),
}

impl Outcome {
    /// True if the demonstration ran to the end.
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

/// Per-demonstration outcomes of a run, in the order they ran.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Each demonstration with how it ended
    pub outcomes: Vec<(Principle, Outcome)>,
}

impl RunReport {
    /// Number of demonstrations that stopped at a violation.
    pub fn violations(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_completed())
            .count()
    }

    /// True if every demonstration ran to the end.
    pub fn is_clean(&self) -> bool {
        self.violations() == 0
    }
}

/// Run `principles` in order, writing all output to `out`.
///
/// A violation ends the run with that error unless `ctx.keep_going` is
/// set, in which case it is recorded and the next demonstration starts.
/// Output errors always end the run.
pub fn run_principles(
    principles: &[Principle],
    ctx: &DemoContext,
    out: &mut dyn Write,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    for &principle in principles {
        tracing::debug!(%principle, "running demonstration");
        match principle.run(ctx, out) {
            Ok(()) => report.outcomes.push((principle, Outcome::Completed)),
            Err(err) if err.is_violation() && ctx.keep_going => {
                tracing::warn!(%principle, error = %err, "demonstration stopped at violation");
                report.outcomes.push((principle, Outcome::Violated(err)));
            }
            Err(err) => return Err(err),
        }
        out.flush()?;
    }

    tracing::debug!(
        ran = report.outcomes.len(),
        violations = report.violations(),
        "run finished"
    );
    Ok(report)
}
