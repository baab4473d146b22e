//! Run context configuration

use crate::error::Result;

/// Configuration for a demonstration run.
///
/// This is passed to every demonstration and controls how the
/// deliberately violating calls are treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoContext {
    /// Record a violation and move on to the next demonstration
    /// instead of ending the run
    pub keep_going: bool,

    /// Actually make the violating calls. When false they are
    /// logged and skipped.
    pub trigger_violations: bool,
}

impl Default for DemoContext {
    fn default() -> Self {
        Self {
            keep_going: false,
            trigger_violations: true,
        }
    }
}

impl DemoContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that records violations and keeps running.
    pub fn keep_going() -> Self {
        Self {
            keep_going: true,
            ..Default::default()
        }
    }

    /// Create a context that never makes the violating calls.
    pub fn skip_violations() -> Self {
        Self {
            trigger_violations: false,
            ..Default::default()
        }
    }

    /// Make a deliberately violating call, or skip it if violations are off.
    ///
    /// `what` names the call for the log.
    pub fn violate<F>(&self, what: &str, call: F) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
    {
        if !self.trigger_violations {
            tracing::info!(call = what, "skipping violating call");
            return Ok(());
        }
        tracing::debug!(call = what, "making violating call");
        call()
    }
}
