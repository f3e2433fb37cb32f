//! Form submission state machine.
//!
//! ```text
//! Idle → Validating → Idle                      (invalid)
//!                   → Submitting → Success → Idle (after timeout)
//! ```
//!
//! The submit control stays disabled while `Submitting` or `Success`, and a
//! new submission is refused until the machine is back to `Idle`.

use super::error::SubmissionError;

/// Current phase of a form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
}

/// Per-form submission state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    phase: SubmissionPhase,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Whether the submit control must be disabled.
    pub fn controls_disabled(&self) -> bool {
        matches!(
            self.phase,
            SubmissionPhase::Submitting | SubmissionPhase::Success
        )
    }

    /// Start validating a new submission.
    pub fn begin(&mut self) -> Result<(), SubmissionError> {
        match self.phase {
            SubmissionPhase::Idle => {
                self.phase = SubmissionPhase::Validating;
                Ok(())
            }
            phase => Err(SubmissionError::AlreadyInFlight(phase)),
        }
    }

    /// Validation failed: back to idle.
    pub fn reject(&mut self) -> Result<(), SubmissionError> {
        self.transition(SubmissionPhase::Validating, SubmissionPhase::Idle)
    }

    /// Validation passed: start the (simulated) submission.
    pub fn accept(&mut self) -> Result<(), SubmissionError> {
        self.transition(SubmissionPhase::Validating, SubmissionPhase::Submitting)
    }

    /// Submission delay elapsed: show success.
    pub fn complete(&mut self) -> Result<(), SubmissionError> {
        self.transition(SubmissionPhase::Submitting, SubmissionPhase::Success)
    }

    /// Success indicator hidden: ready for the next submission.
    pub fn finish(&mut self) -> Result<(), SubmissionError> {
        self.transition(SubmissionPhase::Success, SubmissionPhase::Idle)
    }

    fn transition(
        &mut self,
        from: SubmissionPhase,
        to: SubmissionPhase,
    ) -> Result<(), SubmissionError> {
        if self.phase != from {
            return Err(SubmissionError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        self.phase = to;
        Ok(())
    }
}
