//! Submission lifecycle for one quiz run.

use crate::domain::foundation::StateMachine;

/// Status of a single quiz submission.
///
/// The UI permits only one in-flight submission at a time: `Submitting`
/// disables further submits until the pipeline resolves. A failed
/// submission can return to `Collecting` via the "try again" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Gathering answers, one question at a time.
    Collecting,
    /// Pipeline invoked; awaiting the analysis result.
    Submitting,
    /// Analysis returned and validated.
    Succeeded,
    /// Retries exhausted; a terminal failure was shown.
    Failed,
}

impl StateMachine for SubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, target),
            (Collecting, Submitting)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
                | (Failed, Collecting)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionStatus::*;
        match self {
            Collecting => vec![Submitting],
            Submitting => vec![Succeeded, Failed],
            Succeeded => vec![],
            Failed => vec![Collecting],
        }
    }
}
