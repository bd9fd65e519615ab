/// Lifecycle of a vote submission within one page load.
///
/// `Failed` accepts another attempt; `Succeeded` is terminal because the
/// widget switches to the results view. Re-entrancy while `Submitting` is
/// prevented structurally by disabling the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }

    pub fn accepts_submission(self) -> bool {
        matches!(self, Self::Idle | Self::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_accepts_submission() {
        assert!(SubmissionState::default().accepts_submission());
        assert!(!SubmissionState::default().is_submitting());
    }

    #[test]
    fn test_in_flight_submission_blocks_reentry() {
        assert!(!SubmissionState::Submitting.accepts_submission());
        assert!(SubmissionState::Submitting.is_submitting());
    }

    #[test]
    fn test_failure_permits_retry_but_success_does_not() {
        assert!(SubmissionState::Failed.accepts_submission());
        assert!(!SubmissionState::Succeeded.accepts_submission());
    }
}
