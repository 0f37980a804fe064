use crate::summary::SummaryResult;

/// Lifecycle of a single submission
///
/// Replaced wholesale on every transition, so a stale result can never be
/// shown next to a new error or an in-flight marker.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded(SummaryResult),
    Failed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Whether the submission has settled (success or failure)
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    pub fn result(&self) -> Option<&SummaryResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The only gating rule for the submit action
pub fn can_submit(state: &SubmissionState, input: &str) -> bool {
    !input.trim().is_empty() && !state.is_in_flight()
}
