use thiserror::Error;

/// Shown when a failure carries no usable text
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Why a settled submission failed
///
/// `Display` is the single user-facing message stored in `SubmissionState::Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    /// No response was obtained (connection refused, DNS, broken body stream)
    #[error("{0}")]
    Transport(String),

    /// The service answered a failure status with a usable `detail`
    #[error("{message}")]
    Service { status: u16, message: String },

    /// Failure status whose body is not JSON or has no usable `detail`
    #[error("Request failed ({status})")]
    MalformedErrorBody { status: u16 },

    /// Success status but the body is not a summary
    #[error("Unexpected response from summarization service: {0}")]
    ContractViolation(String),
}

impl FailureReason {
    /// Transport failure; a blank description becomes `UNKNOWN_ERROR`
    pub fn transport(description: impl Into<String>) -> Self {
        Self::Transport(non_blank(description.into()))
    }

    /// Service failure; a blank message becomes `UNKNOWN_ERROR`
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: non_blank(message.into()),
        }
    }

    /// HTTP status the failure came with, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } | Self::MalformedErrorBody { status } => Some(*status),
            Self::Transport(_) | Self::ContractViolation(_) => None,
        }
    }
}

fn non_blank(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}

/// A submission refused before anything was sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("transcript is empty")]
    EmptyTranscript,

    #[error("a summary request is already in flight")]
    InFlight,
}

/// Transport-level failure: no HTTP response was obtained
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}
