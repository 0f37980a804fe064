//! Transcript submission lifecycle
//!
//! This module provides the `SubmissionController` that manages:
//! - The submit gating rule (non-blank transcript, nothing in flight)
//! - The single outbound `POST /summarize` call
//! - Settlement into `Succeeded` or `Failed` state
//! - Normalization of heterogeneous failure bodies into one message

mod controller;
mod error;
mod normalize;
mod state;
mod transport;

pub use controller::SubmissionController;
pub use error::{FailureReason, SubmitRejected, TransportError, UNKNOWN_ERROR};
pub use normalize::{classify_failure, normalize_failure, ErrorDetail, LocSegment, ValidationIssue};
pub use state::{can_submit, SubmissionState};
pub use transport::{HttpTransport, RawResponse, Transport};
