pub mod config;
pub mod projector;
pub mod render;
pub mod submission;
pub mod summary;

pub use config::{Config, ServiceConfig};
pub use projector::{project, ActionItemRow, DisplayModel, Section};
pub use render::{render_display, render_state};
pub use submission::{
    can_submit, normalize_failure, FailureReason, HttpTransport, SubmissionController,
    SubmissionState, SubmitRejected, Transport,
};
pub use summary::{ActionItem, SummarizeRequest, SummaryResult};
