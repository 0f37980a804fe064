//! Wire types for the summarization service
//!
//! - `SummarizeRequest` is the `POST /summarize` body
//! - `SummaryResult` and `ActionItem` decode the success response

mod types;

pub use types::{ActionItem, SummarizeRequest, SummaryResult};
