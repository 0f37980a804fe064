use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /summarize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Transcript exactly as the user typed it (not trimmed)
    pub transcript: String,
}

impl SummarizeRequest {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

/// A single task extracted from the transcript
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionItem {
    pub task: String,

    /// Who owns the task, if the transcript names someone
    pub owner: Option<String>,

    /// Due date (YYYY-MM-DD) if explicitly stated
    pub due_date: Option<String>,

    /// "low", "medium" or "high" from the service; not enforced here
    pub priority: String,

    /// Transcript excerpt the item was extracted from
    #[serde(default)]
    pub source_quote: Option<String>,
}

/// Structured summary returned by the service on success
///
/// Sequence fields are `None` when the service omitted them or sent `null`.
/// The verbatim JSON the result was decoded from is kept alongside for raw display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryResult {
    pub meeting_title: Option<String>,
    pub summary_bullets: Option<Vec<String>>,
    pub decisions: Option<Vec<String>>,
    pub action_items: Option<Vec<ActionItem>>,
    pub risks_blockers: Option<Vec<String>>,
    pub open_questions: Option<Vec<String>>,

    #[serde(skip)]
    raw: Value,
}

impl SummaryResult {
    /// Decode a success response body
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        let raw: Value = serde_json::from_slice(body)?;
        Self::from_value(raw)
    }

    /// Decode from an already-parsed JSON value, retaining it verbatim
    pub fn from_value(raw: Value) -> serde_json::Result<Self> {
        let mut result: SummaryResult = serde_json::from_value(raw.clone())?;
        result.raw = raw;
        Ok(result)
    }

    /// The payload exactly as received
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}
