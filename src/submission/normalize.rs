use super::error::FailureReason;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Shape of the `detail` field of a failure body
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    /// `{"detail": "..."}`
    Message(String),
    /// `{"detail": [{"loc": [...], "msg": "..."}, ...]}`
    Validation(Vec<ValidationIssue>),
    /// Missing, `null`, empty string, or any other shape
    Unknown,
}

/// One entry of a field-validation failure list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub loc: Option<Vec<LocSegment>>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// A path element of `loc`: a field name or an index
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    Name(String),
    Index(serde_json::Number),
    Other(Value),
}

impl ErrorDetail {
    /// Classify the `detail` value of a parsed failure body
    pub fn from_value(detail: Option<&Value>) -> Self {
        match detail {
            Some(Value::String(message)) if !message.is_empty() => Self::Message(message.clone()),
            Some(Value::Array(items)) => items
                .iter()
                .map(ValidationIssue::deserialize)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Validation)
                .unwrap_or(Self::Unknown),
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{}", index),
            Self::Other(Value::Null) => Ok(()),
            Self::Other(other) => write!(f, "{}", other),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // An empty loc still renders the colon
        for (i, segment) in self.loc.iter().flatten().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        write!(f, ": {}", self.msg.as_deref().unwrap_or_default())
    }
}

/// Turn a non-success response into a failure reason
pub fn classify_failure(status: u16, body: &[u8]) -> FailureReason {
    let Ok(payload) = serde_json::from_slice::<Value>(body) else {
        return FailureReason::MalformedErrorBody { status };
    };

    match ErrorDetail::from_value(payload.get("detail")) {
        ErrorDetail::Message(message) => FailureReason::service(status, message),
        ErrorDetail::Validation(issues) => FailureReason::service(
            status,
            issues
                .iter()
                .map(ValidationIssue::to_string)
                .collect::<Vec<_>>()
                .join(" | "),
        ),
        ErrorDetail::Unknown => FailureReason::MalformedErrorBody { status },
    }
}

/// The single display message for a non-success response
pub fn normalize_failure(status: u16, body: &[u8]) -> String {
    classify_failure(status, body).to_string()
}
