use crate::summary::{ActionItem, SummaryResult};
use serde_json::Value;

/// Shown in place of a section with no items
pub const NONE_PLACEHOLDER: &str = "None";

/// Owner shown for an action item nobody was assigned
pub const UNASSIGNED: &str = "Unassigned";

/// Due date shown when none was stated
pub const NO_DUE_DATE: &str = "None";

/// A list section that is either explicitly empty or has items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<T> {
    None,
    Items(Vec<T>),
}

impl<T> Section<T> {
    fn from_items<U>(items: Option<&[U]>, f: impl Fn(&U) -> T) -> Self {
        match items {
            Some(items) if !items.is_empty() => Self::Items(items.iter().map(f).collect()),
            _ => Self::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Items, or an empty slice for `Section::None`
    pub fn items(&self) -> &[T] {
        match self {
            Self::None => &[],
            Self::Items(items) => items,
        }
    }
}

/// One row of the action-item table, every cell filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItemRow {
    pub task: String,
    pub owner: String,
    pub due_date: String,
    pub priority: String,
}

impl From<&ActionItem> for ActionItemRow {
    fn from(item: &ActionItem) -> Self {
        Self {
            task: item.task.clone(),
            owner: item.owner.clone().unwrap_or_else(|| UNASSIGNED.to_string()),
            due_date: item.due_date.clone().unwrap_or_else(|| NO_DUE_DATE.to_string()),
            priority: item.priority.clone(),
        }
    }
}

/// What a renderer shows for a settled summary
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    /// Passed through as-is; a missing title is not masked
    pub meeting_title: Option<String>,
    pub summary_bullets: Section<String>,
    pub decisions: Section<String>,
    pub action_items: Section<ActionItemRow>,
    pub risks_blockers: Section<String>,
    pub open_questions: Section<String>,

    /// Payload exactly as received
    pub raw: Value,
}

impl DisplayModel {
    /// Raw payload pretty-printed with two-space indentation
    pub fn raw_json(&self) -> String {
        format!("{:#}", self.raw)
    }
}

/// Project a summary for display
pub fn project(result: &SummaryResult) -> DisplayModel {
    DisplayModel {
        meeting_title: result.meeting_title.clone(),
        summary_bullets: strings(&result.summary_bullets),
        decisions: strings(&result.decisions),
        action_items: Section::from_items(result.action_items.as_deref(), |item| {
            ActionItemRow::from(item)
        }),
        risks_blockers: strings(&result.risks_blockers),
        open_questions: strings(&result.open_questions),
        raw: result.raw().clone(),
    }
}

fn strings(items: &Option<Vec<String>>) -> Section<String> {
    Section::from_items(items.as_deref(), String::clone)
}
