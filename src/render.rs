//! Plain-text rendering for the terminal

use crate::projector::{project, ActionItemRow, DisplayModel, Section, NONE_PLACEHOLDER};
use crate::submission::SubmissionState;
use std::fmt::{self, Write};

const HEADERS: [&str; 4] = ["Task", "Owner", "Due", "Priority"];

impl fmt::Display for DisplayModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "Meeting Title")?;
        writeln!(f, "{}", self.meeting_title.as_deref().unwrap_or_default())?;

        heading(f, "Summary")?;
        bullets(f, &self.summary_bullets)?;

        heading(f, "Decisions")?;
        bullets(f, &self.decisions)?;

        heading(f, "Action Items")?;
        action_table(f, &self.action_items)?;

        heading(f, "Risks / Blockers")?;
        bullets(f, &self.risks_blockers)?;

        heading(f, "Open Questions")?;
        bullets(f, &self.open_questions)
    }
}

/// Render a state for the terminal
///
/// `Failed` renders as `Error: <message>`; `include_raw` appends the verbatim payload.
pub fn render_state(state: &SubmissionState, include_raw: bool) -> String {
    match state {
        SubmissionState::Idle => String::new(),
        SubmissionState::InFlight => "Summarizing...".to_string(),
        SubmissionState::Failed(message) => format!("Error: {}", message),
        SubmissionState::Succeeded(result) => render_display(&project(result), include_raw),
    }
}

pub fn render_display(model: &DisplayModel, include_raw: bool) -> String {
    let mut out = model.to_string();
    if include_raw {
        out.push_str("\n## Raw JSON\n");
        out.push_str(&model.raw_json());
        out.push('\n');
    }
    out
}

fn heading(f: &mut impl Write, title: &str) -> fmt::Result {
    writeln!(f, "\n## {}", title)
}

fn bullets(f: &mut impl Write, section: &Section<String>) -> fmt::Result {
    match section {
        Section::None => writeln!(f, "{}", NONE_PLACEHOLDER),
        Section::Items(items) => items.iter().try_for_each(|item| writeln!(f, "- {}", item)),
    }
}

fn action_table(f: &mut impl Write, section: &Section<ActionItemRow>) -> fmt::Result {
    let rows = match section {
        Section::None => return writeln!(f, "{}", NONE_PLACEHOLDER),
        Section::Items(rows) => rows,
    };

    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|row| [&*row.task, &*row.owner, &*row.due_date, &*row.priority])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    table_row(f, &HEADERS, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
    table_row(f, &rule, &widths)?;
    for row in &cells {
        table_row(f, row, &widths)?;
    }
    Ok(())
}

fn table_row(f: &mut impl Write, cells: &[&str], widths: &[usize]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "{}", line.trim_end())
}
