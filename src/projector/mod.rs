//! Display-safe projection of a summary
//!
//! Empty or absent sequences become an explicit `Section::None` and optional
//! action-item fields get their fallback text, so renderers never see holes.

mod display;

pub use display::{
    project, ActionItemRow, DisplayModel, Section, NONE_PLACEHOLDER, NO_DUE_DATE, UNASSIGNED,
};
