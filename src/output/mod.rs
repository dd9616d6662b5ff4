//! Output formatting for engine results.
//!
//! This module handles presenting calculation results:
//! - [`table`] - details panel and sibling subnet table
//! - [`context`] - snapshot for the advisory collaborator
//! - [`terminal`] - padding helpers

mod context;
mod table;
mod terminal;

pub use context::{context_block, context_json};
pub use table::{details_lines, enumeration_lines, issues_line, print_report, row_line};
pub use terminal::{format_field, format_label};
