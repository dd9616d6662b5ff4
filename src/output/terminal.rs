//! Terminal output utilities.
//!
//! Provides padding helpers shared by the details panel and the subnet table.

/// Format a value as a right-aligned field of at least `width` characters.
///
/// Values longer than `width` are returned whole.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:>width$}")
}

/// Format a `label: value` line with the label padded to `width`.
pub fn format_label<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{label}:");
    format!("{label:<width$} {}", value.to_string())
}
