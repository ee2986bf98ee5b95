//! Status reporting
//!
//! Derives the human-readable status line and its severity from a parse
//! outcome, plus the two live counters: sequence length ("N bytes") and the
//! character length of the Text field's current content ("N chars"). The
//! character count always reflects the Text field as displayed, whichever
//! field the edit came from.

use crate::convert::field::SourceField;
use crate::convert::parsing::{InvalidToken, Value};
use serde::Serialize;

/// Largest value that still counts as ASCII for the status marker
pub const ASCII_MAX: Value = 127;

/// Status severity, mirrored by the UI's status styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Neutral,
    Success,
    Warning,
    Error,
}

/// One status line plus the two counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub message: String,
    pub severity: Severity,
    /// Length of the parsed sequence
    pub byte_count: usize,
    /// Character count of the Text field's current content
    pub char_count: usize,
}

/// Derive the status for a transition.
///
/// The failure message is reported verbatim; otherwise a non-empty sequence
/// reports its source, with a marker appended when any value is non-ASCII.
pub fn report(
    values: &[Value],
    source: SourceField,
    error: Option<&InvalidToken>,
    text_chars: usize,
) -> StatusReport {
    let has_values = !values.is_empty();
    let non_ascii = values.iter().any(|&value| value > ASCII_MAX);

    let message = match error {
        Some(err) => err.to_string(),
        None if has_values => {
            let marker = if non_ascii { " · Non-ASCII values" } else { "" };
            format!("Updated from {}{}", source.label(), marker)
        }
        None => "Ready".to_string(),
    };

    let severity = if error.is_some() {
        Severity::Error
    } else if non_ascii {
        Severity::Warning
    } else if has_values {
        Severity::Success
    } else {
        Severity::Neutral
    };

    StatusReport {
        message,
        severity,
        byte_count: values.len(),
        char_count: text_chars,
    }
}
