//! Edit transitions and the stateful converter
//!
//! An edit to field K runs as one synchronous transition: parse K's raw
//! text, then either report the failure (no writes), clear everything
//! (empty input), or re-render the four other fields from the parsed
//! sequence. The transition is a pure function returning its render
//! effects; applying those effects cannot re-enter the edit path, so no
//! re-entrancy guard exists anywhere.
//!
//! [`Converter`] is the stateful wrapper collaborators talk to: it mirrors
//! the five display strings and validity flags, applies transitions to
//! them, and serves the bulk snapshot used by copy-all and the CLI.

use crate::convert::field::SourceField;
use crate::convert::formatting::render_field;
use crate::convert::parsing::parse_field;
use crate::convert::status::{report, StatusReport};
use serde::Serialize;

/// Input used by the sample-load command
pub const SAMPLE_TEXT: &str = "Hello";

/// One render effect: overwrite a field's display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWrite {
    pub field: SourceField,
    pub text: String,
}

/// The complete outcome of one edit transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Fields to overwrite: the four non-source fields on success, all five
    /// on clear, none on failure
    pub writes: Vec<FieldWrite>,
    /// The field to mark invalid, if the parse failed
    pub invalid: Option<SourceField>,
    pub status: StatusReport,
}

/// Run the transition for an edit to `source` containing `raw`.
///
/// `current_text` is the Text field's content before the edit; it feeds the
/// character counter on paths that do not rewrite the Text field.
pub fn transition(source: SourceField, raw: &str, current_text: &str) -> Transition {
    let values = match parse_field(source, raw) {
        Err(err) => {
            // Failure: no writes, only the source field is marked invalid
            let status = report(&[], source, Some(&err), current_text.chars().count());
            return Transition {
                writes: Vec::new(),
                invalid: Some(source),
                status,
            };
        }
        Ok(values) => values,
    };

    // The clear path keys on the raw input being empty, not on the sequence:
    // an empty sequence from non-empty input must not wipe the other fields.
    if values.is_empty() && raw.trim().is_empty() {
        let writes = SourceField::ALL
            .iter()
            .map(|&field| FieldWrite {
                field,
                text: String::new(),
            })
            .collect();
        return Transition {
            writes,
            invalid: None,
            status: report(&[], source, None, 0),
        };
    }

    let writes: Vec<FieldWrite> = SourceField::ALL
        .iter()
        .filter(|&&field| field != source)
        .map(|&field| FieldWrite {
            field,
            text: render_field(field, &values),
        })
        .collect();

    let text_chars = if source == SourceField::Text {
        raw.chars().count()
    } else {
        writes
            .iter()
            .find(|write| write.field == SourceField::Text)
            .map(|write| write.text.chars().count())
            .unwrap_or(0)
    };

    Transition {
        writes,
        invalid: None,
        status: report(&values, source, None, text_chars),
    }
}

/// Trimmed copies of all five field texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub text: String,
    pub decimal: String,
    pub binary: String,
    pub hex: String,
    pub octal: String,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.decimal.is_empty()
            && self.binary.is_empty()
            && self.hex.is_empty()
            && self.octal.is_empty()
    }

    /// The multi-line payload used by the copy-all action
    pub fn clipboard_payload(&self) -> String {
        format!(
            "Text: {}\nDecimal: {}\nBinary: {}\nHex: {}\nOctal: {}",
            self.text, self.decimal, self.binary, self.hex, self.octal
        )
    }
}

/// The five synchronized display strings plus validity flags and status.
///
/// At rest, the four non-source fields are always renderings of the same
/// sequence; the source field keeps the user's literal text until their
/// next edit.
#[derive(Debug, Clone)]
pub struct Converter {
    texts: [String; SourceField::COUNT],
    invalid: [bool; SourceField::COUNT],
    status: StatusReport,
}

impl Converter {
    pub fn new() -> Self {
        Converter {
            texts: Default::default(),
            invalid: [false; SourceField::COUNT],
            status: report(&[], SourceField::Text, None, 0),
        }
    }

    /// Current display text for a field
    pub fn field_text(&self, field: SourceField) -> &str {
        &self.texts[field.index()]
    }

    /// Whether a field is currently marked invalid
    pub fn is_invalid(&self, field: SourceField) -> bool {
        self.invalid[field.index()]
    }

    pub fn status(&self) -> &StatusReport {
        &self.status
    }

    /// Handle an edit event: `field`'s content is now `raw`.
    ///
    /// The source field keeps the raw text as typed (it is the user's live
    /// input); the transition decides what happens to the other four.
    pub fn apply_edit(&mut self, field: SourceField, raw: &str) -> &StatusReport {
        self.texts[field.index()] = raw.to_string();
        let next = transition(field, raw, &self.texts[SourceField::Text.index()]);
        self.apply(next)
    }

    /// Apply a transition's effects to the mirrored state.
    fn apply(&mut self, next: Transition) -> &StatusReport {
        self.invalid = [false; SourceField::COUNT];
        if let Some(field) = next.invalid {
            self.invalid[field.index()] = true;
        }
        for write in next.writes {
            self.texts[write.field.index()] = write.text;
        }
        self.status = next.status;
        &self.status
    }

    /// External clear command: empty every field, neutral status.
    pub fn clear_all(&mut self) -> &StatusReport {
        for text in self.texts.iter_mut() {
            text.clear();
        }
        self.invalid = [false; SourceField::COUNT];
        self.status = report(&[], SourceField::Text, None, 0);
        &self.status
    }

    /// External sample-load command: a full Text-sourced transition.
    pub fn load_sample(&mut self) -> &StatusReport {
        self.apply_edit(SourceField::Text, SAMPLE_TEXT)
    }

    /// Bulk snapshot of all five fields, trimmed.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            text: self.field_text(SourceField::Text).trim().to_string(),
            decimal: self.field_text(SourceField::Decimal).trim().to_string(),
            binary: self.field_text(SourceField::Binary).trim().to_string(),
            hex: self.field_text(SourceField::Hex).trim().to_string(),
            octal: self.field_text(SourceField::Octal).trim().to_string(),
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
