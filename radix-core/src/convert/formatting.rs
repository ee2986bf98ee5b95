//! Rendering the value sequence back into field text
//!
//! Formatting is total: out-of-range values are clamped, never rejected.
//! Text rendering clamps each value into the code-point range; the few
//! clamped values that still cannot be a Rust `char` (the surrogate range)
//! render as U+FFFD. Numeric rendering keeps the full value, uppercases
//! digits for bases above 10, zero-pads to the field's fixed width and
//! joins tokens with single spaces.

use crate::convert::field::SourceField;
use crate::convert::parsing::Value;

/// Largest valid Unicode code point
pub const MAX_CODE_POINT: Value = 0x10FFFF;

/// Render the sequence as plain text, one code point per value.
pub fn values_to_text(values: &[Value]) -> String {
    values
        .iter()
        .map(|&value| {
            let clamped = value.min(MAX_CODE_POINT) as u32;
            char::from_u32(clamped).unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect()
}

/// Render the sequence in a radix, zero-padded, space-joined.
pub fn format_values(values: &[Value], radix: u32, pad: Option<usize>) -> String {
    values
        .iter()
        .map(|&value| {
            let rendered = match radix {
                2 => format!("{value:b}"),
                8 => format!("{value:o}"),
                16 => format!("{value:X}"),
                _ => value.to_string(),
            };
            match pad {
                Some(width) => format!("{rendered:0>width$}"),
                None => rendered,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the sequence for one field, using its static configuration.
pub fn render_field(field: SourceField, values: &[Value]) -> String {
    match field.numeric() {
        None => values_to_text(values),
        Some(spec) => format_values(values, spec.radix, spec.pad_width),
    }
}
