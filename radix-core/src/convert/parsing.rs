//! Parsing raw field input into the canonical value sequence
//!
//! Two entry points, selected by the source field: text input maps each
//! Unicode code point to its scalar value and never fails; numeric input is
//! tokenized, prefix-stripped, pattern-validated and radix-parsed, with the
//! first bad token aborting the whole parse. There is no partial success:
//! either the full sequence or one `InvalidToken`.
//!
//! Values are `u128` so that a single oversized digit run (e.g. a
//! 23-character hex token that resists chunking) still parses as one large
//! value; clamping to the code-point range only happens when rendering text.

use crate::convert::field::SourceField;
use crate::convert::lexing::{strip_prefix_ci, tokenize};
use std::fmt;

/// One parsed value; transiently unbounded, clamped only at text rendering
pub type Value = u128;

/// The canonical representation all five fields are derived from.
///
/// Rebuilt from scratch on every edit and never mutated afterwards.
pub type CodePointSequence = Vec<Value>;

/// A token that is empty after prefix stripping, fails its field's
/// character-class pattern, or overflows the value range.
///
/// Carries the token exactly as it appeared in the token list, so error
/// messages can echo the user's input back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidToken {
    pub field: SourceField,
    pub token: String,
}

impl fmt::Display for InvalidToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self
            .field
            .numeric()
            .map(|spec| spec.label)
            .unwrap_or("input");
        write!(f, "Invalid {} value: \"{}\"", label, self.token)
    }
}

impl std::error::Error for InvalidToken {}

/// Either the full parsed sequence (possibly empty) or a single failure
pub type ParseOutcome = Result<CodePointSequence, InvalidToken>;

/// Parse text input by Unicode code point. Never fails.
pub fn parse_text(raw: &str) -> CodePointSequence {
    raw.chars().map(|c| c as u32 as Value).collect()
}

/// Parse input for any field, dispatching on its static configuration.
///
/// Empty trimmed input is a designated success with an empty sequence,
/// distinct from a validation failure.
pub fn parse_field(field: SourceField, raw: &str) -> ParseOutcome {
    match field.numeric() {
        None => Ok(parse_text(raw)),
        Some(spec) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(Vec::new());
            }

            let tokens = tokenize(trimmed, spec);
            let mut values = Vec::with_capacity(tokens.len());
            for token in tokens {
                let normalized = strip_prefix_ci(&token, spec.prefix);
                if normalized.is_empty() || !spec.pattern.is_match(normalized) {
                    return Err(InvalidToken { field, token });
                }
                match Value::from_str_radix(normalized, spec.radix) {
                    Ok(value) => values.push(value),
                    Err(_) => return Err(InvalidToken { field, token }),
                }
            }
            Ok(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_code_points() {
        assert_eq!(parse_text("Hello"), vec![72, 101, 108, 108, 111]);
        assert_eq!(parse_text(""), Vec::<Value>::new());
        // Iteration is by code point, not UTF-16 unit
        assert_eq!(parse_text("é🦀"), vec![233, 0x1F980]);
    }

    #[test]
    fn test_parse_decimal_tokens() {
        let values = parse_field(SourceField::Decimal, "72 101 108 108 111").unwrap();
        assert_eq!(values, vec![72, 101, 108, 108, 111]);
    }

    #[test]
    fn test_parse_empty_input_is_success() {
        assert_eq!(parse_field(SourceField::Decimal, "").unwrap(), vec![]);
        assert_eq!(parse_field(SourceField::Hex, "   ").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_hex_with_mixed_prefixes() {
        let values = parse_field(SourceField::Hex, "0x48 0X65 6c").unwrap();
        assert_eq!(values, vec![0x48, 0x65, 0x6C]);
    }

    #[test]
    fn test_invalid_token_aborts_whole_parse() {
        let err = parse_field(SourceField::Hex, "48 12G 65").unwrap_err();
        assert_eq!(err.field, SourceField::Hex);
        assert_eq!(err.token, "12G");
        assert_eq!(err.to_string(), "Invalid hexadecimal value: \"12G\"");
    }

    #[test]
    fn test_empty_after_prefix_strip_is_invalid() {
        // A lone "0x" normalizes to "" during chunking and fails validation
        let err = parse_field(SourceField::Hex, "0x").unwrap_err();
        assert_eq!(err.token, "");
        assert_eq!(err.to_string(), "Invalid hexadecimal value: \"\"");
    }

    #[test]
    fn test_binary_rejects_other_digits() {
        let err = parse_field(SourceField::Binary, "0102").unwrap_err();
        assert_eq!(err.to_string(), "Invalid binary value: \"0102\"");
    }

    #[test]
    fn test_octal_rejects_eight() {
        let err = parse_field(SourceField::Octal, "78").unwrap_err();
        assert_eq!(err.token, "78");
    }

    #[test]
    fn test_oversized_run_parses_as_one_value() {
        // 23 hex chars: not a chunk-width multiple, parsed as one large value
        let values = parse_field(SourceField::Hex, "48656C6C6F2148656C6C6F2").unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], 0x48656C6C6F2148656C6C6F2);
    }

    #[test]
    fn test_value_overflow_is_invalid() {
        // 33 hex digits exceed the 128-bit value range
        let run = "1".repeat(33);
        let err = parse_field(SourceField::Hex, &run).unwrap_err();
        assert_eq!(err.token, run);
    }

    #[test]
    fn test_chunked_run_parses_per_chunk() {
        let values = parse_field(SourceField::Hex, "48656C6C6F").unwrap();
        assert_eq!(values, vec![0x48, 0x65, 0x6C, 0x6C, 0x6F]);
    }
}
