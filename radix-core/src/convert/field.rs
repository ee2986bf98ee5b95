//! Field definitions
//!
//! The five representations form a closed enumeration. Everything a field
//! needs at runtime (radix, validation pattern, prefix, chunk width, pad
//! width) lives in a static table resolved through an exhaustive match, so
//! adding a field forces every dispatch site to be revisited.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static DECIMAL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static BINARY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[01]+$").unwrap());
static HEX_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[0-9a-f]+$").unwrap());
static OCTAL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-7]+$").unwrap());

/// Configuration for one numeric representation.
///
/// `label` is the lowercase form used inside error messages; the
/// capitalized display label comes from [`SourceField::label`].
#[derive(Debug)]
pub struct NumericSpec {
    /// Numeral system the field is interpreted in (2, 8, 10 or 16)
    pub radix: u32,
    /// Lowercase label used in validation failure messages
    pub label: &'static str,
    /// Character-class pattern a token must match after prefix stripping
    pub pattern: &'static Lazy<Regex>,
    /// Optional radix prefix, stripped case-insensitively ("0b", "0x", "0o")
    pub prefix: Option<&'static str>,
    /// Width used to re-split one unbroken digit run into tokens
    pub chunk_width: Option<usize>,
    /// Zero-pad width applied when rendering each value
    pub pad_width: Option<usize>,
}

static DECIMAL_SPEC: NumericSpec = NumericSpec {
    radix: 10,
    label: "decimal",
    pattern: &DECIMAL_PATTERN,
    prefix: None,
    chunk_width: None,
    pad_width: None,
};

static BINARY_SPEC: NumericSpec = NumericSpec {
    radix: 2,
    label: "binary",
    pattern: &BINARY_PATTERN,
    prefix: Some("0b"),
    chunk_width: Some(8),
    pad_width: Some(8),
};

static HEX_SPEC: NumericSpec = NumericSpec {
    radix: 16,
    label: "hexadecimal",
    pattern: &HEX_PATTERN,
    prefix: Some("0x"),
    chunk_width: Some(2),
    pad_width: Some(2),
};

static OCTAL_SPEC: NumericSpec = NumericSpec {
    radix: 8,
    label: "octal",
    pattern: &OCTAL_PATTERN,
    prefix: Some("0o"),
    chunk_width: Some(3),
    pad_width: Some(3),
};

/// One of the five synchronized representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceField {
    Text,
    Decimal,
    Binary,
    Hex,
    Octal,
}

impl SourceField {
    /// All fields, in display order. The order also fixes [`Self::index`].
    pub const ALL: [SourceField; 5] = [
        SourceField::Text,
        SourceField::Decimal,
        SourceField::Binary,
        SourceField::Hex,
        SourceField::Octal,
    ];

    /// Number of fields
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this field within [`Self::ALL`]
    pub fn index(&self) -> usize {
        match self {
            SourceField::Text => 0,
            SourceField::Decimal => 1,
            SourceField::Binary => 2,
            SourceField::Hex => 3,
            SourceField::Octal => 4,
        }
    }

    /// Capitalized display label
    pub fn label(&self) -> &'static str {
        match self {
            SourceField::Text => "Text",
            SourceField::Decimal => "Decimal",
            SourceField::Binary => "Binary",
            SourceField::Hex => "Hexadecimal",
            SourceField::Octal => "Octal",
        }
    }

    /// Static numeric configuration, or `None` for the text field
    pub fn numeric(&self) -> Option<&'static NumericSpec> {
        match self {
            SourceField::Text => None,
            SourceField::Decimal => Some(&DECIMAL_SPEC),
            SourceField::Binary => Some(&BINARY_SPEC),
            SourceField::Hex => Some(&HEX_SPEC),
            SourceField::Octal => Some(&OCTAL_SPEC),
        }
    }
}

/// Error for field names that do not name one of the five representations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown field \"{}\" (expected text, decimal, binary, hex or octal)",
            self.0
        )
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for SourceField {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Ok(SourceField::Text),
            "decimal" | "dec" => Ok(SourceField::Decimal),
            "binary" | "bin" => Ok(SourceField::Binary),
            "hex" | "hexadecimal" => Ok(SourceField::Hex),
            "octal" | "oct" => Ok(SourceField::Octal),
            _ => Err(UnknownField(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order_matches_index() {
        for (position, field) in SourceField::ALL.iter().enumerate() {
            assert_eq!(field.index(), position);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(SourceField::Text.label(), "Text");
        assert_eq!(SourceField::Hex.label(), "Hexadecimal");
        assert_eq!(SourceField::Hex.numeric().unwrap().label, "hexadecimal");
    }

    #[test]
    fn test_numeric_table() {
        assert!(SourceField::Text.numeric().is_none());

        let decimal = SourceField::Decimal.numeric().unwrap();
        assert_eq!(decimal.radix, 10);
        assert_eq!(decimal.prefix, None);
        assert_eq!(decimal.chunk_width, None);
        assert_eq!(decimal.pad_width, None);

        let binary = SourceField::Binary.numeric().unwrap();
        assert_eq!((binary.radix, binary.prefix), (2, Some("0b")));
        assert_eq!((binary.chunk_width, binary.pad_width), (Some(8), Some(8)));

        let hex = SourceField::Hex.numeric().unwrap();
        assert_eq!((hex.radix, hex.prefix), (16, Some("0x")));
        assert_eq!((hex.chunk_width, hex.pad_width), (Some(2), Some(2)));

        let octal = SourceField::Octal.numeric().unwrap();
        assert_eq!((octal.radix, octal.prefix), (8, Some("0o")));
        assert_eq!((octal.chunk_width, octal.pad_width), (Some(3), Some(3)));
    }

    #[test]
    fn test_patterns() {
        let hex = SourceField::Hex.numeric().unwrap();
        assert!(hex.pattern.is_match("0123456789abcdefABCDEF"));
        assert!(!hex.pattern.is_match("12G"));
        assert!(!hex.pattern.is_match(""));

        let binary = SourceField::Binary.numeric().unwrap();
        assert!(binary.pattern.is_match("01011010"));
        assert!(!binary.pattern.is_match("012"));

        let octal = SourceField::Octal.numeric().unwrap();
        assert!(octal.pattern.is_match("01234567"));
        assert!(!octal.pattern.is_match("8"));

        let decimal = SourceField::Decimal.numeric().unwrap();
        assert!(decimal.pattern.is_match("0123456789"));
        assert!(!decimal.pattern.is_match("12 3"));
        assert!(!decimal.pattern.is_match("-1"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("text".parse::<SourceField>().unwrap(), SourceField::Text);
        assert_eq!("HEX".parse::<SourceField>().unwrap(), SourceField::Hex);
        assert_eq!(
            "hexadecimal".parse::<SourceField>().unwrap(),
            SourceField::Hex
        );
        assert_eq!("bin".parse::<SourceField>().unwrap(), SourceField::Binary);
        assert_eq!("oct".parse::<SourceField>().unwrap(), SourceField::Octal);

        let err = "base64".parse::<SourceField>().unwrap_err();
        assert!(err.to_string().contains("base64"));
    }
}
