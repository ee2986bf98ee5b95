//! Raw token splitting
//!
//! Numeric input arrives as free-form text: values separated by whitespace,
//! commas or semicolons, possibly carrying a radix prefix, possibly pasted
//! as one unbroken digit run. This module turns that raw string into the
//! token list the parser consumes.
//!
//! Splitting is done with a logos lexer over two complementary character
//! classes, so every input character lands in exactly one of them. The
//! chunking step only ever applies to a single-token input whose length is
//! a strict multiple of the field's chunk width; anything the user already
//! separated passes through untouched.

use crate::convert::field::NumericSpec;
use logos::Logos;

/// Raw lexical classes for numeric input
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum RawToken {
    /// Runs of whitespace, commas or semicolons delimit tokens
    #[regex(r"[ \t\r\n\x0C,;]+")]
    Separator,

    /// Everything else is token content
    #[regex(r"[^ \t\r\n\x0C,;]+")]
    Chunk,
}

/// Split raw input into separator-delimited tokens.
///
/// The input is trimmed first; empty input yields an empty list, which the
/// parser treats as a designated success, not a failure.
pub fn split_tokens(raw: &str) -> Vec<String> {
    let mut lexer = RawToken::lexer(raw.trim());
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(RawToken::Chunk) = result {
            tokens.push(lexer.slice().to_string());
        }
    }

    tokens
}

/// Strip a radix prefix case-insensitively, if the token carries one.
pub fn strip_prefix_ci<'a>(token: &'a str, prefix: Option<&str>) -> &'a str {
    match prefix {
        Some(prefix)
            if token.len() >= prefix.len()
                && token.is_char_boundary(prefix.len())
                && token[..prefix.len()].eq_ignore_ascii_case(prefix) =>
        {
            &token[prefix.len()..]
        }
        _ => token,
    }
}

/// Re-split one digit run into consecutive fixed-width chunks.
///
/// Splits on character boundaries; callers guarantee the character count is
/// a multiple of `width`.
fn chunk_token(value: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Tokenize numeric input for a field, auto-chunking single digit runs.
///
/// A lone token on a field with a chunk width W is prefix-stripped and, if
/// its length is a strict multiple of W greater than W, re-split into
/// W-sized groups. A 23-character hex run is therefore kept as one
/// oversized token and parsed as one large value; that behavior is
/// intentional and covered by tests.
pub fn tokenize(raw: &str, spec: &NumericSpec) -> Vec<String> {
    let tokens = split_tokens(raw);

    if tokens.len() == 1 {
        if let Some(width) = spec.chunk_width {
            let normalized = strip_prefix_ci(&tokens[0], spec.prefix);
            let length = normalized.chars().count();
            if length > width && length % width == 0 {
                return chunk_token(normalized, width);
            }
            return vec![normalized.to_string()];
        }
    }

    tokens
}
