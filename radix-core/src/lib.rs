//! # radix-core
//!
//! The conversion engine behind the radix toolchain: five textual
//! representations (plain text, decimal, binary, hexadecimal, octal) of one
//! sequence of Unicode code points, kept in sync through a single canonical
//! value sequence.
//!
//! File Layout
//!
//! Everything lives under `convert`, one module per pipeline stage:
//!
//! src/convert
//!   ├── field       Closed field enumeration and the static per-field table
//!   ├── lexing      Raw token splitting and fixed-width chunking
//!   ├── parsing     Tokens → value sequence (the only fallible stage)
//!   ├── formatting  Value sequence → rendered field text
//!   ├── status      Status message, severity and counters
//!   └── engine      Pure edit transitions and the stateful Converter
//!
//! The contract across stages: an edit to any one field produces a fresh
//! value sequence (or a single `InvalidToken` failure), and every other
//! field's text is re-derived from that sequence. Rendering never fails;
//! out-of-range values are clamped at the text boundary.

pub mod convert;
