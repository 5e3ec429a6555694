//! timespan_fmt — exact human-readable timespan parsing and formatting.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the parsing/formatting routines to Python via the
//! `_timespan_fmt` extension module. When the `python-bindings` feature is
//! enabled, this module defines the Python-facing functions and the
//! `Formatter` class used by the `timespan_fmt` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core [`timespan`] surface (value type, parser,
//!   formatter, defaults, constants, errors) as the public crate surface.
//! - Define `#[pyfunction]` wrappers and the `#[pymodule]` initializer for
//!   the `_timespan_fmt` Python extension.
//! - Convert domain errors into Python `ValueError`s at the FFI boundary
//!   via the `From<_> for PyErr` impls in [`timespan::errors`].
//!
//! Invariants & assumptions
//! ------------------------
//! - All parsing and formatting logic lives in the inner [`timespan`]
//!   module; this file performs only FFI glue, input extraction, and error
//!   mapping.
//! - Python-visible behavior mirrors the Rust surface exactly: microsecond
//!   integers in and out, the same default tables, the same error
//!   conditions.
//!
//! Conventions
//! -----------
//! - Python callers exchange raw microsecond `int`s rather than wrapped
//!   objects; the exactness contract carries across the boundary
//!   unchanged.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on the re-exported [`timespan`] items
//!   and can ignore everything guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_timespan_fmt` module defined
//!   here and wraps it in a user-facing package.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by
//!   the integration suite under `tests/`; smoke tests for the PyO3
//!   bindings belong at the Python level.

pub mod timespan;

#[cfg(feature = "python-bindings")]
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::utils::extract_unit_mapping;

// ---- Re-exports (primary public surface) ----------------------------------

pub use crate::timespan::{
    AliasTable, ParseError, ParseResult, SpanError, SpanResult, TableError, TableResult, Timespan,
    TimespanFormatter, UnitDef, UnitTable, default_aliases, default_formatter, format_timespan,
    format_timespan_with_resolution, make_formatter, parse_timespan, parse_with, DAY, HOUR,
    MICROSECOND, MILLISECOND, MINUTE, SECOND, WEEK, YEAR,
};

/// Parse a duration string into a microsecond count using the default
/// alias table.
///
/// Parameters
/// ----------
/// - `text`: `str`
///   The duration string, e.g. `"1day 24h"` or `"10s 1m 1s"`.
///
/// Returns
/// -------
/// `int`
///   The exact signed microsecond count.
///
/// Errors
/// ------
/// - `ValueError`
///   Raised for malformed input: no tokens, an unrecognized or missing
///   unit spelling, trailing characters, or out-of-range values.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "parse", text_signature = "(text, /)")]
fn py_parse(text: &str) -> PyResult<i64> {
    let span = parse_timespan(text)?;
    Ok(span.as_micros())
}

/// Format a microsecond count using the default unit table.
///
/// Parameters
/// ----------
/// - `micros`: `int`
///   The signed microsecond count to render.
/// - `resolution`: `int`, optional
///   Smallest remainder still worth decomposing, in microseconds; omit for
///   full microsecond resolution.
///
/// Returns
/// -------
/// `str`
///   The compact rendering, e.g. `"7d"` or `"23h59m59s"`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "format",
    signature = (micros, resolution = None),
    text_signature = "(micros, /, resolution=1)"
)]
fn py_format(micros: i64, resolution: Option<i64>) -> String {
    let span = Timespan::from_micros(micros);
    match resolution {
        Some(resolution) => format_timespan_with_resolution(span, resolution),
        None => format_timespan(span),
    }
}

/// Formatter — Python-facing wrapper for a reusable unit-table formatter.
///
/// Purpose
/// -------
/// Expose [`TimespanFormatter`] to Python callers: the unit mapping is
/// validated and sorted once at construction and the instance is then
/// reused across `format` calls, exactly like the Rust type it wraps.
///
/// Parameters
/// ----------
/// Constructed from Python via `Formatter(mapping)`:
/// - `mapping`: `dict[int, str]` (or a sequence of `(int, str)` pairs)
///   Unit magnitudes in microseconds mapped to their labels. Duplicate
///   magnitudes collapse with last-write-wins semantics.
///
/// Fields
/// ------
/// - `inner`: [`TimespanFormatter`]
///   The immutable Rust-side formatter all calls delegate to.
///
/// Invariants
/// ----------
/// - `inner` always holds a validated, non-empty, descending unit table;
///   construction fails with `ValueError` otherwise.
///
/// Notes
/// -----
/// - Native Rust callers should use [`make_formatter`] directly; this type
///   exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "timespan_fmt")]
pub struct Formatter {
    /// Underlying Rust formatter.
    inner: TimespanFormatter,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Formatter {
    #[new]
    #[pyo3(text_signature = "(mapping, /)")]
    pub fn new<'py>(mapping: &Bound<'py, PyAny>) -> PyResult<Formatter> {
        let pairs = extract_unit_mapping(mapping)?;
        let inner = make_formatter(pairs)?;
        Ok(Formatter { inner })
    }

    /// Render a microsecond count with this formatter's unit table.
    #[pyo3(
        signature = (micros, resolution = None),
        text_signature = "(self, micros, /, resolution=1)"
    )]
    pub fn format(&self, micros: i64, resolution: Option<i64>) -> String {
        let span = Timespan::from_micros(micros);
        match resolution {
            Some(resolution) => self.inner.format_with_resolution(span, resolution),
            None => self.inner.format(span),
        }
    }
}

/// _timespan_fmt — PyO3 module initializer for the Python extension.
///
/// Registers the module-level `parse`/`format` functions and the
/// `Formatter` class. Invoked automatically by Python when importing the
/// compiled extension; not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _timespan_fmt<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_parse, m)?)?;
    m.add_function(wrap_pyfunction!(py_format, m)?)?;
    m.add_class::<Formatter>()?;
    Ok(())
}
