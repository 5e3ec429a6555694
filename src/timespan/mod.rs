//! timespan — human-readable duration strings to exact values and back.
//!
//! Purpose
//! -------
//! Provide the crate's whole surface under one namespace: an exact
//! microsecond value type, a tokenizing parser for loosely-formatted
//! duration strings, a greedy unit-decomposition formatter with
//! caller-defined unit tables, and a default facade wiring both to built-in
//! tables. This is the surface most consumers (including the Python
//! bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect the value, constant, and table primitives in [`core`]:
//!   [`Timespan`], the unit-magnitude constants, [`UnitTable`], and
//!   [`AliasTable`].
//! - Expose the tokenizing parser in [`parser`] ([`parse_with`]) and the
//!   greedy formatter plus its builder in [`formatter`]
//!   ([`TimespanFormatter`], [`make_formatter`]).
//! - Wire the built-in default tables to module-level convenience calls in
//!   [`defaults`] ([`parse_timespan`], [`format_timespan`]).
//! - Centralize error types in [`errors`] ([`ParseError`], [`TableError`],
//!   [`SpanError`], and their result aliases) so callers see a uniform
//!   error surface.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every magnitude is an exact, strictly positive integer microsecond
//!   count; the crate contains no floating-point arithmetic.
//! - Parsing and formatting are pure functions of their inputs: no hidden
//!   state, no I/O, no logging, work bounded by input length or table
//!   size.
//! - Built tables and formatters are immutable after construction and safe
//!   for unrestricted concurrent read-only use without locking.
//!
//! Conventions
//! -----------
//! - Sign is per token on input; on output a single leading `-` prefixes
//!   the whole rendering.
//! - The default *format* table omits `week` (one week renders as `7d`)
//!   while the default *alias* table accepts it — the two tables are
//!   deliberately distinct configurations.
//! - Errors carry byte positions into the original input and are surfaced
//!   as `ParseResult` / `TableResult`; the formatter itself never fails.
//!
//! Downstream usage
//! ----------------
//! - Typical flow with defaults:
//!   1. `parse_timespan("1h 30m")` to accept user or config input.
//!   2. `format_timespan(span)` to render it compactly.
//! - Custom-unit flow:
//!   1. Build a formatter once via `make_formatter([(SECOND / 50,
//!      "jiffies"), ...])`.
//!   2. Reuse it for many `format` calls; it is `Send + Sync`.
//!   3. For custom parsing vocabularies, build an [`AliasTable`] and call
//!      [`parse_with`].
//! - Python bindings import from this module and rely on the `PyErr`
//!   conversions defined in [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests live with each submodule; the integration suite exercises
//!   the full parse → format → re-parse pipeline through the public
//!   surface.

pub mod core;
pub mod defaults;
pub mod errors;
pub mod formatter;
pub mod parser;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the "everyday" items most users need. More specialized pieces
// (cursor internals, table construction details) remain under their
// respective submodules.

pub use self::core::{
    AliasTable, Timespan, UnitDef, UnitTable, DAY, HOUR, MICROSECOND, MILLISECOND, MINUTE, SECOND,
    WEEK, YEAR,
};

pub use self::defaults::{
    default_aliases, default_formatter, format_timespan, format_timespan_with_resolution,
    parse_timespan,
};

pub use self::errors::{
    ParseError, ParseResult, SpanError, SpanResult, TableError, TableResult,
};

pub use self::formatter::{TimespanFormatter, make_formatter};

pub use self::parser::parse_with;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use timespan_fmt::timespan::prelude::*;
//
// to import the main timespan surface in a single line, without pulling in
// lower-level internals.

pub mod prelude {
    pub use super::{
        AliasTable, ParseError, ParseResult, SpanError, SpanResult, TableError, TableResult,
        Timespan, TimespanFormatter, UnitDef, UnitTable, format_timespan,
        format_timespan_with_resolution, make_formatter, parse_timespan, parse_with, DAY, HOUR,
        MICROSECOND, MILLISECOND, MINUTE, SECOND, WEEK, YEAR,
    };
}
