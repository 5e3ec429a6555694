//! Default tables and module-level convenience calls.
//!
//! Purpose
//! -------
//! Wire the parser and formatter to the crate's built-in default tables so
//! most callers never construct one themselves: `parse_timespan` accepts
//! every default unit spelling, `format_timespan` renders against the
//! default unit table.
//!
//! Key behaviors
//! -------------
//! - The default format table, descending: `y`, `d`, `h`, `m`, `s`, `ms`,
//!   `us`. `week` is deliberately absent, so one week renders as `7d`; the
//!   default alias table still accepts `week` on input.
//! - Both defaults are built once behind `std::sync::OnceLock` and never
//!   mutated afterwards — immutable process-wide values, not mutable
//!   globals, so the core parser and formatter stay free of hidden state
//!   and remain independently testable with arbitrary tables.
//!
//! Conventions
//! -----------
//! - These functions are thin delegations; every behavior they exhibit is
//!   specified (and tested) on the parser and formatter themselves.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the default tables' contents and the headline
//!   behaviors: week-as-days rendering, year rendering, zero fallback, and
//!   parse/format round trips.

use std::sync::OnceLock;

use crate::timespan::core::aliases::AliasTable;
use crate::timespan::core::span::Timespan;
use crate::timespan::core::table::{UnitDef, UnitTable};
use crate::timespan::core::units::{DAY, HOUR, MICROSECOND, MILLISECOND, MINUTE, SECOND, YEAR};
use crate::timespan::errors::ParseResult;
use crate::timespan::formatter::TimespanFormatter;
use crate::timespan::parser::parse_with;

/// The formatter bound to the default unit table, built once per process.
pub fn default_formatter() -> &'static TimespanFormatter {
    static FORMATTER: OnceLock<TimespanFormatter> = OnceLock::new();
    FORMATTER.get_or_init(|| {
        let units = [
            (YEAR, "y"),
            (DAY, "d"),
            (HOUR, "h"),
            (MINUTE, "m"),
            (SECOND, "s"),
            (MILLISECOND, "ms"),
            (MICROSECOND, "us"),
        ]
        .into_iter()
        .map(|(magnitude, label)| UnitDef { magnitude, label: label.to_string() })
        .collect();
        TimespanFormatter::new(UnitTable::from_descending(units))
    })
}

/// The default alias table, built once per process.
pub fn default_aliases() -> &'static AliasTable {
    static ALIASES: OnceLock<AliasTable> = OnceLock::new();
    ALIASES.get_or_init(AliasTable::default_units)
}

/// Parse a duration string against the default alias table.
///
/// Errors
/// ------
/// - `ParseError`
///   See [`parse_with`](crate::timespan::parser::parse_with); this is the
///   same parser bound to [`default_aliases`].
///
/// Examples
/// --------
/// ```rust
/// use timespan_fmt::{parse_timespan, SECOND};
///
/// let span = parse_timespan("1day 24h").unwrap();
/// assert_eq!(span.as_micros(), 172_800 * SECOND);
/// assert!(parse_timespan("bogus").is_err());
/// ```
pub fn parse_timespan(text: &str) -> ParseResult<Timespan> {
    parse_with(text, default_aliases())
}

/// Format a span against the default unit table at full microsecond
/// resolution.
///
/// Examples
/// --------
/// ```rust
/// use timespan_fmt::{format_timespan, Timespan, WEEK};
///
/// assert_eq!(format_timespan(Timespan::from_micros(WEEK)), "7d");
/// ```
pub fn format_timespan(value: Timespan) -> String {
    default_formatter().format(value)
}

/// Format a span against the default unit table, stopping once the
/// remainder falls below `resolution` microseconds.
pub fn format_timespan_with_resolution(value: Timespan, resolution: i64) -> String {
    default_formatter().format_with_resolution(value, resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timespan::core::units::WEEK;

    fn span(micros: i64) -> Timespan {
        Timespan::from_micros(micros)
    }

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The default unit table's contents and ordering.
    // - Headline default-table behaviors: week-as-days, year rendering,
    //   zero fallback, sign placement, and parse/format round trips.
    //
    // They intentionally DO NOT cover:
    // - The parser and formatter algorithms in depth (their own tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The default format table runs y/d/h/m/s/ms/us descending, with no
    // week entry.
    //
    // Given
    // -----
    // - `default_formatter()`'s table.
    //
    // Expect
    // ------
    // - Exactly the seven expected (magnitude, label) pairs in order.
    fn default_table_is_pinned() {
        // Arrange
        let table = default_formatter().table();

        // Act
        let pairs: Vec<(i64, &str)> =
            table.units().iter().map(|u| (u.magnitude, u.label.as_str())).collect();

        // Assert
        assert_eq!(
            pairs,
            vec![
                (YEAR, "y"),
                (DAY, "d"),
                (HOUR, "h"),
                (MINUTE, "m"),
                (SECOND, "s"),
                (MILLISECOND, "ms"),
                (MICROSECOND, "us"),
            ]
        );
    }

    #[test]
    // Purpose
    // -------
    // One week formats as days (no week unit in the format table), while
    // the alias table still accepts "week" on input.
    //
    // Given
    // -----
    // - A span of exactly one week.
    //
    // Expect
    // ------
    // - Formats to "7d"; "1w" and "1 week" both parse back to it.
    fn week_formats_as_days_but_parses_as_a_week() {
        // Act & Assert
        assert_eq!(format_timespan(span(WEEK)), "7d");
        assert_eq!(parse_timespan("1w").expect("w parses").as_micros(), WEEK);
        assert_eq!(parse_timespan("1 week").expect("week parses").as_micros(), WEEK);
    }

    #[test]
    // Purpose
    // -------
    // An average year (365.25 days) formats as a single year token, and a
    // year plus ten days decomposes greedily.
    //
    // Given
    // -----
    // - Spans of `YEAR` and `YEAR + 10 * DAY`.
    //
    // Expect
    // ------
    // - "1y" and "1y10d".
    fn years_decompose_greedily() {
        // Act & Assert
        assert_eq!(format_timespan(span(YEAR)), "1y");
        assert_eq!(format_timespan(span(YEAR + 10 * DAY)), "1y10d");
    }

    #[test]
    // Purpose
    // -------
    // Zero formats with the smallest default unit and negative spans carry
    // a single leading sign.
    //
    // Given
    // -----
    // - Spans of zero, -10 days, and -1 week.
    //
    // Expect
    // ------
    // - "0us", "-10d", and "-7d".
    fn zero_and_negative_spans_render_predictably() {
        // Act & Assert
        assert_eq!(format_timespan(Timespan::ZERO), "0us");
        assert_eq!(format_timespan(span(-10 * DAY)), "-10d");
        assert_eq!(format_timespan(span(-WEEK)), "-7d");
    }

    #[test]
    // Purpose
    // -------
    // Formatting then parsing reconstructs non-negative spans exactly: the
    // default table's smallest unit is one microsecond and every emitted
    // label is a default alias.
    //
    // Given
    // -----
    // - Representative spans, including awkward remainders.
    //
    // Expect
    // ------
    // - `parse_timespan(format_timespan(v)) == v` for each.
    fn format_then_parse_round_trips_non_negative_spans() {
        // Arrange
        let cases = [
            0,
            1,
            999,
            MILLISECOND + 1,
            71 * SECOND,
            86_399 * SECOND,
            WEEK,
            YEAR + 10 * DAY,
            YEAR + DAY + HOUR + MINUTE + SECOND + MILLISECOND + MICROSECOND,
        ];

        // Act & Assert
        for &micros in &cases {
            let rendered = format_timespan(span(micros));
            let reparsed = parse_timespan(&rendered)
                .unwrap_or_else(|err| panic!("{rendered:?} should re-parse, got: {err}"));
            assert_eq!(reparsed.as_micros(), micros, "round trip failed via {rendered:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // The facade exposes the resolution floor against the default table.
    //
    // Given
    // -----
    // - A span of 1 s 500 ms 250 us at millisecond resolution.
    //
    // Expect
    // ------
    // - "1s500ms": the sub-millisecond tail is dropped.
    fn resolution_floor_applies_to_the_default_table() {
        // Arrange
        let value = span(SECOND + 500 * MILLISECOND + 250 * MICROSECOND);

        // Act & Assert
        assert_eq!(format_timespan_with_resolution(value, MILLISECOND), "1s500ms");
        assert_eq!(format_timespan(value), "1s500ms250us");
    }
}
