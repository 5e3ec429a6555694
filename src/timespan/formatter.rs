//! Greedy unit-decomposition formatter: [`Timespan`] values → strings.
//!
//! Purpose
//! -------
//! Render exact microsecond counts as compact human-readable strings by
//! walking a [`UnitTable`] from largest to smallest magnitude. This is the
//! second of the crate's two symmetric core algorithms; the first is the
//! tokenizing parser.
//!
//! Key behaviors
//! -------------
//! - Greedy decomposition: for each unit, emit `"{count}{label}"` when the
//!   floor-divided count is positive, then continue on the remainder.
//! - **Stop the instant the remainder hits zero**: smaller units are not
//!   consulted even if unused, so an exact multiple of some unit yields a
//!   single token for the largest such unit (the shortest exact
//!   representation the table admits).
//! - The remainder below the smallest configured unit is dropped — floored,
//!   never rounded or shown.
//! - A walk that emits nothing (zero span, or a span smaller than every
//!   magnitude) falls back to `"0{smallest.label}"`; the result is never an
//!   empty string.
//! - Tokens are concatenated with no separator, largest unit first, with a
//!   single leading `-` for negative spans.
//! - [`TimespanFormatter::format_with_resolution`] additionally stops the
//!   walk once the remainder falls below a caller-chosen floor, for coarse
//!   renderings such as log timestamps.
//!
//! Invariants & assumptions
//! ------------------------
//! - Formatting is total: given a valid table it never fails for any
//!   `i64` microsecond count, `i64::MIN` included.
//! - A built formatter is immutable; concurrent read-only use from any
//!   number of threads needs no locking.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the stop-on-zero rule, zero-unit skipping, floor
//!   truncation, the zero fallback, sign placement, and resolution floors.

use crate::timespan::core::span::Timespan;
use crate::timespan::core::table::UnitTable;
use crate::timespan::core::units::MICROSECOND;
use crate::timespan::errors::TableResult;

/// `TimespanFormatter` — a reusable greedy decomposer bound to one
/// [`UnitTable`].
///
/// Purpose
/// -------
/// Hold a sorted, validated unit table built exactly once so that many
/// `format` calls share the same configuration without re-sorting or
/// re-validating.
///
/// Invariants
/// ----------
/// - The table is non-empty and descending; both are construction
///   invariants of [`UnitTable`].
/// - No field is ever mutated after construction.
///
/// Examples
/// --------
/// ```rust
/// use timespan_fmt::{make_formatter, Timespan, MICROSECOND, SECOND};
///
/// let fmt = make_formatter([(MICROSECOND, "ms"), (SECOND / 50, "jiffies")]).unwrap();
/// assert_eq!(fmt.format(Timespan::from_micros(2 * SECOND)), "100jiffies");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimespanFormatter {
    table: UnitTable,
}

impl TimespanFormatter {
    /// Bind a formatter to an already-built unit table.
    pub fn new(table: UnitTable) -> Self {
        TimespanFormatter { table }
    }

    /// The unit table this formatter walks.
    pub fn table(&self) -> &UnitTable {
        &self.table
    }

    /// Format a span at full microsecond resolution.
    ///
    /// Equivalent to [`format_with_resolution`](Self::format_with_resolution)
    /// with a one-microsecond floor: the walk stops only when the remainder
    /// is exactly zero or the table is exhausted.
    pub fn format(&self, value: Timespan) -> String {
        self.format_with_resolution(value, MICROSECOND)
    }

    /// Format a span, stopping once the remainder falls below `resolution`
    /// microseconds.
    ///
    /// Parameters
    /// ----------
    /// - `value`: the span to render.
    /// - `resolution`: the smallest remainder still worth decomposing, in
    ///   microseconds. Values below one microsecond are treated as one,
    ///   which reduces the floor to the plain stop-on-zero rule.
    ///
    /// Returns
    /// -------
    /// The rendered string: sign, then `"{count}{label}"` tokens largest
    /// unit first with no separator, or `"0{smallest.label}"` when nothing
    /// was emitted. Never empty, never fails.
    pub fn format_with_resolution(&self, value: Timespan, resolution: i64) -> String {
        let floor = resolution.max(1) as u64;
        let mut remaining = value.unsigned_abs();
        let mut out = String::new();
        if value.is_negative() {
            out.push('-');
        }

        let mut emitted = false;
        for unit in self.table.units() {
            if remaining < floor {
                break;
            }
            let magnitude = unit.magnitude as u64;
            let count = remaining / magnitude;
            if count == 0 {
                continue;
            }
            out.push_str(&count.to_string());
            out.push_str(&unit.label);
            remaining -= count * magnitude;
            emitted = true;
        }

        if !emitted {
            out.push('0');
            out.push_str(&self.table.smallest().label);
        }
        out
    }
}

/// Build a reusable formatter from a magnitude → label mapping.
///
/// A pure factory: the mapping is validated and sorted exactly once (see
/// [`UnitTable::from_mapping`]) and the returned formatter does no further
/// table work per call.
///
/// Errors
/// ------
/// - `TableError::EmptyTable` when the mapping has no entries.
/// - `TableError::NonPositiveMagnitude` when any magnitude is ≤ 0.
pub fn make_formatter<I, S>(mapping: I) -> TableResult<TimespanFormatter>
where
    I: IntoIterator<Item = (i64, S)>,
    S: Into<String>,
{
    Ok(TimespanFormatter::new(UnitTable::from_mapping(mapping)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timespan::core::units::{DAY, HOUR, MILLISECOND, MINUTE, SECOND};
    use crate::timespan::errors::TableError;

    fn clock_formatter() -> TimespanFormatter {
        make_formatter([(DAY, "d"), (HOUR, "h"), (MINUTE, "m"), (SECOND, "s")])
            .expect("valid mapping builds")
    }

    fn span(micros: i64) -> Timespan {
        Timespan::from_micros(micros)
    }

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Greedy decomposition over custom tables: stop-on-zero, zero-count
    //   skipping, floor truncation below the smallest unit.
    // - The zero fallback token and negative sign placement.
    // - Resolution floors and builder validation pass-through.
    //
    // They intentionally DO NOT cover:
    // - The default unit table (defaults tests) or parsing.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The walk stops the instant the remainder hits zero, so an exact
    // multiple of a unit yields a single token for the largest such unit.
    //
    // Given
    // -----
    // - A two-unit table (1 us labeled "ms", 1/50 s labeled "jiffies") and
    //   a span of exactly 2 s.
    //
    // Expect
    // ------
    // - "100jiffies" with no trailing zero-count token.
    fn exact_multiples_emit_a_single_token() {
        // Arrange
        let fmt = make_formatter([(MICROSECOND, "ms"), (SECOND / 50, "jiffies")])
            .expect("valid mapping builds");

        // Act
        let rendered = fmt.format(span(2 * SECOND));

        // Assert
        assert_eq!(rendered, "100jiffies");
    }

    #[test]
    // Purpose
    // -------
    // Multi-token output walks largest to smallest with no separator,
    // skipping units whose count is zero.
    //
    // Given
    // -----
    // - A d/h/m/s table; spans of 86 399 s and one day plus one second.
    //
    // Expect
    // ------
    // - "23h59m59s" (no day token) and "1d1s" (hour and minute skipped).
    fn multi_token_output_skips_zero_counts() {
        // Arrange
        let fmt = clock_formatter();

        // Act & Assert
        assert_eq!(fmt.format(span(86_399 * SECOND)), "23h59m59s");
        assert_eq!(fmt.format(span(DAY + SECOND)), "1d1s");
    }

    #[test]
    // Purpose
    // -------
    // The remainder below the smallest configured unit is floored away,
    // never rounded and never shown.
    //
    // Given
    // -----
    // - A minutes-only table; spans of 90 s and 30 s.
    //
    // Expect
    // ------
    // - "1m" (30 s dropped) and "0m" (below the only magnitude).
    fn sub_unit_remainders_are_floored() {
        // Arrange
        let fmt = make_formatter([(MINUTE, "m")]).expect("valid mapping builds");

        // Act & Assert
        assert_eq!(fmt.format(span(90 * SECOND)), "1m");
        assert_eq!(fmt.format(span(30 * SECOND)), "0m");
    }

    #[test]
    // Purpose
    // -------
    // A zero span renders as "0" plus the smallest unit's label — never an
    // empty string.
    //
    // Given
    // -----
    // - The d/h/m/s table and a seconds-only table.
    //
    // Expect
    // ------
    // - "0s" from both.
    fn zero_spans_use_the_smallest_label() {
        // Arrange
        let fmt = clock_formatter();
        let seconds_only = make_formatter([(SECOND, "s")]).expect("valid mapping builds");

        // Act & Assert
        assert_eq!(fmt.format(Timespan::ZERO), "0s");
        assert_eq!(seconds_only.format(Timespan::ZERO), "0s");
    }

    #[test]
    // Purpose
    // -------
    // Negative spans carry a single leading sign before the first token,
    // and `format(-v)` equals `"-" + format(v)` for positive `v`.
    //
    // Given
    // -----
    // - The d/h/m/s table and representative positive spans, including one
    //   below the smallest magnitude.
    //
    // Expect
    // ------
    // - The negated span's rendering is the positive rendering prefixed
    //   with "-".
    fn negative_spans_prefix_a_single_sign() {
        // Arrange
        let fmt = clock_formatter();
        let cases = [90 * MINUTE, DAY + SECOND, 500 * MILLISECOND];

        // Act & Assert
        for &micros in &cases {
            let positive = fmt.format(span(micros));
            let negative = fmt.format(span(-micros));
            assert_eq!(negative, format!("-{positive}"), "failed for {micros} us");
        }
        assert_eq!(fmt.format(span(-(DAY + SECOND))), "-1d1s");
    }

    #[test]
    // Purpose
    // -------
    // Formatting is total across the full i64 domain, including i64::MIN,
    // whose magnitude does not fit a plain i64.
    //
    // Given
    // -----
    // - A microseconds-only table and the extreme spans.
    //
    // Expect
    // ------
    // - Exact digit strings with correct signs.
    fn extreme_spans_format_without_overflow() {
        // Arrange
        let fmt = make_formatter([(MICROSECOND, "us")]).expect("valid mapping builds");

        // Act & Assert
        assert_eq!(fmt.format(span(i64::MAX)), "9223372036854775807us");
        assert_eq!(fmt.format(span(i64::MIN)), "-9223372036854775808us");
    }

    #[test]
    // Purpose
    // -------
    // A resolution floor stops the walk early; resolutions below one
    // microsecond behave as one.
    //
    // Given
    // -----
    // - The d/h/m/s table extended with milliseconds; a span of
    //   2 m 3 s 4 ms.
    //
    // Expect
    // ------
    // - "2m3s" at one-second resolution, the full "2m3s4ms" at one-
    //   microsecond resolution, and an unchanged result for resolution 0.
    fn resolution_floor_stops_the_walk_early() {
        // Arrange
        let fmt = make_formatter([
            (DAY, "d"),
            (HOUR, "h"),
            (MINUTE, "m"),
            (SECOND, "s"),
            (MILLISECOND, "ms"),
        ])
        .expect("valid mapping builds");
        let value = span(2 * MINUTE + 3 * SECOND + 4 * MILLISECOND);

        // Act & Assert
        assert_eq!(fmt.format_with_resolution(value, SECOND), "2m3s");
        assert_eq!(fmt.format_with_resolution(value, MICROSECOND), "2m3s4ms");
        assert_eq!(fmt.format_with_resolution(value, 0), fmt.format(value));
    }

    #[test]
    // Purpose
    // -------
    // The builder is a pure factory: table validation failures pass
    // through unchanged.
    //
    // Given
    // -----
    // - An empty mapping.
    //
    // Expect
    // ------
    // - `Err(TableError::EmptyTable)`.
    fn builder_passes_validation_errors_through() {
        // Arrange
        let mapping: [(i64, &str); 0] = [];

        // Act
        let result = make_formatter(mapping);

        // Assert
        assert_eq!(result.map(|f| f.table().len()), Err(TableError::EmptyTable));
    }
}
