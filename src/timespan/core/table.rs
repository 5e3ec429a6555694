//! Unit tables for greedy timespan formatting.
//!
//! Purpose
//! -------
//! Provide the validated, ordered unit configuration the formatter walks:
//! a descending-by-magnitude sequence of (magnitude, label) pairs built once
//! from a caller-supplied mapping and immutable thereafter.
//!
//! Key behaviors
//! -------------
//! - [`UnitTable::from_mapping`] collapses duplicate magnitudes (last write
//!   wins — magnitude is the lookup key), validates positivity and
//!   non-emptiness, and sorts descending exactly once, so formatters can be
//!   reused across many calls without re-sorting.
//! - [`UnitDef`] pairs a positive microsecond magnitude with an arbitrary
//!   label; label text is never semantically validated against its
//!   magnitude.
//!
//! Invariants & assumptions
//! ------------------------
//! - A constructed table is non-empty and strictly descending in magnitude,
//!   so every span is representable — including zero, via the smallest unit.
//! - All magnitudes are strictly positive integer microsecond counts.
//!
//! Conventions
//! -----------
//! - Mappings are accepted as any iterator of (magnitude, label) pairs; the
//!   table never depends on the iteration order of any particular container.
//!
//! Testing notes
//! -------------
//! - Unit tests cover descending sort order, last-write-wins collapsing,
//!   and both rejection paths (empty mapping, non-positive magnitude).

use std::collections::BTreeMap;

use crate::timespan::errors::{TableError, TableResult};

/// `UnitDef` — one formatting unit: a magnitude and its label.
///
/// Invariants
/// ----------
/// - `magnitude > 0` (enforced by [`UnitTable::from_mapping`]).
/// - `label` is arbitrary caller-controlled text; a one-microsecond unit
///   labeled `"ms"` is legal by design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDef {
    /// Unit size as an exact integer count of microseconds.
    pub magnitude: i64,
    /// Text appended to the per-unit count in formatted output.
    pub label: String,
}

/// `UnitTable` — an immutable, descending-by-magnitude sequence of units.
///
/// Purpose
/// -------
/// Hold the formatter's unit configuration in the exact shape the greedy
/// decomposition walk needs: largest magnitude first, smallest last, with
/// the smallest unit guaranteeing that every span (including zero) has a
/// representation.
///
/// Performance
/// -----------
/// - Construction is O(n log n) in the number of units; afterwards the
///   table is a plain slice walk with no allocation or locking, safe for
///   unrestricted concurrent read-only use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTable {
    units: Vec<UnitDef>,
}

impl UnitTable {
    /// Build a validated table from a magnitude → label mapping.
    ///
    /// Parameters
    /// ----------
    /// - `mapping`: any iterator of `(magnitude, label)` pairs. Duplicate
    ///   magnitudes collapse with last-write-wins semantics, mirroring map
    ///   insertion.
    ///
    /// Returns
    /// -------
    /// `TableResult<UnitTable>`
    ///   - `Ok(UnitTable)` sorted descending by magnitude.
    ///   - `Err(TableError)` if validation fails.
    ///
    /// Errors
    /// ------
    /// - `TableError::EmptyTable`
    ///   Returned when the mapping yields no entries.
    /// - `TableError::NonPositiveMagnitude { label, magnitude }`
    ///   Returned when any magnitude is ≤ 0.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use timespan_fmt::{UnitTable, MICROSECOND, SECOND};
    ///
    /// let table = UnitTable::from_mapping([
    ///     (MICROSECOND, "us"),
    ///     (SECOND / 50, "jiffies"),
    /// ])
    /// .unwrap();
    /// assert_eq!(table.units()[0].label, "jiffies");
    /// assert_eq!(table.smallest().magnitude, MICROSECOND);
    /// ```
    pub fn from_mapping<I, S>(mapping: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let mut by_magnitude: BTreeMap<i64, String> = BTreeMap::new();
        for (magnitude, label) in mapping {
            let label = label.into();
            if magnitude <= 0 {
                return Err(TableError::NonPositiveMagnitude { label, magnitude });
            }
            by_magnitude.insert(magnitude, label);
        }

        if by_magnitude.is_empty() {
            return Err(TableError::EmptyTable);
        }

        let units = by_magnitude
            .into_iter()
            .rev()
            .map(|(magnitude, label)| UnitDef { magnitude, label })
            .collect();
        Ok(UnitTable { units })
    }

    /// Construct from units already sorted descending with positive
    /// magnitudes. Used for the crate's built-in default table, which is
    /// written down in that shape.
    pub(crate) fn from_descending(units: Vec<UnitDef>) -> Self {
        debug_assert!(!units.is_empty());
        debug_assert!(units.windows(2).all(|w| w[0].magnitude > w[1].magnitude));
        debug_assert!(units.iter().all(|u| u.magnitude > 0));
        UnitTable { units }
    }

    /// The units, largest magnitude first.
    pub fn units(&self) -> &[UnitDef] {
        &self.units
    }

    /// The smallest configured unit; the fallback for zero spans and the
    /// truncation floor for inexact ones.
    pub fn smallest(&self) -> &UnitDef {
        // Non-emptiness is a construction invariant.
        &self.units[self.units.len() - 1]
    }

    /// Number of units in the table (always ≥ 1).
    pub fn len(&self) -> usize {
        self.units.len()
    }
}
