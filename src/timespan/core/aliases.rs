//! Alias tables: unit spellings accepted by the parser.
//!
//! Purpose
//! -------
//! Map textual unit spellings (`"s"`, `"sec"`, `"seconds"`, …) to their
//! microsecond magnitudes, case-insensitively. Alias tables are a
//! parser-only concern and deliberately distinct from the formatting
//! [`UnitTable`](crate::timespan::core::table::UnitTable): the default
//! format table omits `week` while the default alias table still accepts it
//! on input.
//!
//! Key behaviors
//! -------------
//! - [`AliasTable::from_pairs`] validates magnitudes and stores spellings
//!   lowercased; [`AliasTable::lookup`] lowercases the probe, so `"MS"`,
//!   `"Ms"`, and `"ms"` all resolve identically.
//! - [`AliasTable::default_units`] builds the full default spelling set:
//!   long and short, singular and plural forms for year, week, day, hour,
//!   minute, second, millisecond, and microsecond.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every stored spelling maps to exactly one magnitude; inserting a
//!   spelling twice keeps the later magnitude, mirroring map semantics.
//! - Magnitudes are strictly positive (validated at construction).
//!
//! Testing notes
//! -------------
//! - Unit tests cover case-insensitive lookup, the default spelling set,
//!   and magnitude validation.

use std::collections::HashMap;

use crate::timespan::core::units::{DAY, HOUR, MICROSECOND, MILLISECOND, MINUTE, SECOND, WEEK, YEAR};
use crate::timespan::errors::{TableError, TableResult};

/// `AliasTable` — case-insensitive spelling → magnitude mapping.
///
/// Purpose
/// -------
/// Tell the parser which unit spellings exist and what each one is worth in
/// microseconds. Built once, immutable thereafter, and freely shareable
/// across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasTable {
    map: HashMap<String, i64>,
}

impl AliasTable {
    /// Build an alias table from (spelling, magnitude) pairs.
    ///
    /// Parameters
    /// ----------
    /// - `pairs`: any iterator of `(spelling, magnitude)` pairs. Spellings
    ///   are stored lowercased; a repeated spelling keeps the later
    ///   magnitude.
    ///
    /// Errors
    /// ------
    /// - `TableError::NonPositiveMagnitude { label, magnitude }`
    ///   Returned when any magnitude is ≤ 0; `label` carries the spelling.
    pub fn from_pairs<I, S>(pairs: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut table = AliasTable::default();
        for (spelling, magnitude) in pairs {
            let spelling = spelling.as_ref();
            if magnitude <= 0 {
                return Err(TableError::NonPositiveMagnitude {
                    label: spelling.to_string(),
                    magnitude,
                });
            }
            table.insert_spelling(spelling, magnitude);
        }
        Ok(table)
    }

    /// The default alias set: long and short, singular and plural spellings
    /// for each unit from microsecond up to year.
    pub fn default_units() -> Self {
        let mut table = AliasTable::default();
        let groups: [(&[&str], i64); 8] = [
            (&["y", "yr", "yrs", "year", "years"], YEAR),
            (&["w", "week", "weeks"], WEEK),
            (&["d", "day", "days"], DAY),
            (&["h", "hr", "hrs", "hour", "hours"], HOUR),
            (&["m", "min", "mins", "minute", "minutes"], MINUTE),
            (&["s", "sec", "secs", "second", "seconds"], SECOND),
            (&["ms", "msec", "msecs", "millisecond", "milliseconds"], MILLISECOND),
            (&["us", "usec", "usecs", "microsecond", "microseconds"], MICROSECOND),
        ];
        for (spellings, magnitude) in groups {
            for spelling in spellings {
                table.insert_spelling(spelling, magnitude);
            }
        }
        table
    }

    /// Resolve a spelling to its magnitude, case-insensitively.
    pub fn lookup(&self, spelling: &str) -> Option<i64> {
        self.map.get(&spelling.to_ascii_lowercase()).copied()
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no spellings at all.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    // Magnitude positivity is the caller's responsibility on this path.
    fn insert_spelling(&mut self, spelling: &str, magnitude: i64) {
        self.map.insert(spelling.to_ascii_lowercase(), magnitude);
    }
}
