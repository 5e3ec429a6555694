//! Exact timespan values.
//!
//! Purpose
//! -------
//! Provide the single currency shared by the parser and the formatter: an
//! exact, signed count of elapsed microseconds. This module centralizes the
//! value type so the rest of the crate never touches floating point.
//!
//! Key behaviors
//! -------------
//! - [`Timespan`] wraps an `i64` microsecond count; construction and read
//!   access are `const` and copying is trivial.
//! - Operator sugar (`Neg`, `Add`, `Sub`) and derived ordering let callers
//!   accumulate and compare spans; the core itself only ever adds unit
//!   magnitudes and compares against zero.
//! - Fallible conversions to and from `std::time::Duration` bridge into the
//!   standard library without losing exactness or hiding sign errors.
//!
//! Invariants & assumptions
//! ------------------------
//! - The microsecond is the finest unit the crate distinguishes;
//!   sub-microsecond precision from `std::time::Duration` is truncated on
//!   the way in.
//! - No arithmetic here saturates or wraps silently: the operator impls use
//!   plain `i64` arithmetic (overflow panics under debug assertions, like
//!   `std::time::Duration` arithmetic), while parsing uses checked `i128`
//!   arithmetic and reports range errors instead.
//!
//! Conventions
//! -----------
//! - Negative spans are first-class values; formatting renders them with a
//!   single leading `-` and `std::time::Duration` conversion rejects them.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction, operator behavior, and both directions
//!   of the `std::time::Duration` conversions including the failure paths.

use crate::timespan::errors::{SpanError, SpanResult};

/// `Timespan` — an exact, signed count of elapsed microseconds.
///
/// Purpose
/// -------
/// Carry duration magnitudes between the parser, the formatter, and caller
/// code without floating-point accumulation error. All unit magnitudes in
/// this crate are integer microsecond counts, including the approximate
/// calendar units (a year is stored pre-multiplied as 365.25 days).
///
/// Invariants
/// ----------
/// - Immutable and trivially copyable; there is no interior mutability.
/// - The full `i64` range is a valid span; roughly ±292 000 years.
///
/// Examples
/// --------
/// ```rust
/// use timespan_fmt::{Timespan, SECOND};
///
/// let span = Timespan::from_micros(71 * SECOND);
/// assert_eq!(span.as_micros(), 71_000_000);
/// assert!(Timespan::ZERO < span);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timespan {
    micros: i64,
}

impl Timespan {
    /// The zero-length span.
    pub const ZERO: Timespan = Timespan { micros: 0 };

    /// Construct a span from a raw microsecond count.
    pub const fn from_micros(micros: i64) -> Self {
        Timespan { micros }
    }

    /// The span's exact microsecond count.
    pub const fn as_micros(self) -> i64 {
        self.micros
    }

    /// Whether the span is strictly negative.
    pub const fn is_negative(self) -> bool {
        self.micros < 0
    }

    /// The span's magnitude as an unsigned count, safe for `i64::MIN`.
    pub const fn unsigned_abs(self) -> u64 {
        self.micros.unsigned_abs()
    }

    /// Checked addition; `None` when the sum leaves the `i64` domain.
    pub const fn checked_add(self, other: Timespan) -> Option<Timespan> {
        match self.micros.checked_add(other.micros) {
            Some(micros) => Some(Timespan { micros }),
            None => None,
        }
    }
}

impl std::ops::Neg for Timespan {
    type Output = Timespan;

    fn neg(self) -> Timespan {
        Timespan { micros: -self.micros }
    }
}

impl std::ops::Add for Timespan {
    type Output = Timespan;

    fn add(self, other: Timespan) -> Timespan {
        Timespan { micros: self.micros + other.micros }
    }
}

impl std::ops::Sub for Timespan {
    type Output = Timespan;

    fn sub(self, other: Timespan) -> Timespan {
        Timespan { micros: self.micros - other.micros }
    }
}

/// Convert from `std::time::Duration`, truncating sub-microsecond precision.
///
/// Errors
/// ------
/// - `SpanError::OutOfRange`
///   Returned when the duration exceeds `i64::MAX` microseconds.
impl TryFrom<std::time::Duration> for Timespan {
    type Error = SpanError;

    fn try_from(duration: std::time::Duration) -> SpanResult<Timespan> {
        let micros = duration.as_micros();
        if micros > i64::MAX as u128 {
            return Err(SpanError::OutOfRange);
        }
        Ok(Timespan::from_micros(micros as i64))
    }
}

/// Convert into `std::time::Duration`.
///
/// Errors
/// ------
/// - `SpanError::NegativeSpan`
///   Returned for negative spans; `std::time::Duration` is unsigned.
impl TryFrom<Timespan> for std::time::Duration {
    type Error = SpanError;

    fn try_from(span: Timespan) -> SpanResult<std::time::Duration> {
        if span.is_negative() {
            return Err(SpanError::NegativeSpan { micros: span.as_micros() });
        }
        Ok(std::time::Duration::from_micros(span.as_micros() as u64))
    }
}
