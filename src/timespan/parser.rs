//! Tokenizing parser: duration strings → exact [`Timespan`] values.
//!
//! Purpose
//! -------
//! Turn loosely-formatted human input (`"1day 24h"`, `"10s 1m 1s"`,
//! `" 1m -10s "`) into an exact microsecond count against a caller-supplied
//! [`AliasTable`]. This is one of the two symmetric core algorithms of the
//! crate; the other is the greedy formatter.
//!
//! Key behaviors
//! -------------
//! - Scan (number, unit) tokens left to right: optional whitespace/comma
//!   separators, a numeric literal (integer or decimal, optionally signed),
//!   optional whitespace, then a run of ASCII-alphabetic characters as the
//!   unit spelling.
//! - Resolve spellings case-insensitively; every token's contribution is
//!   `literal × magnitude`, computed in integer arithmetic with fractional
//!   literals rounded to the nearest microsecond (half away from zero).
//! - Sign is **per token**: each literal may carry its own leading `-` or
//!   `+`, so mixed-sign inputs like `"1m -10s"` sum algebraically.
//! - Units may repeat; each occurrence contributes independently to the
//!   running total — no deduplication, no overwrite.
//! - Reject inputs with zero tokens, unknown or missing spellings, leftover
//!   characters after the last valid token, and values outside the `i64`
//!   microsecond domain. There is no silent partial parse.
//!
//! Invariants & assumptions
//! ------------------------
//! - All arithmetic runs in checked `i128` intermediates; no floating point
//!   anywhere, so results are exact for integer literals and correctly
//!   rounded for decimals.
//! - Error positions are byte offsets into the original input string.
//!
//! Conventions
//! -----------
//! - Parsing is a pure function of `(text, aliases)`: no hidden state, no
//!   I/O, work proportional to input length.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the concrete accepted grammar (repetition, mixed
//!   signs, separators, case-insensitivity, decimals) and every rejection
//!   path with its diagnostic payload.

use crate::timespan::core::aliases::AliasTable;
use crate::timespan::core::span::Timespan;
use crate::timespan::errors::{ParseError, ParseResult};

/// Parse a duration string against an alias table.
///
/// Parameters
/// ----------
/// - `text`: the input string. Leading/trailing whitespace and comma or
///   whitespace separators between tokens are ignored.
/// - `aliases`: spelling → magnitude table consulted case-insensitively.
///
/// Returns
/// -------
/// `ParseResult<Timespan>`
///   - `Ok(Timespan)` holding the algebraic sum of all token contributions.
///   - `Err(ParseError)` when the input is malformed.
///
/// Errors
/// ------
/// - `ParseError::NoTokens`
///   The input contains not a single (number, unit) token.
/// - `ParseError::MissingUnit { position }`
///   A numeric literal has no unit spelling after it.
/// - `ParseError::UnknownUnit { spelling, position }`
///   A spelling is absent from `aliases`.
/// - `ParseError::TrailingInput { position, fragment }`
///   Characters remain where a number was expected.
/// - `ParseError::ValueOutOfRange { position }`
///   A contribution or the running total leaves the `i64` domain.
///
/// Examples
/// --------
/// ```rust
/// use timespan_fmt::{AliasTable, parse_with, SECOND};
///
/// let aliases = AliasTable::default_units();
/// let span = parse_with("10s 1m 1s", &aliases).unwrap();
/// assert_eq!(span.as_micros(), 71 * SECOND);
/// ```
pub fn parse_with(text: &str, aliases: &AliasTable) -> ParseResult<Timespan> {
    let mut cursor = Cursor::new(text);
    let mut total: i128 = 0;
    let mut tokens = 0_usize;

    loop {
        cursor.skip_separators();
        if cursor.at_end() {
            break;
        }

        let number = match cursor.scan_number() {
            Some(number) => number,
            None => {
                return Err(ParseError::TrailingInput {
                    position: cursor.pos,
                    fragment: cursor.fragment(),
                });
            }
        };

        cursor.skip_whitespace();
        let (spelling, spelling_pos) = cursor.scan_spelling();
        if spelling.is_empty() {
            return Err(ParseError::MissingUnit { position: spelling_pos });
        }
        let magnitude = aliases.lookup(spelling).ok_or_else(|| ParseError::UnknownUnit {
            spelling: spelling.to_string(),
            position: spelling_pos,
        })?;

        let contribution = scale_literal(&number, magnitude)?;
        total = total
            .checked_add(contribution)
            .ok_or(ParseError::ValueOutOfRange { position: number.start })?;
        if total > i64::MAX as i128 || total < i64::MIN as i128 {
            return Err(ParseError::ValueOutOfRange { position: number.start });
        }
        tokens += 1;
    }

    if tokens == 0 {
        return Err(ParseError::NoTokens);
    }
    Ok(Timespan::from_micros(total as i64))
}

/// One scanned numeric literal, kept as digit slices so the value can be
/// scaled exactly per unit magnitude.
struct NumberToken<'a> {
    negative: bool,
    int_digits: &'a str,
    frac_digits: &'a str,
    /// Byte offset of the literal (sign included) in the input.
    start: usize,
}

/// Byte cursor over the input string. All scanning is ASCII-driven, so byte
/// offsets are always valid slice boundaries for the pieces taken here.
struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor { text, bytes: text.as_bytes(), pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Whitespace and commas separate tokens.
    fn skip_separators(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Whitespace only; commas are not allowed between a number and its
    /// unit.
    fn skip_whitespace(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Scan an optionally signed integer or decimal literal. Restores the
    /// cursor and returns `None` when no literal starts here.
    fn scan_number(&mut self) -> Option<NumberToken<'a>> {
        let start = self.pos;
        let mut pos = self.pos;

        let negative = match self.bytes.get(pos) {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };

        let int_start = pos;
        while matches!(self.bytes.get(pos), Some(b) if b.is_ascii_digit()) {
            pos += 1;
        }
        if pos == int_start {
            return None;
        }
        let int_digits = &self.text[int_start..pos];

        // A decimal point counts only when digits follow it; otherwise it is
        // left for the caller to reject as a missing unit.
        let mut frac_digits = "";
        if self.bytes.get(pos) == Some(&b'.')
            && matches!(self.bytes.get(pos + 1), Some(b) if b.is_ascii_digit())
        {
            let frac_start = pos + 1;
            pos = frac_start;
            while matches!(self.bytes.get(pos), Some(b) if b.is_ascii_digit()) {
                pos += 1;
            }
            frac_digits = &self.text[frac_start..pos];
        }

        self.pos = pos;
        Some(NumberToken { negative, int_digits, frac_digits, start })
    }

    /// Consume a run of ASCII-alphabetic characters as a unit spelling.
    fn scan_spelling(&mut self) -> (&'a str, usize) {
        let start = self.pos;
        while matches!(self.bytes.get(self.pos), Some(b) if b.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        (&self.text[start..self.pos], start)
    }

    /// Up to ten characters of the remaining input, for diagnostics.
    fn fragment(&self) -> String {
        self.text[self.pos..].chars().take(10).collect()
    }
}

// Fractional digits beyond 18 places sit below rounding resolution for every
// representable magnitude and would exhaust i128 headroom.
const MAX_FRAC_DIGITS: usize = 18;

/// Scale a scanned literal by a unit magnitude, rounding a fractional part
/// to the nearest microsecond (half away from zero). All arithmetic is
/// checked `i128`.
fn scale_literal(number: &NumberToken<'_>, magnitude: i64) -> ParseResult<i128> {
    let position = number.start;
    let magnitude = magnitude as i128;

    let int_part: i128 = number
        .int_digits
        .parse()
        .map_err(|_| ParseError::ValueOutOfRange { position })?;

    let frac = &number.frac_digits[..number.frac_digits.len().min(MAX_FRAC_DIGITS)];
    let frac_scaled = if frac.is_empty() {
        0
    } else {
        // Digit count is capped, so numerator and denominator stay far
        // inside i128.
        let numerator: i128 = frac.parse().map_err(|_| ParseError::ValueOutOfRange { position })?;
        let denominator = 10_i128.pow(frac.len() as u32);
        (numerator * magnitude + denominator / 2) / denominator
    };

    let unsigned = int_part
        .checked_mul(magnitude)
        .and_then(|scaled| scaled.checked_add(frac_scaled))
        .ok_or(ParseError::ValueOutOfRange { position })?;

    Ok(if number.negative { -unsigned } else { unsigned })
}
