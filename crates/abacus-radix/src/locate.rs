// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Power-of-Radix Location
//!
//! Bracketing a value between the power of the radix below it and the one
//! above it. The "proper" variant excludes exact matches, shrinking or
//! growing the offending bound by one radix factor so the bracket is
//! strictly open at that end. Negative numbers are bracketed through
//! their absolute value, after which the sign is restored uniformly on
//! both bounds.

use crate::{
    error::{RadixError, RadixResult},
    log::try_log,
    num::RadixNumeric,
    pow::try_pow,
    validate::ensure_radix,
};

/// A pair of powers of the radix bracketing a value: `toward_zero` is the
/// power at or below `|number|`, `away_from_zero` the one above. Both
/// bounds carry the sign of the bracketed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PowerBracket<T> {
    toward_zero: T,
    away_from_zero: T,
}

impl<T> PowerBracket<T>
where
    T: RadixNumeric,
{
    /// Creates a new bracket from its two bounds.
    #[inline]
    pub fn new(toward_zero: T, away_from_zero: T) -> Self {
        Self {
            toward_zero,
            away_from_zero,
        }
    }

    /// Returns the bound closer to zero.
    #[inline]
    pub fn toward_zero(&self) -> T {
        self.toward_zero
    }

    /// Returns the bound farther from zero.
    #[inline]
    pub fn away_from_zero(&self) -> T {
        self.away_from_zero
    }
}

impl<T> std::fmt::Display for PowerBracket<T>
where
    T: RadixNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.toward_zero, self.away_from_zero)
    }
}

/// Brackets `number` between adjacent powers of `radix`.
///
/// `toward_zero` is `radix` raised to the floor logarithm of `|number|`
/// and `away_from_zero` is one radix factor beyond it, both sign-adjusted
/// to the input. With `proper` set, a bound that equals the number itself
/// is pushed one radix factor outward, so the bracket never contains the
/// number as an endpoint; a proper lower bound below one floors to zero.
/// Zero collapses the bracket to `[0, 0]`.
///
/// # Panics
///
/// Panics if `radix < 2`, if `|number|` is not representable, or if the
/// outward bound overflows the integer type.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::locate::locate;
///
/// let bracket = locate(100i64, 2, false);
/// assert_eq!(bracket.toward_zero(), 64);
/// assert_eq!(bracket.away_from_zero(), 128);
///
/// // An exact power is its own lower bound unless the bracket is proper.
/// assert_eq!(locate(64i64, 2, false).toward_zero(), 64);
/// assert_eq!(locate(64i64, 2, true).toward_zero(), 32);
///
/// let negative = locate(-100i64, 2, false);
/// assert_eq!(negative.toward_zero(), -64);
/// assert_eq!(negative.away_from_zero(), -128);
/// ```
pub fn locate<T>(number: T, radix: T, proper: bool) -> PowerBracket<T>
where
    T: RadixNumeric,
{
    match try_locate(number, radix, proper) {
        Ok(bracket) => bracket,
        Err(error) => panic!("locate({number}, {radix}, {proper}): {error}"),
    }
}

/// Fallible form of [`locate`].
pub fn try_locate<T>(number: T, radix: T, proper: bool) -> RadixResult<PowerBracket<T>>
where
    T: RadixNumeric,
{
    ensure_radix(radix)?;
    if number < T::ZERO {
        let magnitude = number.checked_neg_val().ok_or(RadixError::Overflow)?;
        let bracket = try_locate(magnitude, radix, proper)?;
        let toward_zero = bracket
            .toward_zero
            .checked_neg_val()
            .ok_or(RadixError::Overflow)?;
        let away_from_zero = bracket
            .away_from_zero
            .checked_neg_val()
            .ok_or(RadixError::Overflow)?;
        return Ok(PowerBracket::new(toward_zero, away_from_zero));
    }
    if number == T::ZERO {
        return Ok(PowerBracket::new(T::ZERO, T::ZERO));
    }
    let (floor, _) = try_log(number, radix)?;
    let mut toward_zero = try_pow(radix, floor)?;
    let mut away_from_zero = toward_zero
        .checked_mul_val(radix)
        .ok_or(RadixError::Overflow)?;
    if proper {
        if number == toward_zero {
            toward_zero = toward_zero / radix;
        }
        if number == away_from_zero {
            away_from_zero = away_from_zero
                .checked_mul_val(radix)
                .ok_or(RadixError::Overflow)?;
        }
    }
    Ok(PowerBracket::new(toward_zero, away_from_zero))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_binary() {
        let bracket = locate(100i64, 2, false);
        assert_eq!(bracket.toward_zero(), 64);
        assert_eq!(bracket.away_from_zero(), 128);
    }

    #[test]
    fn test_locate_decimal() {
        let bracket = locate(5000i64, 10, false);
        assert_eq!(bracket.toward_zero(), 1000);
        assert_eq!(bracket.away_from_zero(), 10000);
    }

    #[test]
    fn test_locate_exact_power() {
        let bracket = locate(64i64, 2, false);
        assert_eq!(bracket.toward_zero(), 64);
        assert_eq!(bracket.away_from_zero(), 128);
    }

    #[test]
    fn test_locate_proper_excludes_exact_match() {
        let bracket = locate(64i64, 2, true);
        assert_eq!(bracket.toward_zero(), 32);
        assert_eq!(bracket.away_from_zero(), 128);

        // Not an exact power: proper changes nothing.
        let bracket = locate(100i64, 2, true);
        assert_eq!(bracket.toward_zero(), 64);
        assert_eq!(bracket.away_from_zero(), 128);
    }

    #[test]
    fn test_locate_proper_floors_below_one() {
        let bracket = locate(1i64, 10, true);
        assert_eq!(bracket.toward_zero(), 0);
        assert_eq!(bracket.away_from_zero(), 10);
    }

    #[test]
    fn test_locate_zero() {
        let bracket = locate(0i64, 10, false);
        assert_eq!(bracket.toward_zero(), 0);
        assert_eq!(bracket.away_from_zero(), 0);
    }

    #[test]
    fn test_locate_negative() {
        let bracket = locate(-100i64, 2, false);
        assert_eq!(bracket.toward_zero(), -64);
        assert_eq!(bracket.away_from_zero(), -128);

        let bracket = locate(-64i64, 2, true);
        assert_eq!(bracket.toward_zero(), -32);
        assert_eq!(bracket.away_from_zero(), -128);
    }

    #[test]
    fn test_bracket_contains_number() {
        for n in [1i64, 2, 7, 64, 100, 999, 1000, 123_456_789] {
            for r in [2i64, 3, 10, 16] {
                let bracket = locate(n, r, false);
                assert!(bracket.toward_zero() <= n, "n={n}, r={r}");
                assert!(n <= bracket.away_from_zero(), "n={n}, r={r}");
            }
        }
    }

    #[test]
    fn test_locate_overflow() {
        assert_eq!(try_locate(i64::MAX, 2, false), Err(RadixError::Overflow));
        assert_eq!(try_locate(i64::MIN, 2, false), Err(RadixError::Overflow));
    }

    #[test]
    fn test_display() {
        assert_eq!(locate(100i64, 2, false).to_string(), "[64, 128]");
    }

    #[test]
    #[should_panic(expected = "arithmetic overflow")]
    fn test_locate_panics_on_overflow() {
        let _ = locate(i64::MAX, 2, false);
    }
}
