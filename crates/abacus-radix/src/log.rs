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

//! # Integer Logarithm
//!
//! Floor and ceiling integer logarithms, computed together as a pair
//! `(toward_zero, away_from_zero)`. The two components are equal exactly
//! when the input is an exact power of the radix, which makes the ceiling
//! collapse onto the floor at powers, the way the mathematical functions
//! do. For negative numbers the logarithm of the absolute value is taken
//! and both components are negated.

use crate::{
    error::{RadixError, RadixResult},
    is_pow::try_is_power_of,
    num::RadixNumeric,
    validate::ensure_radix,
};

/// Returns the integer logarithm of `number` to base `radix` as the pair
/// `(toward_zero, away_from_zero)`.
///
/// For a positive `number`, `toward_zero` is the largest `k` with
/// `radix^k <= number` and `away_from_zero` the smallest `k` with
/// `number <= radix^k`; the two agree exactly at powers of the radix.
/// Zero yields `(0, 0)`. Negative numbers yield the negated logarithm
/// pair of their absolute value.
///
/// # Panics
///
/// Panics if `radix < 2` or if `|number|` is not representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::log::log;
///
/// assert_eq!(log(100i64, 10), (2, 3));
/// assert_eq!(log(100i64, 2), (6, 7));
/// assert_eq!(log(64i64, 2), (6, 6)); // exact power
/// assert_eq!(log(-100i64, 10), (-2, -3));
/// assert_eq!(log(0i64, 10), (0, 0));
/// ```
pub fn log<T>(number: T, radix: T) -> (T, T)
where
    T: RadixNumeric,
{
    match try_log(number, radix) {
        Ok(pair) => pair,
        Err(error) => panic!("log({number}, {radix}): {error}"),
    }
}

/// Fallible form of [`log`].
pub fn try_log<T>(number: T, radix: T) -> RadixResult<(T, T)>
where
    T: RadixNumeric,
{
    ensure_radix(radix)?;
    if number < T::ZERO {
        let magnitude = number.checked_neg_val().ok_or(RadixError::Overflow)?;
        let (toward_zero, away_from_zero) = try_log(magnitude, radix)?;
        let toward_zero = toward_zero.checked_neg_val().ok_or(RadixError::Overflow)?;
        let away_from_zero = away_from_zero.checked_neg_val().ok_or(RadixError::Overflow)?;
        return Ok((toward_zero, away_from_zero));
    }
    if number == T::ZERO {
        return Ok((T::ZERO, T::ZERO));
    }
    let mut toward_zero = T::ZERO;
    let mut remaining = number;
    while remaining >= radix {
        remaining = remaining / radix;
        toward_zero = toward_zero + T::ONE;
    }
    let away_from_zero = if try_is_power_of(number, radix)? {
        toward_zero
    } else {
        toward_zero + T::ONE
    };
    Ok((toward_zero, away_from_zero))
}

/// Returns the floor integer logarithm, the `toward_zero` component of
/// [`log`].
///
/// # Panics
///
/// Panics if `radix < 2` or if `|number|` is not representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::log::log_floor;
///
/// assert_eq!(log_floor(999i64, 10), 2);
/// assert_eq!(log_floor(1000i64, 10), 3);
/// ```
#[inline]
pub fn log_floor<T>(number: T, radix: T) -> T
where
    T: RadixNumeric,
{
    log(number, radix).0
}

/// Returns the ceiling integer logarithm, the `away_from_zero` component
/// of [`log`].
///
/// # Panics
///
/// Panics if `radix < 2` or if `|number|` is not representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::log::log_ceil;
///
/// assert_eq!(log_ceil(999i64, 10), 3);
/// assert_eq!(log_ceil(1000i64, 10), 3);
/// ```
#[inline]
pub fn log_ceil<T>(number: T, radix: T) -> T
where
    T: RadixNumeric,
{
    log(number, radix).1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_pow::is_power_of, pow::pow};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_log_decimal() {
        assert_eq!(log(1i64, 10), (0, 0));
        assert_eq!(log(9i64, 10), (0, 1));
        assert_eq!(log(10i64, 10), (1, 1));
        assert_eq!(log(11i64, 10), (1, 2));
        assert_eq!(log(100i64, 10), (2, 2));
        assert_eq!(log(101i64, 10), (2, 3));
    }

    #[test]
    fn test_log_binary() {
        assert_eq!(log(100i64, 2), (6, 7));
        assert_eq!(log(64i64, 2), (6, 6));
        assert_eq!(log(127i64, 2), (6, 7));
        assert_eq!(log(128i64, 2), (7, 7));
    }

    #[test]
    fn test_log_zero() {
        assert_eq!(log(0i64, 10), (0, 0));
    }

    #[test]
    fn test_log_negative() {
        assert_eq!(log(-100i64, 10), (-2, -3));
        assert_eq!(log(-1000i64, 10), (-3, -3));
        assert_eq!(log(-1i64, 10), (0, 0));
    }

    #[test]
    fn test_floor_and_ceil_accessors() {
        assert_eq!(log_floor(999i64, 10), 2);
        assert_eq!(log_ceil(999i64, 10), 3);
        assert_eq!(log_floor(1000i64, 10), 3);
        assert_eq!(log_ceil(1000i64, 10), 3);
    }

    #[test]
    fn test_bracket_invariant_randomized() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let n: i64 = rng.random_range(1..=1_000_000_000_000);
            let r: i64 = rng.random_range(2..=16);
            let (toward_zero, away_from_zero) = log(n, r);
            assert!(pow(r, toward_zero) <= n, "n={n}, r={r}");
            assert!(n <= pow(r, away_from_zero), "n={n}, r={r}");
            assert_eq!(
                toward_zero == away_from_zero,
                is_power_of(n, r),
                "n={n}, r={r}"
            );
        }
    }

    #[test]
    fn test_try_log_errors() {
        assert_eq!(try_log(100i64, 1), Err(RadixError::InvalidRadix));
        assert_eq!(try_log(i64::MIN, 10), Err(RadixError::Overflow));
    }

    #[test]
    #[should_panic(expected = "invalid radix")]
    fn test_log_panics_on_bad_radix() {
        let _ = log(100i64, 0);
    }
}
