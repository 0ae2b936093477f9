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

//! # Exact Power Tests
//!
//! Deciding whether a value is exactly `radix^k` for some `k >= 0`. This
//! is not a primality test; it is the exactness probe the integer
//! logarithm uses to collapse its ceiling onto its floor.

use crate::{
    error::{RadixError, RadixResult},
    num::RadixNumeric,
    validate::ensure_radix,
};

/// Returns `true` if `number` is exactly `radix^k` for some `k >= 0`.
///
/// One is a power of every radix (`radix^0`); zero is a power of none.
/// The binary radix delegates to the single-bit test of
/// [`is_power_of_two`].
///
/// # Panics
///
/// Panics if `radix < 2` or if `number` is negative.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::is_pow::is_power_of;
///
/// assert!(is_power_of(1024i64, 2));
/// assert!(!is_power_of(1000i64, 2));
/// assert!(is_power_of(1i64, 7));
/// assert!(!is_power_of(0i64, 7));
/// ```
pub fn is_power_of<T>(number: T, radix: T) -> bool
where
    T: RadixNumeric,
{
    match try_is_power_of(number, radix) {
        Ok(result) => result,
        Err(error) => panic!("is_power_of({number}, {radix}): {error}"),
    }
}

/// Fallible form of [`is_power_of`].
pub fn try_is_power_of<T>(number: T, radix: T) -> RadixResult<bool>
where
    T: RadixNumeric,
{
    ensure_radix(radix)?;
    if number < T::ZERO {
        return Err(RadixError::DomainViolation);
    }
    if number == T::ZERO {
        return Ok(false);
    }
    if number == radix {
        return Ok(true);
    }
    if radix == T::TWO {
        return Ok(is_power_of_two(number));
    }
    let mut remaining = number;
    while remaining % radix == T::ZERO {
        remaining = remaining / radix;
    }
    Ok(remaining == T::ONE)
}

/// Returns `true` if `number` is a power of two.
///
/// Non-positive numbers are never powers of two.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::is_pow::is_power_of_two;
///
/// assert!(is_power_of_two(1i64));
/// assert!(is_power_of_two(1024i64));
/// assert!(!is_power_of_two(1000i64));
/// assert!(!is_power_of_two(0i64));
/// assert!(!is_power_of_two(-4i64));
/// ```
#[inline]
pub fn is_power_of_two<T>(number: T) -> bool
where
    T: RadixNumeric,
{
    number > T::ZERO && number.count_ones() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pow::pow;

    #[test]
    fn test_powers_of_two() {
        assert!(is_power_of(1024i64, 2));
        assert!(!is_power_of(1000i64, 2));
        assert!(is_power_of(1i64, 2));
        assert!(is_power_of(2i64, 2));
        assert!(!is_power_of(6i64, 2));
    }

    #[test]
    fn test_powers_of_ten() {
        assert!(is_power_of(1i64, 10));
        assert!(is_power_of(10i64, 10));
        assert!(is_power_of(1_000_000i64, 10));
        assert!(!is_power_of(999_999i64, 10));
        assert!(!is_power_of(20i64, 10));
    }

    #[test]
    fn test_zero_is_never_a_power() {
        for r in [2i64, 3, 10, 16] {
            assert!(!is_power_of(0i64, r));
        }
    }

    #[test]
    fn test_radix_itself_is_a_power() {
        for r in [2i64, 3, 10, 62] {
            assert!(is_power_of(r, r));
        }
    }

    #[test]
    fn test_pow_round_trip() {
        for r in [2i64, 3, 5, 10, 16] {
            for k in 0..=12i64 {
                assert!(is_power_of(pow(r, k), r), "r={r}, k={k}");
            }
        }
    }

    #[test]
    fn test_is_power_of_two() {
        assert!(is_power_of_two(1i32));
        assert!(is_power_of_two(1i64 << 62));
        assert!(!is_power_of_two(3i32));
        assert!(!is_power_of_two(0i32));
        assert!(!is_power_of_two(i64::MIN));
    }

    #[test]
    fn test_negative_number_is_rejected() {
        assert_eq!(try_is_power_of(-8i64, 2), Err(RadixError::DomainViolation));
    }

    #[test]
    #[should_panic(expected = "domain violation")]
    fn test_panics_on_negative_number() {
        let _ = is_power_of(-8i64, 2);
    }

    #[test]
    fn test_invalid_radix() {
        assert_eq!(try_is_power_of(8i64, 1), Err(RadixError::InvalidRadix));
    }
}
