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

//! # Digit Extraction
//!
//! Decomposition of a number into its base-radix digits and reassembly of
//! a digit sequence back into a number. This is the primitive the rest of
//! the engine and the codecs build on.
//!
//! Digits are values in `[0, radix)` carried in the same integer type as
//! the number, because consumers combine them back arithmetically. A
//! digit sequence never encodes the sign; callers that need it re-apply
//! the sign themselves. Zero decomposes to the single-digit sequence
//! `[0]`, never to an empty sequence.

use crate::{
    error::{RadixError, RadixResult},
    num::{RadixNumeric, apply_sign, checked_abs},
    validate::ensure_radix,
};
use smallvec::SmallVec;

/// An inline-allocated digit sequence.
///
/// Twenty inline slots hold the full decimal expansion of any 64-bit
/// integer without spilling to the heap.
pub type DigitBuffer<T> = SmallVec<[T; 20]>;

/// Returns the base-`radix` digits of `|number|`, most significant first.
///
/// # Panics
///
/// Panics if `radix < 2` or if `|number|` is not representable
/// (`T::MIN`).
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::digits::digits;
///
/// assert_eq!(digits(1234i64, 10).as_slice(), &[1, 2, 3, 4]);
/// assert_eq!(digits(255i64, 16).as_slice(), &[15, 15]);
/// assert_eq!(digits(0i64, 10).as_slice(), &[0]);
/// assert_eq!(digits(-1234i64, 10).as_slice(), &[1, 2, 3, 4]);
/// ```
pub fn digits<T>(number: T, radix: T) -> DigitBuffer<T>
where
    T: RadixNumeric,
{
    match try_digits(number, radix) {
        Ok(buffer) => buffer,
        Err(error) => panic!("digits({number}, {radix}): {error}"),
    }
}

/// Fallible form of [`digits`].
pub fn try_digits<T>(number: T, radix: T) -> RadixResult<DigitBuffer<T>>
where
    T: RadixNumeric,
{
    let mut buffer = try_digits_reversed_bounded(number, radix, usize::MAX)?;
    buffer.reverse();
    Ok(buffer)
}

/// Returns the base-`radix` digits of `|number|`, least significant first.
///
/// This is the raw division order, without the final reversal of
/// [`digits`].
///
/// # Panics
///
/// Panics if `radix < 2` or if `|number|` is not representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::digits::digits_reversed;
///
/// assert_eq!(digits_reversed(1234i64, 10).as_slice(), &[4, 3, 2, 1]);
/// ```
pub fn digits_reversed<T>(number: T, radix: T) -> DigitBuffer<T>
where
    T: RadixNumeric,
{
    digits_reversed_bounded(number, radix, usize::MAX)
}

/// Returns at most `max_digits` base-`radix` digits of `|number|`, least
/// significant first.
///
/// Extraction stops early once `max_digits` digits have been collected,
/// which bounds the allocation for fixed-width consumers. `max_digits = 0`
/// yields an empty buffer.
///
/// # Panics
///
/// Panics if `radix < 2` or if `|number|` is not representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::digits::digits_reversed_bounded;
///
/// assert_eq!(digits_reversed_bounded(1234i64, 10, 2).as_slice(), &[4, 3]);
/// assert_eq!(digits_reversed_bounded(1234i64, 10, 0).as_slice(), &[] as &[i64]);
/// ```
pub fn digits_reversed_bounded<T>(number: T, radix: T, max_digits: usize) -> DigitBuffer<T>
where
    T: RadixNumeric,
{
    match try_digits_reversed_bounded(number, radix, max_digits) {
        Ok(buffer) => buffer,
        Err(error) => panic!("digits_reversed_bounded({number}, {radix}): {error}"),
    }
}

/// Fallible form of [`digits_reversed_bounded`].
pub fn try_digits_reversed_bounded<T>(
    number: T,
    radix: T,
    max_digits: usize,
) -> RadixResult<DigitBuffer<T>>
where
    T: RadixNumeric,
{
    ensure_radix(radix)?;
    let mut magnitude = checked_abs(number).ok_or(RadixError::Overflow)?;
    let mut buffer = DigitBuffer::new();
    if max_digits == 0 {
        return Ok(buffer);
    }
    loop {
        buffer.push(magnitude % radix);
        magnitude = magnitude / radix;
        if magnitude == T::ZERO || buffer.len() == max_digits {
            break;
        }
    }
    Ok(buffer)
}

/// Returns the number of base-`radix` digits of `|number|`.
///
/// Zero has exactly one digit.
///
/// # Panics
///
/// Panics if `radix < 2` or if `|number|` is not representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::digits::digit_count;
///
/// assert_eq!(digit_count(1234i64, 10), 4);
/// assert_eq!(digit_count(0i64, 10), 1);
/// ```
#[inline]
pub fn digit_count<T>(number: T, radix: T) -> u32
where
    T: RadixNumeric,
{
    digit_count_and_sum(number, radix).0
}

/// Returns the sum of the base-`radix` digits of `|number|`.
///
/// # Panics
///
/// Panics if `radix < 2` or if `|number|` is not representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::digits::digit_sum;
///
/// assert_eq!(digit_sum(1234i64, 10), 10);
/// ```
#[inline]
pub fn digit_sum<T>(number: T, radix: T) -> T
where
    T: RadixNumeric,
{
    digit_count_and_sum(number, radix).1
}

/// Returns the digit count and digit sum of `|number|` in one division
/// loop, for call sites that need both.
///
/// # Panics
///
/// Panics if `radix < 2` or if `|number|` is not representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::digits::digit_count_and_sum;
///
/// assert_eq!(digit_count_and_sum(1234i64, 10), (4, 10));
/// assert_eq!(digit_count_and_sum(0i64, 10), (1, 0));
/// ```
pub fn digit_count_and_sum<T>(number: T, radix: T) -> (u32, T)
where
    T: RadixNumeric,
{
    match try_digit_count_and_sum(number, radix) {
        Ok(result) => result,
        Err(error) => panic!("digit_count_and_sum({number}, {radix}): {error}"),
    }
}

/// Fallible form of [`digit_count_and_sum`].
pub fn try_digit_count_and_sum<T>(number: T, radix: T) -> RadixResult<(u32, T)>
where
    T: RadixNumeric,
{
    ensure_radix(radix)?;
    let mut magnitude = checked_abs(number).ok_or(RadixError::Overflow)?;
    let mut count = 0u32;
    let mut sum = T::ZERO;
    loop {
        // The digit sum never exceeds |number|, so the addition cannot overflow.
        sum = sum + magnitude % radix;
        magnitude = magnitude / radix;
        count += 1;
        if magnitude == T::ZERO {
            break;
        }
    }
    Ok((count, sum))
}

/// Keeps the `count` most significant base-`radix` digits of `number`,
/// discarding the rest; the sign is preserved.
///
/// When `count` is at least the digit count, the number is returned
/// unchanged.
///
/// # Panics
///
/// Panics if `radix < 2` or if `|number|` is not representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::digits::keep_most_significant_digits;
///
/// assert_eq!(keep_most_significant_digits(1234i64, 10, 2), 12);
/// assert_eq!(keep_most_significant_digits(-1234i64, 10, 2), -12);
/// assert_eq!(keep_most_significant_digits(1234i64, 10, 9), 1234);
/// ```
pub fn keep_most_significant_digits<T>(number: T, radix: T, count: u32) -> T
where
    T: RadixNumeric,
{
    match try_keep_most_significant_digits(number, radix, count) {
        Ok(kept) => kept,
        Err(error) => panic!("keep_most_significant_digits({number}, {radix}, {count}): {error}"),
    }
}

/// Fallible form of [`keep_most_significant_digits`].
pub fn try_keep_most_significant_digits<T>(number: T, radix: T, count: u32) -> RadixResult<T>
where
    T: RadixNumeric,
{
    let negative = number < T::ZERO;
    let (_, kept, _) = split_at_digit(number, radix, count)?;
    apply_sign(kept, negative).ok_or(RadixError::Overflow)
}

/// Drops the `count` most significant base-`radix` digits of `number`,
/// keeping the rest; the sign is preserved.
///
/// When `count` is at least the digit count, the result is zero.
///
/// # Panics
///
/// Panics if `radix < 2` or if `|number|` is not representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::digits::drop_most_significant_digits;
///
/// assert_eq!(drop_most_significant_digits(1234i64, 10, 2), 34);
/// assert_eq!(drop_most_significant_digits(-1234i64, 10, 2), -34);
/// assert_eq!(drop_most_significant_digits(1234i64, 10, 9), 0);
/// ```
pub fn drop_most_significant_digits<T>(number: T, radix: T, count: u32) -> T
where
    T: RadixNumeric,
{
    match try_drop_most_significant_digits(number, radix, count) {
        Ok(rest) => rest,
        Err(error) => panic!("drop_most_significant_digits({number}, {radix}, {count}): {error}"),
    }
}

/// Fallible form of [`drop_most_significant_digits`].
pub fn try_drop_most_significant_digits<T>(number: T, radix: T, count: u32) -> RadixResult<T>
where
    T: RadixNumeric,
{
    let negative = number < T::ZERO;
    let (magnitude, kept, total) = split_at_digit(number, radix, count)?;
    // Scale the kept prefix back up to subtract it; the scaled prefix
    // never exceeds |number|, so plain multiplication is safe.
    let mut shifted = kept;
    for _ in 0..total.saturating_sub(count) {
        shifted = shifted * radix;
    }
    apply_sign(magnitude - shifted, negative).ok_or(RadixError::Overflow)
}

/// Divides `|number|` by `radix` once per digit beyond the `count` most
/// significant ones, returning the magnitude, the kept prefix, and the
/// total digit count.
fn split_at_digit<T>(number: T, radix: T, count: u32) -> RadixResult<(T, T, u32)>
where
    T: RadixNumeric,
{
    ensure_radix(radix)?;
    let magnitude = checked_abs(number).ok_or(RadixError::Overflow)?;
    let total = try_digit_count_and_sum(magnitude, radix)?.0;
    let mut kept = magnitude;
    for _ in 0..total.saturating_sub(count) {
        kept = kept / radix;
    }
    Ok((magnitude, kept, total))
}

/// Reassembles a most-significant-first digit sequence into a
/// non-negative number.
///
/// Every digit must lie in `[0, radix)`, and the sequence must be
/// non-empty (zero is `[0]`).
///
/// # Panics
///
/// Panics if `radix < 2`, if a digit lies outside `[0, radix)`, if the
/// sequence is empty, or if the reassembled value overflows.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::digits::from_digits;
///
/// assert_eq!(from_digits(&[1i64, 2, 3, 4], 10), 1234);
/// assert_eq!(from_digits(&[15i64, 15], 16), 255);
/// assert_eq!(from_digits(&[0i64], 10), 0);
/// ```
pub fn from_digits<T>(sequence: &[T], radix: T) -> T
where
    T: RadixNumeric,
{
    match try_from_digits(sequence, radix) {
        Ok(value) => value,
        Err(error) => panic!("from_digits({sequence:?}, {radix}): {error}"),
    }
}

/// Fallible form of [`from_digits`].
pub fn try_from_digits<T>(sequence: &[T], radix: T) -> RadixResult<T>
where
    T: RadixNumeric,
{
    ensure_radix(radix)?;
    if sequence.is_empty() {
        return Err(RadixError::DomainViolation);
    }
    let mut value = T::ZERO;
    for &digit in sequence {
        if digit < T::ZERO || digit >= radix {
            return Err(RadixError::DomainViolation);
        }
        value = value
            .checked_mul_val(radix)
            .and_then(|shifted| shifted.checked_add_val(digit))
            .ok_or(RadixError::Overflow)?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_digits_decimal() {
        assert_eq!(digits(1234i64, 10).as_slice(), &[1, 2, 3, 4]);
        assert_eq!(digit_count(1234i64, 10), 4);
        assert_eq!(digit_sum(1234i64, 10), 10);
    }

    #[test]
    fn test_digits_hexadecimal() {
        assert_eq!(digits(255i64, 16).as_slice(), &[15, 15]);
    }

    #[test]
    fn test_zero_has_one_digit() {
        assert_eq!(digits(0i64, 10).as_slice(), &[0]);
        assert_eq!(digits_reversed(0i64, 10).as_slice(), &[0]);
        assert_eq!(digit_count(0i64, 10), 1);
        assert_eq!(digit_sum(0i64, 10), 0);
    }

    #[test]
    fn test_sign_is_not_encoded() {
        assert_eq!(digits(-1234i64, 10), digits(1234i64, 10));
        assert_eq!(digit_count_and_sum(-255i64, 16), digit_count_and_sum(255i64, 16));
    }

    #[test]
    fn test_digits_reversed() {
        assert_eq!(digits_reversed(1234i64, 10).as_slice(), &[4, 3, 2, 1]);
    }

    #[test]
    fn test_digits_reversed_bounded() {
        assert_eq!(digits_reversed_bounded(1234i64, 10, 2).as_slice(), &[4, 3]);
        assert_eq!(digits_reversed_bounded(1234i64, 10, 10).as_slice(), &[4, 3, 2, 1]);
        assert!(digits_reversed_bounded(1234i64, 10, 0).is_empty());
        assert_eq!(digits_reversed_bounded(0i64, 10, 3).as_slice(), &[0]);
    }

    #[test]
    fn test_digit_sum_matches_digits() {
        for n in [0i64, 1, 9, 10, 99, 1234, 65535, 1_000_000_007] {
            for r in [2i64, 3, 10, 16, 62] {
                let expected: i64 = digits(n, r).iter().sum();
                assert_eq!(digit_sum(n, r), expected, "n={n}, r={r}");
            }
        }
    }

    #[test]
    fn test_keep_most_significant_digits() {
        assert_eq!(keep_most_significant_digits(1234i64, 10, 2), 12);
        assert_eq!(keep_most_significant_digits(1234i64, 10, 4), 1234);
        // Requesting more digits than exist clamps to the whole number.
        assert_eq!(keep_most_significant_digits(1234i64, 10, 9), 1234);
        assert_eq!(keep_most_significant_digits(1234i64, 10, 0), 0);
        assert_eq!(keep_most_significant_digits(-1234i64, 10, 2), -12);
        assert_eq!(keep_most_significant_digits(0i64, 10, 3), 0);
    }

    #[test]
    fn test_drop_most_significant_digits() {
        assert_eq!(drop_most_significant_digits(1234i64, 10, 2), 34);
        assert_eq!(drop_most_significant_digits(1234i64, 10, 0), 1234);
        // Dropping more digits than exist clamps to zero.
        assert_eq!(drop_most_significant_digits(1234i64, 10, 9), 0);
        assert_eq!(drop_most_significant_digits(-1234i64, 10, 2), -34);
        assert_eq!(drop_most_significant_digits(1004i64, 10, 2), 4);
    }

    #[test]
    fn test_keep_and_drop_recompose() {
        for n in [7i64, 90, 1234, 65535, 1_000_000_007] {
            for count in 0..=10u32 {
                let kept = keep_most_significant_digits(n, 10, count);
                let dropped = drop_most_significant_digits(n, 10, count);
                let tail_digits = digit_count(n, 10).saturating_sub(count);
                let scale = 10i64.pow(tail_digits);
                assert_eq!(kept * scale + dropped, n, "n={n}, count={count}");
            }
        }
    }

    #[test]
    fn test_from_digits() {
        assert_eq!(from_digits(&[1i64, 2, 3, 4], 10), 1234);
        assert_eq!(from_digits(&[0i64], 10), 0);
        assert_eq!(try_from_digits(&[] as &[i64], 10), Err(RadixError::DomainViolation));
        assert_eq!(try_from_digits(&[10i64], 10), Err(RadixError::DomainViolation));
        assert_eq!(try_from_digits(&[-1i64], 10), Err(RadixError::DomainViolation));
    }

    #[test]
    fn test_from_digits_overflow() {
        let sequence = digits(i64::MAX, 10);
        let mut too_big: Vec<i64> = sequence.to_vec();
        too_big.push(9);
        assert_eq!(try_from_digits(&too_big, 10), Err(RadixError::Overflow));
    }

    #[test]
    fn test_digit_round_trip_randomized() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let n: i64 = rng.random_range(-1_000_000_000_000..=1_000_000_000_000);
            let r: i64 = rng.random_range(2..=62);
            let sequence = digits(n, r);
            assert_eq!(from_digits(&sequence, r), n.abs(), "n={n}, r={r}");
        }
    }

    #[test]
    fn test_try_rejects_invalid_radix() {
        assert_eq!(try_digits(10i64, 1), Err(RadixError::InvalidRadix));
        assert_eq!(try_digit_count_and_sum(10i64, 0), Err(RadixError::InvalidRadix));
    }

    #[test]
    fn test_try_rejects_unrepresentable_magnitude() {
        assert_eq!(try_digits(i64::MIN, 10), Err(RadixError::Overflow));
    }

    #[test]
    #[should_panic(expected = "invalid radix")]
    fn test_digits_panics_on_bad_radix() {
        let _ = digits(10i64, 1);
    }
}
