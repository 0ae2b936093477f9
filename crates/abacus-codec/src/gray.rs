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

//! # Gray-Code Transforms
//!
//! Binary reflected Gray code and its base-N generalization. Successive
//! values of a Gray sequence differ by a single unit of change, which is
//! what makes the encoding useful for minimizing transition noise.
//!
//! The binary transform is the classic `value XOR (value >> 1)`; the
//! generalized transform walks the base-radix digits from the most
//! significant one down, offsetting each digit by a running shift. Both
//! directions require non-negative input and obey the round-trip law
//! `from_gray(to_gray(x)) == x`.

use abacus_radix::{
    digits::{DigitBuffer, try_digits, try_from_digits},
    error::{RadixError, RadixResult},
    num::RadixNumeric,
    validate::ensure_radix,
};

/// Converts a non-negative value to its binary reflected Gray code.
///
/// # Panics
///
/// Panics if `value` is negative.
///
/// # Examples
///
/// ```rust
/// # use abacus_codec::gray::to_gray;
///
/// assert_eq!(to_gray(5i64), 7); // 101 -> 111
/// assert_eq!(to_gray(0i64), 0);
/// ```
pub fn to_gray<T>(value: T) -> T
where
    T: RadixNumeric,
{
    match try_to_gray(value) {
        Ok(gray) => gray,
        Err(error) => panic!("to_gray({value}): {error}"),
    }
}

/// Fallible form of [`to_gray`].
#[inline]
pub fn try_to_gray<T>(value: T) -> RadixResult<T>
where
    T: RadixNumeric,
{
    if value < T::ZERO {
        return Err(RadixError::DomainViolation);
    }
    Ok(value ^ (value >> 1))
}

/// Converts a binary reflected Gray code back to the value it encodes.
///
/// The accumulator is XOR-ed with ever smaller right shifts of itself,
/// undoing the encoding bit by bit from the most significant surviving
/// bit downward.
///
/// # Panics
///
/// Panics if `gray` is negative.
///
/// # Examples
///
/// ```rust
/// # use abacus_codec::gray::from_gray;
///
/// assert_eq!(from_gray(7i64), 5); // 111 -> 101
/// assert_eq!(from_gray(0i64), 0);
/// ```
pub fn from_gray<T>(gray: T) -> T
where
    T: RadixNumeric,
{
    match try_from_gray(gray) {
        Ok(value) => value,
        Err(error) => panic!("from_gray({gray}): {error}"),
    }
}

/// Fallible form of [`from_gray`].
pub fn try_from_gray<T>(gray: T) -> RadixResult<T>
where
    T: RadixNumeric,
{
    if gray < T::ZERO {
        return Err(RadixError::DomainViolation);
    }
    let mut value = gray;
    let mut mask = gray >> 1;
    while mask > T::ZERO {
        value = value ^ mask;
        mask = mask >> 1;
    }
    Ok(value)
}

/// Converts a non-negative value to the base-`radix` reflected Gray code.
///
/// The base-radix digits are transformed in place with a running shift
/// from the high digit down and reassembled; for `radix = 2` the result
/// equals [`to_gray`].
///
/// # Panics
///
/// Panics if `radix < 2`, if `value` is negative, or if the transformed
/// digit sequence overflows the integer type on reassembly.
///
/// # Examples
///
/// ```rust
/// # use abacus_codec::gray::{to_gray, to_gray_radix};
///
/// assert_eq!(to_gray_radix(5i64, 2), to_gray(5i64));
/// assert_eq!(to_gray_radix(14i64, 3), 10); // 112 -> 101
/// ```
pub fn to_gray_radix<T>(value: T, radix: T) -> T
where
    T: RadixNumeric,
{
    match try_to_gray_radix(value, radix) {
        Ok(gray) => gray,
        Err(error) => panic!("to_gray_radix({value}, {radix}): {error}"),
    }
}

/// Fallible form of [`to_gray_radix`].
pub fn try_to_gray_radix<T>(value: T, radix: T) -> RadixResult<T>
where
    T: RadixNumeric,
{
    ensure_radix(radix)?;
    if value < T::ZERO {
        return Err(RadixError::DomainViolation);
    }
    let plain = try_digits(value, radix)?;
    let mut encoded = DigitBuffer::new();
    let mut shift = T::ZERO;
    for &digit in plain.iter() {
        let gray = add_mod(digit, shift, radix);
        encoded.push(gray);
        let complement = if gray == T::ZERO { T::ZERO } else { radix - gray };
        shift = add_mod(shift, complement, radix);
    }
    try_from_digits(&encoded, radix)
}

/// Converts a base-`radix` reflected Gray code back to the value it
/// encodes.
///
/// # Panics
///
/// Panics if `radix < 2`, if `gray` is negative, or if the decoded digit
/// sequence overflows the integer type on reassembly.
///
/// # Examples
///
/// ```rust
/// # use abacus_codec::gray::from_gray_radix;
///
/// assert_eq!(from_gray_radix(10i64, 3), 14); // 101 -> 112
/// ```
pub fn from_gray_radix<T>(gray: T, radix: T) -> T
where
    T: RadixNumeric,
{
    match try_from_gray_radix(gray, radix) {
        Ok(value) => value,
        Err(error) => panic!("from_gray_radix({gray}, {radix}): {error}"),
    }
}

/// Fallible form of [`from_gray_radix`].
pub fn try_from_gray_radix<T>(gray: T, radix: T) -> RadixResult<T>
where
    T: RadixNumeric,
{
    ensure_radix(radix)?;
    if gray < T::ZERO {
        return Err(RadixError::DomainViolation);
    }
    let encoded = try_digits(gray, radix)?;
    let mut plain = DigitBuffer::new();
    let mut shift = T::ZERO;
    for &digit in encoded.iter() {
        plain.push(add_mod(digit, shift, radix));
        shift = add_mod(shift, digit, radix);
    }
    try_from_digits(&plain, radix)
}

/// Adds two residues modulo `modulus` without overflowing the integer
/// type. Both operands must already lie in `[0, modulus)`.
#[inline]
fn add_mod<T>(a: T, b: T, modulus: T) -> T
where
    T: RadixNumeric,
{
    if a >= modulus - b {
        a - (modulus - b)
    } else {
        a + b
    }
}
