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

//! # Integer Power
//!
//! Exponentiation by squaring with overflow-checked multiplication. The
//! base is deliberately not radix-validated: this is general integer
//! exponentiation, and negative bases flow through the squaring loop
//! unchanged. The exponent must be non-negative; a reciprocal variant
//! covers the use cases negative exponents would serve.

use crate::{
    error::{RadixError, RadixResult},
    num::RadixNumeric,
};

/// Raises `base` to the power `exponent` by repeated squaring.
///
/// `exponent = 0` returns one for every base, including zero.
///
/// # Panics
///
/// Panics if `exponent` is negative, or if an intermediate
/// multiplication overflows the integer type.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::pow::pow;
///
/// assert_eq!(pow(2i64, 10), 1024);
/// assert_eq!(pow(10i64, 0), 1);
/// assert_eq!(pow(0i64, 0), 1);
/// assert_eq!(pow(-3i64, 3), -27);
/// ```
pub fn pow<T>(base: T, exponent: T) -> T
where
    T: RadixNumeric,
{
    match try_pow(base, exponent) {
        Ok(result) => result,
        Err(error) => panic!("pow({base}, {exponent}): {error}"),
    }
}

/// Fallible form of [`pow`].
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::pow::try_pow;
/// # use abacus_radix::error::RadixError;
///
/// assert_eq!(try_pow(2i64, 10), Ok(1024));
/// assert_eq!(try_pow(2i64, -1), Err(RadixError::InvalidExponent));
/// assert_eq!(try_pow(2i64, 63), Err(RadixError::Overflow));
/// ```
pub fn try_pow<T>(base: T, exponent: T) -> RadixResult<T>
where
    T: RadixNumeric,
{
    if exponent < T::ZERO {
        return Err(RadixError::InvalidExponent);
    }
    let mut result = T::ONE;
    let mut square = base;
    let mut remaining = exponent;
    while remaining > T::ZERO {
        if (remaining & T::ONE) == T::ONE {
            result = result.checked_mul_val(square).ok_or(RadixError::Overflow)?;
        }
        remaining = remaining >> 1;
        if remaining > T::ZERO {
            // Only square while another bit is pending, so an oversized
            // intermediate square cannot fail a representable result.
            square = square.checked_mul_val(square).ok_or(RadixError::Overflow)?;
        }
    }
    Ok(result)
}

/// Raises `base` to the power `exponent` and also returns the reciprocal
/// `1 / base^exponent` as a floating-point value.
///
/// The reciprocal is computed once from the final integer power, which
/// stands in for negative exponents without floating-point
/// exponentiation.
///
/// # Panics
///
/// Panics if `exponent` is negative or the power overflows.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::pow::pow_with_reciprocal;
///
/// let (power, reciprocal) = pow_with_reciprocal(2i64, 10);
/// assert_eq!(power, 1024);
/// assert_eq!(reciprocal, 1.0 / 1024.0);
/// ```
pub fn pow_with_reciprocal<T>(base: T, exponent: T) -> (T, f64)
where
    T: RadixNumeric,
{
    match try_pow_with_reciprocal(base, exponent) {
        Ok(result) => result,
        Err(error) => panic!("pow_with_reciprocal({base}, {exponent}): {error}"),
    }
}

/// Fallible form of [`pow_with_reciprocal`].
pub fn try_pow_with_reciprocal<T>(base: T, exponent: T) -> RadixResult<(T, f64)>
where
    T: RadixNumeric,
{
    let result = try_pow(base, exponent)?;
    let as_float = result.to_f64().ok_or(RadixError::Overflow)?;
    Ok((result, 1.0 / as_float))
}
