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

//! # Radix Numeric Trait
//!
//! Unified numeric bounds for the radix engine. `RadixNumeric` specifies
//! the integer capabilities every operation requires: intrinsic traits
//! (`PrimInt`, `Signed`), conversion from primitives, associated constants,
//! and by-value checked arithmetic traits from `abacus_core`.
//!
//! ## Motivation
//!
//! The engine should remain generic over integer width while retaining
//! predictable arithmetic semantics. This trait collects the necessary
//! bounds into a single alias, simplifying generic signatures and
//! ensuring consistent overflow handling across every operation that
//! builds on another (nearest-power on bracketing, bracketing on the
//! integer logarithm, the logarithm on digit counting).
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Signed + FromPrimitive` for numeric fundamentals.
//! - Includes the `Zero`, `One`, `Two` constant traits.
//! - Adds by-value checked add/sub/mul/neg returning `Option<T>`.
//! - `Send + Sync` so callers may share the pure functions across threads.
//!
//! The blanket implementation covers all signed primitive integers:
//! `i8`, `i16`, `i32`, `i64`, `i128`, and `isize`.

use abacus_core::num::{
    constants::{One, Two, Zero},
    ops::checked_arithmetic::{CheckedAddVal, CheckedMulVal, CheckedNegVal, CheckedSubVal},
};
use num_traits::{FromPrimitive, PrimInt, Signed};

/// A trait alias for numeric types the radix engine operates on.
/// This covers signed integer types that support overflow-checked
/// arithmetic and constant access in generic contexts.
/// These are the signed primitives `i8`, `i16`, `i32`, `i64`, `i128`
/// and `isize`.
pub trait RadixNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + One
    + Two
    + CheckedAddVal
    + CheckedSubVal
    + CheckedMulVal
    + CheckedNegVal
    + Send
    + Sync
{
}

impl<T> RadixNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + One
        + Two
        + CheckedAddVal
        + CheckedSubVal
        + CheckedMulVal
        + CheckedNegVal
        + Send
        + Sync
{
}

/// Returns `|number|`, or `None` if the magnitude is not representable
/// (the `T::MIN` case of two's complement).
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::num::checked_abs;
///
/// assert_eq!(checked_abs(-42i32), Some(42));
/// assert_eq!(checked_abs(42i32), Some(42));
/// assert_eq!(checked_abs(i32::MIN), None);
/// ```
#[inline]
pub fn checked_abs<T>(number: T) -> Option<T>
where
    T: RadixNumeric,
{
    if number < T::ZERO {
        number.checked_neg_val()
    } else {
        Some(number)
    }
}

/// Re-applies a sign to a non-negative magnitude, returning `None` if the
/// negation overflows.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::num::apply_sign;
///
/// assert_eq!(apply_sign(42i32, true), Some(-42));
/// assert_eq!(apply_sign(42i32, false), Some(42));
/// ```
#[inline]
pub fn apply_sign<T>(magnitude: T, negative: bool) -> Option<T>
where
    T: RadixNumeric,
{
    if negative {
        magnitude.checked_neg_val()
    } else {
        Some(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_radix_numeric<T: RadixNumeric>() {}

    #[test]
    fn test_signed_primitives_satisfy_bound() {
        assert_radix_numeric::<i8>();
        assert_radix_numeric::<i16>();
        assert_radix_numeric::<i32>();
        assert_radix_numeric::<i64>();
        assert_radix_numeric::<i128>();
        assert_radix_numeric::<isize>();
    }

    #[test]
    fn test_checked_abs() {
        assert_eq!(checked_abs(0i64), Some(0));
        assert_eq!(checked_abs(-1i64), Some(1));
        assert_eq!(checked_abs(i64::MIN), None);
        assert_eq!(checked_abs(i64::MAX), Some(i64::MAX));
    }

    #[test]
    fn test_apply_sign() {
        assert_eq!(apply_sign(0i64, true), Some(0));
        assert_eq!(apply_sign(7i64, true), Some(-7));
        assert_eq!(apply_sign(7i64, false), Some(7));
    }
}
