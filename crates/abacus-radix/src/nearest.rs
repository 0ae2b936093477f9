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

//! # Nearest Power Resolution
//!
//! Collapsing a power bracket to the single bound closest to the value.
//! A strictly closer bound always wins; the [`RoundingMode`] is consulted
//! only when the value sits exactly halfway between the two bounds. This
//! is the one place in the engine where rounding-mode semantics are
//! evaluated.

use crate::{error::RadixResult, locate::try_locate, num::RadixNumeric};

/// The tie-breaking policy for a value exactly halfway between the two
/// bounds of a power bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Pick the bound closer to zero.
    TowardZero,
    /// Pick the bound farther from zero.
    AwayFromZero,
    /// Pick the even bound, falling back to the bound farther from zero
    /// when both bounds are odd.
    ToEven,
    /// Pick the odd bound, falling back to the bound farther from zero
    /// when both bounds are even.
    ToOdd,
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TowardZero => write!(f, "TowardZero"),
            Self::AwayFromZero => write!(f, "AwayFromZero"),
            Self::ToEven => write!(f, "ToEven"),
            Self::ToOdd => write!(f, "ToOdd"),
        }
    }
}

/// Returns the power of `radix` closest to `number`, breaking exact ties
/// with `mode`.
///
/// The bracket is computed by [`locate`](crate::locate::locate) with the
/// same `proper` semantics; every mode agrees whenever the two distances
/// differ.
///
/// # Panics
///
/// Panics if `radix < 2`, if `|number|` is not representable, or if the
/// bracket overflows the integer type.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::nearest::{RoundingMode, nearest_power};
///
/// assert_eq!(nearest_power(100i64, 2, false, RoundingMode::ToEven), 128);
/// assert_eq!(nearest_power(70i64, 2, false, RoundingMode::ToEven), 64);
///
/// // 96 sits exactly between 64 and 128; the mode decides.
/// assert_eq!(nearest_power(96i64, 2, false, RoundingMode::TowardZero), 64);
/// assert_eq!(nearest_power(96i64, 2, false, RoundingMode::AwayFromZero), 128);
/// ```
pub fn nearest_power<T>(number: T, radix: T, proper: bool, mode: RoundingMode) -> T
where
    T: RadixNumeric,
{
    match try_nearest_power(number, radix, proper, mode) {
        Ok(bound) => bound,
        Err(error) => panic!("nearest_power({number}, {radix}, {proper}, {mode}): {error}"),
    }
}

/// Fallible form of [`nearest_power`].
pub fn try_nearest_power<T>(number: T, radix: T, proper: bool, mode: RoundingMode) -> RadixResult<T>
where
    T: RadixNumeric,
{
    let bracket = try_locate(number, radix, proper)?;
    let toward_zero = bracket.toward_zero();
    let away_from_zero = bracket.away_from_zero();
    // Both bounds share the sign of the number and are representable, so
    // the gaps fit without overflow.
    let toward_gap = (number - toward_zero).abs();
    let away_gap = (away_from_zero - number).abs();
    if toward_gap < away_gap {
        return Ok(toward_zero);
    }
    if away_gap < toward_gap {
        return Ok(away_from_zero);
    }
    let chosen = match mode {
        RoundingMode::TowardZero => toward_zero,
        RoundingMode::AwayFromZero => away_from_zero,
        RoundingMode::ToEven => {
            if is_even(toward_zero) {
                toward_zero
            } else {
                away_from_zero
            }
        }
        RoundingMode::ToOdd => {
            if !is_even(toward_zero) {
                toward_zero
            } else {
                away_from_zero
            }
        }
    };
    Ok(chosen)
}

#[inline]
fn is_even<T>(value: T) -> bool
where
    T: RadixNumeric,
{
    value % T::TWO == T::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RadixError;

    const ALL_MODES: [RoundingMode; 4] = [
        RoundingMode::TowardZero,
        RoundingMode::AwayFromZero,
        RoundingMode::ToEven,
        RoundingMode::ToOdd,
    ];

    #[test]
    fn test_strictly_closer_bound_wins_for_every_mode() {
        for mode in ALL_MODES {
            // Bracket [64, 128]: 100 is closer to 128, 70 closer to 64.
            assert_eq!(nearest_power(100i64, 2, false, mode), 128, "{mode}");
            assert_eq!(nearest_power(70i64, 2, false, mode), 64, "{mode}");
        }
    }

    #[test]
    fn test_halfway_tie_uses_mode() {
        // 96 is equidistant from 64 and 128.
        assert_eq!(nearest_power(96i64, 2, false, RoundingMode::TowardZero), 64);
        assert_eq!(nearest_power(96i64, 2, false, RoundingMode::AwayFromZero), 128);
        // Both bounds are even; ToEven keeps the toward bound, ToOdd
        // falls through to the away bound.
        assert_eq!(nearest_power(96i64, 2, false, RoundingMode::ToEven), 64);
        assert_eq!(nearest_power(96i64, 2, false, RoundingMode::ToOdd), 128);
    }

    #[test]
    fn test_halfway_tie_parity_base_three() {
        // Bracket [1, 3]: 2 is equidistant; 1 is odd, 3 is odd.
        assert_eq!(nearest_power(2i64, 3, false, RoundingMode::ToOdd), 1);
        assert_eq!(nearest_power(2i64, 3, false, RoundingMode::ToEven), 3);
    }

    #[test]
    fn test_negative_numbers() {
        // Bracket [-64, -128]: -100 is closer to -128.
        for mode in ALL_MODES {
            assert_eq!(nearest_power(-100i64, 2, false, mode), -128, "{mode}");
            assert_eq!(nearest_power(-70i64, 2, false, mode), -64, "{mode}");
        }
        assert_eq!(nearest_power(-96i64, 2, false, RoundingMode::TowardZero), -64);
        assert_eq!(nearest_power(-96i64, 2, false, RoundingMode::AwayFromZero), -128);
    }

    #[test]
    fn test_exact_power_is_its_own_nearest() {
        for mode in ALL_MODES {
            assert_eq!(nearest_power(64i64, 2, false, mode), 64, "{mode}");
        }
    }

    #[test]
    fn test_proper_bracket() {
        // Proper bracket of 64 is [32, 128]; 64 is closer to 32.
        for mode in ALL_MODES {
            assert_eq!(nearest_power(64i64, 2, true, mode), 32, "{mode}");
        }
    }

    #[test]
    fn test_zero() {
        for mode in ALL_MODES {
            assert_eq!(nearest_power(0i64, 10, false, mode), 0, "{mode}");
        }
    }

    #[test]
    fn test_try_errors() {
        assert_eq!(
            try_nearest_power(100i64, 1, false, RoundingMode::ToEven),
            Err(RadixError::InvalidRadix)
        );
        assert_eq!(
            try_nearest_power(i64::MAX, 2, false, RoundingMode::ToEven),
            Err(RadixError::Overflow)
        );
    }
}
