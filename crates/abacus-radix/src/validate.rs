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

//! # Radix Validation
//!
//! Every operation of the engine validates its radix on entry. A caller
//! passing a radix below two has a logic bug, so the plain operations
//! fail fast; the `try_` operations report `RadixError::InvalidRadix`.

use crate::{
    error::{RadixError, RadixResult},
    num::RadixNumeric,
};

/// Returns `true` if `radix` is a valid radix, i.e. at least two.
///
/// # Examples
///
/// ```rust
/// # use abacus_radix::validate::is_valid_radix;
///
/// assert!(is_valid_radix(2));
/// assert!(is_valid_radix(16));
/// assert!(!is_valid_radix(1));
/// assert!(!is_valid_radix(-10));
/// ```
#[inline]
pub fn is_valid_radix<T>(radix: T) -> bool
where
    T: RadixNumeric,
{
    radix >= T::TWO
}

/// Asserts that `radix` is valid.
///
/// # Panics
///
/// Panics if `radix < 2`.
#[inline]
pub fn require_radix<T>(radix: T)
where
    T: RadixNumeric,
{
    assert!(
        is_valid_radix(radix),
        "invalid radix {radix}: a radix must be at least 2"
    );
}

/// Checks that `radix` is valid, returning `RadixError::InvalidRadix`
/// otherwise.
#[inline]
pub fn ensure_radix<T>(radix: T) -> RadixResult<()>
where
    T: RadixNumeric,
{
    if is_valid_radix(radix) {
        Ok(())
    } else {
        Err(RadixError::InvalidRadix)
    }
}
