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

//! # Abacus Radix
//!
//! A generic radix-arithmetic engine over signed primitive integers.
//! Every operation is a pure, stateless free function parameterized by a
//! radix of at least two: digit decomposition and reassembly, integer
//! powers and logarithms, power-of-radix bracketing with rounding-mode
//! tie-breaking, and exact-power tests.
//!
//! ## Modules
//!
//! - `num`: The unified [`RadixNumeric`](num::RadixNumeric) bound and
//!   sign-handling helpers.
//! - `error`: The [`RadixError`](error::RadixError) taxonomy shared by all
//!   fallible operations.
//! - `validate`: Radix validation, called at the entry of every operation.
//! - `digits`: Digit extraction, counting, summing, and reassembly.
//! - `pow`: Exponentiation by squaring with checked overflow.
//! - `log`: Floor/ceiling integer logarithms, sign-aware.
//! - `locate`: Bracketing a value between adjacent powers of the radix.
//! - `nearest`: Resolving a bracket to its closest bound, with a
//!   [`RoundingMode`](nearest::RoundingMode) deciding exact ties.
//! - `is_pow`: Exact power-of-radix tests.
//!
//! ## Error handling
//!
//! Each operation comes in two flavors. The plain form treats every
//! violation (invalid radix, negative exponent, overflow, negative input
//! to a non-negative domain) as a programming error and panics with a
//! descriptive message. The `try_` form returns a
//! [`RadixResult`](error::RadixResult) instead, catching exactly those
//! conditions for call sites that want to probe without crashing.
//!
//! ## Concurrency
//!
//! All functions are pure and operate only on stack-local state, so
//! concurrent callers need no synchronization.
//!
//! # Examples
//!
//! ```rust
//! use abacus_radix::{digits::digits, locate::locate, pow::pow};
//!
//! assert_eq!(pow(2i64, 10), 1024);
//! assert_eq!(digits(1234i64, 10).as_slice(), &[1, 2, 3, 4]);
//!
//! let bracket = locate(100i64, 2, false);
//! assert_eq!(bracket.toward_zero(), 64);
//! assert_eq!(bracket.away_from_zero(), 128);
//! ```

pub mod digits;
pub mod error;
pub mod is_pow;
pub mod locate;
pub mod log;
pub mod nearest;
pub mod num;
pub mod pow;
pub mod validate;
