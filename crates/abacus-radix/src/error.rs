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

//! # Error Taxonomy
//!
//! The four failure conditions of the radix engine. The plain operations
//! panic on them; the `try_` variants surface them as `RadixResult`
//! values and catch exactly these conditions, nothing else.

/// The error type for radix-engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadixError {
    /// The radix was below two, or exceeded the available alphabet length.
    InvalidRadix,
    /// A negative exponent was passed to an integer power.
    InvalidExponent,
    /// A checked multiplication, addition, or negation exceeded the range
    /// of the integer type.
    Overflow,
    /// A negative operand was passed to a function requiring a
    /// non-negative domain, or a digit lay outside `[0, radix)`.
    DomainViolation,
}

impl std::fmt::Display for RadixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRadix => write!(f, "invalid radix: a radix must be at least 2"),
            Self::InvalidExponent => {
                write!(f, "invalid exponent: integer powers require a non-negative exponent")
            }
            Self::Overflow => {
                write!(f, "arithmetic overflow: the result does not fit the integer type")
            }
            Self::DomainViolation => {
                write!(f, "domain violation: an operand lies outside the function's domain")
            }
        }
    }
}

impl std::error::Error for RadixError {}

/// A specialized result type for radix-engine operations.
pub type RadixResult<T> = Result<T, RadixError>;
