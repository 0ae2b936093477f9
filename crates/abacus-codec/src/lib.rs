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

//! # Abacus Codec
//!
//! Codecs built on top of the `abacus-radix` engine.
//!
//! ## Modules
//!
//! - `gray`: Binary and generalized base-N reflected Gray-code
//!   transforms, with the round-trip law `from_gray(to_gray(x)) == x`
//!   for all non-negative `x`.
//! - `text`: Number-to-string encoding and parsing over an arbitrary
//!   ordered symbol alphabet, including the built-in 62-symbol alphabet
//!   and zero-padded output.
//!
//! Both codecs consume the engine's digit extractor and inherit its
//! error taxonomy: plain functions fail fast on precondition violations,
//! `try_` variants report a `RadixResult`, and string parsing has its
//! own recoverable [`DecodeError`](text::DecodeError).

pub mod gray;
pub mod text;
