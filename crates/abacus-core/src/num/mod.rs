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

//! # Numeric Utilities
//!
//! Integer-centric traits shared by the radix engine and the codecs.
//!
//! ## Submodules
//!
//! - `constants`: Associated constant traits (`Zero`, `One`, `Two`) for
//!   integer primitives, enabling constant access in generic contexts.
//! - `ops`: By-value checked arithmetic traits that mirror the intrinsic
//!   `checked_*` methods of the primitive integers.
//!
//! ## Motivation
//!
//! Digit loops, power computation, and bracket location demand precise
//! overflow semantics. These modules provide concise, generic building
//! blocks that reduce ad hoc per-type code and help avoid silent
//! wrap-around bugs.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod constants;
pub mod ops;
