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

//! # Alphabet String Codec
//!
//! Rendering a number as text over an arbitrary ordered symbol alphabet,
//! and parsing such text back. The symbol at position `i` of the
//! alphabet denotes digit value `i`, so the alphabet's length is the
//! effective radix. Alphabets are borrowed per call and never persisted;
//! their symbols must be pairwise distinct for decoding to invert
//! encoding (this is documented, not validated).
//!
//! Negative numbers render with a leading `-`; the digit sequence itself
//! never encodes the sign. A built-in 62-symbol alphabet (digits, then
//! uppercase, then lowercase letters) backs the numeric-radix overloads.

use abacus_radix::{
    digits::try_digits,
    error::{RadixError, RadixResult},
    num::{RadixNumeric, checked_abs},
};

/// The built-in alphabet: `0-9`, then `A-Z`, then `a-z`. Truncating it to
/// a radix of sixteen yields the usual uppercase hex digits.
pub const BASE62_ALPHABET: [char; 62] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b',
    'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u',
    'v', 'w', 'x', 'y', 'z',
];

/// The error type for parsing text back into a number.
///
/// Parse failures are expected at runtime (the text typically comes from
/// outside the program), so they are kept separate from the engine's
/// fail-fast taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// The text contained no digit symbols.
    Empty,
    /// A character did not occur in the alphabet.
    InvalidSymbol(char),
    /// The parsed value exceeds the range of the integer type.
    Overflow,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot decode an empty string"),
            Self::InvalidSymbol(symbol) => {
                write!(f, "symbol '{symbol}' does not occur in the alphabet")
            }
            Self::Overflow => write!(f, "the decoded value exceeds the integer type's range"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Renders `number` as text over `alphabet`, most significant digit
/// first; the alphabet's length is the radix. Negative numbers get a
/// leading `-`.
///
/// # Panics
///
/// Panics if the alphabet holds fewer than two symbols, if its length
/// does not fit the integer type, or if `|number|` is not representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_codec::text::{BASE62_ALPHABET, encode};
///
/// assert_eq!(encode(255i64, &BASE62_ALPHABET[..16]), "FF");
/// assert_eq!(encode(-42i64, &BASE62_ALPHABET[..10]), "-42");
/// assert_eq!(encode(0i64, &['x', 'y']), "x");
/// ```
pub fn encode<T>(number: T, alphabet: &[char]) -> String
where
    T: RadixNumeric,
{
    match try_encode(number, alphabet) {
        Ok(text) => text,
        Err(error) => panic!("encode({number}, alphabet of {} symbols): {error}", alphabet.len()),
    }
}

/// Fallible form of [`encode`].
pub fn try_encode<T>(number: T, alphabet: &[char]) -> RadixResult<String>
where
    T: RadixNumeric,
{
    if alphabet.len() < 2 {
        return Err(RadixError::InvalidRadix);
    }
    let radix = T::from_usize(alphabet.len()).ok_or(RadixError::InvalidRadix)?;
    let negative = number < T::ZERO;
    let magnitude = checked_abs(number).ok_or(RadixError::Overflow)?;
    let sequence = try_digits(magnitude, radix)?;
    let mut text = String::with_capacity(sequence.len() + usize::from(negative));
    if negative {
        text.push('-');
    }
    for &digit in sequence.iter() {
        // Digits come from division by the alphabet length, so the index
        // is always in range.
        let index = digit.to_usize().ok_or(RadixError::Overflow)?;
        text.push(alphabet[index]);
    }
    Ok(text)
}

/// Renders `number` using the built-in alphabet truncated to `radix`.
///
/// # Panics
///
/// Panics if `radix` is not between 2 and 62, or if `|number|` is not
/// representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_codec::text::encode_radix;
///
/// assert_eq!(encode_radix(255i64, 16), "FF");
/// assert_eq!(encode_radix(255i64, 2), "11111111");
/// assert_eq!(encode_radix(-61i64, 62), "-z");
/// ```
pub fn encode_radix<T>(number: T, radix: T) -> String
where
    T: RadixNumeric,
{
    match try_encode_radix(number, radix) {
        Ok(text) => text,
        Err(error) => panic!("encode_radix({number}, {radix}): {error}"),
    }
}

/// Fallible form of [`encode_radix`].
pub fn try_encode_radix<T>(number: T, radix: T) -> RadixResult<String>
where
    T: RadixNumeric,
{
    let length = radix.to_usize().ok_or(RadixError::InvalidRadix)?;
    if !(2..=BASE62_ALPHABET.len()).contains(&length) {
        return Err(RadixError::InvalidRadix);
    }
    try_encode(number, &BASE62_ALPHABET[..length])
}

/// Renders `number` over `alphabet` and left-pads the digits with the
/// zero symbol until the text is at least `min_length` characters long,
/// the leading `-` of negative numbers included.
///
/// # Panics
///
/// Panics under the same conditions as [`encode`].
///
/// # Examples
///
/// ```rust
/// # use abacus_codec::text::{BASE62_ALPHABET, encode_padded};
///
/// let decimal = &BASE62_ALPHABET[..10];
/// assert_eq!(encode_padded(-42i64, decimal, 5), "-0042");
/// assert_eq!(encode_padded(42i64, decimal, 5), "00042");
/// assert_eq!(encode_padded(123456i64, decimal, 3), "123456");
/// ```
pub fn encode_padded<T>(number: T, alphabet: &[char], min_length: usize) -> String
where
    T: RadixNumeric,
{
    match try_encode_padded(number, alphabet, min_length) {
        Ok(text) => text,
        Err(error) => panic!(
            "encode_padded({number}, alphabet of {} symbols, {min_length}): {error}",
            alphabet.len()
        ),
    }
}

/// Fallible form of [`encode_padded`].
pub fn try_encode_padded<T>(number: T, alphabet: &[char], min_length: usize) -> RadixResult<String>
where
    T: RadixNumeric,
{
    let text = try_encode(number, alphabet)?;
    let length = text.chars().count();
    if length >= min_length {
        return Ok(text);
    }
    let negative = text.starts_with('-');
    let mut padded = String::with_capacity(text.len() + (min_length - length));
    if negative {
        padded.push('-');
    }
    for _ in 0..min_length - length {
        padded.push(alphabet[0]);
    }
    // A leading '-' is a single byte, so slicing past it is safe.
    padded.push_str(&text[usize::from(negative)..]);
    Ok(padded)
}

/// Parses text produced by [`encode`] back into a number; an optional
/// leading `-` negates the result.
///
/// Accumulation is negative for negative inputs, so the minimum value of
/// the integer type parses correctly.
///
/// # Panics
///
/// Panics if the alphabet holds fewer than two symbols.
///
/// # Examples
///
/// ```rust
/// # use abacus_codec::text::{BASE62_ALPHABET, decode};
///
/// assert_eq!(decode::<i64>("FF", &BASE62_ALPHABET[..16]), Ok(255));
/// assert_eq!(decode::<i64>("-42", &BASE62_ALPHABET[..10]), Ok(-42));
/// assert_eq!(decode::<i64>("-0042", &BASE62_ALPHABET[..10]), Ok(-42));
/// assert!(decode::<i64>("4x2", &BASE62_ALPHABET[..10]).is_err());
/// ```
pub fn decode<T>(text: &str, alphabet: &[char]) -> Result<T, DecodeError>
where
    T: RadixNumeric,
{
    assert!(
        alphabet.len() >= 2,
        "invalid alphabet of {} symbols: an alphabet must hold at least 2 symbols",
        alphabet.len()
    );
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if body.is_empty() {
        return Err(DecodeError::Empty);
    }
    let radix = T::from_usize(alphabet.len()).ok_or(DecodeError::Overflow)?;
    let mut value = T::ZERO;
    for symbol in body.chars() {
        let position = alphabet
            .iter()
            .position(|&candidate| candidate == symbol)
            .ok_or(DecodeError::InvalidSymbol(symbol))?;
        let digit = T::from_usize(position).ok_or(DecodeError::Overflow)?;
        let shifted = value.checked_mul_val(radix).ok_or(DecodeError::Overflow)?;
        value = if negative {
            shifted.checked_sub_val(digit)
        } else {
            shifted.checked_add_val(digit)
        }
        .ok_or(DecodeError::Overflow)?;
    }
    Ok(value)
}

/// Parses text produced by [`encode_radix`], using the built-in alphabet
/// truncated to `radix`.
///
/// # Panics
///
/// Panics if `radix` is not between 2 and 62.
///
/// # Examples
///
/// ```rust
/// # use abacus_codec::text::decode_radix;
///
/// assert_eq!(decode_radix::<i64>("FF", 16), Ok(255));
/// assert_eq!(decode_radix::<i64>("11111111", 2), Ok(255));
/// ```
pub fn decode_radix<T>(text: &str, radix: T) -> Result<T, DecodeError>
where
    T: RadixNumeric,
{
    let length = radix
        .to_usize()
        .filter(|length| (2..=BASE62_ALPHABET.len()).contains(length));
    match length {
        Some(length) => decode(text, &BASE62_ALPHABET[..length]),
        None => panic!("invalid radix {radix}: a radix must be between 2 and 62"),
    }
}
