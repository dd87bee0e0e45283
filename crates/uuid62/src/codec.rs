//! Conversion between arbitrary-precision non-negative integers and radix-N text.
//!
//! Text is most-significant digit first, with no sign and no prefix. Each character's
//! position in [`ALPHABET`] is its digit value.

use crate::{Uuid62Error, Uuid62Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Digit glyphs in value order: `0-9`, then `a-z`, then `A-Z`.
pub const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (the alphabet length).
pub const MAX_RADIX: u32 = 62;

const ALPHABET_BYTES: &[u8] = ALPHABET.as_bytes();

fn check_radix(radix: u32) -> Uuid62Result<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(Uuid62Error::InvalidRadix(radix))
    }
}

/// Returns the digit value of `c`, or `None` if `c` is not in the alphabet.
///
/// This does not check against any radix; callers compare the result with their own radix.
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 36),
        _ => None,
    }
}

/// Returns the glyph for digit value `d`, or `None` if `d > 61`.
pub fn digit_char(d: u32) -> Option<char> {
    ALPHABET_BYTES.get(d as usize).map(|&b| char::from(b))
}

/// Encodes `value` as text in `radix`.
///
/// Zero encodes to `"0"`, never the empty string. The result is never padded.
///
/// # Arguments
///
/// * `value` - Integer to encode. Borrowed; the caller's value is left untouched.
/// * `radix` - Target radix, `2..=62`.
///
/// # Errors
///
/// Returns [`Uuid62Error::InvalidRadix`] if `radix` is out of range.
pub fn encode(value: &BigUint, radix: u32) -> Uuid62Result<String> {
    check_radix(radix)?;

    if value.is_zero() {
        return Ok(String::from(char::from(ALPHABET_BYTES[0])));
    }

    let base = BigUint::from(radix);
    let mut quotient = value.clone();
    let mut digits: Vec<u8> = Vec::new();

    // Remainders arrive least-significant first.
    while !quotient.is_zero() {
        let (next, remainder) = quotient.div_rem(&base);
        // remainder < radix <= 62, so it fits in a single u32 digit (none at all for zero).
        let d = remainder.iter_u32_digits().next().unwrap_or(0) as usize;
        digits.push(ALPHABET_BYTES[d]);
        quotient = next;
    }

    Ok(digits.iter().rev().map(|&b| char::from(b)).collect())
}

/// Decodes `text` in `radix` back to an integer.
///
/// The empty string decodes to zero. Leading zero digits are accepted and add no
/// magnitude, so left-padded text decodes to the same value as unpadded text.
///
/// # Arguments
///
/// * `text` - Digits, most significant first.
/// * `radix` - Source radix, `2..=62`.
///
/// # Errors
///
/// - [`Uuid62Error::InvalidRadix`] if `radix` is out of range. Checked before `text` is read.
/// - [`Uuid62Error::InvalidDigit`] for the first character that is not in the alphabet or
///   whose digit value is not below `radix`. `position` counts characters, not bytes.
pub fn decode(text: &str, radix: u32) -> Uuid62Result<BigUint> {
    check_radix(radix)?;

    let mut acc = BigUint::zero();
    for (position, c) in text.chars().enumerate() {
        let digit = digit_value(c)
            .filter(|&d| d < radix)
            .ok_or(Uuid62Error::InvalidDigit {
                digit: c,
                position,
                radix,
            })?;
        acc = acc * radix + digit;
    }

    Ok(acc)
}

/// Number of digits needed to write any `bits`-bit unsigned value in `radix`.
///
/// This is the length of `2^bits - 1` once encoded, which equals `ceil(log_radix(2^bits))`.
/// For 128 bits at radix 62 it is 22. Zero bits still need one digit (`"0"`).
///
/// # Errors
///
/// Returns [`Uuid62Error::InvalidRadix`] if `radix` is out of range.
pub fn min_width(bits: u32, radix: u32) -> Uuid62Result<usize> {
    let max = (BigUint::one() << bits) - 1u32;
    Ok(encode(&max, radix)?.chars().count())
}
