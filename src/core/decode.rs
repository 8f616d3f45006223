//! Decoding of arbitrary-base digit strings into exact integers.
//!
//! A share's y-value arrives as a digit string in a radix between 2 and 36,
//! with case-insensitive letters extending the decimal digits ('a' = 10 up
//! to 'z' = 35). Decoding is repeated multiply-and-add over `BigInt`, so it
//! is exact for digit strings of any length.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::utils::error::{RecoverError, Result};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Maps a single character to its digit value, independent of any base.
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Parses the string-encoded radix carried by a share record.
pub fn parse_base(raw: &str) -> Result<u32> {
    let base: u32 = raw.parse().map_err(|_| RecoverError::InvalidBase {
        base: raw.to_string(),
    })?;
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RecoverError::InvalidBase {
            base: raw.to_string(),
        });
    }
    Ok(base)
}

/// Decodes `digits` interpreted in `base` into an exact integer.
///
/// Fails with `InvalidBase` when the base is out of range and with
/// `InvalidDigit` when a character has no mapping or its value is not
/// strictly below the base. An empty string has no digits to decode and is
/// rejected rather than silently read as zero.
pub fn decode_digits(base: u32, digits: &str) -> Result<BigInt> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RecoverError::InvalidBase {
            base: base.to_string(),
        });
    }
    if digits.is_empty() {
        return Err(RecoverError::EmptyDigits { base });
    }

    let big_base = BigInt::from(base);
    let mut acc = BigInt::zero();
    for c in digits.chars() {
        let value = digit_value(c)
            .filter(|&v| v < base)
            .ok_or(RecoverError::InvalidDigit { digit: c, base })?;
        acc = acc * &big_base + BigInt::from(value);
    }
    Ok(acc)
}
