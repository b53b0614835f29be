//! Routines for parsing values into BigNums

use crate::{BigNum, ParseBigNumError, WORD_BITS};

const NIBBLES_PER_WORD: usize = WORD_BITS as usize / 4;


/// Parse a hexadecimal string, with optional `0x`/`0X` prefix.
///
/// Each digit maps onto four bits of a storage word, so digits are
/// placed directly without any arbitrary-precision arithmetic.
/// Leading zeros are accepted and carry no information.
pub(crate) fn parse_hex_str(s: &str) -> Result<BigNum, ParseBigNumError> {
    let digits = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(rest) => rest,
        None => s,
    };
    if digits.is_empty() {
        return Err(ParseBigNumError::Empty);
    }

    let digits = digits.trim_start_matches('0');

    let mut num = BigNum::ZERO;
    for (i, c) in digits.chars().rev().enumerate() {
        let value = match c.to_digit(16) {
            Some(v) => v as u64,
            None => return Err(ParseBigNumError::InvalidDigit(c)),
        };
        let word = i / NIBBLES_PER_WORD;
        if word >= BigNum::CAPACITY {
            return Err(ParseBigNumError::Overflow);
        }
        num.words[word] |= value << (4 * (i % NIBBLES_PER_WORD));
    }

    // leading zeros were trimmed, so the top digit (and top word) of a
    // nonzero string is nonzero
    num.len = (digits.len() + NIBBLES_PER_WORD - 1) / NIBBLES_PER_WORD;
    Ok(num)
}
