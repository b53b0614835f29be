// Copyright 2025 Andrew Kubera
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A fixed-capacity big unsigned integer
//!
//! `BigNum` stores an unsigned integer as a little-endian array of
//! 64-bit words with a fixed, build-time capacity. The operations with
//! real algorithmic content are the two in-place logical shifts,
//! `shift_right` and `shift_left`: an arbitrary bit count is decomposed
//! into a whole-word move plus a sub-word shift, words are relocated
//! within the buffer in the overlap-safe direction, carries are
//! propagated across word boundaries, and the result is renormalized
//! so the highest significant word is never zero.
//!
//! Neither operation allocates or touches any state outside the
//! operand; a `BigNum` is plain `Copy` data owned entirely by its
//! caller. Arithmetic (add/sub/mul/div) is out of scope, which is also
//! why strings parse and format in hexadecimal: rendering decimal
//! digits would require division.
//!
//! The word capacity defaults to 64 (4096 bits) and may be overridden
//! at build time through the `RUST_BIGNUM_CAPACITY` environment
//! variable.
//!
//! # Example
//!
//! ```
//! use bignum::{BigNum, ShiftRightStatus};
//!
//! let mut n = BigNum::from(0xDu64);
//! let status = n.shift_right(2);
//!
//! assert_eq!(status, ShiftRightStatus::Success);
//! assert_eq!(n, BigNum::from(0x3u64));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


extern crate num_integer;
extern crate num_traits;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;


// const BIGNUM_CAPACITY: usize = ${RUST_BIGNUM_CAPACITY} or 64;
include!(concat!(env!("OUT_DIR"), "/bignum_capacity.rs"));

#[cfg(test)]
extern crate paste;

#[cfg(test)]
extern crate num_bigint;

#[cfg(all(test, feature = "serde"))]
extern crate serde_test;

#[cfg(all(test, not(feature = "std")))]
#[macro_use]
extern crate std;

// From<T>, TryFrom<T> impls
mod impl_convert;
// Shl<T>, Shr<T> operator sugar
mod impl_ops;

// PartialOrd / Ord
mod impl_cmp;

// Implementations of num_traits
mod impl_num;

// Debug and hexadecimal formatting
mod impl_fmt;

mod impl_trait_from_str;
mod parsing;

// The shift engine
pub mod shift;
pub use shift::{ShiftLeftStatus, ShiftRightStatus};

#[cfg(feature = "serde")]
mod impl_serde;


/// Width of a storage word in bits
pub(crate) const WORD_BITS: u32 = 64;


/// A fixed-capacity big unsigned integer.
///
/// Words are stored little-endian: `words[0]` is the least-significant
/// word. Every word at index `len` and above is kept zero, and the
/// highest significant word is nonzero for every value except the
/// canonical zero (`len == 0`, all words zero). The represented value
/// is the sum of `words[i] * 2^(64*i)` over the significant words.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BigNum {
    words: [u64; BIGNUM_CAPACITY],
    len: usize,
}

impl BigNum {
    /// Maximum number of significant words a value can hold
    pub const CAPACITY: usize = BIGNUM_CAPACITY;

    /// Number of significant bits at full capacity
    pub const MAX_BITS: u64 = BIGNUM_CAPACITY as u64 * WORD_BITS as u64;

    /// The canonical zero value
    pub const ZERO: BigNum = BigNum {
        words: [0; BIGNUM_CAPACITY],
        len: 0,
    };

    /// Creates and initializes a `BigNum` equal to zero.
    #[inline]
    pub fn zero() -> BigNum {
        BigNum::ZERO
    }

    /// Creates a `BigNum` from a slice of little-endian words.
    ///
    /// High zero words in the slice carry no information and are
    /// trimmed, so the slice may be longer than the value it encodes;
    /// only the significant words must fit within the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// let n = BigNum::from_words(&[1, 2, 3, 0, 0]).unwrap();
    /// assert_eq!(n.len(), 3);
    /// ```
    pub fn from_words(words: &[u64]) -> Result<BigNum, CapacityError> {
        let mut significant = words.len();
        while significant > 0 && words[significant - 1] == 0 {
            significant -= 1;
        }
        if significant > BIGNUM_CAPACITY {
            return Err(CapacityError);
        }

        let mut num = BigNum::ZERO;
        num.words[..significant].copy_from_slice(&words[..significant]);
        num.len = significant;
        Ok(num)
    }

    /// Parse from a hexadecimal string, with optional `0x` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// let n = BigNum::from_hex_str("0xfaaaaaaaaaaaaaaa").unwrap();
    /// assert_eq!(n, BigNum::from(0xFAAAAAAAAAAAAAAAu64));
    /// ```
    #[inline]
    pub fn from_hex_str(s: &str) -> Result<BigNum, ParseBigNumError> {
        parsing::parse_hex_str(s)
    }

    /// Number of significant words
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for the canonical zero value
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.len == 0
    }

    /// Slice of significant words, least-significant first
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words[..self.len]
    }

    /// Number of significant bits
    ///
    /// Zero has a bit length of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// assert_eq!(BigNum::ZERO.bit_length(), 0);
    /// assert_eq!(BigNum::from(1u64).bit_length(), 1);
    /// assert_eq!(BigNum::from_words(&[0, 0x10]).unwrap().bit_length(), 69);
    /// ```
    pub fn bit_length(&self) -> u64 {
        match self.len {
            0 => 0,
            n => n as u64 * WORD_BITS as u64 - self.words[n - 1].leading_zeros() as u64,
        }
    }

    /// Trim high zero words until the top word is nonzero or the value
    /// is canonical zero
    #[inline]
    pub(crate) fn normalize(&mut self) {
        while self.len > 0 && self.words[self.len - 1] == 0 {
            self.len -= 1;
        }
    }
}

impl Default for BigNum {
    #[inline]
    fn default() -> BigNum {
        BigNum::ZERO
    }
}


/// Error returned when a value does not fit in the fixed capacity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError;

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        "Value exceeds fixed bignum capacity".fmt(f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {
    fn description(&self) -> &str {
        "value exceeds capacity"
    }
}


/// Error cases for parsing a BigNum from a string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseBigNumError {
    Empty,
    InvalidDigit(char),
    Overflow,
}

impl fmt::Display for ParseBigNumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigNumError::*;

        match *self {
            Empty => "Failed to parse empty string".fmt(f),
            InvalidDigit(c) => write!(f, "Invalid hexadecimal digit {:?}", c),
            Overflow => "Number exceeds fixed bignum capacity".fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBigNumError {
    fn description(&self) -> &str {
        "failed to parse bignum"
    }
}




#[cfg(all(test, feature = "property-tests"))]
extern crate proptest;
