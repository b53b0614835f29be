//! Code for num_traits
//!
//! Only the conversion traits are implemented: `Zero`, `One` and `Num`
//! all require arithmetic operators, and this crate does not carry
//! arithmetic.

use num_traits::{FromPrimitive, ToPrimitive};

use crate::BigNum;

use stdlib::convert::TryFrom;


impl ToPrimitive for BigNum {
    fn to_u64(&self) -> Option<u64> {
        match self.len {
            0 => Some(0),
            1 => Some(self.words[0]),
            _ => None,
        }
    }

    fn to_i64(&self) -> Option<i64> {
        match self.to_u64() {
            Some(n) if n <= i64::MAX as u64 => Some(n as i64),
            _ => None,
        }
    }

    fn to_u128(&self) -> Option<u128> {
        match self.len {
            0 => Some(0),
            1 => Some(self.words[0] as u128),
            2 => Some(self.words[0] as u128 | (self.words[1] as u128) << 64),
            _ => None,
        }
    }

    fn to_i128(&self) -> Option<i128> {
        match self.to_u128() {
            Some(n) if n <= i128::MAX as u128 => Some(n as i128),
            _ => None,
        }
    }
}

impl FromPrimitive for BigNum {
    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(BigNum::from(n))
    }

    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        if n < 0 {
            None
        } else {
            Some(BigNum::from(n as u64))
        }
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        BigNum::try_from(n).ok()
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        if n < 0 {
            None
        } else {
            Self::from_u128(n as u128)
        }
    }
}
