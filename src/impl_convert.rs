//! Code for implementing From/TryFrom BigNums

use crate::{BigNum, CapacityError};

use stdlib::convert::TryFrom;


macro_rules! impl_from_unsigned_primitive {
    ($t:ty) => {
        impl From<$t> for BigNum {
            fn from(n: $t) -> Self {
                let mut num = BigNum::ZERO;
                if n != 0 {
                    num.words[0] = n as u64;
                    num.len = 1;
                }
                num
            }
        }

        impl From<&$t> for BigNum {
            fn from(n: &$t) -> Self {
                BigNum::from(*n)
            }
        }
    };
}

impl_from_unsigned_primitive!(u8);
impl_from_unsigned_primitive!(u16);
impl_from_unsigned_primitive!(u32);
impl_from_unsigned_primitive!(u64);


impl TryFrom<u128> for BigNum {
    type Error = CapacityError;

    /// Fallible because a two-word value may not fit a single-word
    /// capacity build.
    fn try_from(n: u128) -> Result<Self, CapacityError> {
        BigNum::from_words(&[n as u64, (n >> 64) as u64])
    }
}

impl TryFrom<&[u64]> for BigNum {
    type Error = CapacityError;

    #[inline]
    fn try_from(words: &[u64]) -> Result<Self, CapacityError> {
        BigNum::from_words(words)
    }
}
