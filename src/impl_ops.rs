//! Implement bit-shift operators: Shl, Shr
//!
//! `>>` discards the shift status: a shift that zeroes the value is a
//! fully applied result. `<<` panics on overflow, matching the
//! standard library's behavior for primitive shifts that lose bits;
//! use `shift_left` directly to observe the status instead.

use crate::{BigNum, ShiftLeftStatus};

use stdlib::ops::{Shl, ShlAssign, Shr, ShrAssign};


macro_rules! impl_shift_for_primitive {
    ($t:ty) => {
        impl Shr<$t> for BigNum {
            type Output = BigNum;

            #[inline]
            fn shr(mut self, shift: $t) -> BigNum {
                self >>= shift;
                self
            }
        }

        impl Shr<$t> for &BigNum {
            type Output = BigNum;

            #[inline]
            fn shr(self, shift: $t) -> BigNum {
                *self >> shift
            }
        }

        impl ShrAssign<$t> for BigNum {
            #[inline]
            fn shr_assign(&mut self, shift: $t) {
                let _ = self.shift_right(shift as u64);
            }
        }

        impl Shl<$t> for BigNum {
            type Output = BigNum;

            #[inline]
            fn shl(mut self, shift: $t) -> BigNum {
                self <<= shift;
                self
            }
        }

        impl Shl<$t> for &BigNum {
            type Output = BigNum;

            #[inline]
            fn shl(self, shift: $t) -> BigNum {
                *self << shift
            }
        }

        impl ShlAssign<$t> for BigNum {
            #[inline]
            fn shl_assign(&mut self, shift: $t) {
                let status = self.shift_left(shift as u64);
                assert!(
                    status != ShiftLeftStatus::Overflow,
                    "attempt to shift left with overflow"
                );
            }
        }
    };
}

impl_shift_for_primitive!(u32);
impl_shift_for_primitive!(u64);
impl_shift_for_primitive!(usize);


#[cfg(test)]
mod tests {
    use crate::BigNum;

    include!("test_macros.rs");

    #[test]
    fn shr_matches_shift_right() {
        let n = bignum![0xAAAAAAAAAAAAAAAA, 0xF];

        let mut by_method = n;
        let _ = by_method.shift_right(4);

        assert_eq!(n >> 4u32, by_method);
        assert_eq!(&n >> 4u64, by_method);

        let mut assigned = n;
        assigned >>= 4usize;
        assert_eq!(assigned, by_method);
    }

    #[test]
    fn shr_past_zero_is_zero() {
        assert_eq!(bignum![1, 2, 3] >> 500u32, BigNum::ZERO);
    }

    #[test]
    fn shl_matches_shift_left() {
        let n = bignum![0xFAAAAAAAAAAAAAAA];

        let mut by_method = n;
        let _ = by_method.shift_left(4);

        assert_eq!(n << 4u32, by_method);
        assert_eq!(&n << 4u64, by_method);

        let mut assigned = n;
        assigned <<= 4usize;
        assert_eq!(assigned, by_method);
    }

    #[test]
    #[should_panic(expected = "attempt to shift left with overflow")]
    fn shl_panics_on_overflow() {
        let _ = bignum![1] << BigNum::MAX_BITS;
    }
}
