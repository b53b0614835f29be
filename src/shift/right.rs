//! Logical right shift
//!
//! Equivalent to integer division by `2^shift_amount` with truncation.

use crate::{BigNum, WORD_BITS};

use super::{split_shift, ShiftRightStatus};


impl BigNum {
    /// Shift the value right by `shift_amount` bits, in place.
    ///
    /// The bit count splits into a whole-word move and a sub-word
    /// shift. Words are relocated toward index zero in ascending
    /// order (destination indices never exceed source indices, so the
    /// overlapping ranges stay safe), then each word is combined with
    /// the low bits of its higher neighbor. High zero words are
    /// trimmed afterwards.
    ///
    /// Shifting by at least the value's bit length zeroes the number
    /// and reports [`ShiftRightStatus::Zeroed`]; any shift of a number
    /// that is already zero is a plain success.
    ///
    /// # Examples
    ///
    /// ```
    /// use bignum::{BigNum, ShiftRightStatus};
    ///
    /// let mut n = BigNum::from(0xD0u64);
    /// assert_eq!(n.shift_right(4), ShiftRightStatus::Success);
    /// assert_eq!(n, BigNum::from(0xDu64));
    ///
    /// assert_eq!(n.shift_right(200), ShiftRightStatus::Zeroed);
    /// assert!(n.is_zero());
    /// ```
    pub fn shift_right(&mut self, shift_amount: u64) -> ShiftRightStatus {
        if self.len == 0 || shift_amount == 0 {
            return ShiftRightStatus::Success;
        }

        let (word_shift, bit_shift) = split_shift(shift_amount);

        // whole-word component discards every significant word
        if word_shift >= self.len as u64 {
            self.words[..self.len].fill(0);
            self.len = 0;
            return ShiftRightStatus::Zeroed;
        }

        let word_shift = word_shift as usize;
        if word_shift > 0 {
            let remaining = self.len - word_shift;
            // ascending: destination index never exceeds source index
            for i in 0..remaining {
                self.words[i] = self.words[i + word_shift];
            }
            self.words[remaining..self.len].fill(0);
            self.len = remaining;
        }

        if bit_shift > 0 {
            let carry_shift = WORD_BITS - bit_shift;
            // ascending: each step consumes the pre-shift value of the
            // next-higher word
            for i in 0..self.len - 1 {
                self.words[i] = (self.words[i] >> bit_shift) | (self.words[i + 1] << carry_shift);
            }
            // top word has no carry source
            self.words[self.len - 1] >>= bit_shift;
        }

        self.normalize();
        if self.len == 0 {
            ShiftRightStatus::Zeroed
        } else {
            ShiftRightStatus::Success
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::BigNum;
    use crate::ShiftRightStatus;

    include!("../test_macros.rs");

    macro_rules! impl_case {
        ($name:ident: $num:expr, $shift:expr => $status:ident, $expected:expr) => {
            #[test]
            fn $name() {
                let mut num = $num;
                let status = num.shift_right($shift);
                assert_eq!(status, ShiftRightStatus::$status);
                assert_eq!(num, $expected);
                assert_bignum_invariants!(num);
            }
        };
    }

    impl_case!(case_shift_by_zero: bignum![123], 0 => Success, bignum![123]);
    impl_case!(case_within_word: bignum![0xD], 2 => Success, bignum![0x3]);
    impl_case!(case_carry_between_words: bignum![0xAAAAAAAAAAAAAAAA, 0xF], 4 => Success, bignum![0xFAAAAAAAAAAAAAAA]);
    impl_case!(case_full_word: bignum![1, 2, 3], 64 => Success, bignum![2, 3]);
    impl_case!(case_to_zero: bignum![1], 1 => Zeroed, bignum![]);
    impl_case!(case_zero_value_large_shift: bignum![], 10 => Success, bignum![]);
    impl_case!(case_beyond_length: bignum![1, 2, 3], 200 => Zeroed, bignum![]);
    impl_case!(case_complex_across_words: bignum![0xFF, 0xEE, 0xDD], 66 => Success, bignum![0x400000000000003B, 0x37]);
    impl_case!(case_exactly_full_length: bignum![1, 2, 3], 192 => Zeroed, bignum![]);
    impl_case!(case_normalization: bignum![0x1, 0xdeadbeef], 64 => Success, bignum![0xdeadbeef]);
    impl_case!(case_word_only: bignum![1, 2, 3], 128 => Success, bignum![3]);
    impl_case!(case_bit_only: bignum![0x8000000000000000], 1 => Success, bignum![0x4000000000000000]);
    impl_case!(case_combined_word_and_bit: bignum![1, 2], 65 => Success, bignum![1]);
    impl_case!(case_inplace_overlap: bignum![0x11, 0x22, 0x33, 0x44], 64 => Success, bignum![0x22, 0x33, 0x44]);
    impl_case!(case_edge_bit_shift_1: bignum![0x8000000000000001, 0x2], 1 => Success, bignum![0x4000000000000000, 0x1]);
    impl_case!(case_edge_bit_shift_63: bignum![0x8000000000000001, 0x2], 63 => Success, bignum![0x5]);
    impl_case!(case_over_capacity: bignum![0xDEAD, 0xBEEF], BigNum::MAX_BITS + 1 => Zeroed, bignum![]);

    #[test]
    fn case_max_len_top_bit() {
        let mut words = [0u64; BigNum::CAPACITY];
        words[BigNum::CAPACITY - 1] = 0x8000000000000000;
        let mut num = BigNum::from_words(&words).unwrap();

        let status = num.shift_right(1);
        assert_eq!(status, ShiftRightStatus::Success);
        assert_eq!(num.len(), BigNum::CAPACITY);
        assert_eq!(num.words()[BigNum::CAPACITY - 1], 0x4000000000000000);
        assert_bignum_invariants!(num);
    }

    #[test]
    fn composes_with_itself() {
        let mut once = bignum![0xFF, 0xEE, 0xDD];
        let mut twice = once;

        let _ = once.shift_right(66);

        let _ = twice.shift_right(64);
        let _ = twice.shift_right(2);

        assert_eq!(once, twice);
    }
}
