//! Logical left shift
//!
//! Equivalent to multiplication by `2^shift_amount`, bounded by the
//! fixed capacity.

use crate::{BigNum, WORD_BITS};

use super::{split_shift, ShiftLeftStatus};


impl BigNum {
    /// Shift the value left by `shift_amount` bits, in place.
    ///
    /// Mirror of `shift_right`. Overflow is rejected before any word
    /// moves: a shift that would carry a significant bit to or past
    /// the capacity boundary reports [`ShiftLeftStatus::Overflow`] and
    /// leaves the value untouched. Words are relocated toward the top
    /// of the buffer in descending order (destination indices never
    /// fall below source indices), then each word receives the high
    /// bits of its lower neighbor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bignum::{BigNum, ShiftLeftStatus};
    ///
    /// let mut n = BigNum::from(0x3u64);
    /// assert_eq!(n.shift_left(2), ShiftLeftStatus::Success);
    /// assert_eq!(n, BigNum::from(0xCu64));
    /// ```
    pub fn shift_left(&mut self, shift_amount: u64) -> ShiftLeftStatus {
        if self.len == 0 || shift_amount == 0 {
            return ShiftLeftStatus::Success;
        }

        // reject before mutating: no partial state on overflow
        if shift_amount > BigNum::MAX_BITS - self.bit_length() {
            return ShiftLeftStatus::Overflow;
        }

        let (word_shift, bit_shift) = split_shift(shift_amount);
        let word_shift = word_shift as usize;

        if word_shift > 0 {
            // descending: destination index never falls below source index
            for i in (0..self.len).rev() {
                self.words[i + word_shift] = self.words[i];
            }
            self.words[..word_shift].fill(0);
            self.len += word_shift;
        }

        if bit_shift > 0 {
            let carry_shift = WORD_BITS - bit_shift;
            let top = self.len - 1;

            // bits leaving the top word land in a fresh word above it,
            // inside the capacity thanks to the overflow check
            let spill = self.words[top] >> carry_shift;
            if spill != 0 {
                self.words[top + 1] = spill;
                self.len += 1;
            }

            for i in (word_shift + 1..=top).rev() {
                self.words[i] = (self.words[i] << bit_shift) | (self.words[i - 1] >> carry_shift);
            }
            // lowest affected word has no carry source
            self.words[word_shift] <<= bit_shift;
        }

        ShiftLeftStatus::Success
    }
}


#[cfg(test)]
mod tests {
    use crate::BigNum;
    use crate::ShiftLeftStatus;

    include!("../test_macros.rs");

    macro_rules! impl_case {
        ($name:ident: $num:expr, $shift:expr => $status:ident, $expected:expr) => {
            #[test]
            fn $name() {
                let mut num = $num;
                let status = num.shift_left($shift);
                assert_eq!(status, ShiftLeftStatus::$status);
                assert_eq!(num, $expected);
                assert_bignum_invariants!(num);
            }
        };
    }

    impl_case!(case_shift_by_zero: bignum![123], 0 => Success, bignum![123]);
    impl_case!(case_zero_value_large_shift: bignum![], 100000 => Success, bignum![]);
    impl_case!(case_within_word: bignum![0x3], 2 => Success, bignum![0xC]);
    impl_case!(case_carry_between_words: bignum![0xFAAAAAAAAAAAAAAA], 4 => Success, bignum![0xAAAAAAAAAAAAAAA0, 0xF]);
    impl_case!(case_full_word: bignum![2, 3], 64 => Success, bignum![0, 2, 3]);
    impl_case!(case_combined_word_and_bit: bignum![1], 65 => Success, bignum![0, 2]);
    impl_case!(case_spill_into_new_word: bignum![0x8000000000000000], 1 => Success, bignum![0, 1]);
    impl_case!(case_spill_partial: bignum![0xC000000000000001], 2 => Success, bignum![0x4, 0x3]);
    impl_case!(case_word_only: bignum![0xDEAD], 128 => Success, bignum![0, 0, 0xDEAD]);
    impl_case!(case_edge_bit_shift_63: bignum![0x5], 63 => Success, bignum![0x8000000000000000, 0x2]);
    impl_case!(case_whole_capacity: bignum![1], BigNum::MAX_BITS => Overflow, bignum![1]);
    impl_case!(case_word_shift_at_capacity: bignum![0xBEEF], BigNum::MAX_BITS + 64 => Overflow, bignum![0xBEEF]);

    #[test]
    fn case_top_bit_at_capacity_overflows_unchanged() {
        let mut words = [0u64; BigNum::CAPACITY];
        for (i, word) in words.iter_mut().enumerate() {
            *word = i as u64 + 1;
        }
        words[BigNum::CAPACITY - 1] |= 0x8000000000000000;
        let before = BigNum::from_words(&words).unwrap();
        let mut num = before;

        let status = num.shift_left(1);
        assert_eq!(status, ShiftLeftStatus::Overflow);
        assert_eq!(num, before);
        assert_bignum_invariants!(num);
    }

    #[test]
    fn case_fits_exactly_at_capacity() {
        // a 1-bit value may travel to the very top bit, but not past it
        let mut num = bignum![1];
        let status = num.shift_left(BigNum::MAX_BITS - 1);
        assert_eq!(status, ShiftLeftStatus::Success);
        assert_eq!(num.len(), BigNum::CAPACITY);
        assert_eq!(num.words()[BigNum::CAPACITY - 1], 0x8000000000000000);
        assert_bignum_invariants!(num);

        let mut num = bignum![1];
        let status = num.shift_left(BigNum::MAX_BITS);
        assert_eq!(status, ShiftLeftStatus::Overflow);
        assert_eq!(num, bignum![1]);
    }

    #[test]
    fn round_trips_with_shift_right() {
        let mut num = bignum![0xFF00000000000000, 0xEE, 0xDD];
        let original = num;

        let _ = num.shift_right(72);
        let status = num.shift_left(72);

        assert_eq!(status, ShiftLeftStatus::Success);
        // low 72 bits were discarded by the right shift
        assert_eq!(num, bignum![0, 0, 0xDD]);
        assert_ne!(num, original);
        assert_bignum_invariants!(num);
    }
}
