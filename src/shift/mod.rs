//! In-place logical bit-shift engine
//!
//! Both directions follow the same plan: split the bit count into a
//! whole-word component and a sub-word remainder, relocate words within
//! the fixed buffer (looping in the direction that reads every source
//! word before it is overwritten), propagate the sub-word carries
//! across word boundaries, and leave the value normalized.
//!
//! The operations read and write nothing but the operand itself, so
//! concurrent shifts of disjoint `BigNum` instances are independent.

use num_integer::Integer;

use crate::WORD_BITS;

mod left;
mod right;


/// Outcome of a right shift
///
/// `Zeroed` is a fully applied result, not an error: the shift
/// discarded every significant bit and the number now represents zero.
/// Callers only need to distinguish it from `Success` when the
/// zero outcome itself is interesting.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftRightStatus {
    /// Shift applied
    Success,
    /// Shift applied and discarded every significant bit
    Zeroed,
}

/// Outcome of a left shift
///
/// On `Overflow` the operand is left byte-for-byte unchanged: the
/// shift would move a significant bit to or past the capacity
/// boundary, and an in-place relocation cannot be undone once started.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftLeftStatus {
    /// Shift applied
    Success,
    /// Shift rejected, operand unchanged
    Overflow,
}


/// Split a bit count into whole-word and sub-word components
#[inline]
pub(crate) fn split_shift(shift_amount: u64) -> (u64, u32) {
    let (word_shift, bit_shift) = shift_amount.div_rem(&(WORD_BITS as u64));
    (word_shift, bit_shift as u32)
}


#[cfg(test)]
mod test_split_shift {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $shift:expr => $words:literal, $bits:literal) => {
            #[test]
            fn $name() {
                assert_eq!(split_shift($shift), ($words, $bits));
            }
        };
    }

    impl_case!(case_0: 0 => 0, 0);
    impl_case!(case_1: 1 => 0, 1);
    impl_case!(case_63: 63 => 0, 63);
    impl_case!(case_64: 64 => 1, 0);
    impl_case!(case_65: 65 => 1, 1);
    impl_case!(case_66: 66 => 1, 2);
    impl_case!(case_192: 192 => 3, 0);
    impl_case!(case_u64_max: u64::MAX => 288230376151711743, 63);
}
