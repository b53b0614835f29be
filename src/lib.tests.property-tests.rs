// Property tests to be included by lib.rs (if enabled)

use num_traits::Zero;

include!("test_macros.rs");


fn arb_words() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(any::<u64>(), 0..=BigNum::CAPACITY)
}

proptest! {
    #[test]
    fn zero_shift_is_identity(words in arb_words()) {
        let base = BigNum::from_words(&words).unwrap();

        let mut right = base;
        prop_assert_eq!(right.shift_right(0), ShiftRightStatus::Success);
        prop_assert_eq!(right, base);

        let mut left = base;
        prop_assert_eq!(left.shift_left(0), ShiftLeftStatus::Success);
        prop_assert_eq!(left, base);
    }

    #[test]
    fn shift_right_matches_reference(
        words in arb_words(),
        shift in 0u64..(BigNum::MAX_BITS + 128),
    ) {
        let mut num = BigNum::from_words(&words).unwrap();
        let value = to_biguint(&num);

        let status = num.shift_right(shift);

        prop_assert_eq!(to_biguint(&num), &value >> shift);
        assert_bignum_invariants!(num);

        let zeroed = !value.is_zero() && shift != 0 && value.bits() <= shift;
        let expected_status = if zeroed {
            ShiftRightStatus::Zeroed
        } else {
            ShiftRightStatus::Success
        };
        prop_assert_eq!(status, expected_status);
        prop_assert_eq!(num.is_zero(), value.is_zero() || zeroed);
    }

    #[test]
    fn shift_left_matches_reference(
        words in arb_words(),
        shift in 0u64..(BigNum::MAX_BITS + 128),
    ) {
        let mut num = BigNum::from_words(&words).unwrap();
        let before = num;
        let value = to_biguint(&num);

        let status = num.shift_left(shift);

        let shifted = &value << shift;
        if shifted.bits() > BigNum::MAX_BITS {
            prop_assert_eq!(status, ShiftLeftStatus::Overflow);
            prop_assert_eq!(num, before);
        } else {
            prop_assert_eq!(status, ShiftLeftStatus::Success);
            prop_assert_eq!(to_biguint(&num), shifted);
        }
        assert_bignum_invariants!(num);
    }

    #[test]
    fn right_shifts_compose(
        words in arb_words(),
        a in 0u64..BigNum::MAX_BITS,
        b in 0u64..BigNum::MAX_BITS,
    ) {
        let mut stepped = BigNum::from_words(&words).unwrap();
        let mut direct = stepped;

        let _ = stepped.shift_right(a);
        let _ = stepped.shift_right(b);
        let _ = direct.shift_right(a + b);

        prop_assert_eq!(stepped, direct);
        assert_bignum_invariants!(stepped);
    }

    #[test]
    fn round_trip_clears_low_bits(
        words in arb_words(),
        shift in 0u64..(BigNum::MAX_BITS + 128),
    ) {
        let mut num = BigNum::from_words(&words).unwrap();
        let value = to_biguint(&num);

        let _ = num.shift_right(shift);
        let status = num.shift_left(shift);

        // shifting back up can never overflow: the right shift already
        // discarded at least as many bits
        prop_assert_eq!(status, ShiftLeftStatus::Success);
        prop_assert_eq!(to_biguint(&num), (&value >> shift) << shift);
        assert_bignum_invariants!(num);
    }
}
