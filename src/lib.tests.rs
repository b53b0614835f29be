
include!("test_macros.rs");

mod constructors {
    use super::*;

    #[test]
    fn zero_is_canonical() {
        let z = BigNum::zero();
        assert!(z.is_zero());
        assert_eq!(z.len(), 0);
        assert_eq!(z.bit_length(), 0);
        assert_eq!(z, BigNum::ZERO);
        assert_eq!(z, BigNum::default());
        assert_bignum_invariants!(z);
    }

    #[test]
    fn from_words_trims_leading_zeros() {
        let n = BigNum::from_words(&[7, 0, 0]).unwrap();
        assert_eq!(n.len(), 1);
        assert_eq!(n.words(), &[7]);
        assert_bignum_invariants!(n);
    }

    #[test]
    fn from_words_of_zeros_is_zero() {
        let n = BigNum::from_words(&[0, 0, 0]).unwrap();
        assert!(n.is_zero());
        assert_bignum_invariants!(n);
    }

    #[test]
    fn from_words_at_capacity() {
        let words = [1u64; BigNum::CAPACITY];
        let n = BigNum::from_words(&words).unwrap();
        assert_eq!(n.len(), BigNum::CAPACITY);
        assert_bignum_invariants!(n);
    }

    #[test]
    fn from_words_over_capacity_fails() {
        let words = [1u64; BigNum::CAPACITY + 1];
        assert_eq!(BigNum::from_words(&words), Err(CapacityError));
    }
}

mod bit_length {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $num:expr => $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!($num.bit_length(), $expected);
            }
        };
    }

    impl_case!(case_zero: bignum![] => 0);
    impl_case!(case_one: bignum![1] => 1);
    impl_case!(case_d: bignum![0xD] => 4);
    impl_case!(case_top_of_word: bignum![0x8000000000000000] => 64);
    impl_case!(case_second_word: bignum![0, 1] => 65);
    impl_case!(case_across_words: bignum![0xFF, 0xEE, 0xDD] => 136);
}

mod hash_and_eq {
    use super::*;
    use stdlib::hash::{Hash, Hasher};

    fn hash_of(n: &BigNum) -> u64 {
        let mut hasher = ::std::collections::hash_map::DefaultHasher::new();
        n.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_values_hash_equally() {
        // the canonical representation makes equality structural
        let a = bignum![0xFF, 0xEE];
        let b = BigNum::from_words(&[0xFF, 0xEE, 0, 0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}

mod shift_composition {
    use super::*;

    #[test]
    fn right_shifts_compose() {
        let base = bignum![0x123456789ABCDEF0, 0xFEDCBA9876543210, 0xFF];

        for split in [(1u64, 9u64), (60, 10), (64, 64), (100, 3)].iter() {
            let (a, b) = *split;

            let mut stepped = base;
            let _ = stepped.shift_right(a);
            let _ = stepped.shift_right(b);

            let mut direct = base;
            let _ = direct.shift_right(a + b);

            assert_eq!(stepped, direct, "split {} + {}", a, b);
            assert_bignum_invariants!(stepped);
        }
    }

    #[test]
    fn round_trip_clears_low_bits() {
        let base = bignum![0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF];

        let mut n = base;
        let _ = n.shift_right(70);
        let status = n.shift_left(70);

        assert_eq!(status, ShiftLeftStatus::Success);
        assert_eq!(n, bignum![0, 0xFFFFFFFFFFFFFFC0]);
        assert_bignum_invariants!(n);
    }
}

#[cfg(feature = "std")]
mod threads {
    use super::*;
    use std::thread;

    const NUM_THREADS: usize = 8;
    const ITERATIONS_PER_THREAD: usize = 100;

    /// Every thread shifts its own disjoint instance and checks the
    /// result against the reference implementation.
    #[test]
    fn disjoint_instances_shift_independently() {
        let mut handles = Vec::with_capacity(NUM_THREADS);

        for i in 0..NUM_THREADS {
            handles.push(thread::spawn(move || {
                let factor = i as u64 + 1;
                let base = bignum![
                    0x1111111111111111u64.wrapping_mul(factor),
                    0x2222222222222222u64.wrapping_mul(factor)
                ];
                let shift = 4 * (i as u64 + 1);
                let expected = from_biguint(&(to_biguint(&base) >> shift));

                for _ in 0..ITERATIONS_PER_THREAD {
                    let mut num = base;
                    let status = num.shift_right(shift);
                    if expected.is_zero() {
                        assert_eq!(status, ShiftRightStatus::Zeroed);
                    } else {
                        assert_eq!(status, ShiftRightStatus::Success);
                    }
                    assert_eq!(num, expected);
                    assert_bignum_invariants!(num);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn bignum_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BigNum>();
    }
}
