// file to be included in tests modules

macro_rules! bignum {
    () => {
        crate::BigNum::ZERO
    };
    ( $($word:expr),+ $(,)* ) => {
        crate::BigNum::from_words(&[ $($word),+ ]).expect("words exceed capacity")
    };
}

macro_rules! assert_bignum_invariants {
    ($n:expr) => {{
        let n = &$n;
        if n.len() > 0 {
            assert_ne!(n.words[n.len() - 1], 0, "leading zero word");
        }
        for i in n.len()..crate::BigNum::CAPACITY {
            assert_eq!(n.words[i], 0, "tail word {} not zeroed", i);
        }
    }};
}

/// Convert to the reference arbitrary-precision integer
#[allow(dead_code)]
fn to_biguint(n: &crate::BigNum) -> ::num_bigint::BigUint {
    let mut result = ::num_bigint::BigUint::from(0u8);
    for &word in n.words().iter().rev() {
        result = (result << 64u32) | ::num_bigint::BigUint::from(word);
    }
    result
}

/// Convert back from the reference arbitrary-precision integer
#[allow(dead_code)]
fn from_biguint(n: &::num_bigint::BigUint) -> crate::BigNum {
    crate::BigNum::from_words(&n.to_u64_digits()).expect("reference value exceeds capacity")
}
