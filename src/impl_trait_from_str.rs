use crate::*;
use stdlib::str::FromStr;

impl FromStr for BigNum {
    type Err = ParseBigNumError;

    /// Strings parse as hexadecimal, with an optional `0x` prefix.
    #[inline]
    fn from_str(s: &str) -> Result<BigNum, ParseBigNumError> {
        // implemented in parsing.rs
        BigNum::from_hex_str(s)
    }
}




#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exp:literal) => {
            #[test]
            #[should_panic(expected = $exp)]
            fn $name() {
                let _: BigNum = $input.parse().unwrap();
            }
        };
    }

    impl_case!(case_bad_string_empty: "" => "Empty");
    impl_case!(case_bad_string_prefix_only: "0x" => "Empty");
    impl_case!(case_bad_string_hello: "hello" => "InvalidDigit");
    impl_case!(case_bad_string_decimal_point: "123.45" => "InvalidDigit");
    impl_case!(case_bad_string_negative: "-f" => "InvalidDigit");
}
