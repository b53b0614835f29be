//!
//! Support for serde implementations
//!
use crate::BigNum;

use stdlib::fmt;
use stdlib::str::FromStr;

use serde::{de, ser};


impl ser::Serialize for BigNum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&format_args!("{:#x}", self))
    }
}


/// Used by SerDe to construct a BigNum
struct BigNumVisitor;

impl<'de> de::Visitor<'de> for BigNumVisitor {
    type Value = BigNum;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a hexadecimal string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigNum, E>
    where
        E: de::Error,
    {
        BigNum::from_str(value).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for BigNum {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_str(BigNumVisitor)
    }
}
