//! Implementation of fmt traits & other stringification functions
//!
//! Values format in hexadecimal: the top word prints without padding,
//! every lower word zero-padded to 16 digits, the same dump format a
//! word-array debugger would produce. Decimal output would require
//! division, which this crate does not carry.

use crate::BigNum;

use stdlib::fmt;


impl fmt::Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigNum(\"{:#x}\", len={})", self, self.len)
    }
}

impl fmt::LowerHex for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        match self.len {
            0 => f.write_str("0"),
            n => {
                write!(f, "{:x}", self.words[n - 1])?;
                for &word in self.words[..n - 1].iter().rev() {
                    write!(f, "{:016x}", word)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::UpperHex for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        match self.len {
            0 => f.write_str("0"),
            n => {
                write!(f, "{:X}", self.words[n - 1])?;
                for &word in self.words[..n - 1].iter().rev() {
                    write!(f, "{:016X}", word)?;
                }
                Ok(())
            }
        }
    }
}
