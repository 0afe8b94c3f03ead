use super::{
    arbitrary::arb_magnitude, check_integer_payload, decode_string_payload, Error, Result,
};
use alloy_primitives::{hex, U256};
use alloy_rlp::Encodable;
use proptest_derive::Arbitrary;
use sealed::sealed;
use std::{cmp::Ordering, fmt, str::FromStr};

/// A non-negative integer of arbitrary size.
///
/// The magnitude is kept as minimal big-endian bytes, so zero is the empty vec. Negative numbers
/// have no representation: converting one fails with [`Error::Negative`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Arbitrary)]
pub struct BigIntValue(#[proptest(strategy = "arb_magnitude()")] Vec<u8>);

impl BigIntValue {
    pub const fn zero() -> Self {
        Self(Vec::new())
    }

    /// Creates a value from big-endian bytes. Leading zero bytes are ignored.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        Self(bytes[start..].to_vec())
    }

    /// Returns the minimal big-endian magnitude. Zero is the empty slice.
    #[inline]
    pub fn as_be_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of significant bits.
    pub fn bit_len(&self) -> usize {
        match self.0.first() {
            Some(first) => (self.0.len() - 1) * 8 + (8 - first.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Multiplies the magnitude by `factor` and adds `addend`, in place.
    fn mul_add(&mut self, factor: u8, addend: u8) {
        let mut carry = addend as u16;
        for byte in self.0.iter_mut().rev() {
            let v = *byte as u16 * factor as u16 + carry;
            *byte = v as u8;
            carry = v >> 8;
        }
        if carry != 0 {
            self.0.insert(0, carry as u8);
        }
    }
}

#[sealed]
impl super::StorageValue for BigIntValue {
    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    fn encode_value(&self) -> Result<Vec<u8>> {
        check_integer_payload(&self.0)?;
        let mut out = Vec::with_capacity(self.0.as_slice().length());
        self.0.as_slice().encode(&mut out);
        Ok(out)
    }

    fn decode_value(data: &[u8]) -> Result<Self> {
        let payload = decode_string_payload(data)?;
        check_integer_payload(payload)?;
        Ok(Self(payload.to_vec()))
    }
}

impl Ord for BigIntValue {
    fn cmp(&self, other: &Self) -> Ordering {
        // both magnitudes are minimal, so the longer one is larger
        self.0.len().cmp(&other.0.len()).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for BigIntValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for BigIntValue {
    fn from(value: u64) -> Self {
        Self::from_be_slice(&value.to_be_bytes())
    }
}

impl From<u128> for BigIntValue {
    fn from(value: u128) -> Self {
        Self::from_be_slice(&value.to_be_bytes())
    }
}

impl From<U256> for BigIntValue {
    fn from(value: U256) -> Self {
        Self::from_be_slice(&value.to_be_bytes::<32>())
    }
}

impl TryFrom<i64> for BigIntValue {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u64::try_from(value).map(Self::from).map_err(|_| Error::Negative)
    }
}

impl TryFrom<i128> for BigIntValue {
    type Error = Error;

    fn try_from(value: i128) -> Result<Self> {
        u128::try_from(value).map(Self::from).map_err(|_| Error::Negative)
    }
}

impl TryFrom<&BigIntValue> for u64 {
    type Error = Error;

    fn try_from(value: &BigIntValue) -> Result<Self> {
        if value.0.len() > 8 {
            return Err(Error::Overflow);
        }
        let mut buf = [0u8; 8];
        buf[8 - value.0.len()..].copy_from_slice(&value.0);
        Ok(u64::from_be_bytes(buf))
    }
}

impl TryFrom<&BigIntValue> for U256 {
    type Error = Error;

    fn try_from(value: &BigIntValue) -> Result<Self> {
        if value.0.len() > 32 {
            return Err(Error::Overflow);
        }
        Ok(U256::from_be_slice(&value.0))
    }
}

impl FromStr for BigIntValue {
    type Err = Error;

    /// Parses a decimal number, or a hexadecimal one when prefixed with `0x`.
    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with('-') {
            return Err(Error::Negative);
        }
        if let Some(digits) = s.strip_prefix("0x") {
            // hex::decode would strip a second prefix
            if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(Error::InvalidDigit);
            }
            let bytes = if digits.len() % 2 == 1 {
                hex::decode(format!("0{digits}"))
            } else {
                hex::decode(digits)
            }
            .map_err(|_| Error::InvalidDigit)?;
            return Ok(Self::from_be_slice(&bytes));
        }
        if s.is_empty() {
            return Err(Error::InvalidDigit);
        }

        let mut value = Self::zero();
        for c in s.chars() {
            let digit = c.to_digit(10).ok_or(Error::InvalidDigit)?;
            value.mul_add(10, digit as u8);
        }
        // "0" and "007" leave leading zeros behind
        Ok(Self::from_be_slice(&value.0))
    }
}

impl fmt::Display for BigIntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.pad("0");
        }

        let mut magnitude = self.0.clone();
        let mut digits = Vec::new();
        while !magnitude.is_empty() {
            let mut rem = 0u16;
            for byte in magnitude.iter_mut() {
                let v = (rem << 8) | *byte as u16;
                *byte = (v / 10) as u8;
                rem = v % 10;
            }
            digits.push(b'0' + rem as u8);
            let zeros = magnitude.iter().take_while(|b| **b == 0).count();
            magnitude.drain(..zeros);
        }
        digits.reverse();

        f.pad(std::str::from_utf8(&digits).map_err(|_| fmt::Error)?)
    }
}
