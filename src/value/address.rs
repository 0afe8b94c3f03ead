use super::{arbitrary::arb_sparse_address, decode_string_payload, Error, Result};
use alloy_primitives::Address;
use alloy_rlp::Encodable;
use proptest_derive::Arbitrary;
use sealed::sealed;
use std::{fmt, ops::Deref};

const ADDRESS_LENGTH: usize = 20;

/// A 20-byte address.
///
/// Many stored addresses are small numbers left-padded to 20 bytes, so the leading zero bytes
/// are dropped before the remaining suffix is written as an RLP string. Decoding pads the suffix
/// back to 20 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Arbitrary)]
pub struct AddressValue(#[proptest(strategy = "arb_sparse_address()")] pub Address);

impl AddressValue {
    /// Returns the address without its leading zero bytes.
    pub fn trimmed(&self) -> &[u8] {
        let bytes = self.0.as_slice();
        let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        &bytes[start..]
    }
}

#[sealed]
impl super::StorageValue for AddressValue {
    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn encode_value(&self) -> Result<Vec<u8>> {
        let trimmed = self.trimmed();
        let mut out = Vec::with_capacity(trimmed.length());
        trimmed.encode(&mut out);
        Ok(out)
    }

    fn decode_value(data: &[u8]) -> Result<Self> {
        let suffix = decode_string_payload(data)?;
        if suffix.len() > ADDRESS_LENGTH {
            return Err(Error::AddressTooLong(suffix.len()));
        }
        Ok(Self(Address::left_padding_from(suffix)))
    }
}

impl Deref for AddressValue {
    type Target = Address;

    fn deref(&self) -> &Address {
        &self.0
    }
}

impl From<Address> for AddressValue {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl From<AddressValue> for Address {
    fn from(value: AddressValue) -> Self {
        value.0
    }
}

impl fmt::Display for AddressValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::StorageValue;
    use alloy_primitives::{address, hex};
    use proptest::prelude::*;

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(AddressValue(Address::ZERO).encode().unwrap(), Vec::<u8>::new());
        assert_eq!(AddressValue::decode(&[]).unwrap(), AddressValue(Address::ZERO));
    }

    #[test]
    fn test_trimmed_two_bytes() {
        let value = AddressValue(address!("0x000000000000000000000000000000000000abcd"));
        let encoded = value.encode().unwrap();
        assert_eq!(encoded, hex!("82abcd"));

        let decoded = AddressValue::decode(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(decoded.as_slice()[..18], [0u8; 18]);
        assert_eq!(decoded.as_slice()[18..], [0xab, 0xcd]);
    }

    #[test]
    fn test_encode() {
        // a single byte below 0x80 is its own encoding
        assert_eq!(AddressValue(Address::with_last_byte(5)).encode().unwrap(), hex!("05"));
        assert_eq!(AddressValue(Address::with_last_byte(0x80)).encode().unwrap(), hex!("8180"));

        // inner zero bytes are kept
        let value = AddressValue(address!("0x0000000000000000000000000000000001000002"));
        assert_eq!(value.encode().unwrap(), hex!("8401000002"));

        let full = address!("0x7567d83b7b8d80addcb281a71d54fc7b3364ffed");
        let mut expected = vec![0x94];
        expected.extend(full.as_slice());
        assert_eq!(AddressValue(full).encode().unwrap(), expected);
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            AddressValue::decode(&hex!("05")).unwrap(),
            AddressValue(Address::with_last_byte(5))
        );
        // an explicit empty string is also the zero address
        assert_eq!(AddressValue::decode(&hex!("80")).unwrap(), AddressValue(Address::ZERO));
        // a suffix with leading zeros still pads to the same address
        assert_eq!(
            AddressValue::decode(&hex!("820005")).unwrap(),
            AddressValue(Address::with_last_byte(5))
        );
    }

    #[test]
    fn test_decode_invalid() {
        let mut too_long = vec![0x95];
        too_long.extend([1u8; 21]);
        assert_eq!(AddressValue::decode(&too_long), Err(Error::AddressTooLong(21)));

        assert!(AddressValue::decode(&hex!("82ab")).is_err());
        assert!(AddressValue::decode(&hex!("c282abcd")).is_err());
        assert!(AddressValue::decode(&hex!("82abcdef")).is_err());
    }

    proptest! {
        #[test]
        fn fuzz_address_encode_decode(value: AddressValue) {
            let encoded = value.encode().unwrap();
            prop_assert_eq!(encoded.is_empty(), value.is_zero());
            prop_assert!(encoded.len() <= 21);
            prop_assert_eq!(AddressValue::decode(&encoded).unwrap(), value);
        }

        #[test]
        fn fuzz_address_decode_garbage(data: Vec<u8>) {
            let _ = AddressValue::decode(&data);
        }
    }
}
