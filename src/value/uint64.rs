use super::Result;
use proptest_derive::Arbitrary;
use sealed::sealed;
use std::fmt;

/// An unsigned 64-bit counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Arbitrary)]
pub struct UInt64Value(pub u64);

impl UInt64Value {
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[sealed]
impl super::StorageValue for UInt64Value {
    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn encode_value(&self) -> Result<Vec<u8>> {
        Ok(alloy_rlp::encode(self.0))
    }

    fn decode_value(data: &[u8]) -> Result<Self> {
        // rejects leading zeros, payloads over 8 bytes and trailing bytes
        Ok(Self(alloy_rlp::decode_exact(data)?))
    }
}

impl From<u64> for UInt64Value {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UInt64Value> for u64 {
    fn from(value: UInt64Value) -> Self {
        value.0
    }
}

impl fmt::Display for UInt64Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
