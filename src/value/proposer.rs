use super::{arbitrary::arb_sparse_address, Result};
use alloy_primitives::Address;
use alloy_rlp::{RlpDecodable, RlpEncodable};
use proptest_derive::Arbitrary;
use sealed::sealed;

/// A persisted proof-of-authority entry.
///
/// Stored as the RLP list `[address, status]`, with the address as a full 20-byte string. The
/// record is elided only when both fields are zero: a zero address with a non-zero status is
/// still written out.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, RlpEncodable, RlpDecodable, Arbitrary,
)]
pub struct ProposerRecord {
    #[proptest(strategy = "arb_sparse_address()")]
    pub address: Address,
    pub status: u32,
}

impl ProposerRecord {
    pub const fn new(address: Address, status: u32) -> Self {
        Self { address, status }
    }
}

#[sealed]
impl super::StorageValue for ProposerRecord {
    #[inline]
    fn is_zero(&self) -> bool {
        self.address.is_zero() && self.status == 0
    }

    fn encode_value(&self) -> Result<Vec<u8>> {
        Ok(alloy_rlp::encode(self))
    }

    fn decode_value(data: &[u8]) -> Result<Self> {
        Ok(alloy_rlp::decode_exact(data)?)
    }
}
