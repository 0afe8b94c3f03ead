//! Proptest strategies for generating storage values.
//!
//! Uniformly random bytes almost never hit the interesting cases (zero, leading zero bytes,
//! single bytes below `0x80`), so these strategies bias towards them.

use alloy_primitives::Address;
use proptest::{
    arbitrary::any,
    collection,
    prop_oneof,
    strategy::{Just, Strategy},
};

fn trim_leading_zeros(bytes: &[u8]) -> Vec<u8> {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}

/// Minimal big-endian magnitudes, including zero and sizes beyond 256 bits.
pub(super) fn arb_magnitude() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        Just(Vec::new()),
        (0u8..0x80).prop_map(|b| trim_leading_zeros(&[b])),
        any::<u64>().prop_map(|v| trim_leading_zeros(&v.to_be_bytes())),
        collection::vec(any::<u8>(), 0..48).prop_map(|bytes| trim_leading_zeros(&bytes)),
    ]
    .boxed()
}

/// Text content: mostly UTF-8 strings, plus raw bytes that need not be UTF-8.
pub(super) fn arb_text() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        Just(Vec::new()),
        any::<String>().prop_map(String::into_bytes),
        collection::vec(any::<u8>(), 1..80),
    ]
    .boxed()
}

/// Addresses with a random number of leading zero bytes.
pub(super) fn arb_sparse_address() -> impl Strategy<Value = Address> {
    prop_oneof![
        Just(Address::ZERO),
        (0usize..=20, any::<[u8; 20]>()).prop_map(|(zeros, mut bytes)| {
            bytes[..zeros].fill(0);
            Address::from(bytes)
        }),
    ]
    .boxed()
}
