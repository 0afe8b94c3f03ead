use super::{arbitrary::arb_text, decode_string_payload, Result};
use alloy_rlp::Encodable;
use proptest_derive::Arbitrary;
use sealed::sealed;
use std::{borrow::Cow, fmt};

/// A short piece of text.
///
/// Stored as an RLP string of its bytes. The content is usually UTF-8 but is never checked:
/// whatever bytes a slot holds are read back as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Arbitrary)]
pub struct StringValue(#[proptest(strategy = "arb_text()")] Vec<u8>);

impl StringValue {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the content as text, or `None` if it is not UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Returns the content as text, replacing invalid UTF-8 sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[sealed]
impl super::StorageValue for StringValue {
    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    fn encode_value(&self) -> Result<Vec<u8>> {
        let bytes = self.0.as_slice();
        let mut out = Vec::with_capacity(bytes.length());
        bytes.encode(&mut out);
        Ok(out)
    }

    fn decode_value(data: &[u8]) -> Result<Self> {
        Ok(Self(decode_string_payload(data)?.to_vec()))
    }
}

impl From<&str> for StringValue {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for StringValue {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&[u8]> for StringValue {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for StringValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_string_lossy())
    }
}
