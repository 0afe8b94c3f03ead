//! Canonical encodings for values stored in trie slots.
//!
//! Every slot value is stored as RLP, with one exception: the zero element of each type is
//! stored as the empty byte sequence. An empty slot therefore reads back as zero, and a zero
//! value is indistinguishable from a slot that was never written.
//!
//! The set of storable types is closed:
//! - [`BigIntValue`]: non-negative integer of arbitrary size
//! - [`ProposerRecord`]: authority address plus status, elided only when both are zero
//! - [`StringValue`]: short text, kept as raw bytes
//! - [`AddressValue`]: 20-byte address, stored without its leading zero bytes
//! - [`UInt64Value`]: unsigned 64-bit counter

mod address;
mod arbitrary;
mod big_int;
mod proposer;
mod string;
mod uint64;

pub use address::AddressValue;
pub use big_int::BigIntValue;
pub use proposer::ProposerRecord;
pub use string::StringValue;
pub use uint64::UInt64Value;

use alloy_rlp::Header;
use sealed::sealed;
use std::{error, fmt};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The bytes are not a well-formed RLP item of the expected kind.
    Rlp(alloy_rlp::Error),
    /// A complete item was decoded but this many bytes were left over.
    TrailingBytes(usize),
    /// An integer payload starts with a zero byte.
    LeadingZero,
    /// A stored address suffix is longer than 20 bytes.
    AddressTooLong(usize),
    /// A negative number cannot be converted to a storage integer.
    Negative,
    /// The integer does not fit in the requested type.
    Overflow,
    /// The text is not a decimal or `0x`-prefixed hexadecimal number.
    InvalidDigit,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rlp(e) => write!(f, "rlp: {e}"),
            Self::TrailingBytes(n) => write!(f, "{n} trailing bytes after value"),
            Self::LeadingZero => write!(f, "non-canonical integer (leading zero bytes)"),
            Self::AddressTooLong(n) => write!(f, "address of {n} bytes exceeds 20 bytes"),
            Self::Negative => write!(f, "negative integer"),
            Self::Overflow => write!(f, "integer overflow"),
            Self::InvalidDigit => write!(f, "invalid digit"),
        }
    }
}

impl error::Error for Error {}

impl From<alloy_rlp::Error> for Error {
    fn from(error: alloy_rlp::Error) -> Self {
        Self::Rlp(error)
    }
}

/// A value that can be written to and read back from a trie slot.
///
/// Implementors only provide [`encode_value`](Self::encode_value) and
/// [`decode_value`](Self::decode_value) for non-zero values; the empty-slot convention lives in
/// the provided [`encode`](Self::encode) and [`decode`](Self::decode).
#[sealed]
pub trait StorageValue: Default + fmt::Debug + Sized {
    /// Returns `true` for the zero element of the type.
    fn is_zero(&self) -> bool;

    /// Encodes a value that is not the zero element.
    fn encode_value(&self) -> Result<Vec<u8>>;

    /// Decodes a non-empty slot.
    fn decode_value(data: &[u8]) -> Result<Self>;

    /// Encodes the value for storage. The zero element encodes to an empty vec.
    fn encode(&self) -> Result<Vec<u8>> {
        if self.is_zero() {
            return Ok(Vec::new());
        }
        self.encode_value()
    }

    /// Decodes a stored slot. An empty slot decodes to the zero element.
    fn decode(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Ok(Self::default());
        }
        Self::decode_value(data)
    }

    /// Decodes a stored slot into `self`.
    ///
    /// On error `self` is left unchanged.
    fn decode_into(&mut self, data: &[u8]) -> Result<()> {
        *self = Self::decode(data)?;
        Ok(())
    }
}

/// Returns the payload of the single RLP string that makes up all of `data`.
pub(crate) fn decode_string_payload(data: &[u8]) -> Result<&[u8]> {
    let mut buf = data;
    let header = Header::decode(&mut buf)?;
    if header.list {
        return Err(alloy_rlp::Error::UnexpectedList.into());
    }
    let payload = buf.get(..header.payload_length).ok_or(alloy_rlp::Error::InputTooShort)?;
    let trailing = buf.len() - payload.len();
    if trailing != 0 {
        return Err(Error::TrailingBytes(trailing));
    }
    Ok(payload)
}

/// Rejects integer payloads that are not minimal.
#[inline]
pub(crate) fn check_integer_payload(payload: &[u8]) -> Result<()> {
    match payload.first() {
        Some(0) => Err(Error::LeadingZero),
        _ => Ok(()),
    }
}
