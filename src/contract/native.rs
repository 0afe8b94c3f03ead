use alloy_primitives::Address;
use log::debug;
use std::{error, fmt};

/// Errors returned by native contract methods.
///
/// These are expected outcomes of a call, not defects, and are handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeError {
    /// A restricted native method was called without the required authorization.
    NotPermitted,
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPermitted => write!(f, "native: not permitted"),
        }
    }
}

impl error::Error for NativeError {}

/// Checks `caller` against an access policy.
pub fn ensure_permitted<F>(caller: &Address, is_authorized: F) -> Result<(), NativeError>
where
    F: FnOnce(&Address) -> bool,
{
    if is_authorized(caller) {
        Ok(())
    } else {
        debug!("native call from {caller} rejected");
        Err(NativeError::NotPermitted)
    }
}
