//! Contract assets and call plumbing used when native contracts are set up.
//!
//! Interface descriptions and runtime bytecode are compiled into the node as assets. A missing or
//! malformed asset is a build defect, so the `must_*` helpers panic instead of returning errors;
//! they are meant to run once, while the node boots. Permission failures are the exception: they
//! are ordinary outcomes and are returned as [`NativeError`].

mod assets;
mod interface;
mod native;

pub use assets::{load_hex_data, must_load_hex_data, AssetBundle, StaticAssets};
pub use interface::{
    load_interface, must_load_interface, must_pack, must_unpack, CallPacker, EntryKind,
    InterfaceDescriptor, InterfaceEntry, Param,
};
pub use native::{ensure_permitted, NativeError};

use alloy_primitives::hex;
use std::{error, fmt};

/// Errors raised while loading compiled-in contract assets.
#[derive(Debug)]
pub enum BootstrapError {
    /// No asset with this name was compiled in.
    MissingAsset(String),
    /// The asset is not valid hex bytecode.
    MalformedBytecode { name: String, source: hex::FromHexError },
    /// The asset is not a valid interface description.
    MalformedInterface { name: String, source: serde_json::Error },
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAsset(name) => write!(f, "asset {name} not found"),
            Self::MalformedBytecode { name, source } => {
                write!(f, "load runtime byte code {name}: {source}")
            }
            Self::MalformedInterface { name, source } => write!(f, "load ABI {name}: {source}"),
        }
    }
}

impl error::Error for BootstrapError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::MissingAsset(_) => None,
            Self::MalformedBytecode { source, .. } => Some(source),
            Self::MalformedInterface { source, .. } => Some(source),
        }
    }
}
