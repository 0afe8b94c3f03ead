use super::BootstrapError;
use alloy_primitives::{hex, Bytes};
use log::debug;

/// A set of named assets compiled into the binary.
pub trait AssetBundle {
    fn asset(&self, name: &str) -> Option<&[u8]>;
}

/// An [`AssetBundle`] backed by a static table, usually filled with `include_bytes!`.
#[derive(Debug, Clone, Copy)]
pub struct StaticAssets(&'static [(&'static str, &'static [u8])]);

impl StaticAssets {
    pub const fn new(assets: &'static [(&'static str, &'static [u8])]) -> Self {
        Self(assets)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.0.iter().map(|(name, _)| *name)
    }
}

impl AssetBundle for StaticAssets {
    fn asset(&self, name: &str) -> Option<&[u8]> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, data)| *data)
    }
}

/// Loads a hex-encoded bytecode asset.
pub fn load_hex_data<A: AssetBundle + ?Sized>(
    assets: &A,
    name: &str,
) -> Result<Bytes, BootstrapError> {
    let data = assets.asset(name).ok_or_else(|| BootstrapError::MissingAsset(name.to_owned()))?;
    let code = hex::decode(data.trim_ascii()).map_err(|source| {
        BootstrapError::MalformedBytecode { name: name.to_owned(), source }
    })?;
    debug!("loaded {} bytes of runtime byte code from {name}", code.len());
    Ok(code.into())
}

/// Loads a hex-encoded bytecode asset.
///
/// # Panics
///
/// Panics if the asset is missing or is not valid hex.
pub fn must_load_hex_data<A: AssetBundle + ?Sized>(assets: &A, name: &str) -> Bytes {
    match load_hex_data(assets, name) {
        Ok(code) => code,
        Err(err) => panic!("{err}"),
    }
}
