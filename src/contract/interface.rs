use super::{AssetBundle, BootstrapError};
use log::debug;
use serde::Deserialize;
use std::fmt;

/// A named, typed argument or return value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Param {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub indexed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    // entries without a "type" are functions
    #[default]
    Function,
    Event,
    Constructor,
    Fallback,
    Receive,
    Error,
}

/// One entry of a JSON contract interface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterfaceEntry {
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<Param>,
    #[serde(default)]
    pub outputs: Vec<Param>,
    #[serde(default)]
    pub constant: bool,
    #[serde(rename = "stateMutability", default)]
    pub state_mutability: Option<String>,
}

impl InterfaceEntry {
    /// Returns `true` if calling this entry cannot modify state.
    pub fn is_constant(&self) -> bool {
        self.constant || matches!(self.state_mutability.as_deref(), Some("view" | "pure"))
    }
}

/// A parsed contract interface description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct InterfaceDescriptor {
    entries: Vec<InterfaceEntry>,
}

impl InterfaceDescriptor {
    pub fn from_json(json: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(json)
    }

    pub fn entries(&self) -> &[InterfaceEntry] {
        &self.entries
    }

    pub fn methods(&self) -> impl Iterator<Item = &InterfaceEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::Function)
    }

    pub fn method(&self, name: &str) -> Option<&InterfaceEntry> {
        self.methods().find(|e| e.name == name)
    }

    pub fn event(&self, name: &str) -> Option<&InterfaceEntry> {
        self.entries.iter().find(|e| e.kind == EntryKind::Event && e.name == name)
    }
}

/// Loads an interface description asset.
pub fn load_interface<A: AssetBundle + ?Sized>(
    assets: &A,
    name: &str,
) -> Result<InterfaceDescriptor, BootstrapError> {
    let data = assets.asset(name).ok_or_else(|| BootstrapError::MissingAsset(name.to_owned()))?;
    let interface = InterfaceDescriptor::from_json(data).map_err(|source| {
        BootstrapError::MalformedInterface { name: name.to_owned(), source }
    })?;
    debug!("loaded {} interface entries from {name}", interface.entries.len());
    Ok(interface)
}

/// Loads an interface description asset.
///
/// # Panics
///
/// Panics if the asset is missing or malformed.
pub fn must_load_interface<A: AssetBundle + ?Sized>(
    assets: &A,
    name: &str,
) -> InterfaceDescriptor {
    match load_interface(assets, name) {
        Ok(interface) => interface,
        Err(err) => panic!("{err}"),
    }
}

/// Packs call arguments and unpacks return values according to an [`InterfaceEntry`].
///
/// Implemented outside this crate by the ABI codec.
pub trait CallPacker {
    type Value;
    type Error: fmt::Display;

    fn pack(
        &self,
        method: &InterfaceEntry,
        args: &[Self::Value],
    ) -> Result<Vec<u8>, Self::Error>;

    fn unpack(
        &self,
        method: &InterfaceEntry,
        output: &[u8],
    ) -> Result<Vec<Self::Value>, Self::Error>;
}

fn must_find<'a>(
    interface: &'a InterfaceDescriptor,
    op: &str,
    name: &str,
) -> &'a InterfaceEntry {
    match interface.method(name) {
        Some(method) => method,
        None => panic!("{op} {name}: no such method"),
    }
}

/// Packs a call to `name`.
///
/// # Panics
///
/// The caller controls both the interface and the arguments, so any mismatch between them
/// panics: an unknown method, a wrong argument count, or an error from the packer.
pub fn must_pack<P: CallPacker + ?Sized>(
    packer: &P,
    interface: &InterfaceDescriptor,
    name: &str,
    args: &[P::Value],
) -> Vec<u8> {
    let method = must_find(interface, "pack", name);
    if args.len() != method.inputs.len() {
        panic!("pack {name}: expected {} arguments, got {}", method.inputs.len(), args.len());
    }
    match packer.pack(method, args) {
        Ok(data) => data,
        Err(err) => panic!("pack {name}: {err}"),
    }
}

/// Unpacks the return values of a call to `name`.
///
/// # Panics
///
/// Panics on an unknown method, an error from the packer, or a value count that does not match
/// the method's outputs.
pub fn must_unpack<P: CallPacker + ?Sized>(
    packer: &P,
    interface: &InterfaceDescriptor,
    name: &str,
    output: &[u8],
) -> Vec<P::Value> {
    let method = must_find(interface, "unpack", name);
    let values = match packer.unpack(method, output) {
        Ok(values) => values,
        Err(err) => panic!("unpack {name}: {err}"),
    };
    if values.len() != method.outputs.len() {
        panic!("unpack {name}: expected {} values, got {}", method.outputs.len(), values.len());
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::StaticAssets;

    const AUTHORITY_ABI: &[u8] = br#"[
        {"constant":true,"inputs":[],"name":"executor","outputs":[{"name":"","type":"address"}],"type":"function"},
        {"inputs":[{"name":"_signer","type":"address"},{"name":"_endorsor","type":"address"},{"name":"_identity","type":"bytes32"}],"name":"add","outputs":[],"stateMutability":"nonpayable","type":"function"},
        {"inputs":[{"name":"_signer","type":"address"}],"name":"get","outputs":[{"name":"listed","type":"bool"},{"name":"endorsor","type":"address"}],"stateMutability":"view"},
        {"anonymous":false,"inputs":[{"indexed":true,"name":"signer","type":"address"},{"indexed":false,"name":"action","type":"bytes32"}],"name":"Candidate","type":"event"}
    ]"#;

    static ASSETS: StaticAssets = StaticAssets::new(&[
        ("compiled/Authority.abi", AUTHORITY_ABI),
        ("compiled/Broken.abi", b"{\"not\": \"a list\"}"),
    ]);

    /// Packs each argument as one byte.
    struct BytePacker;

    impl CallPacker for BytePacker {
        type Value = u8;
        type Error = &'static str;

        fn pack(&self, _method: &InterfaceEntry, args: &[u8]) -> Result<Vec<u8>, Self::Error> {
            if args.contains(&0) {
                return Err("zero argument");
            }
            Ok(args.to_vec())
        }

        fn unpack(
            &self,
            _method: &InterfaceEntry,
            output: &[u8],
        ) -> Result<Vec<u8>, Self::Error> {
            Ok(output.to_vec())
        }
    }

    #[test]
    fn test_load_interface() {
        let interface = load_interface(&ASSETS, "compiled/Authority.abi").unwrap();
        assert_eq!(interface.entries().len(), 4);
        assert_eq!(interface.methods().count(), 3);

        let executor = interface.method("executor").unwrap();
        assert!(executor.is_constant());
        assert_eq!(executor.outputs[0].ty, "address");

        let add = interface.method("add").unwrap();
        assert!(!add.is_constant());
        assert_eq!(add.inputs.len(), 3);

        // the "type" field defaults to function
        assert!(interface.method("get").unwrap().is_constant());

        let event = interface.event("Candidate").unwrap();
        assert!(event.inputs[0].indexed);
        assert!(interface.method("Candidate").is_none());
    }

    #[test]
    fn test_load_interface_errors() {
        assert!(matches!(
            load_interface(&ASSETS, "compiled/Missing.abi"),
            Err(BootstrapError::MissingAsset(_))
        ));
        assert!(matches!(
            load_interface(&ASSETS, "compiled/Broken.abi"),
            Err(BootstrapError::MalformedInterface { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "load ABI compiled/Broken.abi")]
    fn test_must_load_interface_panics() {
        must_load_interface(&ASSETS, "compiled/Broken.abi");
    }

    #[test]
    fn test_must_pack_unpack() {
        let interface = must_load_interface(&ASSETS, "compiled/Authority.abi");
        assert_eq!(must_pack(&BytePacker, &interface, "add", &[1, 2, 3]), [1, 2, 3]);
        assert_eq!(must_unpack(&BytePacker, &interface, "get", &[1, 9]), [1, 9]);
    }

    #[test]
    #[should_panic(expected = "pack add: expected 3 arguments, got 1")]
    fn test_must_pack_argument_count() {
        let interface = must_load_interface(&ASSETS, "compiled/Authority.abi");
        must_pack(&BytePacker, &interface, "add", &[1]);
    }

    #[test]
    #[should_panic(expected = "pack add: zero argument")]
    fn test_must_pack_packer_error() {
        let interface = must_load_interface(&ASSETS, "compiled/Authority.abi");
        must_pack(&BytePacker, &interface, "add", &[1, 0, 3]);
    }

    #[test]
    #[should_panic(expected = "unpack remove: no such method")]
    fn test_must_unpack_unknown_method() {
        let interface = must_load_interface(&ASSETS, "compiled/Authority.abi");
        must_unpack(&BytePacker, &interface, "remove", &[]);
    }

    #[test]
    #[should_panic(expected = "unpack executor: expected 1 values, got 0")]
    fn test_must_unpack_value_count() {
        let interface = must_load_interface(&ASSETS, "compiled/Authority.abi");
        must_unpack(&BytePacker, &interface, "executor", &[]);
    }
}
