//! Typed access to trie slots.
//!
//! The trie itself is external: anything implementing [`SlotStore`] can be wrapped in a
//! [`StructuredStorage`], which converts between slot bytes and [`StorageValue`]s. Reads of a
//! slot that was never written produce the zero element of the requested type, and writes of a
//! zero element remove the slot.

use crate::{
    config::Config,
    metrics::SlotMetrics,
    value::{self, StorageValue},
};
use alloy_primitives::{Address, Bytes, B256};
use log::{trace, warn};
use std::{any::type_name, collections::HashMap, fmt};

/// Raw slot access on a key/value store.
pub trait SlotStore {
    /// Returns the bytes stored in a slot, or an empty value if the slot was never written.
    fn slot(&self, address: &Address, key: &B256) -> Bytes;

    /// Stores the bytes of a slot. An empty value removes the slot.
    fn set_slot(&mut self, address: Address, key: B256, value: Bytes);
}

/// A [`SlotStore`] kept in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySlots {
    slots: HashMap<(Address, B256), Bytes>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of non-empty slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SlotStore for MemorySlots {
    fn slot(&self, address: &Address, key: &B256) -> Bytes {
        self.slots.get(&(*address, *key)).cloned().unwrap_or_default()
    }

    fn set_slot(&mut self, address: Address, key: B256, value: Bytes) {
        if value.is_empty() {
            self.slots.remove(&(address, key));
        } else {
            self.slots.insert((address, key), value);
        }
    }
}

/// Reads and writes [`StorageValue`]s on top of a [`SlotStore`].
pub struct StructuredStorage<S> {
    store: S,
    metrics: Option<SlotMetrics>,
}

impl<S: SlotStore> StructuredStorage<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, &Config::default())
    }

    pub fn with_config(store: S, config: &Config) -> Self {
        Self { store, metrics: config.slot_metrics().then(SlotMetrics::default) }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Reads a slot as a `T`.
    ///
    /// A slot holding bytes that are not a valid `T` is an error; it is never read as zero.
    pub fn get<T: StorageValue>(&self, address: &Address, key: &B256) -> value::Result<T> {
        self.record(|m| m.slots_read.increment(1));
        let data = self.store.slot(address, key);
        if data.is_empty() {
            self.record(|m| m.slots_elided.increment(1));
        }

        T::decode(&data).inspect_err(|err| {
            self.record(|m| m.decode_failures.increment(1));
            warn!("slot {key} of {address} is not a valid {}: {err}", type_name::<T>());
        })
    }

    /// Writes `value` to a slot, removing the slot if `value` is zero.
    pub fn set<T: StorageValue>(
        &mut self,
        address: Address,
        key: B256,
        value: &T,
    ) -> value::Result<()> {
        let data = value.encode()?;
        self.record(|m| m.slots_written.increment(1));
        if data.is_empty() {
            self.record(|m| m.slots_elided.increment(1));
            trace!("clearing slot {key} of {address}");
        }

        self.store.set_slot(address, key, data.into());
        Ok(())
    }

    #[inline]
    fn record(&self, f: impl FnOnce(&SlotMetrics)) {
        if let Some(metrics) = &self.metrics {
            f(metrics);
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for StructuredStorage<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredStorage").field("store", &self.store).finish_non_exhaustive()
    }
}
