pub mod config;
pub mod contract;
pub mod state;
pub mod value;

mod metrics;

pub use config::Config;
pub use state::{MemorySlots, SlotStore, StructuredStorage};
pub use value::{
    AddressValue, BigIntValue, ProposerRecord, StorageValue, StringValue, UInt64Value,
};
