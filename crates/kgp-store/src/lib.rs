//! Read-only key-value access (C4, C5): the capability both concrete
//! stores implement, and the small fixed-record accessors built on top of it.

pub mod accessors;
pub mod error;
pub mod prefixes;
pub mod rocks;
pub mod snapshot;
pub mod traits;

pub use error::StoreError;
pub use rocks::RocksKvSource;
pub use snapshot::JsonSnapshotKvSource;
pub use traits::KvSource;
