//! The key-value capability both concrete stores implement.
//!
//! The driver and walker depend only on this trait — not on RocksDB or
//! JSON specifics — so the pre-checkpoint walk can run against a snapshot
//! while the main walk runs against the live database, with identical code.

/// Read-only lookup from a composite key to raw bytes, plus idempotent close.
pub trait KvSource {
    /// Point lookup. Returns `None` if the key is absent.
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Release the underlying handle. Safe to call more than once.
    fn close(&mut self);
}
