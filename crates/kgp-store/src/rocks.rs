//! Live RocksDB-backed key-value source.
//!
//! Opens the on-disk consensus database read-only, so a running node
//! holding the writer lock doesn't block this verifier — the Rust
//! equivalent of the Python reference's `rocksdict.AccessType.read_only()`.
//! Each `get` may observe a different point in time if the node is
//! actively writing; the chain walk still terminates correctly because
//! pruning-point references are immutable once written (§5).

use std::path::Path;

use rocksdb::{Options, DB};

use crate::error::StoreError;
use crate::traits::KvSource;

pub struct RocksKvSource {
    db: Option<DB>,
}

impl RocksKvSource {
    /// Open the directory read-only. `error_if_log_file_exist = false` so
    /// opening alongside an active writer's WAL doesn't fail.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let opts = Options::default();
        let db = DB::open_for_read_only(&opts, path.as_ref(), false).map_err(|source| {
            StoreError::OpenRocksDb {
                path: path.as_ref().display().to_string(),
                source,
            }
        })?;
        Ok(Self { db: Some(db) })
    }
}

impl KvSource for RocksKvSource {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.db.as_ref().and_then(|db| db.get(key).ok().flatten())
    }

    fn close(&mut self) {
        self.db = None;
    }
}

impl Drop for RocksKvSource {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocksdb::DB as WritableDb;

    #[test]
    fn open_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(RocksKvSource::open(missing).is_err());
    }

    #[test]
    fn read_only_sees_written_values() {
        let dir = tempfile::tempdir().unwrap();
        {
            let db = WritableDb::open_default(dir.path()).unwrap();
            db.put(b"\x08key", b"value").unwrap();
        }
        let store = RocksKvSource::open(dir.path()).unwrap();
        assert_eq!(store.get(b"\x08key"), Some(b"value".to_vec()));
        assert_eq!(store.get(b"\x08missing"), None);
    }

    #[test]
    fn close_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        {
            let db = WritableDb::open_default(dir.path()).unwrap();
            db.put(b"\x08key", b"value").unwrap();
        }
        let mut store = RocksKvSource::open(dir.path()).unwrap();
        store.close();
        store.close();
        assert_eq!(store.get(b"\x08key"), None);
    }
}
