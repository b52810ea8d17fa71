//! Errors for key-value source access.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to open RocksDB store at {path}: {source}")]
    OpenRocksDb {
        path: String,
        #[source]
        source: rocksdb::Error,
    },
    #[error("failed to read snapshot file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse JSON snapshot at {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid hex in snapshot field {field}: {source}")]
    Hex {
        field: String,
        #[source]
        source: hex::FromHexError,
    },
}
