//! In-memory JSON-sidecar key-value source (§4.4).
//!
//! Loaded once at construction from a document with schema:
//!
//! ```json
//! { "headers_chain": [
//!     { "hash": "..", "version": 1, "parents": [["..", ".."]],
//!       "hashMerkleRoot": "..", "acceptedIDMerkleRoot": "..",
//!       "utxoCommitment": "..", "pruningPoint": "..",
//!       "timeInMilliseconds": 0, "bits": 0, "nonce": 0,
//!       "daaScore": 0, "blueScore": 0, "blueWork": ".." }
//! ] }
//! ```
//!
//! Used only for header lookups during the pre-checkpoint walk — tips and
//! pruning-point singleton records are not part of this schema and are
//! not required by that walk.

use std::collections::HashMap;
use std::path::Path;

use kgp_core::types::{BlueWork, Hash, Header};
use serde::Deserialize;

use crate::error::StoreError;
use crate::prefixes::HEADERS;
use crate::traits::KvSource;

#[derive(Deserialize)]
struct SidecarDocument {
    headers_chain: Vec<SidecarHeader>,
}

#[derive(Deserialize)]
struct SidecarHeader {
    hash: String,
    version: u16,
    parents: Vec<Vec<String>>,
    #[serde(rename = "hashMerkleRoot")]
    hash_merkle_root: String,
    #[serde(rename = "acceptedIDMerkleRoot")]
    accepted_id_merkle_root: String,
    #[serde(rename = "utxoCommitment")]
    utxo_commitment: String,
    #[serde(rename = "pruningPoint")]
    pruning_point: String,
    #[serde(rename = "timeInMilliseconds")]
    time_in_milliseconds: u64,
    bits: u32,
    nonce: u64,
    #[serde(rename = "daaScore")]
    daa_score: u64,
    #[serde(rename = "blueScore")]
    blue_score: u64,
    #[serde(rename = "blueWork")]
    blue_work: String,
}

fn parse_hash(field: &str, value: &str) -> Result<Hash, StoreError> {
    Hash::from_hex(value).map_err(|source| StoreError::Hex {
        field: field.to_string(),
        source,
    })
}

pub struct JsonSnapshotKvSource {
    headers: HashMap<Hash, (Hash, Header)>,
}

impl JsonSnapshotKvSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StoreError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text, &path.display().to_string())
    }

    fn from_json_str(text: &str, path_label: &str) -> Result<Self, StoreError> {
        let doc: SidecarDocument = serde_json::from_str(text).map_err(|source| StoreError::Json {
            path: path_label.to_string(),
            source,
        })?;

        let mut headers = HashMap::with_capacity(doc.headers_chain.len());
        for entry in doc.headers_chain {
            let self_hash = parse_hash("hash", &entry.hash)?;
            let mut parents = Vec::with_capacity(entry.parents.len());
            for (level_idx, level) in entry.parents.iter().enumerate() {
                let mut decoded_level = Vec::with_capacity(level.len());
                for parent_hex in level {
                    decoded_level.push(parse_hash(&format!("parents[{level_idx}]"), parent_hex)?);
                }
                parents.push(decoded_level);
            }

            let header = Header {
                hash_merkle_root: parse_hash("hashMerkleRoot", &entry.hash_merkle_root)?,
                accepted_id_merkle_root: parse_hash(
                    "acceptedIDMerkleRoot",
                    &entry.accepted_id_merkle_root,
                )?,
                utxo_commitment: parse_hash("utxoCommitment", &entry.utxo_commitment)?,
                pruning_point: parse_hash("pruningPoint", &entry.pruning_point)?,
                timestamp_ms: entry.time_in_milliseconds,
                bits: entry.bits,
                nonce: entry.nonce,
                daa_score: entry.daa_score,
                blue_score: entry.blue_score,
                blue_work: BlueWork::from_hex(&entry.blue_work).map_err(|source| StoreError::Hex {
                    field: "blueWork".to_string(),
                    source,
                })?,
                version: entry.version,
                parents,
            };

            headers.insert(self_hash, (self_hash, header));
        }

        Ok(Self { headers })
    }
}

impl KvSource for JsonSnapshotKvSource {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        if key.len() != 33 || key[0] != HEADERS {
            return None;
        }
        let mut hash_bytes = [0u8; 32];
        hash_bytes.copy_from_slice(&key[1..]);
        let hash = Hash::from_bytes(hash_bytes);
        let (self_hash, header) = self.headers.get(&hash)?;
        Some(kgp_core::encode_header(*self_hash, header))
    }

    fn close(&mut self) {
        self.headers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefixes::header_key;

    fn sample_doc() -> String {
        let hash = "11".repeat(32);
        let mr = "22".repeat(32);
        let airm = "33".repeat(32);
        let utxo = "44".repeat(32);
        let pp = "55".repeat(32);
        let bw = "66".repeat(24);
        format!(
            r#"{{ "headers_chain": [ {{
                "hash": "{hash}", "version": 1, "parents": [["{mr}"]],
                "hashMerkleRoot": "{mr}", "acceptedIDMerkleRoot": "{airm}",
                "utxoCommitment": "{utxo}", "pruningPoint": "{pp}",
                "timeInMilliseconds": 7, "bits": 5, "nonce": 9,
                "daaScore": 1, "blueScore": 2, "blueWork": "{bw}"
            }} ] }}"#
        )
    }

    #[test]
    fn loads_and_looks_up_header() {
        let snap = JsonSnapshotKvSource::from_json_str(&sample_doc(), "test").unwrap();
        let hash = Hash::from_hex(&"11".repeat(32)).unwrap();
        let bytes = snap.get(&header_key(&hash)).unwrap();
        let (decoded_hash, decoded_header) = kgp_core::decode_header(&bytes).unwrap();
        assert_eq!(decoded_hash, hash);
        assert_eq!(decoded_header.timestamp_ms, 7);
        assert_eq!(decoded_header.bits, 5);
        assert_eq!(decoded_header.nonce, 9);
    }

    #[test]
    fn missing_hash_returns_none() {
        let snap = JsonSnapshotKvSource::from_json_str(&sample_doc(), "test").unwrap();
        let missing = Hash::from_hex(&"ff".repeat(32)).unwrap();
        assert!(snap.get(&header_key(&missing)).is_none());
    }

    #[test]
    fn non_header_key_returns_none() {
        let snap = JsonSnapshotKvSource::from_json_str(&sample_doc(), "test").unwrap();
        assert!(snap.get(&[24]).is_none());
    }

    #[test]
    fn malformed_json_fails() {
        assert!(JsonSnapshotKvSource::from_json_str("not json", "test").is_err());
    }

    #[test]
    fn bad_hex_field_fails() {
        let doc = sample_doc().replace(&"11".repeat(32), "zz");
        assert!(JsonSnapshotKvSource::from_json_str(&doc, "test").is_err());
    }
}
