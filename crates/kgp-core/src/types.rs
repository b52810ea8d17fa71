//! Core data model: hashes, headers, and the literal genesis coinbase transaction.
//!
//! All entities here are read-only once constructed — there is no mutation
//! path, only decoding from stored bytes and recomputation of hashes.

use std::fmt;

/// A 32-byte hash value: block identifier, merkle root, UTXO commitment, or
/// pruning-point reference. Equality is byte-equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// The zero hash (32 zero bytes).
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Decode a lowercase hex string into a `Hash`. Used by the JSON sidecar parser.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes: Vec<u8> = hex::decode(s)?;
        let mut out = [0u8; 32];
        if bytes.len() != 32 {
            // hex::FromHexError has no "wrong length" variant with custom
            // message, so fall back to the closest matching variant.
            return Err(hex::FromHexError::InvalidStringLength);
        }
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({self})")
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A 192-bit little-endian unsigned integer, opaque except as a hash input.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlueWork(pub [u8; 24]);

impl BlueWork {
    pub const ZERO: Self = Self([0u8; 24]);

    pub fn from_bytes(bytes: [u8; 24]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 24] {
        &self.0
    }

    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes: Vec<u8> = hex::decode(s)?;
        if bytes.len() != 24 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut out = [0u8; 24];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }
}

impl fmt::Debug for BlueWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlueWork(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// One level of a header's per-level ancestor set in the DAG.
pub type ParentLevel = Vec<Hash>;

/// A block header, decoded from its canonical on-disk encoding.
///
/// Field order here follows the data model (§3), not the on-disk byte
/// layout or the hash preimage order — those differ from each other and
/// from this struct's declaration order, intentionally (see [`crate::codec`]
/// and [`crate::hash`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub hash_merkle_root: Hash,
    pub accepted_id_merkle_root: Hash,
    pub utxo_commitment: Hash,
    pub pruning_point: Hash,
    pub timestamp_ms: u64,
    pub bits: u32,
    pub nonce: u64,
    pub daa_score: u64,
    pub blue_score: u64,
    pub blue_work: BlueWork,
    pub version: u16,
    pub parents: Vec<ParentLevel>,
}

/// Reference to a previous transaction output. Unused by the genesis
/// coinbase (it has no inputs) but kept for completeness of the data model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutPoint {
    pub tx_id: Hash,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInput {
    pub previous_outpoint: OutPoint,
    pub signature_script: Vec<u8>,
    pub sequence: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPublicKey {
    pub version: u16,
    pub script: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionOutput {
    pub value: u64,
    pub script_public_key: ScriptPublicKey,
}

/// A transaction. Only the hand-constructed genesis coinbase is ever hashed
/// by this core — general transaction deserialization is out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: u16,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u64,
    pub subnetwork_id: [u8; 20],
    pub gas: u64,
    pub payload: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_zero_is_zero() {
        assert!(Hash::ZERO.is_zero());
    }

    #[test]
    fn hash_display_is_lowercase_hex() {
        let h = Hash([0xAB; 32]);
        let s = format!("{h}");
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn hash_from_hex_round_trip() {
        let h = Hash([0x42; 32]);
        let hex_str = h.to_string();
        assert_eq!(Hash::from_hex(&hex_str).unwrap(), h);
    }

    #[test]
    fn hash_from_hex_rejects_wrong_length() {
        assert!(Hash::from_hex("aabb").is_err());
    }

    #[test]
    fn bluework_from_hex_round_trip() {
        let bw = BlueWork([0x07; 24]);
        let hex_str = hex::encode(bw.as_bytes());
        assert_eq!(BlueWork::from_hex(&hex_str).unwrap(), bw);
    }

    #[test]
    fn bluework_from_hex_rejects_wrong_length() {
        assert!(BlueWork::from_hex("aabb").is_err());
    }
}
