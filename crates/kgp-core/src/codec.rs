//! Header record decoding (C2): the canonical on-disk binary layout.
//!
//! Layout (no padding, no tags except the vec-length prefixes named below):
//!
//! 1. 32 bytes: the block's own hash (self-hash field stored alongside the
//!    payload; returned as an auxiliary output, not trusted — the caller
//!    recomputes and compares it).
//! 2. u16 LE version.
//! 3. u64 LE outer parent-levels count `L`.
//! 4. For each of the `L` levels: u64 LE inner count, then that many 32-byte hashes.
//! 5. 32 bytes hash_merkle_root.
//! 6. 32 bytes accepted_id_merkle_root.
//! 7. 32 bytes utxo_commitment.
//! 8. u64 LE timestamp_ms.
//! 9. u32 LE bits.
//! 10. u64 LE nonce.
//! 11. u64 LE daa_score.
//! 12. 24 bytes blue_work.
//! 13. u64 LE blue_score.
//! 14. 32 bytes pruning_point.
//!
//! Trailing bytes beyond this layout are tolerated — they are not needed
//! for hashing and this decoder does not require a length match.

use crate::error::CodecError;
use crate::reader::ByteReader;
use crate::types::Header;

/// Decode a header record. Returns the record's self-hash field alongside
/// the typed [`Header`]; the self-hash is not verified here (the walker
/// recomputes and compares it against the lookup key).
pub fn decode_header(bytes: &[u8]) -> Result<(crate::types::Hash, Header), CodecError> {
    let mut r = ByteReader::new(bytes);

    let self_hash = r.read_hash()?;
    let version = r.read_u16_le()?;

    let outer_count = r.read_u64_le()?;
    let outer_count: usize = outer_count.try_into().map_err(|_| CodecError::MalformedHeader {
        reason: format!("parent-levels count {outer_count} does not fit in usize"),
    })?;
    let mut parents = Vec::with_capacity(outer_count.min(1 << 16));
    for _ in 0..outer_count {
        let inner_count = r.read_u64_le()?;
        let inner_count: usize = inner_count.try_into().map_err(|_| CodecError::MalformedHeader {
            reason: format!("parent-level inner count {inner_count} does not fit in usize"),
        })?;
        let mut level = Vec::with_capacity(inner_count.min(1 << 16));
        for _ in 0..inner_count {
            level.push(r.read_hash()?);
        }
        parents.push(level);
    }

    let hash_merkle_root = r.read_hash()?;
    let accepted_id_merkle_root = r.read_hash()?;
    let utxo_commitment = r.read_hash()?;
    let timestamp_ms = r.read_u64_le()?;
    let bits = r.read_u32_le()?;
    let nonce = r.read_u64_le()?;
    let daa_score = r.read_u64_le()?;
    let blue_work = r.read_bluework()?;
    let blue_score = r.read_u64_le()?;
    let pruning_point = r.read_hash()?;

    let header = Header {
        hash_merkle_root,
        accepted_id_merkle_root,
        utxo_commitment,
        pruning_point,
        timestamp_ms,
        bits,
        nonce,
        daa_score,
        blue_score,
        blue_work,
        version,
        parents,
    };

    Ok((self_hash, header))
}

/// Encode a header record in the exact layout [`decode_header`] expects.
///
/// This core never writes back to the on-disk store; the encoder exists
/// for round-trip tests and for the JSON snapshot store (§4.4), which has
/// no raw on-disk bytes of its own and re-derives them from parsed fields
/// so the walker can treat both store variants identically.
pub fn encode_header(self_hash: crate::types::Hash, h: &Header) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(self_hash.as_bytes());
    out.extend_from_slice(&h.version.to_le_bytes());
    out.extend_from_slice(&(h.parents.len() as u64).to_le_bytes());
    for level in &h.parents {
        out.extend_from_slice(&(level.len() as u64).to_le_bytes());
        for parent in level {
            out.extend_from_slice(parent.as_bytes());
        }
    }
    out.extend_from_slice(h.hash_merkle_root.as_bytes());
    out.extend_from_slice(h.accepted_id_merkle_root.as_bytes());
    out.extend_from_slice(h.utxo_commitment.as_bytes());
    out.extend_from_slice(&h.timestamp_ms.to_le_bytes());
    out.extend_from_slice(&h.bits.to_le_bytes());
    out.extend_from_slice(&h.nonce.to_le_bytes());
    out.extend_from_slice(&h.daa_score.to_le_bytes());
    out.extend_from_slice(h.blue_work.as_bytes());
    out.extend_from_slice(&h.blue_score.to_le_bytes());
    out.extend_from_slice(h.pruning_point.as_bytes());
    out
}
