//! Tips / selected-tip / pruning-point accessors (C5): small fixed records
//! decoded directly from singleton keys, independent of the header codec.

use kgp_core::reader::ByteReader;
use kgp_core::types::Hash;

use crate::prefixes::{self, HEADERS_SELECTED_TIP, PRUNING_POINT, TIPS};
use crate::traits::KvSource;

/// Decode the `TIPS` record: `u64 LE count` then that many 32-byte hashes.
fn decode_tips(bytes: &[u8]) -> Vec<Hash> {
    let mut r = ByteReader::new(bytes);
    let Ok(count) = r.read_u64_le() else {
        return Vec::new();
    };
    let mut tips = Vec::with_capacity((count as usize).min(1 << 16));
    for _ in 0..count {
        match r.read_hash() {
            Ok(h) => tips.push(h),
            Err(_) => break,
        }
    }
    tips
}

fn decode_singleton_hash(bytes: &[u8]) -> Hash {
    let mut r = ByteReader::new(bytes);
    r.read_hash().unwrap_or(Hash::ZERO)
}

/// Returns `(tips, headers_selected_tip)`. Missing records decode to an
/// empty tip set / zero-hash selected tip — a recoverable condition, not
/// an error, per §4.5.
pub fn tips(store: &dyn KvSource) -> (Vec<Hash>, Hash) {
    let tips_bytes = store.get(&prefixes::singleton_key(TIPS));
    let hst_bytes = store.get(&prefixes::singleton_key(HEADERS_SELECTED_TIP));

    let tips = tips_bytes.map(|b| decode_tips(&b)).unwrap_or_default();
    let hst = hst_bytes.map(|b| decode_singleton_hash(&b)).unwrap_or(Hash::ZERO);

    (tips, hst)
}

/// The current pruning point, zero-hash if absent.
pub fn pruning_point(store: &dyn KvSource) -> Hash {
    store
        .get(&prefixes::singleton_key(PRUNING_POINT))
        .map(|b| decode_singleton_hash(&b))
        .unwrap_or(Hash::ZERO)
}
