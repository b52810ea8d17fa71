//! Key-value prefix byte assignments (§4.4). Any consistent assignment
//! works provided it matches the producer; these match the real on-disk
//! schema so a live consensus database can be read directly.

/// Serialized header record, keyed by `[HEADERS] || [32-byte hash]`.
pub const HEADERS: u8 = 8;
/// Singleton 32-byte hash: the current selected tip of the header chain.
pub const HEADERS_SELECTED_TIP: u8 = 7;
/// Singleton record: `u64 LE count` then that many 32-byte tip hashes.
pub const TIPS: u8 = 24;
/// Singleton 32-byte hash: the current pruning point.
pub const PRUNING_POINT: u8 = 13;

/// Build a composite key for a hash-keyed record: `[prefix] || [hash]`.
pub fn header_key(hash: &kgp_core::Hash) -> Vec<u8> {
    let mut key = Vec::with_capacity(33);
    key.push(HEADERS);
    key.extend_from_slice(hash.as_bytes());
    key
}

/// Build a singleton key: `[prefix]` alone.
pub fn singleton_key(prefix: u8) -> [u8; 1] {
    [prefix]
}
