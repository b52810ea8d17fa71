//! Literal genesis/checkpoint constants baked into the verification driver.
//!
//! All byte literals here are transcribed directly from the reference
//! implementation's hardcoded values (not re-derived), since these are
//! consensus-pinned constants, not computed quantities.

use crate::types::Hash;

/// The pinned (hardwired/current) genesis block hash.
pub const GENESIS_HASH: Hash = Hash([
    0x58, 0xc2, 0xd4, 0x19, 0x9e, 0x21, 0xf9, 0x10, 0xd1, 0x57, 0x1d, 0x11, 0x49, 0x69, 0xce, 0xce,
    0xf4, 0x8f, 0x09, 0xf9, 0x34, 0xd4, 0x2c, 0xcb, 0x6a, 0x28, 0x1a, 0x15, 0x86, 0x8f, 0x29, 0x99,
]);

/// The checkpoint block hash, the last block of the original chain retained
/// as the pruning-point backbone link before the hardwired genesis.
pub const CHECKPOINT_HASH: Hash = Hash([
    0x0f, 0xca, 0x37, 0xca, 0x66, 0x7c, 0x2d, 0x55, 0x0a, 0x6c, 0x44, 0x16, 0xda, 0xd9, 0x71, 0x7e,
    0x50, 0x92, 0x71, 0x28, 0xc4, 0x24, 0xfa, 0x4e, 0xdb, 0xeb, 0xc4, 0x36, 0xab, 0x13, 0xae, 0xef,
]);

/// The original genesis block hash, predating the checkpoint/hardwire.
pub const ORIGINAL_GENESIS_HASH: Hash = Hash([
    0xca, 0xeb, 0x97, 0x96, 0x0a, 0x16, 0x0c, 0x21, 0x1a, 0x6b, 0x21, 0x96, 0xbd, 0x78, 0x39, 0x9f,
    0xd4, 0xc4, 0xcc, 0x5b, 0x50, 0x9f, 0x55, 0xc1, 0x2c, 0x8a, 0x7d, 0x81, 0x5f, 0x75, 0x36, 0xea,
]);

/// The MuHash digest of the empty multiset — the canonical UTXO commitment
/// of a chain with no UTXOs at all.
pub const EMPTY_MUHASH: Hash = Hash([
    0x54, 0x4e, 0xb3, 0x14, 0x2c, 0x00, 0x0f, 0x0a, 0xd2, 0xc7, 0x6a, 0xc4, 0x1f, 0x42, 0x22, 0xab,
    0xba, 0xba, 0xbe, 0xd8, 0x30, 0xee, 0xaf, 0xee, 0x4b, 0x6d, 0xc5, 0x6b, 0x52, 0xd5, 0xca, 0xc0,
]);

/// 20-byte subnetwork ID of the genesis coinbase: `0x01` followed by 19 zero bytes.
pub const GENESIS_SUBNETWORK_ID: [u8; 20] = [
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// The 204-byte genesis coinbase payload: 8-byte blue score (zero), 8-byte
/// little-endian subsidy (`0x05f5e100`), 2-byte script version, a length
/// varint, OP-FALSE, a 120-byte message, a 32-byte Bitcoin block-hash
/// anchor, and a 32-byte checkpoint-hash anchor.
pub const GENESIS_COINBASE_PAYLOAD: [u8; 204] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xe1, 0xf5, 0x05, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x00, 0xd7, 0x95, 0xd7, 0x9e, 0xd7, 0x94, 0x20, 0xd7, 0x93, 0xd7, 0x99, 0x20,
    0xd7, 0xa2, 0xd7, 0x9c, 0xd7, 0x99, 0xd7, 0x9a, 0x20, 0xd7, 0x95, 0xd7, 0xa2, 0xd7, 0x9c, 0x20,
    0xd7, 0x90, 0xd7, 0x97, 0xd7, 0x99, 0xd7, 0x9a, 0x20, 0xd7, 0x99, 0xd7, 0x99, 0xd7, 0x98, 0xd7,
    0x91, 0x20, 0xd7, 0x91, 0xd7, 0xa9, 0xd7, 0x90, 0xd7, 0xa8, 0x20, 0xd7, 0x9b, 0xd7, 0xa1, 0xd7,
    0xa4, 0xd7, 0x90, 0x20, 0xd7, 0x95, 0xd7, 0x93, 0xd7, 0x94, 0xd7, 0x91, 0xd7, 0x94, 0x20, 0xd7,
    0x9c, 0xd7, 0x9e, 0xd7, 0xa2, 0xd7, 0x91, 0xd7, 0x93, 0x20, 0xd7, 0x9b, 0xd7, 0xa8, 0xd7, 0xa2,
    0xd7, 0x95, 0xd7, 0xaa, 0x20, 0xd7, 0x90, 0xd7, 0x9c, 0xd7, 0x94, 0xd7, 0x9b, 0xd7, 0x9d, 0x20,
    0xd7, 0xaa, 0xd7, 0xa2, 0xd7, 0x91, 0xd7, 0x93, 0xd7, 0x95, 0xd7, 0x9f, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x0b, 0x1f, 0x8e, 0x1c, 0x17, 0xb0, 0x13, 0x3d, 0x43, 0x91, 0x74,
    0xe5, 0x2e, 0xfb, 0xb0, 0xc4, 0x1c, 0x35, 0x83, 0xa8, 0xaa, 0x66, 0xb0, 0x0f, 0xca, 0x37, 0xca,
    0x66, 0x7c, 0x2d, 0x55, 0x0a, 0x6c, 0x44, 0x16, 0xda, 0xd9, 0x71, 0x7e, 0x50, 0x92, 0x71, 0x28,
    0xc4, 0x24, 0xfa, 0x4e, 0xdb, 0xeb, 0xc4, 0x36, 0xab, 0x13, 0xae, 0xef,
];

/// Maximum chain-walk steps before the walker gives up — a defensive
/// bound, not a real chain-length estimate; genesis is reached in far
/// fewer steps in practice.
pub const MAX_WALK_STEPS: u32 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_subnetwork_id_is_one_then_zeros() {
        assert_eq!(GENESIS_SUBNETWORK_ID[0], 0x01);
        assert!(GENESIS_SUBNETWORK_ID[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn empty_muhash_nonzero() {
        assert!(!EMPTY_MUHASH.is_zero());
    }

    #[test]
    fn genesis_coinbase_payload_length() {
        assert_eq!(GENESIS_COINBASE_PAYLOAD.len(), 204);
    }

    #[test]
    fn distinct_hashes() {
        assert_ne!(GENESIS_HASH, CHECKPOINT_HASH);
        assert_ne!(CHECKPOINT_HASH, ORIGINAL_GENESIS_HASH);
        assert_ne!(GENESIS_HASH, ORIGINAL_GENESIS_HASH);
    }
}
