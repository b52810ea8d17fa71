//! Pruning-point chain walker (C6).

use kgp_core::constants::MAX_WALK_STEPS;
use kgp_core::types::Hash;
use kgp_store::prefixes::header_key;
use kgp_store::KvSource;
use tracing::debug;

use crate::error::WalkError;

/// Walk pruning-point links from `start` to `target`, recomputing each
/// header's hash against the key it was stored under. Returns the number
/// of steps taken. Any failure is immediately terminal; there are no
/// retries.
pub fn walk_to(store: &dyn KvSource, start: Hash, target: Hash) -> Result<u32, WalkError> {
    let mut current = start;
    let mut steps = 0u32;

    loop {
        if current == target {
            return Ok(steps);
        }

        let bytes = store
            .get(&header_key(&current))
            .ok_or(WalkError::HeaderMissing(current))?;
        let (_, header) = kgp_core::decode_header(&bytes).map_err(|source| WalkError::MalformedHeader {
            hash: current,
            reason: source.to_string(),
        })?;

        let recomputed = kgp_core::header_hash(&header);
        if recomputed != current {
            return Err(WalkError::HashMismatch {
                expected: current,
                actual: recomputed,
            });
        }

        current = header.pruning_point;
        steps += 1;
        debug!(step = steps, next = %current, "walked pruning-point link");

        if steps > MAX_WALK_STEPS {
            return Err(WalkError::ChainTooLong(MAX_WALK_STEPS));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kgp_core::types::{BlueWork, Header};
    use std::collections::HashMap;

    struct FakeStore(HashMap<Hash, Vec<u8>>);
    impl KvSource for FakeStore {
        fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
            if key.len() != 33 {
                return None;
            }
            let mut h = [0u8; 32];
            h.copy_from_slice(&key[1..]);
            self.0.get(&Hash(h)).cloned()
        }
        fn close(&mut self) {}
    }

    fn header_with_pruning_point(pruning_point: Hash) -> Header {
        Header {
            hash_merkle_root: Hash::ZERO,
            accepted_id_merkle_root: Hash::ZERO,
            utxo_commitment: Hash::ZERO,
            pruning_point,
            timestamp_ms: 0,
            bits: 0,
            nonce: 0,
            daa_score: 0,
            blue_score: 0,
            blue_work: BlueWork::ZERO,
            version: 0,
            parents: vec![],
        }
    }

    fn seed(store: &mut HashMap<Hash, Vec<u8>>, pruning_point: Hash) -> Hash {
        let header = header_with_pruning_point(pruning_point);
        let self_hash = kgp_core::header_hash(&header);
        store.insert(self_hash, kgp_core::encode_header(self_hash, &header));
        self_hash
    }

    #[test]
    fn walk_reaches_immediate_target() {
        let genesis = Hash([0xAA; 32]);
        let mut data = HashMap::new();
        let tip = seed(&mut data, genesis);
        let store = FakeStore(data);

        let steps = walk_to(&store, tip, genesis).unwrap();
        assert_eq!(steps, 1);
    }

    #[test]
    fn start_equal_target_is_zero_steps() {
        let store = FakeStore(HashMap::new());
        let g = Hash([0x01; 32]);
        assert_eq!(walk_to(&store, g, g).unwrap(), 0);
    }

    #[test]
    fn missing_header_fails() {
        let store = FakeStore(HashMap::new());
        let start = Hash([0x01; 32]);
        let target = Hash([0x02; 32]);
        assert_eq!(walk_to(&store, start, target), Err(WalkError::HeaderMissing(start)));
    }

    #[test]
    fn tampered_header_fails_hash_mismatch() {
        let genesis = Hash([0xAA; 32]);
        let mut data = HashMap::new();
        let tip = seed(&mut data, genesis);
        // Corrupt the stored bytes: flip a byte inside the encoded payload.
        let bytes = data.get_mut(&tip).unwrap();
        bytes[40] ^= 0xFF;
        let store = FakeStore(data);

        match walk_to(&store, tip, genesis) {
            Err(WalkError::HashMismatch { expected, .. }) => assert_eq!(expected, tip),
            other => panic!("expected HashMismatch, got {other:?}"),
        }
    }

    #[test]
    fn overlong_chain_is_rejected_by_step_bound() {
        // Build a chain longer than MAX_WALK_STEPS that never reaches the
        // target, each link individually hash-valid. The walker must give
        // up rather than walk forever.
        let mut data = HashMap::new();
        let mut next = Hash::ZERO;
        for i in 0..(MAX_WALK_STEPS + 5) {
            let mut h = header_with_pruning_point(next);
            h.nonce = i as u64;
            next = seed_with(&mut data, h);
        }
        let store = FakeStore(data);
        let unreachable_target = Hash([0xFF; 32]);

        assert_eq!(
            walk_to(&store, next, unreachable_target),
            Err(WalkError::ChainTooLong(MAX_WALK_STEPS))
        );
    }

    fn seed_with(store: &mut HashMap<Hash, Vec<u8>>, header: Header) -> Hash {
        let self_hash = kgp_core::header_hash(&header);
        store.insert(self_hash, kgp_core::encode_header(self_hash, &header));
        self_hash
    }
}
