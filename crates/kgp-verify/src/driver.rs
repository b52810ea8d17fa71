//! Seven-phase verification driver (C7).

use kgp_core::constants::{
    CHECKPOINT_HASH, EMPTY_MUHASH, GENESIS_COINBASE_PAYLOAD, GENESIS_HASH, GENESIS_SUBNETWORK_ID,
    ORIGINAL_GENESIS_HASH,
};
use kgp_core::types::{Hash, Transaction};
use kgp_store::prefixes::header_key;
use kgp_store::KvSource;
use tracing::info;

use crate::error::VerifyError;
use crate::walker::walk_to;

/// How the genesis header's UTXO commitment classifies, per §4.7 phase 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtxoClassification {
    /// An all-zero commitment: this genesis has never seen a UTXO.
    OriginalGenesis,
    /// A non-zero commitment inherited from a checkpoint UTXO set.
    HardwiredGenesisWithCheckpoint,
}

/// Outcome of the optional pre-checkpoint phase (§4.7 phase 7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreCheckpointOutcome {
    Skipped,
    Verified { walk_steps: u32 },
}

/// Full result of a verification run, independent of how it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub genesis_hash: Hash,
    pub chain_tip: Hash,
    pub walk_steps: u32,
    pub utxo_classification: UtxoClassification,
    pub pre_checkpoint: PreCheckpointOutcome,
    /// Genesis header's `bits` field, carried through for informational
    /// difficulty display (supplemented from `original_source/`, not part
    /// of the pass/fail contract).
    pub genesis_bits: u32,
}

/// The hand-constructed genesis coinbase transaction (§4.7 phase 4): no
/// inputs, no outputs, the literal payload and subnetwork id, all other
/// scalar fields zero.
fn genesis_coinbase_transaction() -> Transaction {
    Transaction {
        version: 0,
        inputs: vec![],
        outputs: vec![],
        lock_time: 0,
        subnetwork_id: GENESIS_SUBNETWORK_ID,
        gas: 0,
        payload: GENESIS_COINBASE_PAYLOAD.to_vec(),
    }
}

fn fetch_header(store: &dyn KvSource, hash: Hash) -> Option<kgp_core::types::Header> {
    let bytes = store.get(&header_key(&hash))?;
    kgp_core::decode_header(&bytes).ok().map(|(_, h)| h)
}

/// Run the full seven-phase verification against the current store, and
/// optionally a pre-checkpoint snapshot.
pub fn verify(
    current_store: &dyn KvSource,
    pre_checkpoint_store: Option<&dyn KvSource>,
) -> Result<VerificationReport, VerifyError> {
    // Phase 2: tips / selected tip.
    let (tips, selected_tip) = kgp_store::accessors::tips(current_store);
    let chain_tip = tips.first().copied().filter(|h| !h.is_zero()).unwrap_or(selected_tip);
    if chain_tip.is_zero() {
        return Err(VerifyError::NoUsableTip);
    }
    info!(tip = %chain_tip, "resolved chain tip");

    // Phase 3: genesis header recomputation.
    let genesis_header =
        fetch_header(current_store, GENESIS_HASH).ok_or(VerifyError::GenesisHeaderMissing(GENESIS_HASH))?;
    let recomputed_genesis_hash = kgp_core::header_hash(&genesis_header);
    if recomputed_genesis_hash != GENESIS_HASH {
        return Err(VerifyError::GenesisHashMismatch {
            expected: GENESIS_HASH,
            actual: recomputed_genesis_hash,
        });
    }
    info!("genesis header hash verified");

    // Phase 4: genesis coinbase merkle check.
    let coinbase = genesis_coinbase_transaction();
    let computed_merkle = kgp_core::transaction_hash(&coinbase);
    if computed_merkle != genesis_header.hash_merkle_root {
        return Err(VerifyError::GenesisMerkleMismatch {
            computed: computed_merkle,
            claimed: genesis_header.hash_merkle_root,
        });
    }
    info!("genesis coinbase merkle verified");

    // Phase 5: chain walk from the tip to genesis.
    let walk_steps = walk_to(current_store, chain_tip, GENESIS_HASH)?;
    info!(steps = walk_steps, "chain walk reached genesis");

    // Phase 6: UTXO commitment classification (informational).
    let utxo_classification = if genesis_header.utxo_commitment.is_zero() {
        UtxoClassification::OriginalGenesis
    } else {
        UtxoClassification::HardwiredGenesisWithCheckpoint
    };

    // Phase 7: optional pre-checkpoint verification.
    let pre_checkpoint = match pre_checkpoint_store {
        None => PreCheckpointOutcome::Skipped,
        Some(snapshot) => {
            let checkpoint_header = fetch_header(snapshot, CHECKPOINT_HASH)
                .ok_or(VerifyError::CheckpointHeaderMissing(CHECKPOINT_HASH))?;
            if checkpoint_header.utxo_commitment != genesis_header.utxo_commitment {
                return Err(VerifyError::UtxoCommitmentMismatch {
                    genesis: genesis_header.utxo_commitment,
                    checkpoint: checkpoint_header.utxo_commitment,
                });
            }

            let steps = walk_to(snapshot, CHECKPOINT_HASH, ORIGINAL_GENESIS_HASH)?;

            let original_genesis_header = fetch_header(snapshot, ORIGINAL_GENESIS_HASH)
                .ok_or(VerifyError::OriginalGenesisHeaderMissing(ORIGINAL_GENESIS_HASH))?;
            if original_genesis_header.utxo_commitment != EMPTY_MUHASH {
                return Err(VerifyError::EmptyMuhashMismatch {
                    expected: EMPTY_MUHASH,
                    actual: original_genesis_header.utxo_commitment,
                });
            }
            info!(steps, "pre-checkpoint chain verified to original genesis");
            PreCheckpointOutcome::Verified { walk_steps: steps }
        }
    };

    Ok(VerificationReport {
        genesis_hash: GENESIS_HASH,
        chain_tip,
        walk_steps,
        utxo_classification,
        pre_checkpoint,
        genesis_bits: genesis_header.bits,
    })
}
