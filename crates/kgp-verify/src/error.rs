//! Error taxonomy for the chain walker and verification driver (§7).
use kgp_core::types::Hash;
use thiserror::Error;

/// Failures raised while walking a pruning-point chain (C6). Any failure
/// is immediately terminal — the walker never retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    #[error("header missing for {0}")]
    HeaderMissing(Hash),
    #[error("hash mismatch: expected {expected}, recomputed {actual}")]
    HashMismatch { expected: Hash, actual: Hash },
    #[error("malformed header at {hash}: {reason}")]
    MalformedHeader { hash: Hash, reason: String },
    #[error("chain walk exceeded {0} steps")]
    ChainTooLong(u32),
}

/// Errors from the seven-phase verification driver (C7).
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("cannot open store at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: kgp_store::StoreError,
    },
    #[error("genesis header not found at {0}")]
    GenesisHeaderMissing(Hash),
    #[error("genesis header hash mismatch: expected {expected}, recomputed {actual}")]
    GenesisHashMismatch { expected: Hash, actual: Hash },
    #[error("genesis coinbase merkle mismatch: computed {computed}, header claims {claimed}")]
    GenesisMerkleMismatch { computed: Hash, claimed: Hash },
    #[error("no usable chain tip: both tips and selected tip are absent")]
    NoUsableTip,
    #[error("chain walk broken: {0}")]
    ChainBroken(#[from] WalkError),
    #[error("UTXO commitment mismatch between checkpoint and genesis: genesis={genesis}, checkpoint={checkpoint}")]
    UtxoCommitmentMismatch { genesis: Hash, checkpoint: Hash },
    #[error("original genesis UTXO commitment {actual} does not match empty MuHash {expected}")]
    EmptyMuhashMismatch { expected: Hash, actual: Hash },
    #[error("checkpoint header not found at {0}")]
    CheckpointHeaderMissing(Hash),
    #[error("original genesis header not found at {0}")]
    OriginalGenesisHeaderMissing(Hash),
}
