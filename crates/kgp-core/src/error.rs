//! Error types for byte-level decoding.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("truncated: needed {needed} bytes, had {available}")]
    Truncated { needed: usize, available: usize },
    #[error("malformed header: {reason}")]
    MalformedHeader { reason: String },
}
