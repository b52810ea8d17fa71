//! Core data model, byte reader, header codec, and domain-separated hasher
//! for the genesis proof verifier.
//!
//! This crate is pure computation: no I/O, no storage access. It decodes
//! already-fetched bytes and recomputes hashes over them; [`kgp_store`] is
//! responsible for getting bytes out of a database or sidecar file.

pub mod codec;
pub mod constants;
pub mod difficulty;
pub mod error;
pub mod hash;
pub mod reader;
pub mod types;

pub use codec::{decode_header, encode_header};
pub use error::CodecError;
pub use hash::{header_hash, transaction_hash};
pub use types::{BlueWork, Hash, Header, OutPoint, ParentLevel, Transaction};
