//! Positional little-endian reader over an immutable byte slice.
//!
//! All reads are bounds-checked; no allocation beyond copying into typed
//! values. Used only by [`crate::codec`].

use crate::error::CodecError;
use crate::types::{BlueWork, Hash};

pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn read_fixed(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < n {
            return Err(CodecError::Truncated {
                needed: n,
                available: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u16_le(&mut self) -> Result<u16, CodecError> {
        let bytes = self.read_fixed(2)?;
        Ok(u16::from_le_bytes(bytes.try_into().unwrap()))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, CodecError> {
        let bytes = self.read_fixed(4)?;
        Ok(u32::from_le_bytes(bytes.try_into().unwrap()))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, CodecError> {
        let bytes = self.read_fixed(8)?;
        Ok(u64::from_le_bytes(bytes.try_into().unwrap()))
    }

    pub fn read_hash(&mut self) -> Result<Hash, CodecError> {
        let bytes = self.read_fixed(32)?;
        let mut out = [0u8; 32];
        out.copy_from_slice(bytes);
        Ok(Hash(out))
    }

    pub fn read_bluework(&mut self) -> Result<BlueWork, CodecError> {
        let bytes = self.read_fixed(24)?;
        let mut out = [0u8; 24];
        out.copy_from_slice(bytes);
        Ok(BlueWork(out))
    }
}
