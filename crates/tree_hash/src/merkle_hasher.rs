//! Incremental merkle hasher.
//!
//! Accepts a known number of leaves up front, then bytes are written into those leaves in
//! order. `finish` pads any unwritten leaves with the zero hash and merkleizes the result.

use std::marker::PhantomData;

use thiserror::Error;

use crate::{Sha256Hasher, TreeHashDigest};

/// Errors that can occur while feeding bytes into a [`MerkleHasher`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// More bytes were written than the hasher has capacity for.
    #[error("hasher has {leaves} leaves, cannot accept byte at position {byte_i}")]
    NotEnoughLeaves {
        /// The number of leaves the hasher was constructed with.
        leaves: usize,
        /// The byte offset that overflowed the hasher's capacity.
        byte_i: usize,
    },
}

/// Merkleizes bytes that are pushed into it incrementally.
#[derive(Debug)]
pub struct MerkleHasher<H = Sha256Hasher> {
    leaves: usize,
    buffer: Vec<u8>,
    _phantom: PhantomData<H>,
}

impl<H: TreeHashDigest> MerkleHasher<H> {
    /// Instantiates a new hasher for a tree with `leaves` leaf chunks.
    ///
    /// `leaves` need not be a power of two; `finish` pads up to the next one.
    pub fn with_leaves(leaves: usize) -> Self {
        let leaves = std::cmp::max(leaves, 1);
        Self {
            leaves,
            buffer: Vec::with_capacity(leaves * H::HASH_SIZE),
            _phantom: PhantomData,
        }
    }

    /// Writes `bytes` into the next available leaf positions.
    ///
    /// Returns `Err` if `bytes` would overflow the leaves this hasher was constructed with.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let byte_i = self.buffer.len() + bytes.len();
        if byte_i > self.leaves * H::HASH_SIZE {
            return Err(Error::NotEnoughLeaves {
                leaves: self.leaves,
                byte_i,
            });
        }
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Pads any remaining leaves with zero bytes and returns the merkle root.
    pub fn finish(self) -> Result<H::Output, Error> {
        let total_leaves = self.leaves.next_power_of_two();

        let mut level: Vec<H::Output> = Vec::with_capacity(total_leaves);
        for i in 0..total_leaves {
            let start = i * H::HASH_SIZE;
            if start >= self.buffer.len() {
                level.push(H::get_zero_hash(0));
                continue;
            }
            let end = std::cmp::min(start + H::HASH_SIZE, self.buffer.len());
            if end - start == H::HASH_SIZE {
                level.push(H::from_bytes(&self.buffer[start..end]));
            } else {
                let mut chunk = vec![0u8; H::HASH_SIZE];
                chunk[..end - start].copy_from_slice(&self.buffer[start..end]);
                level.push(H::from_bytes(&chunk));
            }
        }

        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len() / 2);
            for pair in level.chunks_exact(2) {
                next.push(H::hash32_concat(pair[0].as_ref(), pair[1].as_ref()));
            }
            level = next;
        }

        Ok(level.into_iter().next().unwrap_or_else(|| H::get_zero_hash(0)))
    }
}
