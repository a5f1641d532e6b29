//! Merkleization of a flat byte buffer, padding out to a minimum leaf count.

use crate::{MerkleHasher, TreeHashDigest};

/// Merkleizes `bytes`, treating it as a sequence of `H::HASH_SIZE`-byte leaves.
///
/// The leaf count is `max(bytes.len() / H::HASH_SIZE, minimum_leaf_count)`, rounded up to the
/// next power of two. Any partial or missing leaves are zero-padded.
pub fn merkleize_padded_with_hasher<H: TreeHashDigest>(
    bytes: &[u8],
    minimum_leaf_count: usize,
) -> H::Output {
    let leaves = std::cmp::max(bytes.len().div_ceil(H::HASH_SIZE), minimum_leaf_count);
    let leaves = std::cmp::max(leaves, 1);

    let mut hasher = MerkleHasher::<H>::with_leaves(leaves);
    hasher
        .write(bytes)
        .expect("leaf count was computed from the byte length");
    hasher
        .finish()
        .expect("hasher was written to exactly its capacity")
}
