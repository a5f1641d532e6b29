// Modified in 2025 from the original version
// Original source licensed under the Apache License 2.0

//! Owned, capacity-bounded collection types for SSZ.
//!
//! [`FixedVector<T, N>`] corresponds to `Vector[T, N]`: exactly `N` items, always present.
//! [`VariableList<T, N>`] corresponds to `List[T, N]`: zero to `N` items, length-prefixed in the
//! variable-length portion of a container. Both wrap a `Vec<T>` and enforce their bound at
//! construction. See [`view`] for zero-copy reference-backed counterparts that avoid allocating
//! on decode, and [`optional`] for the `Optional[T]` type used by stable containers.

pub mod optional;
pub mod tree_hash;
pub mod view;

#[cfg(feature = "serde")]
pub mod serde_utils;

use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use ssz::{BYTES_PER_LENGTH_OFFSET, Decode, DecodeError, Encode, SszEncoder};
use ::tree_hash::{Hash256, PackedEncoding, Sha256Hasher, TreeHash, TreeHashType, mix_in_length_with_hasher};

pub use optional::Optional;
pub use ssz::{BitList, BitVector, Fixed, Variable};

use crate::tree_hash::vec_tree_hash_root;

/// Errors arising from the construction or use of [`FixedVector`] and [`VariableList`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index was out of the bounds of a list or vector.
    #[error("index {i} out of bounds for length {len}")]
    OutOfBounds {
        /// The offending index.
        i: usize,
        /// The length of the collection that was indexed.
        len: usize,
    },
    /// Too many values were supplied for a bounded collection.
    #[error("too many values: got {len}, maximum is {max}")]
    TooManyValues {
        /// The number of values supplied.
        len: usize,
        /// The maximum the collection can hold.
        max: usize,
    },
    /// A fixed-length collection was given the wrong number of values.
    #[error("wrong number of values: got {len}, expected exactly {expected}")]
    WrongLength {
        /// The number of values supplied.
        len: usize,
        /// The number of values required.
        expected: usize,
    },
}

/// Emulates a SSZ `Vector[T, N]`: a homogeneous, fixed-length collection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FixedVector<T, const N: usize> {
    vec: Vec<T>,
}

impl<T, const N: usize> FixedVector<T, N> {
    /// Returns `Ok` if `vec.len() == N`.
    pub fn new(vec: Vec<T>) -> Result<Self, Error> {
        if vec.len() == N {
            Ok(Self { vec })
        } else {
            Err(Error::WrongLength {
                len: vec.len(),
                expected: N,
            })
        }
    }

    /// The number of items the vector holds, always `N`.
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// `true` if `N == 0`.
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// The fixed capacity of this vector type.
    pub const fn capacity() -> usize {
        N
    }

    /// Returns an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }

    /// Consumes `self`, returning the underlying `Vec<T>`.
    pub fn into_vec(self) -> Vec<T> {
        self.vec
    }
}

/// Infallibly converts a `Vec<T>` into a `FixedVector<T, N>`, truncating if too long and padding
/// with `T::default()` if too short.
impl<T: Default + Clone, const N: usize> From<Vec<T>> for FixedVector<T, N> {
    fn from(mut vec: Vec<T>) -> Self {
        vec.resize(N, T::default());
        Self { vec }
    }
}

impl<T, const N: usize> Deref for FixedVector<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.vec
    }
}

impl<T, const N: usize> DerefMut for FixedVector<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.vec
    }
}

impl<T, const N: usize, I: SliceIndex<[T]>> Index<I> for FixedVector<T, N> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.vec[index]
    }
}

impl<T, const N: usize, I: SliceIndex<[T]>> IndexMut<I> for FixedVector<T, N> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.vec[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}

impl<T, const N: usize> IntoIterator for FixedVector<T, N> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}

impl<T: Encode, const N: usize> Encode for FixedVector<T, N> {
    fn is_ssz_fixed_len() -> bool {
        T::is_ssz_fixed_len()
    }

    fn ssz_fixed_len() -> usize {
        if T::is_ssz_fixed_len() {
            T::ssz_fixed_len() * N
        } else {
            BYTES_PER_LENGTH_OFFSET
        }
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        if T::is_ssz_fixed_len() {
            buf.reserve(self.ssz_bytes_len());
            for item in &self.vec {
                item.ssz_append(buf);
            }
        } else {
            let mut encoder = SszEncoder::container(buf, self.vec.len() * BYTES_PER_LENGTH_OFFSET);
            for item in &self.vec {
                encoder.append(item);
            }
            encoder.finalize();
        }
    }

    fn ssz_bytes_len(&self) -> usize {
        if T::is_ssz_fixed_len() {
            T::ssz_fixed_len() * self.vec.len()
        } else {
            let len = self
                .vec
                .iter()
                .map(|item| item.ssz_bytes_len())
                .sum::<usize>();
            len + BYTES_PER_LENGTH_OFFSET * self.vec.len()
        }
    }
}

impl<T: Decode, const N: usize> Decode for FixedVector<T, N> {
    fn is_ssz_fixed_len() -> bool {
        T::is_ssz_fixed_len()
    }

    fn ssz_fixed_len() -> usize {
        if T::is_ssz_fixed_len() {
            T::ssz_fixed_len() * N
        } else {
            BYTES_PER_LENGTH_OFFSET
        }
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let items = if T::is_ssz_fixed_len() {
            let item_len = T::ssz_fixed_len();
            if item_len == 0 {
                return Err(DecodeError::ZeroLengthItem);
            }
            if !bytes.len().is_multiple_of(item_len) {
                return Err(DecodeError::InvalidByteLength {
                    len: bytes.len(),
                    expected: (bytes.len() / item_len) * item_len,
                });
            }
            bytes
                .chunks(item_len)
                .map(T::from_ssz_bytes)
                .collect::<Result<Vec<_>, _>>()?
        } else if bytes.is_empty() {
            vec![]
        } else {
            ssz::decode_list_of_variable_length_items(bytes)?
        };

        Self::new(items).map_err(|e| DecodeError::BytesInvalid(format!("{e:?}")))
    }
}

impl<T, const N: usize> TreeHash for FixedVector<T, N>
where
    T: TreeHash,
{
    fn tree_hash_type() -> TreeHashType {
        TreeHashType::Vector
    }

    fn tree_hash_packed_encoding(&self) -> PackedEncoding {
        unreachable!("Vector should never be packed.")
    }

    fn tree_hash_packing_factor() -> usize {
        unreachable!("Vector should never be packed.")
    }

    fn tree_hash_root(&self) -> Hash256 {
        vec_tree_hash_root::<T, N>(&self.vec)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a, T: arbitrary::Arbitrary<'a>, const N: usize> arbitrary::Arbitrary<'a> for FixedVector<T, N> {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let vec = (0..N)
            .map(|_| T::arbitrary(u))
            .collect::<arbitrary::Result<Vec<_>>>()?;
        Self::new(vec).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}

/// Emulates a SSZ `List[T, N]`: a homogeneous, variable-length collection bounded by `N`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VariableList<T, const N: usize> {
    vec: Vec<T>,
}

impl<T, const N: usize> VariableList<T, N> {
    /// Returns `Ok` if `vec.len() <= N`.
    pub fn new(vec: Vec<T>) -> Result<Self, Error> {
        if vec.len() <= N {
            Ok(Self { vec })
        } else {
            Err(Error::TooManyValues {
                len: vec.len(),
                max: N,
            })
        }
    }

    /// The number of items currently held.
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// `true` if the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// The maximum number of items this list type can hold.
    pub const fn max_len() -> usize {
        N
    }

    /// Returns an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }

    /// Consumes `self`, returning the underlying `Vec<T>`.
    pub fn into_vec(self) -> Vec<T> {
        self.vec
    }
}

/// Infallibly converts a `Vec<T>` into a `VariableList<T, N>`, truncating if too long.
impl<T, const N: usize> From<Vec<T>> for VariableList<T, N> {
    fn from(mut vec: Vec<T>) -> Self {
        vec.truncate(N);
        Self { vec }
    }
}

impl<T, const N: usize> Deref for VariableList<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.vec
    }
}

impl<T, const N: usize> DerefMut for VariableList<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.vec
    }
}

impl<T, const N: usize, I: SliceIndex<[T]>> Index<I> for VariableList<T, N> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.vec[index]
    }
}

impl<T, const N: usize, I: SliceIndex<[T]>> IndexMut<I> for VariableList<T, N> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.vec[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a VariableList<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}

impl<T, const N: usize> IntoIterator for VariableList<T, N> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}

impl<T: Encode, const N: usize> Encode for VariableList<T, N> {
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        if T::is_ssz_fixed_len() {
            buf.reserve(self.ssz_bytes_len());
            for item in &self.vec {
                item.ssz_append(buf);
            }
        } else {
            let mut encoder = SszEncoder::container(buf, self.vec.len() * BYTES_PER_LENGTH_OFFSET);
            for item in &self.vec {
                encoder.append(item);
            }
            encoder.finalize();
        }
    }

    fn ssz_bytes_len(&self) -> usize {
        if T::is_ssz_fixed_len() {
            T::ssz_fixed_len() * self.vec.len()
        } else {
            let len = self
                .vec
                .iter()
                .map(|item| item.ssz_bytes_len())
                .sum::<usize>();
            len + BYTES_PER_LENGTH_OFFSET * self.vec.len()
        }
    }
}

impl<T: Decode, const N: usize> Decode for VariableList<T, N> {
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let items = if bytes.is_empty() {
            vec![]
        } else if T::is_ssz_fixed_len() {
            let item_len = T::ssz_fixed_len();
            if item_len == 0 {
                return Err(DecodeError::ZeroLengthItem);
            }
            if !bytes.len().is_multiple_of(item_len) {
                return Err(DecodeError::InvalidByteLength {
                    len: bytes.len(),
                    expected: (bytes.len() / item_len) * item_len,
                });
            }
            bytes
                .chunks(item_len)
                .map(T::from_ssz_bytes)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            ssz::decode_list_of_variable_length_items(bytes)?
        };

        Self::new(items).map_err(|e| DecodeError::BytesInvalid(format!("{e:?}")))
    }
}

impl<T, const N: usize> TreeHash for VariableList<T, N>
where
    T: TreeHash,
{
    fn tree_hash_type() -> TreeHashType {
        TreeHashType::List
    }

    fn tree_hash_packed_encoding(&self) -> PackedEncoding {
        unreachable!("List should never be packed.")
    }

    fn tree_hash_packing_factor() -> usize {
        unreachable!("List should never be packed.")
    }

    fn tree_hash_root(&self) -> Hash256 {
        let root = vec_tree_hash_root::<T, N>(&self.vec);
        mix_in_length_with_hasher::<Sha256Hasher>(&root, self.vec.len())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a, T: arbitrary::Arbitrary<'a>, const N: usize> arbitrary::Arbitrary<'a> for VariableList<T, N> {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=N)?;
        let vec = (0..len)
            .map(|_| T::arbitrary(u))
            .collect::<arbitrary::Result<Vec<_>>>()?;
        Self::new(vec).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}
