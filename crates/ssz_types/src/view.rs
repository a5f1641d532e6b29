//! Zero-copy view types for SSZ types.
//!
//! This module provides zero-copy reference-backed views for [`VariableList`] and [`FixedVector`].
//! These views allow decoding SSZ-encoded data without allocating or copying the underlying bytes.
//!
//! ## Example
//!
//! ```rust
//! use ssz::Encode;
//! use ssz::view::DecodeView;
//! use ssz_types::view::VariableListRef;
//!
//! // Encode a list of u64 values
//! let values = vec![1u64, 2, 3, 4];
//! let mut encoded = Vec::new();
//! for v in &values {
//!     v.ssz_append(&mut encoded);
//! }
//!
//! // Create a zero-copy view
//! let view = VariableListRef::<u64, 10>::from_ssz_bytes(&encoded).unwrap();
//! assert_eq!(view.len(), 4);
//!
//! // Convert to owned when needed
//! let owned = view.to_owned().unwrap();
//! assert_eq!(&owned[..], &values[..]);
//! ```

use crate::{Error, FixedVector, VariableList};
use ssz::DecodeError;
use ssz::view::{DecodeView, ListRef, VectorRef};
use ssz_primitives::{FixedBytes, U128, U256};
use tree_hash::{PackedEncoding, TreeHash, TreeHashDigest, TreeHashType};

/// A zero-copy reference to a [`VariableList<T, N>`](VariableList).
///
/// This type provides a borrowed view over an SSZ-encoded variable-length list without
/// allocating or copying the underlying bytes.
///
/// ## Example
///
/// ```rust
/// use ssz::Encode;
/// use ssz::view::DecodeView;
/// use ssz_types::view::VariableListRef;
/// use ssz_types::VariableList;
///
/// // Encode a variable list
/// let list: VariableList<u64, 10> = vec![1, 2, 3].into();
/// let encoded = list.as_ssz_bytes();
///
/// // Create a zero-copy view
/// let view = VariableListRef::<u64, 10>::from_ssz_bytes(&encoded).unwrap();
/// assert_eq!(view.len(), 3);
///
/// // Iterate without allocations
/// for item in view.iter() {
///     let value = item.unwrap();
///     println!("Value: {}", value);
/// }
///
/// // Convert to owned
/// let owned = view.to_owned().unwrap();
/// assert_eq!(list, owned);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct VariableListRef<'a, TRef, const N: usize> {
    /// The underlying list reference.
    inner: ListRef<'a, TRef>,
}

impl<'a, TRef, const N: usize> VariableListRef<'a, TRef, N> {
    /// Creates a new `VariableListRef` from raw SSZ bytes.
    ///
    /// - `bytes`: the SSZ-encoded list bytes.
    /// - `is_fixed_len`: whether items have fixed length.
    /// - `item_size`: for fixed-length items, the size of each item.
    pub fn new(bytes: &'a [u8], is_fixed_len: bool, item_size: usize) -> Result<Self, DecodeError> {
        let inner = ListRef::new(bytes, is_fixed_len, item_size)?;

        // Validate that the list doesn't exceed the maximum length
        if inner.len() > N {
            return Err(DecodeError::BytesInvalid(format!(
                "VariableList length {} exceeds maximum {}",
                inner.len(),
                N
            )));
        }

        Ok(Self { inner })
    }

    /// Returns the number of items in the list.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the maximum length (type-level constant `N`).
    pub const fn max_len() -> usize {
        N
    }

    /// Returns the underlying bytes.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.inner.as_bytes()
    }

    /// Returns an [`Iterator`] over the list items.
    ///
    /// Each item is decoded lazily as the iterator advances.
    pub fn iter(&self) -> impl Iterator<Item = Result<TRef, DecodeError>> + '_
    where
        TRef: DecodeView<'a>,
    {
        self.inner.iter()
    }
}

impl<'a, TRef, const N: usize> VariableListRef<'a, TRef, N>
where
    TRef: DecodeView<'a>,
{
    /// Converts this view to an owned [`VariableList<T, N>`](VariableList).
    ///
    /// This method collects all items from the iterator and constructs an owned list.
    pub fn to_owned<T>(&self) -> Result<VariableList<T, N>, Error>
    where
        TRef: ToOwnedSsz<T>,
    {
        let items: Result<Vec<T>, _> = self
            .iter()
            .map(|item_result| item_result.map(|item| item.to_owned()))
            .collect();

        let items = items.map_err(|_| Error::OutOfBounds { i: 0, len: N })?;

        VariableList::new(items)
    }
}

/// Convert a view type to its owned equivalent.
///
/// This trait bridges between zero-copy view types (like [`u64`] from [`DecodeView`])
/// and their owned counterparts that can be collected into containers.
pub trait ToOwnedSsz<T> {
    /// Converts this view to an owned value.
    fn to_owned(&self) -> T;
}

/// Implement [`ToOwnedSsz`] for primitive types (they implement [`Copy`]).
macro_rules! impl_to_owned_copy {
    ($($t:ty),*) => {
        $(
            impl ToOwnedSsz<$t> for $t {
                fn to_owned(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_to_owned_copy!(u8, u16, u32, u64, u128, usize, bool);

/// Implement [`ToOwnedSsz`] for [`ssz_primitives`] types.
impl<const N: usize> ToOwnedSsz<FixedBytes<N>> for FixedBytes<N> {
    fn to_owned(&self) -> FixedBytes<N> {
        *self
    }
}

impl ToOwnedSsz<U256> for U256 {
    fn to_owned(&self) -> U256 {
        *self
    }
}

impl ToOwnedSsz<U128> for U128 {
    fn to_owned(&self) -> U128 {
        *self
    }
}

impl<'a, TRef: DecodeView<'a> + SszFixedLen, const N: usize> DecodeView<'a>
    for VariableListRef<'a, TRef, N>
where
    TRef: 'a,
{
    fn from_ssz_bytes(bytes: &'a [u8]) -> Result<Self, DecodeError> {
        // Determine if items are fixed-length
        let is_fixed_len = TRef::is_ssz_fixed_len();
        let item_size = if is_fixed_len {
            TRef::ssz_fixed_len()
        } else {
            0
        };

        // For empty lists, ListRef validation requires a non-zero item_size if is_fixed_len is true
        // Since there are no items, we use a placeholder value
        let (effective_is_fixed, effective_size) = if bytes.is_empty() {
            (true, 1) // Use fixed-length with size 1 as placeholder
        } else {
            (is_fixed_len, item_size)
        };

        Self::new(bytes, effective_is_fixed, effective_size)
    }
}

// Helper trait to determine fixed-length status for DecodeView types
trait SszFixedLen {
    fn is_ssz_fixed_len() -> bool;
    fn ssz_fixed_len() -> usize;
}

macro_rules! impl_ssz_fixed_len_primitive {
    ($($t:ty, $size:expr),*) => {
        $(
            impl SszFixedLen for $t {
                fn is_ssz_fixed_len() -> bool {
                    true
                }
                fn ssz_fixed_len() -> usize {
                    $size
                }
            }
        )*
    };
}

impl_ssz_fixed_len_primitive!(u8, 1, u16, 2, u32, 4, u64, 8, u128, 16, usize, 8, bool, 1);

impl<const N: usize> SszFixedLen for FixedBytes<N> {
    fn is_ssz_fixed_len() -> bool {
        true
    }
    fn ssz_fixed_len() -> usize {
        N
    }
}

impl SszFixedLen for U256 {
    fn is_ssz_fixed_len() -> bool {
        true
    }
    fn ssz_fixed_len() -> usize {
        32
    }
}

impl SszFixedLen for U128 {
    fn is_ssz_fixed_len() -> bool {
        true
    }
    fn ssz_fixed_len() -> usize {
        16
    }
}

/// A zero-copy reference to a [`FixedVector<T, N>`](FixedVector).
///
/// This type provides a borrowed view over an SSZ-encoded fixed-length vector without
/// allocating or copying the underlying bytes.
///
/// ## Example
///
/// ```rust
/// use ssz::Encode;
/// use ssz::view::DecodeView;
/// use ssz_types::view::FixedVectorRef;
/// use ssz_types::FixedVector;
///
/// // Encode a fixed vector
/// let vec: FixedVector<u64, 4> = vec![1, 2, 3, 4].into();
/// let encoded = vec.as_ssz_bytes();
///
/// // Create a zero-copy view
/// let view = FixedVectorRef::<u64, 4>::from_ssz_bytes(&encoded).unwrap();
/// assert_eq!(view.len(), 4);
///
/// // Access individual elements
/// assert_eq!(view.get(0).unwrap(), 1);
/// assert_eq!(view.get(3).unwrap(), 4);
///
/// // Convert to owned
/// let owned = view.to_owned().unwrap();
/// assert_eq!(vec, owned);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct FixedVectorRef<'a, TRef, const N: usize> {
    /// The underlying vector reference.
    inner: VectorRef<'a, TRef, N>,
}

impl<'a, TRef, const N: usize> FixedVectorRef<'a, TRef, N> {
    /// Creates a new [`FixedVectorRef`] from raw SSZ bytes.
    ///
    /// - `bytes`: the SSZ-encoded vector bytes.
    /// - `is_fixed_len`: whether items have fixed length.
    /// - `item_size`: for fixed-length items, the size of each item.
    pub fn new(bytes: &'a [u8], is_fixed_len: bool, item_size: usize) -> Result<Self, DecodeError> {
        Ok(Self {
            inner: VectorRef::new(bytes, is_fixed_len, item_size)?,
        })
    }

    /// Returns the length of the vector (always `N`).
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns whether the vector is empty (always `false` unless `N == 0`).
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.inner.as_bytes()
    }

    /// Returns an [`Iterator`] over the vector items.
    pub fn iter(&self) -> impl Iterator<Item = Result<TRef, DecodeError>> + '_
    where
        TRef: DecodeView<'a>,
    {
        self.inner.iter()
    }

    /// Gets the item at the specified index.
    pub fn get(&self, index: usize) -> Result<TRef, DecodeError>
    where
        TRef: DecodeView<'a>,
    {
        self.inner.get(index)
    }
}

impl<'a, TRef, const N: usize> FixedVectorRef<'a, TRef, N>
where
    TRef: DecodeView<'a>,
{
    /// Converts this view to an owned [`FixedVector<T, N>`](FixedVector).
    ///
    /// This method collects all items from the iterator and constructs an owned vector.
    pub fn to_owned<T>(&self) -> Result<FixedVector<T, N>, Error>
    where
        TRef: ToOwnedSsz<T>,
    {
        let items: Result<Vec<T>, _> = self
            .iter()
            .map(|item_result| item_result.map(|item| item.to_owned()))
            .collect();

        let items = items.map_err(|_| Error::OutOfBounds { i: 0, len: N })?;

        FixedVector::new(items)
    }
}

impl<'a, TRef: DecodeView<'a> + SszFixedLen, const N: usize> DecodeView<'a>
    for FixedVectorRef<'a, TRef, N>
where
    TRef: 'a,
{
    fn from_ssz_bytes(bytes: &'a [u8]) -> Result<Self, DecodeError> {
        // Determine if items are fixed-length
        let is_fixed_len = TRef::is_ssz_fixed_len();
        let item_size = if is_fixed_len {
            TRef::ssz_fixed_len()
        } else {
            0
        };

        Self::new(bytes, is_fixed_len, item_size)
    }
}

impl<'a, TRef, const N: usize, H> TreeHash<H> for VariableListRef<'a, TRef, N>
where
    TRef: DecodeView<'a> + ToOwnedSsz<TRef>,
    TRef: TreeHash<H>,
    H: TreeHashDigest,
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

    fn tree_hash_root(&self) -> H::Output {
        let owned = self.to_owned().expect("TreeHash conversion failed");
        owned.tree_hash_root()
    }
}

impl<'a, TRef, const N: usize, H> TreeHash<H> for FixedVectorRef<'a, TRef, N>
where
    TRef: DecodeView<'a> + ToOwnedSsz<TRef>,
    TRef: TreeHash<H>,
    H: TreeHashDigest,
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

    fn tree_hash_root(&self) -> H::Output {
        let owned = self.to_owned().expect("TreeHash conversion failed");
        owned.tree_hash_root()
    }
}
