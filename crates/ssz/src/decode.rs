// Modified in 2025 from the original version
// Original source licensed under the Apache License 2.0

//! SSZ decoding (deserialization).

use thiserror::Error;

use crate::{BYTES_PER_LENGTH_OFFSET, BYTES_PER_UNION_SELECTOR, MAX_UNION_SELECTOR, UnionSelector};

/// Returned when SSZ decoding fails.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum DecodeError {
    /// The bytes supplied were not the expected length for a fixed-length type.
    #[error("invalid byte length {len}, expected {expected}")]
    InvalidByteLength {
        /// The given length.
        len: usize,
        /// The expected length.
        expected: usize,
    },

    /// A length-prefix did not match the expected value.
    #[error("invalid length prefix {len}, expected {expected}")]
    InvalidLengthPrefix {
        /// The given length.
        len: usize,
        /// The expected length.
        expected: usize,
    },

    /// An index was out of bounds of the item being decoded.
    #[error("out of bounds index {i}")]
    OutOfBoundsByte {
        /// The out-of-bounds index.
        i: usize,
    },

    /// The bytes could not be decoded into a valid instance of the target type.
    #[error("bytes invalid: {0}")]
    BytesInvalid(String),

    /// A list or vector item had zero length, which is not permitted for fixed-length items.
    #[error("item has zero length")]
    ZeroLengthItem,

    /// The first offset in an offset table pointed into the fixed-length portion of a container.
    #[error("offset {0} points into the fixed-length portion")]
    OffsetIntoFixedPortion(usize),

    /// Offsets in an offset table must be non-decreasing.
    #[error("offset {0} is less than a preceding offset")]
    OffsetsAreDecreasing(usize),

    /// An offset pointed beyond the end of the container.
    #[error("offset {0} is out of bounds")]
    OffsetOutOfBounds(usize),

    /// A list's fixed-length byte region was not a multiple of `BYTES_PER_LENGTH_OFFSET`.
    #[error("list has invalid fixed-bytes length {0}")]
    InvalidListFixedBytesLen(usize),

    /// A union's selector byte was not a recognized variant.
    #[error("union selector {0} is invalid")]
    UnionSelectorInvalid(u8),

    /// Decoding or validating a `StableContainer`/`Profile` failed.
    #[error(transparent)]
    StableContainer(#[from] crate::stable_container::StableContainerError),
}

/// Provides SSZ decoding (deserialization) for some type.
///
/// See the crate-level documentation for more info.
pub trait Decode: Sized {
    /// Returns `true` if this object has a fixed-length.
    ///
    /// I.e., there are no "variable" fields that depend on runtime values of this object.
    fn is_ssz_fixed_len() -> bool;

    /// The number of bytes this object occupies in the fixed-length portion of an SSZ container.
    fn ssz_fixed_len() -> usize {
        BYTES_PER_LENGTH_OFFSET
    }

    /// Attempts to decode `Self` from `bytes`, returning a `DecodeError` on failure.
    ///
    /// The supplied bytes must be the exact encoding of `Self` (e.g. there must not be any
    /// trailing bytes).
    fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError>;
}

/// Reads a little-endian `u32` length offset from the first four bytes of `bytes`.
pub fn read_offset(bytes: &[u8]) -> Result<usize, DecodeError> {
    read_four_bytes(bytes).map(|b| u32::from_le_bytes(b) as usize)
}

fn read_four_bytes(bytes: &[u8]) -> Result<[u8; BYTES_PER_LENGTH_OFFSET], DecodeError> {
    bytes
        .get(0..BYTES_PER_LENGTH_OFFSET)
        .and_then(|s| s.try_into().ok())
        .ok_or(DecodeError::InvalidByteLength {
            len: bytes.len(),
            expected: BYTES_PER_LENGTH_OFFSET,
        })
}

/// Checks that an offset read from an offset table is internally consistent, returning the offset
/// if so.
///
/// - `offset`: the offset being checked.
/// - `previous_offset`: the offset immediately preceding `offset` in the table, if any.
/// - `num_bytes`: the total length of the container being decoded.
/// - `num_fixed_bytes`: if `offset` is the first entry in the table, the size of the fixed-length
///   portion that precedes the offset table (`offset` must equal this exactly).
pub fn sanitize_offset(
    offset: usize,
    previous_offset: Option<usize>,
    num_bytes: usize,
    num_fixed_bytes: Option<usize>,
) -> Result<usize, DecodeError> {
    if let Some(num_fixed_bytes) = num_fixed_bytes
        && previous_offset.is_none()
        && num_fixed_bytes != offset
    {
        Err(DecodeError::OffsetIntoFixedPortion(offset))
    } else if num_bytes < offset {
        Err(DecodeError::OffsetOutOfBounds(offset))
    } else if previous_offset.is_some_and(|prev| prev > offset) {
        Err(DecodeError::OffsetsAreDecreasing(offset))
    } else {
        Ok(offset)
    }
}

/// Splits `bytes` into a union selector and the remaining body bytes.
pub fn split_union_bytes(bytes: &[u8]) -> Result<(UnionSelector, &[u8]), DecodeError> {
    let selector_byte = *bytes
        .first()
        .ok_or(DecodeError::InvalidByteLength { len: 0, expected: 1 })?;
    let selector = UnionSelector::new(selector_byte)
        .ok_or(DecodeError::UnionSelectorInvalid(selector_byte))?;
    Ok((selector, &bytes[BYTES_PER_UNION_SELECTOR..]))
}

/// A field registered with a [`SszDecoderBuilder`].
#[derive(Clone, Copy)]
enum DecodeHint {
    Fixed(usize),
    Variable,
}

/// Builds an [`SszDecoder`] by recording the fixed/variable layout of a container's fields before
/// any are decoded.
pub struct SszDecoderBuilder<'a> {
    bytes: &'a [u8],
    hints: Vec<DecodeHint>,
    fixed_len: usize,
}

impl<'a> SszDecoderBuilder<'a> {
    /// Instantiate a new builder over the complete container bytes.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            hints: vec![],
            fixed_len: 0,
        }
    }

    /// Register a field of type `T` with the builder.
    pub fn register_type<T: Decode>(&mut self) -> Result<(), DecodeError> {
        if T::is_ssz_fixed_len() {
            self.hints.push(DecodeHint::Fixed(T::ssz_fixed_len()));
            self.fixed_len += T::ssz_fixed_len();
        } else {
            self.register_anonymous_variable_length_item()?;
        }
        Ok(())
    }

    /// Register a variable-length field without reference to a concrete `Decode` type.
    pub fn register_anonymous_variable_length_item(&mut self) -> Result<(), DecodeError> {
        self.hints.push(DecodeHint::Variable);
        self.fixed_len += BYTES_PER_LENGTH_OFFSET;
        Ok(())
    }

    /// Finalize registration and produce a [`SszDecoder`] that can decode each field in order.
    pub fn build(self) -> Result<SszDecoder<'a>, DecodeError> {
        if self.bytes.len() < self.fixed_len {
            return Err(DecodeError::InvalidByteLength {
                len: self.bytes.len(),
                expected: self.fixed_len,
            });
        }

        let mut ranges = Vec::with_capacity(self.hints.len());
        let mut fixed_cursor = 0;
        let mut variable_index = 0;
        let mut previous_offset: Option<usize> = None;

        for hint in &self.hints {
            match *hint {
                DecodeHint::Fixed(len) => {
                    ranges.push(fixed_cursor..fixed_cursor + len);
                    fixed_cursor += len;
                }
                DecodeHint::Variable => {
                    let offset = read_offset(&self.bytes[fixed_cursor..])?;
                    let offset = sanitize_offset(
                        offset,
                        previous_offset,
                        self.bytes.len(),
                        (variable_index == 0).then_some(self.fixed_len),
                    )?;

                    ranges.push(offset..offset);
                    fixed_cursor += BYTES_PER_LENGTH_OFFSET;
                    previous_offset = Some(offset);
                    variable_index += 1;
                }
            }
        }

        // Second pass: now that every variable offset is known, close off each variable range's
        // end against the offset of the field that follows it (or the end of the container).
        let mut next_variable_offsets: Vec<usize> = ranges
            .iter()
            .zip(self.hints.iter())
            .filter_map(|(r, h)| matches!(h, DecodeHint::Variable).then_some(r.start))
            .collect();
        next_variable_offsets.push(self.bytes.len());

        let mut variable_seen = 0;
        for (range, hint) in ranges.iter_mut().zip(self.hints.iter()) {
            if matches!(hint, DecodeHint::Variable) {
                let end = next_variable_offsets[variable_seen + 1];
                *range = range.start..end;
                variable_seen += 1;
            }
        }

        Ok(SszDecoder {
            bytes: self.bytes,
            ranges,
            index: 0,
        })
    }
}

/// Decodes the fields of a container, one at a time, in declaration order.
///
/// Constructed via [`SszDecoderBuilder`].
pub struct SszDecoder<'a> {
    bytes: &'a [u8],
    ranges: Vec<std::ops::Range<usize>>,
    index: usize,
}

impl<'a> SszDecoder<'a> {
    /// Decode the next field as an owned `T`.
    pub fn decode_next<T: Decode>(&mut self) -> Result<T, DecodeError> {
        let range = self.next_range()?;
        T::from_ssz_bytes(&self.bytes[range])
    }

    /// Decode the next field as a zero-copy view `T`.
    pub fn decode_next_view<T: crate::view::DecodeView<'a>>(&mut self) -> Result<T, DecodeError> {
        let range = self.next_range()?;
        T::from_ssz_bytes(&self.bytes[range])
    }

    fn next_range(&mut self) -> Result<std::ops::Range<usize>, DecodeError> {
        let range = self
            .ranges
            .get(self.index)
            .cloned()
            .ok_or(DecodeError::OutOfBoundsByte { i: self.index })?;
        self.index += 1;
        Ok(range)
    }
}

/// Primitive and collection `Decode` implementations, plus decoding helpers for SSZ lists.
pub mod impls {
    use ssz_primitives::{FixedBytes, U128, U256};

    use super::*;

    macro_rules! impl_decodable_for_uint {
        ($type: ident, $bit_size: expr) => {
            impl Decode for $type {
                fn is_ssz_fixed_len() -> bool {
                    true
                }

                fn ssz_fixed_len() -> usize {
                    $bit_size / 8
                }

                fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
                    let len = $bit_size / 8;
                    let array: [u8; $bit_size / 8] =
                        bytes.try_into().map_err(|_| DecodeError::InvalidByteLength {
                            len: bytes.len(),
                            expected: len,
                        })?;
                    Ok($type::from_le_bytes(array))
                }
            }
        };
    }

    impl_decodable_for_uint!(u8, 8);
    impl_decodable_for_uint!(u16, 16);
    impl_decodable_for_uint!(u32, 32);
    impl_decodable_for_uint!(u64, 64);
    impl_decodable_for_uint!(u128, 128);

    impl Decode for usize {
        fn is_ssz_fixed_len() -> bool {
            true
        }

        fn ssz_fixed_len() -> usize {
            8
        }

        fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
            let array: [u8; 8] = bytes.try_into().map_err(|_| DecodeError::InvalidByteLength {
                len: bytes.len(),
                expected: 8,
            })?;
            Ok(u64::from_le_bytes(array) as usize)
        }
    }

    impl Decode for bool {
        fn is_ssz_fixed_len() -> bool {
            true
        }

        fn ssz_fixed_len() -> usize {
            1
        }

        fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
            match bytes {
                [0] => Ok(false),
                [1] => Ok(true),
                [_] => Err(DecodeError::BytesInvalid(
                    "out-of-range byte for boolean".to_string(),
                )),
                _ => Err(DecodeError::InvalidByteLength {
                    len: bytes.len(),
                    expected: 1,
                }),
            }
        }
    }

    impl<const N: usize> Decode for [u8; N] {
        fn is_ssz_fixed_len() -> bool {
            true
        }

        fn ssz_fixed_len() -> usize {
            N
        }

        fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
            bytes.try_into().map_err(|_| DecodeError::InvalidByteLength {
                len: bytes.len(),
                expected: N,
            })
        }
    }

    impl<const N: usize> Decode for FixedBytes<N> {
        fn is_ssz_fixed_len() -> bool {
            true
        }

        fn ssz_fixed_len() -> usize {
            N
        }

        fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
            if bytes.len() != N {
                return Err(DecodeError::InvalidByteLength {
                    len: bytes.len(),
                    expected: N,
                });
            }
            Ok(FixedBytes::from_slice(bytes))
        }
    }

    impl Decode for U128 {
        fn is_ssz_fixed_len() -> bool {
            true
        }

        fn ssz_fixed_len() -> usize {
            16
        }

        fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
            if bytes.len() != 16 {
                return Err(DecodeError::InvalidByteLength {
                    len: bytes.len(),
                    expected: 16,
                });
            }
            Ok(U128::from_le_bytes::<16>(bytes.try_into().expect("length checked")))
        }
    }

    impl Decode for U256 {
        fn is_ssz_fixed_len() -> bool {
            true
        }

        fn ssz_fixed_len() -> usize {
            32
        }

        fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
            if bytes.len() != 32 {
                return Err(DecodeError::InvalidByteLength {
                    len: bytes.len(),
                    expected: 32,
                });
            }
            Ok(U256::from_le_bytes::<32>(bytes.try_into().expect("length checked")))
        }
    }

    /// Decodes `bytes` as a SSZ list of variable-length `T` items.
    ///
    /// `bytes` must be exactly the variable-length-only portion of the list (i.e. no leading
    /// fixed-length region beyond the offset table that is part of the list itself).
    pub fn decode_list_of_variable_length_items<T: Decode>(
        bytes: &[u8],
    ) -> Result<Vec<T>, DecodeError> {
        if bytes.is_empty() {
            return Ok(vec![]);
        }

        let first_offset = read_offset(bytes)?;
        if !first_offset.is_multiple_of(BYTES_PER_LENGTH_OFFSET) || first_offset == 0 {
            return Err(DecodeError::InvalidListFixedBytesLen(first_offset));
        }
        let num_items = first_offset / BYTES_PER_LENGTH_OFFSET;

        let mut offsets = Vec::with_capacity(num_items);
        let mut previous_offset = None;
        for i in 0..num_items {
            let offset_pos = i * BYTES_PER_LENGTH_OFFSET;
            let offset = read_offset(&bytes[offset_pos..])?;
            let offset = sanitize_offset(
                offset,
                previous_offset,
                bytes.len(),
                (i == 0).then_some(first_offset),
            )?;
            offsets.push(offset);
            previous_offset = Some(offset);
        }
        offsets.push(bytes.len());

        offsets
            .windows(2)
            .map(|w| T::from_ssz_bytes(&bytes[w[0]..w[1]]))
            .collect()
    }

    impl<T: Decode> Decode for Vec<T> {
        fn is_ssz_fixed_len() -> bool {
            false
        }

        fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
            if bytes.is_empty() {
                return Ok(vec![]);
            }

            if T::is_ssz_fixed_len() {
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
                bytes.chunks(item_len).map(T::from_ssz_bytes).collect()
            } else {
                decode_list_of_variable_length_items(bytes)
            }
        }
    }

    impl<T: Decode> Decode for Option<T> {
        fn is_ssz_fixed_len() -> bool {
            false
        }

        fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
            let (selector, body) = split_union_bytes(bytes)?;
            match u8::from(selector) {
                0 => Ok(None),
                1 => T::from_ssz_bytes(body).map(Some),
                other => Err(DecodeError::UnionSelectorInvalid(other)),
            }
        }
    }
}

/// Helpers for decoding heterogeneous collections into a specific container type.
pub mod try_from_iter {
    /// Builds a collection of a known maximum length from an iterator, erroring if the iterator
    /// yields more items than the collection supports.
    pub trait TryFromIter<T>: Sized {
        /// The error returned if the iterator produces too many items.
        type Error: std::fmt::Debug;

        /// Attempt to build `Self` by consuming `iter`.
        fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Self::Error>;
    }

    impl<T> TryFromIter<T> for Vec<T> {
        type Error = std::convert::Infallible;

        fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Self::Error> {
            Ok(iter.into_iter().collect())
        }
    }
}
