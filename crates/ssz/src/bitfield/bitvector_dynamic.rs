// Modified in 2025 from the original version
// Original source licensed under the Apache License 2.0

//! A bitvector whose capacity is chosen at runtime rather than at the type level.
//!
//! [`BitVector<N>`](crate::BitVector) fixes `N` as a const generic, which is the right shape when
//! a schema is known at compile time. Runtime-introspected schemas (see
//! [`crate::stable_container`]) don't have that luxury, so `Dynamic` provides the same
//! no-length-bit encoding as `BitVector<N>` but with `N` stored on the value.

use smallvec::smallvec;

use crate::bitfield::{BitfieldSmallVec, Error, bytes_for_bit_len};
use crate::{Decode, DecodeError, Encode};

/// Marker behaviour for [`Bitfield`](crate::bitfield::Bitfield) used by [`BitVectorDynamic`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Dynamic;

impl crate::bitfield::BitfieldBehaviour for Dynamic {}

/// A bitvector with a capacity fixed at construction time (not at the type level).
///
/// Encodes identically to `BitVector<N>` for the `N` it was constructed with: no length bit, just
/// `bytes_for_bit_len(N)` bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct BitVectorDynamic {
    bytes: BitfieldSmallVec,
    len: usize,
}

impl BitVectorDynamic {
    /// Instantiate a new bitvector with `len` bits, all initialized to `false`.
    pub fn new(len: usize) -> Self {
        Self {
            bytes: smallvec![0; bytes_for_bit_len(len)],
            len,
        }
    }

    /// Returns the number of bits in `self`.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `self.len() == 0`.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the `i`'th bit to `value`.
    pub fn set(&mut self, i: usize, value: bool) -> Result<(), Error> {
        if i >= self.len {
            return Err(Error::OutOfBounds { i, len: self.len });
        }
        let byte = &mut self.bytes[i / 8];
        if value {
            *byte |= 1 << (i % 8);
        } else {
            *byte &= !(1 << (i % 8));
        }
        Ok(())
    }

    /// Returns the value of the `i`'th bit.
    pub fn get(&self, i: usize) -> Result<bool, Error> {
        if i >= self.len {
            return Err(Error::OutOfBounds { i, len: self.len });
        }
        Ok(self.bytes[i / 8] & (1 << (i % 8)) != 0)
    }

    /// Returns a view into the underlying bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Instantiates from `bytes` encoding a bitvector with `len` bits.
    pub fn from_bytes(bytes: BitfieldSmallVec, len: usize) -> Result<Self, Error> {
        let expected = bytes_for_bit_len(len);
        if bytes.len() != expected {
            return Err(Error::InvalidByteCount {
                given: bytes.len(),
                expected,
            });
        }
        if len > 0 {
            let used_bits = len % 8;
            if used_bits != 0 {
                let mask = u8::MAX >> (8 - used_bits);
                if bytes[bytes.len() - 1] & !mask != 0 {
                    return Err(Error::ExcessBits);
                }
            }
        }
        Ok(Self { bytes, len })
    }
}

impl Encode for BitVectorDynamic {
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.bytes);
    }

    fn ssz_bytes_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Decodes a [`BitVectorDynamic`] of the given bit length.
///
/// `Decode::from_ssz_bytes` can't express the runtime bit length, so use this directly when the
/// capacity is known.
pub fn from_ssz_bytes_with_len(bytes: &[u8], len: usize) -> Result<BitVectorDynamic, DecodeError> {
    BitVectorDynamic::from_bytes(bytes.into(), len)
        .map_err(|e| DecodeError::BytesInvalid(format!("BitVectorDynamic failed to decode: {e:?}")))
}
