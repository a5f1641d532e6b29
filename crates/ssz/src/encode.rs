// Modified in 2025 from the original version
// Original source licensed under the Apache License 2.0

//! SSZ encoding (serialization).

use ssz_primitives::{FixedBytes, U128, U256};

use crate::{BYTES_PER_LENGTH_OFFSET, BYTES_PER_UNION_SELECTOR, MAX_LENGTH_VALUE};

/// Provides SSZ encoding (serialization) for some type.
///
/// See the crate-level documentation for more info.
pub trait Encode {
    /// Returns `true` if this object has a fixed-length.
    ///
    /// I.e., there are no "variable" fields that depend on runtime values of this object.
    fn is_ssz_fixed_len() -> bool;

    /// Append the encoding of `self` to `buf`.
    ///
    /// Note, variable length objects need only to append their padded bytes. The offset table is
    /// produced by [`SszEncoder`].
    fn ssz_append(&self, buf: &mut Vec<u8>);

    /// The number of bytes this object occupies in the fixed-length portion of an SSZ container.
    ///
    /// By default, this is set to `BYTES_PER_LENGTH_OFFSET` which is suitable for variable-length
    /// objects, but not fixed-length objects. Fixed-length objects _must_ return a different
    /// value from this function.
    fn ssz_fixed_len() -> usize {
        BYTES_PER_LENGTH_OFFSET
    }

    /// Returns the size (in bytes) when `self` is SSZ encoded.
    ///
    /// Returns the same value as `self.as_ssz_bytes().len()` but this method is significantly more
    /// efficient.
    fn ssz_bytes_len(&self) -> usize;

    /// Returns the full-form encoding of this object.
    ///
    /// The default implementation of this method should suffice for most cases.
    fn as_ssz_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.ssz_bytes_len());

        self.ssz_append(&mut buf);

        buf
    }
}

macro_rules! impl_encodable_for_uint {
    ($type: ident, $bit_size: expr) => {
        impl Encode for $type {
            fn is_ssz_fixed_len() -> bool {
                true
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&self.to_le_bytes());
            }

            fn ssz_fixed_len() -> usize {
                $bit_size / 8
            }

            fn ssz_bytes_len(&self) -> usize {
                $bit_size / 8
            }
        }
    };
}

impl_encodable_for_uint!(u8, 8);
impl_encodable_for_uint!(u16, 16);
impl_encodable_for_uint!(u32, 32);
impl_encodable_for_uint!(u64, 64);
impl_encodable_for_uint!(u128, 128);

// `usize` is not actually a part of the SSZ spec, but it's used in our internal types, so we
// encode it as `u64` for convenience and portability across 32/64-bit targets.
impl Encode for usize {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&(*self as u64).to_le_bytes());
    }

    fn ssz_fixed_len() -> usize {
        8
    }

    fn ssz_bytes_len(&self) -> usize {
        8
    }
}

impl Encode for bool {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.push(*self as u8);
    }

    fn ssz_fixed_len() -> usize {
        1
    }

    fn ssz_bytes_len(&self) -> usize {
        1
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self[..]);
    }

    fn ssz_fixed_len() -> usize {
        N
    }

    fn ssz_bytes_len(&self) -> usize {
        N
    }
}

impl<const N: usize> Encode for FixedBytes<N> {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.as_slice());
    }

    fn ssz_fixed_len() -> usize {
        N
    }

    fn ssz_bytes_len(&self) -> usize {
        N
    }
}

impl Encode for U128 {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.to_le_bytes::<16>());
    }

    fn ssz_fixed_len() -> usize {
        16
    }

    fn ssz_bytes_len(&self) -> usize {
        16
    }
}

impl Encode for U256 {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.to_le_bytes::<32>());
    }

    fn ssz_fixed_len() -> usize {
        32
    }

    fn ssz_bytes_len(&self) -> usize {
        32
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        if T::is_ssz_fixed_len() {
            buf.reserve(self.ssz_bytes_len());

            for item in self {
                item.ssz_append(buf);
            }
        } else {
            let mut encoder = SszEncoder::container(buf, self.len() * BYTES_PER_LENGTH_OFFSET);

            for item in self {
                encoder.append(item);
            }

            encoder.finalize();
        }
    }

    fn ssz_bytes_len(&self) -> usize {
        if T::is_ssz_fixed_len() {
            T::ssz_fixed_len() * self.len()
        } else {
            let mut len = self.iter().map(|item| item.ssz_bytes_len()).sum::<usize>();
            len += BYTES_PER_LENGTH_OFFSET * self.len();
            len
        }
    }
}

/// Used for encoding a SSZ "union" type, i.e. an enum where each variant carries a value (or no
/// value).
///
/// Encodes `selector` as a single byte, followed by the SSZ encoding of the variant's inner
/// value (if any).
pub fn encode_union<F: FnOnce(&mut Vec<u8>)>(selector: u8, body: F, buf: &mut Vec<u8>) {
    buf.push(selector);
    body(buf);
}

impl<T: Encode> Encode for Option<T> {
    fn is_ssz_fixed_len() -> bool {
        false
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        match self {
            None => buf.push(0),
            Some(inner) => encode_union(1, |buf| inner.ssz_append(buf), buf),
        }
    }

    fn ssz_bytes_len(&self) -> usize {
        match self {
            None => BYTES_PER_UNION_SELECTOR,
            Some(inner) => BYTES_PER_UNION_SELECTOR + inner.ssz_bytes_len(),
        }
    }
}

/// Encodes a list of equal-length bytes representing the length of some other type.
///
/// ## Panics
///
/// Panics if `len` is too large to fit in `BYTES_PER_LENGTH_OFFSET` bytes.
pub fn encode_length(len: usize) -> [u8; BYTES_PER_LENGTH_OFFSET] {
    assert!(
        len <= MAX_LENGTH_VALUE,
        "length must be less than or equal to {MAX_LENGTH_VALUE}"
    );

    let mut bytes = [0; BYTES_PER_LENGTH_OFFSET];
    bytes.copy_from_slice(&(len as u32).to_le_bytes());
    bytes
}

/// Provides a mechanism for encoding SSZ "containers" (i.e. the concatenation of several distinct
/// types).
///
/// The fixed-length portion of the container is written directly to `buf`, and the offsets to the
/// variable-length portion are patched in once `finalize` has collected all of it.
pub struct SszEncoder<'a> {
    offset: usize,
    buf: &'a mut Vec<u8>,
    variable_bytes: Vec<u8>,
}

impl<'a> SszEncoder<'a> {
    /// Instantiate a new encoder for encoding a SSZ container.
    ///
    /// `offset` is the number of fixed-length bytes that will precede the offset table (i.e. the
    /// combined length of all fixed-length fields that were already appended to `buf`).
    pub fn container(buf: &'a mut Vec<u8>, offset: usize) -> Self {
        Self {
            offset,
            buf,
            variable_bytes: vec![],
        }
    }

    /// Append some `item` to the container.
    pub fn append<T: Encode>(&mut self, item: &T) {
        self.append_parameterized(T::is_ssz_fixed_len(), |buf| item.ssz_append(buf))
    }

    /// As for `append` but allows the caller to specify the "variable-ness" of the item manually.
    pub fn append_parameterized<F: FnOnce(&mut Vec<u8>)>(&mut self, is_ssz_fixed_len: bool, f: F) {
        if is_ssz_fixed_len {
            f(self.buf);
        } else {
            self.buf.extend_from_slice(&encode_length(self.offset));

            let start = self.variable_bytes.len();
            f(&mut self.variable_bytes);
            self.offset += self.variable_bytes.len() - start;
        }
    }

    /// Append all the variable-length bytes to the buffer and consume `self`.
    pub fn finalize(&mut self) -> &mut Vec<u8> {
        self.buf.extend_from_slice(&self.variable_bytes);
        self.buf
    }
}
