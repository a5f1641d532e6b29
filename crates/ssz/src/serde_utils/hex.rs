// Modified in 2025 from the original version
// Original source licensed under the Apache License 2.0

//! 0x-prefixed hex encoding used by SSZ serde implementations.

use serde::de::{self, Visitor};
use std::fmt;

/// Encodes `bytes` as a `0x`-prefixed lowercase hex string.
pub fn encode<T: AsRef<[u8]>>(bytes: T) -> String {
    format!("0x{}", hex::encode(bytes.as_ref()))
}

/// Decodes a `0x`-prefixed hex string into bytes.
pub fn decode(s: &str) -> Result<Vec<u8>, String> {
    let stripped = s.strip_prefix("0x").ok_or_else(|| {
        format!("hex string must be prefixed with 0x, got {s}")
    })?;
    hex::decode(stripped).map_err(|e| format!("invalid hex string: {e:?}"))
}

/// Serde visitor for a `0x`-prefixed hex string, producing owned bytes.
pub struct PrefixedHexVisitor;

impl Visitor<'_> for PrefixedHexVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a 0x-prefixed hex string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        decode(value).map_err(de::Error::custom)
    }
}
