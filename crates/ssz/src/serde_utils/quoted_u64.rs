// Modified in 2025 from the original version
// Original source licensed under the Apache License 2.0

//! Serialize/deserialize a `u64` as a JSON string, as required by the Ethereum consensus API.

pub mod quoted_u64 {
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Serialize a `u64` as a quoted decimal string.
    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    /// Deserialize a `u64` from a quoted decimal string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|e| de::Error::custom(format!("invalid quoted u64 {s}: {e}")))
    }
}
