// Modified in 2025 from the original version
// Original source licensed under the Apache License 2.0

//! Serialize `VariableList<FixedVector<u8, M>, N>` as list of 0x-prefixed hex strings.
use crate::{FixedVector, VariableList};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeSeq};

/// A wrapper for a `FixedVector<u8, M>`
#[derive(Deserialize, Debug)]
#[serde(transparent)]
struct WrappedListOwned<const M: usize>(
    #[serde(with = "crate::serde_utils::hex_fixed_vec")] FixedVector<u8, M>,
);

/// A wrapper for a `&FixedVector<u8, M>`
#[derive(Serialize, Debug)]
#[serde(transparent)]
struct WrappedListRef<'a, const M: usize>(
    #[serde(with = "crate::serde_utils::hex_fixed_vec")] &'a FixedVector<u8, M>,
);

/// Serialize a `VariableList<FixedVector<u8, M>, N>`
pub fn serialize<S, const M: usize, const N: usize>(
    list: &VariableList<FixedVector<u8, M>, N>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(list.len()))?;
    for bytes in list.iter() {
        seq.serialize_element(&WrappedListRef(bytes))?;
    }
    seq.end()
}

/// Visitor for deserializing a `VariableList<FixedVector<u8, M>, N>`
#[derive(Default, Debug)]
struct Visitor<const M: usize, const N: usize>;

impl<'a, const M: usize, const N: usize> serde::de::Visitor<'a> for Visitor<M, N> {
    type Value = VariableList<FixedVector<u8, M>, N>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "a list of 0x-prefixed hex bytes")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'a>,
    {
        let mut items = Vec::new();

        while let Some(val) = seq.next_element::<WrappedListOwned<M>>()? {
            items.push(val.0);
        }

        VariableList::new(items)
            .map_err(|e| serde::de::Error::custom(format!("failed to build list: {e:?}")))
    }
}

/// Deserialize a `VariableList<FixedVector<u8, M>, N>`
pub fn deserialize<'de, D, const M: usize, const N: usize>(
    deserializer: D,
) -> Result<VariableList<FixedVector<u8, M>, N>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_seq(Visitor::<M, N>::default())
}
