// Modified in 2025 from the original version
// Original source licensed under the Apache License 2.0

//! Serialize `VariableList<u64, N>` as a list of quoted decimal strings.
use crate::VariableList;
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeSeq};

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct Quoted(#[serde(with = "ssz::serde_utils::quoted_u64::quoted_u64")] u64);

/// Serialize a `VariableList<u64, N>` as a list of quoted decimal strings.
pub fn serialize<S, const N: usize>(
    list: &VariableList<u64, N>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(list.len()))?;
    for &value in list.iter() {
        seq.serialize_element(&Quoted(value))?;
    }
    seq.end()
}

/// Deserialize a `VariableList<u64, N>` from a list of quoted decimal strings.
pub fn deserialize<'de, D, const N: usize>(
    deserializer: D,
) -> Result<VariableList<u64, N>, D::Error>
where
    D: Deserializer<'de>,
{
    let quoted = Vec::<Quoted>::deserialize(deserializer)?;
    let values = quoted.into_iter().map(|q| q.0).collect();
    VariableList::new(values)
        .map_err(|e| serde::de::Error::custom(format!("failed to build list: {e:?}")))
}
