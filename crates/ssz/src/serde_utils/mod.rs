// Modified in 2025 from the original version
// Original source licensed under the Apache License 2.0

//! Serde utilities for SSZ types.

pub mod hex;
pub mod quoted_u64;
