//! Runtime-introspectable schemas for `StableContainer[N]` and `Profile[B]`.
//!
//! The usual way to declare these types is `#[derive(Encode, Decode, TreeHash)]` with
//! `#[ssz(struct_behaviour = "stable_container"/"profile", ...)]`, which binds the schema at
//! compile time and generates field accessors directly. [`StableSchema`] and [`ProfileSchema`]
//! exist for callers that need the same invariants checked against a schema that isn't known
//! until runtime (dynamic protocol negotiation, tooling, schema-diffing tests).

use crate::view::bytes_for_bits;
use crate::BYTES_PER_LENGTH_OFFSET;

/// The gindex of the active-fields bitvector: the right child of a `StableContainer`'s root.
pub const RIGHT_GINDEX: u64 = 3;

/// Errors raised by schema construction, validation, and navigation.
///
/// Unified into one enum rather than six separate error types, following this crate's existing
/// convention of one error enum per concern (see [`crate::DecodeError`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StableContainerError {
    /// The schema declaration itself is invalid (bad capacity, too many fields, disallowed
    /// `optional` marker, unknown base field, incompatible type narrowing).
    #[error("schema error: {0}")]
    SchemaError(String),
    /// A value doesn't satisfy the schema it's being checked against (e.g. a required field
    /// assigned an absent value through the runtime API).
    #[error("value error: {0}")]
    ValueError(String),
    /// A bit beyond the declared field count was set while decoding.
    #[error("unknown field bit {0}")]
    UnknownFieldError(usize),
    /// Offset table validation failed (non-matching first offset, non-monotonic offsets, offset
    /// out of scope, implied size out of bounds).
    #[error("offset error: {0}")]
    OffsetError(String),
    /// Field lookup by name failed (unknown field, or an unexpected extra field).
    #[error("field error: {0}")]
    FieldError(String),
    /// Navigation to an absent field or an unsupported gindex key.
    #[error("navigation error: {0}")]
    NavigationError(String),
}

/// Returns the tree depth `D = ceil(log2(n))`, with `tree_depth(0) == tree_depth(1) == 0`.
pub const fn tree_depth(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// The SSZ byte-length contribution of a field, independent of whether it's currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteLength {
    /// A type with a fixed encoded length.
    Fixed(usize),
    /// A type with a variable encoded length, bounded by `[min, max]`.
    Variable { min: usize, max: usize },
}

/// One field's position and shape within a [`StableSchema`] or [`ProfileSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field name.
    pub name: &'static str,
    /// The field's declaration position. For a `StableContainer` this is the stable index used
    /// in both the active-fields bitvector and the gindex formula. For a `Profile` it is the
    /// corresponding index in the base schema.
    pub index: usize,
    /// The field's own SSZ byte-length contribution.
    pub byte_length: ByteLength,
    /// Whether the field may be absent. Always `true` for `StableContainer` fields; for
    /// `Profile` fields, `true` only when the base is a `StableContainer` and the field was
    /// declared `Optional<T>`.
    pub optional: bool,
}

impl FieldSpec {
    fn max_contribution(&self) -> usize {
        match self.byte_length {
            ByteLength::Fixed(n) => n,
            ByteLength::Variable { max, .. } => BYTES_PER_LENGTH_OFFSET + max,
        }
    }

    fn min_contribution(&self) -> usize {
        match self.byte_length {
            ByteLength::Fixed(n) => n,
            ByteLength::Variable { min, .. } => BYTES_PER_LENGTH_OFFSET + min,
        }
    }
}

/// A runtime-checkable schema for a `StableContainer[N]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StableSchema {
    capacity: usize,
    fields: Vec<FieldSpec>,
}

impl StableSchema {
    /// Constructs a schema with the given capacity and ordered field list.
    ///
    /// Each field's `index` must equal its position in `fields` (declaration order fixes the
    /// stable index). Fails if `capacity == 0` or `fields.len() > capacity`.
    pub fn new(capacity: usize, fields: Vec<FieldSpec>) -> Result<Self, StableContainerError> {
        if capacity == 0 {
            return Err(StableContainerError::SchemaError(
                "StableContainer capacity must be positive".to_string(),
            ));
        }
        if fields.len() > capacity {
            return Err(StableContainerError::SchemaError(format!(
                "StableContainer[{capacity}] declares {} fields",
                fields.len()
            )));
        }
        for (i, field) in fields.iter().enumerate() {
            if field.index != i {
                return Err(StableContainerError::SchemaError(format!(
                    "field `{}` declared out of order: expected index {i}, got {}",
                    field.name, field.index
                )));
            }
        }
        Ok(Self { capacity, fields })
    }

    /// The schema's fixed capacity `N`.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of fields actually declared (`<= capacity`).
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The declared fields, in stable-index order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// The tree depth `D = ceil(log2(capacity))`.
    pub fn depth(&self) -> u32 {
        tree_depth(self.capacity)
    }

    /// The byte length of the active-fields bitvector prefix, `ceil(capacity / 8)`.
    pub fn bitvector_byte_length(&self) -> usize {
        bytes_for_bits(self.capacity)
    }

    /// The minimum possible encoded length: just the bitvector prefix, since every field may be
    /// absent.
    pub fn min_byte_length(&self) -> usize {
        self.bitvector_byte_length()
    }

    /// The maximum possible encoded length: the bitvector prefix plus every field's maximum
    /// contribution, as if all fields were present.
    pub fn max_byte_length(&self) -> usize {
        self.bitvector_byte_length()
            + self.fields.iter().map(FieldSpec::max_contribution).sum::<usize>()
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Result<&FieldSpec, StableContainerError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| StableContainerError::FieldError(format!("unknown field `{name}`")))
    }

    /// The gindex of the active-fields bitvector (the right child of the root).
    pub const fn active_fields_gindex(&self) -> u64 {
        RIGHT_GINDEX
    }

    /// The gindex of field `name`: `2^(D+1) + index`.
    pub fn field_gindex(&self, name: &str) -> Result<u64, StableContainerError> {
        let field = self.field(name)?;
        Ok((1u64 << (self.depth() + 1)) + field.index as u64)
    }

    /// Validates that no bit beyond `field_count()` is set in a decoded active-fields bitvector.
    ///
    /// `bits` must have length `capacity`.
    pub fn validate_active_fields(&self, bits: &[bool]) -> Result<(), StableContainerError> {
        for (i, &bit) in bits.iter().enumerate().skip(self.fields.len()) {
            if bit {
                return Err(StableContainerError::UnknownFieldError(i));
            }
        }
        Ok(())
    }
}

/// The base type a [`ProfileSchema`] specializes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileBase {
    /// Specializes a `StableContainer`, retaining its active-fields bitvector and gindices.
    StableContainer(StableSchema),
    /// Specializes a plain fixed `Container` with `field_count` fields.
    Container { field_count: usize },
}

/// A runtime-checkable schema for a `Profile[B]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSchema {
    base: ProfileBase,
    fields: Vec<FieldSpec>,
    optional_count: usize,
}

impl ProfileSchema {
    /// Constructs a profile schema over `base` with the given ordered field list.
    ///
    /// Validates (§4.1):
    /// 1. every declared field name exists in the base (for a `StableContainer` base; a
    ///    plain-`Container` base is checked by position, see 4. below),
    /// 2. `optional` is only set when `base` is a `StableContainer`,
    /// 3. for a plain-`Container` base, every base field is declared, in the same order.
    pub fn new(base: ProfileBase, fields: Vec<FieldSpec>) -> Result<Self, StableContainerError> {
        let mut optional_count = 0;
        for field in &fields {
            if field.optional && !matches!(base, ProfileBase::StableContainer(_)) {
                return Err(StableContainerError::SchemaError(format!(
                    "field `{}` cannot be optional: base is not a StableContainer",
                    field.name
                )));
            }
            if field.optional {
                optional_count += 1;
            }
        }

        match &base {
            ProfileBase::StableContainer(stable) => {
                for field in &fields {
                    stable.field(field.name)?;
                }
            }
            ProfileBase::Container { field_count } => {
                if fields.len() != *field_count {
                    return Err(StableContainerError::SchemaError(format!(
                        "profile over a plain Container[{field_count}] must declare every field, \
                         got {}",
                        fields.len()
                    )));
                }
                for (i, field) in fields.iter().enumerate() {
                    if field.index != i {
                        return Err(StableContainerError::SchemaError(format!(
                            "field `{}` is out of order for a plain-Container-backed profile",
                            field.name
                        )));
                    }
                }
            }
        }

        Ok(Self { base, fields, optional_count })
    }

    /// The base type this profile specializes.
    pub const fn base(&self) -> &ProfileBase {
        &self.base
    }

    /// The declared fields.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// The number of fields declared `optional` (`o` in §4.1).
    pub const fn optional_count(&self) -> usize {
        self.optional_count
    }

    /// `true` when every field is required and fixed-length, so the profile itself becomes a
    /// fixed-length SSZ type.
    pub fn is_ssz_fixed_len(&self) -> bool {
        self.optional_count == 0
            && self.fields.iter().all(|f| matches!(f.byte_length, ByteLength::Fixed(_)))
    }

    /// The byte length of the optional-fields bitvector prefix, `ceil(o / 8)`, or 0 when `o == 0`
    /// (a fully-required profile has no prefix at all).
    pub fn prefix_byte_length(&self) -> usize {
        if self.optional_count == 0 {
            0
        } else {
            bytes_for_bits(self.optional_count)
        }
    }

    /// The minimum possible encoded length: the prefix plus every required field's minimum
    /// contribution (optional fields contribute nothing towards the minimum).
    pub fn min_byte_length(&self) -> usize {
        self.prefix_byte_length()
            + self
                .fields
                .iter()
                .filter(|f| !f.optional)
                .map(FieldSpec::min_contribution)
                .sum::<usize>()
    }

    /// The maximum possible encoded length: the prefix plus every field's maximum contribution,
    /// as if all optional fields were present.
    pub fn max_byte_length(&self) -> usize {
        self.prefix_byte_length()
            + self.fields.iter().map(FieldSpec::max_contribution).sum::<usize>()
    }

    /// The gindex of the active-fields bitvector, restricted to `StableContainer`-backed
    /// profiles. Returns `None` for a plain-`Container` base instead of panicking (§4.6, §9 open
    /// question 3).
    pub const fn active_fields_gindex(&self) -> Option<u64> {
        match self.base {
            ProfileBase::StableContainer(_) => Some(RIGHT_GINDEX),
            ProfileBase::Container { .. } => None,
        }
    }

    /// The gindex of field `name`.
    pub fn field_gindex(&self, name: &str) -> Result<u64, StableContainerError> {
        let field = self
            .fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| StableContainerError::FieldError(format!("unknown field `{name}`")))?;
        match &self.base {
            ProfileBase::StableContainer(stable) => {
                Ok((1u64 << (stable.depth() + 1)) + field.index as u64)
            }
            ProfileBase::Container { field_count } => {
                Ok((1u64 << tree_depth(*field_count)) + field.index as u64)
            }
        }
    }
}
