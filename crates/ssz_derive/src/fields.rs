//! Shared field-classification helpers used by both struct and union codegen.

use syn::{Fields, GenericArgument, PathArguments, Type};

/// Which flavour of "optional" wraps a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalWrapper {
    /// `std::option::Option<T>`, used for profile fields with no stable-container base.
    Std,
    /// `ssz_types::Optional<T>`, used for stable-container fields and profile fields that
    /// specialize a stable-container base.
    Ssz,
}

/// A struct field together with whether its declared type marks it as optional.
pub struct FieldInfo<'a> {
    pub ident: &'a syn::Ident,
    /// The field's declared type (`Optional<T>`, `Option<T>`, or the bare type).
    pub ty: &'a Type,
    /// `Some((wrapper, inner))` when the field is optional; `None` for a required field.
    pub optional: Option<(OptionalWrapper, Type)>,
}

impl FieldInfo<'_> {
    pub fn is_optional(&self) -> bool {
        self.optional.is_some()
    }

    /// The type used for SSZ encode/decode purposes: the inner type for optional fields, the
    /// declared type itself otherwise.
    pub fn codec_ty(&self) -> &Type {
        match &self.optional {
            Some((_, inner)) => inner,
            None => self.ty,
        }
    }
}

/// Returns `Some((wrapper, inner_ty))` if `ty` is `Option<T>` or `Optional<T>`.
pub fn classify_optional(ty: &Type) -> Option<(OptionalWrapper, Type)> {
    let Type::Path(type_path) = ty else { return None };
    let segment = type_path.path.segments.last()?;
    let wrapper = match segment.ident.to_string().as_str() {
        "Option" => OptionalWrapper::Std,
        "Optional" => OptionalWrapper::Ssz,
        _ => return None,
    };
    let PathArguments::AngleBracketed(args) = &segment.arguments else { return None };
    let mut types = args.args.iter().filter_map(|a| match a {
        GenericArgument::Type(t) => Some(t.clone()),
        _ => None,
    });
    let inner = types.next()?;
    if types.next().is_some() {
        return None;
    }
    Some((wrapper, inner))
}

/// Extracts the named fields of a struct, erroring on tuple/unit structs.
pub fn named_fields(fields: &Fields) -> syn::Result<Vec<FieldInfo<'_>>> {
    let Fields::Named(named) = fields else {
        return Err(syn::Error::new_spanned(
            fields,
            "ssz_derive only supports structs with named fields",
        ));
    };
    named
        .named
        .iter()
        .map(|field| {
            let ident = field
                .ident
                .as_ref()
                .expect("Fields::Named fields always have an ident");
            Ok(FieldInfo {
                ident,
                ty: &field.ty,
                optional: classify_optional(&field.ty),
            })
        })
        .collect()
}
