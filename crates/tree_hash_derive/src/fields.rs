//! Shared field-classification helpers.

use syn::{Field, Fields, GenericArgument, PathArguments, Type};

/// Which flavour of "optional" wraps a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalWrapper {
    /// `std::option::Option<T>`.
    Std,
    /// `ssz_types::Optional<T>`.
    Ssz,
}

pub struct FieldInfo<'a> {
    pub ident: &'a syn::Ident,
    pub ty: &'a Type,
    pub optional: Option<(OptionalWrapper, Type)>,
    /// The explicit `#[tree_hash(stable_index = i)]` attribute, if present.
    pub stable_index: Option<usize>,
}

impl FieldInfo<'_> {
    pub fn is_optional(&self) -> bool {
        self.optional.is_some()
    }

    pub fn codec_ty(&self) -> &Type {
        match &self.optional {
            Some((_, inner)) => inner,
            None => self.ty,
        }
    }
}

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

fn parse_stable_index(field: &Field) -> syn::Result<Option<usize>> {
    for attr in &field.attrs {
        if !attr.path().is_ident("tree_hash") {
            continue;
        }
        let mut found = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("stable_index") {
                let value = meta.value()?;
                let lit: syn::LitInt = value.parse()?;
                found = Some(lit.base10_parse::<usize>()?);
                Ok(())
            } else {
                Err(meta.error("unrecognized tree_hash field attribute"))
            }
        })?;
        if found.is_some() {
            return Ok(found);
        }
    }
    Ok(None)
}

pub fn named_fields(fields: &Fields) -> syn::Result<Vec<FieldInfo<'_>>> {
    let Fields::Named(named) = fields else {
        return Err(syn::Error::new_spanned(
            fields,
            "tree_hash_derive only supports structs with named fields",
        ));
    };
    named
        .named
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let ident = field
                .ident
                .as_ref()
                .expect("Fields::Named fields always have an ident");
            let stable_index = parse_stable_index(field)?.or(Some(i));
            Ok(FieldInfo {
                ident,
                ty: &field.ty,
                optional: classify_optional(&field.ty),
                stable_index,
            })
        })
        .collect()
}
