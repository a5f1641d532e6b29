// Modified in 2025 from the original version
// Original source licensed under the Apache License 2.0

//! Procedural derive macros for `ssz::Encode` and `ssz::Decode`.
//!
//! ```ignore
//! #[derive(Encode, Decode)]
//! struct Foo { a: u64, b: Vec<u8> }
//!
//! #[derive(Encode, Decode)]
//! #[ssz(struct_behaviour = "stable_container", max_fields = 16)]
//! struct Bar { a: ssz_types::Optional<u64> }
//!
//! #[derive(Encode, Decode)]
//! #[ssz(enum_behaviour = "union")]
//! enum Baz { A(u64), B(Vec<u8>) }
//! ```

mod container;
mod fields;
mod union_enum;

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use syn::{parse_macro_input, Data, DeriveInput};

/// The container-level `#[ssz(...)]` attribute.
#[derive(Debug, Default, FromDeriveInput)]
#[darling(attributes(ssz), default)]
struct SszAttrs {
    struct_behaviour: Option<String>,
    enum_behaviour: Option<String>,
    max_fields: Option<usize>,
}

fn parse_attrs(input: &DeriveInput) -> Result<SszAttrs, TokenStream> {
    SszAttrs::from_derive_input(input).map_err(|e| TokenStream::from(e.write_errors()))
}

#[proc_macro_derive(Encode, attributes(ssz))]
pub fn derive_encode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let attrs = match parse_attrs(&input) {
        Ok(attrs) => attrs,
        Err(err) => return err,
    };
    let name = &input.ident;

    let result = match &input.data {
        Data::Struct(data) => match attrs.struct_behaviour.as_deref() {
            None | Some("container") => container::plain_encode(name, data),
            Some("stable_container") => container::stable_container_encode(name, data, &attrs),
            Some("profile") => container::profile_encode(name, data, &attrs),
            Some(other) => Err(syn::Error::new_spanned(
                name,
                format!("unknown struct_behaviour `{other}`"),
            )),
        },
        Data::Enum(data) => match attrs.enum_behaviour.as_deref() {
            Some("union") => union_enum::encode(name, data),
            _ => Err(syn::Error::new_spanned(
                name,
                "deriving Encode for an enum requires #[ssz(enum_behaviour = \"union\")]",
            )),
        },
        Data::Union(_) => Err(syn::Error::new_spanned(
            name,
            "Encode cannot be derived for a native Rust union",
        )),
    };

    match result {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

#[proc_macro_derive(Decode, attributes(ssz))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let attrs = match parse_attrs(&input) {
        Ok(attrs) => attrs,
        Err(err) => return err,
    };
    let name = &input.ident;

    let result = match &input.data {
        Data::Struct(data) => match attrs.struct_behaviour.as_deref() {
            None | Some("container") => container::plain_decode(name, data),
            Some("stable_container") => container::stable_container_decode(name, data, &attrs),
            Some("profile") => container::profile_decode(name, data, &attrs),
            Some(other) => Err(syn::Error::new_spanned(
                name,
                format!("unknown struct_behaviour `{other}`"),
            )),
        },
        Data::Enum(data) => match attrs.enum_behaviour.as_deref() {
            Some("union") => union_enum::decode(name, data),
            _ => Err(syn::Error::new_spanned(
                name,
                "deriving Decode for an enum requires #[ssz(enum_behaviour = \"union\")]",
            )),
        },
        Data::Union(_) => Err(syn::Error::new_spanned(
            name,
            "Decode cannot be derived for a native Rust union",
        )),
    };

    match result {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
