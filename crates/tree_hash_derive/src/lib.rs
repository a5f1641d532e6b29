// Modified in 2025 from the original version
// Original source licensed under the Apache License 2.0

//! Procedural derive macro for `tree_hash::TreeHash`.
//!
//! ```ignore
//! #[derive(TreeHash)]
//! struct Foo { a: u64, b: Vec<u8> }
//!
//! #[derive(TreeHash)]
//! #[tree_hash(struct_behaviour = "stable_container", max_fields = 16)]
//! struct Bar { a: ssz_types::Optional<u64> }
//!
//! #[derive(TreeHash)]
//! #[tree_hash(enum_behaviour = "union")]
//! enum Baz { A(u64), B(Vec<u8>) }
//! ```

mod container;
mod fields;
mod union_enum;

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use syn::{parse_macro_input, Data, DeriveInput};

/// The container-level `#[tree_hash(...)]` attribute.
#[derive(Debug, Default, FromDeriveInput)]
#[darling(attributes(tree_hash), default)]
struct TreeHashAttrs {
    struct_behaviour: Option<String>,
    enum_behaviour: Option<String>,
    max_fields: Option<usize>,
}

fn parse_attrs(input: &DeriveInput) -> Result<TreeHashAttrs, TokenStream> {
    TreeHashAttrs::from_derive_input(input).map_err(|e| TokenStream::from(e.write_errors()))
}

#[proc_macro_derive(TreeHash, attributes(tree_hash))]
pub fn derive_tree_hash(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let attrs = match parse_attrs(&input) {
        Ok(attrs) => attrs,
        Err(err) => return err,
    };
    let name = &input.ident;

    let result = match &input.data {
        Data::Struct(data) => match attrs.struct_behaviour.as_deref() {
            None | Some("container") => container::plain(name, data),
            Some("stable_container") => container::stable_container(name, data, &attrs),
            Some("profile") => container::profile(name, data, &attrs),
            Some(other) => Err(syn::Error::new_spanned(
                name,
                format!("unknown struct_behaviour `{other}`"),
            )),
        },
        Data::Enum(data) => match attrs.enum_behaviour.as_deref() {
            Some("union") => union_enum::derive(name, data),
            _ => Err(syn::Error::new_spanned(
                name,
                "deriving TreeHash for an enum requires #[tree_hash(enum_behaviour = \"union\")]",
            )),
        },
        Data::Union(_) => Err(syn::Error::new_spanned(
            name,
            "TreeHash cannot be derived for a native Rust union",
        )),
    };

    match result {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
