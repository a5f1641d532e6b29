//! Codegen for `#[tree_hash(enum_behaviour = "union")]`.
//!
//! Mirrors `impl<T: TreeHash<H>> TreeHash<H> for Option<T>`: the root of the active variant (or
//! the zero hash for a unit variant) is mixed in with the variant's selector.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, Fields, Ident};

struct Variant<'a> {
    ident: &'a Ident,
    selector: u8,
    inner: Option<&'a syn::Type>,
}

fn variants(data: &DataEnum) -> syn::Result<Vec<Variant<'_>>> {
    data.variants
        .iter()
        .enumerate()
        .map(|(i, variant)| {
            let selector = u8::try_from(i).map_err(|_| {
                syn::Error::new_spanned(variant, "union cannot declare more than 256 variants")
            })?;
            let inner = match &variant.fields {
                Fields::Unit => None,
                Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                    Some(&fields.unnamed.first().unwrap().ty)
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &variant.fields,
                        "union variants must be a unit variant or a single-field tuple variant",
                    ))
                }
            };
            Ok(Variant { ident: &variant.ident, selector, inner })
        })
        .collect()
}

pub fn derive(name: &Ident, data: &DataEnum) -> syn::Result<TokenStream> {
    let variants = variants(data)?;

    let root_arms = variants.iter().map(|v| {
        let ident = v.ident;
        let selector = v.selector;
        match v.inner {
            Some(_) => quote! {
                #name::#ident(inner) => (inner.tree_hash_root(), #selector),
            },
            None => quote! {
                #name::#ident => (H::get_zero_hash(0), #selector),
            },
        }
    });

    Ok(quote! {
        impl<H: tree_hash::TreeHashDigest> tree_hash::TreeHash<H> for #name {
            fn tree_hash_type() -> tree_hash::TreeHashType {
                tree_hash::TreeHashType::Container
            }

            fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
                unreachable!("Union should never be packed.")
            }

            fn tree_hash_packing_factor() -> usize {
                unreachable!("Union should never be packed.")
            }

            fn tree_hash_root(&self) -> H::Output {
                let (root, selector) = match self {
                    #(#root_arms)*
                };
                tree_hash::mix_in_selector_with_hasher::<H>(&root, selector)
                    .expect("derive macro assigns selectors within MAX_UNION_SELECTOR")
            }
        }
    })
}
