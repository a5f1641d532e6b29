//! Codegen for `#[ssz(enum_behaviour = "union")]`.
//!
//! A selector byte identifies the active variant, followed by the variant's own encoding (or
//! nothing at all for a unit variant). Selectors are assigned by declaration order, starting at 0.

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

pub fn encode(name: &Ident, data: &DataEnum) -> syn::Result<TokenStream> {
    let variants = variants(data)?;

    let append_arms = variants.iter().map(|v| {
        let ident = v.ident;
        let selector = v.selector;
        match v.inner {
            Some(_) => quote! {
                #name::#ident(inner) => {
                    buf.push(#selector);
                    inner.ssz_append(buf);
                }
            },
            None => quote! {
                #name::#ident => {
                    buf.push(#selector);
                }
            },
        }
    });

    let len_arms = variants.iter().map(|v| {
        let ident = v.ident;
        match v.inner {
            Some(_) => quote! { #name::#ident(inner) => 1 + inner.ssz_bytes_len(), },
            None => quote! { #name::#ident => 1, },
        }
    });

    Ok(quote! {
        impl ssz::Encode for #name {
            fn is_ssz_fixed_len() -> bool {
                false
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                match self {
                    #(#append_arms)*
                }
            }

            fn ssz_bytes_len(&self) -> usize {
                match self {
                    #(#len_arms)*
                }
            }
        }
    })
}

pub fn decode(name: &Ident, data: &DataEnum) -> syn::Result<TokenStream> {
    let variants = variants(data)?;

    let match_arms = variants.iter().map(|v| {
        let ident = v.ident;
        let selector = v.selector;
        match v.inner {
            Some(ty) => quote! {
                #selector => Ok(#name::#ident(<#ty as ssz::Decode>::from_ssz_bytes(body)?)),
            },
            None => quote! {
                #selector => {
                    if !body.is_empty() {
                        return Err(ssz::DecodeError::BytesInvalid(
                            "unexpected trailing bytes for unit union variant".to_string(),
                        ));
                    }
                    Ok(#name::#ident)
                }
            },
        }
    });

    Ok(quote! {
        impl ssz::Decode for #name {
            fn is_ssz_fixed_len() -> bool {
                false
            }

            fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, ssz::DecodeError> {
                let (selector, body) = ssz::split_union_bytes(bytes)?;
                let selector: u8 = selector.into();
                match selector {
                    #(#match_arms)*
                    other => Err(ssz::DecodeError::UnionSelectorInvalid(other)),
                }
            }
        }
    })
}
