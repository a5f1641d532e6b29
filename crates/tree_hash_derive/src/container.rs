//! Codegen for `#[tree_hash(struct_behaviour = "container"/"stable_container"/"profile")]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataStruct, Ident};

use crate::fields::{named_fields, OptionalWrapper};
use crate::TreeHashAttrs;

/// Plain `Container`: one chunk per field, merkleized in declaration order. Mirrors how
/// [`tree_hash::impls::Option`]-style types fall back to a single root per field, generalized to
/// an arbitrary number of fields.
pub fn plain(name: &Ident, data: &DataStruct) -> syn::Result<TokenStream> {
    let fields = named_fields(&data.fields)?;
    let idents: Vec<_> = fields.iter().map(|f| f.ident).collect();

    Ok(quote! {
        impl<H: tree_hash::TreeHashDigest> tree_hash::TreeHash<H> for #name {
            fn tree_hash_type() -> tree_hash::TreeHashType {
                tree_hash::TreeHashType::Container
            }

            fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
                unreachable!("Container should never be packed.")
            }

            fn tree_hash_packing_factor() -> usize {
                unreachable!("Container should never be packed.")
            }

            fn tree_hash_root(&self) -> H::Output {
                let mut leaves = Vec::with_capacity(H::HASH_SIZE * {
                    let fields: &[&str] = &[#(stringify!(#idents)),*];
                    fields.len()
                });
                #(leaves.extend_from_slice(self.#idents.tree_hash_root().as_ref());)*
                tree_hash::merkle_root_with_hasher::<H>(&leaves, 0)
            }
        }
    })
}

/// `StableContainer[N]`/`Profile[B]`-over-StableContainer: root is
/// `hash32_concat(data_root, active_fields_root)` (§4.6). A plain `StableContainer` declares every
/// field as `Optional<T>`; a `Profile` pins some fields as always-present (a bare `T`) and narrows
/// others (`Optional<T>`), per §9's "Profile-level requiredness is an additional constraint on top
/// of the bitvector".
pub fn stable_container(name: &Ident, data: &DataStruct, attrs: &TreeHashAttrs) -> syn::Result<TokenStream> {
    let max_fields = attrs.max_fields.ok_or_else(|| {
        syn::Error::new_spanned(name, "stable_container requires #[tree_hash(max_fields = N)]")
    })?;
    let fields = named_fields(&data.fields)?;
    let indices: Vec<_> = fields.iter().map(|f| f.stable_index.unwrap()).collect();

    let set_bits = fields.iter().zip(&indices).map(|(field, index)| {
        let ident = field.ident;
        if field.is_optional() {
            quote! {
                if self.#ident.is_some() {
                    active_fields.set(#index, true).expect("field index within max_fields");
                }
            }
        } else {
            quote! {
                active_fields.set(#index, true).expect("field index within max_fields");
            }
        }
    });

    let write_leaves = fields.iter().zip(&indices).map(|(field, index)| {
        let ident = field.ident;
        match &field.optional {
            Some((OptionalWrapper::Ssz, _)) => quote! {
                if let ssz_types::Optional::Some(ref inner) = self.#ident {
                    let root = inner.tree_hash_root();
                    leaves[H::HASH_SIZE * #index..H::HASH_SIZE * (#index + 1)]
                        .copy_from_slice(root.as_ref());
                }
            },
            Some((OptionalWrapper::Std, _)) => quote! {
                if let Some(ref inner) = self.#ident {
                    let root = inner.tree_hash_root();
                    leaves[H::HASH_SIZE * #index..H::HASH_SIZE * (#index + 1)]
                        .copy_from_slice(root.as_ref());
                }
            },
            None => quote! {
                {
                    let root = self.#ident.tree_hash_root();
                    leaves[H::HASH_SIZE * #index..H::HASH_SIZE * (#index + 1)]
                        .copy_from_slice(root.as_ref());
                }
            },
        }
    });

    Ok(quote! {
        impl<H: tree_hash::TreeHashDigest> tree_hash::TreeHash<H> for #name {
            fn tree_hash_type() -> tree_hash::TreeHashType {
                tree_hash::TreeHashType::StableContainer
            }

            fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
                unreachable!("StableContainer should never be packed.")
            }

            fn tree_hash_packing_factor() -> usize {
                unreachable!("StableContainer should never be packed.")
            }

            fn tree_hash_root(&self) -> H::Output {
                let mut active_fields = ssz::BitVector::<#max_fields>::new();
                #(#set_bits)*
                let active_fields_root =
                    <ssz::BitVector::<#max_fields> as tree_hash::TreeHash<H>>::tree_hash_root(&active_fields);

                let mut leaves = vec![0u8; H::HASH_SIZE * #max_fields];
                #(#write_leaves)*
                let data_root = tree_hash::merkle_root_with_hasher::<H>(&leaves, #max_fields);

                tree_hash::mix_in_aux_with_hasher::<H>(&data_root, &active_fields_root)
            }
        }
    })
}

/// `Profile[B]`: over a `StableContainer` base (`max_fields` given), the hash is computed at the
/// base's layout with this profile's declared fields placed at their `stable_index` (§4.6); over
/// a plain `Container` base (`max_fields` absent), it merkleizes like a plain container (P7).
pub fn profile(name: &Ident, data: &DataStruct, attrs: &TreeHashAttrs) -> syn::Result<TokenStream> {
    match attrs.max_fields {
        Some(_) => stable_container(name, data, attrs),
        None => plain(name, data),
    }
}
