//! Codegen for `#[ssz(struct_behaviour = "container"/"stable_container"/"profile")]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataStruct, Ident};

use crate::fields::{named_fields, FieldInfo, OptionalWrapper};
use crate::SszAttrs;

fn bitvector_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// §4.1 rule 3: `optional` may be true only if the profile's base is a StableContainer
/// (`max_fields` present). A profile with no `max_fields` specializes a plain Container, where
/// every field must be required.
fn require_max_fields_for_optional_fields(
    fields: &[FieldInfo<'_>],
    attrs: &SszAttrs,
) -> syn::Result<()> {
    if attrs.max_fields.is_some() {
        return Ok(());
    }
    if let Some(field) = fields.iter().find(|f| f.is_optional()) {
        return Err(syn::Error::new_spanned(
            field.ty,
            "optional fields (`Option<T>`/`Optional<T>`) require #[ssz(max_fields = N)]: \
             a profile with no max_fields specializes a plain Container base, where every \
             field must be required",
        ));
    }
    Ok(())
}

fn wrapper_some(wrapper: OptionalWrapper, inner: &TokenStream) -> TokenStream {
    match wrapper {
        OptionalWrapper::Std => quote! { Some(#inner) },
        OptionalWrapper::Ssz => quote! { ssz_types::Optional::Some(#inner) },
    }
}

fn wrapper_none(wrapper: OptionalWrapper) -> TokenStream {
    match wrapper {
        OptionalWrapper::Std => quote! { None },
        OptionalWrapper::Ssz => quote! { ssz_types::Optional::None },
    }
}

/// Plain `Container`: every field is always present, encoded/decoded via `SszEncoder` /
/// `SszDecoderBuilder`, exactly as the teacher's own `Vec<T>` impls marshal heterogeneous items.
pub fn plain_encode(name: &Ident, data: &DataStruct) -> syn::Result<TokenStream> {
    let fields = named_fields(&data.fields)?;
    let idents: Vec<_> = fields.iter().map(|f| f.ident).collect();
    let tys: Vec<_> = fields.iter().map(|f| f.ty).collect();

    let is_fixed = if tys.is_empty() {
        quote! { true }
    } else {
        quote! { #(<#tys as ssz::Encode>::is_ssz_fixed_len())&&* }
    };
    let fixed_sum = if tys.is_empty() {
        quote! { 0 }
    } else {
        quote! { #(<#tys as ssz::Encode>::ssz_fixed_len())+* }
    };

    Ok(quote! {
        impl ssz::Encode for #name {
            fn is_ssz_fixed_len() -> bool {
                #is_fixed
            }

            fn ssz_fixed_len() -> usize {
                if <Self as ssz::Encode>::is_ssz_fixed_len() {
                    #fixed_sum
                } else {
                    ssz::BYTES_PER_LENGTH_OFFSET
                }
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                let offset = #fixed_sum;
                let mut encoder = ssz::SszEncoder::container(buf, offset);
                #(encoder.append(&self.#idents);)*
                encoder.finalize();
            }

            fn ssz_bytes_len(&self) -> usize {
                if <Self as ssz::Encode>::is_ssz_fixed_len() {
                    <Self as ssz::Encode>::ssz_fixed_len()
                } else {
                    let mut len = 0usize;
                    #(
                        len += if <#tys as ssz::Encode>::is_ssz_fixed_len() {
                            <#tys as ssz::Encode>::ssz_fixed_len()
                        } else {
                            ssz::BYTES_PER_LENGTH_OFFSET + self.#idents.ssz_bytes_len()
                        };
                    )*
                    len
                }
            }
        }
    })
}

pub fn plain_decode(name: &Ident, data: &DataStruct) -> syn::Result<TokenStream> {
    let fields = named_fields(&data.fields)?;
    let idents: Vec<_> = fields.iter().map(|f| f.ident).collect();
    let tys: Vec<_> = fields.iter().map(|f| f.ty).collect();

    let is_fixed = if tys.is_empty() {
        quote! { true }
    } else {
        quote! { #(<#tys as ssz::Decode>::is_ssz_fixed_len())&&* }
    };
    let fixed_sum = if tys.is_empty() {
        quote! { 0 }
    } else {
        quote! { #(<#tys as ssz::Decode>::ssz_fixed_len())+* }
    };

    Ok(quote! {
        impl ssz::Decode for #name {
            fn is_ssz_fixed_len() -> bool {
                #is_fixed
            }

            fn ssz_fixed_len() -> usize {
                if <Self as ssz::Decode>::is_ssz_fixed_len() {
                    #fixed_sum
                } else {
                    ssz::BYTES_PER_LENGTH_OFFSET
                }
            }

            fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, ssz::DecodeError> {
                let mut builder = ssz::SszDecoderBuilder::new(bytes);
                #(builder.register_type::<#tys>()?;)*
                let mut decoder = builder.build()?;
                Ok(Self {
                    #(#idents: decoder.decode_next()?,)*
                })
            }
        }
    })
}

/// `StableContainer[N]`: every field is `Optional<T>`, gated by an `N`-bit active-fields
/// bitvector that prefixes the encoding (§4.1, §4.3, §4.4).
pub fn stable_container_encode(
    name: &Ident,
    data: &DataStruct,
    attrs: &SszAttrs,
) -> syn::Result<TokenStream> {
    let max_fields = attrs.max_fields.ok_or_else(|| {
        syn::Error::new_spanned(name, "stable_container requires #[ssz(max_fields = N)]")
    })?;
    let fields = named_fields(&data.fields)?;
    for field in &fields {
        if field.optional.is_none() {
            return Err(syn::Error::new_spanned(
                field.ty,
                "every field of a stable_container must be `Optional<T>`",
            ));
        }
    }

    let idents: Vec<_> = fields.iter().map(|f| f.ident).collect();
    let inner_tys: Vec<_> = fields.iter().map(|f| f.codec_ty()).collect();
    let indices: Vec<_> = (0..fields.len()).collect();

    Ok(quote! {
        impl ssz::Encode for #name {
            fn is_ssz_fixed_len() -> bool {
                false
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                let start = buf.len();
                let mut active_fields = ssz::BitVector::<#max_fields>::new();
                #(
                    if self.#idents.is_some() {
                        active_fields.set(#indices, true).expect("field index within max_fields");
                    }
                )*
                buf.extend_from_slice(&active_fields.clone().into_bytes());

                let mut offset = 0usize;
                #(
                    if self.#idents.is_some() {
                        offset += <#inner_tys as ssz::Encode>::ssz_fixed_len();
                    }
                )*
                let mut encoder = ssz::SszEncoder::container(buf, offset);
                #(
                    if let ssz_types::Optional::Some(ref inner) = self.#idents {
                        encoder.append(inner);
                    }
                )*
                encoder.finalize();
                ssz::tracing::trace!(
                    schema = stringify!(#name),
                    len = buf.len() - start,
                    "encoded stable_container"
                );
            }

            fn ssz_bytes_len(&self) -> usize {
                let mut len = ssz::BitVector::<#max_fields>::new().ssz_bytes_len();
                #(
                    if let ssz_types::Optional::Some(ref inner) = self.#idents {
                        len += if <#inner_tys as ssz::Encode>::is_ssz_fixed_len() {
                            <#inner_tys as ssz::Encode>::ssz_fixed_len()
                        } else {
                            ssz::BYTES_PER_LENGTH_OFFSET + inner.ssz_bytes_len()
                        };
                    }
                )*
                len
            }
        }
    })
}

pub fn stable_container_decode(
    name: &Ident,
    data: &DataStruct,
    attrs: &SszAttrs,
) -> syn::Result<TokenStream> {
    let max_fields = attrs.max_fields.ok_or_else(|| {
        syn::Error::new_spanned(name, "stable_container requires #[ssz(max_fields = N)]")
    })?;
    let fields = named_fields(&data.fields)?;
    for field in &fields {
        if field.optional.is_none() {
            return Err(syn::Error::new_spanned(
                field.ty,
                "every field of a stable_container must be `Optional<T>`",
            ));
        }
    }

    let idents: Vec<_> = fields.iter().map(|f| f.ident).collect();
    let inner_tys: Vec<_> = fields.iter().map(|f| f.codec_ty()).collect();
    let indices: Vec<_> = (0..fields.len()).collect();
    let field_count = fields.len();
    let bitvector_bytes = bitvector_len(max_fields);

    Ok(quote! {
        impl ssz::Decode for #name {
            fn is_ssz_fixed_len() -> bool {
                false
            }

            fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, ssz::DecodeError> {
                ssz::tracing::trace!(
                    schema = stringify!(#name),
                    len = bytes.len(),
                    "decoding stable_container"
                );
                if bytes.len() < #bitvector_bytes {
                    let err = ssz::DecodeError::InvalidByteLength {
                        len: bytes.len(),
                        expected: #bitvector_bytes,
                    };
                    ssz::tracing::warn!(schema = stringify!(#name), error = ?err, "stable_container decode failed");
                    return Err(err);
                }
                let active_fields = <ssz::BitVector::<#max_fields> as ssz::Decode>::from_ssz_bytes(
                    &bytes[..#bitvector_bytes],
                )?;
                for i in #field_count..#max_fields {
                    if active_fields.get(i).unwrap_or(false) {
                        let err = ssz::DecodeError::BytesInvalid(format!(
                            "unknown field bit {i} set"
                        ));
                        ssz::tracing::warn!(schema = stringify!(#name), error = ?err, "stable_container decode failed");
                        return Err(err);
                    }
                }

                let body = &bytes[#bitvector_bytes..];
                let mut builder = ssz::SszDecoderBuilder::new(body);
                #(
                    if active_fields.get(#indices).unwrap_or(false) {
                        builder.register_type::<#inner_tys>()?;
                    }
                )*
                let mut decoder = builder.build()?;
                Ok(Self {
                    #(
                        #idents: if active_fields.get(#indices).unwrap_or(false) {
                            ssz_types::Optional::Some(decoder.decode_next()?)
                        } else {
                            ssz_types::Optional::None
                        },
                    )*
                })
            }
        }
    })
}

/// `Profile[B]`: required fields are always present; fields wrapped in `Optional<T>`/`Option<T>`
/// are gated by an `o`-bit bitvector prefix, omitted entirely when `o == 0` (§4.1, §4.3, §4.4).
///
/// Per §4.1 rule 3, `optional` may be true only if `B` is a StableContainer: a profile with no
/// `max_fields` specializes a plain Container base, where every field must be required.
pub fn profile_encode(name: &Ident, data: &DataStruct, attrs: &SszAttrs) -> syn::Result<TokenStream> {
    let fields = named_fields(&data.fields)?;
    require_max_fields_for_optional_fields(&fields, attrs)?;
    let optional_count = fields.iter().filter(|f| f.is_optional()).count();

    let mut opt_idx = 0usize;
    let mut set_bits = Vec::new();
    let mut offset_terms = Vec::new();
    let mut append_stmts = Vec::new();
    let mut len_stmts = Vec::new();
    let mut required_tys = Vec::new();

    for field in &fields {
        let ident = field.ident;
        match &field.optional {
            None => {
                let ty = field.ty;
                required_tys.push(ty.clone());
                offset_terms.push(quote! { <#ty as ssz::Encode>::ssz_fixed_len() });
                append_stmts.push(quote! { encoder.append(&self.#ident); });
                len_stmts.push(quote! {
                    len += if <#ty as ssz::Encode>::is_ssz_fixed_len() {
                        <#ty as ssz::Encode>::ssz_fixed_len()
                    } else {
                        ssz::BYTES_PER_LENGTH_OFFSET + self.#ident.ssz_bytes_len()
                    };
                });
            }
            Some((wrapper, inner)) => {
                let i = opt_idx;
                opt_idx += 1;
                set_bits.push(quote! {
                    opt_fields.set(#i, self.#ident.is_some()).expect("field index within range");
                });
                offset_terms.push(quote! {
                    if self.#ident.is_some() { <#inner as ssz::Encode>::ssz_fixed_len() } else { 0 }
                });
                let bind = wrapper_some(*wrapper, &quote! { ref inner });
                append_stmts.push(quote! {
                    if let #bind = self.#ident {
                        encoder.append(inner);
                    }
                });
                len_stmts.push(quote! {
                    if let #bind = self.#ident {
                        len += if <#inner as ssz::Encode>::is_ssz_fixed_len() {
                            <#inner as ssz::Encode>::ssz_fixed_len()
                        } else {
                            ssz::BYTES_PER_LENGTH_OFFSET + inner.ssz_bytes_len()
                        };
                    }
                });
            }
        }
    }

    let prefix_bytes = bitvector_len(optional_count);
    let is_fixed = if required_tys.is_empty() {
        quote! { #optional_count == 0 }
    } else {
        quote! { #optional_count == 0 && #(<#required_tys as ssz::Encode>::is_ssz_fixed_len())&&* }
    };

    let fixed_sum = if required_tys.is_empty() {
        quote! { 0 }
    } else {
        quote! { #(<#required_tys as ssz::Encode>::ssz_fixed_len())+* }
    };

    let prefix_stmt = if optional_count == 0 {
        quote! {}
    } else {
        quote! {
            let mut opt_fields = ssz::BitVector::<#optional_count>::new();
            #(#set_bits)*
            buf.extend_from_slice(&opt_fields.clone().into_bytes());
        }
    };
    let prefix_len_stmt = if optional_count == 0 {
        quote! { 0usize }
    } else {
        quote! { #prefix_bytes }
    };

    Ok(quote! {
        impl ssz::Encode for #name {
            fn is_ssz_fixed_len() -> bool {
                #is_fixed
            }

            fn ssz_fixed_len() -> usize {
                if <Self as ssz::Encode>::is_ssz_fixed_len() {
                    #fixed_sum
                } else {
                    ssz::BYTES_PER_LENGTH_OFFSET
                }
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                let start = buf.len();
                #prefix_stmt
                let offset = #(#offset_terms)+*;
                let mut encoder = ssz::SszEncoder::container(buf, offset);
                #(#append_stmts)*
                encoder.finalize();
                ssz::tracing::trace!(
                    schema = stringify!(#name),
                    len = buf.len() - start,
                    "encoded profile"
                );
            }

            fn ssz_bytes_len(&self) -> usize {
                if <Self as ssz::Encode>::is_ssz_fixed_len() {
                    <Self as ssz::Encode>::ssz_fixed_len()
                } else {
                    let mut len = #prefix_len_stmt;
                    #(#len_stmts)*
                    len
                }
            }
        }
    })
}

pub fn profile_decode(name: &Ident, data: &DataStruct, attrs: &SszAttrs) -> syn::Result<TokenStream> {
    let fields = named_fields(&data.fields)?;
    require_max_fields_for_optional_fields(&fields, attrs)?;
    let optional_count = fields.iter().filter(|f| f.is_optional()).count();
    let prefix_bytes = bitvector_len(optional_count);

    let mut opt_idx = 0usize;
    let mut register_stmts = Vec::new();
    let mut build_fields = Vec::new();
    let mut required_tys = Vec::new();

    for field in &fields {
        let ident = field.ident;
        match &field.optional {
            None => {
                let ty = field.ty;
                required_tys.push(ty.clone());
                register_stmts.push(quote! { builder.register_type::<#ty>()?; });
                build_fields.push(quote! { #ident: decoder.decode_next()?, });
            }
            Some((wrapper, inner)) => {
                let i = opt_idx;
                opt_idx += 1;
                register_stmts.push(quote! {
                    if opt_fields.get(#i).unwrap_or(false) {
                        builder.register_type::<#inner>()?;
                    }
                });
                let some = wrapper_some(*wrapper, &quote! { decoder.decode_next()? });
                let none = wrapper_none(*wrapper);
                build_fields.push(quote! {
                    #ident: if opt_fields.get(#i).unwrap_or(false) {
                        #some
                    } else {
                        #none
                    },
                });
            }
        }
    }

    let is_fixed = if required_tys.is_empty() {
        quote! { #optional_count == 0 }
    } else {
        quote! { #optional_count == 0 && #(<#required_tys as ssz::Decode>::is_ssz_fixed_len())&&* }
    };
    let fixed_sum = if required_tys.is_empty() {
        quote! { 0 }
    } else {
        quote! { #(<#required_tys as ssz::Decode>::ssz_fixed_len())+* }
    };

    let prefix_parse = if optional_count == 0 {
        quote! {
            let body = bytes;
        }
    } else {
        quote! {
            if bytes.len() < #prefix_bytes {
                let err = ssz::DecodeError::InvalidByteLength {
                    len: bytes.len(),
                    expected: #prefix_bytes,
                };
                ssz::tracing::warn!(schema = stringify!(#name), error = ?err, "profile decode failed");
                return Err(err);
            }
            let opt_fields = <ssz::BitVector::<#optional_count> as ssz::Decode>::from_ssz_bytes(
                &bytes[..#prefix_bytes],
            )?;
            let body = &bytes[#prefix_bytes..];
        }
    };

    Ok(quote! {
        impl ssz::Decode for #name {
            fn is_ssz_fixed_len() -> bool {
                #is_fixed
            }

            fn ssz_fixed_len() -> usize {
                if <Self as ssz::Decode>::is_ssz_fixed_len() {
                    #fixed_sum
                } else {
                    ssz::BYTES_PER_LENGTH_OFFSET
                }
            }

            fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, ssz::DecodeError> {
                ssz::tracing::trace!(
                    schema = stringify!(#name),
                    len = bytes.len(),
                    "decoding profile"
                );
                #prefix_parse
                let mut builder = ssz::SszDecoderBuilder::new(body);
                #(#register_stmts)*
                let mut decoder = builder.build()?;
                Ok(Self {
                    #(#build_fields)*
                })
            }
        }
    })
}
