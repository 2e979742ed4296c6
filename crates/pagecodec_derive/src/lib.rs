use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields, parse_macro_input, parse_quote};

/// Stores a single-field tuple struct exactly like the type it wraps.
///
/// Implements `pagecodec::Newtype` and `pagecodec::Codable`, so the wrapper
/// gets `NewtypeCodec<Self>` as its default codec.
#[proc_macro_derive(Newtype)]
pub fn derive_newtype(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;

    let inner_type = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Unnamed(fields),
            ..
        }) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "Newtype can only be derived for single-field tuple structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote! { #inner_type: ::pagecodec::Codable });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::pagecodec::Newtype for #struct_name #ty_generics #where_clause {
            type Inner = #inner_type;

            #[inline]
            fn as_inner(&self) -> &Self::Inner {
                &self.0
            }

            #[inline]
            fn into_inner(self) -> Self::Inner {
                self.0
            }

            #[inline]
            fn from_inner(inner: Self::Inner) -> Self {
                Self(inner)
            }
        }

        impl #impl_generics ::pagecodec::Codable for #struct_name #ty_generics #where_clause {
            type Codec = ::pagecodec::NewtypeCodec<Self>;
        }
    };

    TokenStream::from(expanded)
}
