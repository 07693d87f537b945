//! `#[derive(VertexAttribPointers)]` for vertex structs used with `glesw`.
//!
//! Every field needs a `#[location = N]` attribute naming its generic
//! attribute index, and a type implementing `glesw::VertexComponent`.  The
//! struct must be `#[repr(C)]` so fields sit at their declared offsets.

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, spanned::Spanned, Attribute, Data, DataStruct, DeriveInput, Error, Field,
    Fields, Lit, Meta, MetaNameValue, NestedMeta,
};

#[proc_macro_derive(VertexAttribPointers, attributes(location))]
pub fn vertex_attrib_pointers_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    generate_impl(&input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn generate_impl(ast: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    if !is_repr_c(&ast.attrs) {
        return Err(Error::new(
            ident.span(),
            "VertexAttribPointers requires #[repr(C)] for a predictable field layout",
        ));
    }

    let calls = generate_calls(ast)?;

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            /// Enable and point every attribute of this vertex type at the
            /// bound array buffer, which holds a tightly packed array of it
            #[allow(unused_variables)]
            pub fn vertex_attrib_pointers<B: ::glesw::Backend>(vertices: &::glesw::Vertices<B>) {
                let stride = ::std::mem::size_of::<Self>();
                let offset = 0usize;

                #(#calls)*
            }
        }
    })
}

fn is_repr_c(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|a| a.path.is_ident("repr"))
        .filter_map(|a| a.parse_meta().ok())
        .any(|meta| match meta {
            Meta::List(list) => list.nested.iter().any(|nested| match nested {
                NestedMeta::Meta(Meta::Path(path)) => path.is_ident("C"),
                _ => false,
            }),
            _ => false,
        })
}

fn generate_calls(ast: &DeriveInput) -> syn::Result<Vec<TokenStream2>> {
    match &ast.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => fields.named.iter().map(generate_one_call).collect(),
        Data::Struct(_) => Err(Error::new(
            ast.ident.span(),
            "Cannot derive VertexAttribPointers for tuple or unit structs",
        )),
        Data::Enum(_) | Data::Union(_) => Err(Error::new(
            ast.ident.span(),
            "Cannot derive VertexAttribPointers for enums or unions",
        )),
    }
}

fn location(field: &Field) -> syn::Result<u32> {
    let attr = field
        .attrs
        .iter()
        .find(|a| a.path.is_ident("location"))
        .ok_or_else(|| {
            Error::new(
                field.span(),
                format!(
                    "Field {} is missing #[location = ?] attribute",
                    field
                        .ident
                        .as_ref()
                        .map(ToString::to_string)
                        .unwrap_or_default()
                ),
            )
        })?;

    match attr.parse_meta()? {
        Meta::NameValue(MetaNameValue {
            lit: Lit::Int(int), ..
        }) => int.base10_parse(),
        meta => Err(Error::new(
            meta.span(),
            "Expected an attribute index, as in #[location = 0]",
        )),
    }
}

fn generate_one_call(field: &Field) -> syn::Result<TokenStream2> {
    let location = location(field)?;
    let ty = &field.ty;

    Ok(quote! {
        let location = ::glesw::AttribLocation::new(#location);
        vertices.enable_attrib_array(location);
        vertices.attrib_pointer(
            location,
            <#ty as ::glesw::VertexComponent>::SIZE,
            <#ty as ::glesw::VertexComponent>::TYPE,
            <#ty as ::glesw::VertexComponent>::NORMALIZED,
            stride,
            offset,
        );
        let offset = offset + ::std::mem::size_of::<#ty>();
    })
}
