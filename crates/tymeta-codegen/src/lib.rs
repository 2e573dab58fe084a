// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// `#[derive(Fields)]` macro: generates a `tymeta::Fields` impl
///
/// The impl records the struct's field value types as a descriptor sequence
/// (`Members`, a nested `Cons` chain in declaration order) and the matching
/// field names (`NAMES`).
///
/// Supports structs with named fields only. Tuple structs, unit structs,
/// enums, unions, and generic structs are rejected with a compile error at
/// the declaration.
///
/// Example:
/// ```ignore
/// use tymeta::Fields;
///
/// #[derive(Fields)]
/// struct Person {
///     fullname: String,
///     height: f32,
///     age: f32,
/// }
///
/// // <Person as Fields>::Members is Cons<String, Cons<f32, Cons<f32, Nil>>>
/// // <Person as Fields>::NAMES is ["fullname", "height", "age"]
/// ```
#[proc_macro_derive(Fields)]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    // Descriptor sequences are closed Cons chains; open type parameters
    // cannot be spelled into one.
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "Generic structs are not supported")
            .to_compile_error()
            .into();
    }

    // Parse struct fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(f) => &f.named,
            _ => {
                return syn::Error::new_spanned(&input, "Only named fields are supported")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "Only structs are supported")
                .to_compile_error()
                .into()
        }
    };

    let mut field_names = Vec::new();
    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            return syn::Error::new_spanned(field, "Field must have a name")
                .to_compile_error()
                .into();
        };
        field_names.push(field_name.to_string());
    }

    // Build the member chain back to front: Cons<T0, Cons<T1, .. Nil>>
    let mut members = quote! { ::tymeta::Nil };
    for field in fields.iter().rev() {
        let field_type = &field.ty;
        members = quote! { ::tymeta::Cons<#field_type, #members> };
    }

    let expanded = quote! {
        impl ::tymeta::Fields for #name {
            type Members = #members;
            const NAMES: &'static [&'static str] = &[#(#field_names),*];
        }
    };

    TokenStream::from(expanded)
}
