//! `HasBuilder` and `Builder` impl generation.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::crate_path::CratePath;
use crate::derive::parse::{FieldModel, StructModel};

/// Emit the trait impls binding the value and its builder.
pub(super) fn generate_trait_impls(model: &StructModel, krate: &CratePath) -> TokenStream {
    let StructModel {
        ident,
        builder,
        fields,
        ..
    } = model;
    let k = &krate.tokens;
    let names: Vec<_> = fields.iter().map(|field| &field.ident).collect();
    let to_builder = fields.iter().map(|field| to_builder_field(field, krate));
    let build = fields.iter().map(build_field);

    quote! {
        impl #k::HasBuilder for #ident {
            type Builder = #builder;

            fn to_builder(&self) -> #builder {
                #builder {
                    #( #to_builder, )*
                }
            }
        }

        impl #k::Builder for #builder {
            type Value = #ident;

            fn build(&self) -> #ident {
                #ident {
                    #( #build, )*
                }
            }

            fn overlay(&mut self, staged: Self) {
                let Self { #( #names ),* } = staged;
                #(
                    if !#names.is_missing() {
                        self.#names = #names;
                    }
                )*
            }
        }
    }
}

fn to_builder_field(field: &FieldModel, krate: &CratePath) -> TokenStream {
    let k = &krate.tokens;
    let name = &field.ident;
    if field.optional {
        quote! { #name: #k::Field::from(::core::clone::Clone::clone(&self.#name)) }
    } else {
        quote! { #name: #k::Field::Value(::core::clone::Clone::clone(&self.#name)) }
    }
}

fn build_field(field: &FieldModel) -> TokenStream {
    let name = &field.ident;
    if field.optional {
        return quote! { #name: self.#name.to_option() };
    }
    field.default.as_ref().map_or_else(
        || quote! { #name: self.#name.value_or_else(::core::default::Default::default) },
        |fallback| quote! { #name: self.#name.value_or_else(|| #fallback) },
    )
}
