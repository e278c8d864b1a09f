//! Value-side generation: accessors, encoding, routed decoding, and display.
//!
//! The value encodes through a borrowed view struct carrying the same serde
//! attributes as the builder, so both encode to the same field names.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::value_skip_predicate;
use crate::derive::crate_path::CratePath;
use crate::derive::parse::{FieldModel, StructModel};

/// Emit accessors and the serde and `Display` impls for the value and the
/// builder.
pub(super) fn generate_value_support(model: &StructModel, krate: &CratePath) -> TokenStream {
    let accessors = generate_accessors(model);
    let serialize = generate_serialize(model, krate);
    let routed = generate_deserialize(model, krate);
    let display = generate_display(model, krate);
    quote! {
        #accessors
        #serialize
        #routed
        #display
    }
}

fn generate_accessors(model: &StructModel) -> TokenStream {
    let ident = &model.ident;
    let accessors = model.fields.iter().map(|field| {
        let FieldModel {
            ident: name,
            ty,
            inner,
            optional,
            ..
        } = field;
        let doc = format!("Returns `{}`.", field.base_name());
        if *optional {
            quote! {
                #[doc = #doc]
                #[must_use]
                pub const fn #name(&self) -> ::core::option::Option<&#inner> {
                    self.#name.as_ref()
                }
            }
        } else {
            quote! {
                #[doc = #doc]
                #[must_use]
                pub const fn #name(&self) -> &#ty {
                    &self.#name
                }
            }
        }
    });
    quote! {
        #[allow(dead_code, reason = "accessors are generated for every field")]
        impl #ident {
            #( #accessors )*
        }
    }
}

fn generate_serialize(model: &StructModel, krate: &CratePath) -> TokenStream {
    let StructModel {
        ident,
        serde_attrs,
        fields,
        ..
    } = model;
    let k = &krate.tokens;
    let serde_crate = krate.item_path("serde");
    let view = format_ident!("__{}MasonView", ident);
    let skip = value_skip_predicate(model.attrs.include, krate);
    let lifetime = (!fields.is_empty()).then(|| quote! { <'__mason> });

    let view_fields = fields.iter().map(|field| {
        let FieldModel {
            ident: name,
            ty,
            optional,
            serde_attrs: field_serde,
            ..
        } = field;
        let skip_attr = skip
            .as_ref()
            .filter(|_| *optional)
            .map(|predicate| quote! { #[serde(skip_serializing_if = #predicate)] });
        quote! {
            #( #field_serde )*
            #skip_attr
            #name: &'__mason #ty
        }
    });
    let borrows = fields.iter().map(|field| {
        let name = &field.ident;
        quote! { #name: &self.#name }
    });

    quote! {
        const _: () = {
            #[derive(#k::serde::Serialize)]
            #[serde(crate = #serde_crate)]
            #( #serde_attrs )*
            struct #view #lifetime {
                #( #view_fields, )*
            }

            impl #k::serde::Serialize for #ident {
                fn serialize<__S>(
                    &self,
                    serializer: __S,
                ) -> ::core::result::Result<__S::Ok, __S::Error>
                where
                    __S: #k::serde::Serializer,
                {
                    #k::serde::Serialize::serialize(
                        &#view {
                            #( #borrows, )*
                        },
                        serializer,
                    )
                }
            }
        };
    }
}

fn generate_deserialize(model: &StructModel, krate: &CratePath) -> TokenStream {
    let ident = &model.ident;
    let k = &krate.tokens;
    quote! {
        impl<'de> #k::serde::Deserialize<'de> for #ident {
            fn deserialize<__D>(deserializer: __D) -> ::core::result::Result<Self, __D::Error>
            where
                __D: #k::serde::Deserializer<'de>,
            {
                #k::routing::deserialize_via_builder(deserializer)
            }
        }
    }
}

fn generate_display(model: &StructModel, krate: &CratePath) -> TokenStream {
    let StructModel { ident, builder, .. } = model;
    let k = &krate.tokens;
    let ident_name = ident.to_string();
    let builder_name = builder.to_string();
    quote! {
        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match #k::HasBuilder::render(self) {
                    ::core::result::Result::Ok(text) => f.write_str(&text),
                    ::core::result::Result::Err(err) => {
                        ::core::write!(f, "<unrenderable {}: {}>", #ident_name, err)
                    }
                }
            }
        }

        impl ::core::fmt::Display for #builder {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match #k::Builder::render(self) {
                    ::core::result::Result::Ok(text) => f.write_str(&text),
                    ::core::result::Result::Err(err) => {
                        ::core::write!(f, "<unrenderable {}: {}>", #builder_name, err)
                    }
                }
            }
        }
    }
}
