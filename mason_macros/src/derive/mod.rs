//! Expansion entry point for `#[derive(HasBuilder)]`.

mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;

/// Parse `input` and emit the builder, trait impls, and value plumbing.
pub(crate) fn expand(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let model = parse::parse_input(input)?;
    let krate = crate_path::resolve(model.attrs.crate_path.as_ref());
    Ok(generate::generate(&model, &krate))
}
