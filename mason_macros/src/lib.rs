//! Procedural macros for `mason`.
//!
//! `#[derive(HasBuilder)]` turns a struct with named fields into an immutable
//! value type: it emits a companion builder whose fields are tri-state
//! `mason::Field`s, implements the `HasBuilder` and
//! `Builder` traits for the pair, and routes the value's deserialisation
//! through the builder.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive a builder and the value/builder trait pair for a struct.
///
/// Struct attributes:
///
/// - `#[mason(builder = "Name")]` names the builder (default `<Struct>Builder`).
/// - `#[mason(include = "non_null" | "non_absent" | "always")]` fixes the
///   inclusion policy for this type instead of following the active mapper.
/// - `#[mason(crate = "path")]` points generated code at a renamed `mason`
///   dependency.
///
/// Field attributes:
///
/// - `#[mason(default = expr)]` supplies the value `build()` uses for a
///   non-`Option` field that is missing or null.
///
/// `#[serde(...)]` attributes are forwarded to the builder and to the value's
/// encoded form. Field keys the derive manages itself (`default`, `skip*`,
/// `with`) are rejected, as are container keys that would make the builder
/// refuse unknown input or decode around it (`deny_unknown_fields`,
/// `transparent`, `from`, `into`, `tag`, `untagged`).
#[proc_macro_derive(HasBuilder, attributes(mason, serde))]
pub fn derive_has_builder(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
