//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[mason(crate = "...")]` attribute value into the
//! tokens generated code uses in place of a hardcoded `mason::` prefix.

use proc_macro2::TokenStream;
use quote::quote;

/// Generated paths rooted at the resolved crate.
///
/// Serde's own attributes take paths as string literals, so the textual form
/// is kept alongside the tokens.
pub(crate) struct CratePath {
    pub tokens: TokenStream,
    pub text: String,
}

impl CratePath {
    /// String literal naming `item` under the crate, for serde attributes.
    pub(crate) fn item_path(&self, item: &str) -> String {
        format!("{}::{item}", self.text)
    }
}

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `mason` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> CratePath {
    let tokens = crate_path.map_or_else(|| quote! { mason }, |path| quote! { #path });
    let text = tokens.to_string().replace(' ', "");
    CratePath { tokens, text }
}

#[cfg(test)]
mod tests {
    //! Unit tests for crate path resolution with default and custom paths.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default(None, "mason")]
    #[case::custom(Some("my_alias"), "my_alias")]
    #[case::nested(Some("deps::mason"), "deps::mason")]
    #[case::absolute(Some("::mason"), "::mason")]
    fn resolve_produces_expected_text(#[case] input: Option<&str>, #[case] expected: &str) {
        let parsed = input.map(|s| syn::parse_str::<syn::Path>(s).expect("valid path"));
        let resolved = resolve(parsed.as_ref());
        assert_eq!(resolved.text, expected);
        assert_eq!(resolved.item_path("serde"), format!("{expected}::serde"));
    }
}
