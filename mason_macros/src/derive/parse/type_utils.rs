//! Type introspection helpers.
//!
//! These utilities perform shallow inspection of `syn::Type` values to
//! recognise `Option<T>` fields, which the builder stores unwrapped.

use syn::{GenericArgument, PathArguments, Type};

/// Returns the inner type if `ty` is `Option<T>`.
///
/// The check is shallow: only the final path segment is compared, so
/// `std::option::Option<T>` matches and `Option<Option<T>>` yields
/// `Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    if p.qself.is_some() {
        return None;
    }
    let last = p.path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(angle_args) = &last.arguments else {
        return None;
    };
    match angle_args.args.first()? {
        GenericArgument::Type(inner) if angle_args.args.len() == 1 => Some(inner),
        _ => None,
    }
}
