//! Document tree adapter.
//!
//! Every value and builder round-trips through a [`serde_json::Value`] tree:
//! objects keep their insertion order, arrays are ordered, scalars are
//! strings, numbers, and booleans, and a missing field is simply an absent
//! key. The free functions here use the active mapper; [`crate::Mapper`]
//! offers the same operations under an explicit policy.

mod kind;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{MasonResult, MasonResultExt, mapper};

pub use kind::NodeKind;

/// Encode `value` into a document tree.
///
/// # Errors
///
/// Returns [`crate::MasonError::Serialization`] when `value` cannot be
/// encoded, for example when a map has non-string keys.
///
/// # Examples
///
/// ```
/// use mason::tree::to_tree;
/// use serde_json::json;
///
/// let node = to_tree(&vec![Some(1), None]).expect("encodes");
/// assert_eq!(node, json!([1, null]));
/// ```
pub fn to_tree<T>(value: &T) -> MasonResult<Value>
where
    T: Serialize + ?Sized,
{
    encode(value)
}

/// Decode a document tree into `T`.
///
/// Unknown object fields are ignored and absent builder fields stay missing.
///
/// # Errors
///
/// Returns [`crate::MasonError::Serialization`] when the tree does not fit
/// `T`, for example a string where a number is required.
pub fn from_tree<T>(node: Value) -> MasonResult<T>
where
    T: DeserializeOwned,
{
    decode(node)
}

/// Encode and decode `value`, producing a structurally independent copy.
///
/// # Errors
///
/// Returns [`crate::MasonError::Serialization`] when either direction fails.
pub fn round_trip<T>(value: &T) -> MasonResult<T>
where
    T: Serialize + DeserializeOwned,
{
    decode(encode(value)?)
}

/// Render `value` as JSON text using the active mapper.
///
/// The text is diagnostic output only; its layout is not a stable contract.
///
/// # Errors
///
/// Returns [`crate::MasonError::Serialization`] when encoding fails.
pub fn render<T>(value: &T) -> MasonResult<String>
where
    T: Serialize + ?Sized,
{
    mapper::mapper().render(value)
}

pub(crate) fn encode<T>(value: &T) -> MasonResult<Value>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(value).with_operation(&format!("encode {}", short_type_name::<T>()))
}

pub(crate) fn decode<T>(node: Value) -> MasonResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(node).with_operation(&format!("decode {}", short_type_name::<T>()))
}

/// Final path segment of `T`'s type name, without generic arguments.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests;
