//! Builder-routed deserialisation for value types.
//!
//! A value type never decodes directly. Its `Deserialize` implementation
//! resolves the builder it declares, decodes that builder from the input,
//! and builds the value from it. Because the resolution is static, a field
//! typed as a value, or as a collection of values, always comes back as a
//! value produced by its own builder.
//!
//! `#[derive(HasBuilder)]` wires this up automatically. Hand-written pairs
//! call [`deserialize_via_builder`] from their `Deserialize` impl:
//!
//! ```
//! use mason::{Builder, Field, HasBuilder, routing};
//! use serde::{Deserialize, Deserializer, Serialize};
//!
//! #[derive(Clone, Debug, Serialize)]
//! struct Point {
//!     x: Option<i32>,
//! }
//!
//! #[derive(Clone, Debug, Default, Serialize, Deserialize)]
//! struct PointBuilder {
//!     #[serde(default)]
//!     x: Field<i32>,
//! }
//!
//! impl<'de> Deserialize<'de> for Point {
//!     fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
//!         routing::deserialize_via_builder(deserializer)
//!     }
//! }
//!
//! impl HasBuilder for Point {
//!     type Builder = PointBuilder;
//!     fn to_builder(&self) -> PointBuilder {
//!         PointBuilder { x: self.x.into() }
//!     }
//! }
//!
//! impl Builder for PointBuilder {
//!     type Value = Point;
//!     fn build(&self) -> Point {
//!         Point { x: self.x.to_option() }
//!     }
//!     fn overlay(&mut self, staged: Self) {
//!         if !staged.x.is_missing() {
//!             self.x = staged.x;
//!         }
//!     }
//! }
//!
//! let point: Point = serde_json::from_str(r#"{"x": 3, "unknown": true}"#)?;
//! assert_eq!(point.x, Some(3));
//! # Ok::<_, serde_json::Error>(())
//! ```

use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

use crate::{Builder, HasBuilder, MasonResult, TypeResolver, tree};

/// Deserialise `V` by decoding its declared builder and building from it.
///
/// The binding is resolved through [`TypeResolver::global`] so an
/// inconsistent hand registration surfaces as a decode error rather than a
/// silently different builder.
///
/// # Errors
///
/// Returns the deserialiser's error when the builder cannot be resolved or
/// the input does not fit the builder.
pub fn deserialize_via_builder<'de, V, D>(deserializer: D) -> Result<V, D::Error>
where
    V: HasBuilder,
    D: Deserializer<'de>,
{
    TypeResolver::global()
        .resolve::<V>()
        .map_err(D::Error::custom)?;
    let builder = V::Builder::deserialize(deserializer)?;
    Ok(builder.build())
}

/// Decode a document tree into `V` through its builder.
///
/// # Errors
///
/// Returns [`crate::MasonError::Serialization`] when the tree does not fit
/// the builder, including when resolution fails during decoding.
pub fn decode_value<V: HasBuilder>(node: Value) -> MasonResult<V> {
    tree::from_tree(node)
}
