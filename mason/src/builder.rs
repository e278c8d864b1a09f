//! Value and builder traits.
//!
//! A value type implements [`HasBuilder`] and names exactly one builder type;
//! that builder implements [`Builder`] and names the value type back. The
//! pair is fixed at compile time, so the association never depends on the
//! state of an instance. `#[derive(HasBuilder)]` generates both impls and the
//! builder itself.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{MasonResult, merge, tree};

/// An immutable value produced by a [`Builder`].
pub trait HasBuilder: Sized + Serialize + DeserializeOwned + 'static {
    /// The builder this value is produced by.
    type Builder: Builder<Value = Self>;

    /// Create a builder whose every field equals this value's field.
    ///
    /// The builder owns copies of the fields; mutating it never affects
    /// `self`.
    #[must_use]
    fn to_builder(&self) -> Self::Builder;

    /// Encode this value as a document tree.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Serialization`] when encoding fails.
    fn to_tree(&self) -> MasonResult<Value> {
        tree::to_tree(self)
    }

    /// Render this value as JSON text for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Serialization`] when encoding fails.
    fn render(&self) -> MasonResult<String> {
        tree::render(self)
    }
}

/// A mutable builder for a [`HasBuilder`] value.
///
/// Every field is independently missing, null, or set (see
/// [`crate::Field`]). `Default` yields a builder with every field missing.
pub trait Builder: Sized + Default + Serialize + DeserializeOwned + 'static {
    /// The value this builder produces.
    type Value: HasBuilder<Builder = Self>;

    /// Snapshot the current fields into a value.
    ///
    /// The builder is left untouched and the value shares no state with it:
    /// later mutation of the builder never shows through.
    #[must_use]
    fn build(&self) -> Self::Value;

    /// Assign every field of `staged` that is not missing onto `self`.
    ///
    /// Fields `staged` never mentions keep their current state, which is how
    /// a decoded tree is applied to an existing builder.
    fn overlay(&mut self, staged: Self);

    /// Produce an independent copy by encoding to a document tree and
    /// decoding back.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Serialization`] when a field cannot make
    /// the round trip.
    fn deep_clone(&self) -> MasonResult<Self> {
        tracing::debug!(builder = tree::short_type_name::<Self>(), "cloning builder");
        tree::round_trip(self)
    }

    /// Merge `other` into this builder, `other` taking precedence.
    ///
    /// Populated scalar fields of `other` override, collections concatenate,
    /// nested values merge recursively, and absent fields of `other` never
    /// erase data. `other` is not modified. The merged state is staged in
    /// full before any field of `self` changes, so on error `self` is left
    /// as it was.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Serialization`] when either operand
    /// cannot be encoded or the merged tree cannot be decoded.
    fn merge_from(&mut self, other: &Self::Value) -> MasonResult<&mut Self> {
        let incoming = tree::to_tree(other)?;
        self.merge_tree(incoming)
    }

    /// Merge another builder into this one with the same rules as
    /// [`Builder::merge_from`].
    ///
    /// # Errors
    ///
    /// As for [`Builder::merge_from`].
    fn merge_from_builder(&mut self, other: &Self) -> MasonResult<&mut Self> {
        let incoming = tree::to_tree(other)?;
        self.merge_tree(incoming)
    }

    /// Merge an already-encoded tree into this builder.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::NonObjectRoot`] when `incoming` is not an
    /// object, or [`crate::MasonError::Serialization`] when the merged tree
    /// cannot be decoded.
    fn merge_tree(&mut self, incoming: Value) -> MasonResult<&mut Self> {
        tracing::debug!(builder = tree::short_type_name::<Self>(), "merging into builder");
        let current = tree::to_tree(self)?;
        let merged = merge::merge(current, incoming)?;
        self.update_from_tree(merged)
    }

    /// Overlay the fields present in `node` onto this builder.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Serialization`] when `node` cannot be
    /// decoded; `self` is unchanged in that case.
    fn update_from_tree(&mut self, node: Value) -> MasonResult<&mut Self> {
        let staged: Self = tree::from_tree(node)?;
        self.overlay(staged);
        Ok(self)
    }

    /// Encode this builder as a document tree.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Serialization`] when encoding fails.
    fn to_tree(&self) -> MasonResult<Value> {
        tree::to_tree(self)
    }

    /// Render this builder as JSON text for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Serialization`] when encoding fails.
    fn render(&self) -> MasonResult<String> {
        tree::render(self)
    }
}
