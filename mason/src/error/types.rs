//! Primary error enum for value/builder operations.

use figment::Error as FigmentError;
use thiserror::Error;

use crate::tree::NodeKind;

/// Errors that can occur while cloning, merging, or decoding values.
///
/// Malformed or unknown input data is not an error: unknown fields are
/// dropped, absent fields stay missing, and `null` on a primitive field
/// falls back to its default. Only failures of the document tree adapter
/// itself and type-registration defects surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MasonError {
    /// The document tree adapter could not encode or decode a value.
    #[error("failed to {operation}: {source}")]
    Serialization {
        /// Operation that was being performed, e.g. `"encode Contact"`.
        operation: String,
        /// Underlying encoder or decoder failure.
        #[source]
        source: serde_json::Error,
    },

    /// A merge operand did not encode to an object tree.
    #[error("cannot merge {operand} tree: expected an object, found {found}")]
    NonObjectRoot {
        /// Which side of the merge was malformed (`"old"` or `"new"`).
        operand: &'static str,
        /// Node kind actually produced by the encoder.
        found: NodeKind,
    },

    /// A value type's builder association could not be determined.
    #[error("cannot resolve builder for '{value_type}': {message}")]
    TypeResolution {
        /// Name of the value type being resolved.
        value_type: String,
        /// Human-readable explanation of the failure.
        message: String,
    },

    /// The mapper configuration could not be loaded.
    #[error("failed to load mapper configuration: {0}")]
    Configuration(#[from] Box<FigmentError>),
}

impl MasonError {
    /// Construct a serialisation error for `operation`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mason::MasonError;
    /// let source = serde_json::from_str::<u8>("300").unwrap_err();
    /// let err = MasonError::serialization("decode u8", source);
    /// assert!(err.is_serialization());
    /// assert!(err.to_string().starts_with("failed to decode u8"));
    /// ```
    #[must_use]
    pub fn serialization(operation: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            operation: operation.into(),
            source,
        }
    }

    /// Construct a type resolution error for `value_type`.
    #[must_use]
    pub fn type_resolution(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TypeResolution {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for failures of the document tree adapter, including
    /// merge operands that did not encode to objects.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. } | Self::NonObjectRoot { .. })
    }

    /// Returns `true` when a builder association could not be resolved.
    #[must_use]
    pub const fn is_type_resolution(&self) -> bool {
        matches!(self, Self::TypeResolution { .. })
    }
}
