//! Trait-based conversions between external error types and `MasonError`.

use figment::Error as FigmentError;

use super::MasonError;

/// Convert bare encoder or decoder failures into
/// [`MasonError::Serialization`] when no operation context is available.
impl From<serde_json::Error> for MasonError {
    fn from(e: serde_json::Error) -> Self {
        Self::serialization(
            format!("process document tree at line {}, column {}", e.line(), e.column()),
            e,
        )
    }
}

impl From<FigmentError> for MasonError {
    fn from(e: FigmentError) -> Self {
        Self::Configuration(Box::new(e))
    }
}
