//! Extensions for mapping errors to `MasonResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(MasonError::…))`
//! patterns when converting adapter failures into the crate's
//! `MasonResult<T>` alias (`Result<T, Arc<MasonError>>`).
//!
//! - Use [`MasonResultExt::into_mason`] for error types that implement
//!   `Into<MasonError>` (e.g., `figment::Error`).
//! - Use [`MasonResultExt::with_operation`] for `serde_json::Error` results so the
//!   failing operation is named in the message.
//!
//! # Examples
//!
//! ```
//! use mason::{MasonResult, MasonResultExt};
//!
//! fn encode() -> MasonResult<serde_json::Value> {
//!     serde_json::to_value(&42).with_operation("encode answer")
//! }
//! assert_eq!(encode().ok(), Some(serde_json::json!(42)));
//! ```

use std::sync::Arc;

use crate::{MasonError, MasonResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<MasonError>`
/// into a `MasonResult<T>`.
pub trait MasonResultExt<T, E> {
    /// Convert `Result<T, E>` into `MasonResult<T>` using `Into<MasonError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<MasonError>`.
    fn into_mason(self) -> MasonResult<T>;

    /// Convert into `MasonResult<T>`, naming `operation` when the error is a
    /// serialisation failure.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<MasonError>`.
    fn with_operation(self, operation: &str) -> MasonResult<T>
    where
        E: Into<serde_json::Error>;
}

impl<T, E> MasonResultExt<T, E> for Result<T, E>
where
    E: Into<MasonError>,
{
    fn into_mason(self) -> MasonResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }

    fn with_operation(self, operation: &str) -> MasonResult<T>
    where
        E: Into<serde_json::Error>,
    {
        self.map_err(|e| Arc::new(MasonError::serialization(operation, e.into())))
    }
}
