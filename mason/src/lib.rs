//! Core crate for the `mason` value/builder framework.
//!
//! Immutable value types are produced exclusively through mutable builders.
//! Builders can be deep-cloned, merged with protobuf-style precedence, and
//! transparently recovered when a value type is deserialised. The
//! [`HasBuilder`] derive (implemented in the companion `mason_macros` crate)
//! declares the static association between a value and its builder and emits
//! the builder itself.
//!
//! ```rust
//! use mason::{Builder, HasBuilder};
//!
//! #[derive(Debug, Clone, PartialEq, HasBuilder)]
//! struct Contact {
//!     id: Option<i64>,
//!     name: Option<String>,
//!     tags: Option<Vec<String>>,
//! }
//!
//! let original = ContactBuilder::new()
//!     .set_id(7)
//!     .set_name("Ada")
//!     .set_tags(vec!["friend".to_owned()])
//!     .build();
//! let update = ContactBuilder::new()
//!     .set_name("Ada Lovelace")
//!     .set_tags(vec!["maths".to_owned()])
//!     .build();
//!
//! let merged = original.to_builder().merge_from(&update)?.build();
//! assert_eq!(merged.id(), Some(&7));
//! assert_eq!(merged.name().map(String::as_str), Some("Ada Lovelace"));
//! assert_eq!(merged.tags().map(Vec::len), Some(2));
//! # Ok::<_, std::sync::Arc<mason::MasonError>>(())
//! ```

pub use mason_macros::HasBuilder;

mod builder;
mod error;
pub mod field;
pub mod mapper;
pub mod merge;
pub mod resolver;
mod result_ext;
pub mod routing;
#[cfg(test)]
mod test_support;
pub mod tree;

pub use builder::{Builder, HasBuilder};
pub use error::MasonError;
pub use field::Field;
pub use mapper::{Inclusion, Mapper, mapper, set_mapper};
pub use merge::merge;
pub use resolver::{BuilderBinding, TypeDescriptor, TypeResolver};
pub use result_ext::MasonResultExt;
pub use tree::NodeKind;

// Re-exported for generated code so downstream crates need not depend on
// serde directly.
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use serde_json;

/// Result type used throughout the crate.
pub type MasonResult<T> = std::result::Result<T, std::sync::Arc<MasonError>>;
