//! Error types produced by builder, merge, and resolution operations.

mod conversions;
mod types;

pub use types::MasonError;
