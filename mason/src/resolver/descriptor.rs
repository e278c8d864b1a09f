//! Static type descriptors and value-to-builder bindings.

use std::any::{Any, TypeId};
use std::fmt;

use serde_json::Value;

use crate::{Builder, HasBuilder, MasonResult, tree};

/// Identity of a Rust type, usable as a registry key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    /// Describe `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mason::TypeDescriptor;
    /// let descriptor = TypeDescriptor::of::<Vec<u8>>();
    /// assert_eq!(descriptor.short_name(), "Vec");
    /// assert_eq!(descriptor, TypeDescriptor::of::<Vec<u8>>());
    /// ```
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the described type.
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type name, e.g. `my_app::model::Contact`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the final path segment of the type name without generics.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Decodes a document tree into a boxed value by way of its builder.
pub type DecodeFn = fn(Value) -> MasonResult<Box<dyn Any>>;

/// The declared association between a value type and its builder type.
#[derive(Clone, Copy, Debug)]
pub struct BuilderBinding {
    value: TypeDescriptor,
    builder: TypeDescriptor,
    decode: DecodeFn,
}

impl BuilderBinding {
    /// Bind `V` to the builder it declares through [`HasBuilder::Builder`].
    #[must_use]
    pub fn of<V: HasBuilder>() -> Self {
        Self {
            value: TypeDescriptor::of::<V>(),
            builder: TypeDescriptor::of::<V::Builder>(),
            decode: decode_through::<V>,
        }
    }

    /// Declare a binding by hand, for types registered without a
    /// [`HasBuilder`] implementation.
    #[must_use]
    pub const fn new(value: TypeDescriptor, builder: TypeDescriptor, decode: DecodeFn) -> Self {
        Self {
            value,
            builder,
            decode,
        }
    }

    /// Returns the value type.
    #[must_use]
    pub const fn value(&self) -> TypeDescriptor {
        self.value
    }

    /// Returns the builder type.
    #[must_use]
    pub const fn builder(&self) -> TypeDescriptor {
        self.builder
    }

    /// Decode `node` into the bound builder and build a value from it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Serialization`] when `node` cannot be
    /// decoded into the builder.
    pub fn decode(&self, node: Value) -> MasonResult<Box<dyn Any>> {
        (self.decode)(node)
    }

    /// Returns `true` when both bindings pair the same value and builder.
    #[must_use]
    pub fn declares_same(&self, other: &Self) -> bool {
        self.value == other.value && self.builder == other.builder
    }
}

fn decode_through<V: HasBuilder>(node: Value) -> MasonResult<Box<dyn Any>> {
    let builder: V::Builder = tree::from_tree(node)?;
    Ok(Box::new(builder.build()))
}
