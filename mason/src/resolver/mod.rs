//! Registry of value-to-builder associations.
//!
//! Every value type declares its builder statically through
//! [`HasBuilder::Builder`], so resolution never inspects an instance. The
//! registry caches the binding for each value type the first time it is
//! asked for, keyed by [`std::any::TypeId`], and can also decode a document
//! tree for a type known only by its descriptor or name.
//!
//! Lookups take a shared lock; only the first resolution of a type takes the
//! exclusive lock. Concurrent first resolutions of the same type agree on the
//! binding, so whichever insert lands first wins and the others observe it.

mod descriptor;

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use serde_json::Value;

use crate::{HasBuilder, MasonError, MasonResult};

pub use descriptor::{BuilderBinding, DecodeFn, TypeDescriptor};

static GLOBAL_RESOLVER: LazyLock<TypeResolver> = LazyLock::new(TypeResolver::new);

/// Thread-safe cache of builder bindings.
///
/// # Examples
///
/// ```
/// use mason::{HasBuilder, TypeDescriptor, TypeResolver};
///
/// #[derive(Debug, Clone, PartialEq, HasBuilder)]
/// struct Tag {
///     label: Option<String>,
/// }
///
/// let resolver = TypeResolver::new();
/// let binding = resolver.resolve::<Tag>()?;
/// assert_eq!(binding.builder(), TypeDescriptor::of::<TagBuilder>());
/// assert_eq!(resolver.resolve_name("Tag")?.value(), binding.value());
/// # Ok::<_, std::sync::Arc<mason::MasonError>>(())
/// ```
#[derive(Debug, Default)]
pub struct TypeResolver {
    bindings: RwLock<HashMap<TypeId, BuilderBinding>>,
}

impl TypeResolver {
    /// Create an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide resolver used when value types decode.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_RESOLVER
    }

    /// Register `V` with the builder it declares.
    ///
    /// Registering the same pair again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`MasonError::TypeResolution`] when `V` was already bound to a
    /// different builder.
    pub fn register<V: HasBuilder>(&self) -> MasonResult<BuilderBinding> {
        self.register_binding(BuilderBinding::of::<V>())
    }

    /// Register a binding, typically one declared by hand.
    ///
    /// # Errors
    ///
    /// Returns [`MasonError::TypeResolution`] when the value type was already
    /// bound to a different builder.
    pub fn register_binding(&self, binding: BuilderBinding) -> MasonResult<BuilderBinding> {
        let value = binding.value();
        match self.bindings.write().entry(value.id()) {
            Entry::Occupied(existing) if existing.get().declares_same(&binding) => {
                Ok(*existing.get())
            }
            Entry::Occupied(existing) => {
                let bound = existing.get().builder();
                tracing::warn!(
                    value = value.name(),
                    bound = bound.name(),
                    requested = binding.builder().name(),
                    "conflicting builder registration"
                );
                Err(Arc::new(MasonError::type_resolution(
                    value.name(),
                    format!(
                        "already bound to '{}', cannot rebind to '{}'",
                        bound.name(),
                        binding.builder().name()
                    ),
                )))
            }
            Entry::Vacant(slot) => {
                tracing::debug!(
                    value = value.short_name(),
                    builder = binding.builder().short_name(),
                    "registered builder binding"
                );
                Ok(*slot.insert(binding))
            }
        }
    }

    /// Resolve the builder for `V`, caching the binding on first use.
    ///
    /// # Errors
    ///
    /// Returns [`MasonError::TypeResolution`] when `V` was registered by hand
    /// with a builder other than the one it declares, which leaves its
    /// builder ambiguous.
    pub fn resolve<V: HasBuilder>(&self) -> MasonResult<BuilderBinding> {
        let declared = BuilderBinding::of::<V>();
        let cached = self.bindings.read().get(&declared.value().id()).copied();
        match cached {
            Some(binding) if binding.declares_same(&declared) => Ok(binding),
            Some(binding) => Err(Arc::new(MasonError::type_resolution(
                declared.value().name(),
                format!(
                    "declares builder '{}' but is registered with '{}'",
                    declared.builder().name(),
                    binding.builder().name()
                ),
            ))),
            None => self.register_binding(declared),
        }
    }

    /// Look up the binding for a previously registered type.
    ///
    /// # Errors
    ///
    /// Returns [`MasonError::TypeResolution`] when no builder is registered
    /// for `value`.
    pub fn resolve_descriptor(&self, value: &TypeDescriptor) -> MasonResult<BuilderBinding> {
        self.bindings
            .read()
            .get(&value.id())
            .copied()
            .ok_or_else(|| not_registered(value.name()))
    }

    /// Look up a registered type by name.
    ///
    /// `name` matches either the full type name or, when exactly one
    /// registered type ends with it, the final path segment.
    ///
    /// # Errors
    ///
    /// Returns [`MasonError::TypeResolution`] when no registered type matches
    /// or the short name is shared by several types.
    pub fn resolve_name(&self, name: &str) -> MasonResult<BuilderBinding> {
        let bindings = self.bindings.read();
        if let Some(exact) = bindings.values().find(|b| b.value().name() == name) {
            return Ok(*exact);
        }
        let mut candidates = bindings.values().filter(|b| b.value().short_name() == name);
        match (candidates.next(), candidates.next()) {
            (Some(only), None) => Ok(*only),
            (Some(_), Some(_)) => Err(Arc::new(MasonError::type_resolution(
                name,
                "name is shared by several registered types; use the full path",
            ))),
            (None, _) => Err(not_registered(name)),
        }
    }

    /// Decode `node` into the type described by `value` via its builder.
    ///
    /// # Errors
    ///
    /// Returns [`MasonError::TypeResolution`] when `value` is not registered
    /// or [`MasonError::Serialization`] when decoding fails.
    pub fn decode(&self, value: &TypeDescriptor, node: Value) -> MasonResult<Box<dyn Any>> {
        self.resolve_descriptor(value)?.decode(node)
    }

    /// Decode `node` into `V` via its resolved builder.
    ///
    /// # Errors
    ///
    /// Returns [`MasonError::TypeResolution`] when the binding is ambiguous or
    /// its decoder yields another type, or [`MasonError::Serialization`] when
    /// decoding fails.
    pub fn decode_as<V: HasBuilder>(&self, node: Value) -> MasonResult<V> {
        let binding = self.resolve::<V>()?;
        binding.decode(node)?.downcast::<V>().map(|boxed| *boxed).map_err(|_| {
            Arc::new(MasonError::type_resolution(
                binding.value().name(),
                "registered decoder produced a different type",
            ))
        })
    }

    /// Returns the number of registered bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.read().len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.read().is_empty()
    }

    /// Snapshot the registered bindings, in no particular order.
    #[must_use]
    pub fn bindings(&self) -> Vec<BuilderBinding> {
        self.bindings.read().values().copied().collect()
    }
}

fn not_registered(name: &str) -> Arc<MasonError> {
    Arc::new(MasonError::type_resolution(name, "no builder is registered"))
}
