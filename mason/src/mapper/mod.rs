//! Process-wide configuration of the document tree adapter.
//!
//! A [`Mapper`] carries the encoding policy every builder operation reads:
//! which absent fields appear in encoded objects and how the textual
//! representation is laid out. One mapper is installed globally and can be
//! swapped with [`set_mapper`]; an individual mapper can also be applied to a
//! single call through [`Mapper::to_tree`] and friends without touching the
//! global instance.
//!
//! The lenient decoding rules are not configurable: unknown fields are
//! ignored, `null` is tolerated on primitive fields, and value types always
//! decode through their builders.

mod inclusion;
mod scope;

use std::sync::{Arc, LazyLock};

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{MasonResult, MasonResultExt, tree};

pub use inclusion::Inclusion;
pub(crate) use scope::active_inclusion;

/// Prefix applied to environment variables read by [`Mapper::load`].
pub const ENV_PREFIX: &str = "MASON_";

static GLOBAL: LazyLock<RwLock<Arc<Mapper>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Mapper::default())));

/// Encoding policy for the document tree adapter.
///
/// # Examples
///
/// ```
/// use mason::{Inclusion, Mapper};
///
/// let mapper = Mapper::default().with_inclusion(Inclusion::Always);
/// assert_eq!(mapper.inclusion(), Inclusion::Always);
/// assert!(!mapper.pretty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mapper {
    inclusion: Inclusion,
    pretty: bool,
}

impl Mapper {
    /// Create a mapper with the default policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inclusion: Inclusion::NonNull,
            pretty: false,
        }
    }

    /// Load a mapper from defaults overlaid with `MASON_`-prefixed
    /// environment variables (`MASON_INCLUSION`, `MASON_PRETTY`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Configuration`] when an environment value
    /// cannot be parsed.
    pub fn load() -> MasonResult<Self> {
        Self::from_figment(
            &Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Extract a mapper from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Configuration`] when extraction fails.
    pub fn from_figment(figment: &Figment) -> MasonResult<Self> {
        figment.extract::<Self>().into_mason()
    }

    /// Returns the inclusion policy.
    #[must_use]
    pub const fn inclusion(&self) -> Inclusion {
        self.inclusion
    }

    /// Returns whether textual output is pretty-printed.
    #[must_use]
    pub const fn pretty(&self) -> bool {
        self.pretty
    }

    /// Return a copy with a different inclusion policy.
    #[must_use]
    pub const fn with_inclusion(mut self, inclusion: Inclusion) -> Self {
        self.inclusion = inclusion;
        self
    }

    /// Return a copy with pretty-printing toggled.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Encode `value` into a document tree under this mapper's policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Serialization`] when encoding fails.
    pub fn to_tree<T>(&self, value: &T) -> MasonResult<Value>
    where
        T: Serialize + ?Sized,
    {
        scope::with_active(*self, || tree::encode(value))
    }

    /// Decode a document tree into `T` under this mapper's policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Serialization`] when decoding fails.
    pub fn from_tree<T>(&self, node: Value) -> MasonResult<T>
    where
        T: DeserializeOwned,
    {
        scope::with_active(*self, || tree::decode(node))
    }

    /// Render `value` as JSON text under this mapper's policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MasonError::Serialization`] when encoding fails.
    pub fn render<T>(&self, value: &T) -> MasonResult<String>
    where
        T: Serialize + ?Sized,
    {
        let node = self.to_tree(value)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&node)
        } else {
            serde_json::to_string(&node)
        };
        text.with_operation("render document tree")
    }
}

/// Returns the mapper used by operations that are not given one explicitly.
///
/// Inside [`Mapper::to_tree`] and the other scoped calls this is the scoped
/// mapper; everywhere else it is the global instance.
#[must_use]
pub fn mapper() -> Arc<Mapper> {
    scope::scoped().map_or_else(|| Arc::clone(&GLOBAL.read()), Arc::new)
}

/// Replace the global mapper, returning the previous one.
///
/// # Examples
///
/// ```
/// use mason::{Inclusion, Mapper, mapper, set_mapper};
///
/// let previous = set_mapper(Mapper::default().with_pretty(true));
/// assert!(mapper().pretty());
/// set_mapper(*previous);
/// ```
pub fn set_mapper(replacement: Mapper) -> Arc<Mapper> {
    tracing::debug!(?replacement, "installing global mapper");
    std::mem::replace(&mut *GLOBAL.write(), Arc::new(replacement))
}
