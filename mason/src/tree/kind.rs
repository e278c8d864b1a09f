//! Classification of document tree nodes.

use std::fmt;

use serde_json::{Map, Value};

/// Shape of a node as seen by the merge engine.
///
/// The engine never looks past this classification: it is unaware of the
/// language-level type a node was encoded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The key is absent from its parent object.
    Missing,
    /// An explicit `null`.
    Null,
    /// An ordered sequence of nodes.
    Array,
    /// A mapping from field names to nodes.
    Object,
    /// A string, number, or boolean.
    Scalar,
}

impl NodeKind {
    /// Classify an optional node; `None` is [`NodeKind::Missing`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mason::NodeKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(NodeKind::of(None), NodeKind::Missing);
    /// assert_eq!(NodeKind::of(Some(&json!(null))), NodeKind::Null);
    /// assert_eq!(NodeKind::of(Some(&json!("x"))), NodeKind::Scalar);
    /// ```
    #[must_use]
    pub const fn of(node: Option<&Value>) -> Self {
        match node {
            None => Self::Missing,
            Some(Value::Null) => Self::Null,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
            Some(Value::Bool(_) | Value::Number(_) | Value::String(_)) => Self::Scalar,
        }
    }

    /// Classify the field `key` of `object`.
    #[must_use]
    pub fn field(object: &Map<String, Value>, key: &str) -> Self {
        Self::of(object.get(key))
    }

    /// Returns `true` for [`NodeKind::Missing`] and [`NodeKind::Null`].
    #[must_use]
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Missing | Self::Null)
    }

    /// Lower-case name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
            Self::Scalar => "scalar",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
