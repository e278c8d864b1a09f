//! Merge engine for document trees.
//!
//! Two object trees combine field by field, with the newer tree taking
//! precedence in the manner of protobuf's `mergeFrom`. For every field of the
//! new tree:
//!
//! 1. an old field that is missing or null takes the new node verbatim;
//! 2. two arrays concatenate, old elements first;
//! 3. two objects merge recursively;
//! 4. a null new node keeps the old node, so a merge never nulls out data;
//! 5. anything else is overwritten by the new node.
//!
//! Fields only present in the old tree are retained. Object order follows
//! the old tree, with fields new to a level appended at its end.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::{MasonError, MasonResult, tree::NodeKind};

/// Merge `new` into `old`, returning the combined tree.
///
/// # Errors
///
/// Returns [`MasonError::NonObjectRoot`] when either operand is not an
/// object; the rules are only defined from an object root.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let merged = mason::merge(
///     json!({"id": 123, "name": "test", "tags": ["a"]}),
///     json!({"name": "new", "created_at": 1, "tags": ["b"], "id": null}),
/// )?;
/// assert_eq!(
///     merged,
///     json!({"id": 123, "name": "new", "tags": ["a", "b"], "created_at": 1})
/// );
/// # Ok::<_, std::sync::Arc<mason::MasonError>>(())
/// ```
pub fn merge(old: Value, new: Value) -> MasonResult<Value> {
    let (mut target, incoming) = match (old, new) {
        (Value::Object(target), Value::Object(incoming)) => (target, incoming),
        (Value::Object(_), other) => return Err(non_object("new", &other)),
        (other, _) => return Err(non_object("old", &other)),
    };
    merge_objects(&mut target, incoming);
    Ok(Value::Object(target))
}

/// Merge the fields of `incoming` into `target` in place.
///
/// Nodes are moved out of `incoming` rather than cloned.
pub fn merge_objects(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, node) in incoming {
        match target.get_mut(&key) {
            Some(existing) => merge_field(&key, existing, node),
            None => {
                tracing::trace!(field = %key, "old field missing; taking new node");
                target.insert(key, node);
            }
        }
    }
}

/// Fold `layers` into `base` from left to right.
///
/// # Errors
///
/// Returns [`MasonError::NonObjectRoot`] when the base or any layer is not an
/// object.
pub fn merge_all<I>(base: Value, layers: I) -> MasonResult<Value>
where
    I: IntoIterator<Item = Value>,
{
    layers.into_iter().try_fold(base, merge)
}

fn merge_field(key: &str, existing: &mut Value, node: Value) {
    if existing.is_null() {
        tracing::trace!(field = %key, "old field null; taking new node");
        *existing = node;
        return;
    }
    match (existing, node) {
        (Value::Array(items), Value::Array(appended)) => {
            tracing::trace!(field = %key, appended = appended.len(), "concatenating arrays");
            items.extend(appended);
        }
        (Value::Object(fields), Value::Object(nested)) => merge_objects(fields, nested),
        (_, Value::Null) => {
            tracing::trace!(field = %key, "new field null; keeping old node");
        }
        (slot, replacement) => {
            tracing::trace!(field = %key, "overwriting old node");
            *slot = replacement;
        }
    }
}

fn non_object(operand: &'static str, node: &Value) -> Arc<MasonError> {
    Arc::new(MasonError::NonObjectRoot {
        operand,
        found: NodeKind::of(Some(node)),
    })
}
