//! Tri-state storage for builder fields.
//!
//! A builder field is either [`Field::Missing`] (never set), [`Field::Null`]
//! (explicitly set to nothing), or [`Field::Value`]. Merge precedence treats
//! missing and null alike, but keeping them apart lets a builder overlay a
//! document tree without clobbering fields the tree never mentioned.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::mapper::{self, Inclusion};

/// A builder field that distinguishes "unset" from "set to null".
///
/// # Examples
///
/// ```
/// use mason::Field;
///
/// let mut name: Field<String> = Field::default();
/// assert!(name.is_missing());
/// name.set_null();
/// assert!(name.is_null() && name.is_absent());
/// name.set("Ada".to_owned());
/// assert_eq!(name.as_option().map(String::as_str), Some("Ada"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// The field was never set.
    Missing,
    /// The field was explicitly set to null.
    Null,
    /// The field holds a value.
    Value(T),
}

impl<T> Field<T> {
    /// Returns `true` when the field was never set.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns `true` when the field was explicitly set to null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` when the field is missing or null.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        !self.is_set()
    }

    /// Returns `true` when the field holds a value.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` when the active mapper's inclusion policy drops this
    /// field from encoded output.
    ///
    /// Generated builders use this as their `skip_serializing_if` predicate
    /// unless the value type fixes its own policy.
    #[must_use]
    pub fn is_omitted(&self) -> bool {
        self.is_omitted_under(mapper::active_inclusion())
    }

    /// Returns `true` when `inclusion` drops this field from encoded output.
    #[must_use]
    pub const fn is_omitted_under(&self, inclusion: Inclusion) -> bool {
        match inclusion {
            Inclusion::Always => false,
            Inclusion::NonAbsent => self.is_missing(),
            Inclusion::NonNull => self.is_absent(),
        }
    }

    /// Borrow the held value, if any.
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Missing | Self::Null => None,
        }
    }

    /// Mutably borrow the held value, if any.
    #[must_use]
    pub const fn as_option_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Missing | Self::Null => None,
        }
    }

    /// Consume the field, returning the held value, if any.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Missing | Self::Null => None,
        }
    }

    /// Store `value`, returning the previous state.
    pub fn set(&mut self, value: T) -> Self {
        std::mem::replace(self, Self::Value(value))
    }

    /// Mark the field as explicitly null, returning the previous state.
    pub fn set_null(&mut self) -> Self {
        std::mem::replace(self, Self::Null)
    }

    /// Reset the field to missing, returning the previous state.
    pub fn clear(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<T: Clone> Field<T> {
    /// Clone the held value, if any.
    #[must_use]
    pub fn to_option(&self) -> Option<T> {
        self.as_option().cloned()
    }

    /// Clone the held value, falling back to `fallback` when absent.
    #[must_use]
    pub fn value_or_else<F>(&self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.as_option().map_or_else(fallback, Clone::clone)
    }
}

impl<T: Clone + Default> Field<T> {
    /// Clone the held value, falling back to `T::default()` when absent.
    #[must_use]
    pub fn value_or_default(&self) -> T {
        self.value_or_else(T::default)
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T> From<Option<T>> for Field<T> {
    /// `None` becomes [`Field::Missing`]; values cannot record whether an
    /// absent field was null.
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Self::Value)
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_some(value),
            Self::Missing | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    /// Decodes `null` as [`Field::Null`]. Absent keys never reach this impl;
    /// generated builders mark every field `#[serde(default)]` so they stay
    /// [`Field::Missing`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Null, Self::Value))
    }
}

/// Skip predicate for the borrowed `Option` fields a value type encodes
/// through: `None` is left out unless the active policy is
/// [`Inclusion::Always`].
#[doc(hidden)]
#[must_use]
#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde hands skip predicates a reference to the field"
)]
pub fn omit_none<T>(value: &&Option<T>) -> bool {
    value.is_none() && mapper::active_inclusion().omits_none()
}

/// Skip predicate for borrowed `Option` fields of a value type whose policy
/// is fixed to leave out `None`.
#[doc(hidden)]
#[must_use]
#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde hands skip predicates a reference to the field"
)]
pub fn is_none<T>(value: &&Option<T>) -> bool {
    value.is_none()
}

#[cfg(test)]
mod tests {
    //! Unit tests for field state transitions and inclusion predicates.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, Serialize)]
    struct Holder {
        #[serde(default)]
        count: Field<u32>,
    }

    #[rstest]
    #[case::missing(Field::Missing, Inclusion::NonNull, true)]
    #[case::null(Field::Null, Inclusion::NonNull, true)]
    #[case::value(Field::Value(1), Inclusion::NonNull, false)]
    #[case::missing_non_absent(Field::Missing, Inclusion::NonAbsent, true)]
    #[case::null_non_absent(Field::Null, Inclusion::NonAbsent, false)]
    #[case::missing_always(Field::Missing, Inclusion::Always, false)]
    fn omission_follows_inclusion(
        #[case] field: Field<u32>,
        #[case] inclusion: Inclusion,
        #[case] omitted: bool,
    ) {
        assert_eq!(field.is_omitted_under(inclusion), omitted);
    }

    #[test]
    fn setters_return_previous_state() {
        let mut field = Field::Value(3_u32);
        assert_eq!(field.set_null(), Field::Value(3));
        assert_eq!(field.clear(), Field::Null);
        assert!(field.is_missing());
    }

    #[rstest]
    #[case::absent_key(json!({}), Field::Missing)]
    #[case::explicit_null(json!({"count": null}), Field::Null)]
    #[case::present(json!({"count": 9}), Field::Value(9))]
    fn decodes_tri_state(#[case] input: serde_json::Value, #[case] expected: Field<u32>) {
        let holder: Holder = serde_json::from_value(input).expect("holder decodes");
        assert_eq!(holder.count, expected);
    }

    #[test]
    fn absent_primitive_defaults() {
        assert_eq!(Field::<u32>::Null.value_or_default(), 0);
        assert_eq!(Field::Value(5_u32).value_or_default(), 5);
        assert_eq!(Field::<u32>::Missing.value_or_else(|| 11), 11);
    }

    #[test]
    fn option_conversion_never_yields_null() {
        assert_eq!(Field::<u8>::from(None), Field::Missing);
        assert_eq!(Field::<u8>::from(Some(4)), Field::Value(4));
        assert_eq!(Field::from("bare"), Field::Value("bare"));
    }
}
