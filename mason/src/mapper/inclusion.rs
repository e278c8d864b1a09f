//! Field inclusion policies for encoded objects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which absent builder fields appear in an encoded object.
///
/// The policy only affects encoding. Merge precedence treats a missing field
/// and a null field alike, so every policy merges to the same builder state;
/// they differ in what the intermediate trees and the textual representation
/// show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inclusion {
    /// Missing and null fields are left out.
    #[default]
    NonNull,
    /// Missing fields are left out; explicit nulls are written as `null`.
    NonAbsent,
    /// Every field is written; missing fields encode as `null`.
    Always,
}

impl Inclusion {
    /// Parse a policy name as accepted by `#[mason(include = "...")]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mason::Inclusion;
    /// assert_eq!(Inclusion::parse("always"), Some(Inclusion::Always));
    /// assert_eq!(Inclusion::parse("sometimes"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "non_null" => Some(Self::NonNull),
            "non_absent" => Some(Self::NonAbsent),
            "always" => Some(Self::Always),
            _ => None,
        }
    }

    /// Returns the policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonNull => "non_null",
            Self::NonAbsent => "non_absent",
            Self::Always => "always",
        }
    }

    /// Returns `true` when a `None` value field is left out under this
    /// policy.
    #[must_use]
    pub const fn omits_none(self) -> bool {
        !matches!(self, Self::Always)
    }
}

impl fmt::Display for Inclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
