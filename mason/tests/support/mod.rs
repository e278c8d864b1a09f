//! Value types shared by the integration suites.

use mason::{Builder, HasBuilder};

/// A flat value with optional scalar fields.
#[derive(Debug, Clone, PartialEq, Eq, HasBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<i64>,
}

/// A value nesting another value and a collection.
#[derive(Debug, Clone, PartialEq, Eq, HasBuilder)]
pub struct Complex {
    pub inner: Option<Example>,
    pub strings: Option<Vec<String>>,
}

/// A value holding a collection of values.
#[derive(Debug, Clone, PartialEq, Eq, HasBuilder)]
pub struct Catalogue {
    pub title: Option<String>,
    pub entries: Option<Vec<Example>>,
}

/// A value whose absent fields are always encoded.
#[derive(Debug, Clone, PartialEq, Eq, HasBuilder)]
#[mason(include = "always")]
pub struct AlwaysExample {
    pub id: Option<i32>,
    pub name: Option<String>,
}

/// A value with required fields that fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, HasBuilder)]
pub struct Counter {
    pub label: Option<String>,
    #[mason(default = 10)]
    pub limit: u32,
    pub hits: u64,
}

/// Build an [`Example`] with `id` and `name` set.
#[must_use]
pub fn example(id: i64, name: &str) -> Example {
    ExampleBuilder::new().set_id(id).set_name(name).build()
}
