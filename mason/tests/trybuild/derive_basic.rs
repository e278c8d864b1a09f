//! Trybuild fixture exercising the generated builder surface.

use mason::{Builder, Field, HasBuilder, MasonResult};

/// A value with optional, required, and renamed fields.
#[derive(Debug, Clone, PartialEq, HasBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    handle: Option<String>,
    #[serde(alias = "alias")]
    display_name: Option<String>,
    #[mason(default = 1)]
    version: u16,
    r#type: Option<String>,
}

/// A value with no fields at all.
#[derive(Debug, Clone, PartialEq, HasBuilder)]
struct Empty {}

fn main() -> MasonResult<()> {
    let mut builder = ProfileBuilder::new();
    builder.set_handle("ada").set_display_name_null().set_type("person");
    let state: &Field<String> = builder.display_name_field();
    assert!(state.is_null());

    let profile: Profile = builder.build();
    let _: Option<&String> = profile.handle();
    let _: &u16 = profile.version();
    let _: Option<&String> = profile.r#type();

    let copy: ProfileBuilder = profile.to_builder().deep_clone()?;
    let _: String = copy.to_string();

    let mut empty = EmptyBuilder::new();
    empty.merge_from(&Empty {})?;
    let _: Empty = empty.build();
    Ok(())
}
