//! Builds, merges, and decodes contact records.
//!
//! Run with `cargo run --example contacts`.

use std::sync::Arc;

use mason::{Builder, HasBuilder, MasonError, MasonResultExt, TypeResolver};

/// A postal address nested inside a contact.
#[derive(Debug, Clone, PartialEq, Eq, HasBuilder)]
struct Address {
    street: Option<String>,
    city: Option<String>,
}

/// A contact record as stored by an address book.
#[derive(Debug, Clone, PartialEq, Eq, HasBuilder)]
#[serde(rename_all = "camelCase")]
struct Contact {
    id: Option<u64>,
    display_name: Option<String>,
    address: Option<Address>,
    tags: Option<Vec<String>>,
}

#[expect(clippy::print_stdout, reason = "the example reports its results on stdout")]
fn main() -> Result<(), Arc<MasonError>> {
    let stored = ContactBuilder::new()
        .set_id(42_u64)
        .set_display_name("Grace")
        .set_address(
            AddressBuilder::new()
                .set_street("1 Harbour Row")
                .set_city("Arlington")
                .build(),
        )
        .set_tags(vec!["navy".to_owned()])
        .build();

    let edit = ContactBuilder::new()
        .set_display_name("Grace Hopper")
        .set_address(AddressBuilder::new().set_city("New York").build())
        .set_tags(vec!["cobol".to_owned()])
        .build();

    let mut draft = stored.to_builder();
    draft.merge_from(&edit)?;
    let merged = draft.build();
    println!("merged: {merged}");

    let copy = draft.deep_clone()?;
    draft.clear_tags();
    println!("copy keeps tags: {copy}");

    let decoded: Contact = serde_json::from_str(
        r#"{"id": 7, "displayName": "Ada", "address": {"city": "London"}, "extra": true}"#,
    )
    .with_operation("decode contact")?;
    println!("decoded: {decoded}");

    let resolver = TypeResolver::global();
    let binding = resolver.resolve_name("Contact")?;
    println!("{} is built by {}", binding.value(), binding.builder());
    Ok(())
}
