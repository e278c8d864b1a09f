//! Steps covering builder-routed decoding scenarios.

use anyhow::{Context, Result, anyhow, ensure};
use mason::routing;
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{split_list, unquote};

use crate::fixtures::MasonWorld;
use crate::support::{Complex, Example};

#[given("the JSON document {document}")]
fn json_document(world: &MasonWorld, document: String) -> Result<()> {
    let node = serde_json::from_str(unquote(&document)).context("document is valid JSON")?;
    world.document.set(node);
    Ok(())
}

#[when("the document is decoded as a complex value")]
fn decode_document(world: &MasonWorld) -> Result<()> {
    let node = world
        .document
        .take()
        .ok_or_else(|| anyhow!("JSON document unavailable"))?;
    match routing::decode_value::<Complex>(node) {
        Ok(value) => world.decoded.set(value),
        Err(err) => world.decode_error.set(err),
    }
    Ok(())
}

fn decoded(world: &MasonWorld) -> Result<Complex> {
    let value = world
        .decoded
        .take()
        .ok_or_else(|| anyhow!("decoded value unavailable"))?;
    world.decoded.set(value.clone());
    Ok(value)
}

#[then("the decoded inner id is {id}")]
fn decoded_inner_id(world: &MasonWorld, id: String) -> Result<()> {
    let value = decoded(world)?;
    let expected: i64 = unquote(&id).parse().context("numeric id")?;
    ensure!(
        value.inner().and_then(Example::id) == Some(&expected),
        "unexpected inner id in {value:?}"
    );
    Ok(())
}

#[then("the decoded strings are {strings}")]
fn decoded_strings(world: &MasonWorld, strings: String) -> Result<()> {
    let value = decoded(world)?;
    ensure!(
        value.strings() == Some(&split_list(&strings)),
        "unexpected strings in {value:?}"
    );
    Ok(())
}

#[then("decoding fails with a serialization error")]
fn decoding_fails(world: &MasonWorld) -> Result<()> {
    ensure!(world.decoded.is_empty(), "document unexpectedly decoded");
    let err = world
        .decode_error
        .take()
        .ok_or_else(|| anyhow!("decode error unavailable"))?;
    ensure!(err.is_serialization(), "unexpected error {err}");
    Ok(())
}
