//! Steps covering builder merge scenarios.

use anyhow::{Context, Result, anyhow, ensure};
use mason::Builder;
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{split_list, unquote};

use crate::fixtures::MasonWorld;
use crate::support::{ComplexBuilder, Example, ExampleBuilder};

fn parse_number(raw: &str) -> Result<i64> {
    unquote(raw)
        .parse()
        .with_context(|| format!("expected a number, got {raw}"))
}

#[given("a base example with id {id} and name {name}")]
fn base_example(world: &MasonWorld, id: String, name: String) -> Result<()> {
    ensure!(world.base.is_empty(), "base example already initialised");
    let mut builder = ExampleBuilder::new();
    builder.set_id(parse_number(&id)?).set_name(unquote(&name));
    world.base.set(builder);
    Ok(())
}

#[given("an update example with name {name} and created at {created_at}")]
fn update_example(world: &MasonWorld, name: String, created_at: String) -> Result<()> {
    let mut builder = ExampleBuilder::new();
    builder
        .set_name(unquote(&name))
        .set_created_at(parse_number(&created_at)?);
    world.update.set(builder);
    Ok(())
}

#[given("an update example whose name is null")]
fn update_with_null_name(world: &MasonWorld) {
    let mut builder = ExampleBuilder::new();
    builder.set_name_null();
    world.update.set(builder);
}

#[when("the update is merged into the base")]
fn merge_update(world: &MasonWorld) -> Result<()> {
    let mut base = world
        .base
        .take()
        .ok_or_else(|| anyhow!("base example unavailable"))?;
    let update = world
        .update
        .take()
        .ok_or_else(|| anyhow!("update example unavailable"))?;
    let merged = base.merge_from(&update.build())?.build();
    world.merged.set(merged);
    Ok(())
}

fn merged(world: &MasonWorld) -> Result<Example> {
    let value = world
        .merged
        .take()
        .ok_or_else(|| anyhow!("merged example unavailable"))?;
    world.merged.set(value.clone());
    Ok(value)
}

#[then("the merged id is {id}")]
fn merged_id(world: &MasonWorld, id: String) -> Result<()> {
    let value = merged(world)?;
    let expected = parse_number(&id)?;
    ensure!(value.id() == Some(&expected), "unexpected id in {value:?}");
    Ok(())
}

#[then("the merged name is {name}")]
fn merged_name(world: &MasonWorld, name: String) -> Result<()> {
    let value = merged(world)?;
    ensure!(
        value.name().map(String::as_str) == Some(unquote(&name)),
        "unexpected name in {value:?}"
    );
    Ok(())
}

#[then("the merged email is absent")]
fn merged_email_absent(world: &MasonWorld) -> Result<()> {
    let value = merged(world)?;
    ensure!(value.email().is_none(), "email present in {value:?}");
    Ok(())
}

#[then("the merged created at is {created_at}")]
fn merged_created_at(world: &MasonWorld, created_at: String) -> Result<()> {
    let value = merged(world)?;
    let expected = parse_number(&created_at)?;
    ensure!(
        value.created_at() == Some(&expected),
        "unexpected created_at in {value:?}"
    );
    Ok(())
}

#[given("a base complex with id {id} and strings {strings}")]
fn base_complex(world: &MasonWorld, id: String, strings: String) -> Result<()> {
    let inner = ExampleBuilder::new().set_id(parse_number(&id)?).build();
    let mut builder = ComplexBuilder::new();
    builder.set_inner(inner).set_strings(split_list(&strings));
    world.complex_base.set(builder);
    Ok(())
}

#[given("an update complex with name {name} and strings {strings}")]
fn update_complex(world: &MasonWorld, name: String, strings: String) {
    let inner = ExampleBuilder::new().set_name(unquote(&name)).build();
    let mut builder = ComplexBuilder::new();
    builder.set_inner(inner).set_strings(split_list(&strings));
    world.complex_update.set(builder);
}

#[when("the complex update is merged into the base")]
fn merge_complex(world: &MasonWorld) -> Result<()> {
    let mut base = world
        .complex_base
        .take()
        .ok_or_else(|| anyhow!("base complex unavailable"))?;
    let update = world
        .complex_update
        .take()
        .ok_or_else(|| anyhow!("update complex unavailable"))?;
    let merged = base.merge_from(&update.build())?.build();
    world.complex_merged.set(merged);
    Ok(())
}

#[then("the merged strings are {strings}")]
fn merged_strings(world: &MasonWorld, strings: String) -> Result<()> {
    let value = world
        .complex_merged
        .take()
        .ok_or_else(|| anyhow!("merged complex unavailable"))?;
    ensure!(
        value.strings() == Some(&split_list(&strings)),
        "unexpected strings in {value:?}"
    );
    world.complex_merged.set(value);
    Ok(())
}

#[then("the merged inner id is {id}")]
fn merged_inner_id(world: &MasonWorld, id: String) -> Result<()> {
    let value = world
        .complex_merged
        .take()
        .ok_or_else(|| anyhow!("merged complex unavailable"))?;
    let expected = parse_number(&id)?;
    ensure!(
        value.inner().and_then(Example::id) == Some(&expected),
        "unexpected inner id in {value:?}"
    );
    world.complex_merged.set(value);
    Ok(())
}

#[then("the merged inner name is {name}")]
fn merged_inner_name(world: &MasonWorld, name: String) -> Result<()> {
    let value = world
        .complex_merged
        .take()
        .ok_or_else(|| anyhow!("merged complex unavailable"))?;
    let inner = value.inner().cloned().context("inner value present")?;
    ensure!(
        inner.name().map(String::as_str) == Some(unquote(&name)),
        "unexpected inner name in {inner:?}"
    );
    world.complex_merged.set(value);
    Ok(())
}
