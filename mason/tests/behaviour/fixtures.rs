//! Shared fixtures for the behavioural scenarios.

use std::sync::Arc;

use mason::MasonError;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;

use crate::support::{Complex, ComplexBuilder, Example, ExampleBuilder};

/// Scenario state shared between merge and decoding steps.
#[derive(Debug, Default, ScenarioState)]
pub struct MasonWorld {
    pub base: Slot<ExampleBuilder>,
    pub update: Slot<ExampleBuilder>,
    pub merged: Slot<Example>,
    pub complex_base: Slot<ComplexBuilder>,
    pub complex_update: Slot<ComplexBuilder>,
    pub complex_merged: Slot<Complex>,
    pub document: Slot<Value>,
    pub decoded: Slot<Complex>,
    pub decode_error: Slot<Arc<MasonError>>,
}

/// Creates a clean world for each scenario.
#[fixture]
pub fn world() -> MasonWorld {
    MasonWorld::default()
}
